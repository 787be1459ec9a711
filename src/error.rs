//! Error types
//!
//! Gameplay calls made out of order are not errors; they are ignored by the
//! state machines. These cover configuration and data problems only.

use std::path::PathBuf;

use thiserror::Error;

/// Map loading failures. All of them are fatal for the current load.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map index {index} out of range (expected 0..{count})")]
    InvalidMapIndex { index: usize, count: usize },

    #[error("map catalog has no definition for map {0}")]
    MissingDefinition(usize),

    #[error("failed to read map catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse map catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Malformed question data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("correct choice index {index} out of range (expected 0..{choices})")]
    InvalidCorrectIndex { index: usize, choices: usize },

    #[error("question bank has {actual} questions (expected {expected})")]
    WrongBankSize { actual: usize, expected: usize },
}

/// Settings file failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
