//! Player profile and runtime settings
//!
//! Persisted as JSON next to the executable (or wherever the caller points).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Name used when the player leaves the name blank
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Player character look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Avatar {
    #[default]
    Male,
    Female,
}

impl Avatar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Avatar::Male => "Male",
            Avatar::Female => "Female",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Avatar::Male),
            "female" | "f" => Some(Avatar::Female),
            _ => None,
        }
    }

    /// Sprite sheet asset key
    pub fn sprite(&self) -> &'static str {
        match self {
            Avatar::Male => "sprites/player_male.png",
            Avatar::Female => "sprites/player_female.png",
        }
    }
}

/// Who is playing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    name: String,
    pub avatar: Avatar,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            avatar: Avatar::default(),
        }
    }
}

impl PlayerProfile {
    pub fn new(name: &str, avatar: Avatar) -> Self {
        let mut profile = Self {
            name: String::new(),
            avatar,
        };
        profile.set_name(name);
        profile
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed; blank names become the default
    pub fn set_name(&mut self, name: &str) {
        let trimmed = name.trim();
        self.name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            trimmed.to_string()
        };
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile: PlayerProfile,
    /// Map the campaign starts on
    pub starting_map: usize,
    /// JSON map catalog; the built-in maps are used when unset
    pub map_catalog: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: PlayerProfile::default(),
            starting_map: 0,
            map_catalog: None,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        // Files can carry a blank name
        let name = settings.profile.name.clone();
        settings.profile.set_name(&name);
        Ok(settings)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load, falling back to defaults if the file is missing or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
