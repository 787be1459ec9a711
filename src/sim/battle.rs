//! Quiz battle state machine
//!
//! NotStarted -> InProgress -> Completed. Each question is answered once,
//! then advanced past; the verdict is decided when the last question is
//! advanced past. Calls made in the wrong state are ignored.

use serde::{Deserialize, Serialize};

use super::boss::BossArchetype;
use super::quiz::{self, Question};
use crate::consts::{CHOICES_PER_QUESTION, PASS_THRESHOLD};
use crate::error::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleState {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Undecided,
    Passed,
    Failed,
}

/// Shown after a question is answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerFeedback {
    Correct,
    Wrong { correct_answer: String },
}

impl AnswerFeedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerFeedback::Correct)
    }

    pub fn message(&self) -> String {
        match self {
            AnswerFeedback::Correct => "Correct!".to_string(),
            AnswerFeedback::Wrong { correct_answer } => {
                format!("Wrong! The correct answer is: {correct_answer}")
            }
        }
    }
}

/// One quiz battle against one boss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleSession {
    questions: Vec<Question>,
    index: usize,
    correct_count: u32,
    state: BattleState,
    verdict: Verdict,
    /// Set once the current question has been answered
    feedback: Option<AnswerFeedback>,
    /// Seconds spent in progress (presentation only)
    elapsed: f32,
}

impl BattleSession {
    /// Session using the archetype's built-in question bank
    pub fn for_archetype(archetype: BossArchetype) -> Self {
        Self::from_questions(quiz::archetype_bank(archetype))
    }

    /// Session over a custom bank, validated for size and answer indices
    pub fn with_questions(questions: Vec<Question>) -> Result<Self, QuizError> {
        quiz::validate_bank(&questions)?;
        Ok(Self::from_questions(questions))
    }

    fn from_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            index: 0,
            correct_count: 0,
            state: BattleState::NotStarted,
            verdict: Verdict::Undecided,
            feedback: None,
            elapsed: 0.0,
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_in_progress(&self) -> bool {
        self.state == BattleState::InProgress
    }

    pub fn is_completed(&self) -> bool {
        self.state == BattleState::Completed
    }

    /// Question currently on screen
    pub fn current_question(&self) -> Option<&Question> {
        if self.state != BattleState::InProgress {
            return None;
        }
        self.questions.get(self.index)
    }

    /// Begin the quiz. Only a fresh session can be started.
    pub fn start(&mut self) -> bool {
        if self.state != BattleState::NotStarted {
            log::debug!("Ignoring start: battle already {:?}", self.state);
            return false;
        }
        self.index = 0;
        self.correct_count = 0;
        self.verdict = Verdict::Undecided;
        self.feedback = None;
        self.elapsed = 0.0;
        self.state = BattleState::InProgress;

        // An empty bank has nothing to ask
        if self.questions.is_empty() {
            self.finish();
        }
        true
    }

    /// Answer the current question. Returns the feedback, or `None` if the
    /// answer was ignored (wrong state, already answered, index out of range).
    pub fn answer(&mut self, choice: usize) -> Option<AnswerFeedback> {
        if self.state != BattleState::InProgress {
            log::debug!("Ignoring answer: battle {:?}", self.state);
            return None;
        }
        if self.feedback.is_some() {
            log::debug!("Ignoring answer: question {} already answered", self.index);
            return None;
        }
        if choice >= CHOICES_PER_QUESTION {
            log::debug!("Ignoring answer: choice {choice} out of range");
            return None;
        }
        let question = self.questions.get(self.index)?;

        let feedback = if question.is_correct(choice) {
            self.correct_count += 1;
            AnswerFeedback::Correct
        } else {
            AnswerFeedback::Wrong {
                correct_answer: question.correct_answer().to_string(),
            }
        };
        self.feedback = Some(feedback.clone());
        Some(feedback)
    }

    /// Move past an answered question. Returns false if ignored.
    pub fn advance(&mut self) -> bool {
        if self.state != BattleState::InProgress || self.feedback.is_none() {
            log::debug!("Ignoring advance: question {} not answered", self.index);
            return false;
        }
        self.feedback = None;
        self.index += 1;
        if self.index >= self.questions.len() {
            self.finish();
        }
        true
    }

    /// Per-tick update while the battle screen is up
    pub fn update(&mut self, dt: f32) {
        if self.state == BattleState::InProgress && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    fn finish(&mut self) {
        self.index = self.questions.len();
        self.verdict = if self.correct_count >= PASS_THRESHOLD {
            Verdict::Passed
        } else {
            Verdict::Failed
        };
        self.state = BattleState::Completed;
        log::info!(
            "Battle finished: {:?} ({}/{})",
            self.verdict,
            self.correct_count,
            self.questions.len()
        );
    }

    /// End-of-battle text, once completed
    pub fn summary(&self) -> Option<String> {
        let text = match self.verdict {
            Verdict::Undecided => return None,
            Verdict::Passed => format!(
                "You defeated the boss!\nCorrect answers: {}/{}",
                self.correct_count,
                self.total()
            ),
            Verdict::Failed => format!(
                "You failed to defeat the boss.\nCorrect answers: {}/{}\nYou needed at least {} correct answers.",
                self.correct_count,
                self.total(),
                PASS_THRESHOLD
            ),
        };
        Some(text)
    }
}
