//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Obstacles resolved in map order
//! - No rendering, file or platform dependencies

pub mod battle;
pub mod boss;
pub mod collision;
pub mod player;
pub mod quiz;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use battle::{AnswerFeedback, BattleSession, BattleState, Verdict};
pub use boss::{ArchetypeInfo, Boss, BossArchetype, BossPhase};
pub use collision::{Overlap, Push, resolve, resolve_one};
pub use player::{Direction, Player};
pub use quiz::{Question, archetype_bank, question_bank};
pub use rect::Rect;
pub use snapshot::{BattleView, BossView, FrameSnapshot, PlayerView};
pub use state::{Encounter, EncounterOutcome, EncounterPhase, GameEvent};
pub use tick::{TickInput, tick};
