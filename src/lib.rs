//! TechXplorer - top-down exploration with quiz battles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, boss, quiz battles)
//! - `map`: Map query interface and the JSON map catalog
//! - `campaign`: Progression across the five maps
//! - `game`: Fixed-timestep driver and presentation entry points
//! - `settings`: Player profile and runtime configuration

pub mod campaign;
pub mod error;
pub mod game;
pub mod map;
pub mod settings;
pub mod sim;

pub use campaign::{Campaign, Progress};
pub use error::{MapError, QuizError, SettingsError};
pub use game::Game;
pub use map::{MapCatalog, MapDefinition, MapQuery, MapSnapshot};
pub use settings::{Avatar, PlayerProfile, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame deltas above this are clamped before accumulation
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player movement speed (world units per second)
    pub const PLAYER_SPEED: f32 = 120.0;
    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    /// Horizontal inset of the player's feet box on each side
    pub const PLAYER_BOUNDS_INSET_X: f32 = 4.0;

    /// Boss size (square)
    pub const BOSS_SIZE: f32 = 64.0;
    /// Idle float amplitude (world units) and angular speed (rad/s)
    pub const FLOAT_AMPLITUDE: f32 = 5.0;
    pub const FLOAT_SPEED: f32 = 2.0;
    /// Seconds a freshly created boss stays in its spawn animation
    pub const SPAWN_DURATION: f32 = 1.5;
    /// Starting (decorative) boss health
    pub const BOSS_HEALTH: i32 = 100;

    /// Questions asked per boss battle
    pub const QUESTIONS_PER_BOSS: usize = 5;
    /// Answer choices per question
    pub const CHOICES_PER_QUESTION: usize = 4;
    /// Minimum correct answers to defeat a boss
    pub const PASS_THRESHOLD: u32 = 3;

    /// Number of maps in the campaign (indices 0..MAP_COUNT)
    pub const MAP_COUNT: usize = 5;
    /// Tiled maps are authored in 16px tiles
    pub const UNIT_SCALE: f32 = 1.0 / 16.0;
    /// Spawn points used when a map does not define one
    pub const DEFAULT_PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 100.0);
    pub const DEFAULT_BOSS_SPAWN: Vec2 = Vec2::new(200.0, 200.0);
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Vertical floating offset for a given elapsed time
#[inline]
pub fn float_offset(elapsed: f32) -> f32 {
    consts::FLOAT_AMPLITUDE * (elapsed * consts::FLOAT_SPEED).sin()
}

/// Component-wise approximate equality, used by tests and spawn checks
#[inline]
pub fn approx_eq(a: Vec2, b: Vec2, eps: f32) -> bool {
    (a - b).abs().max_element() <= eps
}
