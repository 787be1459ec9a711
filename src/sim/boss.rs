//! Boss entity: archetype table, spawn animation, idle float

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::{float_offset, lerp};

/// Boss identity, one per map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossArchetype {
    SteelWard,
    BlazeCinder,
    Memorix,
    Glitchron,
    Exodus,
}

/// Static flavor data for an archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub sprite: &'static str,
    pub battle_background: &'static str,
    /// Index into the question banks
    pub question_bank: usize,
}

const ARCHETYPES: [ArchetypeInfo; MAP_COUNT] = [
    ArchetypeInfo {
        name: "SteelWard",
        description: "A powerful PC Case robot with tough armor.",
        sprite: "sprites/boss_steelward.png",
        battle_background: "backgrounds/steelward_bg.png",
        question_bank: 0,
    },
    ArchetypeInfo {
        name: "BlazeCinder",
        description: "A fiery cooling system robot that overheats its surroundings.",
        sprite: "sprites/boss_blazecinder.png",
        battle_background: "backgrounds/blazecinder_bg.png",
        question_bank: 1,
    },
    ArchetypeInfo {
        name: "Memorix",
        description: "A devious storage device robot with incredible memory.",
        sprite: "sprites/boss_memorix.png",
        battle_background: "backgrounds/memorix_bg.png",
        question_bank: 2,
    },
    ArchetypeInfo {
        name: "Glitchron",
        description: "A powerful PSU and motherboard robot that controls energy flow.",
        sprite: "sprites/boss_glitchron.png",
        battle_background: "backgrounds/glitchron_bg.png",
        question_bank: 3,
    },
    ArchetypeInfo {
        name: "EXODUS",
        description: "The final boss, a menacing AI determined to control the world.",
        sprite: "sprites/boss_exodus.png",
        battle_background: "backgrounds/exodus_bg.png",
        question_bank: 4,
    },
];

impl BossArchetype {
    pub const ALL: [BossArchetype; MAP_COUNT] = [
        BossArchetype::SteelWard,
        BossArchetype::BlazeCinder,
        BossArchetype::Memorix,
        BossArchetype::Glitchron,
        BossArchetype::Exodus,
    ];

    /// Archetype guarding the given map. Unknown indices are `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn info(&self) -> &'static ArchetypeInfo {
        &ARCHETYPES[self.index()]
    }
}

/// Boss lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Fading/scaling in; lasts `SPAWN_DURATION` seconds
    Spawning,
    Active,
}

/// A boss entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub archetype: BossArchetype,
    /// Bottom-left corner of the sprite
    pub pos: Vec2,
    /// Anchor for the float; fixed at construction
    original_y: f32,
    pub size: Vec2,
    pub phase: BossPhase,
    /// Total seconds since construction
    pub elapsed: f32,
    /// Seconds spent spawning (stops growing once active)
    pub spawn_time: f32,
    /// Not used by any rule yet
    pub health: i32,
}

impl Boss {
    pub fn new(archetype: BossArchetype, spawn: Vec2) -> Self {
        Self {
            archetype,
            pos: spawn,
            original_y: spawn.y,
            size: Vec2::splat(BOSS_SIZE),
            phase: BossPhase::Spawning,
            elapsed: 0.0,
            spawn_time: 0.0,
            health: BOSS_HEALTH,
        }
    }

    pub fn name(&self) -> &'static str {
        self.archetype.info().name
    }

    pub fn description(&self) -> &'static str {
        self.archetype.info().description
    }

    pub fn original_y(&self) -> f32 {
        self.original_y
    }

    pub fn is_spawning(&self) -> bool {
        self.phase == BossPhase::Spawning
    }

    /// Advance timers and float. Returns true on the tick the boss becomes active.
    pub fn update(&mut self, dt: f32) -> bool {
        let dt = dt.max(0.0);
        self.elapsed += dt;

        let mut activated = false;
        if self.phase == BossPhase::Spawning {
            self.spawn_time += dt;
            if self.spawn_time >= SPAWN_DURATION {
                self.phase = BossPhase::Active;
                activated = true;
                log::debug!("{} finished spawning", self.name());
            }
        }

        // Floats through the spawn animation too
        self.pos.y = self.original_y + float_offset(self.elapsed);
        activated
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(self.pos, self.size)
    }

    /// Spawn animation progress in [0, 1]; 1.0 once active
    pub fn spawn_progress(&self) -> f32 {
        match self.phase {
            BossPhase::Spawning => (self.spawn_time / SPAWN_DURATION).clamp(0.0, 1.0),
            BossPhase::Active => 1.0,
        }
    }

    /// Sprite scale during the spawn animation
    pub fn spawn_scale(&self) -> f32 {
        lerp(0.4, 1.0, self.spawn_progress())
    }

    /// Sprite alpha during the spawn animation
    pub fn spawn_alpha(&self) -> f32 {
        lerp(0.3, 1.0, self.spawn_progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn boss() -> Boss {
        Boss::new(BossArchetype::Memorix, Vec2::new(200.0, 200.0))
    }

    #[test]
    fn test_archetype_table_lookup() {
        assert_eq!(BossArchetype::from_index(0), Some(BossArchetype::SteelWard));
        assert_eq!(BossArchetype::from_index(4), Some(BossArchetype::Exodus));
        assert_eq!(BossArchetype::from_index(5), None);
        for (i, arch) in BossArchetype::ALL.iter().enumerate() {
            assert_eq!(arch.index(), i);
            assert_eq!(arch.info().question_bank, i);
        }
        assert_eq!(BossArchetype::Exodus.info().name, "EXODUS");
    }

    #[test]
    fn test_new_boss_is_spawning_at_anchor() {
        let b = boss();
        assert!(b.is_spawning());
        assert_eq!(b.pos.y, b.original_y());
        assert_eq!(b.health, BOSS_HEALTH);
        assert_eq!(b.bounds(), Rect::new(200.0, 200.0, 64.0, 64.0));
        assert_eq!(b.spawn_progress(), 0.0);
        assert!((b.spawn_scale() - 0.4).abs() < 1e-6);
        assert!((b.spawn_alpha() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_float_peak_at_quarter_period() {
        let mut b = boss();
        b.update(0.0);
        assert_eq!(b.pos.y, 200.0);

        b.update(PI / (2.0 * FLOAT_SPEED));
        assert!((b.pos.y - 205.0).abs() < 1e-4);
        assert_eq!(b.original_y(), 200.0);
    }

    #[test]
    fn test_spawn_to_active_once() {
        let mut b = boss();
        assert!(!b.update(1.0));
        assert!(b.is_spawning());
        assert!((b.spawn_progress() - 1.0 / 1.5).abs() < 1e-6);

        assert!(b.update(0.5));
        assert_eq!(b.phase, BossPhase::Active);
        assert_eq!(b.spawn_progress(), 1.0);

        // Never re-activates or returns to spawning
        for _ in 0..100 {
            assert!(!b.update(0.1));
            assert_eq!(b.phase, BossPhase::Active);
        }
        assert!((b.spawn_time - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_float_continues_while_spawning() {
        let mut b = boss();
        b.update(0.3);
        assert!(b.is_spawning());
        let expected = 200.0 + FLOAT_AMPLITUDE * (0.3f32 * FLOAT_SPEED).sin();
        assert!((b.pos.y - expected).abs() < 1e-4);
        // Box follows the float
        assert_eq!(b.bounds().y, b.pos.y);
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut b = boss();
        b.update(0.5);
        b.update(-1.0);
        assert!((b.elapsed - 0.5).abs() < 1e-6);
    }
}
