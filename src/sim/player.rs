//! The player character: directional movement and its collision box

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision;
use super::rect::Rect;
use crate::consts::*;

/// Facing direction (y-up: `Up` is +y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Pick a facing from axis input.
    ///
    /// Horizontal wins only when strictly larger, so equal magnitudes
    /// (diagonals) face vertically. Returns `None` for zero input.
    pub fn from_axes(horizontal: f32, vertical: f32) -> Option<Self> {
        if horizontal == 0.0 && vertical == 0.0 {
            return None;
        }
        let dir = if horizontal.abs() > vertical.abs() {
            if horizontal > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if vertical > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        Some(dir)
    }
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Bottom-left corner of the sprite
    pub pos: Vec2,
    pub size: Vec2,
    pub direction: Direction,
    pub moving: bool,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            direction: Direction::Down,
            moving: false,
        }
    }

    /// Collision box: the lower half of the sprite, narrowed on both sides.
    /// Always derived from the current position.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x + PLAYER_BOUNDS_INSET_X,
            self.pos.y,
            self.size.x - 2.0 * PLAYER_BOUNDS_INSET_X,
            self.size.y / 2.0,
        )
    }

    /// Place the player so its collision box starts at `min`
    fn set_bounds_min(&mut self, min: Vec2) {
        self.pos = Vec2::new(min.x - PLAYER_BOUNDS_INSET_X, min.y);
    }

    /// Apply one frame of axis input (each axis in [-1, 1]).
    ///
    /// Facing only changes while moving. A non-positive `dt` leaves the
    /// position untouched.
    pub fn update(&mut self, dt: f32, horizontal: f32, vertical: f32) {
        let horizontal = horizontal.clamp(-1.0, 1.0);
        let vertical = vertical.clamp(-1.0, 1.0);

        let facing = Direction::from_axes(horizontal, vertical);
        self.moving = facing.is_some();

        if let Some(dir) = facing {
            self.direction = dir;
            if dt > 0.0 {
                self.pos += Vec2::new(horizontal, vertical) * PLAYER_SPEED * dt;
            }
        }
    }

    /// Push the player out of any overlapping obstacles
    pub fn resolve_collisions(&mut self, obstacles: &[Rect]) {
        let bounds = self.bounds();
        let min = collision::resolve(bounds, obstacles);
        if min != bounds.min() {
            self.set_bounds_min(min);
        }
    }

    /// Move, then resolve against the map's obstacles
    pub fn step(&mut self, dt: f32, horizontal: f32, vertical: f32, obstacles: &[Rect]) {
        self.update(dt, horizontal, vertical);
        self.resolve_collisions(obstacles);
    }
}
