//! Map queries: spawn points and static obstacles
//!
//! The simulation only sees maps through [`MapQuery`]. [`MapSnapshot::load`]
//! asks the provider once per map load and freezes the answer.

use std::path::Path;
use std::sync::Arc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::MapError;
use crate::sim::Rect;

/// Read-only source of per-map data, in world units
pub trait MapQuery {
    /// Whether the provider knows this map
    fn contains(&self, map_index: usize) -> bool;
    fn player_spawn(&self, map_index: usize) -> Option<Vec2>;
    fn boss_spawn(&self, map_index: usize) -> Option<Vec2>;
    /// Obstacles in the order they should be resolved
    fn collision_rects(&self, map_index: usize) -> Vec<Rect>;
}

/// Immutable result of loading one map
#[derive(Debug, Clone)]
pub struct MapSnapshot {
    pub index: usize,
    pub player_spawn: Vec2,
    pub boss_spawn: Vec2,
    pub obstacles: Arc<[Rect]>,
}

impl MapSnapshot {
    pub fn new(index: usize, player_spawn: Vec2, boss_spawn: Vec2, obstacles: Vec<Rect>) -> Self {
        Self {
            index,
            player_spawn,
            boss_spawn,
            obstacles: obstacles.into(),
        }
    }

    /// Query the provider for `index`. Missing spawns fall back to the
    /// defaults; an index outside the campaign is an error.
    pub fn load(provider: &dyn MapQuery, index: usize) -> Result<Self, MapError> {
        if index >= MAP_COUNT {
            return Err(MapError::InvalidMapIndex {
                index,
                count: MAP_COUNT,
            });
        }
        if !provider.contains(index) {
            return Err(MapError::MissingDefinition(index));
        }

        let player_spawn = provider.player_spawn(index).unwrap_or_else(|| {
            log::warn!("Map {index} has no player spawn, using {DEFAULT_PLAYER_SPAWN}");
            DEFAULT_PLAYER_SPAWN
        });
        let boss_spawn = provider.boss_spawn(index).unwrap_or_else(|| {
            log::warn!("Map {index} has no boss spawn, using {DEFAULT_BOSS_SPAWN}");
            DEFAULT_BOSS_SPAWN
        });
        let obstacles = provider.collision_rects(index);

        log::info!(
            "Loaded map {index}: {} obstacles, player at {player_spawn}, boss at {boss_spawn}",
            obstacles.len()
        );
        Ok(Self::new(index, player_spawn, boss_spawn, obstacles))
    }
}

/// Solid-tile grid, used when a map has no collision objects.
/// Rows are listed top to bottom; `#` marks a solid tile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileGrid {
    pub tile_width: f32,
    pub tile_height: f32,
    pub rows: Vec<String>,
}

impl TileGrid {
    /// One rectangle per solid tile, column by column from the bottom row up
    pub fn to_rects(&self) -> Vec<Rect> {
        let height = self.rows.len();
        let width = self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let cells: Vec<Vec<char>> = self.rows.iter().map(|r| r.chars().collect()).collect();

        let mut rects = Vec::new();
        for x in 0..width {
            for y in 0..height {
                // y counts up from the bottom row
                let row = &cells[height - 1 - y];
                if row.get(x) == Some(&'#') {
                    rects.push(Rect::new(
                        x as f32 * self.tile_width,
                        y as f32 * self.tile_height,
                        self.tile_width,
                        self.tile_height,
                    ));
                }
            }
        }
        rects
    }
}

fn default_unit_scale() -> f32 {
    UNIT_SCALE
}

/// One map as authored, in map pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub player_spawn: Option<Vec2>,
    #[serde(default)]
    pub boss_spawn: Option<Vec2>,
    /// Collision object rectangles
    #[serde(default)]
    pub collision: Vec<Rect>,
    #[serde(default)]
    pub collision_tiles: Option<TileGrid>,
    /// Map pixels to world units
    #[serde(default = "default_unit_scale")]
    pub unit_scale: f32,
}

impl MapDefinition {
    /// Collision objects win; the tile grid is only used when there are none
    pub fn world_obstacles(&self) -> Vec<Rect> {
        let raw = if self.collision.is_empty() {
            self.collision_tiles
                .as_ref()
                .map(TileGrid::to_rects)
                .unwrap_or_default()
        } else {
            self.collision.clone()
        };
        raw.iter().map(|r| r.scaled(self.unit_scale)).collect()
    }
}

/// All campaign maps, indexed by position
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapCatalog {
    pub maps: Vec<MapDefinition>,
}

impl MapCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, map_index: usize) -> Option<&MapDefinition> {
        self.maps.get(map_index)
    }
}

impl MapQuery for MapCatalog {
    fn contains(&self, map_index: usize) -> bool {
        map_index < self.maps.len()
    }

    fn player_spawn(&self, map_index: usize) -> Option<Vec2> {
        let def = self.get(map_index)?;
        def.player_spawn.map(|p| p * def.unit_scale)
    }

    fn boss_spawn(&self, map_index: usize) -> Option<Vec2> {
        let def = self.get(map_index)?;
        def.boss_spawn.map(|p| p * def.unit_scale)
    }

    fn collision_rects(&self, map_index: usize) -> Vec<Rect> {
        self.get(map_index)
            .map(MapDefinition::world_obstacles)
            .unwrap_or_default()
    }
}
