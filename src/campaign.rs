//! Campaign progression across the maps
//!
//! Defeating a map's boss unlocks the next map. Beating the last boss
//! completes the campaign.

use serde::{Deserialize, Serialize};

use crate::consts::MAP_COUNT;
use crate::error::MapError;

/// Result of recording a defeated boss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    NextMap(usize),
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    current_map: usize,
    defeated: [bool; MAP_COUNT],
    completed: bool,
}

impl Default for Campaign {
    fn default() -> Self {
        Self {
            current_map: 0,
            defeated: [false; MAP_COUNT],
            completed: false,
        }
    }
}

impl Campaign {
    /// Start at `map_index`; out-of-range indices are a configuration error
    pub fn starting_at(map_index: usize) -> Result<Self, MapError> {
        if map_index >= MAP_COUNT {
            return Err(MapError::InvalidMapIndex {
                index: map_index,
                count: MAP_COUNT,
            });
        }
        Ok(Self {
            current_map: map_index,
            ..Self::default()
        })
    }

    pub fn current_map(&self) -> usize {
        self.current_map
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_defeated(&self, map_index: usize) -> bool {
        self.defeated.get(map_index).copied().unwrap_or(false)
    }

    pub fn is_current_boss_defeated(&self) -> bool {
        self.is_defeated(self.current_map)
    }

    pub fn defeated_count(&self) -> usize {
        self.defeated.iter().filter(|d| **d).count()
    }

    /// Map `advance` would move to, if any
    pub fn next_map(&self) -> Option<usize> {
        let next = self.current_map + 1;
        (next < MAP_COUNT).then_some(next)
    }

    /// Mark the current boss defeated and move on
    pub fn advance(&mut self) -> Progress {
        self.defeated[self.current_map] = true;
        if self.current_map + 1 < MAP_COUNT {
            self.current_map += 1;
            log::info!("Advancing to map {}", self.current_map);
            Progress::NextMap(self.current_map)
        } else {
            if !self.completed {
                log::info!("Campaign completed! All bosses defeated.");
            }
            self.completed = true;
            Progress::Completed
        }
    }
}
