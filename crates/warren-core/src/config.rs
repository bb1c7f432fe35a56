//! Grid configuration
//!
//! Every geometry parameter the pipeline uses is collected here and validated
//! once before generation starts. Defaults give a 4-unit tile, rooms of 6 to
//! 16 tiles a side, and 3-tile corridors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors, reported before any room is placed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tile size must be an even integer >= 2, got {0}")]
    TileSize(i32),

    #[error("room extent range {min}..{max} is empty or below 1 tile")]
    ExtentRange { min: i32, max: i32 },

    #[error("position offset range {min}..{max} is empty")]
    OffsetRange { min: i32, max: i32 },

    #[error("door clearance must be at least 3 tiles, got {0}")]
    DoorClearance(i32),

    #[error("corridor width must be an odd number of tiles >= 3, got {0}")]
    CorridorWidth(i32),

    #[error("smallest room side ({side} tiles) cannot host door clearance ({clearance} tiles)")]
    ClearanceExceedsRoom { side: i32, clearance: i32 },
}

/// Fixed grid parameters for one generation run
///
/// Room extents are drawn from `min_extent..max_extent` tiles and doubled, so
/// every room side is an even number of tiles and room centers land on tile
/// boundaries. Centers are placed at `min_offset..max_offset` tiles from the
/// origin on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side of one tile in world units; even, so half-tile math stays integral
    pub tile_size: i32,
    /// Lower bound of the room extent draw, in tiles
    pub min_extent: i32,
    /// Upper bound (exclusive) of the room extent draw, in tiles
    pub max_extent: i32,
    /// Lower bound of the room center placement draw, in tiles
    pub min_offset: i32,
    /// Upper bound (exclusive) of the room center placement draw, in tiles
    pub max_offset: i32,
    /// Minimum perpendicular overlap for a door between flush rooms, in tiles
    pub door_clearance_tiles: i32,
    /// Corridor width in tiles; odd, a floor strip between two walls
    pub corridor_tiles: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_size: 4,
            min_extent: 3,
            max_extent: 9,
            min_offset: 10,
            max_offset: 40,
            door_clearance_tiles: 3,
            corridor_tiles: 3,
        }
    }
}

impl GridConfig {
    /// Door clearance in world units
    pub fn door_clearance(&self) -> i32 {
        self.door_clearance_tiles * self.tile_size
    }

    /// Corridor width in world units
    pub fn corridor_size(&self) -> i32 {
        self.corridor_tiles * self.tile_size
    }

    /// Check every startup rule; an `Err` here is fatal for generation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size < 2 || self.tile_size % 2 != 0 {
            return Err(ConfigError::TileSize(self.tile_size));
        }
        if self.min_extent < 1 || self.max_extent <= self.min_extent {
            return Err(ConfigError::ExtentRange {
                min: self.min_extent,
                max: self.max_extent,
            });
        }
        if self.max_offset <= self.min_offset {
            return Err(ConfigError::OffsetRange {
                min: self.min_offset,
                max: self.max_offset,
            });
        }
        if self.door_clearance_tiles < 3 {
            return Err(ConfigError::DoorClearance(self.door_clearance_tiles));
        }
        if self.corridor_tiles < 3 || self.corridor_tiles % 2 == 0 {
            return Err(ConfigError::CorridorWidth(self.corridor_tiles));
        }
        // The smallest room side is 2 * min_extent tiles; a flush pair can
        // only take a door if that side still spans the clearance.
        if 2 * self.min_extent < self.door_clearance_tiles {
            return Err(ConfigError::ClearanceExceedsRoom {
                side: 2 * self.min_extent,
                clearance: self.door_clearance_tiles,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_odd_tile_rejected() {
        let cfg = GridConfig {
            tile_size: 5,
            ..GridConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::TileSize(5)));
    }

    #[test]
    fn test_empty_extent_range_rejected() {
        let cfg = GridConfig {
            min_extent: 9,
            max_extent: 9,
            ..GridConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ExtentRange { min: 9, max: 9 })
        );
    }

    #[test]
    fn test_empty_offset_range_rejected() {
        let cfg = GridConfig {
            min_offset: 40,
            max_offset: 10,
            ..GridConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::OffsetRange { min: 40, max: 10 })
        );
    }

    #[test]
    fn test_even_corridor_rejected() {
        let cfg = GridConfig {
            corridor_tiles: 4,
            ..GridConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::CorridorWidth(4)));
    }

    #[test]
    fn test_clearance_wider_than_smallest_room_rejected() {
        let cfg = GridConfig {
            min_extent: 1,
            door_clearance_tiles: 3,
            ..GridConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ClearanceExceedsRoom {
                side: 2,
                clearance: 3
            })
        );
    }

    #[test]
    fn test_world_unit_helpers() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.door_clearance(), 12);
        assert_eq!(cfg.corridor_size(), 12);
    }
}
