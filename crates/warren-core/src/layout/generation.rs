//! Level assembly
//!
//! The pipeline: scatter rooms at random, settle overlaps until the layout
//! reaches a fixed point, cut doors where rooms ended up flush, then sweep
//! corridors toward any room still holding a doorless wall. Corridors join
//! the arena as rooms and get swept in turn, so a lonely branch can grow a
//! chain of corridors before the level is done.

use serde::{Deserialize, Serialize};

use super::adjacency;
use super::corridor;
use super::rect::Rect;
use super::room::{Room, RoomId};
use super::settle;
use crate::config::GridConfig;
use crate::error::LayoutError;
use crate::rng::LayoutRng;

/// Settling passes allowed before generation gives up
pub const MAX_SETTLE_PASSES: usize = 100;

/// A finished level: chambers, the corridors joining them, and the bounds
///
/// Corridors live in `rooms` alongside the chambers they were appended
/// after, so door targets index straight into the vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelGraph {
    pub rooms: Vec<Room>,
    pub area: Rect,
    pub seed: u64,
}

impl LevelGraph {
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn chambers(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| !room.kind.is_corridor())
    }

    pub fn corridors(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.kind.is_corridor())
    }

    /// Door pairs in the level, each mirrored pair counted once
    pub fn connection_count(&self) -> usize {
        self.rooms.iter().map(|room| room.doors.len()).sum::<usize>() / 2
    }
}

/// Generate a level with `count` rooms
///
/// A seeded run replays the same level. `None` draws a seed from process
/// entropy; either way the seed used ends up in the result.
pub fn generate(
    count: usize,
    cfg: &GridConfig,
    seed: Option<u64>,
) -> Result<LevelGraph, LayoutError> {
    let mut rng = match seed {
        Some(seed) => LayoutRng::new(seed),
        None => LayoutRng::from_entropy(),
    };
    generate_with(count, cfg, &mut rng)
}

/// Generate a level, drawing all randomness from `rng`
pub fn generate_with(
    count: usize,
    cfg: &GridConfig,
    rng: &mut LayoutRng,
) -> Result<LevelGraph, LayoutError> {
    cfg.validate()?;
    if count < 2 {
        return Err(LayoutError::TooFewRooms { requested: count });
    }

    let mut rooms: Vec<Room> = (0..count).map(|id| Room::random(id, cfg, rng)).collect();

    let mut settled = false;
    for _ in 0..MAX_SETTLE_PASSES {
        if settle::settle_pass(&mut rooms, rng) == 0 {
            settled = true;
            break;
        }
    }
    if !settled {
        return Err(LayoutError::SettleLimit {
            passes: MAX_SETTLE_PASSES,
        });
    }

    adjacency::connect_adjacent(&mut rooms, cfg, rng);

    let mut area = rooms[0].rect;
    for room in &rooms[1..] {
        area = area.union(&room.rect);
    }

    // Corridors append to the arena and are swept themselves
    let mut idx = 0;
    while idx < rooms.len() {
        if rooms[idx].has_doorless_wall() {
            corridor::synthesize_corridor(&mut rooms, idx, &area, cfg, rng);
        }
        idx += 1;
    }

    Ok(LevelGraph {
        rooms,
        area,
        seed: rng.seed(),
    })
}
