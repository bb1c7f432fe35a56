//! Door pair creation
//!
//! A door pair joins two rooms across the seam where their rects touch or
//! overlap. The seam span is trimmed by one tile at each end for wall
//! thickness, a door tile is drawn uniformly from what remains, and the same
//! world position is written into each room's own local frame.

use super::room::{Door, Room, TilePoint, Wall};
use crate::config::GridConfig;
use crate::rng::LayoutRng;

/// Plan the mirrored door pair joining `a` to `b` across `wall` (as seen
/// from `a`)
///
/// Returns the door for `a` and the door for `b`, in that order, without
/// mutating either room. `None` means the seam cannot host a door; callers
/// are expected to have checked span clearance first, so a non-positive
/// placement count here is a caller bug in debug builds.
pub fn plan_door_pair(
    a: &Room,
    b: &Room,
    wall: Wall,
    cfg: &GridConfig,
    rng: &mut LayoutRng,
) -> Option<(Door, Door)> {
    let seam = a.rect.intersection(&b.rect)?;

    // The seam span runs along y for side walls, along x for top/bottom.
    // One tile at each end is reserved for wall thickness.
    let (seam_min, seam_max) = if wall.is_side() {
        (seam.min_y(), seam.max_y())
    } else {
        (seam.min_x(), seam.max_x())
    };
    let min_edge = seam_min + cfg.tile_size;
    let max_edge = seam_max - cfg.tile_size;

    let available = (max_edge - min_edge) / cfg.tile_size;
    debug_assert!(
        available > 0,
        "seam between rooms {} and {} leaves no tile for a door",
        a.id,
        b.id
    );
    if available <= 0 {
        return None;
    }
    let offset = rng.range(0, available);

    // The same world tile, measured from each room's own bottom-left corner
    let a_base = (min_edge - if wall.is_side() { a.bottom() } else { a.left() }) / cfg.tile_size;
    let b_base = (min_edge - if wall.is_side() { b.bottom() } else { b.left() }) / cfg.tile_size;

    let (a_point, b_point) = match wall {
        Wall::Left => (
            TilePoint { x: 0, y: a_base + offset },
            TilePoint { x: b.cols - 1, y: b_base + offset },
        ),
        Wall::Right => (
            TilePoint { x: a.cols - 1, y: a_base + offset },
            TilePoint { x: 0, y: b_base + offset },
        ),
        Wall::Top => (
            TilePoint { x: a_base + offset, y: a.rows - 1 },
            TilePoint { x: b_base + offset, y: 0 },
        ),
        Wall::Bottom => (
            TilePoint { x: a_base + offset, y: 0 },
            TilePoint { x: b_base + offset, y: b.rows - 1 },
        ),
    };

    Some((
        Door {
            connects_to: b.id,
            joining_point: a_point,
            wall,
        },
        Door {
            connects_to: a.id,
            joining_point: b_point,
            wall: wall.opposite(),
        },
    ))
}

/// Create and append the mirrored door pair joining `rooms[a]` to `rooms[b]`
///
/// Returns false when the seam cannot host a door; neither room is touched
/// in that case.
pub fn connect(
    rooms: &mut [Room],
    a: usize,
    b: usize,
    wall: Wall,
    cfg: &GridConfig,
    rng: &mut LayoutRng,
) -> bool {
    match plan_door_pair(&rooms[a], &rooms[b], wall, cfg, rng) {
        Some((door_a, door_b)) => {
            rooms[a].doors.push(door_a);
            rooms[b].doors.push(door_b);
            true
        }
        None => false,
    }
}
