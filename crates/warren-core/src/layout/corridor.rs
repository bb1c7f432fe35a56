//! Corridor synthesis
//!
//! Settling can strand a room with walls that touch nothing. For each such
//! wall a corridor-width band is swept across the level area:
//!
//! 1. Horizontal sweep (left and right walls): the band spans the level's
//!    full width, starts flush with the room's bottom edge, and climbs one
//!    tile per step until its top would pass the room's top.
//! 2. Vertical sweep (top and bottom walls): the band spans the level's full
//!    height, starts flush with the room's left edge, and steps right one
//!    tile at a time until its right side would pass the room's right.
//!
//! At each band position only the nearest room the band crosses on the far
//! side of the wall is considered, and it must be crossed cleanly: the band
//! must cut it to the full corridor width, at least one tile deep, with a
//! gap of at least one tile between the facing edges. A clean crossing gets
//! a new corridor room spanning the gap, wired to both ends with a mirrored
//! door pair each; anything less moves the band on.

use super::door;
use super::rect::Rect;
use super::room::{Axis, Room, RoomId, Wall};
use crate::config::GridConfig;
use crate::rng::LayoutRng;

/// Try to bridge `rooms[origin]` to some other room with one new corridor
///
/// Only directions whose wall has no door are attempted, horizontal before
/// vertical. On success the corridor room, already connected at both ends,
/// is appended to the arena and its id returned. `None` leaves the arena
/// untouched: the room keeps its doorless walls, which is an accepted
/// terminal state.
pub fn synthesize_corridor(
    rooms: &mut Vec<Room>,
    origin: usize,
    area: &Rect,
    cfg: &GridConfig,
    rng: &mut LayoutRng,
) -> Option<RoomId> {
    if let Some(id) = horizontal_corridor(rooms, origin, area, cfg, rng) {
        return Some(id);
    }
    vertical_corridor(rooms, origin, area, cfg, rng)
}

fn horizontal_corridor(
    rooms: &mut Vec<Room>,
    origin: usize,
    area: &Rect,
    cfg: &GridConfig,
    rng: &mut LayoutRng,
) -> Option<RoomId> {
    let try_left = rooms[origin].wall_is_doorless(Wall::Left);
    let try_right = rooms[origin].wall_is_doorless(Wall::Right);
    if !try_left && !try_right {
        return None;
    }

    let this = rooms[origin].rect;
    // Flush with the bottom edge; the first shift steps over the wall row
    let mut band = Rect::new(area.min_x(), this.min_y(), area.width, cfg.corridor_size());

    loop {
        band = band.offset_by(0, cfg.tile_size);
        if band.max_y() > this.max_y() {
            return None;
        }

        if try_left {
            if let Some(id) = attempt(rooms, origin, &band, Wall::Left, cfg, rng) {
                return Some(id);
            }
        }
        if try_right {
            if let Some(id) = attempt(rooms, origin, &band, Wall::Right, cfg, rng) {
                return Some(id);
            }
        }
    }
}

fn vertical_corridor(
    rooms: &mut Vec<Room>,
    origin: usize,
    area: &Rect,
    cfg: &GridConfig,
    rng: &mut LayoutRng,
) -> Option<RoomId> {
    let try_top = rooms[origin].wall_is_doorless(Wall::Top);
    let try_bottom = rooms[origin].wall_is_doorless(Wall::Bottom);
    if !try_top && !try_bottom {
        return None;
    }

    let this = rooms[origin].rect;
    let mut band = Rect::new(this.min_x(), area.min_y(), cfg.corridor_size(), area.height);

    loop {
        band = band.offset_by(cfg.tile_size, 0);
        if band.max_x() > this.max_x() {
            return None;
        }

        if try_top {
            if let Some(id) = attempt(rooms, origin, &band, Wall::Top, cfg, rng) {
                return Some(id);
            }
        }
        if try_bottom {
            if let Some(id) = attempt(rooms, origin, &band, Wall::Bottom, cfg, rng) {
                return Some(id);
            }
        }
    }
}

/// One attempt at one band position in one direction
///
/// Only the nearest room the band crosses beyond the facing edge is ever
/// considered. If that room is not crossed cleanly, this band position
/// yields nothing; skipping past it could run the corridor straight
/// through it.
fn attempt(
    rooms: &mut Vec<Room>,
    origin: usize,
    band: &Rect,
    direction: Wall,
    cfg: &GridConfig,
    rng: &mut LayoutRng,
) -> Option<RoomId> {
    let this = rooms[origin].rect;

    // Flush rooms count as beyond the edge: they can block a crossing
    let nearest = rooms
        .iter()
        .enumerate()
        .filter(|(_, room)| room.rect.overlaps(band))
        .filter_map(|(idx, room)| {
            let key = match direction {
                Wall::Left if room.right() <= this.min_x() => -room.right(),
                Wall::Right if room.left() >= this.max_x() => room.left(),
                Wall::Top if room.bottom() >= this.max_y() => room.bottom(),
                Wall::Bottom if room.top() <= this.min_y() => -room.top(),
                _ => return None,
            };
            Some((idx, key))
        })
        .min_by_key(|&(_, key)| key);

    let (partner, _) = nearest?;
    let rect = corridor_span(&this, &rooms[partner].rect, band, direction, cfg)?;

    let axis = if direction.is_side() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };
    let corridor_id = rooms.len();
    let mut corridor = Room::corridor(corridor_id, rect, axis, cfg);

    // The corridor faces the origin with the wall opposite its sweep
    // direction and the partner with the direction itself
    let (corridor_origin_door, origin_door) =
        door::plan_door_pair(&corridor, &rooms[origin], direction.opposite(), cfg, rng)?;
    let (corridor_partner_door, partner_door) =
        door::plan_door_pair(&corridor, &rooms[partner], direction, cfg, rng)?;

    corridor.doors.push(corridor_origin_door);
    corridor.doors.push(corridor_partner_door);
    rooms[origin].doors.push(origin_door);
    rooms[partner].doors.push(partner_door);
    rooms.push(corridor);
    Some(corridor_id)
}

/// Acceptance test for one candidate at one band position
///
/// The band must cut the candidate to the full corridor width and at least
/// one tile deep, and a gap of at least one tile must separate the facing
/// edges. Returns the corridor rectangle spanning that gap.
fn corridor_span(
    origin: &Rect,
    candidate: &Rect,
    band: &Rect,
    direction: Wall,
    cfg: &GridConfig,
) -> Option<Rect> {
    let crossing = candidate.intersection(band)?;
    let (cross_width, cross_depth) = if direction.is_side() {
        (crossing.height, crossing.width)
    } else {
        (crossing.width, crossing.height)
    };
    if cross_width != cfg.corridor_size() || cross_depth < cfg.tile_size {
        return None;
    }

    let rect = match direction {
        Wall::Left => Rect::new(
            candidate.max_x(),
            band.y,
            origin.min_x() - candidate.max_x(),
            cfg.corridor_size(),
        ),
        Wall::Right => Rect::new(
            origin.max_x(),
            band.y,
            candidate.min_x() - origin.max_x(),
            cfg.corridor_size(),
        ),
        Wall::Top => Rect::new(
            band.x,
            origin.max_y(),
            cfg.corridor_size(),
            candidate.min_y() - origin.max_y(),
        ),
        Wall::Bottom => Rect::new(
            band.x,
            candidate.max_y(),
            cfg.corridor_size(),
            origin.min_y() - candidate.max_y(),
        ),
    };

    // A grazing or flush partner leaves no span worth a corridor
    let gap = if direction.is_side() {
        rect.width
    } else {
        rect.height
    };
    if gap < cfg.tile_size {
        return None;
    }

    Some(rect)
}
