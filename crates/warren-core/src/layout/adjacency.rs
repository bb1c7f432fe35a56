//! Flush-edge adjacency
//!
//! Settling tends to leave rooms exactly flush, since every settle move
//! lands a room touching its anchor. Any pair sharing an edge with enough
//! perpendicular overlap for a door becomes directly connected here, walls
//! checked in a fixed left, right, top, bottom order from the lower-indexed
//! room, one door pair per room pair at most.

use super::door;
use super::room::{Room, Wall};
use crate::config::GridConfig;
use crate::rng::LayoutRng;

/// True when `a` and `b` touch along some edge and are not yet connected
pub fn shares_edge(a: &Room, b: &Room) -> bool {
    if a.connects_to(b.id) {
        return false;
    }
    a.left() == b.right()
        || a.right() == b.left()
        || a.top() == b.bottom()
        || a.bottom() == b.top()
}

/// Vertical overlap check for a left/right seam: full cover either way, or
/// at least door clearance
fn same_vertical_span(a: &Room, b: &Room, cfg: &GridConfig) -> bool {
    if a.bottom() <= b.bottom() && a.top() >= b.top() {
        return true;
    }
    if b.bottom() <= a.bottom() && b.top() >= a.top() {
        return true;
    }
    match a.rect.intersection(&b.rect) {
        Some(seam) => seam.height >= cfg.door_clearance(),
        None => false,
    }
}

/// Horizontal overlap check for a top/bottom seam
fn same_horizontal_span(a: &Room, b: &Room, cfg: &GridConfig) -> bool {
    if a.left() <= b.left() && a.right() >= b.right() {
        return true;
    }
    if b.left() <= a.left() && b.right() >= a.right() {
        return true;
    }
    match a.rect.intersection(&b.rect) {
        Some(seam) => seam.width >= cfg.door_clearance(),
        None => false,
    }
}

/// Connect one flush pair if a wall and span allow it
fn connect_butting(
    rooms: &mut [Room],
    i: usize,
    j: usize,
    cfg: &GridConfig,
    rng: &mut LayoutRng,
) -> bool {
    if rooms[i].connects_to(rooms[j].id) {
        return false;
    }

    let wall = {
        let (a, b) = (&rooms[i], &rooms[j]);
        if a.left() == b.right() && same_vertical_span(a, b, cfg) {
            Some(Wall::Left)
        } else if a.right() == b.left() && same_vertical_span(a, b, cfg) {
            Some(Wall::Right)
        } else if a.top() == b.bottom() && same_horizontal_span(a, b, cfg) {
            Some(Wall::Top)
        } else if a.bottom() == b.top() && same_horizontal_span(a, b, cfg) {
            Some(Wall::Bottom)
        } else {
            None
        }
    };

    match wall {
        Some(wall) => door::connect(rooms, i, j, wall, cfg, rng),
        None => false,
    }
}

/// Connect every flush pair across the arena
///
/// Returns the number of door pairs created.
pub fn connect_adjacent(rooms: &mut [Room], cfg: &GridConfig, rng: &mut LayoutRng) -> usize {
    let mut created = 0;

    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            if !shares_edge(&rooms[i], &rooms[j]) {
                continue;
            }
            if connect_butting(rooms, i, j, cfg, rng) {
                created += 1;
            }
        }
    }

    created
}
