//! Overlap resolution
//!
//! Randomly placed chambers usually intersect. A settle pass walks every
//! `(i, j)` pair with `i < j` and pushes `j` off `i`: one coin picks the
//! escape direction on each axis, a third picks which single axis to move
//! first, and if that move leaves the pair still intersecting, both moves are
//! applied together, which always clears this pair. Moving `j` can push it
//! onto a room checked earlier in the pass; the caller repeats passes until
//! one reports zero intersections.

use super::room::Room;
use crate::rng::LayoutRng;

/// One full resolution pass over all room pairs
///
/// Returns the number of intersecting pairs found. Zero means the
/// arrangement has settled: no pair shares area, and repeating the pass
/// moves nothing.
pub fn settle_pass(rooms: &mut [Room], rng: &mut LayoutRng) -> usize {
    let mut intersections = 0;

    for i in 0..rooms.len() {
        // The anchor never moves while its own pairs are checked
        let anchor = rooms[i].rect;

        for j in (i + 1)..rooms.len() {
            if !anchor.overlaps(&rooms[j].rect) {
                continue;
            }
            intersections += 1;

            let half_height = rooms[j].rect.height / 2;
            let half_width = rooms[j].rect.width / 2;

            // Candidate centers that leave `j` flush against the anchor on
            // one axis; halves are exact because all extents are even
            let new_cy = if rng.coin() {
                anchor.min_y() - half_height
            } else {
                anchor.max_y() + half_height
            };
            let new_cx = if rng.coin() {
                anchor.min_x() - half_width
            } else {
                anchor.max_x() + half_width
            };

            if rng.coin() {
                rooms[j].move_center_y(new_cy);
            } else {
                rooms[j].move_center_x(new_cx);
            }

            if anchor.overlaps(&rooms[j].rect) {
                // Still intersecting, so take both moves
                rooms[j].move_center(new_cx, new_cy);
            }
        }
    }

    intersections
}
