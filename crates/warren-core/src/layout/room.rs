//! Rooms, walls and doors
//!
//! A `Room` is a tile-aligned rectangle with a stable id and an append-only
//! door list. Chambers are drawn with random even-tile extents; corridor
//! rooms are built later from an exact rectangle. Doors always exist in
//! mirrored pairs, one on each side of a shared seam.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use super::rect::Rect;
use crate::config::GridConfig;
use crate::rng::LayoutRng;

/// Stable identity of a room, also its index in the layout arena
pub type RoomId = usize;

/// The four walls of a room
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

impl Wall {
    /// The geometrically opposite wall
    ///
    /// A door on one wall always mirrors onto this wall of the connected
    /// room.
    pub fn opposite(self) -> Wall {
        match self {
            Wall::Left => Wall::Right,
            Wall::Right => Wall::Left,
            Wall::Top => Wall::Bottom,
            Wall::Bottom => Wall::Top,
        }
    }

    /// True for left/right walls, whose doors vary along y
    pub fn is_side(self) -> bool {
        matches!(self, Wall::Left | Wall::Right)
    }
}

/// Sweep axis of a corridor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A local tile coordinate on a room's border, 0-based from the room's
/// bottom-left tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePoint {
    pub x: i32,
    pub y: i32,
}

/// One direction of a connection between two rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// Room at the far end; that room holds the mirrored door back
    pub connects_to: RoomId,
    /// Position on the owning room's border; only the coordinate along the
    /// wall varies, the other is pinned to 0 or extent - 1
    pub joining_point: TilePoint,
    /// Which wall of the owning room the door sits on
    pub wall: Wall,
}

/// Chamber or corridor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    /// Free-standing room with randomly drawn size
    Chamber,
    /// Connecting corridor synthesized along the given sweep axis
    Corridor(Axis),
}

impl RoomKind {
    pub fn is_corridor(&self) -> bool {
        matches!(self, RoomKind::Corridor(_))
    }
}

/// A rectangular room on the tile grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Stable identity, assigned at creation and never reused
    pub id: RoomId,
    /// World rectangle, tile-aligned
    pub rect: Rect,
    /// Extent in tiles along x
    pub cols: i32,
    /// Extent in tiles along y
    pub rows: i32,
    /// Doors in creation order; append-only during generation
    pub doors: Vec<Door>,
    /// Chamber or corridor
    pub kind: RoomKind,
}

impl Room {
    /// Create a chamber with random even-tile extents and a random
    /// tile-aligned center
    ///
    /// Doubling the drawn extent keeps both sides even, so the center sits
    /// on a tile boundary and half-extent arithmetic stays integral.
    pub fn random(id: RoomId, cfg: &GridConfig, rng: &mut LayoutRng) -> Self {
        let cols = rng.range(cfg.min_extent, cfg.max_extent) * 2;
        let width = cols * cfg.tile_size;
        let rows = rng.range(cfg.min_extent, cfg.max_extent) * 2;
        let height = rows * cfg.tile_size;

        let cx = rng.range(cfg.min_offset, cfg.max_offset) * cfg.tile_size;
        let cy = rng.range(cfg.min_offset, cfg.max_offset) * cfg.tile_size;

        Self {
            id,
            rect: Rect::from_center(cx, cy, width, height),
            cols,
            rows,
            doors: Vec::new(),
            kind: RoomKind::Chamber,
        }
    }

    /// Create a corridor room from an already computed rectangle
    pub fn corridor(id: RoomId, rect: Rect, axis: Axis, cfg: &GridConfig) -> Self {
        Self {
            id,
            rect,
            cols: rect.width / cfg.tile_size,
            rows: rect.height / cfg.tile_size,
            doors: Vec::new(),
            kind: RoomKind::Corridor(axis),
        }
    }

    /// Left edge
    pub fn left(&self) -> i32 {
        self.rect.min_x()
    }

    /// Right edge
    pub fn right(&self) -> i32 {
        self.rect.max_x()
    }

    /// Bottom edge
    pub fn bottom(&self) -> i32 {
        self.rect.min_y()
    }

    /// Top edge
    pub fn top(&self) -> i32 {
        self.rect.max_y()
    }

    /// Move the room so its center x becomes `cx`, keeping y
    pub fn move_center_x(&mut self, cx: i32) {
        let (_, cy) = self.rect.center();
        self.rect = Rect::from_center(cx, cy, self.rect.width, self.rect.height);
    }

    /// Move the room so its center y becomes `cy`, keeping x
    pub fn move_center_y(&mut self, cy: i32) {
        let (cx, _) = self.rect.center();
        self.rect = Rect::from_center(cx, cy, self.rect.width, self.rect.height);
    }

    /// Move the room's center to `(cx, cy)`
    pub fn move_center(&mut self, cx: i32, cy: i32) {
        self.rect = Rect::from_center(cx, cy, self.rect.width, self.rect.height);
    }

    /// True if some door already leads to `other`
    pub fn connects_to(&self, other: RoomId) -> bool {
        self.doors.iter().any(|d| d.connects_to == other)
    }

    /// True if no door sits on `wall`
    pub fn wall_is_doorless(&self, wall: Wall) -> bool {
        !self.doors.iter().any(|d| d.wall == wall)
    }

    /// True if at least one wall has no door yet
    pub fn has_doorless_wall(&self) -> bool {
        Wall::iter().any(|w| self.wall_is_doorless(w))
    }

    /// World tile column/row of a door, counted from the grid origin
    pub fn door_tile(&self, door: &Door, cfg: &GridConfig) -> (i32, i32) {
        (
            self.left() / cfg.tile_size + door.joining_point.x,
            self.bottom() / cfg.tile_size + door.joining_point.y,
        )
    }
}
