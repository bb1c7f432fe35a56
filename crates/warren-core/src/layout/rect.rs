//! Axis-aligned rectangles on the tile grid
//!
//! Rooms, corridors, sweep bands and the level bounding area are all `Rect`s.
//! Coordinates are exact integers: everything the pipeline produces is a whole
//! number of world units, so the edge-equality tests adjacency detection
//! relies on never suffer float drift. The y axis points up (`min_y` is the
//! bottom edge, `max_y` the top).

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in integer world units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (minimum x)
    pub x: i32,
    /// Bottom edge (minimum y)
    pub y: i32,
    /// Width, never negative
    pub width: i32,
    /// Height, never negative
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its bottom-left corner and size
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle centered on a point
    ///
    /// Exact when width and height are even, which holds for every rect the
    /// pipeline builds.
    pub fn from_center(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Self {
            x: cx - width / 2,
            y: cy - height / 2,
            width,
            height,
        }
    }

    /// Left edge
    pub fn min_x(&self) -> i32 {
        self.x
    }

    /// Right edge
    pub fn max_x(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn min_y(&self) -> i32 {
        self.y
    }

    /// Top edge
    pub fn max_y(&self) -> i32 {
        self.y + self.height
    }

    /// Center point
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Strict intersection test: true only when the rectangles share positive
    /// area. Rectangles that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// Clamped intersection
    ///
    /// Touching rectangles yield a degenerate rect (zero width or height)
    /// marking the shared seam; `None` means the rectangles are disjoint with
    /// daylight between them on some axis.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.min_x().max(other.min_x());
        let y = self.min_y().max(other.min_y());
        let width = self.max_x().min(other.max_x()) - x;
        let height = self.max_y().min(other.max_y()) - y;
        if width < 0 || height < 0 {
            return None;
        }
        Some(Rect::new(x, y, width, height))
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.min_x().min(other.min_x());
        let y = self.min_y().min(other.min_y());
        let width = self.max_x().max(other.max_x()) - x;
        let height = self.max_y().max(other.max_y()) - y;
        Rect::new(x, y, width, height)
    }

    /// The same rectangle shifted by `(dx, dy)`
    pub fn offset_by(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}
