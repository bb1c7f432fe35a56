//! Layout system
//!
//! Contains room geometry, overlap settling, door planning, and corridor
//! synthesis.

mod adjacency;
mod corridor;
mod door;
mod generation;
mod rect;
mod room;
mod settle;

pub use adjacency::{connect_adjacent, shares_edge};
pub use corridor::synthesize_corridor;
pub use door::plan_door_pair;
pub use generation::{generate, generate_with, LevelGraph, MAX_SETTLE_PASSES};
pub use rect::Rect;
pub use room::{Axis, Door, Room, RoomId, RoomKind, TilePoint, Wall};
pub use settle::settle_pass;
