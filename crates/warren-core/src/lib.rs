//! warren-core: Procedural dungeon layout engine
//!
//! Scatters rooms on a coarse tile grid, settles overlaps into a packed
//! arrangement, cuts mirrored door pairs where rooms end up flush, and
//! synthesizes corridor rooms toward anything left unconnected. Geometry is
//! all integer and tile-aligned, and a whole level replays from one seed.

pub mod config;
pub mod error;
pub mod layout;

mod rng;

pub use rng::LayoutRng;
