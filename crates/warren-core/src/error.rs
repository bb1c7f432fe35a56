//! Errors surfaced by level generation

use thiserror::Error;

use crate::config::ConfigError;

/// Failures the generation pipeline can report
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The grid configuration failed validation
    #[error("invalid grid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Fewer than two rooms leaves nothing to connect
    #[error("cannot lay out {requested} rooms, need at least 2")]
    TooFewRooms { requested: usize },

    /// Settling never reached a fixed point
    #[error("rooms still overlap after {passes} settling passes")]
    SettleLimit { passes: usize },
}
