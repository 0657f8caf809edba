//! Errors raised while validating or tiling a scenario.

use std::fmt;

/// Errors that abort a background draw before any tile is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Tile width or height is not positive.
    InvalidTileSpec { width: i32, height: i32 },
    /// The scenario context cannot supply a tile image.
    NullContext,
    /// A scenario type name did not match any known variant.
    UnknownType(String),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileSpec { width, height } => {
                write!(f, "invalid tile size {width}x{height}: both sides must be positive")
            }
            Self::NullContext => write!(f, "scenario context has no tile image"),
            Self::UnknownType(name) => write!(f, "unknown scenario type \u{201c}{name}\u{201d}"),
        }
    }
}

impl std::error::Error for ScenarioError {}
