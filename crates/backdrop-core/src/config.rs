//! Declarative scenario settings.

use crate::error::ScenarioError;
use crate::scenario::{Scenario, ScenarioType};
use crate::tiling::{ScrollOffset, ViewportSize, validate_tile_size};

/// Settings a game loads to set up a scenario background.
///
/// With the `serde` feature, missing fields take their [`Default`] value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfig {
    /// Layout strategy.
    pub kind: ScenarioType,
    /// Tile width in pixels. Must be positive.
    pub tile_width: i32,
    /// Tile height in pixels. Must be positive.
    pub tile_height: i32,
    /// Initial scroll position.
    pub scroll: ScrollOffset,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            kind: ScenarioType::RepeatXY,
            tile_width: 32,
            tile_height: 32,
            scroll: ScrollOffset::ZERO,
        }
    }
}

impl ScenarioConfig {
    /// Check the tile size. Bad values are reported, never clamped.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        validate_tile_size(self.tile_width, self.tile_height)
    }

    /// Build a scenario for `image`, initially sized to `viewport`.
    pub fn scenario<I>(&self, image: I, viewport: ViewportSize) -> Result<Scenario<I>, ScenarioError> {
        self.validate()?;
        Scenario::builder()
            .image(image)
            .tile_size(self.tile_width, self.tile_height)
            .scroll(self.scroll.x, self.scroll.y)
            .viewport(viewport.width, viewport.height)
            .build()
    }
}
