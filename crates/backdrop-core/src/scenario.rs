//! Scenario snapshots and background strategies.
//!
//! A [`SceneContext`] is the read-only view a rendering driver exposes each
//! frame: scroll position, viewport size, tile size and the tile image.
//! [`Scenario`] is the owned implementation drivers keep between frames, and
//! [`ScenarioType`] selects how the background is laid out.

use std::fmt;
use std::str::FromStr;

use crate::error::ScenarioError;
use crate::tiling::{Placements, ScrollOffset, TileFiller, TileSpec, ViewportSize, validate_tile_size};

// ---------------------------------------------------------------------------
// SceneContext
// ---------------------------------------------------------------------------

/// Per-frame accessors a background strategy pulls its inputs from.
///
/// Implementations must return a stable snapshot for the duration of one
/// draw call. Strategies never mutate the context.
pub trait SceneContext {
    /// Opaque image handle owned by the asset layer.
    type Image: ?Sized;

    /// Current scroll position of the tile grid origin.
    fn scroll(&self) -> ScrollOffset;

    /// Current drawable area.
    fn viewport(&self) -> ViewportSize;

    /// Native tile size in pixels (width, height).
    fn tile_size(&self) -> (i32, i32);

    /// The image to blit, or `None` when the context cannot supply one.
    fn tile_image(&self) -> Option<&Self::Image>;

    /// Borrow the tile size and image as a [`TileSpec`].
    ///
    /// Fails with [`ScenarioError::NullContext`] when there is no image.
    /// The size is not validated here, [`TileFiller::fill`] does that.
    fn tile_spec(&self) -> Result<TileSpec<'_, Self::Image>, ScenarioError> {
        let (width, height) = self.tile_size();
        let image = self.tile_image().ok_or(ScenarioError::NullContext)?;
        Ok(TileSpec::new(width, height, image))
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// Owned scenario state: a tile image, its size, and the scroll and
/// viewport the driver updates between frames.
///
/// Always holds a valid tile size and an image; see [`ScenarioBuilder`].
#[derive(Clone, Debug)]
pub struct Scenario<I> {
    image: I,
    tile_width: i32,
    tile_height: i32,
    scroll: ScrollOffset,
    viewport: ViewportSize,
}

impl<I> Scenario<I> {
    /// Start building a scenario.
    pub fn builder() -> ScenarioBuilder<I> {
        ScenarioBuilder::default()
    }

    /// The tile image.
    pub fn image(&self) -> &I {
        &self.image
    }

    /// Replace the scroll position.
    pub fn set_scroll(&mut self, scroll: ScrollOffset) {
        self.scroll = scroll;
    }

    /// Move the scroll position by (dx, dy), saturating at the `i32` bounds.
    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.scroll = self.scroll.shift(dx, dy);
    }

    /// Replace the viewport size, e.g. after a window resize.
    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }
}

impl<I> SceneContext for Scenario<I> {
    type Image = I;

    fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    fn tile_size(&self) -> (i32, i32) {
        (self.tile_width, self.tile_height)
    }

    fn tile_image(&self) -> Option<&I> {
        Some(&self.image)
    }
}

/// Builder for [`Scenario`] that rejects bad inputs at construction time
/// rather than on the first frame.
#[derive(Clone, Debug)]
pub struct ScenarioBuilder<I> {
    image: Option<I>,
    tile_width: i32,
    tile_height: i32,
    scroll: ScrollOffset,
    viewport: ViewportSize,
}

impl<I> Default for ScenarioBuilder<I> {
    fn default() -> Self {
        Self {
            image: None,
            tile_width: 0,
            tile_height: 0,
            scroll: ScrollOffset::ZERO,
            viewport: ViewportSize::default(),
        }
    }
}

impl<I> ScenarioBuilder<I> {
    pub fn image(mut self, image: I) -> Self {
        self.image = Some(image);
        self
    }

    pub fn tile_size(mut self, width: i32, height: i32) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    pub fn scroll(mut self, x: i32, y: i32) -> Self {
        self.scroll = ScrollOffset::new(x, y);
        self
    }

    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = ViewportSize::new(width, height);
        self
    }

    /// Finish the scenario.
    ///
    /// Fails with [`ScenarioError::NullContext`] if no image was given and
    /// with [`ScenarioError::InvalidTileSpec`] if the tile size was never set
    /// or is not positive.
    pub fn build(self) -> Result<Scenario<I>, ScenarioError> {
        let image = self.image.ok_or(ScenarioError::NullContext)?;
        validate_tile_size(self.tile_width, self.tile_height)?;
        Ok(Scenario {
            image,
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            scroll: self.scroll,
            viewport: self.viewport,
        })
    }
}

// ---------------------------------------------------------------------------
// ScenarioType
// ---------------------------------------------------------------------------

/// How a scenario's image is laid out behind the scene.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScenarioType {
    /// Repeat the tile on the x and y axis to fill the viewport.
    #[default]
    RepeatXY,
}

impl ScenarioType {
    /// All known variants.
    pub const ALL: [ScenarioType; 1] = [ScenarioType::RepeatXY];

    /// Stable display name of the variant.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RepeatXY => "RepeatXY",
        }
    }

    /// Blits this strategy needs for one frame.
    pub fn placements<I: ?Sized>(
        self,
        viewport: ViewportSize,
        scroll: ScrollOffset,
        tile: &TileSpec<'_, I>,
    ) -> Result<Placements, ScenarioError> {
        match self {
            Self::RepeatXY => TileFiller::fill(viewport, scroll, tile),
        }
    }
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioType {
    type Err = ScenarioError;

    /// Parses a variant name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScenarioError::UnknownType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiling::Placement;

    fn checker() -> Scenario<&'static str> {
        Scenario::builder()
            .image("checker")
            .tile_size(50, 50)
            .viewport(100, 100)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_sets_fields() {
        let s = Scenario::builder()
            .image(7u8)
            .tile_size(16, 8)
            .scroll(-3, 4)
            .viewport(320, 200)
            .build()
            .unwrap();
        assert_eq!(*s.image(), 7);
        assert_eq!(s.tile_size(), (16, 8));
        assert_eq!(s.scroll(), ScrollOffset::new(-3, 4));
        assert_eq!(s.viewport(), ViewportSize::new(320, 200));
    }

    #[test]
    fn builder_rejects_missing_image() {
        let err = ScenarioBuilder::<u8>::default().tile_size(8, 8).build().unwrap_err();
        assert_eq!(err, ScenarioError::NullContext);
    }

    #[test]
    fn builder_rejects_bad_tile() {
        let err = Scenario::builder().image(()).tile_size(0, 50).build().unwrap_err();
        assert_eq!(err, ScenarioError::InvalidTileSpec { width: 0, height: 50 });
        // Never set.
        let err = Scenario::builder().image(()).build().unwrap_err();
        assert_eq!(err, ScenarioError::InvalidTileSpec { width: 0, height: 0 });
    }

    #[test]
    fn scrolling_mutates_snapshot() {
        let mut s = checker();
        s.scroll_by(10, -5);
        s.scroll_by(10, -5);
        assert_eq!(s.scroll(), ScrollOffset::new(20, -10));
        s.set_scroll(ScrollOffset::new(i32::MAX, 0));
        s.scroll_by(1, 0);
        assert_eq!(s.scroll().x, i32::MAX);
        s.set_viewport(ViewportSize::new(0, 10));
        assert!(s.viewport().is_empty());
    }

    #[test]
    fn tile_spec_requires_image() {
        struct NoImage;
        impl SceneContext for NoImage {
            type Image = [u32];
            fn scroll(&self) -> ScrollOffset {
                ScrollOffset::ZERO
            }
            fn viewport(&self) -> ViewportSize {
                ViewportSize::new(10, 10)
            }
            fn tile_size(&self) -> (i32, i32) {
                (4, 4)
            }
            fn tile_image(&self) -> Option<&[u32]> {
                None
            }
        }
        assert_eq!(NoImage.tile_spec().unwrap_err(), ScenarioError::NullContext);
    }

    #[test]
    fn repeat_xy_placements() {
        let s = checker();
        let tile = s.tile_spec().unwrap();
        let got: Vec<_> = ScenarioType::RepeatXY
            .placements(s.viewport(), ScrollOffset::new(-10, 0), &tile)
            .unwrap()
            .collect();
        assert_eq!(got.len(), 6);
        assert_eq!(got[0], Placement::new(-10, 0));
        assert_eq!(got[5], Placement::new(90, 50));
    }

    #[test]
    fn type_names() {
        assert_eq!(ScenarioType::default().name(), "RepeatXY");
        assert_eq!(ScenarioType::RepeatXY.to_string(), "RepeatXY");
        assert_eq!("repeatxy".parse::<ScenarioType>(), Ok(ScenarioType::RepeatXY));
        assert_eq!(
            "Parallax".parse::<ScenarioType>(),
            Err(ScenarioError::UnknownType("Parallax".into()))
        );
    }
}
