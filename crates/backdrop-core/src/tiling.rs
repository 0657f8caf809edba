//! Repeat-on-both-axes tiling: which tile blits cover a scrolled viewport.
//!
//! [`TileFiller::fill`] is a pure function of a [`ViewportSize`], a
//! [`ScrollOffset`] and a [`TileSpec`]. It returns a lazy, row-major
//! [`Placements`] iterator whose rectangles cover the whole viewport with no
//! gap. Inputs are validated before the iterator is handed out, so a failed
//! call never yields a partial sequence.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::ScenarioError;
use crate::geom::{Point, Rect};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// World-space position of the tile grid origin relative to the viewport
/// origin. Any value is valid, including negative ones.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub x: i32,
    pub y: i32,
}

impl ScrollOffset {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset moved by (dx, dy), saturating at the `i32` bounds.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Size in pixels of the drawable area. Zero on either axis means there is
/// nothing to cover (e.g. a panel that has not been laid out yet).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether the viewport has no area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The viewport as a rectangle anchored at the origin.
    #[inline]
    pub fn rect(self) -> Rect {
        Rect::with_size(Point::ZERO, self.width, self.height)
    }
}

/// The repeating unit: its size in pixels and a borrowed image handle.
///
/// The image is opaque to the tiler. It is only passed through to the
/// [`TileSink`](crate::draw::TileSink) that performs the blit.
pub struct TileSpec<'a, I: ?Sized> {
    pub width: i32,
    pub height: i32,
    pub image: &'a I,
}

impl<'a, I: ?Sized> TileSpec<'a, I> {
    #[inline]
    pub const fn new(width: i32, height: i32, image: &'a I) -> Self {
        Self { width, height, image }
    }

    /// Fails with [`ScenarioError::InvalidTileSpec`] unless both sides are
    /// positive.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        validate_tile_size(self.width, self.height)
    }
}

impl<I: ?Sized> Clone for TileSpec<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized> Copy for TileSpec<'_, I> {}

impl<I: ?Sized> fmt::Debug for TileSpec<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileSpec")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

pub(crate) fn validate_tile_size(width: i32, height: i32) -> Result<(), ScenarioError> {
    if width <= 0 || height <= 0 {
        return Err(ScenarioError::InvalidTileSpec { width, height });
    }
    Ok(())
}

/// Top-left viewport coordinate of one tile blit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

impl Placement {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Area covered by a `width`×`height` tile drawn at this placement.
    #[inline]
    pub fn rect(self, width: u32, height: u32) -> Rect {
        Rect::with_size(self.into(), width, height)
    }
}

impl From<Placement> for Point {
    fn from(p: Placement) -> Self {
        Point::new(p.x, p.y)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Per-axis stepping
// ---------------------------------------------------------------------------

/// First tile-grid line at or before the viewport edge along one axis.
///
/// Returns the unique value in `(-size, 0]` congruent to `offset` modulo
/// `size`. A non-positive offset keeps its truncated remainder, which
/// already lies in that range. A positive offset is pulled back one whole
/// tile so the leading tile still reaches the edge.
///
/// `size` must be positive.
#[inline]
pub fn wrap_start(offset: i32, size: i32) -> i32 {
    debug_assert!(size > 0, "tile size must be positive");
    if offset <= 0 {
        offset % size
    } else {
        match offset % size {
            0 => 0,
            rem => rem - size,
        }
    }
}

/// The `len` coordinates `start, start + step, ...` along one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Axis {
    start: i64,
    step: i64,
    len: usize,
}

impl Axis {
    const EMPTY: Self = Self {
        start: 0,
        step: 1,
        len: 0,
    };

    fn new(offset: i32, size: i32, extent: u32) -> Self {
        let start = i64::from(wrap_start(offset, size));
        let step = i64::from(size);
        // Emitted coordinates must stay representable as i32.
        let limit = i64::from(extent).min(i64::from(i32::MAX));
        let len = if start >= limit {
            0
        } else {
            ((limit - start + step - 1) / step) as usize
        };
        Self { start, step, len }
    }

    #[inline]
    fn at(&self, i: usize) -> i32 {
        (self.start + i as i64 * self.step) as i32
    }
}

// ---------------------------------------------------------------------------
// TileFiller
// ---------------------------------------------------------------------------

/// Covers a viewport with copies of one tile, repeating on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TileFiller;

impl TileFiller {
    /// Compute the blits needed to cover `viewport` with `tile` when the
    /// tile grid origin sits at `scroll`.
    ///
    /// Placements are yielded row by row (y ascending, then x ascending).
    /// Consecutive coordinates on an axis differ by exactly the tile size,
    /// the first one lies in `(-size, 0]` and the last one is the final grid
    /// line before the far edge, so the last tile may hang past it.
    ///
    /// An empty viewport yields nothing. A non-positive tile side fails with
    /// [`ScenarioError::InvalidTileSpec`], even for an empty viewport.
    pub fn fill<I: ?Sized>(
        viewport: ViewportSize,
        scroll: ScrollOffset,
        tile: &TileSpec<'_, I>,
    ) -> Result<Placements, ScenarioError> {
        tile.validate()?;
        if viewport.is_empty() {
            return Ok(Placements::empty());
        }
        let xs = Axis::new(scroll.x, tile.width, viewport.width);
        let ys = Axis::new(scroll.y, tile.height, viewport.height);
        Ok(Placements::new(xs, ys))
    }
}

/// Row-major iterator over the [`Placement`]s produced by [`TileFiller::fill`].
#[derive(Clone, Debug)]
pub struct Placements {
    xs: Axis,
    ys: Axis,
    next: usize,
    total: usize,
}

impl Placements {
    fn new(xs: Axis, ys: Axis) -> Self {
        Self {
            xs,
            ys,
            next: 0,
            total: xs.len.saturating_mul(ys.len),
        }
    }

    fn empty() -> Self {
        Self::new(Axis::EMPTY, Axis::EMPTY)
    }

    /// Number of tile columns in the sequence.
    #[inline]
    pub fn columns(&self) -> usize {
        self.xs.len
    }

    /// Number of tile rows in the sequence.
    #[inline]
    pub fn rows(&self) -> usize {
        self.ys.len
    }
}

impl Iterator for Placements {
    type Item = Placement;

    #[inline]
    fn next(&mut self) -> Option<Placement> {
        if self.next >= self.total {
            return None;
        }
        let row = self.next / self.xs.len;
        let col = self.next % self.xs.len;
        self.next += 1;
        Some(Placement::new(self.xs.at(col), self.ys.at(row)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.total - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Placements {}

impl FusedIterator for Placements {}
