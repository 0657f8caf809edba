//! CPU pixel buffer that tile blits are drawn into.
//!
//! Pixels are `0xAARRGGBB`, the layout softbuffer presents.

use backdrop_core::{Point, Rect, TileSink};

/// Opaque black.
pub const BLACK: u32 = 0xFF000000;

/// Pack an opaque colour.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    BLACK | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

// ---------------------------------------------------------------------------
// TileImage
// ---------------------------------------------------------------------------

/// An in-memory tile image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileImage {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl TileImage {
    /// Wrap row-major pixels. Returns `None` if `pixels` does not hold
    /// exactly `width * height` values.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A two-colour checkerboard with square cells of `cell` pixels.
    pub fn checker(width: u32, height: u32, cell: u32, a: u32, b: u32) -> Self {
        let cell = cell.max(1);
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| if (x / cell + y / cell) % 2 == 0 { a } else { b }))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at (x, y), if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    fn row(&self, y: usize) -> &[u32] {
        let w = self.width as usize;
        &self.pixels[y * w..(y + 1) * w]
    }
}

// ---------------------------------------------------------------------------
// FrameBuffer
// ---------------------------------------------------------------------------

/// Window-sized pixel buffer. Implements [`TileSink`] by copying tiles in,
/// clipped to the buffer bounds.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at (x, y), if inside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// The buffer area in viewport coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::with_size(Point::ZERO, self.width, self.height)
    }

    /// Resize the buffer. Contents are reset to black.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, BLACK);
    }

    /// Fill the whole buffer with `color`.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Copy the buffer into a softbuffer surface buffer of the given size.
    /// Areas outside the frame are cleared to black.
    pub fn blit_to_buffer(&self, buf: &mut [u32], buf_width: usize, buf_height: usize) {
        let src_w = self.width as usize;
        let src_h = self.height as usize;
        let copy_w = src_w.min(buf_width);
        let copy_h = src_h.min(buf_height);

        if buf_width > src_w || buf_height > src_h {
            buf.fill(BLACK);
        }

        for y in 0..copy_h {
            let src_start = y * src_w;
            let dst_start = y * buf_width;
            let src_end = src_start + copy_w;
            let dst_end = dst_start + copy_w;
            if src_end <= self.pixels.len() && dst_end <= buf.len() {
                buf[dst_start..dst_end].copy_from_slice(&self.pixels[src_start..src_end]);
            }
        }
    }
}

impl TileSink<TileImage> for FrameBuffer {
    /// Copy `image` into the `width`×`height` area at (x, y). The image is
    /// resampled (nearest neighbour) when its size differs from the tile's.
    fn draw_tile(&mut self, x: i32, y: i32, width: u32, height: u32, image: &TileImage) {
        if image.is_empty() || width == 0 || height == 0 {
            return;
        }
        let dst = Rect::with_size(Point::new(x, y), width, height).intersect(self.bounds());
        if dst.is_empty() {
            return;
        }

        let stride = self.width as usize;
        let native = width == image.width && height == image.height;
        let (x0, x1) = (dst.min.x as usize, dst.max.x as usize);

        for py in dst.min.y..dst.max.y {
            // Offsets into the tile are below its size, which fits in u32.
            let ty = (i64::from(py) - i64::from(y)) as u64;
            let sy = (ty * u64::from(image.height) / u64::from(height)) as usize;
            let src = image.row(sy);
            let row = py as usize * stride;
            let dst_row = &mut self.pixels[row + x0..row + x1];

            if native {
                let sx0 = (i64::from(dst.min.x) - i64::from(x)) as usize;
                dst_row.copy_from_slice(&src[sx0..sx0 + dst_row.len()]);
                continue;
            }
            for (px, out) in (dst.min.x..dst.max.x).zip(dst_row.iter_mut()) {
                let tx = (i64::from(px) - i64::from(x)) as u64;
                let sx = (tx * u64::from(image.width) / u64::from(width)) as usize;
                *out = src[sx];
            }
        }
    }
}
