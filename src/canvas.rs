use image::RgbaImage;

use crate::foundation::core::{Color, Rgba8};
use crate::foundation::error::{TexpaintError, TexpaintResult};
use crate::raster::BufferWrite;

/// Persistent paint target: a tightly packed RGBA8 buffer plus the
/// background/reset color.
///
/// Rows are stored bottom-up: row 0 is the `v = 0` edge of the texture, so
/// [`uv_to_pixel`](crate::uv_to_pixel) output indexes directly. Dimensions are
/// fixed at allocation; the buffer is mutated in place and never resized.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    background: Color,
    pixels: Vec<u8>,
}

impl PixelCanvas {
    /// Allocates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> TexpaintResult<Self> {
        if width == 0 || height == 0 {
            return Err(TexpaintError::invalid_dimension(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        let len = (width as usize) * (height as usize) * 4;
        let mut canvas = Self {
            width,
            height,
            background,
            pixels: vec![0; len],
        };
        canvas.reset_all(background.to_rgba8());
        Ok(canvas)
    }

    /// Seeds the buffer from an existing base texture.
    ///
    /// `base` rows are top-down; canvas rows are bottom-up, so rows flip here.
    pub fn from_image(base: &RgbaImage, background: Color) -> TexpaintResult<Self> {
        let (width, height) = base.dimensions();
        let mut canvas = Self::new(width, height, background)?;
        let row_bytes = width as usize * 4;
        let src = base.as_raw();
        for y in 0..height as usize {
            let src_off = (height as usize - 1 - y) * row_bytes;
            let dst_off = y * row_bytes;
            canvas.pixels[dst_off..dst_off + row_bytes]
                .copy_from_slice(&src[src_off..src_off + row_bytes]);
        }
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The reset/erase target color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Bounds-checked read.
    pub fn get(&self, x: i64, y: i64) -> Option<Rgba8> {
        let idx = self.index(x, y)?;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Bounds-checked write. Out-of-range coordinates are dropped: thick
    /// stroke footprints routinely extend past the canvas edge.
    pub fn set(&mut self, x: i64, y: i64, px: Rgba8) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&px);
        }
    }

    /// Repaints every pixel in one pass.
    pub fn reset_all(&mut self, px: Rgba8) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// The packed buffer: `width * height * 4` bytes, row-major bottom-up.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + x as usize) * 4)
    }
}

impl BufferWrite for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_px(&mut self, x: i64, y: i64, px: Rgba8) {
        self.set(x, y, px);
    }
}
