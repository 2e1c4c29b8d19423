use image::RgbaImage;

use crate::foundation::error::{TexpaintError, TexpaintResult};

/// The environment's texture-upload primitive.
///
/// [`DrawSurface`](crate::DrawSurface) pushes the whole canvas through this
/// after every mutating call. Rows arrive bottom-to-top (the canvas
/// convention); sinks targeting top-down storage flip at this boundary.
pub trait TextureSink {
    /// Publishes a `width * height` RGBA8 buffer to the visible texture.
    fn upload(&mut self, width: u32, height: u32, rgba: &[u8]) -> TexpaintResult<()>;
}

/// Publishes into an [`image::RgbaImage`] held in memory.
#[derive(Clone, Debug)]
pub struct ImageSink {
    image: RgbaImage,
}

impl ImageSink {
    /// Creates a sink for a `width * height` texture.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// The most recently published texture, top-down row order.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consumes the sink, returning the published texture.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl TextureSink for ImageSink {
    fn upload(&mut self, width: u32, height: u32, rgba: &[u8]) -> TexpaintResult<()> {
        if (width, height) != self.image.dimensions() {
            return Err(TexpaintError::texture(format!(
                "upload is {width}x{height}, sink texture is {}x{}",
                self.image.width(),
                self.image.height()
            )));
        }
        let row_bytes = width as usize * 4;
        if rgba.len() != row_bytes * height as usize {
            return Err(TexpaintError::texture(format!(
                "upload byte length {} does not match {width}x{height} rgba8",
                rgba.len()
            )));
        }
        let dst: &mut [u8] = &mut self.image;
        for y in 0..height as usize {
            let src_off = (height as usize - 1 - y) * row_bytes;
            let dst_off = y * row_bytes;
            dst[dst_off..dst_off + row_bytes].copy_from_slice(&rgba[src_off..src_off + row_bytes]);
        }
        Ok(())
    }
}

/// Swallows uploads. For headless hosts and tests that only inspect the
/// canvas.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl TextureSink for DiscardSink {
    fn upload(&mut self, _width: u32, _height: u32, _rgba: &[u8]) -> TexpaintResult<()> {
        Ok(())
    }
}
