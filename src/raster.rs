//! Stroke rasterization: pure functions that decide which pixels a dab or a
//! thickened segment covers, over a minimal buffer-write seam.

use crate::foundation::core::{PixelPos, Rgba8};

pub mod segment;

/// Write access to a pixel buffer, as seen by the rasterizer.
///
/// Implementations clip: `set_px` outside `0..width × 0..height` must be a
/// silent no-op, never an error.
pub trait BufferWrite {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn set_px(&mut self, x: i64, y: i64, px: Rgba8);
}

/// Everything one segment draw needs, fixed at call time.
///
/// There is deliberately no ambient state behind this: the CPU rasterizer
/// consumes these fields directly, and a GPU compositor binds the same fields
/// as the uniforms of its offscreen line-stencil pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SegmentStroke {
    /// Previous touch point, pixel space.
    pub start: PixelPos,
    /// Pen radius at `start`, in pixels.
    pub start_radius: u32,
    /// Current touch point, pixel space.
    pub end: PixelPos,
    /// Pen radius at `end`, in pixels.
    pub end_radius: u32,
    /// Target color. Erasing passes the background color here.
    pub color: Rgba8,
}
