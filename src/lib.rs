//! Texpaint is a surface-texture painting engine: per-tick UV touch samples
//! from a pen-like input become thickened stroke segments composited onto a
//! persistent RGBA8 canvas, which is republished to the visible texture after
//! every mutating call.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: the host raycasts from the pen transform and builds a
//!    [`StrokeSample`] per tick while contact holds (a [`NibProfile`] maps hit
//!    distance to pen radius); on loss of contact it calls
//!    [`DrawSurface::lift`].
//! 2. **Orchestrate**: [`DrawSurface`] converts UV to pixel space and tracks
//!    stroke continuity as an explicit Idle/Stroking state machine: the first
//!    touch is a dab, later touches extend the stroke with a segment.
//! 3. **Rasterize**: [`mark_disk`] and [`fill_segment`] decide which pixels a
//!    dab or a thickened segment covers, writing through the [`BufferWrite`]
//!    seam into the [`PixelCanvas`].
//! 4. **Commit**: the mutated buffer is pushed through a [`TextureSink`]
//!    before the call returns, keeping the visible texture in sync.
//!
//! Erasing is drawing with the background color; [`DrawSurface::reset`]
//! repaints the whole canvas. Everything is single-threaded and synchronous,
//! cooperative with the host's per-frame tick.
#![forbid(unsafe_code)]

mod canvas;
mod foundation;
mod pen;
mod raster;
mod surface;

pub use canvas::PixelCanvas;
pub use foundation::core::{Color, PixelPos, Point, Rgba8, Vec2, uv_to_pixel};
pub use foundation::error::{TexpaintError, TexpaintResult};
pub use pen::{NibProfile, StrokeSample};
pub use raster::segment::{fill_segment, mark_disk};
pub use raster::{BufferWrite, SegmentStroke};
pub use surface::SurfaceOptions;
pub use surface::draw::{DrawSurface, StrokeState};
pub use surface::sink::{DiscardSink, ImageSink, TextureSink};
