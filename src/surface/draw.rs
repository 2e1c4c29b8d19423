use image::RgbaImage;

use crate::canvas::PixelCanvas;
use crate::foundation::core::{Color, Point, uv_to_pixel};
use crate::foundation::error::TexpaintResult;
use crate::pen::StrokeSample;
use crate::raster::SegmentStroke;
use crate::raster::segment::{fill_segment, mark_disk};
use crate::surface::SurfaceOptions;
use crate::surface::sink::TextureSink;

/// Stroke continuity across ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeState {
    /// No stroke in progress; the next touch is a dab.
    Idle,
    /// A stroke is in progress; the next touch extends it with a segment.
    Stroking {
        /// UV of the previous touch point.
        previous_uv: Point,
        /// Pen radius at the previous touch point.
        previous_radius: u32,
    },
}

/// The paintable canvas.
///
/// Owns the pixel buffer, tracks stroke continuity as an explicit
/// Idle/Stroking state machine, and republishes the buffer through its
/// [`TextureSink`] after every mutating call. Single-threaded by
/// construction: the host's tick loop is the only caller, and every
/// operation completes (mutation plus commit) before returning.
pub struct DrawSurface<S: TextureSink> {
    canvas: PixelCanvas,
    state: StrokeState,
    sink: S,
}

impl<S: TextureSink> DrawSurface<S> {
    /// Builds a surface sized to `base`.
    ///
    /// With `reset_on_start` the canvas starts as a flat `background` fill;
    /// otherwise the base image passes through. Either way the initial
    /// contents are committed so the visible texture starts in sync.
    pub fn new(base: &RgbaImage, opts: SurfaceOptions, sink: S) -> TexpaintResult<Self> {
        let canvas = if opts.reset_on_start {
            let (width, height) = base.dimensions();
            PixelCanvas::new(width, height, opts.background)?
        } else {
            PixelCanvas::from_image(base, opts.background)?
        };
        tracing::debug!(
            width = canvas.width(),
            height = canvas.height(),
            reset_on_start = opts.reset_on_start,
            "paint surface initialized"
        );
        let mut surface = Self {
            canvas,
            state: StrokeState::Idle,
            sink,
        };
        surface.commit()?;
        Ok(surface)
    }

    /// Paints at `uv`, continuing the current stroke if one is in progress.
    ///
    /// The first touch after [`Self::lift`] (or on a fresh surface) is a
    /// single dab; subsequent touches extend the stroke with a thickened
    /// segment from the previous point. Commits before returning.
    pub fn draw(&mut self, uv: Point, radius: u32, color: Color) -> TexpaintResult<()> {
        match self.state {
            StrokeState::Idle => {
                let center = uv_to_pixel(uv, self.canvas.width(), self.canvas.height());
                mark_disk(&mut self.canvas, center, radius, color.to_rgba8());
                self.state = StrokeState::Stroking {
                    previous_uv: uv,
                    previous_radius: radius,
                };
                self.commit()
            }
            StrokeState::Stroking {
                previous_uv,
                previous_radius,
            } => self.draw_with_previous(uv, radius, previous_uv, previous_radius, color),
        }
    }

    /// Paints a segment from an explicit previous point: the full form used
    /// when the input source tracks its own history.
    #[tracing::instrument(skip(self))]
    pub fn draw_with_previous(
        &mut self,
        uv: Point,
        radius: u32,
        previous_uv: Point,
        previous_radius: u32,
        color: Color,
    ) -> TexpaintResult<()> {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        let stroke = SegmentStroke {
            start: uv_to_pixel(previous_uv, width, height),
            start_radius: previous_radius,
            end: uv_to_pixel(uv, width, height),
            end_radius: radius,
            color: color.to_rgba8(),
        };
        fill_segment(&mut self.canvas, &stroke);
        self.state = StrokeState::Stroking {
            previous_uv: uv,
            previous_radius: radius,
        };
        self.commit()
    }

    /// Erases at `uv`: identical to [`Self::draw`] with the background color.
    pub fn erase(&mut self, uv: Point, radius: u32) -> TexpaintResult<()> {
        let background = self.canvas.background();
        self.draw(uv, radius, background)
    }

    /// Erase form with an explicit previous point. The same radius applies to
    /// both endpoints.
    pub fn erase_with_previous(
        &mut self,
        uv: Point,
        previous_uv: Point,
        radius: u32,
    ) -> TexpaintResult<()> {
        let background = self.canvas.background();
        self.draw_with_previous(uv, radius, previous_uv, radius, background)
    }

    /// Applies one input sample: the per-tick entry point for a stroke input
    /// source.
    pub fn apply(&mut self, sample: &StrokeSample) -> TexpaintResult<()> {
        match (sample.erase, sample.previous_uv) {
            (true, Some(previous_uv)) => {
                self.erase_with_previous(sample.uv, previous_uv, sample.radius)
            }
            (true, None) => self.erase(sample.uv, sample.radius),
            (false, Some(previous_uv)) => self.draw_with_previous(
                sample.uv,
                sample.radius,
                previous_uv,
                sample.previous_radius,
                sample.color,
            ),
            (false, None) => self.draw(sample.uv, sample.radius, sample.color),
        }
    }

    /// Repaints the whole canvas with the background color and commits.
    ///
    /// Stroke continuity is untouched: a stroke in progress keeps extending
    /// from its previous point. Ending the stroke is [`Self::lift`]'s job.
    #[tracing::instrument(skip(self))]
    pub fn reset(&mut self) -> TexpaintResult<()> {
        let px = self.canvas.background().to_rgba8();
        self.canvas.reset_all(px);
        self.commit()
    }

    /// Ends the current stroke. Input sources call this on loss of contact so
    /// the next touch starts with a dab instead of a segment from a stale
    /// point.
    pub fn lift(&mut self) {
        self.state = StrokeState::Idle;
    }

    /// Current stroke continuity state.
    pub fn state(&self) -> StrokeState {
        self.state
    }

    /// True while a stroke is in progress.
    pub fn is_stroking(&self) -> bool {
        matches!(self.state, StrokeState::Stroking { .. })
    }

    /// The underlying pixel buffer.
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// The texture sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the surface, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn commit(&mut self) -> TexpaintResult<()> {
        self.sink
            .upload(self.canvas.width(), self.canvas.height(), self.canvas.as_bytes())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/draw.rs"]
mod tests;
