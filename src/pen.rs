//! Types at the input-source boundary: the per-tick stroke sample and the
//! nib-pressure model that turns raycast hit distance into a pen radius.
//!
//! The raycasting itself (pen transform against scene geometry) lives in the
//! host; this module only defines what the host hands the surface each tick.

use crate::foundation::core::{Color, Point};

/// One tick's worth of stroke input, as produced by the host's raycaster
/// while the pen is in contact with the paintable surface.
///
/// On loss of contact the source calls
/// [`lift`](crate::DrawSurface::lift) instead of producing a sample, so the
/// next contact starts a fresh dab.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeSample {
    /// Current touch point, normalized UV.
    pub uv: Point,
    /// Explicit previous point, when the source tracks its own history.
    /// `None` lets the surface continue from its own stroke state.
    pub previous_uv: Option<Point>,
    /// Pen radius at the current point, pixels.
    pub radius: u32,
    /// Pen radius at the previous point, pixels. Ignored when `previous_uv`
    /// is `None` or when erasing.
    pub previous_radius: u32,
    /// Stroke color. Ignored when erasing.
    pub color: Color,
    /// Erase instead of paint (the target color becomes the background).
    pub erase: bool,
}

/// Distance-varying pen thickness.
///
/// The pen paints at full radius with the nib pressed flush against the
/// surface and tapers linearly to nothing across `nib_length` as the tip
/// backs away along the cast ray.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NibProfile {
    /// Maximum hit distance at which the pen still paints, world units.
    pub reach: f64,
    /// Length of the nib taper, world units.
    pub nib_length: f64,
    /// Radius painted at full pressure, pixels.
    pub max_radius: u32,
}

impl Default for NibProfile {
    fn default() -> Self {
        Self {
            reach: 2.0,
            nib_length: 0.5,
            max_radius: 5,
        }
    }
}

impl NibProfile {
    /// Pen radius for a hit at `distance` along the ray, clamped to
    /// `0..=max_radius`.
    pub fn radius_at(&self, distance: f64) -> u32 {
        let max = f64::from(self.max_radius);
        let radius = (self.reach - distance) / self.nib_length * max;
        radius.clamp(0.0, max) as u32
    }
}
