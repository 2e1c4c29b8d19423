use crate::foundation::core::{PixelPos, Point, Rgba8, Vec2};
use crate::raster::{BufferWrite, SegmentStroke};

/// Half-width, in pixels, of the band around the ideal line that triggers a
/// stamp.
const BAND_HALF_WIDTH: f64 = 1.0;

/// Tolerance for the projection-parameter range test and the degenerate
/// segment guard.
const SEGMENT_EPS: f64 = 1e-6;

/// Stamps the footprint of a pen tip: a filled square of side
/// `2 * radius + 1` centered on `center` (the "disk" has always been square).
/// Radius 0 marks a single pixel. Clipping is the buffer's concern; the
/// footprint may extend past any edge.
pub fn mark_disk<B: BufferWrite + ?Sized>(buf: &mut B, center: PixelPos, radius: u32, color: Rgba8) {
    let r = i64::from(radius);
    for y in (center.1 - r)..=(center.1 + r) {
        for x in (center.0 - r)..=(center.0 + r) {
            buf.set_px(x, y, color);
        }
    }
}

/// Rasterizes one thickened stroke segment.
///
/// Both endpoints are stamped with their own radii first, so the line
/// terminates with the correct cap width at both ends regardless of how the
/// band test behaves there. The interior is then filled by scanning every
/// pixel of the buffer and stamping those inside the one-pixel band around
/// the segment; interior stamps use the end radius (thickness is not
/// interpolated along a segment).
///
/// The scan is O(width * height) per call. That is the engine's known
/// scalability ceiling at large texture sizes, and the reason hosts keep
/// paintable textures small or move to a stencil-based compositor.
pub fn fill_segment<B: BufferWrite + ?Sized>(buf: &mut B, stroke: &SegmentStroke) {
    mark_disk(buf, stroke.start, stroke.start_radius, stroke.color);
    mark_disk(buf, stroke.end, stroke.end_radius, stroke.color);
    if stroke.start == stroke.end {
        return;
    }

    let a = Point::new(stroke.start.0 as f64, stroke.start.1 as f64);
    let b = Point::new(stroke.end.0 as f64, stroke.end.1 as f64);
    let (width, height) = (i64::from(buf.width()), i64::from(buf.height()));
    for y in 0..height {
        for x in 0..width {
            if in_stroke_band(a, b, Point::new(x as f64, y as f64)) {
                mark_disk(buf, (x, y), stroke.end_radius, stroke.color);
            }
        }
    }
}

/// Point-on-segment membership: the projection parameter onto `ab` must lie
/// in `[0, 1]` (inclusive, within tolerance) and the perpendicular distance
/// to the line must be under [`BAND_HALF_WIDTH`]. A degenerate segment cannot
/// classify anything and excludes the pixel.
fn in_stroke_band(a: Point, b: Point, p: Point) -> bool {
    let ab: Vec2 = b - a;
    let len2 = ab.hypot2();
    if len2 <= SEGMENT_EPS {
        return false;
    }
    let ap: Vec2 = p - a;
    let t = ap.dot(ab) / len2;
    if t < -SEGMENT_EPS || t > 1.0 + SEGMENT_EPS {
        return false;
    }
    ab.cross(ap).abs() / len2.sqrt() < BAND_HALF_WIDTH
}

#[cfg(test)]
#[path = "../../tests/unit/raster/segment.rs"]
mod tests;
