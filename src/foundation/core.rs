pub use kurbo::{Point, Vec2};

/// Straight-alpha RGBA8 pixel (no premultiplication).
pub type Rgba8 = [u8; 4];

/// Integer pixel position. May lie outside the canvas; writes there clip.
pub type PixelPos = (i64, i64);

/// Straight RGBA color with float channels nominally in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Quantizes to RGBA8. Channels clamp to `0..=1`; NaN maps to 0.
    pub fn to_rgba8(self) -> Rgba8 {
        fn quantize(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    pub fn from_rgba8(px: Rgba8) -> Self {
        Self {
            r: f32::from(px[0]) / 255.0,
            g: f32::from(px[1]) / 255.0,
            b: f32::from(px[2]) / 255.0,
            a: f32::from(px[3]) / 255.0,
        }
    }
}

/// Maps a normalized UV coordinate onto the pixel grid: `floor(u * width)`,
/// `floor(v * height)`. `v = 0` lands on the bottom row. Values outside
/// `[0,1]` map to off-canvas positions and clip downstream.
pub fn uv_to_pixel(uv: Point, width: u32, height: u32) -> PixelPos {
    (
        (uv.x * f64::from(width)).floor() as i64,
        (uv.y * f64::from(height)).floor() as i64,
    )
}
