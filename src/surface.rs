//! The paintable-canvas abstraction: stroke orchestration and texture
//! publication.

use crate::foundation::core::Color;
use crate::foundation::error::{TexpaintError, TexpaintResult};

pub mod draw;
pub mod sink;

/// Surface construction options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceOptions {
    /// Fill the canvas with `background` at initialization instead of passing
    /// the base image through.
    #[serde(default)]
    pub reset_on_start: bool,
    /// Reset/erase target color.
    #[serde(default = "default_background")]
    pub background: Color,
}

fn default_background() -> Color {
    Color::WHITE
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            reset_on_start: false,
            background: Color::WHITE,
        }
    }
}

impl SurfaceOptions {
    /// Parses options from JSON, applying defaults for missing fields.
    pub fn from_json(json: &str) -> TexpaintResult<Self> {
        let opts: Self = serde_json::from_str(json)
            .map_err(|e| TexpaintError::config(format!("surface options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Rejects non-finite background channels.
    pub fn validate(&self) -> TexpaintResult<()> {
        let Color { r, g, b, a } = self.background;
        for (name, v) in [("r", r), ("g", g), ("b", b), ("a", a)] {
            if !v.is_finite() {
                return Err(TexpaintError::config(format!(
                    "background.{name} must be finite"
                )));
            }
        }
        Ok(())
    }
}
