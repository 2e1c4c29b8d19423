/// Convenience result type used across texpaint.
pub type TexpaintResult<T> = Result<T, TexpaintError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TexpaintError {
    /// Canvas allocation with a zero-sized dimension.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Invalid user-provided configuration data.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors while publishing the pixel buffer to the visible texture.
    #[error("texture upload error: {0}")]
    Texture(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TexpaintError {
    /// Build a [`TexpaintError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`TexpaintError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TexpaintError::Texture`] value.
    pub fn texture(msg: impl Into<String>) -> Self {
        Self::Texture(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
