/// Convenience result type used across wavefill.
pub type WaveResult<T> = Result<T, WaveError>;

/// Top-level error taxonomy used by surface, animation and rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum WaveError {
    /// Invalid caller-provided data (shape codes, configuration values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or driving animation tracks.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors raised by a rendering backend.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaveError {
    /// Build a [`WaveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WaveError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`WaveError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WaveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
