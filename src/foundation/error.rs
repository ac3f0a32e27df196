/// Result alias used across the crate.
pub type ClockfaceResult<T> = Result<T, ClockfaceError>;

/// Errors surfaced by the watch face core and its canvases.
///
/// Contract breaches (empty frame sequences, zero-sized surfaces) are reported as
/// [`ClockfaceError::Validation`] so host integration bugs show up early instead of drawing
/// nothing. A failed call never leaves partially updated state behind.
#[derive(thiserror::Error, Debug)]
pub enum ClockfaceError {
    /// A caller violated an input contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// A canvas backend could not execute a draw.
    #[error("render error: {0}")]
    Render(String),

    /// Face configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped source error (decode, IO).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClockfaceError {
    /// Build a [`ClockfaceError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ClockfaceError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ClockfaceError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
