/// Convenience result type used across kinotype.
pub type KinotypeResult<T> = Result<T, KinotypeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum KinotypeError {
    /// Invalid user-provided configuration or board data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while acquiring camera frames.
    #[error("capture error: {0}")]
    Capture(String),

    /// Errors while loading or running a pose-estimation model.
    #[error("model error: {0}")]
    Model(String),

    /// Errors while measuring glyphs or resolving the letter layout.
    #[error("layout error: {0}")]
    Layout(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinotypeError {
    /// Build a [`KinotypeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KinotypeError::Capture`] value.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build a [`KinotypeError::Model`] value.
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Build a [`KinotypeError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Whether a frame loop should swallow this error and continue with
    /// the next frame. Only validation problems and wrapped foreign
    /// errors are considered fatal mid-loop.
    pub fn is_frame_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Capture(_) | Self::Model(_) | Self::Layout(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
