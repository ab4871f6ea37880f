/// Crate-wide result alias.
pub type RevealResult<T> = Result<T, RevealError>;

/// Errors raised by loading, configuration, measurement and rendering APIs.
///
/// The reveal sequencer itself never surfaces these to a viewer: measurement errors exclude the
/// offending shape and everything else degrades to an immediate color reveal.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid configuration or input value.
    #[error("validation error: {0}")]
    Validation(String),

    /// A shape's arc length could not be determined.
    #[error("measurement error: {0}")]
    Measurement(String),

    /// SVG source could not be parsed.
    #[error("svg error: {0}")]
    Svg(String),

    /// Rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Anything else, with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Measurement`].
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }

    /// Build a [`RevealError::Svg`].
    pub fn svg(msg: impl Into<String>) -> Self {
        Self::Svg(msg.into())
    }

    /// Build a [`RevealError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
