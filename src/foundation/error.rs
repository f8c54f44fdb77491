/// Convenience result type used across strokemask.
pub type MaskResult<T> = Result<T, MaskError>;

/// Every failure the generators and frame transforms can report.
#[derive(thiserror::Error, Debug)]
pub enum MaskError {
    /// Distribution name outside `{uniform, gaussian}`.
    #[error("unsupported distribution: {0}")]
    UnsupportedDistribution(String),

    /// Pixel layout outside `{binary, grayscale, rgb}`.
    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    /// Caller-provided parameters that cannot drive generation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON configuration that failed to decode.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, typically image IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskError {
    /// Build a [`MaskError::UnsupportedDistribution`] value.
    pub fn unsupported_distribution(msg: impl Into<String>) -> Self {
        Self::UnsupportedDistribution(msg.into())
    }

    /// Build a [`MaskError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`MaskError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`MaskError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
