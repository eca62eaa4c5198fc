//! Style construction errors.

/// Error returned when a style cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The color input matched none of the accepted color shapes.
    #[error("invalid color spec '{input}': {reason}")]
    InvalidColorSpec { input: String, reason: String },
}

impl StyleError {
    pub(crate) fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        let err = StyleError::InvalidColorSpec {
            input: input.into(),
            reason: reason.into(),
        };
        tracing::debug!(error = %err, "rejected color spec");
        err
    }

    /// Returns the raw input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            StyleError::InvalidColorSpec { input, .. } => input,
        }
    }
}
