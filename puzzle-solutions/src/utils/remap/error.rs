use thiserror::Error;

/// Errors raised while parsing remap input or running the pipeline
///
/// Neither kind is recoverable: the computation is deterministic, so the same
/// input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemapError {
    /// The input text does not follow the expected line format
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    /// The input is well formed but cannot produce an answer
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RemapError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
