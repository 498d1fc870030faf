use thiserror::Error;

/// Error surface of the core. `InvalidInput` and `NotFound` are expected,
/// caller-correctable conditions; `Internal` is anything unexpected and is
/// shown to callers only as a generic message (full detail goes to the
/// tracing channel).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CoreError {
    /// Stable machine-readable kind for the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::InvalidInput(_) => "invalid_input",
            CoreError::NotFound(_) => "not_found",
            CoreError::Internal(_) => "internal",
        }
    }
}
