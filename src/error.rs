use thiserror::Error;

/// Failures raised by the diagram core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoseError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The sample vectors cancel out, so no mean direction exists.
    #[error("indeterminate mean direction (resultant length {resultant_length:e})")]
    IndeterminateDirection { resultant_length: f64 },

    #[error("malformed axis mode: {0}")]
    MalformedMode(String),
}

pub type Result<T> = std::result::Result<T, RoseError>;
