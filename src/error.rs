use thiserror::Error;

/// Error type for rejected estimates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },
    #[error("mesh configuration not found: {0}")]
    UnknownMeshKey(String),
}

/// Convenience type for `Result<T, EstimateError>`.
pub type EstimateResult<T> = Result<T, EstimateError>;
