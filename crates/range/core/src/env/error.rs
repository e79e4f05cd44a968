use crate::error::ErrorSeverity;

/// Errors raised when a required oracle was not provided to the
/// environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("rng oracle not available")]
    RngNotAvailable,

    #[error("cost oracle not available")]
    CostsNotAvailable,
}

impl OracleError {
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}
