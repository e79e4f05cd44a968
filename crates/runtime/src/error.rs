//! Runtime errors.

use range_core::{ReloadError, SessionError, ShootError};

/// Errors surfaced by the session runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("session failed: {0}")]
    Session(#[from] SessionError),

    #[error("reload failed: {0}")]
    Reload(#[from] ReloadError),

    #[error("shot failed: {0}")]
    Shoot(#[from] ShootError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
