//! Top-level error type for the binary.
//!
//! Folds each subsystem's error enum into one type so `main` can map
//! every failure kind to its own exit code.

use thiserror::Error;

use crate::fetch::FetchError;
use crate::report::ReportError;

/// Terminal failures. None are retried.
#[derive(Debug, Error)]
pub enum AppError {
    /// Wrong number of positional arguments.
    #[error("{}", crate::constants::USAGE)]
    Usage,

    /// Network, TLS, or URL failure before a body was received.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The received body could not be interpreted.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl AppError {
    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage => 1,
            AppError::Fetch(_) => 2,
            AppError::Report(_) => 3,
        }
    }
}
