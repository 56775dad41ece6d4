//! CLI-specific error types and mappings.

use platconst_core::ConstantsError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The record could not be rendered.
    #[error("{0}")]
    Core(String),

    /// Writing to stdout failed (closed pipe, full disk).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 70: Internal software error (`EX_SOFTWARE`)
    /// - 74: I/O error (`EX_IOERR`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 70,
            Self::Io(_) => 74,
        }
    }
}

impl From<ConstantsError> for CliError {
    fn from(err: ConstantsError) -> Self {
        match err {
            ConstantsError::Io(io_err) => Self::Io(io_err.to_string()),
            other => Self::Core(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
