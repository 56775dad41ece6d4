//! Error types for rendering and parsing constant records.

use thiserror::Error;

/// Errors that can occur while moving a record across the wire.
///
/// Probing itself cannot fail: every value is fixed at compile time.
#[derive(Debug, Error)]
pub enum ConstantsError {
    /// The record could not be serialized.
    #[error("Failed to render constants record: {0}")]
    Render(#[source] serde_json::Error),

    /// A line could not be parsed back into a record.
    #[error("Failed to parse constants record: {0}")]
    Parse(#[source] serde_json::Error),

    /// Writing the record to its destination failed.
    #[error("Failed to write constants record: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for record operations.
pub type ConstantsResult<T> = Result<T, ConstantsError>;
