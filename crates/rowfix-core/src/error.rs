//! Error taxonomy: fatal run errors versus row-local transform failures.

use thiserror::Error;

/// Errors that abort the entire run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The input ended before a header line was produced.
    #[error("no column headings found")]
    MissingHeader,
    /// The source or one of the sinks failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures confined to a single field's transform.
///
/// A row that produces one of these is dropped from the output and its
/// `Display` message becomes one line on the error sink; the run itself
/// continues with the next row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Timestamp text did not match `M/d/yy h:mm:ss a` or named an
    /// invalid instant.
    #[error("text '{0}' could not be parsed as a timestamp")]
    Timestamp(String),
    /// Zip field contained something other than base-10 digits.
    #[error("invalid numeric value: '{0}'")]
    Numeric(String),
    /// Duration field did not match `H:M:S.f`.
    #[error("unrecognized duration format: {0}")]
    DurationFormat(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
