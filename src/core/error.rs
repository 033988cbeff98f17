//! Error types for the travel search engine.

use crate::core::types::PorKey;
use std::io;
use thiserror::Error;

/// Internal error type covering every layer of the search stack.
///
/// Mirrors the taxonomy a production index engine needs: I/O, format,
/// corruption, and query-level failures all get their own variant rather
/// than being collapsed into a single string.
#[derive(Debug, Error)]
pub enum TrepError {
    /// I/O error while reading or writing the index file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The on-disk index file does not start with the expected magic bytes.
    #[error("invalid index file format: {0}")]
    InvalidFormat(String),

    /// The index file was built by an incompatible version of this crate.
    #[error("unsupported index version: {major}.{minor}")]
    UnsupportedVersion { major: u16, minor: u16 },

    /// A checksum stored in the header did not match the computed one.
    #[error("checksum mismatch in {section}")]
    ChecksumMismatch { section: String },

    /// A string table offset/length pair pointed outside the table.
    #[error("index out of bounds: {index} >= {max}")]
    IndexOutOfBounds { index: usize, max: usize },

    /// A string table entry was not valid UTF-8.
    #[error("invalid UTF-8 in string table")]
    InvalidUtf8,

    /// A POR record referenced a key that is not present in the index.
    #[error("document not found for key: {0}")]
    DocumentNotFound(PorKey),

    /// A catalog row failed to parse or was missing a mandatory field.
    ///
    /// Recoverable within a build: the offending row is skipped and logged
    /// (spec §7, *Parse* kind).
    #[error("catalog row {row} rejected: {reason}")]
    CatalogRow { row: usize, reason: String },

    /// A code (IATA/ICAO) or language tag failed to convert.
    #[error("code conversion failed: {0}")]
    CodeConversion(String),

    /// Query string failed input validation before it reached the matcher.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// No partition produced a positive combined weight for a slice.
    #[error("no best-matching partition for slice: {0:?}")]
    NoBestPartition(String),

    /// The secondary enrichment store could not resolve a known document.
    #[error("enricher has no row for key: {0}")]
    EnricherRowMissing(PorKey),

    /// The enrichment store's connection failed (transient, spec §7).
    #[error("enrichment backend unavailable: {0}")]
    EnricherTransient(String),

    /// A path failed validation (size limit, traversal attempt, etc).
    #[error("security error: {message}")]
    SecurityError { message: String },
}

/// Result type alias used throughout the crate's internals.
pub type Result<T> = std::result::Result<T, TrepError>;

/// Public error surface returned by the service entry points (spec §6.4).
///
/// `RequestInterpreter` (and the other service methods) convert every
/// internal [`TrepError`] into one of these before it reaches a caller, per
/// spec §7's propagation rule.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The query string was empty.
    #[error("empty query")]
    Empty,

    /// The requested index does not exist at the configured path.
    #[error("no such index")]
    NoSuchIndex,

    /// The index is present but corrupt, or out of sync with the enricher.
    #[error("index inconsistent: {0}")]
    IndexInconsistent(String),

    /// The secondary enrichment store is unreachable.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The request exceeded its allotted time budget.
    #[error("request timed out")]
    Timeout,
}

/// Result type alias for the public service surface.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

impl From<TrepError> for ServiceError {
    fn from(err: TrepError) -> Self {
        match err {
            TrepError::InvalidQuery(_) => ServiceError::Empty,
            TrepError::DocumentNotFound(_)
            | TrepError::NoBestPartition(_)
            | TrepError::InvalidFormat(_)
            | TrepError::UnsupportedVersion { .. }
            | TrepError::ChecksumMismatch { .. }
            | TrepError::IndexOutOfBounds { .. }
            | TrepError::InvalidUtf8 => ServiceError::IndexInconsistent(err.to_string()),
            TrepError::EnricherRowMissing(_) => ServiceError::IndexInconsistent(err.to_string()),
            TrepError::EnricherTransient(_) => ServiceError::BackendUnavailable(err.to_string()),
            TrepError::Io(_) => ServiceError::NoSuchIndex,
            other => ServiceError::BackendUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_empty_query_to_service_error() {
        let err: ServiceError = TrepError::InvalidQuery("empty".into()).into();
        assert!(matches!(err, ServiceError::Empty));
    }

    #[test]
    fn converts_missing_document_to_index_inconsistent() {
        let key = PorKey::new("NCE", "", 1);
        let err: ServiceError = TrepError::DocumentNotFound(key).into();
        assert!(matches!(err, ServiceError::IndexInconsistent(_)));
    }
}
