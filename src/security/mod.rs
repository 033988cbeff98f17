//! Security utilities for the travel search engine.
//!
//! This module provides security-related functionality including:
//! - Path validation to prevent directory traversal attacks
//! - Input sanitization for queries
//! - Size limits to prevent DoS attacks

use crate::core::error::{Result, TrepError};
use std::path::{Path, PathBuf};

/// Maximum allowed index/catalog file size (100MB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum query string length (10KB).
pub const MAX_QUERY_LENGTH: usize = 10 * 1024;

/// Maximum number of locations returned by one request.
pub const MAX_RESULT_COUNT: usize = 10_000;

/// Validates and canonicalizes a file path to prevent directory traversal
/// attacks.
///
/// # Arguments
/// * `path` - The path to validate
/// * `allowed_dirs` - Optional list of allowed base directories
///
/// # Returns
/// * `Ok(PathBuf)` - The canonicalized safe path
/// * `Err(TrepError)` - If the path is invalid or attempts directory traversal
pub fn validate_path<P: AsRef<Path>>(path: P, allowed_dirs: Option<&[PathBuf]>) -> Result<PathBuf> {
    let path = path.as_ref();

    let path_str = path.to_string_lossy();
    if path_str.contains("..") || path_str.contains('~') {
        return Err(TrepError::SecurityError {
            message: "path contains suspicious patterns".to_string(),
        });
    }

    let canonical = path.canonicalize().map_err(|e| TrepError::SecurityError {
        message: format!("failed to canonicalize path: {e}"),
    })?;

    if let Some(allowed) = allowed_dirs {
        let is_allowed = allowed.iter().any(|dir| {
            if let Ok(canonical_dir) = dir.canonicalize() {
                canonical.starts_with(&canonical_dir)
            } else {
                false
            }
        });

        if !is_allowed {
            return Err(TrepError::SecurityError {
                message: "path is outside allowed directories".to_string(),
            });
        }
    }

    if let Ok(metadata) = std::fs::metadata(&canonical) {
        if metadata.len() > MAX_FILE_SIZE {
            return Err(TrepError::SecurityError {
                message: format!("file size exceeds maximum allowed size of {} MB", MAX_FILE_SIZE / (1024 * 1024)),
            });
        }
    }

    Ok(canonical)
}

/// Validates a query string for safety (spec §5 resource limits).
pub fn validate_query(query: &str) -> Result<&str> {
    if query.len() > MAX_QUERY_LENGTH {
        return Err(TrepError::SecurityError {
            message: format!("query exceeds maximum length of {MAX_QUERY_LENGTH} bytes"),
        });
    }

    if query.contains('\0') {
        return Err(TrepError::SecurityError {
            message: "query contains null bytes".to_string(),
        });
    }

    if query.chars().any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t') {
        return Err(TrepError::SecurityError {
            message: "query contains invalid control characters".to_string(),
        });
    }

    Ok(query)
}

/// Validates a requested result-count limit.
pub fn validate_limit(limit: usize) -> Result<usize> {
    if limit == 0 {
        return Err(TrepError::SecurityError {
            message: "limit must be greater than 0".to_string(),
        });
    }

    if limit > MAX_RESULT_COUNT {
        return Err(TrepError::SecurityError {
            message: format!("limit exceeds maximum of {MAX_RESULT_COUNT} results"),
        });
    }

    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn validate_path_rejects_traversal() {
        assert!(validate_path("../../../etc/passwd", None).is_err());
        assert!(validate_path("./../../sensitive.index", None).is_err());
        assert!(validate_path("~/.ssh/id_rsa", None).is_err());
    }

    #[test]
    fn validate_path_enforces_allowed_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let allowed = vec![temp_dir.path().to_path_buf()];

        let test_file = temp_dir.path().join("test.index");
        std::fs::write(&test_file, b"test").unwrap();

        assert!(validate_path(&test_file, Some(&allowed)).is_ok());
        assert!(validate_path("/etc/passwd", Some(&allowed)).is_err());
    }

    #[test]
    fn validate_query_rejects_control_characters() {
        assert!(validate_query("san francisco").is_ok());
        assert!(validate_query("query\0with\0nulls").is_err());
        assert!(validate_query(&"x".repeat(MAX_QUERY_LENGTH + 1)).is_err());
    }

    #[test]
    fn validate_limit_enforces_bounds() {
        assert!(validate_limit(10).is_ok());
        assert!(validate_limit(MAX_RESULT_COUNT).is_ok());
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(MAX_RESULT_COUNT + 1).is_err());
    }
}
