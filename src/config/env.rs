//! Environment variable configuration for the travel search engine.
//!
//! This module provides environment-based configuration with sensible
//! defaults.

use std::env;
use std::path::PathBuf;

/// Environment variable names
pub mod vars {
    /// Catalog CSV path (spec §6.1).
    pub const CATALOG_PATH: &str = "TREP_CATALOG_PATH";

    /// Index file path (spec §6.3).
    pub const INDEX_PATH: &str = "TREP_INDEX_PATH";

    /// Log level (trace, debug, info, warn, error).
    pub const LOG_LEVEL: &str = "TREP_LOG_LEVEL";

    /// Minimum word length for the tokenizer filter (spec §4.2).
    pub const MIN_WORD_LENGTH: &str = "TREP_MIN_WORD_LENGTH";

    /// Matching-set cap (spec §4.7 step 3).
    pub const MATCHING_SET_CAP: &str = "TREP_MATCHING_SET_CAP";

    /// Query-slice co-match floor (spec §4.5, Open Question).
    pub const CO_MATCH_FLOOR: &str = "TREP_CO_MATCH_FLOOR";

    /// Maximum accepted query length, in characters.
    pub const MAX_QUERY_LENGTH: &str = "TREP_MAX_QUERY_LENGTH";

    /// Maximum result count returned per request.
    pub const MAX_RESULT_COUNT: &str = "TREP_MAX_RESULT_COUNT";

    /// Query timeout in seconds (spec §5 cancellation/timeout).
    pub const QUERY_TIMEOUT_SECS: &str = "TREP_QUERY_TIMEOUT_SECS";

    /// Data directory for storing indices.
    pub const DATA_DIR: &str = "TREP_DATA_DIR";

    /// Enable debug mode.
    pub const DEBUG_MODE: &str = "TREP_DEBUG";
}

/// Runtime configuration from environment.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Catalog CSV path.
    pub catalog_path: Option<PathBuf>,
    /// Index file path.
    pub index_path: Option<PathBuf>,
    /// Log level.
    pub log_level: String,
    /// Minimum word length for the tokenizer filter.
    pub min_word_length: usize,
    /// Matching-set cap.
    pub matching_set_cap: usize,
    /// Query-slice co-match floor.
    pub co_match_floor: f64,
    /// Maximum accepted query length, in characters.
    pub max_query_length: usize,
    /// Maximum result count returned per request.
    pub max_result_count: usize,
    /// Query timeout in seconds.
    pub query_timeout_secs: u64,
    /// Data directory.
    pub data_dir: PathBuf,
    /// Debug mode.
    pub debug_mode: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            index_path: None,
            log_level: "info".to_string(),
            min_word_length: 3,
            matching_set_cap: 30,
            co_match_floor: crate::slices::query_slices::DEFAULT_CO_MATCH_FLOOR,
            max_query_length: 1024,
            max_result_count: 10_000,
            query_timeout_secs: 30,
            data_dir: default_data_dir(),
            debug_mode: false,
        }
    }
}

impl EnvConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var(vars::CATALOG_PATH) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Ok(path) = env::var(vars::INDEX_PATH) {
            config.index_path = Some(PathBuf::from(path));
        }
        if let Ok(level) = env::var(vars::LOG_LEVEL) {
            config.log_level = level.to_lowercase();
        }
        if let Ok(v) = env::var(vars::MIN_WORD_LENGTH) {
            if let Ok(n) = v.parse() {
                config.min_word_length = n;
            }
        }
        if let Ok(v) = env::var(vars::MATCHING_SET_CAP) {
            if let Ok(n) = v.parse() {
                config.matching_set_cap = n;
            }
        }
        if let Ok(v) = env::var(vars::CO_MATCH_FLOOR) {
            if let Ok(n) = v.parse() {
                config.co_match_floor = n;
            }
        }
        if let Ok(v) = env::var(vars::MAX_QUERY_LENGTH) {
            if let Ok(n) = v.parse() {
                config.max_query_length = n;
            }
        }
        if let Ok(v) = env::var(vars::MAX_RESULT_COUNT) {
            if let Ok(n) = v.parse() {
                config.max_result_count = n;
            }
        }
        if let Ok(v) = env::var(vars::QUERY_TIMEOUT_SECS) {
            if let Ok(n) = v.parse() {
                config.query_timeout_secs = n;
            }
        }
        if let Ok(dir) = env::var(vars::DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        config.debug_mode = env::var(vars::DEBUG_MODE)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        config
    }

    /// Get the default index path, falling back to the data directory.
    pub fn default_index_path(&self) -> PathBuf {
        self.index_path.clone().unwrap_or_else(|| self.data_dir.join("trep.index"))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(format!("invalid log level: {}", self.log_level)),
        }
        if self.min_word_length == 0 {
            return Err("min word length must be greater than 0".to_string());
        }
        if self.matching_set_cap == 0 {
            return Err("matching-set cap must be greater than 0".to_string());
        }
        if self.query_timeout_secs == 0 {
            return Err("query timeout must be greater than 0".to_string());
        }
        if self.max_result_count == 0 {
            return Err("max result count must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Get default data directory.
fn default_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("trep")
    } else {
        PathBuf::from("./data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_spec_defaults() {
        let config = EnvConfig::default();
        assert_eq!(config.min_word_length, 3);
        assert_eq!(config.matching_set_cap, 30);
        assert_eq!(config.co_match_floor, 5.0);
    }

    #[test]
    fn validation_rejects_invalid_log_level() {
        let mut config = EnvConfig::default();
        config.log_level = "noisy".to_string();
        assert!(config.validate().is_err());
    }
}
