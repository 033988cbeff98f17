//! Configuration for the travel search engine (spec §A.3 expansion).

pub mod env;

use self::env::EnvConfig;
use std::path::PathBuf;

/// Runtime configuration for the full search stack: tokenizer, matcher,
/// slicing, and resource limits, mirroring the teacher's `config.rs` +
/// `config/env.rs` pattern.
#[derive(Debug, Clone)]
pub struct TrepConfig {
    /// Catalog CSV path, consumed by [`crate::index::builder::IndexBuilder`]
    /// through an external [`crate::index::builder::CatalogSource`].
    pub catalog_path: Option<PathBuf>,
    /// Index file path (spec §6.3).
    pub index_path: PathBuf,
    /// Minimum word length for the tokenizer filter (spec §4.2, default 3).
    pub min_word_length: usize,
    /// Matching-set cap (spec §4.7 step 3, default 30).
    pub matching_set_cap: usize,
    /// Query-slice co-match floor (spec §4.5 Open Question; resolved to
    /// `5.0`, see `DESIGN.md`).
    pub co_match_floor: f64,
    /// Maximum accepted query length, in characters.
    pub max_query_length: usize,
    /// Maximum result count returned per request.
    pub max_result_count: usize,
    /// Query timeout, in seconds (spec §5).
    pub query_timeout_secs: u64,
}

impl Default for TrepConfig {
    fn default() -> Self {
        let env_config = EnvConfig::from_env();
        Self::from(env_config)
    }
}

impl From<EnvConfig> for TrepConfig {
    fn from(env_config: EnvConfig) -> Self {
        Self {
            index_path: env_config.default_index_path(),
            catalog_path: env_config.catalog_path.clone(),
            min_word_length: env_config.min_word_length,
            matching_set_cap: env_config.matching_set_cap,
            co_match_floor: env_config.co_match_floor,
            max_query_length: env_config.max_query_length,
            max_result_count: env_config.max_result_count,
            query_timeout_secs: env_config.query_timeout_secs,
        }
    }
}

impl TrepConfig {
    /// Load configuration from environment variables, under the `TREP_`
    /// prefix (spec §A.3).
    pub fn from_env() -> Self {
        EnvConfig::from_env().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_spec_defaults() {
        let config = TrepConfig::default();
        assert_eq!(config.min_word_length, 3);
        assert_eq!(config.matching_set_cap, 30);
    }
}
