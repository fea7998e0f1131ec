use std::{env, path::PathBuf};

use eventdash_core::query::{NormalizerConfig, DEFAULT_MAX_SEARCH_LEN};

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum accepted search length in characters (default: 100)
    pub max_search_len: usize,
    /// Number of generated events when no dataset file is given (default: 24)
    pub seed_count: u32,
    /// Dataset file to load instead of generated data (default: none)
    pub data_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTDASH_MAX_SEARCH_LEN` - Maximum search length (default: 100)
    /// - `EVENTDASH_SEED_COUNT` - Generated event count (default: 24)
    /// - `EVENTDASH_DATA` - Dataset JSON path (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            max_search_len: lookup("EVENTDASH_MAX_SEARCH_LEN")
                .and_then(|v| v.parse().ok())
                .filter(|len| *len > 0)
                .unwrap_or(DEFAULT_MAX_SEARCH_LEN),
            seed_count: lookup("EVENTDASH_SEED_COUNT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
            data_path: lookup("EVENTDASH_DATA")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Normalizer limits for search input.
    pub fn normalizer(&self) -> NormalizerConfig {
        NormalizerConfig::with_max_len(self.max_search_len)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
