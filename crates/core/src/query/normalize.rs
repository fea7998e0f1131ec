//! Search input normalization.
//!
//! Raw text typed into a search box is trimmed, stripped of characters used
//! for markup injection, and checked against a maximum length before it can
//! become a filter key.

use super::error::InputError;

/// Default maximum length of a search term, in characters.
pub const DEFAULT_MAX_SEARCH_LEN: usize = 100;

/// Characters removed from search input.
pub const STRIPPED_CHARS: &[char] = &['<', '>', '"', '\'', '`', '&', '\\'];

/// Limits applied by [`normalize_search_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Maximum accepted length in characters (after trimming).
    pub max_len: usize,
    pub stripped: &'static [char],
}

impl NormalizerConfig {
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len,
            ..Self::default()
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_SEARCH_LEN,
            stripped: STRIPPED_CHARS,
        }
    }
}

/// Trims, strips unsafe characters and clamps `raw` to at most `max_len` characters.
///
/// Always succeeds. Control characters are dropped along with `stripped`.
pub fn sanitize(raw: &str, config: &NormalizerConfig) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_control() && !config.stripped.contains(c))
        .take(config.max_len)
        .collect();

    // Stripping can expose whitespace that was inside the original bounds.
    cleaned.trim().to_string()
}

/// Normalizes raw search input into a filter key.
///
/// Input longer than `max_len` once trimmed is rejected rather than silently
/// truncated, so the caller keeps its previous term.
pub fn normalize_search_input(raw: &str, config: &NormalizerConfig) -> Result<String, InputError> {
    if config.max_len == 0 {
        return Err(InputError::InvalidLimit);
    }

    let len = raw.trim().chars().count();
    if len > config.max_len {
        tracing::warn!(len, max = config.max_len, "search input not accepted");
        return Err(InputError::TooLong {
            len,
            max: config.max_len,
        });
    }

    Ok(sanitize(raw, config))
}
