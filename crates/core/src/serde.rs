//! Serde helper functions for raw UI control values.
//!
//! Search boxes, selects and chip toggles submit strings: empty selections
//! arrive as `""` and tag chips may arrive as a comma separated list. These
//! helpers turn them into typed query fields.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

use crate::query::{normalize_search_input, NormalizerConfig};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize a search term through the input normalizer with default limits.
///
/// Over-long input fails deserialization instead of reaching the filters. The
/// maximum is always [`DEFAULT_MAX_SEARCH_LEN`](crate::query::DEFAULT_MAX_SEARCH_LEN);
/// use `QueryState::apply_search_limits` to enforce a configured maximum.
pub fn deserialize_search_term<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(raw) => normalize_search_input(&raw, &NormalizerConfig::default())
            .map_err(serde::de::Error::custom),
        None => Ok(String::new()),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    Text(String),
    List(Vec<String>),
}

/// Deserialize a tag set from either a list or a comma separated string.
/// Blank tags are dropped.
pub fn deserialize_tag_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawTags> = Option::deserialize(deserializer)?;
    let tags: Vec<String> = match raw {
        Some(RawTags::Text(text)) => text.split(',').map(str::to_string).collect(),
        Some(RawTags::List(list)) => list,
        None => Vec::new(),
    };

    Ok(tags
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_search_term")]
        search: String,
        #[serde(default, deserialize_with = "deserialize_tag_set")]
        tags: BTreeSet<String>,
    }

    #[test]
    fn test_empty_string_becomes_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": "  "}"#).unwrap();
        assert_eq!(parsed.string_field, None);

        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": "Berlin"}"#).unwrap();
        assert_eq!(parsed.string_field, Some("Berlin".to_string()));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(
            parsed,
            TestStruct {
                string_field: None,
                search: String::new(),
                tags: BTreeSet::new(),
            }
        );
    }

    #[test]
    fn test_search_term_is_normalized() {
        let parsed: TestStruct = serde_json::from_str(r#"{"search": "  <b>ai</b> "}"#).unwrap();
        assert_eq!(parsed.search, "bai/b");
    }

    #[test]
    fn test_search_term_too_long_is_rejected() {
        let json = format!(r#"{{"search": "{}"}}"#, "a".repeat(101));
        let result: Result<TestStruct, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_tags_from_comma_separated_string() {
        let parsed: TestStruct = serde_json::from_str(r#"{"tags": "ai, design,,  "}"#).unwrap();
        let expected: BTreeSet<String> = ["ai", "design"].iter().map(|s| s.to_string()).collect();
        assert_eq!(parsed.tags, expected);
    }

    #[test]
    fn test_tags_from_list() {
        let parsed: TestStruct = serde_json::from_str(r#"{"tags": ["tech", " "]}"#).unwrap();
        assert_eq!(parsed.tags.len(), 1);
        assert!(parsed.tags.contains("tech"));
    }
}
