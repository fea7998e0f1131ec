//! Keyword category classifier.
//!
//! Categories come from an ordered rule table evaluated top to bottom; the
//! first rule with a matching keyword wins.

use serde::{Deserialize, Serialize};

use crate::calendar::EventRecord;

/// Coarse category derived from an event's title and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventCategory {
    Hackathon,
    Showcase,
    Networking,
    AiTech,
    General,
}

impl EventCategory {
    /// Returns the label shown in facet lists and matched by the classified filter.
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Hackathon => "Hackathon",
            EventCategory::Showcase => "Showcase",
            EventCategory::Networking => "Networking",
            EventCategory::AiTech => "AI & Tech",
            EventCategory::General => "General",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single classification rule: any keyword found selects `category`.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub keywords: &'static [&'static str],
    pub category: EventCategory,
}

impl CategoryRule {
    /// Tests the rule against already-lowercased text.
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|keyword| haystack.contains(keyword))
    }
}

/// Rules in precedence order.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["hackathon"],
        category: EventCategory::Hackathon,
    },
    CategoryRule {
        keywords: &["showcase"],
        category: EventCategory::Showcase,
    },
    CategoryRule {
        keywords: &["connect", "networking"],
        category: EventCategory::Networking,
    },
    CategoryRule {
        keywords: &["ai"],
        category: EventCategory::AiTech,
    },
];

/// Category used when no rule matches.
pub const DEFAULT_CATEGORY: EventCategory = EventCategory::General;

/// Classifies free text with `rules`, falling back to [`DEFAULT_CATEGORY`].
pub fn classify_with(rules: &[CategoryRule], title: &str, description: &str) -> EventCategory {
    let haystack = format!("{} {}", title, description).to_lowercase();

    rules
        .iter()
        .find(|rule| rule.matches(&haystack))
        .map(|rule| rule.category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Classifies a title and description with [`CATEGORY_RULES`].
pub fn classify(title: &str, description: &str) -> EventCategory {
    classify_with(CATEGORY_RULES, title, description)
}

/// Classifies an event record.
pub fn classify_event(event: &EventRecord) -> EventCategory {
    classify(&event.title, &event.description)
}

/// An event paired with its precomputed category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedEvent<'a> {
    pub event: &'a EventRecord,
    pub category: EventCategory,
}

/// Classifies every record once, keeping input order.
pub fn classify_events(records: &[EventRecord]) -> Vec<ClassifiedEvent<'_>> {
    records
        .iter()
        .map(|event| ClassifiedEvent {
            event,
            category: classify_event(event),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword_rules() {
        assert_eq!(classify("Winter Hackathon", ""), EventCategory::Hackathon);
        assert_eq!(classify("Portfolio Showcase", ""), EventCategory::Showcase);
        assert_eq!(classify("Founders Connect", ""), EventCategory::Networking);
        assert_eq!(classify("Networking Night", ""), EventCategory::Networking);
        assert_eq!(classify("AI Summit", ""), EventCategory::AiTech);
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(classify("Book Club", "Monthly reading"), EventCategory::General);
        assert_eq!(classify("", ""), EventCategory::General);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Contains both "hackathon" and "ai"; the hackathon rule is listed first.
        assert_eq!(classify("AI Robotics Hackathon", ""), EventCategory::Hackathon);
        // "showcase" precedes "connect".
        assert_eq!(classify("Connect Showcase", ""), EventCategory::Showcase);
        // "connect" precedes "ai".
        assert_eq!(classify("AI Connect", ""), EventCategory::Networking);
    }

    #[test]
    fn test_description_is_considered() {
        assert_eq!(
            classify("Weekend Build", "A hackathon for students"),
            EventCategory::Hackathon
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("HACKATHON", ""), EventCategory::Hackathon);
    }

    #[test]
    fn test_ai_matches_as_substring() {
        // Substring heuristic: "ai" inside another word still matches.
        assert_eq!(classify("Trail Run", ""), EventCategory::AiTech);
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = [CategoryRule {
            keywords: &["ai"],
            category: EventCategory::AiTech,
        }];
        assert_eq!(
            classify_with(&rules, "AI Robotics Hackathon", ""),
            EventCategory::AiTech
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(EventCategory::AiTech.label(), "AI & Tech");
        assert_eq!(EventCategory::General.to_string(), "General");
    }
}
