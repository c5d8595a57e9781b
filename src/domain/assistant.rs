//! Assistant intent classification.
//!
//! Free-text operator questions are mapped to a closed set of intents; the
//! caller decides what to show for each, usually a slice of the report.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::recommendation::Category;

/// What an operator question is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Prioritize,
    Timeline,
    Risk,
    Cost,
    Licensing,
    DirectoryIntegration,
    General,
}

/// Keyword table, checked top to bottom. `General` is the fallback.
///
/// Entries ending in `*` match as word prefixes, all others as whole words
/// or phrases.
const KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Prioritize, &["priorit*", "first", "order"]),
    (Intent::Timeline, &["timeline", "when", "schedule", "phase*", "how long"]),
    (Intent::Risk, &["risk*", "safe*", "downtime"]),
    (Intent::Cost, &["cost*", "sav*", "cheap*", "spend*", "budget"]),
    (Intent::Licensing, &["licens*", "hybrid"]),
    (Intent::DirectoryIntegration, &["active directory", "ad", "domain controller*"]),
];

impl Intent {
    /// Classifies a question by keyword.
    pub fn classify(question: &str) -> Intent {
        let words: Vec<String> = question
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| matches_keyword(&words, k)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::General)
    }

    /// The recommendation category most relevant to this intent, if any.
    pub fn related_category(&self) -> Option<Category> {
        match self {
            Intent::Licensing | Intent::DirectoryIntegration => Some(Category::Licensing),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Intent::Prioritize => "prioritize",
            Intent::Timeline => "timeline",
            Intent::Risk => "risk",
            Intent::Cost => "cost",
            Intent::Licensing => "licensing",
            Intent::DirectoryIntegration => "directory_integration",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn matches_keyword(words: &[String], keyword: &str) -> bool {
    let parts: Vec<&str> = keyword.split(' ').collect();
    words.windows(parts.len()).any(|window| {
        window.iter().zip(&parts).all(|(word, part)| match part.strip_suffix('*') {
            Some(prefix) => word.starts_with(prefix),
            None => word == part,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_keyword() {
        assert_eq!(
            Intent::classify("How can I prioritize these recommendations?"),
            Intent::Prioritize
        );
        assert_eq!(Intent::classify("When should we start?"), Intent::Timeline);
        assert_eq!(Intent::classify("Is right-sizing safe?"), Intent::Risk);
        assert_eq!(Intent::classify("How do I reduce costs further?"), Intent::Cost);
        assert_eq!(Intent::classify("Does the hybrid benefit apply?"), Intent::Licensing);
        assert_eq!(
            Intent::classify("What about our Active Directory forest?"),
            Intent::DirectoryIntegration
        );
    }

    #[test]
    fn earlier_intents_win() {
        assert_eq!(
            Intent::classify("What is the priority and timeline?"),
            Intent::Prioritize
        );
        assert_eq!(Intent::classify("Licensing cost?"), Intent::Cost);
    }

    #[test]
    fn short_keywords_match_whole_words_only() {
        assert_eq!(Intent::classify("Can the AD sync stay?"), Intent::DirectoryIntegration);
        assert_eq!(Intent::classify("Tell me about load balancers"), Intent::General);
    }

    #[test]
    fn unknown_questions_are_general() {
        assert_eq!(Intent::classify(""), Intent::General);
        assert_eq!(Intent::classify("Hello there"), Intent::General);
    }
}
