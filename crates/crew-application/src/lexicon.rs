//! Fixed word lists used by signal extraction.
//!
//! All matching happens against lower-cased tokens. Tables are ordered and
//! the order is significant: detected keyword classes are reported in
//! `KEYWORD_LEXICON` order and the first matching audience cue wins.

use serde::Serialize;
use strum::{Display, EnumIter};

/// A domain theme detected in the idea text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum KeywordClass {
    Analytics,
    RealTime,
    Integration,
    Collaboration,
    Commerce,
    Automation,
}

/// Terms that signal each keyword class. Multi-word terms match as phrases.
///
/// Everyday words such as "live", "report" or "store" only count inside a
/// phrase, so "Plan a live concert" stays generic.
pub const KEYWORD_LEXICON: &[(KeywordClass, &[&str])] = &[
    (
        KeywordClass::Analytics,
        &[
            "analytics",
            "analytic",
            "dashboard",
            "dashboards",
            "kpi",
            "kpis",
            "visualization",
            "visualizations",
            "data pipeline",
            "data pipelines",
            "usage metrics",
            "business intelligence",
        ],
    ),
    (
        KeywordClass::RealTime,
        &[
            "real-time",
            "realtime",
            "real time",
            "live updates",
            "live tracking",
            "live data",
            "event stream",
            "event streams",
            "websocket",
            "websockets",
        ],
    ),
    (
        KeywordClass::Integration,
        &[
            "api",
            "apis",
            "integration",
            "integrations",
            "webhook",
            "webhooks",
            "sdk",
            "connector",
            "connectors",
            "data sync",
            "plugin",
            "plugins",
        ],
    ),
    (
        KeywordClass::Collaboration,
        &[
            "collaboration",
            "collaborative",
            "collaborate",
            "multi-user",
            "multiplayer",
            "co-editing",
            "shared workspace",
            "shared workspaces",
            "chat",
            "teamwork",
        ],
    ),
    (
        KeywordClass::Commerce,
        &[
            "payment",
            "payments",
            "checkout",
            "ecommerce",
            "e-commerce",
            "online store",
            "online shop",
            "marketplace",
            "billing",
            "subscription",
            "subscriptions",
        ],
    ),
    (
        KeywordClass::Automation,
        &[
            "ai",
            "ml",
            "llm",
            "automation",
            "automate",
            "automated",
            "chatbot",
            "ai agent",
            "ai agents",
            "machine learning",
        ],
    ),
];

/// Audience cues and the phrase each one maps to.
pub const AUDIENCE_CUES: &[(&[&str], &str)] = &[
    (
        &["developer", "developers", "engineer", "engineers", "programmers"],
        "developer and engineering teams",
    ),
    (
        &["student", "students", "teacher", "teachers", "learners", "educators"],
        "students and educators",
    ),
    (
        &["patient", "patients", "clinician", "clinicians", "doctors", "nurses"],
        "patients and care teams",
    ),
    (
        &["customer", "customers", "shoppers", "buyers"],
        "customers and buyers",
    ),
    (&["marketer", "marketers", "marketing"], "marketing teams"),
    (
        &["founder", "founders", "startup", "startups"],
        "founders and startup teams",
    ),
    (
        &["creator", "creators", "artists", "musicians", "writers"],
        "creators and their audiences",
    ),
    (
        &["employee", "employees", "staff", "hr"],
        "employees and people teams",
    ),
    (
        &["family", "families", "parents", "kids", "children"],
        "families and parents",
    ),
    (
        &["gamer", "gamers", "players"],
        "players and community moderators",
    ),
];

/// Fallback audience when the text carries no cue.
pub const DEFAULT_AUDIENCE: &str = "early adopters and internal stakeholders";

/// Function words skipped when condensing the idea.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "of", "for", "to", "in", "on", "at", "by", "from",
    "into", "onto", "with", "without", "via", "as", "so", "that", "this", "these", "those", "it",
    "its", "is", "are", "be", "been", "was", "were", "will", "would", "can", "could", "should",
    "our", "my", "your", "their", "his", "her", "we", "i", "you", "they", "me", "us", "them",
    "some", "any", "all", "each", "every", "very", "just", "also", "using", "about", "which",
    "who", "where", "when", "while", "then", "than", "there", "here", "please", "new",
];

/// Generic product nouns that say nothing about the idea ("an app for ...").
pub const FILLER_NOUNS: &[&str] = &[
    "app",
    "apps",
    "application",
    "applications",
    "tool",
    "tools",
    "platform",
    "platforms",
    "system",
    "systems",
    "website",
    "websites",
    "site",
    "software",
    "solution",
    "thing",
];

/// Request verbs that usually open an idea ("Build a ...", "Plan a ...").
pub const LEADING_VERBS: &[&str] = &[
    "build",
    "create",
    "make",
    "design",
    "develop",
    "plan",
    "launch",
    "ship",
    "write",
    "implement",
    "prototype",
    "set",
    "setup",
    "start",
    "need",
    "want",
    "help",
    "add",
    "improve",
    "organize",
    "organise",
    "let",
    "lets",
    "let's",
    "i'd",
    "like",
];

/// Words that end an explicit "for ..." audience phrase.
pub const AUDIENCE_BOUNDARIES: &[&str] = &[
    "that", "which", "who", "with", "to", "so", "using", "by", "in", "on", "where", "while",
    "and", "or", "because", "via", "from",
];

/// Determiners dropped from the front of an explicit audience phrase.
pub const AUDIENCE_DETERMINERS: &[&str] = &["a", "an", "the", "our", "my", "your", "their", "all"];

/// Maximum words kept from an explicit "for ..." phrase.
pub const MAX_AUDIENCE_WORDS: usize = 5;

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word) || LEADING_VERBS.contains(&word)
}

pub fn is_filler(word: &str) -> bool {
    FILLER_NOUNS.contains(&word)
}

/// "tracking", "managing". Short words like "king" or "ring" are not.
pub fn is_gerund(word: &str) -> bool {
    word.chars().count() > 4 && word.ends_with("ing")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_keyword_class_has_terms() {
        let covered: BTreeSet<KeywordClass> = KEYWORD_LEXICON.iter().map(|(c, _)| *c).collect();
        let all: BTreeSet<KeywordClass> = KeywordClass::iter().collect();
        assert_eq!(covered, all);
        assert!(KEYWORD_LEXICON.iter().all(|(_, terms)| !terms.is_empty()));
    }

    #[test]
    fn test_terms_are_lowercase() {
        for (_, terms) in KEYWORD_LEXICON {
            for term in *terms {
                assert_eq!(*term, term.to_lowercase());
            }
        }
        for (cues, _) in AUDIENCE_CUES {
            for cue in *cues {
                assert_eq!(*cue, cue.to_lowercase());
            }
        }
    }

    #[test]
    fn test_lexicon_order_matches_declaration_order() {
        let order: Vec<KeywordClass> = KEYWORD_LEXICON.iter().map(|(c, _)| *c).collect();
        let declared: Vec<KeywordClass> = KeywordClass::iter().collect();
        assert_eq!(order, declared);
    }

    #[test]
    fn test_leading_verbs_count_as_stopwords() {
        assert!(is_stopword("build"));
        assert!(is_stopword("the"));
        assert!(!is_stopword("portal"));
    }

    #[test]
    fn test_filler_and_gerunds() {
        assert!(is_filler("app"));
        assert!(is_filler("platform"));
        assert!(!is_filler("portal"));
        assert!(is_gerund("tracking"));
        assert!(!is_gerund("king"));
        assert!(!is_gerund("expenses"));
    }

    #[test]
    fn test_everyday_words_are_not_single_terms() {
        for word in ["live", "stream", "report", "data", "shared", "store", "sync"] {
            assert!(
                KEYWORD_LEXICON.iter().all(|(_, terms)| !terms.contains(&word)),
                "{word} should only match inside a phrase"
            );
        }
    }
}
