//! Idea signal extraction.
//!
//! A pure string-analysis pass that condenses free text into the small,
//! immutable feature set every section template is bound against. The same
//! text always yields the same signal: there is no randomness, clock, or
//! external state involved.

use std::collections::BTreeSet;

use crew_core::{CrewError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::lexicon::{
    AUDIENCE_BOUNDARIES, AUDIENCE_CUES, AUDIENCE_DETERMINERS, DEFAULT_AUDIENCE, KEYWORD_LEXICON,
    KeywordClass, MAX_AUDIENCE_WORDS, is_filler, is_gerund, is_stopword,
};

/// Letters or digits, optionally joined by apostrophes or hyphens.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Alphabetic}\p{N}]+(?:['’\-][\p{Alphabetic}\p{N}]+)*")
        .expect("word pattern is a valid regex")
});

/// Words kept in the codename.
const CODENAME_WORDS: usize = 2;
/// Words kept in the focus phrase.
const FOCUS_WORDS: usize = 6;
/// Longest word (in characters) carried into any derived phrase.
const MAX_WORD_CHARS: usize = 24;

/// Codename used when the text contains no word characters at all.
pub const FALLBACK_CODENAME: &str = "Untitled Mission";
/// Focus phrase used when the text contains no word characters at all.
pub const FALLBACK_FOCUS: &str = "the proposed concept";

/// Features derived from one idea text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeaSignal {
    /// Trimmed text with runs of whitespace collapsed to one space
    pub text: String,
    /// `text`, lower-cased
    pub normalized: String,
    /// Capitalized condensation of the first significant words
    pub codename: String,
    /// Lower-case paraphrase built from the significant words
    pub focus: String,
    /// Detected keyword classes, in lexicon order
    pub keywords: Vec<KeywordClass>,
    /// Who the idea serves
    pub audience: String,
    /// False when `audience` is the generic fallback
    pub audience_detected: bool,
}

impl IdeaSignal {
    /// Extracts the signal from raw idea text.
    ///
    /// Fails only for empty or whitespace-only text. Every other input,
    /// including punctuation or emoji only, yields a complete signal that
    /// falls back to generic phrasing where nothing could be derived.
    pub fn extract(idea: &str) -> Result<Self> {
        let text = collapse_whitespace(idea);
        if text.is_empty() {
            return Err(CrewError::invalid_input("idea text is empty"));
        }
        let normalized = text.to_lowercase();

        let words: Vec<&str> = WORD_PATTERN.find_iter(&text).map(|m| m.as_str()).collect();
        let lowered: Vec<String> = words.iter().map(|w| fold(w)).collect();

        let codename = derive_codename(&words, &lowered);
        let focus = derive_focus(&lowered);
        let keywords = detect_keywords(&lowered);
        let (audience, audience_detected) = match detect_audience(&lowered, &normalized) {
            Some(audience) => (audience, true),
            None => (DEFAULT_AUDIENCE.to_string(), false),
        };

        Ok(Self {
            text,
            normalized,
            codename,
            focus,
            keywords,
            audience,
            audience_detected,
        })
    }

    /// True when the lexicon found at least one domain theme.
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-folds a word and normalizes typographic apostrophes.
fn fold(word: &str) -> String {
    word.to_lowercase().replace('’', "'")
}

fn truncate(word: &str) -> String {
    word.chars().take(MAX_WORD_CHARS).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Prefers content nouns, then any non-stopword, then the raw words.
fn derive_codename(words: &[&str], lowered: &[String]) -> String {
    let significant: Vec<(&str, &str)> = words
        .iter()
        .zip(lowered)
        .filter(|(_, folded)| !is_stopword(folded))
        .map(|(word, folded)| (*word, folded.as_str()))
        .collect();
    let content: Vec<&str> = significant
        .iter()
        .filter(|(_, folded)| !is_filler(folded) && !is_gerund(folded))
        .map(|(word, _)| *word)
        .collect();

    // An idea made only of stopwords still names itself after its own words.
    let picked: Vec<&str> = if !content.is_empty() {
        content
    } else if !significant.is_empty() {
        significant.iter().map(|(word, _)| *word).collect()
    } else {
        words.to_vec()
    };
    if picked.is_empty() {
        return FALLBACK_CODENAME.to_string();
    }

    picked
        .iter()
        .take(CODENAME_WORDS)
        .map(|word| capitalize(&truncate(word)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn derive_focus(lowered: &[String]) -> String {
    let significant: Vec<&String> = lowered.iter().filter(|w| !is_stopword(w)).collect();
    let picked: Vec<&String> = if significant.is_empty() {
        lowered.iter().collect()
    } else {
        significant
    };
    if picked.is_empty() {
        return FALLBACK_FOCUS.to_string();
    }

    picked
        .iter()
        .take(FOCUS_WORDS)
        .map(|word| truncate(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn detect_keywords(lowered: &[String]) -> Vec<KeywordClass> {
    let mut index: BTreeSet<&str> = BTreeSet::new();
    for word in lowered {
        index.insert(word.as_str());
        // "api-first" should still count as "api"
        for part in word.split('-') {
            index.insert(part);
        }
    }
    let phrase_text = format!(" {} ", lowered.join(" "));

    KEYWORD_LEXICON
        .iter()
        .filter(|(_, terms)| {
            terms.iter().any(|term| {
                if term.contains(' ') {
                    phrase_text.contains(&format!(" {term} "))
                } else {
                    index.contains(term)
                }
            })
        })
        .map(|(class, _)| *class)
        .collect()
}

/// Lexicon cues win over an explicit "for ..." phrase, which wins over the
/// generic fallback (handled by the caller).
fn detect_audience(lowered: &[String], normalized: &str) -> Option<String> {
    for word in lowered {
        if let Some((_, phrase)) = AUDIENCE_CUES
            .iter()
            .find(|(cues, _)| cues.contains(&word.as_str()))
        {
            return Some((*phrase).to_string());
        }
    }

    for clause in normalized.split(['.', ',', ';', ':', '!', '?', '(', ')']) {
        let clause_words: Vec<String> = WORD_PATTERN
            .find_iter(clause)
            .map(|m| fold(m.as_str()))
            .collect();
        if let Some(phrase) = explicit_audience(&clause_words) {
            return Some(phrase);
        }
    }

    None
}

fn explicit_audience(clause_words: &[String]) -> Option<String> {
    for (i, word) in clause_words.iter().enumerate() {
        if word != "for" {
            continue;
        }
        let phrase: Vec<String> = clause_words[i + 1..]
            .iter()
            .map(String::as_str)
            .skip_while(|w| AUDIENCE_DETERMINERS.contains(w))
            .take_while(|w| *w != "for" && !AUDIENCE_BOUNDARIES.contains(w))
            .take(MAX_AUDIENCE_WORDS)
            .map(truncate)
            .collect();

        if phrase.first().is_some_and(|first| names_people(first)) {
            return Some(phrase.join(" "));
        }
    }
    None
}

/// "for 2 weeks" describes time and "for tracking expenses" describes a
/// purpose. Neither names people.
fn names_people(first: &str) -> bool {
    let starts_with_digit = first.chars().next().is_some_and(|c| c.is_numeric());
    !starts_with_digit && !is_gerund(first) && !is_stopword(first)
}
