//! Text processing utilities shared by the vectorizers
//!
//! Tokenization is part of the fitted feature space: the same rules must
//! apply when building a vocabulary and when transforming text at serving
//! time, or vocabulary lookups silently drift.

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

/// English stop words excluded from vectorizer vocabularies
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "about", "all", "also", "an", "and", "any", "are", "as", "at", "be", "because",
            "been", "but", "by", "can", "could", "do", "for", "from", "had", "has", "have",
            "he", "her", "his", "how", "if", "in", "into", "is", "it", "its", "just", "me",
            "more", "most", "my", "no", "nor", "not", "of", "on", "only", "or", "other",
            "our", "out", "she", "so", "some", "such", "than", "that", "the", "their",
            "them", "then", "there", "these", "they", "this", "to", "too", "very", "was",
            "we", "were", "what", "when", "where", "which", "while", "who", "why", "will",
            "with", "would", "you", "your",
        ]
        .iter()
        .copied()
        .collect()
    })
}

fn stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Tokenize text for vectorization: lowercase, split on non-alphanumeric
/// characters, keep tokens of at least two characters, drop stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let stop = stop_words();
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() >= 2)
        .filter(|s| !stop.contains(s))
        .map(|s| s.to_string())
        .collect()
}

/// Tokenize text with optional Porter stemming.
///
/// Whether stemming applies is a fit-time choice frozen into each
/// vectorizer's state, so fitting and serving can never disagree.
pub fn tokenize_with_stemming(text: &str, stem: bool) -> Vec<String> {
    let tokens = tokenize(text);
    if !stem {
        return tokens;
    }

    let st = stemmer();
    tokens.iter().map(|t| st.stem(t).to_string()).collect()
}

/// Split text into raw lowercase words without stop-word or length
/// filtering. Used by the sentiment estimator, where function words like
/// "not" carry signal.
pub fn raw_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize("Clean, WELL-lit field!");
        assert_eq!(tokens, vec!["clean", "well", "lit", "field"]);
    }

    #[test]
    fn test_tokenize_removes_stop_words() {
        let tokens = tokenize("the turf is near the river");
        assert_eq!(tokens, vec!["turf", "near", "river"]);
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        let tokens = tokenize("a 5 x side pitch");
        assert_eq!(tokens, vec!["side", "pitch"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   "), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_with_stemming_disabled() {
        let tokens = tokenize_with_stemming("floodlights parking grounds", false);
        assert_eq!(tokens, vec!["floodlights", "parking", "grounds"]);
    }

    #[test]
    fn test_tokenize_with_stemming_enabled() {
        let tokens = tokenize_with_stemming("floodlights grounds", true);
        assert_eq!(tokens, vec!["floodlight", "ground"]);
    }

    #[test]
    fn test_raw_words_keeps_function_words() {
        let words = raw_words("not a great pitch");
        assert_eq!(words, vec!["not", "a", "great", "pitch"]);
    }
}
