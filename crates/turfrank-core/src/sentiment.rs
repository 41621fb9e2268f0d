//! Lexicon-based sentiment estimation
//!
//! Maps free text to a polarity scalar in [-1, 1]. The estimate is the
//! mean polarity of recognized words; a negator immediately before a
//! recognized word flips and damps its polarity by a factor of -0.5.
//! Empty or neutral text yields 0.0. Total over all string inputs.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::text::raw_words;

/// Damping factor applied to a word preceded by a negator
const NEGATION_FACTOR: f64 = -0.5;

static LEXICON: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();

static NEGATORS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn lexicon() -> &'static HashMap<&'static str, f64> {
    LEXICON.get_or_init(|| {
        [
            // Positive
            ("amazing", 0.8),
            ("awesome", 0.9),
            ("beautiful", 0.85),
            ("best", 1.0),
            ("clean", 0.4),
            ("comfortable", 0.5),
            ("convenient", 0.4),
            ("enjoyable", 0.6),
            ("excellent", 1.0),
            ("fantastic", 0.9),
            ("fresh", 0.3),
            ("friendly", 0.5),
            ("fun", 0.5),
            ("good", 0.7),
            ("great", 0.8),
            ("helpful", 0.5),
            ("lovely", 0.7),
            ("modern", 0.3),
            ("nice", 0.6),
            ("perfect", 1.0),
            ("pleasant", 0.5),
            ("recommended", 0.6),
            ("safe", 0.4),
            ("smooth", 0.4),
            ("spacious", 0.4),
            ("superb", 0.9),
            ("well", 0.3),
            ("wonderful", 0.9),
            // Negative
            ("awful", -1.0),
            ("bad", -0.7),
            ("broken", -0.5),
            ("crowded", -0.4),
            ("dangerous", -0.8),
            ("dirty", -0.6),
            ("disappointing", -0.7),
            ("expensive", -0.4),
            ("horrible", -1.0),
            ("mediocre", -0.3),
            ("muddy", -0.4),
            ("noisy", -0.4),
            ("old", -0.2),
            ("overpriced", -0.6),
            ("poor", -0.6),
            ("rough", -0.3),
            ("rude", -0.7),
            ("slippery", -0.4),
            ("terrible", -1.0),
            ("uncomfortable", -0.5),
            ("uneven", -0.3),
            ("unsafe", -0.7),
            ("worst", -1.0),
        ]
        .iter()
        .copied()
        .collect()
    })
}

fn negators() -> &'static HashSet<&'static str> {
    NEGATORS.get_or_init(|| {
        ["not", "no", "never", "neither", "nor", "cannot", "hardly", "barely", "isnt", "wasnt"]
            .iter()
            .copied()
            .collect()
    })
}

/// Estimate the polarity of a text in [-1, 1].
pub fn polarity(text: &str) -> f64 {
    let lex = lexicon();
    let neg = negators();

    let words = raw_words(text);
    let mut total = 0.0;
    let mut scored = 0usize;

    for (i, word) in words.iter().enumerate() {
        let Some(&weight) = lex.get(word.as_str()) else {
            continue;
        };

        let negated = i
            .checked_sub(1)
            .and_then(|prev| words.get(prev))
            .is_some_and(|prev| neg.contains(prev.as_str()));

        total += if negated {
            weight * NEGATION_FACTOR
        } else {
            weight
        };
        scored += 1;
    }

    if scored == 0 {
        return 0.0;
    }

    (total / scored as f64).clamp(-1.0, 1.0)
}
