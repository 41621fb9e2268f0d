//! TF-IDF text vectorization
//!
//! Each vectorizer is fit once on its own corpus (descriptions, amenity
//! strings, or aggregated comments) and frozen: vocabulary indices are
//! assigned in sorted term order at fit time and never change, so the
//! output dimensionality is constant across every transform. Tokens
//! absent from the fit vocabulary contribute zero weight rather than
//! erroring.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::text::tokenize_with_stemming;

/// A fitted TF-IDF text encoder.
///
/// TF is the raw in-document term count, IDF is smoothed
/// (`ln((1+n)/(1+df)) + 1`), and the output vector is L2-normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term to vector-index mapping, indices assigned in sorted term order
    vocabulary: HashMap<String, usize>,
    /// Per-index inverse document frequency weights
    idf: Vec<f64>,
    /// Whether Porter stemming was applied at fit time
    #[serde(default)]
    stemming: bool,
}

impl TfidfVectorizer {
    /// Fit a vectorizer on a corpus, one string per document.
    pub fn fit<S: AsRef<str>>(corpus: &[S], stemming: bool) -> Self {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in corpus {
            let seen: HashSet<String> =
                tokenize_with_stemming(doc.as_ref(), stemming).into_iter().collect();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<String> = doc_freq.keys().cloned().collect();
        terms.sort();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        let n_docs = corpus.len() as f64;
        let idf = terms
            .iter()
            .map(|t| {
                let df = doc_freq.get(t).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        TfidfVectorizer {
            vocabulary,
            idf,
            stemming,
        }
    }

    /// Output dimensionality, frozen at fit time
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Transform text into a dense TF-IDF vector of `dimension()` width.
    ///
    /// Unseen vocabulary is skipped; empty or fully-unseen text yields
    /// the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.idf.len()];

        for term in tokenize_with_stemming(text, self.stemming) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                vector[idx] += self.idf[idx];
            }
        }

        l2_normalize(&mut vector);
        vector
    }
}

/// Scale a vector to unit L2 norm in place; zero vectors are left as-is.
fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}
