//! Named feature-vector layout shared by fitting and serving
//!
//! Sub-vector order is fixed and load-bearing: the scoring model was fit
//! against exactly this concatenation. The schema makes the layout
//! explicit so drift is caught by a width assertion at artifact load
//! time instead of silently misaligning features.

use serde::{Deserialize, Serialize};

/// Number of scaled numeric fields:
/// booking count, likes, dislikes, price, average rating
pub const NUMERIC_FIELDS: usize = 5;

/// Number of sentiment scalars appended on the ranking path:
/// description sentiment, aggregated comment sentiment
pub const SENTIMENT_FIELDS: usize = 2;

/// Which variant of the feature vector to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureMode {
    /// Full vector including the sentiment pair; input to the scoring model
    Ranking,
    /// Numeric-only variant without sentiment; used for cosine similarity
    Similarity,
}

/// Feature-vector layout: the dimensionality of each named sub-vector,
/// in concatenation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    /// Amenity-text encoding width
    pub amenities_dim: usize,
    /// Description-text encoding width
    pub description_dim: usize,
    /// Aggregated-comment-text encoding width
    pub comments_dim: usize,
}

impl FeatureSchema {
    /// Total vector width for the given mode
    pub fn width(&self, mode: FeatureMode) -> usize {
        let base = self.amenities_dim + self.description_dim + self.comments_dim + NUMERIC_FIELDS;
        match mode {
            FeatureMode::Ranking => base + SENTIMENT_FIELDS,
            FeatureMode::Similarity => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_width_adds_sentiment_pair() {
        let schema = FeatureSchema {
            amenities_dim: 7,
            description_dim: 11,
            comments_dim: 13,
        };
        assert_eq!(schema.width(FeatureMode::Similarity), 7 + 11 + 13 + 5);
        assert_eq!(schema.width(FeatureMode::Ranking), 7 + 11 + 13 + 5 + 2);
    }

    #[test]
    fn test_empty_vocabularies_still_carry_numerics() {
        let schema = FeatureSchema {
            amenities_dim: 0,
            description_dim: 0,
            comments_dim: 0,
        };
        assert_eq!(schema.width(FeatureMode::Similarity), NUMERIC_FIELDS);
        assert_eq!(
            schema.width(FeatureMode::Ranking),
            NUMERIC_FIELDS + SENTIMENT_FIELDS
        );
    }
}
