//! Per-turf feature assembly
//!
//! Gathers one turf's raw fields and related records, runs them through
//! the fitted artifacts, and concatenates the result in the fixed order
//! the model was fit against:
//!
//! ```text
//! [amenities | description | comments | numerics | sentiment]
//! ```
//!
//! with the sentiment pair present only in ranking mode. One assembler
//! serves both the ranking and similarity paths so the two can never
//! drift apart.

use super::schema::FeatureMode;
use crate::artifacts::Artifacts;
use crate::error::Result;
use crate::sentiment;
use crate::store::TurfStore;
use crate::turf::{Turf, TurfSummary};

/// A turf's assembled feature vector plus the derived summary it was
/// built from. The summary is returned alongside because the ranking
/// output records report it.
#[derive(Debug, Clone)]
pub struct AssembledTurf {
    pub vector: Vec<f64>,
    pub summary: TurfSummary,
}

/// Assembles feature vectors for turfs from a store and fitted artifacts.
pub struct FeatureAssembler<'a> {
    artifacts: &'a Artifacts,
    store: &'a dyn TurfStore,
}

impl<'a> FeatureAssembler<'a> {
    pub fn new(artifacts: &'a Artifacts, store: &'a dyn TurfStore) -> Self {
        FeatureAssembler { artifacts, store }
    }

    /// Assemble the feature vector for a turf fetched by identifier.
    /// `TurfNotFound` if the identifier is unknown.
    pub fn assemble_by_id(&self, id: &str, mode: FeatureMode) -> Result<AssembledTurf> {
        let turf = self.store.get_turf(id)?;
        self.assemble(&turf, mode)
    }

    /// Assemble the feature vector for an already-fetched turf.
    ///
    /// Reviews and booking count are re-read from the store on every
    /// call; derived aggregates are never cached across requests.
    pub fn assemble(&self, turf: &Turf, mode: FeatureMode) -> Result<AssembledTurf> {
        let reviews = self.store.reviews_for(&turf.id)?;
        let booking_count = self.store.booking_count(&turf.id)?;
        let summary = TurfSummary::compute(&reviews, booking_count);

        // List-like amenity input is normalized to one joined string
        let amenities = turf.amenities.join(", ");

        let mut vector = self.artifacts.tfidf_amen.transform(&amenities);
        vector.extend(self.artifacts.tfidf_desc.transform(&turf.description));
        vector.extend(self.artifacts.tfidf_comments.transform(&summary.comments));

        let numeric = [
            booking_count as f64,
            summary.likes,
            summary.dislikes,
            turf.price_per_hour,
            summary.average_rating,
        ];
        vector.extend(self.artifacts.scaler.transform(&numeric));

        if mode == FeatureMode::Ranking {
            vector.push(sentiment::polarity(&turf.description));
            vector.push(sentiment::polarity(&summary.comments));
        }

        tracing::trace!(
            turf = %turf.id,
            width = vector.len(),
            reviews = summary.review_count,
            bookings = booking_count,
            "assembled_features"
        );

        Ok(AssembledTurf { vector, summary })
    }
}
