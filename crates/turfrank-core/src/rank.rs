//! Ranking service: score every turf and return the top K
//!
//! Stateless per request beyond the immutable artifacts: each call
//! re-enumerates the store and recomputes derived summaries, so results
//! reflect current review and booking state.

use serde::Serialize;

use crate::artifacts::Artifacts;
use crate::error::Result;
use crate::feature::{FeatureAssembler, FeatureMode};
use crate::store::TurfStore;

/// One entry of the top-ranked list, shaped for the external web layer.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTurf {
    pub id: String,
    pub name: String,
    #[serde(rename = "pricePerHour")]
    pub price_per_hour: f64,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: usize,
    pub predicted_score: f64,
}

/// Scores and ranks all turfs with the fitted model.
pub struct RankingService<'a> {
    artifacts: &'a Artifacts,
    store: &'a dyn TurfStore,
}

impl<'a> RankingService<'a> {
    pub fn new(artifacts: &'a Artifacts, store: &'a dyn TurfStore) -> Self {
        RankingService { artifacts, store }
    }

    /// Return the top `limit` turfs by predicted score, non-increasing.
    ///
    /// Ties keep store enumeration order (stable sort, no secondary
    /// key). An empty store yields an empty list.
    #[tracing::instrument(skip(self))]
    pub fn top_ranked(&self, limit: usize) -> Result<Vec<RankedTurf>> {
        let assembler = FeatureAssembler::new(self.artifacts, self.store);
        let turves = self.store.list_turfs()?;

        let mut ranked = Vec::with_capacity(turves.len());
        for turf in turves {
            let assembled = assembler.assemble(&turf, FeatureMode::Ranking)?;
            let predicted_score = self.artifacts.model.predict(&assembled.vector)?;

            tracing::debug!(turf = %turf.id, score = predicted_score, "scored_turf");

            ranked.push(RankedTurf {
                id: turf.id,
                name: turf.name,
                price_per_hour: turf.price_per_hour,
                average_rating: assembled.summary.average_rating,
                review_count: assembled.summary.review_count,
                predicted_score,
            });
        }

        ranked.sort_by(|a, b| b.predicted_score.total_cmp(&a.predicted_score));
        ranked.truncate(limit);
        Ok(ranked)
    }
}
