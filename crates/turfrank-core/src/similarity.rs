//! Similarity service: find turfs comparable to a reference turf
//!
//! Compares turfs by cosine similarity over the numeric-only feature
//! variant (no sentiment pair). Every vector is computed once per
//! request — a request-scoped batch, with no caching across requests, so
//! staleness semantics match the ranking path.

use serde::Serialize;

use crate::artifacts::Artifacts;
use crate::error::Result;
use crate::feature::{FeatureAssembler, FeatureMode};
use crate::store::TurfStore;

/// One entry of the similar-turfs list.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarTurf {
    pub id: String,
    pub name: String,
    pub similarity_score: f64,
}

/// Finds turfs nearest to a reference turf in feature space.
pub struct SimilarityService<'a> {
    artifacts: &'a Artifacts,
    store: &'a dyn TurfStore,
}

impl<'a> SimilarityService<'a> {
    pub fn new(artifacts: &'a Artifacts, store: &'a dyn TurfStore) -> Self {
        SimilarityService { artifacts, store }
    }

    /// Return the `limit` turfs most similar to `turf_id`, descending,
    /// excluding the reference itself. `TurfNotFound` if the reference
    /// identifier is unknown.
    #[tracing::instrument(skip(self))]
    pub fn find_similar(&self, turf_id: &str, limit: usize) -> Result<Vec<SimilarTurf>> {
        let assembler = FeatureAssembler::new(self.artifacts, self.store);
        let reference = assembler.assemble_by_id(turf_id, FeatureMode::Similarity)?;

        let mut similar = Vec::new();
        for turf in self.store.list_turfs()? {
            if turf.id == turf_id {
                continue;
            }

            let other = assembler.assemble(&turf, FeatureMode::Similarity)?;
            let similarity_score = cosine_similarity(&reference.vector, &other.vector);

            tracing::debug!(turf = %turf.id, similarity = similarity_score, "compared_turf");

            similar.push(SimilarTurf {
                id: turf.id,
                name: turf.name,
                similarity_score,
            });
        }

        similar.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        similar.truncate(limit);
        Ok(similar)
    }
}

/// Cosine similarity of two equal-length vectors.
///
/// Undefined for zero-magnitude input; defined here as 0.0 so degenerate
/// turfs (no text overlap with any vocabulary, all-minimum numerics)
/// compare as dissimilar instead of dividing by zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TurfRankError;
    use crate::feature::{MinMaxScaler, TfidfVectorizer, NUMERIC_FIELDS, SENTIMENT_FIELDS};
    use crate::model::{ScoreModel, Tree, TreeNode};
    use crate::store::JsonStore;
    use crate::turf::{Review, Turf};

    fn turf(id: &str, price: f64, description: &str, amenities: &[&str]) -> Turf {
        Turf {
            id: id.to_string(),
            name: format!("Turf {}", id),
            price_per_hour: price,
            description: description.to_string(),
            amenities: amenities.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn artifacts_for(store: &JsonStore) -> Artifacts {
        let turves = store.list_turfs().unwrap();
        let descriptions: Vec<String> = turves.iter().map(|t| t.description.clone()).collect();
        let amenities: Vec<String> = turves.iter().map(|t| t.amenities.join(", ")).collect();
        let comments = vec![String::new(); turves.len()];

        let tfidf_desc = TfidfVectorizer::fit(&descriptions, false);
        let tfidf_amen = TfidfVectorizer::fit(&amenities, false);
        let tfidf_comments = TfidfVectorizer::fit(&comments, false);
        let scaler = MinMaxScaler::fit(&[
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [10.0, 10.0, 10.0, 200.0, 5.0],
        ]);

        let width = tfidf_amen.dimension()
            + tfidf_desc.dimension()
            + tfidf_comments.dimension()
            + NUMERIC_FIELDS
            + SENTIMENT_FIELDS;
        let model = ScoreModel {
            n_features: width,
            trees: vec![Tree {
                nodes: vec![TreeNode::Leaf { value: 0.0 }],
            }],
        };

        Artifacts::new(tfidf_desc, tfidf_amen, tfidf_comments, scaler, model).unwrap()
    }

    fn fixture() -> JsonStore {
        JsonStore::from_parts(
            vec![
                turf("t-1", 100.0, "clean grass pitch", &["parking", "floodlights"]),
                turf("t-2", 95.0, "clean grass pitch", &["parking", "floodlights"]),
                turf("t-3", 30.0, "indoor futsal court", &["cafeteria"]),
            ],
            vec![Review {
                turf: "t-1".to_string(),
                comment: String::new(),
                rating: 4.0,
                like: 1.0,
                dislike: 0.0,
            }],
            vec!["t-1".to_string()],
        )
    }

    #[test]
    fn test_cosine_identical_vectors() {
        assert!((cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_vector_falls_back_to_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_excludes_reference_turf() {
        let store = fixture();
        let artifacts = artifacts_for(&store);
        let service = SimilarityService::new(&artifacts, &store);

        let similar = service.find_similar("t-1", 5).unwrap();
        assert_eq!(similar.len(), 2);
        assert!(similar.iter().all(|s| s.id != "t-1"));
    }

    #[test]
    fn test_near_twin_ranks_above_unrelated_turf() {
        let store = fixture();
        let artifacts = artifacts_for(&store);
        let service = SimilarityService::new(&artifacts, &store);

        let similar = service.find_similar("t-1", 5).unwrap();
        assert_eq!(similar[0].id, "t-2");
        assert!(similar[0].similarity_score > similar[1].similarity_score);
    }

    #[test]
    fn test_scores_within_unit_interval_bounds() {
        let store = fixture();
        let artifacts = artifacts_for(&store);
        let service = SimilarityService::new(&artifacts, &store);

        for entry in service.find_similar("t-3", 5).unwrap() {
            assert!((-1.0..=1.0).contains(&entry.similarity_score));
        }
    }

    #[test]
    fn test_unknown_reference_is_not_found() {
        let store = fixture();
        let artifacts = artifacts_for(&store);
        let service = SimilarityService::new(&artifacts, &store);

        let err = service.find_similar("t-404", 5).unwrap_err();
        assert!(matches!(err, TurfRankError::TurfNotFound { .. }));
    }

    #[test]
    fn test_limit_truncates() {
        let store = fixture();
        let artifacts = artifacts_for(&store);
        let service = SimilarityService::new(&artifacts, &store);

        assert_eq!(service.find_similar("t-1", 1).unwrap().len(), 1);
    }
}
