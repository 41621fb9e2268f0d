//! Fitted-artifact bundle
//!
//! The three text vectorizers, the numeric scaler, and the scoring model
//! are produced together by one offline fitting run and must be loaded
//! together: the model's input width is only meaningful against the
//! vocabularies it was fit with. `Artifacts::new` asserts that agreement
//! once; after construction the bundle is immutable.

use std::path::Path;

use crate::error::{Result, TurfRankError};
use crate::feature::{FeatureMode, FeatureSchema, MinMaxScaler, TfidfVectorizer};
use crate::model::ScoreModel;

/// Artifact file names, one JSON document per fitted component
const TFIDF_DESC_FILE: &str = "tfidf_desc.json";
const TFIDF_AMEN_FILE: &str = "tfidf_amen.json";
const TFIDF_COMMENTS_FILE: &str = "tfidf_comments.json";
const SCALER_FILE: &str = "scaler.json";
const MODEL_FILE: &str = "model.json";

/// The immutable set of fitted artifacts loaded at service start.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub tfidf_desc: TfidfVectorizer,
    pub tfidf_amen: TfidfVectorizer,
    pub tfidf_comments: TfidfVectorizer,
    pub scaler: MinMaxScaler,
    pub model: ScoreModel,
    schema: FeatureSchema,
}

impl Artifacts {
    /// Bundle fitted components, validating that the feature layout they
    /// imply matches the model's expected input width. A disagreement is
    /// a fatal configuration error, not a per-request condition.
    pub fn new(
        tfidf_desc: TfidfVectorizer,
        tfidf_amen: TfidfVectorizer,
        tfidf_comments: TfidfVectorizer,
        scaler: MinMaxScaler,
        model: ScoreModel,
    ) -> Result<Self> {
        model.validate()?;

        let schema = FeatureSchema {
            amenities_dim: tfidf_amen.dimension(),
            description_dim: tfidf_desc.dimension(),
            comments_dim: tfidf_comments.dimension(),
        };

        let expected = model.n_features;
        let actual = schema.width(FeatureMode::Ranking);
        if expected != actual {
            return Err(TurfRankError::ArtifactMismatch { expected, actual });
        }

        Ok(Artifacts {
            tfidf_desc,
            tfidf_amen,
            tfidf_comments,
            scaler,
            model,
            schema,
        })
    }

    /// Load all artifacts from a directory of JSON files.
    #[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
    pub fn load(dir: &Path) -> Result<Self> {
        let artifacts = Artifacts::new(
            read_json(dir, TFIDF_DESC_FILE)?,
            read_json(dir, TFIDF_AMEN_FILE)?,
            read_json(dir, TFIDF_COMMENTS_FILE)?,
            read_json(dir, SCALER_FILE)?,
            read_json(dir, MODEL_FILE)?,
        )?;

        tracing::debug!(
            amenities_dim = artifacts.schema.amenities_dim,
            description_dim = artifacts.schema.description_dim,
            comments_dim = artifacts.schema.comments_dim,
            n_features = artifacts.model.n_features,
            "artifacts_loaded"
        );

        Ok(artifacts)
    }

    /// Write all artifacts into a directory, one JSON file per component.
    /// Used by the offline fitting exporter and by tests.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        write_json(dir, TFIDF_DESC_FILE, &self.tfidf_desc)?;
        write_json(dir, TFIDF_AMEN_FILE, &self.tfidf_amen)?;
        write_json(dir, TFIDF_COMMENTS_FILE, &self.tfidf_comments)?;
        write_json(dir, SCALER_FILE, &self.scaler)?;
        write_json(dir, MODEL_FILE, &self.model)?;
        Ok(())
    }

    /// The feature layout implied by the fitted vectorizers
    pub fn schema(&self) -> FeatureSchema {
        self.schema
    }
}

fn read_json<T: serde::de::DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    let content =
        std::fs::read_to_string(&path).map_err(|e| TurfRankError::invalid_artifact(name, e))?;
    serde_json::from_str(&content).map_err(|e| TurfRankError::invalid_artifact(name, e))
}

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(dir.join(name), json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Tree, TreeNode};

    fn fitted_parts() -> (TfidfVectorizer, TfidfVectorizer, TfidfVectorizer, MinMaxScaler) {
        let desc = TfidfVectorizer::fit(&["clean grass pitch", "indoor futsal court"], false);
        let amen = TfidfVectorizer::fit(&["parking, floodlights", "cafeteria"], false);
        let comments = TfidfVectorizer::fit(&["loved playing here", "surface felt worn"], false);
        let scaler = MinMaxScaler::fit(&[
            [0.0, 0.0, 0.0, 50.0, 0.0],
            [10.0, 20.0, 5.0, 200.0, 5.0],
        ]);
        (desc, amen, comments, scaler)
    }

    fn leaf_model(n_features: usize) -> ScoreModel {
        ScoreModel {
            n_features,
            trees: vec![Tree {
                nodes: vec![TreeNode::Leaf { value: 1.0 }],
            }],
        }
    }

    #[test]
    fn test_new_accepts_matching_widths() {
        let (desc, amen, comments, scaler) = fitted_parts();
        let width =
            amen.dimension() + desc.dimension() + comments.dimension() + 5 + 2;
        let artifacts =
            Artifacts::new(desc, amen, comments, scaler, leaf_model(width)).unwrap();
        assert_eq!(artifacts.schema().width(FeatureMode::Ranking), width);
    }

    #[test]
    fn test_new_rejects_width_mismatch() {
        let (desc, amen, comments, scaler) = fitted_parts();
        let err = Artifacts::new(desc, amen, comments, scaler, leaf_model(3)).unwrap_err();
        assert!(matches!(err, TurfRankError::ArtifactMismatch { .. }));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (desc, amen, comments, scaler) = fitted_parts();
        let width =
            amen.dimension() + desc.dimension() + comments.dimension() + 5 + 2;
        let artifacts =
            Artifacts::new(desc, amen, comments, scaler, leaf_model(width)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        artifacts.save(dir.path()).unwrap();
        let restored = Artifacts::load(dir.path()).unwrap();

        assert_eq!(restored.schema(), artifacts.schema());
        assert_eq!(restored.model.n_features, width);
    }

    #[test]
    fn test_load_missing_file_is_invalid_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifacts::load(dir.path()).unwrap_err();
        assert!(matches!(err, TurfRankError::InvalidArtifact { .. }));
    }
}
