//! Service configuration for turfrank
//!
//! Resolution order at the CLI boundary: explicit flags, then environment
//! variables, then `turfrank.toml`, then the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default number of results returned by ranking and similarity queries
pub const DEFAULT_LIMIT: usize = 5;

fn default_data_path() -> PathBuf {
    PathBuf::from("turves.json")
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Path to the JSON store document (turves, reviews, bookings)
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Directory holding the fitted artifacts
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,

    /// Default top-K for ranking and similarity queries
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            data_path: default_data_path(),
            artifacts_dir: default_artifacts_dir(),
            default_limit: default_limit(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServiceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from `turfrank.toml` in the given directory,
    /// falling back to defaults if the file does not exist
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join("turfrank.toml");
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(ServiceConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.data_path, PathBuf::from("turves.json"));
        assert_eq!(config.artifacts_dir, PathBuf::from("artifacts"));
        assert_eq!(config.default_limit, 5);
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config: ServiceConfig = toml::from_str("data_path = \"custom.json\"").unwrap();
        assert_eq!(config.data_path, PathBuf::from("custom.json"));
        assert_eq!(config.default_limit, 5);
    }

    #[test]
    fn test_discover_without_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServiceConfig::discover(dir.path()).unwrap();
        assert_eq!(config.default_limit, 5);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turfrank.toml");
        std::fs::write(
            &path,
            "data_path = \"data/turves.json\"\nartifacts_dir = \"data/artifacts\"\ndefault_limit = 10\n",
        )
        .unwrap();

        let config = ServiceConfig::load(&path).unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/turves.json"));
        assert_eq!(config.artifacts_dir, PathBuf::from("data/artifacts"));
        assert_eq!(config.default_limit, 10);
    }
}
