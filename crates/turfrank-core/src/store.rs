//! Read-only access to turf, review, and booking data
//!
//! The document store is an external collaborator; this crate only reads
//! it. `TurfStore` is the seam the services depend on, and `JsonStore`
//! is the file-backed implementation used by the CLI (a single JSON
//! document holding the three collections).

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TurfRankError};
use crate::turf::{Review, Turf};

/// Read-only data source for turfs, reviews, and booking counts.
///
/// Every method returns `Result` so a data-source failure surfaces as a
/// single well-defined error; a failed fetch aborts the request.
pub trait TurfStore {
    /// Enumerate all turfs
    fn list_turfs(&self) -> Result<Vec<Turf>>;

    /// Fetch one turf by identifier; `TurfNotFound` if absent
    fn get_turf(&self, id: &str) -> Result<Turf>;

    /// Fetch all reviews for one turf, unordered
    fn reviews_for(&self, id: &str) -> Result<Vec<Review>>;

    /// Count bookings referencing one turf
    fn booking_count(&self, id: &str) -> Result<u64>;
}

/// A booking record; consumed only for its per-turf count.
#[derive(Debug, Clone, Deserialize)]
struct Booking {
    turf: String,
}

/// On-disk document shape: the three collections in one JSON object.
#[derive(Debug, Default, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    turves: Vec<Turf>,
    #[serde(default)]
    reviews: Vec<Review>,
    #[serde(default)]
    bookings: Vec<Booking>,
}

/// In-memory store loaded from a JSON document.
#[derive(Debug)]
pub struct JsonStore {
    turves: Vec<Turf>,
    reviews: Vec<Review>,
    bookings: Vec<Booking>,
}

impl JsonStore {
    /// Open a store from a JSON file.
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TurfRankError::InvalidStore {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let doc: StoreDocument =
            serde_json::from_str(&content).map_err(|e| TurfRankError::InvalidStore {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            turves = doc.turves.len(),
            reviews = doc.reviews.len(),
            bookings = doc.bookings.len(),
            "store_opened"
        );

        Ok(JsonStore {
            turves: doc.turves,
            reviews: doc.reviews,
            bookings: doc.bookings,
        })
    }

    /// Build a store from in-memory collections. Bookings are passed as
    /// turf identifiers, one per booking.
    pub fn from_parts(turves: Vec<Turf>, reviews: Vec<Review>, bookings: Vec<String>) -> Self {
        JsonStore {
            turves,
            reviews,
            bookings: bookings.into_iter().map(|turf| Booking { turf }).collect(),
        }
    }
}

impl TurfStore for JsonStore {
    fn list_turfs(&self) -> Result<Vec<Turf>> {
        Ok(self.turves.clone())
    }

    fn get_turf(&self, id: &str) -> Result<Turf> {
        self.turves
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| TurfRankError::turf_not_found(id))
    }

    fn reviews_for(&self, id: &str) -> Result<Vec<Review>> {
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.turf == id)
            .cloned()
            .collect())
    }

    fn booking_count(&self, id: &str) -> Result<u64> {
        Ok(self.bookings.iter().filter(|b| b.turf == id).count() as u64)
    }
}
