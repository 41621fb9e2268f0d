//! Turf, review, and derived-summary record types
//!
//! Serde field names follow the upstream booking documents
//! (`pricePerHour`, `like`, ...) so store JSON round-trips unchanged.

use serde::{Deserialize, Serialize};

/// A bookable turf venue. Created and updated by the external booking
/// system; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turf {
    /// Opaque stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Price per hour of booking
    #[serde(rename = "pricePerHour", default)]
    pub price_per_hour: f64,
    /// Free-text description; may be empty
    #[serde(default)]
    pub description: String,
    /// Amenity labels
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// A review of one turf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Identifier of the reviewed turf
    pub turf: String,
    /// Free-text comment; may be empty
    #[serde(default)]
    pub comment: String,
    /// Numeric rating
    #[serde(default)]
    pub rating: f64,
    /// Like count
    #[serde(default)]
    pub like: f64,
    /// Dislike count
    #[serde(default)]
    pub dislike: f64,
}

/// Per-turf aggregates derived from current reviews and bookings.
/// Always recomputed on read, never cached, so results reflect store
/// state at call time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurfSummary {
    /// Mean review rating, 0 if there are no reviews
    pub average_rating: f64,
    /// Sum of like counts across reviews
    pub likes: f64,
    /// Sum of dislike counts across reviews
    pub dislikes: f64,
    /// Number of reviews
    pub review_count: usize,
    /// Number of bookings referencing the turf
    pub booking_count: u64,
    /// All review comments joined with a single space
    pub comments: String,
}

impl TurfSummary {
    /// Summarize a turf's reviews and booking count.
    pub fn compute(reviews: &[Review], booking_count: u64) -> Self {
        let review_count = reviews.len();
        let average_rating = if review_count == 0 {
            0.0
        } else {
            reviews.iter().map(|r| r.rating).sum::<f64>() / review_count as f64
        };

        // Empty comments are skipped rather than joined as bare
        // separators; tokenization cannot tell the difference, but the
        // aggregate string stays free of stray spaces
        let comments = reviews
            .iter()
            .map(|r| r.comment.as_str())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        TurfSummary {
            average_rating,
            likes: reviews.iter().map(|r| r.like).sum(),
            dislikes: reviews.iter().map(|r| r.dislike).sum(),
            review_count,
            booking_count,
            comments,
        }
    }
}
