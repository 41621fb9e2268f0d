//! TurfRank Core Library
//!
//! Feature assembly, scoring, and similarity for bookable turf venues.
//! Converts heterogeneous per-turf data (text, numeric attributes,
//! derived sentiment) into fixed-width feature vectors, scores them with
//! a fitted regression model, and computes pairwise cosine similarity
//! in the same feature space.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod feature;
pub mod logging;
pub mod model;
pub mod rank;
pub mod sentiment;
pub mod similarity;
pub mod store;
pub mod text;
pub mod turf;
