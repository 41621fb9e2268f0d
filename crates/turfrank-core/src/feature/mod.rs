//! Feature space for turf scoring and similarity
//!
//! Everything that defines the fixed-width feature vector lives here:
//! the text vectorizers, the numeric scaler, the named layout schema,
//! and the assembler that combines them per turf.

mod assemble;
mod scale;
mod schema;
mod vectorize;

pub use assemble::{AssembledTurf, FeatureAssembler};
pub use scale::MinMaxScaler;
pub use schema::{FeatureMode, FeatureSchema, NUMERIC_FIELDS, SENTIMENT_FIELDS};
pub use vectorize::TfidfVectorizer;
