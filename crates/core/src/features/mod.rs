//! Feature extraction - pure scoring signals per campaign.

mod extractors;
mod features_constants;
mod features_model;

pub use extractors::{
    amount_compatibility, category_affinity, creator_trust, extract, geo_affinity, social_proof,
    success_probability, trending, urgency,
};
pub use features_constants::*;
pub use features_model::FeatureVector;
