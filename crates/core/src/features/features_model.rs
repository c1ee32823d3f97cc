//! Feature vector computed per campaign per request.

use serde::{Deserialize, Serialize};

/// Normalized per-campaign feature scores, each in [0,1].
///
/// Constructed fresh for each scoring pass and discarded with the response;
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub urgency: f64,
    pub creator_trust: f64,
    pub social_proof: f64,
    pub trending: f64,
    pub success_probability: f64,
    pub category_affinity: f64,
    pub geo_affinity: f64,
    pub amount_compatibility: f64,
}

impl FeatureVector {
    /// Sum of the personalized features; the scorer weighs this as the
    /// personalization term when a donor profile was available.
    pub fn personalization_sum(&self) -> f64 {
        self.category_affinity + self.geo_affinity + self.amount_compatibility
    }

    /// True when every feature is finite and within [0,1].
    pub fn is_bounded(&self) -> bool {
        [
            self.urgency,
            self.creator_trust,
            self.social_proof,
            self.trending,
            self.success_probability,
            self.category_affinity,
            self.geo_affinity,
            self.amount_compatibility,
        ]
        .iter()
        .all(|value| value.is_finite() && (0.0..=1.0).contains(value))
    }
}
