//! Human-readable recommendation reasons.
//!
//! Reasons are a side effect of feature-threshold checks, attached after
//! ranking. They are purely presentational: changing a threshold here may
//! change the strings shown, never the order of results.

use crate::campaigns::Campaign;
use crate::features::FeatureVector;

const CATEGORY_REASON_THRESHOLD: f64 = 0.5;
const GEO_REASON_THRESHOLD: f64 = 0.7;
const URGENCY_REASON_THRESHOLD: f64 = 0.8;
const TRENDING_REASON_THRESHOLD: f64 = 0.8;
const SOCIAL_REASON_THRESHOLD: f64 = 0.6;
const SUCCESS_REASON_THRESHOLD: f64 = 0.75;

/// Produces the ordered reason list for one recommended campaign.
///
/// `personalized` gates the profile-derived reasons so anonymous callers
/// never see "your interest" phrasing triggered by neutral defaults.
pub fn reasons_for(campaign: &Campaign, features: &FeatureVector, personalized: bool) -> Vec<String> {
    let mut reasons = Vec::new();

    if personalized && features.category_affinity > CATEGORY_REASON_THRESHOLD {
        reasons.push(format!(
            "Matches your interest in {}",
            campaign.category.label()
        ));
    }
    if personalized && features.geo_affinity >= GEO_REASON_THRESHOLD {
        reasons.push("Near your location".to_string());
    }
    if features.urgency >= URGENCY_REASON_THRESHOLD {
        reasons.push("Urgent need".to_string());
    }
    if features.trending >= TRENDING_REASON_THRESHOLD {
        reasons.push("Gaining momentum".to_string());
    }
    if features.social_proof >= SOCIAL_REASON_THRESHOLD {
        reasons.push("Strong donor support".to_string());
    }
    if features.success_probability >= SUCCESS_REASON_THRESHOLD {
        reasons.push("On track to reach its goal".to_string());
    }
    if campaign.is_verified {
        reasons.push("Verified campaign".to_string());
    }

    reasons
}
