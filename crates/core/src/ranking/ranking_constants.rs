//! Relevance weights.
//!
//! The combined score mixes normalized [0,1] features with raw-scale inputs
//! (text-match score, completion percentage, donor count), so the weights do
//! not sum to 1; they size each term's contribution against the others. With
//! every normalized feature saturated and no raw-scale input, the feature
//! terms contribute at most `W_CREATOR_TRUST + W_SOCIAL_PROOF + W_URGENCY +
//! W_TRENDING + 3 * W_PERSONALIZATION`.

/// Applied to completion percentage (0-100, above for overfunded).
pub const W_COMPLETION: f64 = 0.01;

/// Applied to the raw donor count (unbounded boost).
pub const W_DONOR_COUNT: f64 = 0.002;

pub const W_CREATOR_TRUST: f64 = 1.0;
pub const W_SOCIAL_PROOF: f64 = 1.5;
pub const W_URGENCY: f64 = 2.0;
pub const W_TRENDING: f64 = 1.0;

/// Applied to the sum of the three personalized features, and only added
/// when a donor profile was available for the request.
pub const W_PERSONALIZATION: f64 = 1.5;
