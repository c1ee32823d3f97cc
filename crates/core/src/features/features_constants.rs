//! Tunable constants for feature extraction.
//!
//! Every feature is normalized to [0,1]. Weighted boolean sums are divided by
//! their maximum attainable total instead of accumulating open-ended, so
//! scores stay comparable across campaigns.

/// Urgency ramp base for categories where deadlines carry real stakes
/// (medical, emergency, disaster relief).
pub const URGENCY_BASE_CRITICAL: f64 = 1.0;

/// Urgency ramp base for all other categories.
pub const URGENCY_BASE_STANDARD: f64 = 0.7;

/// Days over which one unit of urgency decays.
pub const URGENCY_RAMP_DAYS: f64 = 7.0;

/// Urgency never drops below this floor while a campaign is active.
pub const URGENCY_FLOOR: f64 = 0.05;

/// Creator trust signal weights. The sum is normalized by `TRUST_MAX`.
pub const TRUST_WEIGHT_VERIFIED: f64 = 1.0;
pub const TRUST_WEIGHT_PHONE: f64 = 0.7;
pub const TRUST_WEIGHT_PHOTO: f64 = 0.5;
pub const TRUST_WEIGHT_BIO: f64 = 0.3;

/// Maximum attainable trust sum; divisor for normalization.
pub const TRUST_MAX: f64 =
    TRUST_WEIGHT_VERIFIED + TRUST_WEIGHT_PHONE + TRUST_WEIGHT_PHOTO + TRUST_WEIGHT_BIO;

/// Trust score used when the creator record is unavailable.
pub const NEUTRAL_CREATOR_TRUST: f64 = 0.2;

/// Donor count at which the donor-count term of social proof saturates.
pub const SOCIAL_DONOR_COUNT_SCALE: f64 = 100.0;

/// Cap on the donor-count term.
pub const SOCIAL_DONOR_COUNT_CAP: f64 = 0.4;

/// Raised amount at which the raised term of social proof saturates.
pub const SOCIAL_RAISED_SCALE: f64 = 100_000.0;

/// Cap on the raised-amount term.
pub const SOCIAL_RAISED_CAP: f64 = 0.4;

/// Flat bonus once completion passes `SOCIAL_COMPLETION_THRESHOLD`.
pub const SOCIAL_COMPLETION_BONUS: f64 = 0.2;
pub const SOCIAL_COMPLETION_THRESHOLD: f64 = 0.25;

/// Campaigns younger than this many days are "fresh" and decay linearly
/// from 1.0.
pub const TRENDING_FRESH_DAYS: f64 = 7.0;

/// Campaigns younger than this many days score the flat mid tier.
pub const TRENDING_RECENT_DAYS: f64 = 30.0;

pub const TRENDING_MID_TIER: f64 = 0.5;
pub const TRENDING_FLOOR: f64 = 0.2;

/// Success-probability bands: funding pace relative to elapsed time.
pub const SUCCESS_AHEAD: f64 = 1.0;
pub const SUCCESS_NEAR_PACE: f64 = 0.75;
pub const SUCCESS_LAGGING: f64 = 0.45;
pub const SUCCESS_FAR_BEHIND: f64 = 0.2;

/// Pace ratios separating the bands (funding ratio / elapsed-time ratio).
pub const SUCCESS_NEAR_PACE_RATIO: f64 = 0.8;
pub const SUCCESS_LAGGING_RATIO: f64 = 0.5;

/// Neutral defaults for personalized features when no donor profile is
/// available. Mid-low rather than zero so anonymous requests do not
/// penalize campaigns, mid-range for amount compatibility where there is
/// no prior either way.
pub const NEUTRAL_CATEGORY_AFFINITY: f64 = 0.1;
pub const NEUTRAL_GEO_AFFINITY: f64 = 0.1;
pub const NEUTRAL_AMOUNT_COMPATIBILITY: f64 = 0.5;

/// Geo affinity tiers for profile-matched locations.
pub const GEO_CITY_MATCH: f64 = 1.0;
pub const GEO_STATE_MATCH: f64 = 0.7;
pub const GEO_NO_MATCH: f64 = 0.2;
