//! Risk weights and thresholds.
//!
//! Signal weights are additive; the summed score is clamped to [0,100] and
//! classified by the two fixed thresholds below.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::campaigns::CampaignCategory;

/// Scores at or above this are high risk.
pub const RISK_HIGH_THRESHOLD: f64 = 60.0;

/// Scores at or above this (and below high) are medium risk.
pub const RISK_MEDIUM_THRESHOLD: f64 = 30.0;

/// Maximum contribution of the new-creator signal (brand-new account).
pub const NEW_CREATOR_MAX_RISK: f64 = 30.0;

/// Account age at which the new-creator signal reaches zero.
pub const NEW_CREATOR_AGE_HORIZON_DAYS: f64 = 90.0;

/// Contribution when the goal exceeds the category's typical ceiling.
pub const GOAL_EXCESSIVE_RISK: f64 = 25.0;

/// Goals below this are suspiciously small.
pub const GOAL_TRIVIAL_FLOOR: Decimal = dec!(100);
pub const GOAL_TRIVIAL_RISK: f64 = 15.0;

/// Contribution when the title or description nearly duplicates an
/// existing campaign.
pub const DUPLICATE_TEXT_RISK: f64 = 30.0;

/// How many recent campaigns from other creators the duplicate check scans.
pub const DUPLICATE_SCAN_LIMIT: i64 = 200;

/// Normalized description prefix length compared by the duplicate check.
pub const DUPLICATE_DESCRIPTION_PREFIX: usize = 120;

/// Rolling window for the creation-burst signal.
pub const CREATION_BURST_WINDOW_HOURS: i64 = 1;

/// A third creation attempt inside the window is classified high outright.
pub const CREATION_BURST_THRESHOLD: i64 = 3;
pub const CREATION_BURST_RISK: f64 = 60.0;

/// A second creation inside the window is suspicious but not damning.
pub const CREATION_PAIR_RISK: f64 = 20.0;

/// Donation-side: identical amounts inside the repeat window.
pub const REPEATED_AMOUNT_WINDOW_HOURS: i64 = 24;
pub const REPEATED_AMOUNT_THRESHOLD: usize = 3;
pub const REPEATED_AMOUNT_RISK: f64 = 25.0;

/// Donation-side: rapid repeats from one donor.
pub const RAPID_DONATION_WINDOW_MINUTES: i64 = 10;
pub const RAPID_DONATION_THRESHOLD: usize = 5;
pub const RAPID_DONATION_RISK: f64 = 30.0;

/// Donation-side: single-gift absolute ceiling.
pub const DONATION_ABSOLUTE_CEILING: Decimal = dec!(1000000);
pub const DONATION_CEILING_RISK: f64 = 40.0;

/// Typical goal ceiling per category. Goals far above these are flagged.
pub fn category_goal_ceiling(category: CampaignCategory) -> Decimal {
    match category {
        CampaignCategory::Medical => dec!(2000000),
        CampaignCategory::Emergency => dec!(1000000),
        CampaignCategory::Education => dec!(1000000),
        CampaignCategory::DisasterRelief => dec!(5000000),
        CampaignCategory::Environment => dec!(1000000),
        CampaignCategory::Animals => dec!(500000),
        CampaignCategory::Community => dec!(1000000),
        CampaignCategory::Other => dec!(500000),
    }
}
