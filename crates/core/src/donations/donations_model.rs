//! Donation domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::campaigns::CampaignCategory;

/// Domain model representing a completed donation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub donor_id: String,
    pub campaign_id: String,
    pub amount: Decimal,
    pub donated_at: DateTime<Utc>,
    pub payment_method: String,
}

/// Donation joined with the campaign fields needed for preference profiling.
///
/// The store produces these rows in one read so profile building never does
/// per-donation campaign lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationWithCampaign {
    pub id: String,
    pub donor_id: String,
    pub campaign_id: String,
    pub amount: Decimal,
    pub donated_at: DateTime<Utc>,
    pub category: CampaignCategory,
    pub state: Option<String>,
    pub city: Option<String>,
}

/// Aggregate donation activity for one campaign over a rolling window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationVelocity {
    pub donation_count: i64,
    pub total_amount: Decimal,
}
