//! Donor preference profile.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::campaigns::CampaignCategory;
use crate::donations::DonationWithCampaign;

/// Aggregated view of a donor's giving history.
///
/// Derived and ephemeral: built once per personalized request (or served
/// from the TTL cache) and never persisted. Region keys are lowercased city
/// and state names with raw occurrence counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorPreferenceProfile {
    /// Category -> share of donations, summing to 1.0 (empty when no history).
    pub category_distribution: HashMap<CampaignCategory, f64>,
    pub average_donation: Decimal,
    pub preferred_regions: HashMap<String, u32>,
    pub donation_frequency_per_day: f64,
}

impl DonorPreferenceProfile {
    /// The neutral profile for donors with no completed donations. Every
    /// extractor that consumes a profile treats this as "no signal."
    pub fn empty() -> Self {
        DonorPreferenceProfile {
            category_distribution: HashMap::new(),
            average_donation: Decimal::ZERO,
            preferred_regions: HashMap::new(),
            donation_frequency_per_day: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category_distribution.is_empty()
    }

    /// Case-insensitive region lookup.
    pub fn has_region(&self, region: &str) -> bool {
        self.preferred_regions.contains_key(&region.to_lowercase())
    }

    /// Builds a profile from a donor's joined donation history.
    ///
    /// Pure aggregation: category counts normalized to a distribution, raw
    /// region counts, mean amount, and frequency over the first-to-last-day
    /// span (`max(1)` guards the single-donation case).
    pub fn from_history(history: &[DonationWithCampaign]) -> Self {
        if history.is_empty() {
            return DonorPreferenceProfile::empty();
        }

        let total = history.len() as f64;
        let mut category_counts: HashMap<CampaignCategory, u32> = HashMap::new();
        let mut preferred_regions: HashMap<String, u32> = HashMap::new();
        let mut amount_sum = Decimal::ZERO;
        let mut first = history[0].donated_at;
        let mut last = history[0].donated_at;

        for donation in history {
            *category_counts.entry(donation.category).or_insert(0) += 1;
            amount_sum += donation.amount;
            first = first.min(donation.donated_at);
            last = last.max(donation.donated_at);

            if let Some(city) = donation.city.as_deref() {
                if !city.is_empty() {
                    *preferred_regions.entry(city.to_lowercase()).or_insert(0) += 1;
                }
            }
            if let Some(state) = donation.state.as_deref() {
                if !state.is_empty() {
                    *preferred_regions.entry(state.to_lowercase()).or_insert(0) += 1;
                }
            }
        }

        let category_distribution = category_counts
            .into_iter()
            .map(|(category, count)| (category, count as f64 / total))
            .collect();

        let span_days = (last - first).num_days().max(1);

        DonorPreferenceProfile {
            category_distribution,
            average_donation: amount_sum / Decimal::from(history.len() as i64),
            preferred_regions,
            donation_frequency_per_day: total / span_days as f64,
        }
    }
}
