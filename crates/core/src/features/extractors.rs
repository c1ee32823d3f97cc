//! Feature extractors.
//!
//! Pure functions from campaign (and optionally donor/profile) records to
//! normalized [0,1] scores. Same inputs, same output; degenerate inputs
//! (missing location, zero history, zero durations) resolve to the neutral
//! defaults in `features_constants` and never panic.

use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::campaigns::{Campaign, CampaignCategory};
use crate::donors::Donor;
use crate::features::features_constants::*;
use crate::features::features_model::FeatureVector;
use crate::personalization::DonorPreferenceProfile;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Computes the full feature vector for one campaign.
///
/// `creator` and `profile` are optional: absent records degrade the
/// corresponding features to their neutral defaults.
pub fn extract(
    campaign: &Campaign,
    creator: Option<&Donor>,
    profile: Option<&DonorPreferenceProfile>,
    now: DateTime<Utc>,
) -> FeatureVector {
    FeatureVector {
        urgency: urgency(campaign, now),
        creator_trust: creator_trust(creator),
        social_proof: social_proof(campaign),
        trending: trending(campaign, now),
        success_probability: success_probability(campaign, now),
        category_affinity: category_affinity(campaign, profile),
        geo_affinity: geo_affinity(campaign, profile),
        amount_compatibility: amount_compatibility(campaign, profile),
    }
}

/// Deadline urgency, scaled by category.
///
/// Medical, emergency, and disaster-relief campaigns ramp from a higher base
/// so they reach the ceiling sooner as the deadline approaches.
pub fn urgency(campaign: &Campaign, now: DateTime<Utc>) -> f64 {
    let base = match campaign.category {
        CampaignCategory::Medical | CampaignCategory::Emergency | CampaignCategory::DisasterRelief => {
            URGENCY_BASE_CRITICAL
        }
        _ => URGENCY_BASE_STANDARD,
    };

    let days_remaining = (campaign.end_date - now).num_seconds() as f64 / SECONDS_PER_DAY;
    // Past-deadline campaigns stay pinned at the ceiling rather than
    // overflowing past it.
    let score = base - (days_remaining.max(0.0) / URGENCY_RAMP_DAYS);
    score.clamp(URGENCY_FLOOR, 1.0)
}

/// Creator trust: weighted verification signals normalized by the maximum
/// attainable sum, so the score is comparable across campaigns.
pub fn creator_trust(creator: Option<&Donor>) -> f64 {
    let creator = match creator {
        Some(creator) => creator,
        None => return NEUTRAL_CREATOR_TRUST,
    };

    let mut sum = 0.0;
    if creator.is_verified {
        sum += TRUST_WEIGHT_VERIFIED;
    }
    if creator.is_phone_verified {
        sum += TRUST_WEIGHT_PHONE;
    }
    if creator.has_photo() {
        sum += TRUST_WEIGHT_PHOTO;
    }
    if creator.has_bio() {
        sum += TRUST_WEIGHT_BIO;
    }

    (sum / TRUST_MAX).clamp(0.0, 1.0)
}

/// Social proof: capped donor-count term plus capped raised-amount term,
/// with a flat bonus once completion passes the threshold.
pub fn social_proof(campaign: &Campaign) -> f64 {
    let donor_term = ((campaign.donor_count.max(0) as f64) / SOCIAL_DONOR_COUNT_SCALE)
        .min(SOCIAL_DONOR_COUNT_CAP);

    let raised = campaign.raised_amount.to_f64().unwrap_or(0.0).max(0.0);
    let raised_term = (raised / SOCIAL_RAISED_SCALE).min(SOCIAL_RAISED_CAP);

    let mut score = donor_term + raised_term;
    if campaign.completion_ratio() > SOCIAL_COMPLETION_THRESHOLD {
        score += SOCIAL_COMPLETION_BONUS;
    }

    score.clamp(0.0, 1.0)
}

/// Recency tiering: fresh campaigns decay linearly from 1.0 down to the mid
/// tier over the first week, hold the mid tier through day 30, then sit on
/// the floor.
pub fn trending(campaign: &Campaign, now: DateTime<Utc>) -> f64 {
    let age_days = ((now - campaign.created_at).num_seconds() as f64 / SECONDS_PER_DAY).max(0.0);

    if age_days < TRENDING_FRESH_DAYS {
        let decay = (age_days / TRENDING_FRESH_DAYS) * (1.0 - TRENDING_MID_TIER);
        (1.0 - decay).clamp(TRENDING_MID_TIER, 1.0)
    } else if age_days < TRENDING_RECENT_DAYS {
        TRENDING_MID_TIER
    } else {
        TRENDING_FLOOR
    }
}

/// Funding pace vs elapsed time, in four discrete bands.
///
/// A campaign that has raised a larger share of its goal than the share of
/// its duration already elapsed is "ahead of pace."
pub fn success_probability(campaign: &Campaign, now: DateTime<Utc>) -> f64 {
    let total_seconds = (campaign.end_date - campaign.created_at).num_seconds();
    if total_seconds <= 0 {
        // Degenerate duration; no pace can be computed.
        return SUCCESS_LAGGING;
    }

    let elapsed_seconds = (now - campaign.created_at).num_seconds();
    if elapsed_seconds <= 0 {
        // Brand new: no evidence either way.
        return SUCCESS_NEAR_PACE;
    }

    let time_ratio = (elapsed_seconds as f64 / total_seconds as f64).clamp(0.0, 1.0);
    let funding_ratio = campaign.completion_ratio();

    if time_ratio <= f64::EPSILON {
        return SUCCESS_NEAR_PACE;
    }

    let pace = funding_ratio / time_ratio;
    if pace >= 1.0 {
        SUCCESS_AHEAD
    } else if pace >= SUCCESS_NEAR_PACE_RATIO {
        SUCCESS_NEAR_PACE
    } else if pace >= SUCCESS_LAGGING_RATIO {
        SUCCESS_LAGGING
    } else {
        SUCCESS_FAR_BEHIND
    }
}

/// How strongly the donor's history leans toward this campaign's category.
pub fn category_affinity(campaign: &Campaign, profile: Option<&DonorPreferenceProfile>) -> f64 {
    match usable_profile(profile) {
        Some(profile) => profile
            .category_distribution
            .get(&campaign.category)
            .copied()
            .unwrap_or(0.0)
            .clamp(0.0, 1.0),
        None => NEUTRAL_CATEGORY_AFFINITY,
    }
}

/// Whether the campaign sits in a region the donor has given to before.
pub fn geo_affinity(campaign: &Campaign, profile: Option<&DonorPreferenceProfile>) -> f64 {
    let profile = match usable_profile(profile) {
        Some(profile) => profile,
        None => return NEUTRAL_GEO_AFFINITY,
    };

    if campaign.location.is_empty() {
        return NEUTRAL_GEO_AFFINITY;
    }

    let city_match = campaign
        .location
        .city
        .as_deref()
        .is_some_and(|city| profile.has_region(city));
    if city_match {
        return GEO_CITY_MATCH;
    }

    let state_match = campaign
        .location
        .state
        .as_deref()
        .is_some_and(|state| profile.has_region(state));
    if state_match {
        return GEO_STATE_MATCH;
    }

    GEO_NO_MATCH
}

/// How close the campaign's typical donation sits to the donor's average
/// gift. Ratio of the smaller to the larger, so equal amounts score 1.0.
pub fn amount_compatibility(campaign: &Campaign, profile: Option<&DonorPreferenceProfile>) -> f64 {
    let profile = match usable_profile(profile) {
        Some(profile) => profile,
        None => return NEUTRAL_AMOUNT_COMPATIBILITY,
    };

    let average = profile.average_donation.to_f64().unwrap_or(0.0);
    if average <= 0.0 {
        return NEUTRAL_AMOUNT_COMPATIBILITY;
    }

    if campaign.donor_count <= 0 || campaign.raised_amount <= Decimal::ZERO {
        return NEUTRAL_AMOUNT_COMPATIBILITY;
    }
    let typical = campaign.raised_amount.to_f64().unwrap_or(0.0) / campaign.donor_count as f64;
    if typical <= 0.0 || !typical.is_finite() {
        return NEUTRAL_AMOUNT_COMPATIBILITY;
    }

    (average.min(typical) / average.max(typical)).clamp(0.0, 1.0)
}

fn usable_profile(profile: Option<&DonorPreferenceProfile>) -> Option<&DonorPreferenceProfile> {
    profile.filter(|profile| !profile.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaigns::{CampaignLocation, CampaignStatus};
    use chrono::Duration;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn campaign(category: CampaignCategory) -> Campaign {
        let now = Utc::now();
        Campaign {
            id: "c-1".to_string(),
            title: "title".to_string(),
            description: "description".to_string(),
            category,
            location: CampaignLocation::default(),
            goal_amount: dec!(50000),
            raised_amount: dec!(10000),
            donor_count: 25,
            creator_id: "u-1".to_string(),
            created_at: now - Duration::days(10),
            end_date: now + Duration::days(20),
            status: CampaignStatus::Active,
            is_verified: false,
            share_count: 0,
        }
    }

    fn donor() -> Donor {
        Donor {
            id: "u-1".to_string(),
            display_name: "Asha".to_string(),
            is_verified: true,
            is_phone_verified: true,
            photo_url: Some("https://example.org/p.jpg".to_string()),
            bio: Some("bio".to_string()),
            location: None,
            created_at: Utc::now() - Duration::days(400),
        }
    }

    fn education_profile() -> DonorPreferenceProfile {
        let mut distribution = HashMap::new();
        distribution.insert(CampaignCategory::Education, 1.0);
        DonorPreferenceProfile {
            category_distribution: distribution,
            average_donation: dec!(5000),
            preferred_regions: HashMap::from([("mumbai".to_string(), 3)]),
            donation_frequency_per_day: 0.1,
        }
    }

    #[test]
    fn urgency_rises_as_deadline_approaches() {
        let now = Utc::now();
        let mut soon = campaign(CampaignCategory::Medical);
        soon.raised_amount = dec!(40000);
        soon.end_date = now + Duration::days(2);

        let mut distant = soon.clone();
        distant.end_date = now + Duration::days(60);

        assert!(urgency(&soon, now) > urgency(&distant, now));
    }

    #[test]
    fn urgency_ramps_steeper_for_critical_categories() {
        let now = Utc::now();
        let mut medical = campaign(CampaignCategory::Medical);
        medical.end_date = now + Duration::days(3);
        let mut community = campaign(CampaignCategory::Community);
        community.end_date = now + Duration::days(3);

        assert!(urgency(&medical, now) > urgency(&community, now));
    }

    #[test]
    fn urgency_respects_floor_and_ceiling() {
        let now = Utc::now();
        let mut far_out = campaign(CampaignCategory::Community);
        far_out.end_date = now + Duration::days(365);
        assert_eq!(urgency(&far_out, now), URGENCY_FLOOR);

        let mut overdue = campaign(CampaignCategory::Emergency);
        overdue.end_date = now - Duration::days(1);
        assert_eq!(urgency(&overdue, now), 1.0);
    }

    #[test]
    fn creator_trust_normalizes_to_unit_range() {
        assert_eq!(creator_trust(Some(&donor())), 1.0);

        let mut partial = donor();
        partial.is_verified = false;
        partial.photo_url = None;
        partial.bio = None;
        let expected = TRUST_WEIGHT_PHONE / TRUST_MAX;
        assert!((creator_trust(Some(&partial)) - expected).abs() < 1e-9);

        assert_eq!(creator_trust(None), NEUTRAL_CREATOR_TRUST);
    }

    #[test]
    fn social_proof_grants_completion_bonus() {
        let mut below = campaign(CampaignCategory::Community);
        below.raised_amount = dec!(10000); // 20% of goal
        below.donor_count = 10;

        let mut above = below.clone();
        above.raised_amount = dec!(15000); // 30% of goal

        let gap = social_proof(&above) - social_proof(&below);
        assert!(gap > SOCIAL_COMPLETION_BONUS - 1e-9);
    }

    #[test]
    fn trending_tiers_by_age() {
        let now = Utc::now();
        let mut fresh = campaign(CampaignCategory::Community);
        fresh.created_at = now - Duration::days(1);
        let mut recent = campaign(CampaignCategory::Community);
        recent.created_at = now - Duration::days(14);
        let mut stale = campaign(CampaignCategory::Community);
        stale.created_at = now - Duration::days(90);

        assert!(trending(&fresh, now) > TRENDING_MID_TIER);
        assert_eq!(trending(&recent, now), TRENDING_MID_TIER);
        assert_eq!(trending(&stale, now), TRENDING_FLOOR);
    }

    #[test]
    fn success_probability_bands() {
        let now = Utc::now();

        // 33% of time elapsed, 80% funded: well ahead of pace.
        let mut ahead = campaign(CampaignCategory::Education);
        ahead.raised_amount = dec!(40000);
        assert_eq!(success_probability(&ahead, now), SUCCESS_AHEAD);

        // 33% of time elapsed, 2% funded: far behind.
        let mut behind = campaign(CampaignCategory::Education);
        behind.raised_amount = dec!(1000);
        assert_eq!(success_probability(&behind, now), SUCCESS_FAR_BEHIND);
    }

    #[test]
    fn success_probability_survives_degenerate_duration() {
        let now = Utc::now();
        let mut degenerate = campaign(CampaignCategory::Education);
        degenerate.end_date = degenerate.created_at;
        let score = success_probability(&degenerate, now);
        assert!(score.is_finite());
    }

    #[test]
    fn category_affinity_beats_anonymous_for_matching_category() {
        let education = campaign(CampaignCategory::Education);
        let profile = education_profile();

        let personalized = category_affinity(&education, Some(&profile));
        let anonymous = category_affinity(&education, None);
        assert!(personalized > anonymous);
        assert_eq!(personalized, 1.0);

        // A category outside the donor's history scores below neutral.
        let medical = campaign(CampaignCategory::Medical);
        assert_eq!(category_affinity(&medical, Some(&profile)), 0.0);
    }

    #[test]
    fn geo_affinity_matches_city_then_state() {
        let profile = education_profile();

        let mut in_city = campaign(CampaignCategory::Education);
        in_city.location = CampaignLocation {
            city: Some("Mumbai".to_string()),
            state: Some("Maharashtra".to_string()),
            country: Some("India".to_string()),
        };
        assert_eq!(geo_affinity(&in_city, Some(&profile)), GEO_CITY_MATCH);

        let mut elsewhere = campaign(CampaignCategory::Education);
        elsewhere.location = CampaignLocation {
            city: Some("Pune".to_string()),
            state: Some("Karnataka".to_string()),
            country: Some("India".to_string()),
        };
        assert_eq!(geo_affinity(&elsewhere, Some(&profile)), GEO_NO_MATCH);

        // Missing location degrades to the neutral default, never panics.
        let no_location = campaign(CampaignCategory::Education);
        assert_eq!(geo_affinity(&no_location, Some(&profile)), NEUTRAL_GEO_AFFINITY);
    }

    #[test]
    fn amount_compatibility_peaks_at_matching_scale() {
        let profile = education_profile(); // average gift 5000

        let mut matching = campaign(CampaignCategory::Education);
        matching.raised_amount = dec!(50000);
        matching.donor_count = 10; // typical gift 5000
        assert_eq!(amount_compatibility(&matching, Some(&profile)), 1.0);

        let mut mismatched = campaign(CampaignCategory::Education);
        mismatched.raised_amount = dec!(500);
        mismatched.donor_count = 10; // typical gift 50
        assert!(amount_compatibility(&mismatched, Some(&profile)) < 0.05);

        let mut no_donors = campaign(CampaignCategory::Education);
        no_donors.donor_count = 0;
        assert_eq!(
            amount_compatibility(&no_donors, Some(&profile)),
            NEUTRAL_AMOUNT_COMPATIBILITY
        );
    }

    #[test]
    fn extract_is_always_bounded() {
        let now = Utc::now();
        let mut degenerate = campaign(CampaignCategory::Other);
        degenerate.goal_amount = dec!(0);
        degenerate.raised_amount = dec!(0);
        degenerate.donor_count = -5;
        degenerate.end_date = degenerate.created_at - Duration::days(1);

        let features = extract(&degenerate, None, None, now);
        assert!(features.is_bounded());

        let features = extract(
            &campaign(CampaignCategory::Medical),
            Some(&donor()),
            Some(&education_profile()),
            now,
        );
        assert!(features.is_bounded());
    }

    #[test]
    fn empty_profile_falls_back_to_neutral_defaults() {
        let education = campaign(CampaignCategory::Education);
        let empty = DonorPreferenceProfile::empty();

        assert_eq!(
            category_affinity(&education, Some(&empty)),
            NEUTRAL_CATEGORY_AFFINITY
        );
        assert_eq!(geo_affinity(&education, Some(&empty)), NEUTRAL_GEO_AFFINITY);
        assert_eq!(
            amount_compatibility(&education, Some(&empty)),
            NEUTRAL_AMOUNT_COMPATIBILITY
        );
    }
}
