//! Relevance combination and result-set ordering.
//!
//! Every strategy induces a total order: comparisons fall through documented
//! tie-breaks and end on the campaign id, so repeated calls with identical
//! inputs produce identical orderings and pagination never skips or
//! duplicates an item.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::campaigns::Campaign;
use crate::donors::Donor;
use crate::features::{self, FeatureVector};
use crate::personalization::DonorPreferenceProfile;
use crate::ranking::ranking_constants::*;
use crate::ranking::ranking_model::{ScoredCampaign, SortStrategy};

/// Combines one campaign's feature vector into a single relevance number.
///
/// `personalized` marks requests that carried a usable donor profile; only
/// those receive the additive personalization term.
pub fn relevance_score(
    campaign: &Campaign,
    features: &FeatureVector,
    text_score: f64,
    personalized: bool,
) -> f64 {
    let mut score = text_score.max(0.0)
        + campaign.completion_percentage() * W_COMPLETION
        + campaign.donor_count.max(0) as f64 * W_DONOR_COUNT
        + features.creator_trust * W_CREATOR_TRUST
        + features.social_proof * W_SOCIAL_PROOF
        + features.urgency * W_URGENCY
        + features.trending * W_TRENDING;

    if personalized {
        score += features.personalization_sum() * W_PERSONALIZATION;
    }

    score
}

/// Extracts features and computes relevance for one campaign in one step.
pub fn score_campaign(
    campaign: Campaign,
    creator: Option<&Donor>,
    profile: Option<&DonorPreferenceProfile>,
    text_score: f64,
    now: DateTime<Utc>,
) -> ScoredCampaign {
    let features = features::extract(&campaign, creator, profile, now);
    let personalized = profile.is_some_and(|profile| !profile.is_empty());
    let relevance = relevance_score(&campaign, &features, text_score, personalized);
    ScoredCampaign {
        campaign,
        features,
        text_score,
        relevance,
    }
}

/// Orders a scored result set in place under the given strategy.
pub fn rank(items: &mut [ScoredCampaign], strategy: SortStrategy) {
    items.sort_by(|a, b| compare(a, b, strategy));
}

fn compare(a: &ScoredCampaign, b: &ScoredCampaign, strategy: SortStrategy) -> Ordering {
    let ordering = match strategy {
        SortStrategy::Relevance => b
            .relevance
            .total_cmp(&a.relevance)
            .then_with(|| b.text_score.total_cmp(&a.text_score)),
        SortStrategy::Newest => b.campaign.created_at.cmp(&a.campaign.created_at),
        SortStrategy::Oldest => a.campaign.created_at.cmp(&b.campaign.created_at),
        SortStrategy::GoalHigh => b.campaign.goal_amount.cmp(&a.campaign.goal_amount),
        SortStrategy::GoalLow => a.campaign.goal_amount.cmp(&b.campaign.goal_amount),
        SortStrategy::Progress => b
            .campaign
            .completion_ratio()
            .total_cmp(&a.campaign.completion_ratio()),
        SortStrategy::Popular => b
            .campaign
            .donor_count
            .cmp(&a.campaign.donor_count)
            .then_with(|| b.campaign.raised_amount.cmp(&a.campaign.raised_amount)),
        SortStrategy::Urgent => b.features.urgency.total_cmp(&a.features.urgency),
        SortStrategy::Trending => b.features.trending.total_cmp(&a.features.trending),
    };

    ordering.then_with(|| a.campaign.id.cmp(&b.campaign.id))
}
