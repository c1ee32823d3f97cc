//! Pure risk-signal functions.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::campaigns::{CampaignCategory, CampaignText};
use crate::fraud::fraud_constants::*;

static NORMALIZE_RE: OnceLock<Regex> = OnceLock::new();

/// Lowercases and collapses everything outside [a-z0-9] to single spaces.
fn normalize(text: &str) -> String {
    let re = NORMALIZE_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static pattern"));
    re.replace_all(&text.to_lowercase(), " ").trim().to_string()
}

/// Risk contribution for a creator account of the given age.
///
/// Monotonic: a younger account never contributes less than an older one.
/// Decays linearly from `NEW_CREATOR_MAX_RISK` at age zero to zero at the
/// horizon.
pub fn new_creator_risk(account_age_days: i64) -> f64 {
    let age = account_age_days.max(0) as f64;
    (NEW_CREATOR_MAX_RISK * (1.0 - age / NEW_CREATOR_AGE_HORIZON_DAYS)).max(0.0)
}

/// Whether the goal far exceeds the category's typical ceiling.
pub fn goal_excessive(category: CampaignCategory, goal: Decimal) -> bool {
    goal > category_goal_ceiling(category)
}

/// Whether the goal is suspiciously near zero.
pub fn goal_trivial(goal: Decimal) -> bool {
    goal < GOAL_TRIVIAL_FLOOR
}

/// Cheap near-duplicate check against one existing campaign.
///
/// Substring matching over normalized text - an approximation, not true
/// similarity search. Titles match when equal or one contains the other;
/// descriptions match on a shared normalized prefix.
pub fn is_near_duplicate(title: &str, description: &str, existing: &CampaignText) -> bool {
    let title = normalize(title);
    let existing_title = normalize(&existing.title);

    // Very short titles collide by accident; require some substance.
    if title.len() >= 10 && !existing_title.is_empty() {
        if title == existing_title
            || title.contains(&existing_title) && existing_title.len() >= 10
            || existing_title.contains(&title)
        {
            return true;
        }
    }

    let description = normalize(description);
    let existing_description = normalize(&existing.description);
    if description.len() >= DUPLICATE_DESCRIPTION_PREFIX
        && existing_description.len() >= DUPLICATE_DESCRIPTION_PREFIX
    {
        let prefix: String = description.chars().take(DUPLICATE_DESCRIPTION_PREFIX).collect();
        let existing_prefix: String = existing_description
            .chars()
            .take(DUPLICATE_DESCRIPTION_PREFIX)
            .collect();
        if prefix == existing_prefix {
            return true;
        }
    }

    false
}
