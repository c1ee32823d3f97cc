//! Campaign domain models.

use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
    Pending,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "ACTIVE",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Cancelled => "CANCELLED",
            CampaignStatus::Pending => "PENDING",
        }
    }

    /// Parses a stored status tag. Unknown tags resolve to `Pending` so that
    /// unrecognized rows never surface as live campaigns.
    pub fn parse_lossy(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "ACTIVE" => CampaignStatus::Active,
            "COMPLETED" => CampaignStatus::Completed,
            "CANCELLED" => CampaignStatus::Cancelled,
            _ => CampaignStatus::Pending,
        }
    }
}

/// Fixed set of campaign categories.
///
/// The string forms are the storage representation; parsing is permissive and
/// folds unknown tags into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignCategory {
    Medical,
    Emergency,
    Education,
    DisasterRelief,
    Environment,
    Animals,
    Community,
    Other,
}

impl CampaignCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignCategory::Medical => "MEDICAL",
            CampaignCategory::Emergency => "EMERGENCY",
            CampaignCategory::Education => "EDUCATION",
            CampaignCategory::DisasterRelief => "DISASTER_RELIEF",
            CampaignCategory::Environment => "ENVIRONMENT",
            CampaignCategory::Animals => "ANIMALS",
            CampaignCategory::Community => "COMMUNITY",
            CampaignCategory::Other => "OTHER",
        }
    }

    /// Human-readable label used in recommendation reasons.
    pub fn label(&self) -> &'static str {
        match self {
            CampaignCategory::Medical => "medical care",
            CampaignCategory::Emergency => "emergencies",
            CampaignCategory::Education => "education",
            CampaignCategory::DisasterRelief => "disaster relief",
            CampaignCategory::Environment => "the environment",
            CampaignCategory::Animals => "animal welfare",
            CampaignCategory::Community => "community projects",
            CampaignCategory::Other => "other causes",
        }
    }

    pub fn all() -> &'static [CampaignCategory] {
        &[
            CampaignCategory::Medical,
            CampaignCategory::Emergency,
            CampaignCategory::Education,
            CampaignCategory::DisasterRelief,
            CampaignCategory::Environment,
            CampaignCategory::Animals,
            CampaignCategory::Community,
            CampaignCategory::Other,
        ]
    }

    pub fn parse_lossy(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "MEDICAL" => CampaignCategory::Medical,
            "EMERGENCY" => CampaignCategory::Emergency,
            "EDUCATION" => CampaignCategory::Education,
            "DISASTER_RELIEF" => CampaignCategory::DisasterRelief,
            "ENVIRONMENT" => CampaignCategory::Environment,
            "ANIMALS" => CampaignCategory::Animals,
            "COMMUNITY" => CampaignCategory::Community,
            _ => CampaignCategory::Other,
        }
    }
}

/// Campaign location. All fields optional; extractors degrade to neutral
/// defaults when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampaignLocation {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl CampaignLocation {
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.state.is_none() && self.country.is_none()
    }
}

/// Domain model representing a campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: CampaignCategory,
    pub location: CampaignLocation,
    pub goal_amount: Decimal,
    pub raised_amount: Decimal,
    pub donor_count: i64,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: CampaignStatus,
    pub is_verified: bool,
    pub share_count: i64,
}

impl Campaign {
    /// Raised-vs-goal ratio. A zero or negative goal yields 0.0 rather than
    /// dividing by zero (the store guarantees `goal_amount > 0`, but scoring
    /// never trusts that).
    pub fn completion_ratio(&self) -> f64 {
        if self.goal_amount <= Decimal::ZERO {
            return 0.0;
        }
        let raised = self.raised_amount.to_f64().unwrap_or(0.0).max(0.0);
        let goal = self.goal_amount.to_f64().unwrap_or(f64::MAX);
        raised / goal
    }

    /// Completion as a percentage (0.0 - 100.0 and beyond for overfunded).
    pub fn completion_percentage(&self) -> f64 {
        self.completion_ratio() * 100.0
    }

    /// Whole days until the deadline; negative once past it.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.end_date - now).num_days()
    }

    /// Whole days since creation.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days().max(0)
    }
}

/// Response-facing subset of campaign fields returned by search and
/// recommendation operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub id: String,
    pub title: String,
    pub category: CampaignCategory,
    pub location: CampaignLocation,
    pub goal_amount: Decimal,
    pub raised_amount: Decimal,
    pub donor_count: i64,
    pub end_date: DateTime<Utc>,
    pub is_verified: bool,
}

impl From<&Campaign> for CampaignSummary {
    fn from(campaign: &Campaign) -> Self {
        CampaignSummary {
            id: campaign.id.clone(),
            title: campaign.title.clone(),
            category: campaign.category,
            location: campaign.location.clone(),
            goal_amount: campaign.goal_amount,
            raised_amount: campaign.raised_amount,
            donor_count: campaign.donor_count,
            end_date: campaign.end_date,
            is_verified: campaign.is_verified,
        }
    }
}

/// Structured filters for campaign reads.
///
/// Filtering is pushed to the storage layer; all score arithmetic stays in
/// application code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampaignFilters {
    pub category: Option<CampaignCategory>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub min_goal: Option<Decimal>,
    pub max_goal: Option<Decimal>,
    pub status: Option<CampaignStatus>,
}

impl CampaignFilters {
    /// Returns a corrected copy of the filters.
    ///
    /// Malformed ranges are silently corrected rather than rejected: an
    /// inverted goal range is swapped, negative bounds are dropped.
    pub fn sanitized(&self) -> CampaignFilters {
        let mut filters = self.clone();

        if let Some(min) = filters.min_goal {
            if min < Decimal::ZERO {
                filters.min_goal = None;
            }
        }
        if let Some(max) = filters.max_goal {
            if max < Decimal::ZERO {
                filters.max_goal = None;
            }
        }
        if let (Some(min), Some(max)) = (filters.min_goal, filters.max_goal) {
            if max < min {
                filters.min_goal = Some(max);
                filters.max_goal = Some(min);
            }
        }

        filters
    }
}

/// A campaign returned by the store's text index together with its opaque,
/// non-negative text-match score. A zero score means the row matched filters
/// only (empty query).
#[derive(Debug, Clone)]
pub struct TextMatch {
    pub campaign: Campaign,
    pub text_score: f64,
}

/// Title/description pair used by the fraud duplicate-text check.
#[derive(Debug, Clone)]
pub struct CampaignText {
    pub id: String,
    pub title: String,
    pub description: String,
}
