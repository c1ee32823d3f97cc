//! Risk assessment models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::campaigns::CampaignCategory;
use crate::fraud::fraud_constants::{RISK_HIGH_THRESHOLD, RISK_MEDIUM_THRESHOLD};

/// Risk classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn for_score(score: f64) -> Self {
        if score >= RISK_HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= RISK_MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Outcome of a fraud-heuristics pass. Derived and ephemeral; the
/// surrounding platform decides whether to persist it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Summed signal weights, clamped to [0,100].
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// Names of the triggered rules, in trigger order.
    pub flags: Vec<String>,
}

impl RiskAssessment {
    pub fn classify(score: f64, flags: Vec<String>) -> Self {
        let risk_score = score.clamp(0.0, 100.0);
        RiskAssessment {
            risk_score,
            risk_level: RiskLevel::for_score(risk_score),
            flags,
        }
    }
}

/// A campaign submission under fraud review. Distinct from `Campaign`
/// because the candidate may not have been written to the store yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCandidate {
    pub title: String,
    pub description: String,
    pub category: CampaignCategory,
    pub goal_amount: Decimal,
    pub creator_id: String,
}
