use async_trait::async_trait;

use crate::donations::Donation;
use crate::fraud::fraud_model::{CampaignCandidate, RiskAssessment};

/// Trait for fraud-heuristics operations.
///
/// This pass runs independently of ranking and is infallible by contract:
/// a signal whose data fetch fails contributes zero instead of failing the
/// assessment, so fraud analysis can never block a response.
#[async_trait]
pub trait FraudServiceTrait: Send + Sync {
    /// Screens a campaign submission.
    async fn assess_campaign(&self, candidate: &CampaignCandidate) -> RiskAssessment;

    /// Screens a single donation.
    async fn assess_donation(&self, donation: &Donation) -> RiskAssessment;
}
