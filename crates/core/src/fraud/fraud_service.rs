use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use log::{debug, warn};

use crate::campaigns::CampaignRepositoryTrait;
use crate::donations::{Donation, DonationRepositoryTrait};
use crate::donors::DonorRepositoryTrait;
use crate::fraud::fraud_constants::*;
use crate::fraud::fraud_model::{CampaignCandidate, RiskAssessment};
use crate::fraud::fraud_signals;
use crate::fraud::fraud_traits::FraudServiceTrait;

/// Fraud/anomaly heuristics.
///
/// Fetches for the independent signals fan out concurrently; a failed fetch
/// downgrades that one signal to zero contribution.
pub struct FraudService {
    campaign_repository: Arc<dyn CampaignRepositoryTrait>,
    donation_repository: Arc<dyn DonationRepositoryTrait>,
    donor_repository: Arc<dyn DonorRepositoryTrait>,
}

impl FraudService {
    pub fn new(
        campaign_repository: Arc<dyn CampaignRepositoryTrait>,
        donation_repository: Arc<dyn DonationRepositoryTrait>,
        donor_repository: Arc<dyn DonorRepositoryTrait>,
    ) -> Self {
        Self {
            campaign_repository,
            donation_repository,
            donor_repository,
        }
    }
}

#[async_trait]
impl FraudServiceTrait for FraudService {
    async fn assess_campaign(&self, candidate: &CampaignCandidate) -> RiskAssessment {
        let now = Utc::now();
        let (creator, prior_creations, existing_texts) = futures::join!(
            self.donor_repository.get_by_id(&candidate.creator_id),
            self.campaign_repository.count_recent_by_creator(
                &candidate.creator_id,
                ChronoDuration::hours(CREATION_BURST_WINDOW_HOURS),
            ),
            self.campaign_repository
                .list_texts_by_others(&candidate.creator_id, DUPLICATE_SCAN_LIMIT)
        );

        let mut score = 0.0;
        let mut flags: Vec<String> = Vec::new();

        match creator {
            Ok(creator) => {
                let age_risk = fraud_signals::new_creator_risk(creator.account_age_days(now));
                if age_risk > 0.0 {
                    score += age_risk;
                    flags.push("new_creator".to_string());
                }
            }
            Err(e) => warn!(
                "creator read failed for {}; skipping age signal: {}",
                candidate.creator_id, e
            ),
        }

        match prior_creations {
            Ok(prior) => {
                // The candidate itself is this creator's (prior + 1)-th
                // attempt inside the window.
                let attempts = prior + 1;
                if attempts >= CREATION_BURST_THRESHOLD {
                    score += CREATION_BURST_RISK;
                    flags.push("creation_burst".to_string());
                } else if attempts == 2 {
                    score += CREATION_PAIR_RISK;
                    flags.push("repeat_creation".to_string());
                }
            }
            Err(e) => warn!("creation count failed; skipping burst signal: {}", e),
        }

        if fraud_signals::goal_excessive(candidate.category, candidate.goal_amount) {
            score += GOAL_EXCESSIVE_RISK;
            flags.push("goal_exceeds_category_ceiling".to_string());
        } else if fraud_signals::goal_trivial(candidate.goal_amount) {
            score += GOAL_TRIVIAL_RISK;
            flags.push("goal_suspiciously_small".to_string());
        }

        match existing_texts {
            Ok(texts) => {
                let duplicate = texts.iter().any(|existing| {
                    fraud_signals::is_near_duplicate(
                        &candidate.title,
                        &candidate.description,
                        existing,
                    )
                });
                if duplicate {
                    score += DUPLICATE_TEXT_RISK;
                    flags.push("duplicate_text".to_string());
                }
            }
            Err(e) => warn!("text scan failed; skipping duplicate signal: {}", e),
        }

        let assessment = RiskAssessment::classify(score, flags);
        debug!(
            "campaign submission by {} assessed at {:.1} ({:?})",
            candidate.creator_id, assessment.risk_score, assessment.risk_level
        );
        assessment
    }

    async fn assess_donation(&self, donation: &Donation) -> RiskAssessment {
        let mut score = 0.0;
        let mut flags: Vec<String> = Vec::new();

        let recent = self
            .donation_repository
            .recent_by_donor(
                &donation.donor_id,
                ChronoDuration::hours(REPEATED_AMOUNT_WINDOW_HOURS),
            )
            .await;

        match recent {
            Ok(recent) => {
                let others: Vec<&Donation> = recent
                    .iter()
                    .filter(|other| other.id != donation.id)
                    .collect();

                let identical = others
                    .iter()
                    .filter(|other| other.amount == donation.amount)
                    .count()
                    + 1;
                if identical >= REPEATED_AMOUNT_THRESHOLD {
                    score += REPEATED_AMOUNT_RISK;
                    flags.push("repeated_identical_amounts".to_string());
                }

                let rapid_cutoff =
                    donation.donated_at - ChronoDuration::minutes(RAPID_DONATION_WINDOW_MINUTES);
                let rapid = others
                    .iter()
                    .filter(|other| other.donated_at >= rapid_cutoff)
                    .count()
                    + 1;
                if rapid >= RAPID_DONATION_THRESHOLD {
                    score += RAPID_DONATION_RISK;
                    flags.push("rapid_repeat_donations".to_string());
                }
            }
            Err(e) => warn!(
                "recent donations read failed for {}; skipping repeat signals: {}",
                donation.donor_id, e
            ),
        }

        if donation.amount > DONATION_ABSOLUTE_CEILING {
            score += DONATION_CEILING_RISK;
            flags.push("amount_exceeds_ceiling".to_string());
        }

        RiskAssessment::classify(score, flags)
    }
}
