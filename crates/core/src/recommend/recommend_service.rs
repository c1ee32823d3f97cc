use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use log::{debug, warn};
use num_traits::ToPrimitive;

use crate::campaigns::{Campaign, CampaignFilters, CampaignRepositoryTrait};
use crate::constants::{
    DEFAULT_PROFILE_FETCH_TIMEOUT_MS, DEFAULT_RECOMMENDATION_LIMIT, MAX_PAGE_LIMIT,
};
use crate::donations::DonationRepositoryTrait;
use crate::donors::{Donor, DonorRepositoryTrait};
use crate::errors::Result;
use crate::personalization::ProfileServiceTrait;
use crate::ranking::{rank, score_campaign, ScoredCampaign, SortStrategy};
use crate::recommend::reasons::reasons_for;
use crate::recommend::recommend_constants::*;
use crate::recommend::recommend_errors::RecommendError;
use crate::recommend::recommend_model::{
    RecommendRequest, RecommendResponse, RecommendationKind, RecommendedCampaign,
};
use crate::recommend::recommend_traits::RecommendationServiceTrait;

/// The recommendation engine.
///
/// Orchestrates feature extraction, personalization, and ranking into the
/// caller-facing variants. Upstream data failures inside any variant degrade
/// to the popular-campaigns fallback; only `get_popular_campaigns` itself
/// propagates a store error, because at that point no alternative is left.
pub struct RecommendationService {
    campaign_repository: Arc<dyn CampaignRepositoryTrait>,
    donation_repository: Arc<dyn DonationRepositoryTrait>,
    donor_repository: Arc<dyn DonorRepositoryTrait>,
    profile_service: Arc<dyn ProfileServiceTrait>,
}

impl RecommendationService {
    pub fn new(
        campaign_repository: Arc<dyn CampaignRepositoryTrait>,
        donation_repository: Arc<dyn DonationRepositoryTrait>,
        donor_repository: Arc<dyn DonorRepositoryTrait>,
        profile_service: Arc<dyn ProfileServiceTrait>,
    ) -> Self {
        Self {
            campaign_repository,
            donation_repository,
            donor_repository,
            profile_service,
        }
    }

    fn sanitize_limit(limit: u32) -> usize {
        if limit == 0 {
            DEFAULT_RECOMMENDATION_LIMIT as usize
        } else {
            limit.min(MAX_PAGE_LIMIT) as usize
        }
    }

    /// Batch-fetches creators for trust scoring; a failed read degrades
    /// every creator to neutral trust.
    async fn creators_for(&self, campaigns: &[Campaign]) -> HashMap<String, Donor> {
        let mut creator_ids: Vec<String> = campaigns
            .iter()
            .map(|campaign| campaign.creator_id.clone())
            .collect();
        creator_ids.sort();
        creator_ids.dedup();
        if creator_ids.is_empty() {
            return HashMap::new();
        }
        match self.donor_repository.get_by_ids(&creator_ids).await {
            Ok(creators) => creators,
            Err(e) => {
                warn!("creator batch read failed; using neutral trust: {}", e);
                HashMap::new()
            }
        }
    }

    async fn score_all(
        &self,
        campaigns: Vec<Campaign>,
        profile: Option<&crate::personalization::DonorPreferenceProfile>,
        now: DateTime<Utc>,
    ) -> Vec<ScoredCampaign> {
        let creators = self.creators_for(&campaigns).await;
        campaigns
            .into_iter()
            .map(|campaign| {
                let creator = creators.get(&campaign.creator_id);
                score_campaign(campaign, creator, profile, 0.0, now)
            })
            .collect()
    }

    fn decorate(
        scored: &[ScoredCampaign],
        personalized: bool,
        limit: usize,
    ) -> Vec<RecommendedCampaign> {
        scored
            .iter()
            .take(limit)
            .map(|item| RecommendedCampaign {
                campaign: (&item.campaign).into(),
                relevance_score: item.relevance,
                reasons: reasons_for(&item.campaign, &item.features, personalized),
            })
            .collect()
    }

    fn similarity(reference: &Campaign, candidate: &Campaign) -> f64 {
        let mut score = 0.0;
        if candidate.category == reference.category {
            score += SIMILAR_CATEGORY_WEIGHT;
        }
        if let (Some(a), Some(b)) = (
            reference.location.state.as_deref(),
            candidate.location.state.as_deref(),
        ) {
            if a.eq_ignore_ascii_case(b) {
                score += SIMILAR_STATE_WEIGHT;
            }
        }
        let reference_goal = reference.goal_amount.to_f64().unwrap_or(0.0);
        let candidate_goal = candidate.goal_amount.to_f64().unwrap_or(0.0);
        if reference_goal > 0.0 && candidate_goal > 0.0 {
            score += SIMILAR_GOAL_WEIGHT
                * (reference_goal.min(candidate_goal) / reference_goal.max(candidate_goal));
        }
        score
    }

    fn similarity_reasons(reference: &Campaign, candidate: &Campaign) -> Vec<String> {
        let mut reasons = Vec::new();
        if candidate.category == reference.category {
            reasons.push(format!("Also supports {}", candidate.category.label()));
        }
        let same_state = matches!(
            (
                reference.location.state.as_deref(),
                candidate.location.state.as_deref(),
            ),
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(b)
        );
        if same_state {
            reasons.push("Based in the same area".to_string());
        }
        reasons
    }
}

#[async_trait]
impl RecommendationServiceTrait for RecommendationService {
    async fn recommend(&self, request: RecommendRequest) -> Result<RecommendResponse> {
        let donor_id = request.donor_id.as_deref();
        let items = match request.kind {
            RecommendationKind::Personalized => match donor_id {
                Some(donor_id) => {
                    self.get_personalized_recommendations(donor_id, request.limit)
                        .await?
                }
                None => self.get_popular_campaigns(request.limit).await?,
            },
            RecommendationKind::Popular => self.get_popular_campaigns(request.limit).await?,
            RecommendationKind::Similar { ref campaign_id } => {
                self.get_similar_campaigns(campaign_id, request.limit).await?
            }
            RecommendationKind::Trending { window_days } => {
                self.get_trending_campaigns(request.limit, window_days).await?
            }
            RecommendationKind::Urgent { max_days } => {
                self.get_urgent_campaigns(request.limit, max_days).await?
            }
            RecommendationKind::Nearby => match donor_id {
                Some(donor_id) => self.get_nearby_campaigns(donor_id, request.limit).await?,
                None => {
                    return Err(
                        RecommendError::NoDonorLocation("anonymous".to_string()).into()
                    )
                }
            },
        };
        Ok(RecommendResponse { items })
    }

    async fn get_personalized_recommendations(
        &self,
        donor_id: &str,
        limit: u32,
    ) -> Result<Vec<RecommendedCampaign>> {
        let timeout = Duration::from_millis(DEFAULT_PROFILE_FETCH_TIMEOUT_MS);
        let default_filters = CampaignFilters::default();
        let (profile, campaigns) = futures::join!(
            self.profile_service.get_profile(donor_id, timeout),
            self.campaign_repository.list_active(&default_filters)
        );

        let profile = match profile {
            Ok(profile) => profile,
            Err(e) => {
                warn!(
                    "profile build failed for donor {}; falling back to popular: {}",
                    donor_id, e
                );
                return self.get_popular_campaigns(limit).await;
            }
        };
        let campaigns = match campaigns {
            Ok(campaigns) => campaigns,
            Err(e) => {
                warn!("campaign read failed; falling back to popular: {}", e);
                return self.get_popular_campaigns(limit).await;
            }
        };

        let now = Utc::now();
        let personalized = !profile.is_empty();
        let profile_ref = personalized.then_some(&profile);
        debug!(
            "personalized recommendations for donor {} over {} campaigns (profile: {})",
            donor_id,
            campaigns.len(),
            personalized
        );

        let mut scored = self.score_all(campaigns, profile_ref, now).await;
        rank(&mut scored, SortStrategy::Relevance);
        Ok(Self::decorate(&scored, personalized, Self::sanitize_limit(limit)))
    }

    async fn get_popular_campaigns(&self, limit: u32) -> Result<Vec<RecommendedCampaign>> {
        let campaigns = self
            .campaign_repository
            .list_active(&CampaignFilters::default())
            .await?;
        let mut scored = self.score_all(campaigns, None, Utc::now()).await;
        rank(&mut scored, SortStrategy::Popular);
        Ok(Self::decorate(&scored, false, Self::sanitize_limit(limit)))
    }

    async fn get_similar_campaigns(
        &self,
        campaign_id: &str,
        limit: u32,
    ) -> Result<Vec<RecommendedCampaign>> {
        let reference = match self.campaign_repository.get_by_id(campaign_id) {
            Ok(reference) => reference,
            Err(e) => {
                warn!(
                    "reference campaign {} unavailable; falling back to popular: {}",
                    campaign_id, e
                );
                return self.get_popular_campaigns(limit).await;
            }
        };
        let candidates = match self
            .campaign_repository
            .list_active(&CampaignFilters::default())
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("campaign read failed; falling back to popular: {}", e);
                return self.get_popular_campaigns(limit).await;
            }
        };

        let mut ranked: Vec<(f64, Campaign)> = candidates
            .into_iter()
            .filter(|candidate| candidate.id != reference.id)
            .map(|candidate| (Self::similarity(&reference, &candidate), candidate))
            .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id)));

        Ok(ranked
            .iter()
            .take(Self::sanitize_limit(limit))
            .map(|(similarity, candidate)| RecommendedCampaign {
                campaign: candidate.into(),
                relevance_score: *similarity,
                reasons: Self::similarity_reasons(&reference, candidate),
            })
            .collect())
    }

    async fn get_trending_campaigns(
        &self,
        limit: u32,
        window_days: u32,
    ) -> Result<Vec<RecommendedCampaign>> {
        let window_days = if window_days == 0 {
            DEFAULT_TRENDING_WINDOW_DAYS
        } else {
            window_days
        };

        let campaigns = match self
            .campaign_repository
            .list_active(&CampaignFilters::default())
            .await
        {
            Ok(campaigns) => campaigns,
            Err(e) => {
                warn!("campaign read failed; falling back to popular: {}", e);
                return self.get_popular_campaigns(limit).await;
            }
        };

        let campaign_ids: Vec<String> =
            campaigns.iter().map(|campaign| campaign.id.clone()).collect();
        let velocities = match self
            .donation_repository
            .velocity_for_campaigns(&campaign_ids, ChronoDuration::days(window_days as i64))
            .await
        {
            Ok(velocities) => velocities,
            Err(e) => {
                warn!("velocity read failed; falling back to popular: {}", e);
                return self.get_popular_campaigns(limit).await;
            }
        };

        let mut scored = self.score_all(campaigns, None, Utc::now()).await;
        // Order by observed donation velocity, not the recency tier: the
        // window captures actual momentum.
        scored.sort_by(|a, b| {
            let velocity_a = velocities.get(&a.campaign.id).copied().unwrap_or_default();
            let velocity_b = velocities.get(&b.campaign.id).copied().unwrap_or_default();
            velocity_b
                .donation_count
                .cmp(&velocity_a.donation_count)
                .then_with(|| velocity_b.total_amount.cmp(&velocity_a.total_amount))
                .then_with(|| a.campaign.id.cmp(&b.campaign.id))
        });

        Ok(Self::decorate(&scored, false, Self::sanitize_limit(limit)))
    }

    async fn get_urgent_campaigns(
        &self,
        limit: u32,
        max_days: u32,
    ) -> Result<Vec<RecommendedCampaign>> {
        let max_days = if max_days == 0 {
            DEFAULT_URGENT_MAX_DAYS
        } else {
            max_days
        };

        let campaigns = match self
            .campaign_repository
            .list_active(&CampaignFilters::default())
            .await
        {
            Ok(campaigns) => campaigns,
            Err(e) => {
                warn!("campaign read failed; falling back to popular: {}", e);
                return self.get_popular_campaigns(limit).await;
            }
        };

        let now = Utc::now();
        let closing_soon: Vec<Campaign> = campaigns
            .into_iter()
            .filter(|campaign| {
                let days_remaining = campaign.days_remaining(now);
                (0..=max_days as i64).contains(&days_remaining)
                    && campaign.completion_ratio() < URGENT_MAX_COMPLETION
            })
            .collect();

        let mut scored = self.score_all(closing_soon, None, now).await;
        rank(&mut scored, SortStrategy::Urgent);
        Ok(Self::decorate(&scored, false, Self::sanitize_limit(limit)))
    }

    async fn get_nearby_campaigns(
        &self,
        donor_id: &str,
        limit: u32,
    ) -> Result<Vec<RecommendedCampaign>> {
        let donor = match self.donor_repository.get_by_id(donor_id).await {
            Ok(donor) => donor,
            Err(e) => {
                warn!(
                    "donor {} unavailable; falling back to popular: {}",
                    donor_id, e
                );
                return self.get_popular_campaigns(limit).await;
            }
        };

        let location = donor
            .location
            .filter(|location| !location.is_empty())
            .ok_or_else(|| RecommendError::NoDonorLocation(donor_id.to_string()))?;

        let campaigns = match self
            .campaign_repository
            .list_active(&CampaignFilters::default())
            .await
        {
            Ok(campaigns) => campaigns,
            Err(e) => {
                warn!("campaign read failed; falling back to popular: {}", e);
                return self.get_popular_campaigns(limit).await;
            }
        };

        let same_city = |campaign: &Campaign| {
            matches!(
                (location.city.as_deref(), campaign.location.city.as_deref()),
                (Some(donor_city), Some(campaign_city))
                    if donor_city.eq_ignore_ascii_case(campaign_city)
            )
        };
        let same_state = |campaign: &Campaign| {
            matches!(
                (location.state.as_deref(), campaign.location.state.as_deref()),
                (Some(donor_state), Some(campaign_state))
                    if donor_state.eq_ignore_ascii_case(campaign_state)
            )
        };

        let nearby: Vec<Campaign> = campaigns
            .into_iter()
            .filter(|campaign| same_city(campaign) || same_state(campaign))
            .collect();

        let now = Utc::now();
        let scored = self.score_all(nearby, None, now).await;
        let (mut in_city, mut in_state): (Vec<ScoredCampaign>, Vec<ScoredCampaign>) = scored
            .into_iter()
            .partition(|item| same_city(&item.campaign));
        rank(&mut in_city, SortStrategy::Relevance);
        rank(&mut in_state, SortStrategy::Relevance);
        in_city.append(&mut in_state);

        let mut items = Self::decorate(&in_city, false, Self::sanitize_limit(limit));
        for item in &mut items {
            item.reasons.insert(0, "Near your location".to_string());
        }
        Ok(items)
    }
}
