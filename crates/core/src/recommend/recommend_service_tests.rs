#[cfg(test)]
mod tests {
    use crate::campaigns::{
        Campaign, CampaignCategory, CampaignFilters, CampaignLocation, CampaignRepositoryTrait,
        CampaignStatus, CampaignText, TextMatch,
    };
    use crate::donations::{
        Donation, DonationRepositoryTrait, DonationVelocity, DonationWithCampaign,
    };
    use crate::donors::{Donor, DonorRepositoryTrait};
    use crate::errors::{Error, Result};
    use crate::personalization::{DonorPreferenceProfile, ProfileServiceTrait};
    use crate::recommend::{
        RecommendError, RecommendRequest, RecommendationKind, RecommendationService,
        RecommendationServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::{DateTime, Duration as ChronoDuration, Utc};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // --- Mock CampaignRepository ---
    struct MockCampaignRepository {
        campaigns: Arc<Mutex<Vec<Campaign>>>,
    }

    impl MockCampaignRepository {
        fn new(campaigns: Vec<Campaign>) -> Self {
            Self {
                campaigns: Arc::new(Mutex::new(campaigns)),
            }
        }
    }

    #[async_trait]
    impl CampaignRepositoryTrait for MockCampaignRepository {
        fn get_by_id(&self, campaign_id: &str) -> Result<Campaign> {
            self.campaigns
                .lock()
                .unwrap()
                .iter()
                .find(|campaign| campaign.id == campaign_id)
                .cloned()
                .ok_or_else(|| Error::Repository("campaign not found".to_string()))
        }

        async fn search(&self, _query: &str, _filters: &CampaignFilters) -> Result<Vec<TextMatch>> {
            unimplemented!()
        }

        async fn list_active(&self, _filters: &CampaignFilters) -> Result<Vec<Campaign>> {
            Ok(self
                .campaigns
                .lock()
                .unwrap()
                .iter()
                .filter(|campaign| campaign.status == CampaignStatus::Active)
                .cloned()
                .collect())
        }

        async fn count_recent_by_creator(
            &self,
            _creator_id: &str,
            _window: ChronoDuration,
        ) -> Result<i64> {
            unimplemented!()
        }

        async fn list_texts_by_others(
            &self,
            _creator_id: &str,
            _limit: i64,
        ) -> Result<Vec<CampaignText>> {
            unimplemented!()
        }
    }

    // --- Mock DonationRepository ---
    #[derive(Default)]
    struct MockDonationRepository {
        velocities: Arc<Mutex<HashMap<String, DonationVelocity>>>,
    }

    #[async_trait]
    impl DonationRepositoryTrait for MockDonationRepository {
        async fn get_history_for_donor(
            &self,
            _donor_id: &str,
        ) -> Result<Vec<DonationWithCampaign>> {
            unimplemented!()
        }

        async fn recent_by_donor(
            &self,
            _donor_id: &str,
            _window: ChronoDuration,
        ) -> Result<Vec<Donation>> {
            unimplemented!()
        }

        async fn velocity_for_campaigns(
            &self,
            campaign_ids: &[String],
            _window: ChronoDuration,
        ) -> Result<HashMap<String, DonationVelocity>> {
            Ok(self
                .velocities
                .lock()
                .unwrap()
                .iter()
                .filter(|(id, _)| campaign_ids.contains(id))
                .map(|(id, velocity)| (id.clone(), *velocity))
                .collect())
        }
    }

    // --- Mock DonorRepository ---
    #[derive(Default)]
    struct MockDonorRepository {
        donors: Arc<Mutex<Vec<Donor>>>,
    }

    impl MockDonorRepository {
        fn with_donor(donor: Donor) -> Self {
            Self {
                donors: Arc::new(Mutex::new(vec![donor])),
            }
        }
    }

    #[async_trait]
    impl DonorRepositoryTrait for MockDonorRepository {
        async fn get_by_id(&self, donor_id: &str) -> Result<Donor> {
            self.donors
                .lock()
                .unwrap()
                .iter()
                .find(|donor| donor.id == donor_id)
                .cloned()
                .ok_or_else(|| Error::Repository("donor not found".to_string()))
        }

        async fn get_by_ids(&self, donor_ids: &[String]) -> Result<HashMap<String, Donor>> {
            Ok(self
                .donors
                .lock()
                .unwrap()
                .iter()
                .filter(|donor| donor_ids.contains(&donor.id))
                .map(|donor| (donor.id.clone(), donor.clone()))
                .collect())
        }
    }

    // --- Mock ProfileService ---
    struct MockProfileService {
        profile: Option<DonorPreferenceProfile>,
        fail: bool,
    }

    impl MockProfileService {
        fn empty() -> Self {
            Self {
                profile: None,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                profile: None,
                fail: true,
            }
        }

        fn with(profile: DonorPreferenceProfile) -> Self {
            Self {
                profile: Some(profile),
                fail: false,
            }
        }
    }

    #[async_trait]
    impl ProfileServiceTrait for MockProfileService {
        async fn get_profile(
            &self,
            _donor_id: &str,
            _fetch_timeout: Duration,
        ) -> Result<DonorPreferenceProfile> {
            if self.fail {
                return Err(Error::Repository("donation store unreachable".to_string()));
            }
            Ok(self
                .profile
                .clone()
                .unwrap_or_else(DonorPreferenceProfile::empty))
        }
    }

    fn campaign(id: &str, category: CampaignCategory) -> Campaign {
        let now = Utc::now();
        Campaign {
            id: id.to_string(),
            title: format!("Campaign {}", id),
            description: "description".to_string(),
            category,
            location: CampaignLocation::default(),
            goal_amount: dec!(100000),
            raised_amount: dec!(10000),
            donor_count: 10,
            creator_id: "creator-1".to_string(),
            created_at: now - ChronoDuration::days(45),
            end_date: now + ChronoDuration::days(60),
            status: CampaignStatus::Active,
            is_verified: false,
            share_count: 0,
        }
    }

    fn education_profile() -> DonorPreferenceProfile {
        DonorPreferenceProfile {
            category_distribution: HashMap::from([(CampaignCategory::Education, 1.0)]),
            average_donation: dec!(5000),
            preferred_regions: HashMap::new(),
            donation_frequency_per_day: 0.05,
        }
    }

    fn service(
        campaigns: Vec<Campaign>,
        donors: MockDonorRepository,
        donations: MockDonationRepository,
        profiles: MockProfileService,
    ) -> RecommendationService {
        RecommendationService::new(
            Arc::new(MockCampaignRepository::new(campaigns)),
            Arc::new(donations),
            Arc::new(donors),
            Arc::new(profiles),
        )
    }

    fn ids_and_scores(items: &[crate::recommend::RecommendedCampaign]) -> Vec<(String, f64)> {
        items
            .iter()
            .map(|item| (item.campaign.id.clone(), item.relevance_score))
            .collect()
    }

    #[tokio::test]
    async fn failed_history_fetch_falls_back_to_popular() {
        let campaigns = vec![
            campaign("c-1", CampaignCategory::Education),
            campaign("c-2", CampaignCategory::Medical),
            campaign("c-3", CampaignCategory::Animals),
        ];

        let degraded = service(
            campaigns.clone(),
            MockDonorRepository::default(),
            MockDonationRepository::default(),
            MockProfileService::failing(),
        );
        let fallback = degraded
            .get_personalized_recommendations("u-1", 3)
            .await
            .unwrap();

        let popular_service = service(
            campaigns,
            MockDonorRepository::default(),
            MockDonationRepository::default(),
            MockProfileService::empty(),
        );
        let popular = popular_service.get_popular_campaigns(3).await.unwrap();

        assert_eq!(ids_and_scores(&fallback), ids_and_scores(&popular));
    }

    #[tokio::test]
    async fn education_donor_sees_education_above_identical_medical() {
        let campaigns = vec![
            campaign("c-medical", CampaignCategory::Medical),
            campaign("c-education", CampaignCategory::Education),
        ];

        let engine = service(
            campaigns,
            MockDonorRepository::default(),
            MockDonationRepository::default(),
            MockProfileService::with(education_profile()),
        );
        let items = engine
            .get_personalized_recommendations("u-1", 10)
            .await
            .unwrap();

        assert_eq!(items[0].campaign.id, "c-education");
        assert!(items[0]
            .reasons
            .contains(&"Matches your interest in education".to_string()));
    }

    #[tokio::test]
    async fn empty_profile_still_returns_ranked_results() {
        let campaigns = vec![
            campaign("c-1", CampaignCategory::Education),
            campaign("c-2", CampaignCategory::Medical),
        ];
        let engine = service(
            campaigns,
            MockDonorRepository::default(),
            MockDonationRepository::default(),
            MockProfileService::empty(),
        );

        let items = engine
            .get_personalized_recommendations("u-1", 10)
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
        for item in &items {
            assert!(!item.reasons.iter().any(|reason| reason.contains("your")));
        }
    }

    #[tokio::test]
    async fn popular_orders_by_donor_count_then_raised() {
        let mut a = campaign("c-a", CampaignCategory::Community);
        a.donor_count = 5;
        let mut b = campaign("c-b", CampaignCategory::Community);
        b.donor_count = 50;
        let mut c = campaign("c-c", CampaignCategory::Community);
        c.donor_count = 50;
        c.raised_amount = dec!(60000);

        let engine = service(
            vec![a, b, c],
            MockDonorRepository::default(),
            MockDonationRepository::default(),
            MockProfileService::empty(),
        );
        let items = engine.get_popular_campaigns(10).await.unwrap();

        let ids: Vec<&str> = items.iter().map(|item| item.campaign.id.as_str()).collect();
        assert_eq!(ids, vec!["c-c", "c-b", "c-a"]);
    }

    #[tokio::test]
    async fn similar_prefers_category_and_state_matches() {
        let mut reference = campaign("c-ref", CampaignCategory::Education);
        reference.location.state = Some("Kerala".to_string());

        let mut twin = campaign("c-twin", CampaignCategory::Education);
        twin.location.state = Some("Kerala".to_string());
        let mut same_category = campaign("c-cat", CampaignCategory::Education);
        same_category.location.state = Some("Punjab".to_string());
        let different = campaign("c-diff", CampaignCategory::Animals);

        let engine = service(
            vec![reference, twin, same_category, different],
            MockDonorRepository::default(),
            MockDonationRepository::default(),
            MockProfileService::empty(),
        );
        let items = engine.get_similar_campaigns("c-ref", 10).await.unwrap();

        let ids: Vec<&str> = items.iter().map(|item| item.campaign.id.as_str()).collect();
        assert_eq!(ids, vec!["c-twin", "c-cat", "c-diff"]);
        assert!(!ids.contains(&"c-ref"), "reference must not recommend itself");
        assert!(items[0]
            .reasons
            .contains(&"Based in the same area".to_string()));
    }

    #[tokio::test]
    async fn unknown_reference_falls_back_to_popular() {
        let campaigns = vec![campaign("c-1", CampaignCategory::Education)];
        let engine = service(
            campaigns,
            MockDonorRepository::default(),
            MockDonationRepository::default(),
            MockProfileService::empty(),
        );

        let items = engine.get_similar_campaigns("c-missing", 10).await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn trending_orders_by_donation_velocity() {
        let mut slow = campaign("c-slow", CampaignCategory::Community);
        slow.donor_count = 500; // popular but quiet this week
        let fast = campaign("c-fast", CampaignCategory::Community);

        let donations = MockDonationRepository::default();
        donations.velocities.lock().unwrap().insert(
            "c-fast".to_string(),
            DonationVelocity {
                donation_count: 40,
                total_amount: dec!(8000),
            },
        );
        donations.velocities.lock().unwrap().insert(
            "c-slow".to_string(),
            DonationVelocity {
                donation_count: 2,
                total_amount: dec!(100),
            },
        );

        let engine = service(
            vec![slow, fast],
            MockDonorRepository::default(),
            donations,
            MockProfileService::empty(),
        );
        let items = engine.get_trending_campaigns(10, 7).await.unwrap();

        assert_eq!(items[0].campaign.id, "c-fast");
    }

    #[tokio::test]
    async fn urgent_filters_deadline_and_underfunded() {
        let now = Utc::now();
        let mut closing = campaign("c-closing", CampaignCategory::Medical);
        closing.end_date = now + ChronoDuration::days(2);

        let mut distant = campaign("c-distant", CampaignCategory::Medical);
        distant.end_date = now + ChronoDuration::days(45);

        let mut nearly_funded = campaign("c-funded", CampaignCategory::Medical);
        nearly_funded.end_date = now + ChronoDuration::days(2);
        nearly_funded.raised_amount = dec!(90000); // 90% of goal

        let engine = service(
            vec![closing, distant, nearly_funded],
            MockDonorRepository::default(),
            MockDonationRepository::default(),
            MockProfileService::empty(),
        );
        let items = engine.get_urgent_campaigns(10, 7).await.unwrap();

        let ids: Vec<&str> = items.iter().map(|item| item.campaign.id.as_str()).collect();
        assert_eq!(ids, vec!["c-closing"]);
        assert!(items[0].reasons.contains(&"Urgent need".to_string()));
    }

    #[tokio::test]
    async fn nearby_requires_donor_location() {
        let donor = Donor {
            id: "u-1".to_string(),
            display_name: "Asha".to_string(),
            is_verified: false,
            is_phone_verified: false,
            photo_url: None,
            bio: None,
            location: None,
            created_at: Utc::now() - ChronoDuration::days(100),
        };

        let engine = service(
            vec![campaign("c-1", CampaignCategory::Education)],
            MockDonorRepository::with_donor(donor),
            MockDonationRepository::default(),
            MockProfileService::empty(),
        );

        let result = engine.get_nearby_campaigns("u-1", 10).await;
        assert!(matches!(
            result,
            Err(Error::Recommend(RecommendError::NoDonorLocation(_)))
        ));
    }

    #[tokio::test]
    async fn nearby_puts_same_city_before_same_state() {
        let donor = Donor {
            id: "u-1".to_string(),
            display_name: "Asha".to_string(),
            is_verified: false,
            is_phone_verified: false,
            photo_url: None,
            bio: None,
            location: Some(CampaignLocation {
                city: Some("Mumbai".to_string()),
                state: Some("Maharashtra".to_string()),
                country: Some("India".to_string()),
            }),
            created_at: Utc::now() - ChronoDuration::days(100),
        };

        let mut in_city = campaign("c-city", CampaignCategory::Community);
        in_city.location = CampaignLocation {
            city: Some("mumbai".to_string()),
            state: Some("Maharashtra".to_string()),
            country: Some("India".to_string()),
        };
        let mut in_state = campaign("c-state", CampaignCategory::Community);
        in_state.location = CampaignLocation {
            city: Some("Pune".to_string()),
            state: Some("Maharashtra".to_string()),
            country: Some("India".to_string()),
        };
        let mut elsewhere = campaign("c-far", CampaignCategory::Community);
        elsewhere.location = CampaignLocation {
            city: Some("Chennai".to_string()),
            state: Some("Tamil Nadu".to_string()),
            country: Some("India".to_string()),
        };

        let engine = service(
            vec![in_city, in_state, elsewhere],
            MockDonorRepository::with_donor(donor),
            MockDonationRepository::default(),
            MockProfileService::empty(),
        );
        let items = engine.get_nearby_campaigns("u-1", 10).await.unwrap();

        let ids: Vec<&str> = items.iter().map(|item| item.campaign.id.as_str()).collect();
        assert_eq!(ids, vec!["c-city", "c-state"]);
        assert_eq!(items[0].reasons[0], "Near your location");
    }

    #[tokio::test]
    async fn dispatcher_routes_kinds() {
        let engine = service(
            vec![campaign("c-1", CampaignCategory::Education)],
            MockDonorRepository::default(),
            MockDonationRepository::default(),
            MockProfileService::empty(),
        );

        let response = engine
            .recommend(RecommendRequest {
                donor_id: None,
                kind: RecommendationKind::Popular,
                limit: 5,
            })
            .await
            .unwrap();
        assert_eq!(response.items.len(), 1);

        // Anonymous personalized requests degrade to popular.
        let response = engine
            .recommend(RecommendRequest {
                donor_id: None,
                kind: RecommendationKind::Personalized,
                limit: 5,
            })
            .await
            .unwrap();
        assert_eq!(response.items.len(), 1);

        // Anonymous nearby requests surface the explicit signal.
        let result = engine
            .recommend(RecommendRequest {
                donor_id: None,
                kind: RecommendationKind::Nearby,
                limit: 5,
            })
            .await;
        assert!(result.is_err());
    }
}
