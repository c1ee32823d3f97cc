use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use diesel::prelude::*;
use num_traits::ToPrimitive;
use uuid::Uuid;

use fundra_core::campaigns::{
    Campaign, CampaignFilters, CampaignRepositoryTrait, CampaignStatus, CampaignText, TextMatch,
};
use fundra_core::errors::Result;

use super::model::CampaignDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::campaigns;

pub struct CampaignRepository {
    pool: Arc<DbPool>,
}

impl CampaignRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        CampaignRepository { pool }
    }

    /// Inserts a campaign, generating an id when absent. Used by the
    /// platform's write path and by tests; the scoring pipeline itself only
    /// reads.
    pub fn insert(&self, campaign: &Campaign) -> Result<Campaign> {
        let mut conn = get_connection(&self.pool)?;
        let mut row = CampaignDB::from(campaign);
        if row.id.is_empty() {
            row.id = Uuid::new_v4().to_string();
        }
        diesel::insert_into(campaigns::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Campaign::from(row))
    }

    /// Structured filtering pushed into SQL; scoring stays in application
    /// code.
    fn filtered(&self, filters: &CampaignFilters) -> Result<Vec<Campaign>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = campaigns::table.into_boxed();

        let status = filters.status.unwrap_or(CampaignStatus::Active);
        query = query.filter(campaigns::status.eq(status.as_str()));

        if let Some(category) = filters.category {
            query = query.filter(campaigns::category.eq(category.as_str()));
        }
        if let Some(state) = &filters.state {
            query = query.filter(campaigns::state.eq(state.clone()));
        }
        if let Some(city) = &filters.city {
            query = query.filter(campaigns::city.eq(city.clone()));
        }
        if let Some(min_goal) = filters.min_goal {
            query = query.filter(campaigns::goal_amount.ge(min_goal.to_f64().unwrap_or(0.0)));
        }
        if let Some(max_goal) = filters.max_goal {
            query =
                query.filter(campaigns::goal_amount.le(max_goal.to_f64().unwrap_or(f64::MAX)));
        }

        let rows = query
            .order(campaigns::created_at.desc())
            .load::<CampaignDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Campaign::from).collect())
    }

    /// Cheap per-row text relevance: each query term hit in the title counts
    /// double a hit in the description.
    fn text_score(campaign: &Campaign, terms: &[String]) -> f64 {
        let title = campaign.title.to_lowercase();
        let description = campaign.description.to_lowercase();
        let title_hits = terms.iter().filter(|term| title.contains(term.as_str())).count();
        let description_hits = terms
            .iter()
            .filter(|term| description.contains(term.as_str()))
            .count();
        (title_hits * 2 + description_hits) as f64
    }
}

#[async_trait]
impl CampaignRepositoryTrait for CampaignRepository {
    fn get_by_id(&self, campaign_id: &str) -> Result<Campaign> {
        let mut conn = get_connection(&self.pool)?;
        let row = campaigns::table
            .find(campaign_id)
            .first::<CampaignDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Campaign::from(row))
    }

    async fn search(&self, query: &str, filters: &CampaignFilters) -> Result<Vec<TextMatch>> {
        let candidates = self.filtered(filters)?;
        let terms: Vec<String> = query
            .split_whitespace()
            .map(|term| term.to_lowercase())
            .collect();

        Ok(candidates
            .into_iter()
            .filter_map(|campaign| {
                if terms.is_empty() {
                    return Some(TextMatch {
                        campaign,
                        text_score: 0.0,
                    });
                }
                let text_score = Self::text_score(&campaign, &terms);
                (text_score > 0.0).then(|| TextMatch {
                    campaign,
                    text_score,
                })
            })
            .collect())
    }

    async fn list_active(&self, filters: &CampaignFilters) -> Result<Vec<Campaign>> {
        self.filtered(filters)
    }

    async fn count_recent_by_creator(&self, creator_id: &str, window: Duration) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let cutoff = (Utc::now() - window).naive_utc();
        let count = campaigns::table
            .filter(campaigns::creator_id.eq(creator_id))
            .filter(campaigns::created_at.gt(cutoff))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count)
    }

    async fn list_texts_by_others(
        &self,
        creator_id: &str,
        limit: i64,
    ) -> Result<Vec<CampaignText>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = campaigns::table
            .filter(campaigns::creator_id.ne(creator_id))
            .order(campaigns::created_at.desc())
            .limit(limit)
            .select((campaigns::id, campaigns::title, campaigns::description))
            .load::<(String, String, String)>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .map(|(id, title, description)| CampaignText {
                id,
                title,
                description,
            })
            .collect())
    }
}
