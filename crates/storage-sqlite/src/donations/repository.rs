use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use fundra_core::donations::{
    Donation, DonationRepositoryTrait, DonationVelocity, DonationWithCampaign,
};
use fundra_core::campaigns::CampaignCategory;
use fundra_core::errors::Result;

use super::model::DonationDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{campaigns, donations};

pub struct DonationRepository {
    pool: Arc<DbPool>,
}

impl DonationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        DonationRepository { pool }
    }

    /// Inserts a donation, generating an id when absent. Platform write
    /// path and tests only.
    pub fn insert(&self, donation: &Donation) -> Result<Donation> {
        let mut conn = get_connection(&self.pool)?;
        let mut row = DonationDB::from(donation);
        if row.id.is_empty() {
            row.id = Uuid::new_v4().to_string();
        }
        diesel::insert_into(donations::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Donation::from(row))
    }
}

#[async_trait]
impl DonationRepositoryTrait for DonationRepository {
    async fn get_history_for_donor(&self, donor_id: &str) -> Result<Vec<DonationWithCampaign>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = donations::table
            .inner_join(campaigns::table)
            .filter(donations::donor_id.eq(donor_id))
            .order(donations::donated_at.asc())
            .select((
                DonationDB::as_select(),
                campaigns::category,
                campaigns::state,
                campaigns::city,
            ))
            .load::<(DonationDB, String, Option<String>, Option<String>)>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(|(row, category, state, city)| {
                let donation = Donation::from(row);
                DonationWithCampaign {
                    id: donation.id,
                    donor_id: donation.donor_id,
                    campaign_id: donation.campaign_id,
                    amount: donation.amount,
                    donated_at: donation.donated_at,
                    category: CampaignCategory::parse_lossy(&category),
                    state,
                    city,
                }
            })
            .collect())
    }

    async fn recent_by_donor(&self, donor_id: &str, window: Duration) -> Result<Vec<Donation>> {
        let mut conn = get_connection(&self.pool)?;
        let cutoff = (Utc::now() - window).naive_utc();
        let rows = donations::table
            .filter(donations::donor_id.eq(donor_id))
            .filter(donations::donated_at.gt(cutoff))
            .order(donations::donated_at.desc())
            .load::<DonationDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Donation::from).collect())
    }

    async fn velocity_for_campaigns(
        &self,
        campaign_ids: &[String],
        window: Duration,
    ) -> Result<HashMap<String, DonationVelocity>> {
        let mut conn = get_connection(&self.pool)?;
        let cutoff = (Utc::now() - window).naive_utc();
        let rows = donations::table
            .filter(donations::campaign_id.eq_any(campaign_ids))
            .filter(donations::donated_at.gt(cutoff))
            .load::<DonationDB>(&mut conn)
            .map_err(StorageError::from)?;

        let mut velocities: HashMap<String, DonationVelocity> = HashMap::new();
        for row in rows {
            let donation = Donation::from(row);
            let velocity = velocities.entry(donation.campaign_id).or_default();
            velocity.donation_count += 1;
            velocity.total_amount += donation.amount;
        }
        Ok(velocities)
    }
}
