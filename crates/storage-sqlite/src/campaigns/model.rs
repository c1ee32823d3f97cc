//! Database models for campaigns.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use fundra_core::campaigns::{Campaign, CampaignCategory, CampaignLocation, CampaignStatus};

/// Database model for campaigns
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::campaigns)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CampaignDB {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub goal_amount: f64,
    pub raised_amount: f64,
    pub donor_count: i64,
    pub creator_id: String,
    pub created_at: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub status: String,
    pub is_verified: bool,
    pub share_count: i64,
}

impl From<CampaignDB> for Campaign {
    fn from(row: CampaignDB) -> Self {
        Campaign {
            id: row.id,
            title: row.title,
            description: row.description,
            category: CampaignCategory::parse_lossy(&row.category),
            location: CampaignLocation {
                city: row.city,
                state: row.state,
                country: row.country,
            },
            goal_amount: Decimal::from_f64(row.goal_amount).unwrap_or_default(),
            raised_amount: Decimal::from_f64(row.raised_amount).unwrap_or_default(),
            donor_count: row.donor_count,
            creator_id: row.creator_id,
            created_at: row.created_at.and_utc(),
            end_date: row.end_date.and_utc(),
            status: CampaignStatus::parse_lossy(&row.status),
            is_verified: row.is_verified,
            share_count: row.share_count,
        }
    }
}

impl From<&Campaign> for CampaignDB {
    fn from(campaign: &Campaign) -> Self {
        CampaignDB {
            id: campaign.id.clone(),
            title: campaign.title.clone(),
            description: campaign.description.clone(),
            category: campaign.category.as_str().to_string(),
            city: campaign.location.city.clone(),
            state: campaign.location.state.clone(),
            country: campaign.location.country.clone(),
            goal_amount: campaign.goal_amount.to_f64().unwrap_or(0.0),
            raised_amount: campaign.raised_amount.to_f64().unwrap_or(0.0),
            donor_count: campaign.donor_count,
            creator_id: campaign.creator_id.clone(),
            created_at: campaign.created_at.naive_utc(),
            end_date: campaign.end_date.naive_utc(),
            status: campaign.status.as_str().to_string(),
            is_verified: campaign.is_verified,
            share_count: campaign.share_count,
        }
    }
}
