//! Database models for donors.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use fundra_core::campaigns::CampaignLocation;
use fundra_core::donors::Donor;

/// Database model for donors
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::donors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DonorDB {
    pub id: String,
    pub display_name: String,
    pub is_verified: bool,
    pub is_phone_verified: bool,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<DonorDB> for Donor {
    fn from(row: DonorDB) -> Self {
        let location = CampaignLocation {
            city: row.city,
            state: row.state,
            country: row.country,
        };
        Donor {
            id: row.id,
            display_name: row.display_name,
            is_verified: row.is_verified,
            is_phone_verified: row.is_phone_verified,
            photo_url: row.photo_url,
            bio: row.bio,
            location: (!location.is_empty()).then_some(location),
            created_at: row.created_at.and_utc(),
        }
    }
}

impl From<&Donor> for DonorDB {
    fn from(donor: &Donor) -> Self {
        let location = donor.location.clone().unwrap_or_default();
        DonorDB {
            id: donor.id.clone(),
            display_name: donor.display_name.clone(),
            is_verified: donor.is_verified,
            is_phone_verified: donor.is_phone_verified,
            photo_url: donor.photo_url.clone(),
            bio: donor.bio.clone(),
            city: location.city,
            state: location.state,
            country: location.country,
            created_at: donor.created_at.naive_utc(),
        }
    }
}
