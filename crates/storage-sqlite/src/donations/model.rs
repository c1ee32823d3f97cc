//! Database models for donations.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use fundra_core::donations::Donation;

/// Database model for donations
#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::donations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DonationDB {
    pub id: String,
    pub donor_id: String,
    pub campaign_id: String,
    pub amount: f64,
    pub donated_at: NaiveDateTime,
    pub payment_method: String,
}

impl From<DonationDB> for Donation {
    fn from(row: DonationDB) -> Self {
        Donation {
            id: row.id,
            donor_id: row.donor_id,
            campaign_id: row.campaign_id,
            amount: Decimal::from_f64(row.amount).unwrap_or_default(),
            donated_at: row.donated_at.and_utc(),
            payment_method: row.payment_method,
        }
    }
}

impl From<&Donation> for DonationDB {
    fn from(donation: &Donation) -> Self {
        DonationDB {
            id: donation.id.clone(),
            donor_id: donation.donor_id.clone(),
            campaign_id: donation.campaign_id.clone(),
            amount: donation.amount.to_f64().unwrap_or(0.0),
            donated_at: donation.donated_at.naive_utc(),
            payment_method: donation.payment_method.clone(),
        }
    }
}
