//! Donor domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaigns::CampaignLocation;

/// Domain model representing a donor / campaign creator.
///
/// The same record backs both roles: trust scoring reads the verification
/// flags of a campaign's creator, and nearby recommendations read the
/// location of the requesting donor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: String,
    pub display_name: String,
    pub is_verified: bool,
    pub is_phone_verified: bool,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<CampaignLocation>,
    pub created_at: DateTime<Utc>,
}

impl Donor {
    pub fn has_photo(&self) -> bool {
        self.photo_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    pub fn has_bio(&self) -> bool {
        self.bio.as_deref().is_some_and(|bio| !bio.is_empty())
    }

    /// Account age in whole days.
    pub fn account_age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days().max(0)
    }
}
