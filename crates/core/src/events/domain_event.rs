//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by the surrounding platform after successful
/// mutations.
///
/// This subsystem only consumes them to keep derived state (the donor
/// profile cache) consistent; it never emits them itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A donation completed. Invalidates the donor's cached preference
    /// profile.
    DonationRecorded {
        donor_id: String,
        campaign_id: String,
    },

    /// A campaign was created or updated.
    CampaignChanged { campaign_id: String },
}

impl DomainEvent {
    pub fn donation_recorded(donor_id: String, campaign_id: String) -> Self {
        Self::DonationRecorded {
            donor_id,
            campaign_id,
        }
    }

    pub fn campaign_changed(campaign_id: String) -> Self {
        Self::CampaignChanged { campaign_id }
    }
}
