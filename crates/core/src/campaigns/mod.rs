//! Campaigns module - domain models and store traits.

mod campaigns_model;
mod campaigns_traits;


pub use campaigns_model::{
    Campaign, CampaignCategory, CampaignFilters, CampaignLocation, CampaignStatus,
    CampaignSummary, CampaignText, TextMatch,
};
pub use campaigns_traits::CampaignRepositoryTrait;
