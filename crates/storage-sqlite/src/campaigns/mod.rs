//! Campaign storage - Diesel models and repository.

mod model;
mod repository;

pub use model::CampaignDB;
pub use repository::CampaignRepository;
