//! Personalization - donor preference profiles.

mod personalization_model;
mod personalization_service;
mod personalization_traits;


pub use personalization_model::DonorPreferenceProfile;
pub use personalization_service::ProfileService;
pub use personalization_traits::ProfileServiceTrait;
