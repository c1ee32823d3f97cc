//! Donations module - domain models and store traits.

mod donations_model;
mod donations_traits;

pub use donations_model::{Donation, DonationVelocity, DonationWithCampaign};
pub use donations_traits::DonationRepositoryTrait;
