//! Donation storage - Diesel models and repository.

mod model;
mod repository;

pub use model::DonationDB;
pub use repository::DonationRepository;
