//! Donors module - domain models and store traits.

mod donors_model;
mod donors_traits;

pub use donors_model::Donor;
pub use donors_traits::DonorRepositoryTrait;
