//! Donor storage - Diesel models and repository.

mod model;
mod repository;

pub use model::DonorDB;
pub use repository::DonorRepository;
