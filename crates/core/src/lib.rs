//! Fundra Core - Campaign relevance, recommendation, and fraud screening.
//!
//! This crate contains the scoring and recommendation logic for the Fundra
//! donation platform. It is database-agnostic and defines repository traits
//! that are implemented by the `storage-sqlite` crate.

pub mod cache;
pub mod campaigns;
pub mod constants;
pub mod donations;
pub mod donors;
pub mod errors;
pub mod events;
pub mod features;
pub mod fraud;
pub mod personalization;
pub mod ranking;
pub mod recommend;
pub mod search;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
