//! Recommendation engine - ranked campaign lists with reasons.

mod reasons;
mod recommend_constants;
mod recommend_errors;
mod recommend_model;
mod recommend_service;
mod recommend_traits;

#[cfg(test)]
mod recommend_service_tests;

pub use reasons::reasons_for;
pub use recommend_constants::*;
pub use recommend_errors::RecommendError;
pub use recommend_model::{
    RecommendRequest, RecommendResponse, RecommendationKind, RecommendedCampaign,
};
pub use recommend_service::RecommendationService;
pub use recommend_traits::RecommendationServiceTrait;
