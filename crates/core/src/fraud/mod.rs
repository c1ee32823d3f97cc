//! Fraud/anomaly heuristics - an independent risk-scoring pass.

mod fraud_constants;
mod fraud_model;
mod fraud_service;
mod fraud_signals;
mod fraud_traits;


pub use fraud_constants::*;
pub use fraud_model::{CampaignCandidate, RiskAssessment, RiskLevel};
pub use fraud_service::FraudService;
pub use fraud_signals::{goal_excessive, goal_trivial, is_near_duplicate, new_creator_risk};
pub use fraud_traits::FraudServiceTrait;
