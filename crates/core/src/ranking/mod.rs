//! Ranking - relevance combination and sort strategies.

mod ranking_constants;
mod ranking_model;
mod scorer;

pub use ranking_constants::*;
pub use ranking_model::{ScoredCampaign, SortStrategy};
pub use scorer::{rank, relevance_score, score_campaign};
