use thiserror::Error;

/// Errors the recommendation engine surfaces to callers.
///
/// Almost everything inside the engine degrades to the popular-campaigns
/// fallback instead of erroring; the variants here are caller-visible
/// contract signals, not transient data failures.
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Donor '{0}' has no location on their profile")]
    NoDonorLocation(String),
}
