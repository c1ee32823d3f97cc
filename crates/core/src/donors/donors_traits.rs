use std::collections::HashMap;

use async_trait::async_trait;

use crate::donors::donors_model::Donor;
use crate::errors::Result;

/// Trait for donor/creator profile reads.
#[async_trait]
pub trait DonorRepositoryTrait: Send + Sync {
    async fn get_by_id(&self, donor_id: &str) -> Result<Donor>;

    /// Batch read keyed by donor id. Missing ids are simply absent from the
    /// map; callers degrade those creators to neutral trust.
    async fn get_by_ids(&self, donor_ids: &[String]) -> Result<HashMap<String, Donor>>;
}
