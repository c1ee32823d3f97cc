use async_trait::async_trait;

use crate::errors::Result;
use crate::search::search_model::{SearchRequest, SearchResponse};

/// Trait for the search operation.
#[async_trait]
pub trait SearchServiceTrait: Send + Sync {
    async fn search(&self, request: SearchRequest) -> Result<SearchResponse>;
}
