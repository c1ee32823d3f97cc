//! Search request/response contracts.
//!
//! The HTTP layer maps onto these typed structures at the subsystem
//! boundary; nothing inside the pipeline works with untyped dictionaries.

use serde::{Deserialize, Serialize};

use crate::campaigns::{CampaignFilters, CampaignSummary};
use crate::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::ranking::SortStrategy;

/// A campaign search request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: CampaignFilters,
    #[serde(default)]
    pub sort: SortStrategy,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    /// Present for authenticated requests; enables personalization.
    #[serde(default)]
    pub donor_id: Option<String>,
}

impl SearchRequest {
    /// Applies the permissive correction policy: malformed paging and filter
    /// values are fixed up, never rejected.
    pub fn sanitized(&self) -> SearchRequest {
        let mut request = self.clone();
        request.filters = self.filters.sanitized();
        request.page = request.page.max(1);
        request.limit = if request.limit == 0 {
            DEFAULT_PAGE_LIMIT
        } else {
            request.limit.min(MAX_PAGE_LIMIT)
        };
        request
    }
}

/// Paging envelope for a search response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
}

/// Echo of the inputs that actually shaped the result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetadata {
    pub applied_filters: CampaignFilters,
    pub sort_strategy: SortStrategy,
}

/// A campaign in a ranked result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCampaign {
    #[serde(flatten)]
    pub campaign: CampaignSummary,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub items: Vec<RankedCampaign>,
    pub pagination: Pagination,
    pub metadata: SearchMetadata,
}
