//! Search - the filtered, ranked, paginated campaign query operation.

mod search_model;
mod search_service;
mod search_traits;


pub use search_model::{
    Pagination, RankedCampaign, SearchMetadata, SearchRequest, SearchResponse,
};
pub use search_service::SearchService;
pub use search_traits::SearchServiceTrait;
