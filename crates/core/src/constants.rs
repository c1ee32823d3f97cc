/// Default page size for search results
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Maximum page size a caller may request
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Default recommendation list size
pub const DEFAULT_RECOMMENDATION_LIMIT: u32 = 10;

/// Default bound on profile-history fetches, in milliseconds
pub const DEFAULT_PROFILE_FETCH_TIMEOUT_MS: u64 = 2_000;
