/// Network adapters for the Snyk API
pub mod pagination;
mod snyk_client;

pub use pagination::{collect_pages, FetchOutcome, PageFetcher, RateLimitPolicy};
pub use snyk_client::SnykClient;
