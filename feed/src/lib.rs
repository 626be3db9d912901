mod errors;
mod queries;
pub mod structs;

pub use errors::{Error, Result};
pub use structs::{Lookup, NominationRecord};

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://nordevcommentsbackend.fly.dev/api/messages";

/// Read-only client for the comments backend that stores and ranks nominations.
///
/// Cloning is cheap, the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: &str) -> FeedClient {
        FeedClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the ranked nominations in the order the backend sent them, highest
    /// vote count first. The order is trusted, never re-sorted.
    #[inline]
    pub async fn top_comments(&self) -> Result<Vec<NominationRecord>> {
        queries::get_top_comments(&self.client, &self.base_url).await
    }

    /// Looks up the nomination stored for a message link. A link that was never
    /// nominated is `Lookup::NotFound`, not an error.
    #[inline]
    pub async fn comment_by_link(&self, message_link: &str) -> Result<Lookup<NominationRecord>> {
        queries::get_comment_by_link(&self.client, &self.base_url, message_link).await
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        FeedClient::new(DEFAULT_BASE_URL)
    }
}
