use async_trait::async_trait;

use crate::types::{Quote, QuoteError, RemoteAck, RemoteRecord};

mod http;

pub use http::HttpGateway;

/// Access to the authoritative remote collection.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Fetch the full remote snapshot.
    async fn fetch_remote(&self) -> Result<Vec<RemoteRecord>, QuoteError>;
    /// Send a locally created quote. Best-effort; callers report failures, they don't retry.
    async fn push_local(&self, quote: &Quote) -> Result<RemoteAck, QuoteError>;
}
