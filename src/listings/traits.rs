use crate::listings::error::FetchError;
use crate::listings::response::ListingPage;
use crate::listings::types::ListingQuery;
use async_trait::async_trait;

/// A backend that can serve pages of property listings
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Issue exactly one request for the given query
    async fn fetch_page(&self, query: &ListingQuery) -> Result<ListingPage, FetchError>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
