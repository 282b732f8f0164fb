pub mod client;
pub mod error;
#[cfg(test)]
pub mod fake;
pub mod response;
pub mod traits;
pub mod types;

pub use client::ListingClient;
pub use error::{FetchError, FORMAT_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
pub use response::ListingPage;
pub use traits::ListingSource;
pub use types::{FilterCriteria, FilterField, ListingQuery, PAGE_SIZE};
