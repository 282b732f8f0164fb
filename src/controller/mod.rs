pub mod listing;
pub mod pagination;
pub mod state;

pub use listing::{FetchOutcome, ListingController};
pub use pagination::{compute_pagination_window, PageLink, PaginationControls};
pub use state::{FetchStatus, ListingChange, ListingView, RefetchReason};
