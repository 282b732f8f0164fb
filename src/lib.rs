//! Paged, filterable browsing of a real-estate marketplace's listings.
//!
//! [`controller::ListingController`] owns the search/filter/page state and
//! talks to any [`listings::ListingSource`]; [`listings::ListingClient`] is
//! the HTTP implementation and [`kiosk`] a terminal front-end over both.

pub mod config;
pub mod controller;
pub mod kiosk;
pub mod listings;
pub mod models;
