use crate::listings::{FetchError, ListingPage, ListingQuery, ListingSource};
use crate::models::{Property, PropertyStatus};
use async_trait::async_trait;
use std::sync::Mutex;

type Responder = Box<dyn Fn(&ListingQuery) -> Result<ListingPage, FetchError> + Send + Sync>;

/// In-memory source that records every query it receives
pub struct RecordingSource {
    queries: Mutex<Vec<ListingQuery>>,
    respond: Responder,
}

impl RecordingSource {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&ListingQuery) -> Result<ListingPage, FetchError> + Send + Sync + 'static,
    {
        Self {
            queries: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    /// Serves `count` generated listings split into pages of the query's limit
    pub fn with_listings(count: u32) -> Self {
        Self::new(move |query| {
            let limit = query.limit.max(1);
            let total_pages = count.div_ceil(limit);
            let start = (query.page - 1) * limit;
            let end = (start + limit).min(count);
            Ok(ListingPage {
                properties: (start..end).map(property).collect(),
                total_pages,
            })
        })
    }

    pub fn queries(&self) -> Vec<ListingQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl ListingSource for RecordingSource {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<ListingPage, FetchError> {
        self.queries.lock().unwrap().push(query.clone());
        (self.respond)(query)
    }

    fn source_name(&self) -> &'static str {
        "Recording"
    }
}

pub fn property(n: u32) -> Property {
    Property {
        id: format!("p{}", n),
        title: format!("Listing {}", n),
        status: PropertyStatus::Available,
        price: 100_000.0 + f64::from(n) * 1_000.0,
        bedrooms: 2,
        bathrooms: 1,
        area_size: Some(850.0),
        area: "Riverside".into(),
        city: "Springfield".into(),
        cover_image: None,
        images: Vec::new(),
    }
}
