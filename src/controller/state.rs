use crate::controller::pagination::PaginationControls;
use crate::listings::{FetchError, FilterCriteria, FilterField, ListingPage};
use crate::models::Property;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where the most recent fetch cycle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    /// Nothing fetched yet; never re-entered once a fetch has been issued
    Idle,
    Loading,
    Success,
    FormatError,
    NetworkError,
}

/// Why a refetch was triggered, ordered by precedence within one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RefetchReason {
    Initial,
    PageChanged,
    FilterChanged,
    SearchSubmitted,
    Reset,
}

/// A single user edit to the listing parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingChange {
    /// Typing in the search box; only fetches once submitted
    SetSearchText(String),
    SetFilter(FilterField, String),
    ClearFilter(FilterField),
    SetPage(u32),
    NextPage,
    PreviousPage,
    SubmitSearch,
    Reset,
}

/// Immutable snapshot published to view subscribers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub status: FetchStatus,
    pub loading: bool,
    pub items: Vec<Property>,
    pub current_page: u32,
    pub total_pages: u32,
    pub criteria: FilterCriteria,
    pub error: Option<&'static str>,
    pub pagination: Option<PaginationControls>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl ListingView {
    /// A successful fetch that matched nothing
    pub fn is_empty_result(&self) -> bool {
        self.status == FetchStatus::Success && self.items.is_empty()
    }
}

#[derive(Debug)]
pub(crate) struct ListingState {
    pub criteria: FilterCriteria,
    pub current_page: u32,
    pub total_pages: u32,
    pub items: Vec<Property>,
    pub status: FetchStatus,
    pub error: Option<&'static str>,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Ticket of the most recently issued fetch
    pub generation: u64,
    pub in_flight: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            current_page: 1,
            total_pages: 0,
            items: Vec::new(),
            status: FetchStatus::Idle,
            error: None,
            fetched_at: None,
            generation: 0,
            in_flight: 0,
        }
    }
}

impl ListingState {
    fn max_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    fn set_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.max_page());
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Filters and page as they reach the query; search text only counts once submitted
    fn query_key(&self) -> (FilterCriteria, u32) {
        let filters = FilterCriteria {
            search_text: String::new(),
            ..self.criteria.clone()
        };
        (filters, self.current_page)
    }

    /// Apply a batch of changes as one user action
    ///
    /// Edits that cancel each other out call for no refetch; submit and reset
    /// always do.
    pub fn apply_batch<I>(&mut self, changes: I) -> Option<RefetchReason>
    where
        I: IntoIterator<Item = ListingChange>,
    {
        let before = self.query_key();
        let reason = changes
            .into_iter()
            .filter_map(|change| self.apply(change))
            .max()?;
        if reason < RefetchReason::SearchSubmitted && self.query_key() == before {
            return None;
        }
        Some(reason)
    }

    /// Apply one change, returning the refetch it calls for
    pub fn apply(&mut self, change: ListingChange) -> Option<RefetchReason> {
        match change {
            ListingChange::SetSearchText(text) => {
                self.criteria.search_text = text;
                None
            }
            ListingChange::SetFilter(field, value) => self
                .criteria
                .set(field, value)
                .then_some(RefetchReason::FilterChanged),
            ListingChange::ClearFilter(field) => self
                .criteria
                .set(field, String::new())
                .then_some(RefetchReason::FilterChanged),
            ListingChange::SetPage(page) => {
                self.set_page(page).then_some(RefetchReason::PageChanged)
            }
            ListingChange::NextPage => {
                let next = self.current_page.saturating_add(1);
                self.set_page(next).then_some(RefetchReason::PageChanged)
            }
            ListingChange::PreviousPage => {
                let previous = self.current_page.saturating_sub(1);
                self.set_page(previous).then_some(RefetchReason::PageChanged)
            }
            ListingChange::SubmitSearch => {
                self.current_page = 1;
                Some(RefetchReason::SearchSubmitted)
            }
            ListingChange::Reset => {
                self.criteria = FilterCriteria::default();
                self.current_page = 1;
                Some(RefetchReason::Reset)
            }
        }
    }

    /// Take a ticket for a new fetch
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight += 1;
        self.status = FetchStatus::Loading;
        self.generation
    }

    /// Record a finished fetch; returns false when the response was stale
    pub fn finish_fetch(&mut self, ticket: u64, result: Result<ListingPage, FetchError>) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if ticket != self.generation {
            return false;
        }

        match result {
            Ok(page) => {
                self.items = page.properties;
                self.total_pages = page.total_pages;
                self.status = FetchStatus::Success;
                self.error = None;
                self.fetched_at = Some(Utc::now());
            }
            Err(err) => {
                self.items.clear();
                self.total_pages = 0;
                self.status = match err {
                    FetchError::Network(_) => FetchStatus::NetworkError,
                    FetchError::Format(_) => FetchStatus::FormatError,
                };
                self.error = Some(err.user_message());
            }
        }
        self.current_page = self.current_page.clamp(1, self.max_page());
        true
    }

    pub fn view(&self) -> ListingView {
        ListingView {
            status: self.status,
            loading: self.in_flight > 0,
            items: self.items.clone(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            criteria: self.criteria.clone(),
            error: self.error,
            pagination: PaginationControls::new(self.current_page, self.total_pages),
            fetched_at: self.fetched_at,
        }
    }
}
