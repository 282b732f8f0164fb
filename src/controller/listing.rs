use crate::controller::state::{ListingChange, ListingState, ListingView, RefetchReason};
use crate::listings::{
    FetchError, FilterCriteria, FilterField, ListingQuery, ListingSource, PAGE_SIZE,
};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

/// Result of a single fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded { count: usize, total_pages: u32 },
    FormatError,
    NetworkError,
    /// A newer fetch was issued before this one resolved; its result was dropped
    Stale,
}

/// Owns the filter/page state of a listing grid and keeps it in sync with a
/// [`ListingSource`].
///
/// Every parameter change goes through [`apply`](Self::apply), which folds a
/// batch of edits into at most one fetch. Each fetch takes a generation ticket
/// so that a slow response can never overwrite a newer one. View snapshots are
/// pushed to subscribers on every transition.
pub struct ListingController<S> {
    source: S,
    page_size: u32,
    state: Mutex<ListingState>,
    view_tx: watch::Sender<ListingView>,
}

impl<S: ListingSource> ListingController<S> {
    pub fn new(source: S) -> Self {
        Self::with_criteria(source, FilterCriteria::default())
    }

    /// Start from pre-filled criteria, e.g. from command-line flags
    pub fn with_criteria(source: S, criteria: FilterCriteria) -> Self {
        let state = ListingState {
            criteria,
            ..Default::default()
        };
        let (view_tx, _) = watch::channel(state.view());
        Self {
            source,
            page_size: PAGE_SIZE,
            state: Mutex::new(state),
            view_tx,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Receive a snapshot after every state transition
    pub fn subscribe(&self) -> watch::Receiver<ListingView> {
        self.view_tx.subscribe()
    }

    /// Latest published snapshot
    pub fn view(&self) -> ListingView {
        self.view_tx.borrow().clone()
    }

    /// First load after construction
    pub async fn load(&self) -> FetchOutcome {
        self.trigger_refetch(RefetchReason::Initial).await
    }

    /// Fetch the current page with the current criteria
    pub async fn fetch(&self) -> FetchOutcome {
        let (ticket, query) = {
            let mut state = self.state.lock().await;
            let ticket = state.begin_fetch();
            let query = ListingQuery::build(&state.criteria, state.current_page, self.page_size);
            self.publish(&state);
            (ticket, query)
        };

        debug!(ticket, ?query, "Requesting listings from {}", self.source.source_name());
        let result = self.source.fetch_page(&query).await;

        let outcome = match &result {
            Ok(page) => FetchOutcome::Loaded {
                count: page.properties.len(),
                total_pages: page.total_pages,
            },
            Err(FetchError::Format(detail)) => {
                warn!("Listing response had unexpected shape: {}", detail);
                FetchOutcome::FormatError
            }
            Err(FetchError::Network(detail)) => {
                warn!("Listing request failed: {}", detail);
                FetchOutcome::NetworkError
            }
        };

        let mut state = self.state.lock().await;
        let applied = state.finish_fetch(ticket, result);
        self.publish(&state);

        if !applied {
            debug!(ticket, latest = state.generation, "Discarding stale listing response");
            return FetchOutcome::Stale;
        }
        if let FetchOutcome::Loaded { count, total_pages } = outcome {
            info!(
                "Loaded {} properties (page {} of {})",
                count, state.current_page, total_pages
            );
        }
        outcome
    }

    /// Log the reason and fetch
    pub async fn trigger_refetch(&self, reason: RefetchReason) -> FetchOutcome {
        info!(?reason, "Refreshing listings");
        self.fetch().await
    }

    /// Apply a batch of edits as one user action
    ///
    /// Returns `None` when nothing that affects the query changed.
    pub async fn apply<I>(&self, changes: I) -> Option<FetchOutcome>
    where
        I: IntoIterator<Item = ListingChange>,
    {
        let reason = {
            let mut state = self.state.lock().await;
            let reason = state.apply_batch(changes);
            self.publish(&state);
            reason
        };

        match reason {
            Some(reason) => Some(self.trigger_refetch(reason).await),
            None => None,
        }
    }

    pub async fn set_search_text(&self, text: impl Into<String>) {
        self.apply([ListingChange::SetSearchText(text.into())]).await;
    }

    /// Submit the search box; always restarts from page 1
    pub async fn submit_search(&self) -> FetchOutcome {
        self.apply_and_fetch(ListingChange::SubmitSearch, RefetchReason::SearchSubmitted)
            .await
    }

    pub async fn set_filter(
        &self,
        field: FilterField,
        value: impl Into<String>,
    ) -> Option<FetchOutcome> {
        self.apply([ListingChange::SetFilter(field, value.into())]).await
    }

    pub async fn set_page(&self, page: u32) -> Option<FetchOutcome> {
        self.apply([ListingChange::SetPage(page)]).await
    }

    pub async fn next_page(&self) -> Option<FetchOutcome> {
        self.apply([ListingChange::NextPage]).await
    }

    pub async fn previous_page(&self) -> Option<FetchOutcome> {
        self.apply([ListingChange::PreviousPage]).await
    }

    /// Clear search text and filters, go back to page 1 and fetch once
    pub async fn reset(&self) -> FetchOutcome {
        self.apply_and_fetch(ListingChange::Reset, RefetchReason::Reset)
            .await
    }

    async fn apply_and_fetch(&self, change: ListingChange, reason: RefetchReason) -> FetchOutcome {
        {
            let mut state = self.state.lock().await;
            state.apply(change);
            self.publish(&state);
        }
        self.trigger_refetch(reason).await
    }

    fn publish(&self, state: &ListingState) {
        self.view_tx.send_replace(state.view());
    }
}
