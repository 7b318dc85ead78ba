//! State definitions for the search page.
//!
//! Every command consumes the current `SearchState` and returns the next one.
//! Commands that need the catalog also hand back a `SearchTicket`; the caller
//! runs the request and feeds the outcome to `SearchState::complete`.

use common::{
    filter_selection::{Facet, FacetValue, FilterSelection},
    search_const::{PAGE_SIZE, SEARCH_FAILED_MESSAGE},
    search_query::{SearchQuery, is_searchable_query},
    search_result::{SearchResultItem, SearchResultPage},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::search_view::{pagination, view::SearchView};

/// What to do with a response that arrives after a newer search was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StaleResponsePolicy {
    /// Only the most recently issued search may update the state.
    #[default]
    DiscardStale,
    /// Every response is applied in arrival order.
    LastWriterWins,
}

/// Paging counters of the last successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub total_results: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl From<&SearchResultPage> for PageState {
    fn from(page: &SearchResultPage) -> Self {
        Self {
            total_results: page.total_results,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            has_next_page: page.has_next_page,
            has_previous_page: page.has_previous_page,
        }
    }
}

/// A dispatched search. `sequence` grows by one per dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub sequence: u64,
    pub query: SearchQuery,
}

impl SearchTicket {
    /// Page 1 means a fresh search; anything else is navigation within one.
    pub fn is_new_search(&self) -> bool {
        self.query.page == 1
    }
}


#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query_string: String,
    pub current_page: u64,
    pub page_size: u64,
    pub results: Vec<SearchResultItem>,
    pub page_state: Option<PageState>,
    pub filters: FilterSelection,
    pub is_searching: bool,
    pub error_message: Option<String>,
    last_issued_sequence: u64,
    policy: StaleResponsePolicy,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(StaleResponsePolicy::default())
    }
}

impl SearchState {
    pub fn new(policy: StaleResponsePolicy) -> Self {
        Self {
            query_string: String::new(),
            current_page: 1,
            page_size: PAGE_SIZE,
            results: vec![],
            page_state: None,
            filters: FilterSelection::default(),
            is_searching: false,
            error_message: None,
            last_issued_sequence: 0,
            policy,
        }
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn policy(&self) -> StaleResponsePolicy {
        self.policy
    }

    pub fn last_issued_sequence(&self) -> u64 {
        self.last_issued_sequence
    }

    pub fn view(&self) -> SearchView<'_> {
        SearchView::new(self)
    }

    /// Starts a new search on page 1. Queries that are too short leave the state untouched.
    pub fn submit_query(self, query_string: &str) -> (Self, Option<SearchTicket>) {
        if !is_searchable_query(query_string) {
            debug!("Ignoring short query {:?}", query_string);
            return (self, None);
        }
        let query_string = query_string.trim().to_string();
        let (state, ticket) = self.dispatch(query_string, 1);
        (state, Some(ticket))
    }

    /// Re-runs the current query for `page`, if `page` is within the last known page count.
    pub fn go_to_page(self, page: u64) -> (Self, Option<SearchTicket>) {
        if !pagination::can_go_to_page(page, self.page_state.as_ref()) || !is_searchable_query(&self.query_string) {
            return (self, None);
        }
        let query_string = self.query_string.clone();
        let (state, ticket) = self.dispatch(query_string, page);
        (state, Some(ticket))
    }

    pub fn next_page(self) -> (Self, Option<SearchTicket>) {
        if !pagination::can_go_next(self.page_state.as_ref()) {
            return (self, None);
        }
        let Some(page) = self.current_page.checked_add(1) else {
            return (self, None);
        };
        self.go_to_page(page)
    }

    pub fn previous_page(self) -> (Self, Option<SearchTicket>) {
        if !pagination::can_go_previous(self.page_state.as_ref()) {
            return (self, None);
        }
        let page = self.current_page.saturating_sub(1);
        self.go_to_page(page)
    }

    fn dispatch(mut self, query_string: String, page: u64) -> (Self, SearchTicket) {
        self.last_issued_sequence += 1;
        let ticket = SearchTicket {
            sequence: self.last_issued_sequence,
            query: SearchQuery::new(query_string.clone()).with_page(page).with_page_size(self.page_size),
        };
        debug!("Dispatching search #{} {:?} page {}", ticket.sequence, query_string, page);
        self.query_string = query_string;
        self.current_page = page;
        self.results = vec![];
        self.error_message = None;
        self.is_searching = true;
        (self, ticket)
    }

    /// Applies the outcome of `ticket`. A failure drops the results and the page
    /// state and leaves one generic error message.
    pub fn complete(mut self, ticket: &SearchTicket, outcome: anyhow::Result<SearchResultPage>) -> Self {
        if self.policy == StaleResponsePolicy::DiscardStale && ticket.sequence != self.last_issued_sequence {
            debug!("Discarding stale search #{} (latest is #{})", ticket.sequence, self.last_issued_sequence);
            return self;
        }
        self.is_searching = false;
        match outcome {
            Ok(page) => {
                self.page_state = Some(PageState::from(&page));
                self.results = page.results;
                if ticket.is_new_search() {
                    self.filters = FilterSelection::default();
                }
            }
            Err(err) => {
                warn!("Search #{} {:?} failed: {:#}", ticket.sequence, ticket.query.query_string, err);
                self.results = vec![];
                self.page_state = None;
                self.error_message = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        self
    }

    pub fn with_filter(mut self, facet: Facet, value: impl Into<FacetValue>) -> Self {
        self.filters = self.filters.with(facet, value);
        self
    }

    pub fn clear_filters(mut self) -> Self {
        self.filters = FilterSelection::default();
        self
    }
}
