//! Read-only snapshot of everything the search page shows.

use std::ops::Deref;

use common::{search_result::SearchResultItem, set_name::format_set_name};

use crate::{
    data_definitions::search_state::SearchState,
    search_view::{facet_index::FacetOptions, filter_pipeline::filter_results, pagination},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchViewStatus {
    /// Nothing searched yet.
    Idle,
    Searching,
    /// The catalog answered with an empty page.
    NoResults,
    Results,
    Failed(String),
}

/// A displayed result with the same canonical set label the set facet uses.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow<'a> {
    pub item: &'a SearchResultItem,
    pub set_label: Option<String>,
}

impl<'a> ResultRow<'a> {
    pub fn new(item: &'a SearchResultItem) -> Self {
        Self { item, set_label: format_set_name(item) }
    }
}

impl Deref for ResultRow<'_> {
    type Target = SearchResultItem;

    fn deref(&self) -> &Self::Target {
        self.item
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView<'a> {
    pub status: SearchViewStatus,
    pub results: Vec<ResultRow<'a>>,
    pub facet_options: FacetOptions,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_results: u64,
    pub page_window: Vec<u64>,
    pub can_go_next: bool,
    pub can_go_previous: bool,
}

impl<'a> SearchView<'a> {
    pub fn new(state: &'a SearchState) -> Self {
        let page_state = state.page_state.as_ref();
        let total_pages = page_state.map(|p| p.total_pages).unwrap_or(0);
        Self {
            status: view_status(state),
            results: filter_results(&state.results, &state.filters).into_iter().map(ResultRow::new).collect(),
            facet_options: FacetOptions::compute(&state.results, &state.filters),
            current_page: state.current_page,
            total_pages,
            total_results: page_state.map(|p| p.total_results).unwrap_or(0),
            page_window: pagination::page_window(state.current_page, total_pages),
            can_go_next: pagination::can_go_next(page_state),
            can_go_previous: pagination::can_go_previous(page_state),
        }
    }
}

pub fn view_status(state: &SearchState) -> SearchViewStatus {
    if state.is_searching {
        return SearchViewStatus::Searching;
    }
    if let Some(message) = &state.error_message {
        return SearchViewStatus::Failed(message.clone());
    }
    match &state.page_state {
        None => SearchViewStatus::Idle,
        Some(_) if state.results.is_empty() => SearchViewStatus::NoResults,
        Some(_) => SearchViewStatus::Results,
    }
}
