//! Search page controller: owns the page state and runs the gateway calls.

use common::{
    filter_selection::{Facet, FacetValue},
    search_result::{SearchResultItem, SearchResultPage},
};

use crate::{
    api::{
        price_api::PriceGateway,
        search_api::{SearchGateway, get_suggestions},
    },
    data_definitions::{
        price_form::{PriceForm, PriceLookupState},
        search_state::{SearchState, SearchTicket, StaleResponsePolicy},
    },
    search_view::view::SearchView,
};

pub struct SearchPage<G, P> {
    search_state: SearchState,
    price_state: PriceLookupState,
    search_gateway: G,
    price_gateway: P,
}

impl<G: SearchGateway, P: PriceGateway> SearchPage<G, P> {
    pub fn new(search_gateway: G, price_gateway: P) -> Self {
        Self::with_policy(search_gateway, price_gateway, StaleResponsePolicy::default())
    }

    pub fn with_policy(search_gateway: G, price_gateway: P, policy: StaleResponsePolicy) -> Self {
        Self {
            search_state: SearchState::new(policy),
            price_state: PriceLookupState::default(),
            search_gateway,
            price_gateway,
        }
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search_state
    }

    pub fn price_state(&self) -> &PriceLookupState {
        &self.price_state
    }

    pub fn view(&self) -> SearchView<'_> {
        self.search_state.view()
    }

    fn update_search<T>(&mut self, command: impl FnOnce(SearchState) -> (SearchState, T)) -> T {
        let (state, output) = command(std::mem::take(&mut self.search_state));
        self.search_state = state;
        output
    }

    fn update_price<T>(&mut self, command: impl FnOnce(PriceLookupState) -> (PriceLookupState, T)) -> T {
        let (state, output) = command(std::mem::take(&mut self.price_state));
        self.price_state = state;
        output
    }

    // Dispatch and completion are separate steps so callers may keep several
    // searches in flight; `submit_query` and friends chain them.

    pub fn begin_query(&mut self, query_string: &str) -> Option<SearchTicket> {
        self.update_search(|state| state.submit_query(query_string))
    }

    pub fn begin_page(&mut self, page: u64) -> Option<SearchTicket> {
        self.update_search(|state| state.go_to_page(page))
    }

    pub async fn fetch(&self, ticket: &SearchTicket) -> anyhow::Result<SearchResultPage> {
        get_suggestions(&self.search_gateway, ticket.query.clone()).await
    }

    pub fn finish(&mut self, ticket: &SearchTicket, outcome: anyhow::Result<SearchResultPage>) {
        self.update_search(|state| (state.complete(ticket, outcome), ()));
    }

    async fn run(&mut self, ticket: Option<SearchTicket>) {
        let Some(ticket) = ticket else { return };
        let outcome = self.fetch(&ticket).await;
        self.finish(&ticket, outcome);
    }

    pub async fn submit_query(&mut self, query_string: &str) {
        let ticket = self.begin_query(query_string);
        self.run(ticket).await;
    }

    pub async fn go_to_page(&mut self, page: u64) {
        let ticket = self.begin_page(page);
        self.run(ticket).await;
    }

    pub async fn next_page(&mut self) {
        let ticket = self.update_search(|state| state.next_page());
        self.run(ticket).await;
    }

    pub async fn previous_page(&mut self) {
        let ticket = self.update_search(|state| state.previous_page());
        self.run(ticket).await;
    }

    pub fn set_filter(&mut self, facet: Facet, value: impl Into<FacetValue>) {
        let value = value.into();
        self.update_search(|state| (state.with_filter(facet, value), ()));
    }

    pub fn clear_filters(&mut self) {
        self.update_search(|state| (state.clear_filters(), ()));
    }

    pub fn select_card(&mut self, item: &SearchResultItem) {
        self.update_price(|state| (state.select_card(item), ()));
    }

    pub fn set_price_form(&mut self, form: PriceForm) {
        self.update_price(|state| (state.with_form(form), ()));
    }

    pub async fn submit_price(&mut self) {
        let Some(request) = self.update_price(|state| state.submit()) else { return };
        let outcome = self.price_gateway.get_market_price(request).await;
        self.update_price(|state| (state.complete(outcome), ()));
    }
}
