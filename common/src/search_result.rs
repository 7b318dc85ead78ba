use serde::{Deserialize, Serialize};

use crate::filter_selection::Facet;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub results: Vec<SearchResultItem>,
    pub total_results: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl SearchResultPage {
    /// Builds a page whose counters and navigation flags are derived from `total_results`.
    pub fn new(results: Vec<SearchResultItem>, total_results: u64, page: u64, page_size: u64) -> Self {
        let total_pages = total_pages_for(total_results, page_size);
        Self {
            results,
            total_results,
            page,
            page_size,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }

    /// The answer for a query that was never sent: nothing found, nowhere to go.
    pub fn empty(page: u64, page_size: u64) -> Self {
        Self {
            results: vec![],
            total_results: 0,
            page,
            page_size,
            total_pages: 0,
            has_next_page: false,
            has_previous_page: false,
        }
    }

    /// Checks the counter invariants; the catalog flags are still trusted when this fails.
    pub fn is_consistent(&self) -> bool {
        self.total_pages == total_pages_for(self.total_results, self.page_size)
            && self.has_next_page == (self.page < self.total_pages)
            && self.has_previous_page == (self.page > 1)
    }
}

pub fn total_pages_for(total_results: u64, page_size: u64) -> u64 {
    if total_results == 0 || page_size == 0 {
        return 0;
    }
    total_results.div_ceil(page_size)
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub text: String,
    pub card_name: String,
    pub set_name: Option<String>,
    pub product_line: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
    pub market_price: Option<f64>,
    pub rarity: Option<String>,
    pub card_number: Option<String>,
    pub card_type: Option<String>,
    pub color: Option<String>,
}

impl SearchResultItem {
    pub fn new(card_name: impl Into<String>) -> Self {
        let card_name = card_name.into();
        Self {
            text: card_name.clone(),
            card_name,
            set_name: None,
            product_line: None,
            image_url: None,
            product_url: None,
            market_price: None,
            rarity: None,
            card_number: None,
            card_type: None,
            color: None,
        }
    }

    /// Raw value of an exact-match facet field. `Facet::Set` is canonicalized
    /// elsewhere, see `set_name::format_set_name`.
    pub fn facet_field(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Rarity => self.rarity.as_deref(),
            Facet::Set => self.set_name.as_deref(),
            Facet::CardType => self.card_type.as_deref(),
            Facet::Color => self.color.as_deref(),
        }
    }
}
