//! Shared search query models and helpers.

use serde::{Deserialize, Serialize};

use crate::search_const::{MAX_PAGE_SIZE, MIN_QUERY_LENGTH, PAGE_SIZE};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub query_string: String,
    pub page: u64,
    pub page_size: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self { query_string: String::new(), page: 1, page_size: PAGE_SIZE }
    }
}

impl SearchQuery {
    pub fn new(query_string: impl Into<String>) -> Self {
        Self { query_string: query_string.into(), ..Default::default() }
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Query text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.query_string.trim()
    }

    /// Queries shorter than `MIN_QUERY_LENGTH` characters are never sent to the catalog.
    pub fn is_searchable(&self) -> bool {
        is_searchable_query(&self.query_string)
    }

    /// Copy with trimmed text, page clamped to `>= 1` and page size clamped to `1..=MAX_PAGE_SIZE`.
    pub fn normalized(&self) -> Self {
        Self {
            query_string: self.trimmed().to_string(),
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }
}

pub fn is_searchable_query(query_string: &str) -> bool {
    query_string.trim().chars().count() >= MIN_QUERY_LENGTH
}
