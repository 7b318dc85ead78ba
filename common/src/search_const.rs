//! Constants shared by the catalog client and the search view state.

pub const PAGE_SIZE: u64 = 24;
pub const MAX_PAGE_SIZE: u64 = 50;
pub const MIN_QUERY_LENGTH: usize = 2;

pub const PAGE_WINDOW_SIZE: u64 = 7;
pub const PAGE_WINDOW_MARGIN: u64 = 3;

pub const MAX_CARD_FIELD_LENGTH: usize = 120;
pub const DEFAULT_CURRENCY: &str = "USD";

pub const SEARCH_FAILED_MESSAGE: &str = "Could not search for cards. Please try again.";
pub const PRICE_LOOKUP_FAILED_MESSAGE: &str = "Could not get the card price. Please try again later.";
