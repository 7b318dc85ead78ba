pub mod search_api;
pub mod price_api;
