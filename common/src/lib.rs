//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_query;
pub mod search_result;
pub mod search_const;
pub mod filter_selection;
pub mod set_name;
pub mod card_price;
