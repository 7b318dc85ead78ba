//! Price lookup calls.

mod get_card_price;
pub use get_card_price::get_card_price;
