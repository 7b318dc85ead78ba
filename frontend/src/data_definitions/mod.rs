pub mod search_state;
pub mod price_form;
