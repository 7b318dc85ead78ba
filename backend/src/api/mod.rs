pub mod search;
pub mod price;
