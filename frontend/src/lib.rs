//! Search page view state: facet options, filtering, pagination and the gateway calls that drive them.

pub mod api;
pub mod data_definitions;
pub mod search_view;
pub mod pages;
