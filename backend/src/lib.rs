//! Catalog service client used as the search gateway and price lookup collaborator.

pub mod api;
pub mod catalog_utils;
