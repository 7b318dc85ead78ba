//! Values derived from a `SearchState` snapshot. Everything here is recomputed on read.

pub mod facet_index;
pub mod filter_pipeline;
pub mod pagination;
pub mod view;
