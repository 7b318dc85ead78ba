//! Search gateway calls and module exports.

mod search_suggestions;
pub use search_suggestions::search_suggestions;
