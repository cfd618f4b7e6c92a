//! Query engine: filtering and ordering a partition for display.

mod cache;
mod engine;
mod listing;
mod query;

pub use cache::QueryCache;
pub use engine::{filter_and_sort, locale_cmp};
pub use listing::Listing;
pub use query::{CategoryFilter, Query, QueryError, SortKey, ALL_CATEGORIES};

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
