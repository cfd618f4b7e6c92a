#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod item;
pub mod logging;
pub mod posting;
pub mod search;
pub mod store;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use item::{
    validate_draft, AdmissionRules, Category, Item, ItemDraft, ItemKind, NewItem, ValidationError,
};
pub use posting::{PostError, PostingService};
pub use search::{filter_and_sort, CategoryFilter, Listing, Query, QueryCache, SortKey};
pub use store::{
    BackendError, FileBackend, Hydration, ItemStore, KeyValueStore, MemoryBackend, StoreError,
    DEFAULT_SLOT_KEY,
};
pub use user_config::{load_user_config, UserConfig, UserConfigError};
