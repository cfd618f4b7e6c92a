use std::collections::HashMap;
use tracing::trace;

use super::engine::filter_and_sort;
use super::query::Query;
use crate::item::{Item, ItemKind};
use crate::store::ItemStore;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    kind: ItemKind,
    query: Query,
    revision: u64,
}

/// Remembers the last listing so redrawing with unchanged inputs skips the
/// filter and sort.
///
/// Keyed on the partition, the query and the store revision, so any
/// successful `add` invalidates it. Only the ids of the matches are kept;
/// the items themselves are borrowed from the store on every call.
#[derive(Debug, Default)]
pub struct QueryCache {
    last: Option<(CacheKey, Vec<String>)>,
    hits: u64,
    misses: u64,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The listing for `kind` under `query`. Filtering and sorting only
    /// run if the inputs differ from the previous call.
    pub fn get<'s, B>(
        &mut self,
        store: &'s ItemStore<B>,
        kind: ItemKind,
        query: &Query,
    ) -> Vec<&'s Item> {
        let key = CacheKey {
            kind,
            query: query.clone(),
            revision: store.revision(),
        };
        let partition = store.partition(kind);

        if let Some((cached, ids)) = &self.last {
            if *cached == key {
                self.hits = self.hits.wrapping_add(1);
                trace!("Listing cache hit for {kind} at revision {}", key.revision);
                let by_id: HashMap<&str, &'s Item> = partition
                    .into_iter()
                    .map(|item| (item.id.as_str(), item))
                    .collect();
                return ids
                    .iter()
                    .filter_map(|id| by_id.get(id.as_str()).copied())
                    .collect();
            }
        }

        self.misses = self.misses.wrapping_add(1);
        let items = filter_and_sort(partition, query);
        self.last = Some((key, items.iter().map(|item| item.id.clone()).collect()));
        items
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Forget the cached listing.
    pub fn clear(&mut self) {
        self.last = None;
    }
}
