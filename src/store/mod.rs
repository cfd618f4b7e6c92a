//! The item store: the authoritative, newest-first list of postings, mirrored
//! into a single key-value slot.
//!
//! The slot holds the JSON array of every item. It is read once when the
//! store is opened and rewritten in full after every successful `add`.
//! Memory and slot never diverge: if the write fails the new item is taken
//! back out of the list before the error is returned.

mod backend;
mod clock;
mod error;
mod hydrate;
mod notify;

pub use backend::{BackendError, FileBackend, KeyValueStore, MemoryBackend};
pub use clock::{Clock, SystemClock};
pub use error::StoreError;
pub use hydrate::Hydration;
pub use notify::{StoreEvent, SubscriptionId, Subscribers};

use std::fmt;
use tracing::{debug, info, warn};

use crate::item::{new_item_id, Item, ItemKind, NewItem};

/// Slot key the browser version of the board stored its list under.
pub const DEFAULT_SLOT_KEY: &str = "lostFoundItems";

pub struct ItemStore<B> {
    backend: B,
    key: String,
    items: Vec<Item>,
    hydration: Hydration,
    revision: u64,
    clock: Box<dyn Clock>,
    subscribers: Subscribers,
}

impl<B: KeyValueStore> ItemStore<B> {
    /// Open the store over `backend`, hydrating from the slot named `key`.
    ///
    /// Never fails: a missing, unreadable or malformed slot leaves the store
    /// empty. What happened is available from [`ItemStore::hydration`].
    pub fn open(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let (items, hydration) = hydrate::load(&backend, &key);
        match &hydration {
            Hydration::Empty => debug!("Slot '{key}' is empty; starting with no items"),
            Hydration::Loaded { count } => info!("Loaded {count} items from slot '{key}'"),
            Hydration::Discarded { reason } => {
                warn!("Ignoring stored items in slot '{key}': {reason}");
            }
        }
        Self {
            backend,
            key,
            items,
            hydration,
            revision: 0,
            clock: Box::new(SystemClock),
            subscribers: Subscribers::default(),
        }
    }

    /// Use `clock` for `datePosted` on new items.
    #[must_use]
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Admit a validated candidate: assign id and posting time, put it at
    /// the head of the list and rewrite the slot.
    pub fn add(&mut self, candidate: NewItem) -> Result<Item, StoreError> {
        let mut id = new_item_id();
        while self.items.iter().any(|existing| existing.id == id) {
            id = new_item_id();
        }
        let item = candidate.into_item(id, self.clock.now());

        self.items.insert(0, item.clone());
        if let Err(e) = self.persist() {
            self.items.remove(0);
            warn!("Rolled back item '{}': {e}", item.title);
            return Err(e);
        }

        self.revision = self.revision.wrapping_add(1);
        info!(
            "Posted {} item '{}' ({}) as {}",
            item.kind, item.title, item.category, item.id
        );
        self.subscribers.notify(StoreEvent::Added(&item));
        Ok(item)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let payload = serde_json::to_string(&self.items)?;
        self.backend
            .set(&self.key, &payload)
            .map_err(|source| StoreError::Write {
                key: self.key.clone(),
                source,
            })
    }
}

impl<B> ItemStore<B> {
    /// Every item of `kind`, in store order (newest first). The borrow ends
    /// at the next `add`.
    #[must_use]
    pub fn partition(&self, kind: ItemKind) -> Vec<&Item> {
        self.items.iter().filter(|item| item.kind == kind).collect()
    }

    #[must_use]
    pub fn count(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }

    /// All items, newest first.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped after every successful `add`.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn hydration(&self) -> &Hydration {
        &self.hydration
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Close the store and hand back its backend.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Register `callback` for change events.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(StoreEvent<'_>) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

impl<B> fmt::Debug for ItemStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStore")
            .field("key", &self.key)
            .field("len", &self.items.len())
            .field("revision", &self.revision)
            .field("hydration", &self.hydration)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
