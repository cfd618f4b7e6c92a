//! Reading the persisted slot back into memory.

use std::collections::HashSet;
use std::fmt;

use super::backend::KeyValueStore;
use crate::item::{is_valid_email, Item};

/// Outcome of reading the slot when the store was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// The slot did not exist.
    Empty,
    /// The slot held a valid list.
    Loaded { count: usize },
    /// The slot could not be used and the store started empty.
    Discarded { reason: String },
}

impl Hydration {
    #[must_use]
    pub fn is_discarded(&self) -> bool {
        matches!(self, Hydration::Discarded { .. })
    }
}

impl fmt::Display for Hydration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hydration::Empty => f.write_str("empty"),
            Hydration::Loaded { count } => write!(f, "loaded {count} items"),
            Hydration::Discarded { reason } => write!(f, "discarded: {reason}"),
        }
    }
}

/// Read and decode the slot. Anything short of a well-formed list of
/// well-formed items is discarded as a whole.
pub(super) fn load<B: KeyValueStore>(backend: &B, key: &str) -> (Vec<Item>, Hydration) {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return (Vec::new(), Hydration::Empty),
        Err(e) => return discard(format!("could not read slot: {e}")),
    };

    let items: Vec<Item> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => return discard(format!("not a valid item list: {e}")),
    };

    if let Err(reason) = check_items(&items) {
        return discard(reason);
    }

    let count = items.len();
    (items, Hydration::Loaded { count })
}

fn discard(reason: String) -> (Vec<Item>, Hydration) {
    (Vec::new(), Hydration::Discarded { reason })
}

/// Stored items must carry every required field, an email the admission
/// gate would accept and distinct ids.
fn check_items(items: &[Item]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let missing = [
            ("id", &item.id),
            ("title", &item.title),
            ("description", &item.description),
            ("location", &item.location),
            ("contactEmail", &item.contact_email),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());
        if let Some((field, _)) = missing {
            return Err(format!("item '{}' has an empty {field}", item.id));
        }
        if !is_valid_email(&item.contact_email) {
            return Err(format!("item '{}' has an invalid contactEmail", item.id));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(format!("duplicate item id '{}'", item.id));
        }
    }
    Ok(())
}
