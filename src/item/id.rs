//! Posting identifiers.
//!
//! Ids are opaque strings. New ones are random UUIDs so they stay unique
//! without consulting the existing list; ids loaded from older data (for
//! example millisecond timestamps) are kept verbatim.

/// Generate a fresh posting id.
#[must_use]
pub fn new_item_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
