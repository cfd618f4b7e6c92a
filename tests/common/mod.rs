//! Common test utilities

use campus_lostfound::item::{validate_draft, AdmissionRules, Item, ItemDraft, ItemKind, NewItem};
use campus_lostfound::store::{Clock, ItemStore, MemoryBackend, DEFAULT_SLOT_KEY};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::Cell;
use tempfile::TempDir;

/// Create a temporary directory for testing
#[allow(dead_code)] // Test utility for integration tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A draft that passes admission.
#[allow(dead_code)] // Test utility for integration tests
pub fn draft(kind: ItemKind, title: &str) -> ItemDraft {
    ItemDraft {
        kind,
        title: title.to_string(),
        category: "Electronics".to_string(),
        description: format!("{title} left behind after class"),
        location: "Science Hall".to_string(),
        contact_email: "owner@campus.edu".to_string(),
        ..ItemDraft::default()
    }
}

#[allow(dead_code)] // Test utility for integration tests
pub fn candidate(kind: ItemKind, title: &str) -> NewItem {
    validate_draft(&draft(kind, title), &AdmissionRules::default())
        .expect("fixture draft should be valid")
}

#[allow(dead_code)] // Test utility for integration tests
pub fn memory_store() -> ItemStore<MemoryBackend> {
    ItemStore::open(MemoryBackend::new(), DEFAULT_SLOT_KEY)
}

/// Clock that advances one minute per call, so posting order and date
/// order agree.
#[allow(dead_code)] // Test utility for integration tests
pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
}

#[allow(dead_code)] // Test utility for integration tests
impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Cell::new(start),
        }
    }

    pub fn default_start() -> Self {
        Self::starting_at(Utc.with_ymd_and_hms(2024, 9, 2, 8, 0, 0).unwrap())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + Duration::minutes(1));
        now
    }
}

#[allow(dead_code)] // Test utility for integration tests
pub fn titles(items: &[&Item]) -> Vec<String> {
    items.iter().map(|i| i.title.clone()).collect()
}
