use super::*;
use crate::item::{validate_draft, AdmissionRules, Category, ItemDraft};
use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;
use std::rc::Rc;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn candidate(kind: ItemKind, title: &str) -> NewItem {
    let draft = ItemDraft {
        kind,
        title: title.to_string(),
        category: "Electronics".to_string(),
        description: "Left in the library".to_string(),
        location: "Main library".to_string(),
        contact_email: "owner@campus.edu".to_string(),
        ..ItemDraft::default()
    };
    validate_draft(&draft, &AdmissionRules::default()).unwrap()
}

fn empty_store() -> ItemStore<MemoryBackend> {
    ItemStore::open(MemoryBackend::new(), DEFAULT_SLOT_KEY)
}

#[test]
fn test_open_missing_slot_is_empty() {
    let store = empty_store();
    assert!(store.is_empty());
    assert_eq!(store.hydration(), &Hydration::Empty);
    assert_eq!(store.revision(), 0);
    assert_eq!(store.key(), "lostFoundItems");
}

#[test]
fn test_add_assigns_id_and_clock_time() {
    let posted = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    let mut store = empty_store().with_clock(FixedClock(posted));

    let item = store.add(candidate(ItemKind::Lost, "Phone")).unwrap();

    assert!(!item.id.is_empty());
    assert_eq!(item.date_posted, posted);
    assert_eq!(item.title, "Phone");
    assert_eq!(item.category, Category::Electronics);
    assert_eq!(store.items(), std::slice::from_ref(&item));
}

#[test]
fn test_add_prepends() {
    let mut store = empty_store();
    let first = store.add(candidate(ItemKind::Lost, "First")).unwrap();
    let second = store.add(candidate(ItemKind::Found, "Second")).unwrap();

    let titles: Vec<&str> = store.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First"]);
    assert_ne!(first.id, second.id);
    assert_eq!(store.revision(), 2);
}

#[test]
fn test_add_writes_whole_list_to_slot() {
    let mut store = empty_store();
    store.add(candidate(ItemKind::Lost, "A")).unwrap();
    store.add(candidate(ItemKind::Lost, "B")).unwrap();

    let raw = store.backend().raw(DEFAULT_SLOT_KEY).unwrap();
    let stored: Vec<Item> = serde_json::from_str(raw).unwrap();
    assert_eq!(stored, store.items());
}

#[test]
fn test_failed_write_rolls_back() {
    let mut store = empty_store();
    store.add(candidate(ItemKind::Lost, "Kept")).unwrap();
    let before_raw = store.backend().raw(DEFAULT_SLOT_KEY).unwrap().to_string();

    let mut backend = store.into_backend();
    backend.set_quota(Some(before_raw.len()));
    let mut store = ItemStore::open(backend, DEFAULT_SLOT_KEY);
    let revision = store.revision();

    let err = store.add(candidate(ItemKind::Lost, "Too big")).unwrap_err();

    assert!(matches!(
        err,
        StoreError::Write {
            source: BackendError::QuotaExceeded { .. },
            ..
        }
    ));
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].title, "Kept");
    assert_eq!(store.revision(), revision);
    assert_eq!(store.backend().raw(DEFAULT_SLOT_KEY), Some(before_raw.as_str()));
}

#[test]
fn test_partition_preserves_order() {
    let mut store = empty_store();
    store.add(candidate(ItemKind::Lost, "L1")).unwrap();
    store.add(candidate(ItemKind::Found, "F1")).unwrap();
    store.add(candidate(ItemKind::Lost, "L2")).unwrap();

    let lost: Vec<&str> = store
        .partition(ItemKind::Lost)
        .iter()
        .map(|i| i.title.as_str())
        .collect();
    let found: Vec<&str> = store
        .partition(ItemKind::Found)
        .iter()
        .map(|i| i.title.as_str())
        .collect();

    assert_eq!(lost, vec!["L2", "L1"]);
    assert_eq!(found, vec!["F1"]);
    assert_eq!(store.count(ItemKind::Lost), 2);
    assert_eq!(store.count(ItemKind::Found), 1);
}

#[test]
fn test_reopen_restores_items() {
    let mut store = empty_store();
    store.add(candidate(ItemKind::Lost, "A")).unwrap();
    store.add(candidate(ItemKind::Found, "B")).unwrap();
    let expected = store.items().to_vec();

    let reopened = ItemStore::open(store.into_backend(), DEFAULT_SLOT_KEY);

    assert_eq!(reopened.items(), expected.as_slice());
    assert_eq!(reopened.hydration(), &Hydration::Loaded { count: 2 });
}

#[test]
fn test_malformed_slot_is_discarded() {
    let backend = MemoryBackend::new().with_entry(DEFAULT_SLOT_KEY, "{not json");
    let store = ItemStore::open(backend, DEFAULT_SLOT_KEY);
    assert!(store.is_empty());
    assert!(store.hydration().is_discarded());
}

#[test]
fn test_wrong_shape_is_discarded() {
    let backend = MemoryBackend::new().with_entry(DEFAULT_SLOT_KEY, r#"{"items": []}"#);
    let store = ItemStore::open(backend, DEFAULT_SLOT_KEY);
    assert!(store.is_empty());
    assert!(store.hydration().is_discarded());
}

#[test]
fn test_duplicate_ids_are_discarded() {
    let record = r#"{"id":"x","type":"lost","title":"T","category":"Keys","description":"D","location":"L","contactEmail":"a@b.co","datePosted":"2024-03-01T00:00:00Z"}"#;
    let raw = format!("[{record},{record}]");
    let backend = MemoryBackend::new().with_entry(DEFAULT_SLOT_KEY, raw);
    let store = ItemStore::open(backend, DEFAULT_SLOT_KEY);
    assert!(store.is_empty());
    match store.hydration() {
        Hydration::Discarded { reason } => assert!(reason.contains("duplicate")),
        other => panic!("expected discard, got {other:?}"),
    }
}

#[test]
fn test_blank_required_field_is_discarded() {
    let raw = r#"[{"id":"x","type":"found","title":"  ","category":"Keys","description":"D","location":"L","contactEmail":"a@b.co","datePosted":"2024-03-01T00:00:00Z"}]"#;
    let backend = MemoryBackend::new().with_entry(DEFAULT_SLOT_KEY, raw);
    let store = ItemStore::open(backend, DEFAULT_SLOT_KEY);
    assert!(store.is_empty());
    assert!(store.hydration().is_discarded());
}

#[test]
fn test_invalid_stored_email_is_discarded() {
    let raw = r#"[{"id":"x","type":"lost","title":"T","category":"Keys","description":"D","location":"L","contactEmail":"not-an-email","datePosted":"2024-03-01T00:00:00Z"}]"#;
    let backend = MemoryBackend::new().with_entry(DEFAULT_SLOT_KEY, raw);
    let store = ItemStore::open(backend, DEFAULT_SLOT_KEY);
    assert!(store.is_empty());
    match store.hydration() {
        Hydration::Discarded { reason } => assert!(reason.contains("contactEmail")),
        other => panic!("expected discard, got {other:?}"),
    }
}

#[test]
fn test_discarded_slot_is_overwritten_by_next_add() {
    let backend = MemoryBackend::new().with_entry(DEFAULT_SLOT_KEY, "garbage");
    let mut store = ItemStore::open(backend, DEFAULT_SLOT_KEY);
    store.add(candidate(ItemKind::Lost, "Fresh")).unwrap();

    let reopened = ItemStore::open(store.into_backend(), DEFAULT_SLOT_KEY);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.items()[0].title, "Fresh");
}

#[test]
fn test_subscribers_see_added_items() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = empty_store();
    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |event| match event {
        StoreEvent::Added(item) => sink.borrow_mut().push(item.title.clone()),
    });

    store.add(candidate(ItemKind::Lost, "One")).unwrap();
    assert!(store.unsubscribe(id));
    store.add(candidate(ItemKind::Lost, "Two")).unwrap();

    assert_eq!(*seen.borrow(), vec!["One".to_string()]);
    assert!(!store.unsubscribe(id));
}

#[test]
fn test_subscribers_not_called_on_failed_write() {
    let calls = Rc::new(RefCell::new(0_u32));
    let mut store = ItemStore::open(MemoryBackend::with_quota(1), DEFAULT_SLOT_KEY);
    let counter = Rc::clone(&calls);
    store.subscribe(move |_| *counter.borrow_mut() += 1);

    assert!(store.add(candidate(ItemKind::Found, "Nope")).is_err());
    assert_eq!(*calls.borrow(), 0);
    assert!(store.is_empty());
}
