use super::*;
use chrono::TimeZone;

fn sample_item() -> Item {
    Item {
        id: "1712345678901".to_string(),
        kind: ItemKind::Found,
        title: "Blue Backpack".to_string(),
        category: Category::Bags,
        description: "Left under a bench".to_string(),
        location: "Library, 2nd floor".to_string(),
        contact_email: "finder@campus.edu".to_string(),
        contact_phone: None,
        image: None,
        date_posted: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
    }
}

#[test]
fn test_item_kind_serialization() {
    assert_eq!(serde_json::to_string(&ItemKind::Lost).unwrap(), "\"lost\"");
    assert_eq!(serde_json::to_string(&ItemKind::Found).unwrap(), "\"found\"");
}

#[test]
fn test_item_kind_from_str() {
    assert_eq!("lost".parse::<ItemKind>().unwrap(), ItemKind::Lost);
    assert_eq!(" FOUND ".parse::<ItemKind>().unwrap(), ItemKind::Found);
    let err = "misplaced".parse::<ItemKind>().unwrap_err();
    assert!(err.to_string().contains("misplaced"));
}

#[test]
fn test_item_kind_default_is_lost() {
    assert_eq!(ItemKind::default(), ItemKind::Lost);
}

#[test]
fn test_category_serializes_as_display_name() {
    assert_eq!(
        serde_json::to_string(&Category::SportsEquipment).unwrap(),
        "\"Sports Equipment\""
    );
    assert_eq!(serde_json::to_string(&Category::Keys).unwrap(), "\"Keys\"");
    let parsed: Category = serde_json::from_str("\"Sports Equipment\"").unwrap();
    assert_eq!(parsed, Category::SportsEquipment);
}

#[test]
fn test_category_from_str_variants() {
    assert_eq!("Electronics".parse::<Category>().unwrap(), Category::Electronics);
    assert_eq!("jewelry".parse::<Category>().unwrap(), Category::Jewelry);
    assert_eq!(
        "sports-equipment".parse::<Category>().unwrap(),
        Category::SportsEquipment
    );
    assert_eq!(
        "sports_equipment".parse::<Category>().unwrap(),
        Category::SportsEquipment
    );
    assert!("Furniture".parse::<Category>().is_err());
}

#[test]
fn test_category_display_matches_serde() {
    for category in Category::ALL {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{category}\""));
    }
}

#[test]
fn test_item_uses_browser_field_names() {
    let json = serde_json::to_value(sample_item()).unwrap();
    let obj = json.as_object().unwrap();
    for key in [
        "id",
        "type",
        "title",
        "category",
        "description",
        "location",
        "contactEmail",
        "datePosted",
    ] {
        assert!(obj.contains_key(key), "missing key {key}");
    }
    assert_eq!(obj["type"], "found");
    assert!(!obj.contains_key("contactPhone"));
    assert!(!obj.contains_key("image"));
}

#[test]
fn test_item_reads_empty_optionals_as_absent() {
    let json = r#"{
        "id": "1712345678901",
        "type": "lost",
        "title": "Red Wallet",
        "category": "Accessories",
        "description": "Leather, has a student ID inside",
        "location": "Cafeteria",
        "contactEmail": "owner@campus.edu",
        "contactPhone": "",
        "image": "",
        "datePosted": "2024-01-15T10:30:00.000Z"
    }"#;
    let item: Item = serde_json::from_str(json).unwrap();
    assert_eq!(item.kind, ItemKind::Lost);
    assert_eq!(item.category, Category::Accessories);
    assert!(item.contact_phone.is_none());
    assert!(item.image.is_none());
    assert_eq!(
        item.date_posted,
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    );
}

#[test]
fn test_item_keeps_present_optionals() {
    let mut item = sample_item();
    item.contact_phone = Some("555-0100".to_string());
    item.image = Some("data:image/png;base64,AAAA".to_string());

    let json = serde_json::to_string(&item).unwrap();
    let parsed: Item = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, item);
}

#[test]
fn test_new_item_into_item_stamps_identity() {
    let new_item = NewItem {
        kind: ItemKind::Lost,
        title: "Keys".to_string(),
        category: Category::Keys,
        description: "Ring with three keys".to_string(),
        location: "Gym".to_string(),
        contact_email: "a@b.co".to_string(),
        contact_phone: None,
        image: None,
    };
    let when = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    let item = new_item.into_item("abc".to_string(), when);
    assert_eq!(item.id, "abc");
    assert_eq!(item.date_posted, when);
    assert_eq!(item.title, "Keys");
}
