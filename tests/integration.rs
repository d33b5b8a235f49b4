//! Integration tests for Kondate
//!
//! End-to-end tests that drive the cookbook the way a request layer would.
//!
mod common;
use common::*;
use kondate::prelude::*;
use std::sync::Arc;
use std::thread;

const CATALOG_JSON: &str = r#"[
    { "type": "ingredient", "name": "egg", "cookTime": 5 },
    { "type": "ingredient", "name": "FLOUR", "cookTime": 2 },
    { "type": "ingredient", "name": "whole-milk", "cookTime": 0 },
    {
        "type": "recipe",
        "name": "batter",
        "requiredItems": [
            { "name": "Egg", "quantity": 2 },
            { "name": "Flour", "quantity": 1 },
            { "name": "Whole Milk", "quantity": 1 }
        ]
    },
    {
        "type": "recipe",
        "name": "Pancake Stack",
        "requiredItems": [
            { "name": "Batter", "quantity": 3 },
            { "name": "Egg", "quantity": 1 }
        ]
    }
]"#;

#[test]
fn test_seed_from_json_and_summarize() {
    let cookbook = Cookbook::new();
    let file = CatalogFile::from_json(CATALOG_JSON).expect("Failed to parse catalog");
    let admitted = cookbook.seed(file).expect("Failed to seed catalog");
    assert_eq!(admitted, 5);

    let summary = cookbook.summarize("pancake_stack").unwrap();
    assert_eq!(summary.name, "Pancake Stack");
    assert_eq!(
        quantities(&summary),
        [("Egg", 7), ("Flour", 3), ("Whole Milk", 3)]
    );
    assert_eq!(summary.cook_time, 5 * 7 + 2 * 3);
}

#[test]
fn test_seed_stops_at_first_rejection() {
    let cookbook = Cookbook::new();
    let file = CatalogFile {
        entries: vec![
            EntryRequest::ingredient("Egg", 5),
            EntryRequest::ingredient("Egg", 6),
            EntryRequest::ingredient("Flour", 2),
        ],
    };
    let result = cookbook.seed(file);
    assert!(matches!(
        result,
        Err(CookbookError::Validation(ValidationError::DuplicateName(_)))
    ));
    assert_eq!(cookbook.store().names(), vec!["Egg"]);
}

#[test]
fn test_entry_request_json_fields() {
    let request: EntryRequest = serde_json::from_str(
        r#"{ "type": "recipe", "name": "Toast", "requiredItems": [{ "name": "Bread", "quantity": 2 }] }"#,
    )
    .unwrap();
    assert_eq!(request, EntryRequest::recipe("Toast", vec![("Bread", 2)]));

    let both: EntryRequest = serde_json::from_str(
        r#"{ "type": "ingredient", "name": "Bread", "cookTime": 3, "requiredItems": [] }"#,
    )
    .unwrap();
    let cookbook = Cookbook::new();
    assert!(cookbook.create_entry(both).is_err());
}

#[test]
fn test_malformed_catalog_json() {
    let err = CatalogFile::from_json("{ not json").unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));

    let err = CatalogFile::from_file("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn test_parse_name() {
    let cookbook = Cookbook::new();
    assert_eq!(cookbook.parse_name("alpHa-alFRedo").unwrap(), "Alpha Alfredo");
    assert_eq!(
        cookbook.parse_name("  ").unwrap_err(),
        CookbookError::InvalidName("  ".to_string())
    );
}

#[test]
fn test_summary_of_invalid_name_rejected() {
    let cookbook = create_pancake_cookbook();
    assert!(matches!(
        cookbook.summarize("123"),
        Err(CookbookError::InvalidName(_))
    ));
}

#[test]
fn test_concurrent_duplicate_inserts_admit_exactly_one() {
    let cookbook = Arc::new(Cookbook::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cookbook = Arc::clone(&cookbook);
            thread::spawn(move || {
                cookbook
                    .create_entry(EntryRequest::ingredient("Saffron", i))
                    .is_ok()
            })
        })
        .collect();

    let admitted = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .filter(|ok| *ok)
        .count();

    assert_eq!(admitted, 1);
    assert_eq!(cookbook.store().len(), 1);
}

#[test]
fn test_concurrent_resolution_and_inserts() {
    let cookbook = Arc::new(create_pancake_cookbook());

    let writer = {
        let cookbook = Arc::clone(&cookbook);
        thread::spawn(move || {
            // Digits are stripped by normalization, so names are spelled out in letters.
            for i in 0..50u8 {
                let name = format!("Spice {}{}", (b'a' + i / 26) as char, (b'a' + i % 26) as char);
                cookbook
                    .create_entry(EntryRequest::ingredient(name, 1))
                    .expect("Failed to admit spice");
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let cookbook = Arc::clone(&cookbook);
            thread::spawn(move || {
                for _ in 0..50 {
                    let summary = cookbook.summarize("Pancake").expect("Failed to resolve");
                    assert_eq!(summary.cook_time, 36);
                }
            })
        })
        .collect();

    writer.join().expect("writer panicked");
    for reader in readers {
        reader.join().expect("reader panicked");
    }
    assert_eq!(cookbook.store().len(), 54);
}
