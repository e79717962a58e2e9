use chrono::{TimeZone, Utc};
use lotmap::core::{IndirectCostItem, ProjectParameters};
use lotmap::errors::Error;
use lotmap::store::{JsonFileStore, ProjectRecord, ProjectStore, SavePolicy};
use tempfile::TempDir;

fn sample_parameters() -> ProjectParameters {
    ProjectParameters {
        land_area: 1000.0,
        utilization_index: 2.0,
        private_to_built_ratio: 0.70,
        direct_cost_per_sqm: 2000.0,
        avg_sale_price_per_sqm: 6000.0,
        price_variation_pct: 0.0,
    }
}

fn sample_record(name: &str) -> ProjectRecord {
    ProjectRecord::new(
        name,
        sample_parameters(),
        vec![
            IndirectCostItem::percentage("Brokerage", 3.61),
            IndirectCostItem::flat("Property tax", 12_500.0),
        ],
    )
}

#[test]
fn open_creates_store_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("projects");

    assert!(!root.exists());
    let store = JsonFileStore::open(&root).unwrap();
    assert!(root.exists());
    assert_eq!(store.root(), root);
}

#[test]
fn save_then_load_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp_dir.path()).unwrap();

    let record = sample_record("Tower A");
    store.save(&record, SavePolicy::RejectDuplicate).unwrap();

    let loaded = store.load("Tower A").unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn duplicate_save_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp_dir.path()).unwrap();

    let record = sample_record("Tower A");
    store.save(&record, SavePolicy::RejectDuplicate).unwrap();

    let err = store
        .save(&record, SavePolicy::RejectDuplicate)
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateName { name } if name == "Tower A"));
}

#[test]
fn overwrite_replaces_the_record() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp_dir.path()).unwrap();

    store
        .save(&sample_record("Tower A"), SavePolicy::RejectDuplicate)
        .unwrap();

    let mut updated = sample_record("Tower A");
    updated.parameters.land_area = 1500.0;
    store.save(&updated, SavePolicy::Overwrite).unwrap();

    let loaded = store.load("Tower A").unwrap();
    assert_eq!(loaded.parameters.land_area, 1500.0);
}

#[test]
fn load_missing_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp_dir.path()).unwrap();

    let err = store.load("does not exist").unwrap_err();
    assert!(matches!(err, Error::NotFound { name } if name == "does not exist"));
}

#[test]
fn list_is_sorted_by_creation_time() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp_dir.path()).unwrap();

    let mut older = sample_record("Newer in name order");
    older.created_at = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
    let mut newer = sample_record("A project");
    newer.created_at = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();

    store.save(&newer, SavePolicy::RejectDuplicate).unwrap();
    store.save(&older, SavePolicy::RejectDuplicate).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Newer in name order");
    assert_eq!(listed[0].created_at, older.created_at);
    assert_eq!(listed[1].name, "A project");
}

#[test]
fn list_skips_foreign_files() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp_dir.path()).unwrap();

    store
        .save(&sample_record("Tower A"), SavePolicy::RejectDuplicate)
        .unwrap();
    std::fs::write(temp_dir.path().join("notes.json"), "not a record").unwrap();
    std::fs::write(temp_dir.path().join("README.txt"), "hello").unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Tower A");
}

#[test]
fn names_with_odd_characters_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp_dir.path()).unwrap();

    let name = "Résidence Ñ phase 2 (east wing)";
    store
        .save(&sample_record(name), SavePolicy::RejectDuplicate)
        .unwrap();

    let loaded = store.load(name).unwrap();
    assert_eq!(loaded.name, name);

    // Lookalike names map to distinct records.
    let lookalike = "Résidence Ñ phase 2 (east wing)!";
    assert!(matches!(
        store.load(lookalike).unwrap_err(),
        Error::NotFound { .. }
    ));
}
