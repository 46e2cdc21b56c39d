use std::fs;
use tempfile::TempDir;

use crewdb_core::catalog::Catalog;
use crewdb_core::error::Error;
use crewdb_core::types::WorkerRecord;

fn record(id: u32, name: &str, service: &str, price_per_day: u32) -> WorkerRecord {
    WorkerRecord {
        id,
        name: name.to_string(),
        service: service.to_string(),
        price_per_day,
        image: None,
    }
}

#[test]
fn open_single_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("workers.json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "name": "John Doe", "service": "Electrician", "price_per_day": 1000, "image": "/img/john.jpg"},
            {"id": 2, "name": "Jane Smith", "service": "Plumber", "price_per_day": 1200}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::open(&path).expect("open");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[0].name, "John Doe");
}

#[test]
fn missing_image_field_is_tolerated() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("workers.json");
    fs::write(
        &path,
        r#"[{"id": 9, "name": "Li Wei", "service": "Gardener", "price_per_day": 700}]"#,
    )
    .unwrap();

    let catalog = Catalog::open(&path).expect("open");
    assert!(catalog.records()[0].image.is_none());
}

#[test]
fn open_directory_merges_files_in_sorted_order() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    // Written out of order on purpose; the load sorts by path.
    fs::write(
        dir.join("b.json"),
        r#"[{"id": 3, "name": "Tom Becker", "service": "Mason", "price_per_day": 1300}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("a.json"),
        r#"[
            {"id": 1, "name": "John Doe", "service": "Electrician", "price_per_day": 1000},
            {"id": 2, "name": "Jane Smith", "service": "Plumber", "price_per_day": 1200}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::open(dir).expect("open dir");
    let ids: Vec<u32> = catalog.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn duplicate_ids_are_a_corrupt_source() {
    let err = Catalog::from_records(vec![
        record(1, "John Doe", "Electrician", 1000),
        record(1, "Jane Smith", "Plumber", 1200),
    ])
    .expect_err("duplicate ids must be rejected");
    assert!(matches!(err, Error::DataUnavailable(_)), "got {err}");
}

#[test]
fn missing_source_is_data_unavailable() {
    let tmp = TempDir::new().unwrap();
    let err = Catalog::open(&tmp.path().join("nope.json")).expect_err("missing file");
    assert!(matches!(err, Error::DataUnavailable(_)));
}

#[test]
fn unparsable_source_is_data_unavailable() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("workers.json");
    fs::write(&path, "not json at all").unwrap();
    let err = Catalog::open(&path).expect_err("corrupt file");
    assert!(matches!(err, Error::DataUnavailable(_)));
}

#[test]
fn directory_without_json_files_is_data_unavailable() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("readme.txt"), "nothing here").unwrap();
    let err = Catalog::open(tmp.path()).expect_err("no .json files");
    assert!(matches!(err, Error::DataUnavailable(_)));
}

#[test]
fn from_records_accepts_a_clean_set() {
    let catalog = Catalog::from_records(vec![
        record(1, "John Doe", "Electrician", 1000),
        record(2, "Jane Smith", "Plumber", 1200),
    ])
    .expect("clean set");
    assert!(!catalog.is_empty());
    assert_eq!(catalog.len(), 2);
}
