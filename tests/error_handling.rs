//! Error handling and edge case tests.

use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use zcta::{Criteria, Dataset, SharedZcta, Triple, Zcta, ZctaConfig, ZctaError};

fn config_for(file: &NamedTempFile) -> ZctaConfig {
    ZctaConfig {
        dataset_path: file.path().to_path_buf(),
        ..Default::default()
    }
}

fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// --- Dataset Errors ---

#[test]
fn test_open_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = ZctaConfig {
        dataset_path: dir.path().join("nope.json"),
        ..Default::default()
    };

    assert!(matches!(Zcta::open(&config), Err(ZctaError::Io(_))));
}

#[test]
fn test_open_truncated_json() {
    let file = write_dataset(r#"{"zip_state_county": [["59715", "MT""#);
    assert!(matches!(
        Zcta::open(&config_for(&file)),
        Err(ZctaError::Deserialization(_))
    ));
}

#[test]
fn test_open_wrong_layout() {
    let file = write_dataset(r#"[["59715", "MT", "Park County"]]"#);
    assert!(matches!(
        Zcta::open(&config_for(&file)),
        Err(ZctaError::Deserialization(_))
    ));

    let file = write_dataset(r#"{"rows": []}"#);
    assert!(matches!(
        Zcta::open(&config_for(&file)),
        Err(ZctaError::InvalidFormat(_))
    ));
}

#[test]
fn test_custom_records_key() {
    let file = write_dataset(r#"{"rows": [["59715", "MT", "Park County"]]}"#);
    let config = ZctaConfig {
        records_key: "rows".to_string(),
        ..config_for(&file)
    };

    let zcta = Zcta::open(&config).unwrap();
    assert_eq!(zcta.states(), vec!["MT"]);
}

// --- Malformed Rows ---

#[test]
fn test_malformed_rows_are_kept() {
    let file = write_dataset(
        r#"{"zip_state_county": [
            ["59715", "MT"],
            ["84101", null, "Salt Lake County"],
            ["96701", "HI", "Honolulu County"]
        ]}"#,
    );

    let zcta = Zcta::open(&config_for(&file)).unwrap();
    assert_eq!(zcta.states(), vec!["MT", "", "HI"]);
    assert_eq!(zcta.counties_by_state("MT").unwrap(), vec![""]);

    let owner = zcta.county_by_zip("84101").unwrap();
    assert_eq!(owner.state, "");
    assert_eq!(owner.county, "Salt Lake County");
}

#[test]
fn test_empty_dataset() {
    let file = write_dataset(r#"{"zip_state_county": []}"#);
    let zcta = Zcta::open(&config_for(&file)).unwrap();

    assert!(zcta.states().is_empty());
    assert!(zcta.find(&Criteria::new().state("MT")).is_not_found());
    assert!(zcta.index().is_empty());
}

// --- Unknown Keys ---

#[test]
fn test_counties_of_unknown_state_is_error() {
    let zcta = Zcta::from_triples(vec![Triple::new("59715", "MT", "Park County")]);

    match zcta.counties_by_state("MAMA") {
        Err(ZctaError::UnknownState(state)) => assert_eq!(state, "MAMA"),
        other => panic!("expected UnknownState, got {:?}", other),
    }

    // State codes are case sensitive.
    assert!(zcta.counties_by_state("mt").is_err());
}

#[test]
fn test_find_unknown_keys_degrade_gracefully() {
    let zcta = Zcta::from_triples(vec![Triple::new("59715", "MT", "Park County")]);

    assert!(zcta.find(&Criteria::new().state("MAMA")).is_not_found());
    assert!(zcta.find(&Criteria::new().state("MT").county("fooey")).is_not_found());
    assert!(zcta.find(&Criteria::new().zip("fooey")).is_not_found());
    assert_eq!(
        zcta.find(&Criteria::new().state("MAMA").county("fooey").zip("59715"))
            .as_bool(),
        Some(false)
    );
}

#[test]
fn test_error_messages() {
    let err = ZctaError::UnknownState("MAMA".to_string());
    assert_eq!(err.to_string(), "State not found: MAMA");

    let err = Dataset::from_slice(br#"{"rows": []}"#, "zip_state_county").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid dataset format: missing `zip_state_county` array"
    );
}

// --- Reload ---

#[test]
fn test_reload_swaps_whole_index() {
    let file = write_dataset(r#"{"zip_state_county": [["59715", "MT", "Park County"]]}"#);
    let config = config_for(&file);
    let shared = SharedZcta::open(&config).unwrap();
    let old = shared.snapshot();

    let replacement =
        write_dataset(r#"{"zip_state_county": [["59715", "MT", "Gallatin County"]]}"#);
    shared.reload(&config_for(&replacement)).unwrap();

    assert_eq!(old.county_by_zip(59715).unwrap().county, "Park County");
    assert_eq!(
        shared.snapshot().county_by_zip(59715).unwrap().county,
        "Gallatin County"
    );
}

#[test]
fn test_reload_failure_keeps_serving() {
    let file = write_dataset(r#"{"zip_state_county": [["59715", "MT", "Park County"]]}"#);
    let shared = SharedZcta::open(&config_for(&file)).unwrap();

    let dir = TempDir::new().unwrap();
    let missing = ZctaConfig {
        dataset_path: dir.path().join("gone.json"),
        ..Default::default()
    };

    assert!(matches!(shared.reload(&missing), Err(ZctaError::Io(_))));
    assert_eq!(shared.snapshot().states(), vec!["MT"]);
}
