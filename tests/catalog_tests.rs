//! Catalog integration tests: built-in table annotation, mobile
//! classification and external catalog admission.

use gpu_bench::catalog::{classify_mobile, load_catalog_file, parse_catalog_json, validate_record};
use gpu_bench::{Brand, Catalog, CatalogError, ScoreType, ValidationError};
use serde_json::json;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_builtin_names_unique_and_branded() {
    let catalog = Catalog::builtin();
    let names: HashSet<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names.len(), catalog.len());

    for record in catalog.records() {
        let expected = if ["RTX", "GTX", "GT "].iter().any(|p| record.name.starts_with(p)) {
            Brand::Nvidia
        } else if record.name.starts_with("RX") {
            Brand::Amd
        } else {
            Brand::Intel
        };
        assert_eq!(record.brand, expected, "{}", record.name);
    }
}

#[test]
fn test_builtin_mobile_flags_follow_names() {
    let catalog = Catalog::builtin();
    let mobile: Vec<&str> = catalog
        .records()
        .iter()
        .filter(|r| r.mobile)
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(mobile.len(), 16);
    assert!(mobile.iter().all(|name| name.ends_with('M')));
}

#[test]
fn test_classifier_suffixes() {
    assert!(classify_mobile("RTX 3080 Mobile"));
    assert!(classify_mobile("RTX 2070 Max-Q"));
    assert!(classify_mobile("RX 6800M"));
    assert!(!classify_mobile("RX 6800"));
    assert!(!classify_mobile("Mobile RTX"));
}

#[test]
fn test_validate_record_reasons() {
    let ok = json!({"name": "X", "timeSpy": 1, "timeSpyEx": 1, "portRoyal": 1, "steelNomad": 0});
    assert_eq!(validate_record(&ok), Ok(()));

    let missing = json!({"name": "X", "timeSpy": 1, "timeSpyEx": 1, "portRoyal": 1});
    assert_eq!(
        validate_record(&missing),
        Err(ValidationError::MissingScore("steelNomad".to_string()))
    );

    let negative = json!({"name": "X", "timeSpy": -5, "timeSpyEx": 1, "portRoyal": 1, "steelNomad": 1});
    assert_eq!(
        validate_record(&negative),
        Err(ValidationError::NegativeScore("timeSpy".to_string()))
    );

    let text = json!({"name": "X", "timeSpy": "fast", "timeSpyEx": 1, "portRoyal": 1, "steelNomad": 1});
    assert_eq!(
        validate_record(&text),
        Err(ValidationError::NonNumericScore("timeSpy".to_string()))
    );

    assert_eq!(validate_record(&json!([1, 2])), Err(ValidationError::NotAnObject));
    assert_eq!(
        validate_record(&json!({"timeSpy": 1})),
        Err(ValidationError::MissingName)
    );
}

#[test]
fn test_external_file_merge() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("extra.json");
    fs::write(
        &path,
        r#"{
            "amd": [
                {"name": "RX 7700", "timeSpy": 17000, "timeSpyEx": 8100, "portRoyal": 9300, "steelNomad": 3500},
                {"name": "RX 7600", "timeSpy": 1, "timeSpyEx": 1, "portRoyal": 1, "steelNomad": 1},
                {"name": "", "timeSpy": 1, "timeSpyEx": 1, "portRoyal": 1, "steelNomad": 1}
            ],
            "matrox": []
        }"#,
    )
    .unwrap();

    let external = load_catalog_file(&path).unwrap();
    assert_eq!(external.entries.len(), 2);
    assert_eq!(external.rejected.len(), 2);

    let mut catalog = Catalog::builtin();
    let report = catalog.merge(external);
    assert_eq!(report.added, 1);
    assert_eq!(report.duplicates, vec!["RX 7600".to_string()]);
    assert_eq!(report.rejected, 2);

    let added = catalog.get("RX 7700").unwrap();
    assert_eq!(added.brand, Brand::Amd);
    assert_eq!(added.score(ScoreType::PortRoyal), 9300);
    assert_eq!(catalog.get("RX 7600").unwrap().score(ScoreType::TimeSpy), 10984);
}

#[test]
fn test_external_catalog_errors() {
    assert!(matches!(parse_catalog_json("[]"), Err(CatalogError::InvalidLayout)));
    assert!(matches!(parse_catalog_json("{"), Err(CatalogError::InvalidJson(_))));
    assert!(matches!(
        parse_catalog_json(r#"{"nvidia": {}}"#),
        Err(CatalogError::InvalidBrandSection(_))
    ));

    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(
        load_catalog_file(&temp_dir.path().join("missing.json")),
        Err(CatalogError::FileNotFound(_))
    ));
}
