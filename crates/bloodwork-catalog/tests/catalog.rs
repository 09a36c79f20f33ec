use bloodwork_catalog::{Catalog, CatalogError};
use bloodwork_model::{Parameter, RangeSex, ReferenceRange};

fn simple_parameter(name: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        category: "Test".to_string(),
        unit: "mmol/L".to_string(),
        ranges: vec![ReferenceRange::new(1.0, 2.0, "mmol/L", RangeSex::Both)],
        aliases: vec![],
    }
}

#[test]
fn builtin_catalog_is_valid_and_nonempty() {
    let catalog = Catalog::builtin();
    assert!(catalog.len() > 20);
    // Re-validating the raw data exercises the same path external
    // catalogs go through.
    Catalog::new(bloodwork_catalog::builtin::parameters()).expect("builtin data validates");
}

#[test]
fn builtin_aliases_resolve_to_their_owner() {
    let catalog = Catalog::builtin();
    let reference = Catalog::builtin();
    for parameter in reference.iter() {
        for alias in &parameter.aliases {
            let found = catalog
                .get(alias)
                .unwrap_or_else(|| panic!("alias {alias} not found"));
            assert_eq!(found.name, parameter.name, "alias {alias}");
        }
    }
}

#[test]
fn lookup_is_case_insensitive_for_names_and_aliases() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.get("haemoglobin").unwrap().name, "Haemoglobin");
    assert_eq!(catalog.get("  WCC ").unwrap().name, "White Cell Count");
    assert_eq!(catalog.get("crp").unwrap().name, "C-Reactive Protein");
    assert!(catalog.get("Not A Parameter").is_none());
    assert!(catalog.get("").is_none());
}

#[test]
fn index_of_reflects_declaration_order() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.index_of("Haemoglobin"), Some(0));
    let sodium = catalog.index_of("Sodium").unwrap();
    let potassium = catalog.index_of("Potassium").unwrap();
    assert_eq!(potassium, sodium + 1);
    // Alias lookup lands on the same index as name lookup.
    assert_eq!(catalog.index_of("Na"), Some(sodium));
}

#[test]
fn duplicate_names_are_rejected_case_insensitively() {
    let parameters = vec![simple_parameter("Sodium"), simple_parameter("SODIUM")];
    match Catalog::new(parameters) {
        Err(CatalogError::DuplicateName { name }) => assert_eq!(name, "SODIUM"),
        other => panic!("expected DuplicateName, got {other:?}"),
    }
}

#[test]
fn inverted_range_is_rejected() {
    let mut parameter = simple_parameter("Sodium");
    parameter.ranges = vec![ReferenceRange::new(5.0, 1.0, "mmol/L", RangeSex::Both)];
    match Catalog::new(vec![parameter]) {
        Err(CatalogError::InvalidRange { parameter, .. }) => assert_eq!(parameter, "Sodium"),
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn two_ranges_with_same_sex_tag_are_rejected() {
    let mut parameter = simple_parameter("Ferritin");
    parameter.ranges = vec![
        ReferenceRange::new(30.0, 400.0, "ug/L", RangeSex::Male),
        ReferenceRange::new(20.0, 300.0, "ug/L", RangeSex::Male),
    ];
    match Catalog::new(vec![parameter]) {
        Err(CatalogError::DuplicateSexRange { sex, .. }) => assert_eq!(sex, RangeSex::Male),
        other => panic!("expected DuplicateSexRange, got {other:?}"),
    }
}

#[test]
fn json_catalog_loads_and_validates() {
    let json = r#"[
        {
            "name": "Haemoglobin",
            "category": "Full Blood Count",
            "unit": "g/L",
            "ranges": [
                {"min": 130.0, "max": 170.0, "unit": "g/L", "sex": "male"},
                {"min": 115.0, "max": 155.0, "unit": "g/L", "sex": "female"}
            ],
            "aliases": ["Hb"]
        }
    ]"#;
    let catalog = Catalog::from_json_str(json).expect("valid catalog");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("hb").unwrap().ranges.len(), 2);
}

#[test]
fn legacy_single_range_document_is_lifted_into_both_tagged_sequence() {
    let json = r#"[
        {
            "name": "Sodium",
            "category": "Urea & Electrolytes",
            "unit": "mmol/L",
            "range": {"min": 133.0, "max": 146.0}
        }
    ]"#;
    let catalog = Catalog::from_json_str(json).expect("valid catalog");
    let sodium = catalog.get("Sodium").unwrap();
    assert_eq!(sodium.ranges.len(), 1);
    assert_eq!(sodium.ranges[0].sex, RangeSex::Both);
    assert_eq!(sodium.ranges[0].unit, "mmol/L");
    assert_eq!(sodium.ranges[0].min, 133.0);
}

#[test]
fn builtin_catalog_round_trips_through_json() {
    let builtin = Catalog::builtin();
    let json = serde_json::to_string(builtin.parameters()).expect("serialize builtin");
    let loaded = Catalog::from_json_str(&json).expect("reload builtin");
    assert_eq!(loaded.parameters(), builtin.parameters());
}

#[test]
fn malformed_json_is_a_typed_error() {
    match Catalog::from_json_str("not json") {
        Err(CatalogError::Json(_)) => {}
        other => panic!("expected Json error, got {other:?}"),
    }
}
