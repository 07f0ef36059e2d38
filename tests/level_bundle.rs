//! Level registry smoke tests: the built-in table, manifest output, and
//! bundle validation.

use trailblaze_engine::domain::levels::LevelRegistry;

#[test]
fn builtin_table_matches_the_shipped_levels() {
    let registry = LevelRegistry::builtin();
    assert_eq!(registry.count(), 6);

    let toddler = registry.get(0).unwrap();
    assert_eq!(toddler.name, "Toddler");
    assert_eq!((toddler.cols, toddler.rows), (8, 8));
    assert_eq!(toddler.target_ms, 30_000.0);

    let expert = registry.get(5).unwrap();
    assert_eq!(expert.name, "Expert");
    assert_eq!((expert.cols, expert.rows), (30, 30));
    assert_eq!(expert.target_ms, 180_000.0);

    assert!(registry.get(6).is_none());
    assert_eq!(registry.clamp_index(6), 5);
}

#[test]
fn manifest_json_round_trips_through_the_bundle_parser() {
    let registry = LevelRegistry::builtin();
    let manifest = registry.manifest_json();

    assert!(manifest.contains("\"formatVersion\":1"));
    assert!(manifest.contains("\"Warm-up\""));
    assert!(manifest.contains("\"targetMs\""));

    // The manifest is itself a valid bundle.
    let reparsed = LevelRegistry::from_bundle_json(&manifest).unwrap();
    assert_eq!(reparsed.count(), registry.count());
    assert_eq!(reparsed.get(3).unwrap(), registry.get(3).unwrap());
}

#[test]
fn bundle_parses_camel_case_fields() {
    let json = r#"{
        "formatVersion": 1,
        "levels": [
            { "name": "Garden", "cols": 12, "rows": 10, "targetMs": 42000 }
        ]
    }"#;

    let registry = LevelRegistry::from_bundle_json(json).unwrap();
    assert_eq!(registry.count(), 1);

    let garden = registry.get(0).unwrap();
    assert_eq!(garden.name, "Garden");
    assert_eq!((garden.cols, garden.rows), (12, 10));
    assert_eq!(garden.target_ms, 42_000.0);
}

#[test]
fn bundle_validation_rejects_bad_tables() {
    let wrong_version = r#"{ "formatVersion": 2, "levels": [] }"#;
    let err = LevelRegistry::from_bundle_json(wrong_version).unwrap_err();
    assert!(err.contains("unsupported level bundle format"));

    let empty = r#"{ "formatVersion": 1, "levels": [] }"#;
    let err = LevelRegistry::from_bundle_json(empty).unwrap_err();
    assert!(err.contains("no levels"));

    let tiny = r#"{
        "formatVersion": 1,
        "levels": [ { "name": "Tiny", "cols": 4, "rows": 12, "targetMs": 9000 } ]
    }"#;
    let err = LevelRegistry::from_bundle_json(tiny).unwrap_err();
    assert!(err.contains("too small"));

    let lazy = r#"{
        "formatVersion": 1,
        "levels": [ { "name": "Lazy", "cols": 10, "rows": 10, "targetMs": 0 } ]
    }"#;
    let err = LevelRegistry::from_bundle_json(lazy).unwrap_err();
    assert!(err.contains("non-positive target time"));

    let nameless = r#"{
        "formatVersion": 1,
        "levels": [ { "name": "", "cols": 10, "rows": 10, "targetMs": 9000 } ]
    }"#;
    let err = LevelRegistry::from_bundle_json(nameless).unwrap_err();
    assert!(err.contains("empty name"));

    assert!(LevelRegistry::from_bundle_json("not json").is_err());
}
