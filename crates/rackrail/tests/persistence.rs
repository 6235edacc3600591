//! JSON fixtures and the persisted debug flag.

use rackrail::debug_mode::{DebugMode, JsonFileStore, KeyValueStore};
use rackrail::{GridConfig, GridError, OffsetPolicy, profile, profile_names};

#[test]
fn test_profiles_round_trip_through_json() {
    for name in profile_names() {
        let config = profile(name).unwrap();
        let json = config.to_json_pretty().unwrap();
        let back = GridConfig::from_json_str(&json).unwrap();
        assert_eq!(*config, back, "{name}");
    }
}

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.json");

    let config = profile("twlayout").unwrap();
    config.save(&path).unwrap();
    let loaded = GridConfig::from_path(&path).unwrap();
    assert_eq!(loaded.viewports[2].offset_policy, OffsetPolicy::Centering);
    assert_eq!(loaded, *config);
}

#[test]
fn test_minimal_json_fills_defaults() {
    let config = GridConfig::from_json_str(
        r#"{
            "viewports": [{
                "name": "sm",
                "viewport_width": 375,
                "min_width": "23.4375rem",
                "container_padding": 24,
                "available_space": 327
            }],
            "rack_columns": { "sm": { "6": "50%" } }
        }"#,
    )
    .unwrap();

    assert_eq!(config.system.namespace, "tw");
    assert_eq!(config.viewports[0].offset_policy, OffsetPolicy::Custom);
    assert_eq!(config.rack_value("sm", 6), Some("50%"));
    assert!(config.offsets.is_empty());
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = GridConfig::from_json_str("{ \"viewports\": 3 }").unwrap_err();
    assert!(matches!(err, GridError::Json(_)));
}

#[test]
fn test_debug_flag_persists_across_stores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let key = profile("rack-rail").unwrap().system.debug_mode_key.clone();

    let mut debug = DebugMode::new(JsonFileStore::open(&path).unwrap(), key.clone());
    assert!(!debug.is_enabled());
    debug.set_enabled(true).unwrap();

    let reopened = DebugMode::new(JsonFileStore::open(&path).unwrap(), key.clone());
    assert!(reopened.is_enabled());
    assert_eq!(reopened.store().get(&key).as_deref(), Some("enabled"));

    let mut store = reopened.into_inner();
    store.set(&key, "disabled").unwrap();
    assert!(!DebugMode::new(JsonFileStore::open(&path).unwrap(), key).is_enabled());
}

#[test]
fn test_file_store_rejects_non_map_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(matches!(err, GridError::Storage(_)));
}
