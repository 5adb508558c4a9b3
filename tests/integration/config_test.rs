use ppicalc::core::config::{DEFAULT_GROUPING_SEPARATOR, DEFAULT_SHARE_BASE_URL};
use ppicalc::core::Config;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.share_base_url, DEFAULT_SHARE_BASE_URL);
    assert_eq!(config.grouping_separator, DEFAULT_GROUPING_SEPARATOR);
}

#[test]
fn test_config_load_nonexistent_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("missing.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_share_base_url("https://example.com/ppi/").unwrap();
    config.set_grouping_separator(' ').unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.share_base().unwrap().as_str(), "https://example.com/ppi/");
}

#[test]
fn test_config_corrupted_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_missing_fields_use_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, r#"{ "grouping_separator": "." }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.grouping_separator, '.');
    assert_eq!(config.share_base_url, DEFAULT_SHARE_BASE_URL);
}

#[test]
fn test_config_rejects_invalid_values() {
    let mut config = Config::default();
    assert!(config.set_share_base_url("not a url").is_err());
    assert!(config.set_grouping_separator('5').is_err());
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_stored_base_url_falls_back() {
    let config = Config {
        share_base_url: "::::".to_string(),
        ..Default::default()
    };
    assert_eq!(config.share_base().unwrap().as_str(), DEFAULT_SHARE_BASE_URL);
}
