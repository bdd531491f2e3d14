// ==========================================
// 配置层集成测试
// ==========================================
// 测试目标: 验证配置加载/默认值/保存回读
// ==========================================

use flight_diversion_dss::{ConfigError, ConfigManager, DssConfig};
use std::fs;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigManager::load_or_default(&dir.path().join("none.json")).unwrap();

    assert_eq!(config.locale, "zh-CN");
    assert_eq!(config.fuel_price_per_kg, 0.80);
    assert_eq!(config.waste_fuel_price_per_kg, 0.82);
    assert_eq!(config.crew_complement, 12);
    assert_eq!(config.feed_ttl_minutes, 30);
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dss").join("config.json");

    let mut config = DssConfig::default();
    config.locale = "en".to_string();
    config.crew_complement = 10;
    ConfigManager::save(&path, &config).unwrap();

    let loaded = ConfigManager::load_or_default(&path).unwrap();
    assert_eq!(loaded.locale, "en");
    assert_eq!(loaded.crew_complement, 10);
    assert_eq!(loaded.feed_ttl_minutes, 30);
}

#[test]
fn test_partial_config_backfills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "fuel_price_per_kg": 1.05, "locale": "en" }"#).unwrap();

    let config = ConfigManager::load(&path).unwrap();
    assert_eq!(config.fuel_price_per_kg, 1.05);
    assert_eq!(config.locale, "en");
    assert_eq!(config.crew_complement, 12);
}

#[test]
fn test_broken_config_is_reported_not_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "fuel_price_per_kg = 1.05").unwrap();

    assert!(matches!(
        ConfigManager::load_or_default(&path),
        Err(ConfigError::Parse(_))
    ));
}
