// ==========================================
// 航班备降决策支持系统 - 配置管理器
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 10. 配置项全集
// ==========================================
// 职责: 配置加载、默认值、保存
// 存储: JSON 文件 (平台配置目录,报告本身不持久化)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

// ===== 默认值 =====

fn default_locale() -> String {
    "zh-CN".to_string()
}

fn default_fuel_price() -> f64 {
    0.80
}

fn default_waste_price() -> f64 {
    0.82
}

fn default_crew_complement() -> u32 {
    12
}

fn default_feed_ttl() -> i64 {
    30
}

// ==========================================
// DssConfig - 系统配置
// ==========================================
// 说明: 仅收录确需调整的口径;引擎内固定规则阈值不入配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DssConfig {
    /// 界面/报告语言 ("zh-CN" 或 "en")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// 备降燃油单价 ($/kg)
    #[serde(default = "default_fuel_price")]
    pub fuel_price_per_kg: f64,

    /// 浪费油量计价 ($/kg)
    #[serde(default = "default_waste_price")]
    pub waste_fuel_price_per_kg: f64,

    /// 机组人数 (含乘务)
    #[serde(default = "default_crew_complement")]
    pub crew_complement: u32,

    /// 数据源缓存时效窗口 (分钟)
    #[serde(default = "default_feed_ttl")]
    pub feed_ttl_minutes: i64,
}

impl Default for DssConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            fuel_price_per_kg: default_fuel_price(),
            waste_fuel_price_per_kg: default_waste_price(),
            crew_complement: default_crew_complement(),
            feed_ttl_minutes: default_feed_ttl(),
        }
    }
}

// ==========================================
// ConfigError - 配置层错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 默认配置文件路径 (平台配置目录/flight-diversion-dss/config.json)
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flight-diversion-dss")
            .join("config.json")
    }

    /// 从指定路径加载配置
    ///
    /// 缺失字段按 serde 默认值补齐
    pub fn load(path: &Path) -> Result<DssConfig, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: DssConfig = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), "配置加载完成");
        Ok(config)
    }

    /// 加载配置,文件不存在时返回全默认值
    ///
    /// 解析失败仍作为错误上报 (不静默吞掉坏配置)
    pub fn load_or_default(path: &Path) -> Result<DssConfig, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "配置文件不存在,使用默认配置");
            return Ok(DssConfig::default());
        }
        Self::load(path)
    }

    /// 保存配置到指定路径 (必要时创建父目录)
    pub fn save(path: &Path, config: &DssConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(path, raw)?;
        info!(path = %path.display(), "配置已保存");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = DssConfig::default();
        assert_eq!(config.locale, "zh-CN");
        assert_eq!(config.fuel_price_per_kg, 0.80);
        assert_eq!(config.waste_fuel_price_per_kg, 0.82);
        assert_eq!(config.crew_complement, 12);
        assert_eq!(config.feed_ttl_minutes, 30);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let config = ConfigManager::load_or_default(&path).unwrap();
        assert_eq!(config.crew_complement, 12);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = DssConfig::default();
        config.fuel_price_per_kg = 0.95;
        config.feed_ttl_minutes = 10;
        ConfigManager::save(&path, &config).unwrap();

        let loaded = ConfigManager::load(&path).unwrap();
        assert_eq!(loaded.fuel_price_per_kg, 0.95);
        assert_eq!(loaded.feed_ttl_minutes, 10);
        // 未改动字段保持默认
        assert_eq!(loaded.crew_complement, 12);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "crew_complement": 9 }"#).unwrap();

        let config = ConfigManager::load(&path).unwrap();
        assert_eq!(config.crew_complement, 9);
        assert_eq!(config.locale, "zh-CN");
        assert_eq!(config.waste_fuel_price_per_kg, 0.82);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            ConfigManager::load_or_default(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
