// ==========================================
// 航班备降决策支持系统 - 配置层
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 10. 配置项全集
// ==========================================

pub mod config_manager;

pub use config_manager::{ConfigError, ConfigManager, DssConfig};
