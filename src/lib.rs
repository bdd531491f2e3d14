// ==========================================
// 航班备降决策支持系统 - 核心库
// ==========================================
// 依据: Diversion_DSS_Master_Spec.md - 系统宪法
// 技术栈: Rust (纯同步计算核心)
// 系统定位: 决策支持系统 (签派人工最终控制权)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 外部数据源层 - 气象/NOTAM/油价契约
pub mod feeds;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    DataOrigin, ExtensionClass, FacilitiesRating, FatigueLevel, FlightStatus, FuelMonitorStatus,
    ImpactCategory, IncidentCategory, IncidentSeverity, PassengerRegion, RiskGrade, UrgencyTier,
    WeatherSuitability,
};

// 领域实体
pub use domain::{
    AdditionalCosts, AircraftPerformanceProfile, CostBenefitEntry, CostEstimate,
    CrewFatigueAssessment, CrewLegalityCheck, CrewReplacementPlan, CustomerImpactScore,
    DiversionResult, DiversionScenario, FeasibilityReport, FlightState, FuelDecisionAnalysis,
    FuelLoadingReview, FuelMonitorReport, IncidentReport, OperationalImpact, RecoveryOption,
    ScenarioFuelRequirement,
};

// 引擎
pub use engine::{
    CostEngine, CrewLegalityEngine, FuelAnalyticsEngine, ReportEngine, ScenarioEngine,
};

// 外部数据源
pub use feeds::{CachedFeedProvider, FeedError, FeedProvider, StaticFeedProvider};

// 配置
pub use config::{ConfigError, ConfigManager, DssConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "航班备降决策支持系统";
