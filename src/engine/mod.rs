// ==========================================
// 航班备降决策支持系统 - 引擎层
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 1.2 模块拆分
// ==========================================
// 职责: 实现备降决策业务规则
// 红线: 引擎无状态,不做 I/O;所有规则必须输出 reason
// ==========================================

pub mod cost;
pub mod crew_legality;
pub mod fuel_analytics;
pub mod report;
pub mod scenario;

// 重导出核心引擎
pub use cost::CostEngine;
pub use crew_legality::CrewLegalityEngine;
pub use fuel_analytics::FuelAnalyticsEngine;
pub use report::ReportEngine;
pub use scenario::ScenarioEngine;
