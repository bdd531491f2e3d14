// ==========================================
// 航班备降决策支持系统 - 领域层
// ==========================================
// 依据: Diversion_DSS_Master_Spec.md - PART C 数据体系
// ==========================================
// 职责: 实体与值对象定义,不含业务规则
// ==========================================

pub mod aircraft;
pub mod cost;
pub mod crew;
pub mod flight;
pub mod fuel;
pub mod report;
pub mod scenario;
pub mod types;

// 重导出常用实体
pub use aircraft::{profile_for, AircraftPerformanceProfile, DEFAULT_PROFILE};
pub use cost::{
    CostBenefitEntry, CostBreakdown, CostEstimate, CustomerImpactScore, ImpactFactors,
    InsuranceLiability, OperationalImpactEstimate, RecoveryOption,
};
pub use crew::{CrewFatigueAssessment, CrewLegalityCheck, CrewPositioning, CrewReplacementPlan};
pub use flight::FlightState;
pub use fuel::{
    FuelDecisionAnalysis, FuelLoadingReview, FuelMonitorReport, ScenarioFuelRequirement,
};
pub use report::IncidentReport;
pub use scenario::{
    AdditionalCosts, DiversionResult, DiversionScenario, FeasibilityReport, OperationalImpact,
    RiskAssessment,
};
