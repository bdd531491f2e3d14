// ==========================================
// 航班备降决策支持系统 - 燃油领域模型
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 7. Fuel Analytics
// ==========================================

use crate::domain::types::{FuelMonitorStatus, RiskGrade};
use serde::{Deserialize, Serialize};

// ==========================================
// FuelDecisionAnalysis - 加油决策复盘
// ==========================================
// 口径: wasted = max(0, 申请额外 − 实际消耗); efficiency 封顶 100
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelDecisionAnalysis {
    pub requested_extra_kg: f64, // 申请额外油量
    pub actual_burn_kg: f64,     // 实际额外消耗
    pub wasted_fuel_kg: f64,     // 浪费油量
    pub cost: f64,               // 浪费成本
    pub efficiency_pct: f64,     // 利用效率 (0~100)
    pub recommendation: String,  // 分档建议
}

// ==========================================
// ScenarioFuelRequirement - 场景油量需求
// ==========================================
// 组成: 航段油 + 5% 应急油 + 10% 备降油 + 固定等待油 1,800 kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFuelRequirement {
    pub trip_fuel_kg: f64,        // 航段油 (含天气/高度修正)
    pub contingency_kg: f64,      // 应急油 (5%)
    pub alternate_kg: f64,        // 备降油 (10%)
    pub holding_reserve_kg: f64,  // 等待油 (固定 1,800)
    pub total_kg: f64,            // 合计
}

// ==========================================
// FuelLoadingReview - 加油方案评审
// ==========================================
// 风险分档按余量比例: critical<−5%, high<5%, medium<15%, 其余 low
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelLoadingReview {
    pub planned_kg: f64,           // 计划加油量
    pub required_kg: f64,          // 计算需求量
    pub margin_pct: f64,           // 余量比例 (%)
    pub risk_level: RiskGrade,     // 风险等级
    pub exceeds_historical: bool,  // 是否超历史均值 120%
    pub recommendation: String,    // 评审建议
}

// ==========================================
// FuelMonitorReport - 空中油量监控
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelMonitorReport {
    pub projected_remaining_kg: f64,  // 预计落地存油
    pub margin_kg: f64,               // 相对最低需求余量
    pub status: FuelMonitorStatus,    // 监控状态
    pub recommended_action: String,   // 建议动作
}
