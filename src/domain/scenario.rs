// ==========================================
// 航班备降决策支持系统 - 备降场景领域模型
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 3. Scenario Engine
// ==========================================
// 红线: DiversionScenario 一经产出不可变更
// 红线: DiversionResult 归调用方所有,核心层不留存
// ==========================================

use crate::domain::types::{
    FacilitiesRating, FlightStatus, RiskGrade, UrgencyTier, WeatherSuitability,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DiversionScenario - 备降候选场景
// ==========================================
// 用途: 场景生成器产出,或调用方直接给定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiversionScenario {
    // ===== 备降场 =====
    pub airport: String,      // 备降场 (ICAO)
    pub airport_name: String, // 备降场名称

    // ===== 航段参数 =====
    pub distance_km: f64,               // 备降航段距离 (km)
    pub estimated_flight_time_min: i64, // 预计飞行时间 (分钟)
    pub extra_fuel_burn_kg: f64,        // 额外耗油 (kg)
    pub crew_time_used_min: i64,        // 机组值勤占用 (分钟)

    // ===== 场景属性 =====
    pub reason: String,                        // 备降原因
    pub urgency: UrgencyTier,                  // 紧急程度
    pub weather_suitability: WeatherSuitability, // 备降场天气适航性
    pub facilities_rating: FacilitiesRating,   // 备降场保障能力
}

// ==========================================
// AdditionalCosts - 备降附加成本
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdditionalCosts {
    pub fuel: f64,      // 燃油成本
    pub handling: f64,  // 地面保障费
    pub passenger: f64, // 旅客安置成本
    pub crew: f64,      // 机组成本
    pub total: f64,     // 合计
}

// ==========================================
// OperationalImpact - 运行影响摘要
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationalImpact {
    pub downstream_flights: i32,  // 受波及后续航班数
    pub slot_loss: bool,          // 是否损失时刻
    pub recovery_time_min: f64,   // 预计恢复时间 (分钟)
}

// ==========================================
// RiskAssessment - 四轴风险评估
// ==========================================
// 合并规则: overall = 三轴取最差
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub fuel: RiskGrade,        // 油量轴
    pub crew: RiskGrade,        // 机组轴
    pub operational: RiskGrade, // 运行轴
    pub overall: RiskGrade,     // 综合等级
    pub reason: String,         // 评估原因 (可解释性)
}

// ==========================================
// DiversionResult - 备降推演结果
// ==========================================
// 用途: simulate_diversion 的聚合输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiversionResult {
    // ===== 时刻变化 =====
    pub original_eta: DateTime<Utc>, // 原预计到港
    pub new_eta: DateTime<Utc>,      // 备降后预计到港
    pub total_delay_min: i64,        // 总延误 (分钟, ≥0)

    // ===== 落位 =====
    pub diversion_airport: String, // 备降场 (ICAO)
    pub diversion_reason: String,  // 备降原因

    // ===== 场景后数值 =====
    pub fuel_remaining_kg: f64,      // 场景后存油
    pub crew_time_remaining_min: i64, // 场景后值勤余量
    pub status: FlightStatus,        // 场景后航班状态

    // ===== 成本与影响 =====
    pub additional_costs: AdditionalCosts,   // 附加成本
    pub operational_impact: OperationalImpact, // 运行影响
    pub risk_assessment: RiskAssessment,     // 四轴风险
}

// ==========================================
// FeasibilityReport - 可行性校验结果
// ==========================================
// 红线: 硬性项才翻转 feasible,提示项仅入 limitations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeasibilityReport {
    pub feasible: bool,           // 是否可行
    pub limitations: Vec<String>, // 受限项清单 (含提示项)
}
