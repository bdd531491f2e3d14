// ==========================================
// 航班备降决策支持系统 - 机组领域模型
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 6. Crew Legality
// ==========================================
// 红线: 合规性是分级结果值,不是异常;疲劳评估仅输出建议
// ==========================================

use crate::domain::types::{ExtensionClass, FatigueLevel, RiskGrade};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// CrewLegalityCheck - 值勤合规性检查结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewLegalityCheck {
    pub legal: bool,                    // 是否合规 (剩余 ≥ 所需)
    pub time_remaining_min: i64,        // 剩余值勤 (分钟)
    pub required_time_min: i64,         // 场景所需延长 (分钟)
    pub safety_margin_min: i64,         // 安全余量 (分钟,可为负)
    pub extension_class: ExtensionClass, // 延长类别
    pub risk_level: RiskGrade,          // 风险等级
    pub recommendations: Vec<String>,   // 处置建议
}

// ==========================================
// 机组补充定位方式 (Crew Positioning)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewPositioning {
    Local,    // 备降场本场机组
    FromBase, // 基地调机组
}

impl fmt::Display for CrewPositioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrewPositioning::Local => write!(f, "local"),
            CrewPositioning::FromBase => write!(f, "from_base"),
        }
    }
}

// ==========================================
// CrewReplacementPlan - 机组替换方案
// ==========================================
// 口径: 本场 3h/$5,000,基地调派 6h/$15,000
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewReplacementPlan {
    pub required: bool,              // 是否需要替换 (剩余 <120 分钟)
    pub positioning: CrewPositioning, // 定位方式
    pub estimated_hours: f64,        // 到位耗时 (小时)
    pub estimated_cost: f64,         // 预计成本
    pub reason: String,              // 判定原因
}

// ==========================================
// CrewFatigueAssessment - 机组疲劳评估
// ==========================================
// 红线: 仅输出建议,永不阻断
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewFatigueAssessment {
    pub fatigue_level: FatigueLevel,  // 疲劳等级
    pub duty_hours: f64,              // 已执勤小时数
    pub factors: Vec<String>,         // 命中的疲劳因子
    pub recommendations: Vec<String>, // 处置建议
}
