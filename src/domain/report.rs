// ==========================================
// 航班备降决策支持系统 - 报告领域模型
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 8. Report Generator
// ==========================================
// 用途: 事件报告为只读聚合产物,核心层不留存、不落库
// ==========================================

use crate::domain::types::{ImpactCategory, RiskGrade, UrgencyTier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// IncidentReport - 备降事件报告 (结构化)
// ==========================================
// 用途: 驾驶舱/复盘展示的只读数据源
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentReport {
    pub report_id: String,            // 报告ID (UUID)
    pub generated_at: DateTime<Utc>,  // 生成时刻

    // ===== 航班与事件 =====
    pub flight_number: String,    // 航班号
    pub origin: String,           // 始发站
    pub destination: String,      // 目的站
    pub aircraft_type: String,    // 机型
    pub diversion_airport: String, // 备降场
    pub diversion_reason: String, // 备降原因
    pub urgency: UrgencyTier,     // 紧急程度

    // ===== 关键指标 =====
    pub total_delay_min: i64,         // 总延误 (分钟)
    pub total_disruption_cost: f64,   // 处置总成本
    pub fuel_remaining_kg: f64,       // 备降后存油
    pub crew_time_remaining_min: i64, // 备降后值勤余量
    pub fuel_efficiency_pct: f64,     // 加油决策效率
    pub customer_score: f64,          // 旅客影响评分
    pub customer_category: ImpactCategory, // 旅客影响分类
    pub crew_risk: RiskGrade,         // 机组风险轴
    pub overall_risk: RiskGrade,      // 综合风险等级

    // ===== 复盘产出 =====
    pub lessons_learned: Vec<String>,  // 经验教训
    pub recommendations: Vec<String>,  // 改进建议
}
