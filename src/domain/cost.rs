// ==========================================
// 航班备降决策支持系统 - 成本领域模型
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 5. Cost Model
// ==========================================
// 红线: 所有成本对象按次生成,无共享可变状态
// ==========================================

use crate::domain::types::{ImpactCategory, IncidentCategory, IncidentSeverity};
use serde::{Deserialize, Serialize};

// ==========================================
// CostBreakdown - 成本分解
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub per_passenger: f64,        // 人均成本
    pub operational_overhead: f64, // 运行管理费 (20%)
    pub crew_costs: f64,           // 机组成本
    pub fuel_costs: f64,           // 燃油成本
    pub handling_fees: f64,        // 地面保障费
}

// ==========================================
// CostEstimate - 备降处置成本估算
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    pub hotel: f64,     // 住宿合计
    pub meals: f64,     // 餐食合计
    pub rebooking: f64, // 改签合计
    pub total: f64,     // 总成本
    pub breakdown: CostBreakdown, // 分解口径
}

// ==========================================
// ImpactFactors - 旅客影响因子
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactFactors {
    pub delay_minutes: i64,         // 延误分钟数
    pub reroute_required: bool,     // 是否需要改航/改线
    pub missed_connection: bool,    // 是否错失中转衔接
    pub compensation_required: bool, // 是否触发补偿
}

// ==========================================
// CustomerImpactScore - 旅客影响评分
// ==========================================
// 口径: score = 0.5×延误 + 20(改线) + 30(误接),封顶 100
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerImpactScore {
    pub score: f64,                    // 影响评分 (0~100)
    pub factors: ImpactFactors,        // 影响因子
    pub category: ImpactCategory,      // 影响分类
    pub estimated_compensation: f64,   // 预计补偿 (每旅客)
}

// ==========================================
// OperationalImpactEstimate - 运行影响成本
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationalImpactEstimate {
    pub base_cost: f64,                 // 处置成本基数
    pub downstream_revenue_impact: f64, // 后续航班收入影响
    pub slot_loss_penalty: f64,         // 时刻损失罚金
    pub utilization_loss: f64,          // 飞机利用率损失
    pub total: f64,                     // 合计
}

// ==========================================
// RecoveryOption - 恢复方案候选
// ==========================================
// 用途: 成本收益分析输入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryOption {
    pub name: String,              // 方案名称
    pub cost: f64,                 // 方案成本
    pub success_probability: f64,  // 成功概率 (0~1)
    pub risk_reduction_pct: f64,   // 风险降低 (0~100)
    pub minutes_to_implement: i64, // 实施耗时 (分钟)
}

// ==========================================
// CostBenefitEntry - 成本收益分析条目
// ==========================================
// 排序口径: (risk_adjusted_cost + time_cost) 升序
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBenefitEntry {
    pub option_name: String,      // 方案名称
    pub expected_value: f64,      // 期望成本
    pub risk_adjusted_cost: f64,  // 风险调整后成本
    pub time_cost: f64,           // 时间成本
    pub total_score: f64,         // 排序总分 (越小越优)
    pub rank: usize,              // 名次 (1 起)
}

// ==========================================
// InsuranceLiability - 保险责任估算
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceLiability {
    pub scenario_type: IncidentCategory, // 事件类别
    pub severity: IncidentSeverity,      // 严重度
    pub liability_coverage: f64,         // 责任保额
    pub deductible: f64,                 // 免赔额 (7.5%)
    pub potential_claims: f64,           // 预计索赔人数
    pub estimated_payout: f64,           // 预计赔付
}
