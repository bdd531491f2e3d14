// ==========================================
// 航班备降决策支持系统 - 成本模型引擎
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 5. Cost Model
// ==========================================
// 职责: 处置成本估算 / 旅客影响评分 / 运行影响成本 /
//       恢复方案成本收益分析 / 保险责任估算
// 红线: 无状态引擎,所有方法都是纯函数
// ==========================================

use crate::domain::cost::{
    CostBenefitEntry, CostBreakdown, CostEstimate, CustomerImpactScore, ImpactFactors,
    InsuranceLiability, OperationalImpactEstimate, RecoveryOption,
};
use crate::domain::types::{ImpactCategory, IncidentCategory, IncidentSeverity, PassengerRegion};
use tracing::{debug, instrument};

// ===== 机组成本口径 =====
const DEFAULT_CREW_COMPLEMENT: u32 = 12; // 机组人数 (含乘务)
const CREW_OVERTIME_RATE_PER_HOUR: f64 = 50.0; // 加班费率 ($/人/小时)
const CREW_OVERTIME_FREE_HOURS: f64 = 2.0; // 免计加班时长
const CREW_POSITIONING_COST: f64 = 8_000.0; // 延误 >12h 的调机成本
const CREW_POSITIONING_DELAY_HOURS: f64 = 12.0;

// ===== 燃油/管理费口径 =====
const APU_BASE_BURN_KG: f64 = 1_500.0; // 地面停留基础耗油
const APU_BURN_PER_HOUR_KG: f64 = 200.0; // 地面停留每小时耗油
const GROUND_FUEL_PRICE_PER_KG: f64 = 0.85;
const OVERHEAD_RATIO: f64 = 0.20; // 运行管理费比例
const HANDLING_PER_PASSENGER: f64 = 15.0;

// ===== 运行影响口径 =====
const AVG_FLIGHT_REVENUE: f64 = 180_000.0; // 平均航班收入
const DOWNSTREAM_REVENUE_RATIO: f64 = 0.15; // 后续航班收入影响比例
const SLOT_LOSS_PENALTY: f64 = 25_000.0; // 时刻损失罚金 (固定)
const UTILIZATION_LOSS_PER_HOUR: f64 = 8_500.0; // 利用率损失 ($/小时)

// ===== 成本收益口径 =====
const TIME_COST_PER_MINUTE: f64 = 50.0;

// ===== 保险口径 =====
const DEDUCTIBLE_RATIO: f64 = 0.075; // 免赔比例
const PAYOUT_RATIO: f64 = 0.70; // 赔付比例

// ==========================================
// RegionRates - 区域单价表
// ==========================================
struct RegionRates {
    hotel: f64,         // 住宿 ($/人/晚)
    meal: f64,          // 餐食 ($/人/餐段)
    rebooking: f64,     // 改签 ($/人)
    handling_base: f64, // 地面保障费基数
}

fn region_rates(region: PassengerRegion) -> RegionRates {
    match region {
        PassengerRegion::Domestic => RegionRates {
            hotel: 150.0,
            meal: 25.0,
            rebooking: 200.0,
            handling_base: 2_000.0,
        },
        PassengerRegion::European => RegionRates {
            hotel: 200.0,
            meal: 35.0,
            rebooking: 350.0,
            handling_base: 3_500.0,
        },
        PassengerRegion::LongHaul => RegionRates {
            hotel: 250.0,
            meal: 45.0,
            rebooking: 600.0,
            handling_base: 5_000.0,
        },
    }
}

// ==========================================
// CostEngine - 成本模型引擎
// ==========================================
pub struct CostEngine {
    crew_complement: u32,
}

impl CostEngine {
    /// 创建新的成本引擎 (默认机组 12 人)
    pub fn new() -> Self {
        Self {
            crew_complement: DEFAULT_CREW_COMPLEMENT,
        }
    }

    /// 指定机组人数创建 (配置层注入)
    pub fn with_crew_complement(crew_complement: u32) -> Self {
        Self { crew_complement }
    }

    // ==========================================
    // 处置成本估算 (依据 Engine_Specs 5.1)
    // ==========================================

    /// 估算备降处置成本
    ///
    /// 口径:
    /// - 住宿 = 过夜时 人数×住宿单价,否则 0
    /// - 餐食 = 人数×餐段单价×ceil(延误小时/4)
    /// - 改签 = 人数×改签单价
    /// - 管理费 = 20% × (住宿+餐食+改签)
    /// - 机组 = 超 2h 加班 $50/人/时 × 机组人数 + 过夜住宿 + 延误>12h 调机 $8,000
    /// - 燃油 = (1500 + 200×延误小时) × $0.85/kg
    /// - 保障费 = 区域基数 + $15×人数
    ///
    /// # 参数
    /// - `passengers`: 旅客人数
    /// - `region`: 航线区域 (选择单价表)
    /// - `overnight`: 是否过夜
    /// - `delay_hours`: 延误小时数
    #[instrument(skip(self))]
    pub fn estimate_diversion_cost(
        &self,
        passengers: u32,
        region: PassengerRegion,
        overnight: bool,
        delay_hours: f64,
    ) -> CostEstimate {
        let rates = region_rates(region);
        let pax = passengers as f64;

        // 1. 旅客安置三项
        let hotel = if overnight { pax * rates.hotel } else { 0.0 };
        let meal_periods = (delay_hours / 4.0).ceil().max(0.0);
        let meals = pax * rates.meal * meal_periods;
        let rebooking = pax * rates.rebooking;

        // 2. 管理费
        let operational_overhead = OVERHEAD_RATIO * (hotel + meals + rebooking);

        // 3. 机组成本
        let overtime_hours = (delay_hours - CREW_OVERTIME_FREE_HOURS).max(0.0);
        let mut crew_costs =
            overtime_hours * CREW_OVERTIME_RATE_PER_HOUR * self.crew_complement as f64;
        if overnight {
            crew_costs += self.crew_complement as f64 * rates.hotel;
        }
        if delay_hours > CREW_POSITIONING_DELAY_HOURS {
            crew_costs += CREW_POSITIONING_COST;
        }

        // 4. 地面燃油
        let fuel_costs =
            (APU_BASE_BURN_KG + APU_BURN_PER_HOUR_KG * delay_hours) * GROUND_FUEL_PRICE_PER_KG;

        // 5. 地面保障费
        let handling_fees = rates.handling_base + HANDLING_PER_PASSENGER * pax;

        let total =
            hotel + meals + rebooking + operational_overhead + crew_costs + fuel_costs + handling_fees;
        let per_passenger = if passengers > 0 { total / pax } else { 0.0 };

        debug!(total, per_passenger, "处置成本估算完成");

        CostEstimate {
            hotel,
            meals,
            rebooking,
            total,
            breakdown: CostBreakdown {
                per_passenger,
                operational_overhead,
                crew_costs,
                fuel_costs,
                handling_fees,
            },
        }
    }

    // ==========================================
    // 旅客影响评分 (依据 Engine_Specs 5.2)
    // ==========================================

    /// 计算旅客影响评分
    ///
    /// 口径:
    /// - score = 0.5×延误分钟 + 20(改线) + 30(误接),封顶 100
    /// - 分类: severe≥80, high≥60, moderate≥30, 其余 low
    /// - 补偿: 延误 ≤180 → 0; ≤240 → 400; 其余 600 (每旅客)
    pub fn customer_disruption_score(
        &self,
        delay_minutes: i64,
        reroute_required: bool,
        missed_connection: bool,
    ) -> CustomerImpactScore {
        let mut score = 0.5 * delay_minutes as f64;
        if reroute_required {
            score += 20.0;
        }
        if missed_connection {
            score += 30.0;
        }
        let score = score.min(100.0);

        let category = if score >= 80.0 {
            ImpactCategory::Severe
        } else if score >= 60.0 {
            ImpactCategory::High
        } else if score >= 30.0 {
            ImpactCategory::Moderate
        } else {
            ImpactCategory::Low
        };

        let estimated_compensation = if delay_minutes <= 180 {
            0.0
        } else if delay_minutes <= 240 {
            400.0
        } else {
            600.0
        };

        CustomerImpactScore {
            score,
            factors: ImpactFactors {
                delay_minutes,
                reroute_required,
                missed_connection,
                compensation_required: estimated_compensation > 0.0,
            },
            category,
            estimated_compensation,
        }
    }

    // ==========================================
    // 运行影响成本 (依据 Engine_Specs 5.3)
    // ==========================================

    /// 计算运行影响成本
    ///
    /// 口径:
    /// - 后续航班收入影响 = 波及数 × (平均收入 $180,000 × 15%)
    /// - 时刻损失罚金 = 固定 $25,000 (触发时)
    /// - 利用率损失 = 小时数 × $8,500
    /// - 合计 = 处置成本 + 上述三项
    pub fn calculate_operational_impact(
        &self,
        cost: &CostEstimate,
        downstream_flights: i32,
        slot_loss: bool,
        utilization_loss_hours: f64,
    ) -> OperationalImpactEstimate {
        let downstream_revenue_impact =
            downstream_flights.max(0) as f64 * AVG_FLIGHT_REVENUE * DOWNSTREAM_REVENUE_RATIO;
        let slot_loss_penalty = if slot_loss { SLOT_LOSS_PENALTY } else { 0.0 };
        let utilization_loss = utilization_loss_hours.max(0.0) * UTILIZATION_LOSS_PER_HOUR;

        OperationalImpactEstimate {
            base_cost: cost.total,
            downstream_revenue_impact,
            slot_loss_penalty,
            utilization_loss,
            total: cost.total + downstream_revenue_impact + slot_loss_penalty + utilization_loss,
        }
    }

    // ==========================================
    // 成本收益分析 (依据 Engine_Specs 5.4)
    // ==========================================

    /// 生成恢复方案成本收益分析
    ///
    /// 口径:
    /// - 期望成本 = 方案成本 × 成功概率
    /// - 风险调整后成本 = 期望成本 × (1 + (100 − 风险降低)/100)
    /// - 时间成本 = 实施分钟数 × $50
    /// - 排名: (风险调整后成本 + 时间成本) 升序,名次从 1 起
    pub fn generate_cost_benefit_analysis(
        &self,
        options: &[RecoveryOption],
    ) -> Vec<CostBenefitEntry> {
        let mut entries: Vec<CostBenefitEntry> = options
            .iter()
            .map(|option| {
                let expected_value = option.cost * option.success_probability;
                let risk_adjusted_cost =
                    expected_value * (1.0 + (100.0 - option.risk_reduction_pct) / 100.0);
                let time_cost = option.minutes_to_implement as f64 * TIME_COST_PER_MINUTE;
                CostBenefitEntry {
                    option_name: option.name.clone(),
                    expected_value,
                    risk_adjusted_cost,
                    time_cost,
                    total_score: risk_adjusted_cost + time_cost,
                    rank: 0,
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            a.total_score
                .partial_cmp(&b.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (idx, entry) in entries.iter_mut().enumerate() {
            entry.rank = idx + 1;
        }

        entries
    }

    // ==========================================
    // 保险责任估算 (依据 Engine_Specs 5.5)
    // ==========================================

    /// 估算保险责任
    ///
    /// 口径:
    /// - 责任保额 = 基准额(类别×严重度) × 旅客数
    /// - 免赔额 = 保额 × 7.5%
    /// - 预计索赔人数 = 旅客数 × 索赔率 (minor 10% / major 30% / serious 60%)
    /// - 预计赔付 = 索赔人数 × 基准额 × 70%
    pub fn calculate_insurance_liability(
        &self,
        scenario_type: IncidentCategory,
        severity: IncidentSeverity,
        passengers: u32,
    ) -> InsuranceLiability {
        let base_amount = Self::liability_base_amount(scenario_type, severity);
        let pax = passengers as f64;

        let liability_coverage = base_amount * pax;
        let deductible = liability_coverage * DEDUCTIBLE_RATIO;
        let claim_rate = match severity {
            IncidentSeverity::Minor => 0.10,
            IncidentSeverity::Major => 0.30,
            IncidentSeverity::Serious => 0.60,
        };
        let potential_claims = pax * claim_rate;
        let estimated_payout = potential_claims * base_amount * PAYOUT_RATIO;

        InsuranceLiability {
            scenario_type,
            severity,
            liability_coverage,
            deductible,
            potential_claims,
            estimated_payout,
        }
    }

    /// 责任基准额矩阵 (类别 × 严重度, $/旅客)
    fn liability_base_amount(scenario_type: IncidentCategory, severity: IncidentSeverity) -> f64 {
        match (scenario_type, severity) {
            (IncidentCategory::Medical, IncidentSeverity::Minor) => 5_000.0,
            (IncidentCategory::Medical, IncidentSeverity::Major) => 15_000.0,
            (IncidentCategory::Medical, IncidentSeverity::Serious) => 50_000.0,
            (IncidentCategory::Technical, IncidentSeverity::Minor) => 3_000.0,
            (IncidentCategory::Technical, IncidentSeverity::Major) => 10_000.0,
            (IncidentCategory::Technical, IncidentSeverity::Serious) => 35_000.0,
            (IncidentCategory::Weather, IncidentSeverity::Minor) => 2_000.0,
            (IncidentCategory::Weather, IncidentSeverity::Major) => 8_000.0,
            (IncidentCategory::Weather, IncidentSeverity::Serious) => 25_000.0,
            (IncidentCategory::Security, IncidentSeverity::Minor) => 8_000.0,
            (IncidentCategory::Security, IncidentSeverity::Major) => 20_000.0,
            (IncidentCategory::Security, IncidentSeverity::Serious) => 75_000.0,
        }
    }
}

impl Default for CostEngine {
    fn default() -> Self {
        Self::new()
    }
}
