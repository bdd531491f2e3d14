// ==========================================
// 航班备降决策支持系统 - 备降场景引擎
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 3. Scenario Engine
// 依据: Engine_Specs_v0.2_Diversion.md - 4. Risk Assessment
// ==========================================
// 职责: 场景推演 + 候选生成 + 可行性校验
// 输入: FlightState + DiversionScenario
// 输出: DiversionResult / FeasibilityReport
// 红线: 所有规则必须输出 reason;不可行候选静默剔除,不报错
// ==========================================

use crate::domain::flight::FlightState;
use crate::domain::scenario::{
    AdditionalCosts, DiversionResult, DiversionScenario, FeasibilityReport, OperationalImpact,
    RiskAssessment,
};
use crate::domain::types::{
    FacilitiesRating, FlightStatus, IncidentCategory, RiskGrade, UrgencyTier, WeatherSuitability,
};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

// ===== 成本口径 =====
const DEFAULT_FUEL_PRICE_PER_KG: f64 = 0.80; // 备降燃油单价 ($/kg)
const HANDLING_FEE_EMERGENCY: f64 = 8_000.0; // 应急保障费
const HANDLING_FEE_URGENT: f64 = 5_000.0; // 紧急保障费
const HANDLING_FEE_BASE: f64 = 3_000.0; // 常规保障费

// ===== 风险阈值 (绝对口径) =====
const FUEL_RISK_CRITICAL_KG: f64 = 8_000.0;
const FUEL_RISK_HIGH_KG: f64 = 12_000.0;
const FUEL_RISK_MEDIUM_KG: f64 = 18_000.0;
const CREW_RISK_CRITICAL_MIN: i64 = 30;
const CREW_RISK_HIGH_MIN: i64 = 60;
const CREW_RISK_MEDIUM_MIN: i64 = 120;

// ===== 可行性提示线 (仅提示,不翻转结论) =====
const POST_DIVERSION_FUEL_FLOOR_KG: f64 = 8_000.0;
const POST_DIVERSION_CREW_FLOOR_MIN: i64 = 60;

// ==========================================
// ScenarioEngine - 备降场景引擎
// ==========================================
// 红线: 无状态引擎,FlightState 由调用方独占传入
pub struct ScenarioEngine {
    fuel_price_per_kg: f64,
}

impl ScenarioEngine {
    /// 创建新的场景引擎 (默认燃油单价 $0.80/kg)
    pub fn new() -> Self {
        Self {
            fuel_price_per_kg: DEFAULT_FUEL_PRICE_PER_KG,
        }
    }

    /// 指定燃油单价创建 (配置层注入)
    pub fn with_fuel_price(fuel_price_per_kg: f64) -> Self {
        Self { fuel_price_per_kg }
    }

    // ==========================================
    // 核心方法: 场景推演
    // ==========================================

    /// 推演备降场景
    ///
    /// 按顺序: 改写 FlightState (ETA/油量/值勤/状态) → 计算延误 →
    /// 成本 → 运行影响 → 四轴风险
    ///
    /// # 参数
    /// - `flight`: 航班状态 (会被改写)
    /// - `scenario`: 备降场景
    /// - `now`: 决策时刻 (显式传入,保证可复现)
    ///
    /// # 返回
    /// DiversionResult 备降推演结果 (归调用方所有)
    #[instrument(skip(self, flight, scenario), fields(flight = %flight.flight_number, airport = %scenario.airport))]
    pub fn simulate_diversion(
        &self,
        flight: &mut FlightState,
        scenario: &DiversionScenario,
        now: DateTime<Utc>,
    ) -> DiversionResult {
        let original_eta = flight.eta;

        // 1. 改写航班状态
        let new_eta = now + Duration::minutes(scenario.estimated_flight_time_min);
        flight.update_eta(new_eta);
        flight.update_fuel_on_board(flight.fuel_on_board_kg - scenario.extra_fuel_burn_kg);
        flight.update_crew_on_duty(flight.crew_on_duty_min - scenario.crew_time_used_min);
        flight.update_status(FlightStatus::Diverted);

        // 2. 总延误 (就近备降可能早于原 ETA,钳位到 0)
        let total_delay_min = (new_eta - original_eta).num_minutes().max(0);

        // 3. 附加成本
        let additional_costs = self.calculate_additional_costs(scenario, total_delay_min);

        // 4. 运行影响
        let operational_impact = self.calculate_operational_impact(scenario, total_delay_min);

        // 5. 四轴风险
        let risk_assessment = self.assess_risk(
            flight.fuel_on_board_kg,
            flight.crew_on_duty_min,
            operational_impact.downstream_flights,
            scenario.weather_suitability,
        );

        debug!(
            delay_min = total_delay_min,
            total_cost = additional_costs.total,
            overall_risk = %risk_assessment.overall,
            "场景推演完成"
        );

        DiversionResult {
            original_eta,
            new_eta,
            total_delay_min,
            diversion_airport: scenario.airport.clone(),
            diversion_reason: scenario.reason.clone(),
            fuel_remaining_kg: flight.fuel_on_board_kg,
            crew_time_remaining_min: flight.crew_on_duty_min,
            status: flight.status,
            additional_costs,
            operational_impact,
            risk_assessment,
        }
    }

    // ==========================================
    // 核心方法: 候选场景生成
    // ==========================================

    /// 按事件类别生成候选备降场景
    ///
    /// 候选集为各类别固定模板,逐一通过 FlightState 可行性过滤:
    /// - can_complete_diversion(预计飞行时间)
    /// - can_accept_diversion(值勤占用)
    ///
    /// 不可行候选静默剔除 (debug 记录),不作为错误上报
    #[instrument(skip(self, flight), fields(flight = %flight.flight_number, category = %category))]
    pub fn generate_diversion_scenarios(
        &self,
        flight: &FlightState,
        category: IncidentCategory,
    ) -> Vec<DiversionScenario> {
        let candidates = Self::candidate_templates(category);
        let mut feasible = Vec::new();

        for scenario in candidates {
            if !flight.can_complete_diversion(scenario.estimated_flight_time_min) {
                debug!(airport = %scenario.airport, "候选剔除: 油量不足");
                continue;
            }
            if !flight.can_accept_diversion(scenario.crew_time_used_min) {
                debug!(airport = %scenario.airport, "候选剔除: 值勤余量不足");
                continue;
            }
            feasible.push(scenario);
        }

        debug!(count = feasible.len(), "候选场景生成完成");
        feasible
    }

    // ==========================================
    // 核心方法: 可行性校验
    // ==========================================

    /// 校验备降场景可行性
    ///
    /// 硬性项 (翻转 feasible):
    /// - FUEL_SHORT: 油量不足以完成备降
    /// - CREW_DUTY_EXCEEDED: 值勤余量不足以接受备降
    ///
    /// 提示项 (仅入 limitations):
    /// - FUEL_FLOOR: 备降后存油 < 8,000 kg
    /// - CREW_FLOOR: 备降后值勤 < 60 分钟
    /// - FLIGHT_TERMINAL: 航班已处终态
    pub fn validate_diversion_feasibility(
        &self,
        flight: &FlightState,
        scenario: &DiversionScenario,
    ) -> FeasibilityReport {
        let mut feasible = true;
        let mut limitations = Vec::new();

        // 硬性项: 油量
        if !flight.can_complete_diversion(scenario.estimated_flight_time_min) {
            feasible = false;
            limitations.push(format!(
                "FUEL_SHORT: 存油 {:.0} kg 不足以覆盖备降需求 {:.0} kg + 落地最低存油 3000 kg",
                flight.fuel_on_board_kg,
                flight.calculate_diversion_fuel(scenario.estimated_flight_time_min)
            ));
        }

        // 硬性项: 值勤
        if !flight.can_accept_diversion(scenario.crew_time_used_min) {
            feasible = false;
            limitations.push(format!(
                "CREW_DUTY_EXCEEDED: 剩余值勤 {} 分钟扣除占用 {} 分钟后不足 30 分钟余量",
                flight.crew_on_duty_min, scenario.crew_time_used_min
            ));
        }

        // 提示项: 备降后存油水位
        let post_fuel = flight.fuel_on_board_kg - scenario.extra_fuel_burn_kg;
        if post_fuel < POST_DIVERSION_FUEL_FLOOR_KG {
            limitations.push(format!(
                "FUEL_FLOOR: 备降后存油预计 {:.0} kg,低于提示线 8000 kg",
                post_fuel.max(0.0)
            ));
        }

        // 提示项: 备降后值勤水位
        let post_crew = flight.crew_on_duty_min - scenario.crew_time_used_min;
        if post_crew < POST_DIVERSION_CREW_FLOOR_MIN {
            limitations.push(format!(
                "CREW_FLOOR: 备降后值勤余量预计 {} 分钟,低于提示线 60 分钟",
                post_crew.max(0)
            ));
        }

        // 提示项: 终态航班
        if flight.is_terminal() {
            limitations.push(format!(
                "FLIGHT_TERMINAL: 航班状态 {} 已冻结,场景仅供复盘推演",
                flight.status
            ));
        }

        FeasibilityReport {
            feasible,
            limitations,
        }
    }

    // ==========================================
    // 成本计算 (依据 Engine_Specs 3.2)
    // ==========================================

    /// 计算备降附加成本
    ///
    /// 口径:
    /// - 燃油 = 额外耗油 × 单价
    /// - 保障费 = emergency 8000 / urgent 5000 / 其他 3000
    /// - 旅客 = 延误 ≤180 → 0; ≤300 → 15000; 其余 25000
    /// - 机组 = 延误 >240 → 4000; >120 → 2000; 其余 500
    fn calculate_additional_costs(
        &self,
        scenario: &DiversionScenario,
        delay_min: i64,
    ) -> AdditionalCosts {
        let fuel = scenario.extra_fuel_burn_kg * self.fuel_price_per_kg;

        let handling = match scenario.urgency {
            UrgencyTier::Emergency => HANDLING_FEE_EMERGENCY,
            UrgencyTier::Urgent => HANDLING_FEE_URGENT,
            _ => HANDLING_FEE_BASE,
        };

        let passenger = if delay_min <= 180 {
            0.0
        } else if delay_min <= 300 {
            15_000.0
        } else {
            25_000.0
        };

        let crew = if delay_min > 240 {
            4_000.0
        } else if delay_min > 120 {
            2_000.0
        } else {
            500.0
        };

        AdditionalCosts {
            fuel,
            handling,
            passenger,
            crew,
            total: fuel + handling + passenger + crew,
        }
    }

    // ==========================================
    // 运行影响 (依据 Engine_Specs 3.3)
    // ==========================================

    /// 计算运行影响摘要
    ///
    /// 口径:
    /// - 波及航班 = 延误 >180 时 ceil(延误/120),否则 0
    /// - 时刻损失 = 延误 >240 或 urgency=emergency
    /// - 恢复时间 = 延误分钟数,emergency 场景 ×1.5
    fn calculate_operational_impact(
        &self,
        scenario: &DiversionScenario,
        delay_min: i64,
    ) -> OperationalImpact {
        let downstream_flights = if delay_min > 180 {
            ((delay_min + 119) / 120) as i32
        } else {
            0
        };

        let slot_loss = delay_min > 240 || scenario.urgency == UrgencyTier::Emergency;

        let recovery_time_min = if scenario.urgency == UrgencyTier::Emergency {
            delay_min as f64 * 1.5
        } else {
            delay_min as f64
        };

        OperationalImpact {
            downstream_flights,
            slot_loss,
            recovery_time_min,
        }
    }

    // ==========================================
    // 风险评估 (依据 Engine_Specs 4)
    // ==========================================

    /// 四轴风险评估
    ///
    /// 规则 (可解释):
    /// - 油量轴 (绝对 kg): critical<8000, high<12000, medium<18000
    /// - 机组轴 (绝对分钟): critical<30, high<60, medium<120
    /// - 运行轴 (波及数): high>3, medium>1; 备降场天气 poor 时整体抬升一级
    /// - overall = 三轴取最差
    fn assess_risk(
        &self,
        fuel_remaining_kg: f64,
        crew_remaining_min: i64,
        downstream_flights: i32,
        weather: WeatherSuitability,
    ) -> RiskAssessment {
        let mut reasons = Vec::new();

        let fuel = if fuel_remaining_kg < FUEL_RISK_CRITICAL_KG {
            reasons.push(format!("FUEL_AXIS: 存油 {:.0} kg < 8000", fuel_remaining_kg));
            RiskGrade::Critical
        } else if fuel_remaining_kg < FUEL_RISK_HIGH_KG {
            reasons.push(format!("FUEL_AXIS: 存油 {:.0} kg < 12000", fuel_remaining_kg));
            RiskGrade::High
        } else if fuel_remaining_kg < FUEL_RISK_MEDIUM_KG {
            reasons.push(format!("FUEL_AXIS: 存油 {:.0} kg < 18000", fuel_remaining_kg));
            RiskGrade::Medium
        } else {
            RiskGrade::Low
        };

        let crew = if crew_remaining_min < CREW_RISK_CRITICAL_MIN {
            reasons.push(format!("CREW_AXIS: 值勤余量 {} 分钟 < 30", crew_remaining_min));
            RiskGrade::Critical
        } else if crew_remaining_min < CREW_RISK_HIGH_MIN {
            reasons.push(format!("CREW_AXIS: 值勤余量 {} 分钟 < 60", crew_remaining_min));
            RiskGrade::High
        } else if crew_remaining_min < CREW_RISK_MEDIUM_MIN {
            reasons.push(format!("CREW_AXIS: 值勤余量 {} 分钟 < 120", crew_remaining_min));
            RiskGrade::Medium
        } else {
            RiskGrade::Low
        };

        let mut operational = if downstream_flights > 3 {
            reasons.push(format!("OPS_AXIS: 波及航班 {} > 3", downstream_flights));
            RiskGrade::High
        } else if downstream_flights > 1 {
            reasons.push(format!("OPS_AXIS: 波及航班 {} > 1", downstream_flights));
            RiskGrade::Medium
        } else {
            RiskGrade::Low
        };

        if weather == WeatherSuitability::Poor {
            operational = operational.escalate();
            reasons.push("OPS_AXIS: 备降场天气 poor,运行轴抬升一级".to_string());
        }

        let overall = RiskGrade::worst_of(&[fuel, crew, operational]);

        RiskAssessment {
            fuel,
            crew,
            operational,
            overall,
            reason: if reasons.is_empty() {
                "RISK_OK: 三轴均正常".to_string()
            } else {
                reasons.join("; ")
            },
        }
    }

    // ==========================================
    // 候选模板 (依据 Ops_Data_Dictionary - 备降场目录)
    // ==========================================

    /// 各事件类别的固定候选模板
    fn candidate_templates(category: IncidentCategory) -> Vec<DiversionScenario> {
        match category {
            IncidentCategory::Medical => vec![
                Self::template(
                    "ZBTJ", "天津滨海", 180.0, 35, 2_500.0, 50,
                    "机上旅客突发疾病,就近落地",
                    UrgencyTier::Emergency, WeatherSuitability::Good, FacilitiesRating::Full,
                ),
                Self::template(
                    "ZSJN", "济南遥墙", 320.0, 55, 3_600.0, 75,
                    "机上旅客突发疾病,落地后转运条件好",
                    UrgencyTier::Emergency, WeatherSuitability::Good, FacilitiesRating::Adequate,
                ),
                Self::template(
                    "ZYTL", "大连周水子", 450.0, 70, 4_600.0, 95,
                    "机上旅客突发疾病,医疗资源完备",
                    UrgencyTier::Urgent, WeatherSuitability::Moderate, FacilitiesRating::Full,
                ),
            ],
            IncidentCategory::Technical => vec![
                Self::template(
                    "ZBSJ", "石家庄正定", 260.0, 45, 3_100.0, 65,
                    "系统故障,就近检查",
                    UrgencyTier::Urgent, WeatherSuitability::Good, FacilitiesRating::Full,
                ),
                Self::template(
                    "ZSQD", "青岛胶东", 540.0, 80, 5_200.0, 105,
                    "系统故障,具备维修能力",
                    UrgencyTier::Urgent, WeatherSuitability::Moderate, FacilitiesRating::Adequate,
                ),
                Self::template(
                    "ZHCC", "郑州新郑", 620.0, 90, 5_900.0, 115,
                    "系统故障,航材与机务保障完整",
                    UrgencyTier::Routine, WeatherSuitability::Good, FacilitiesRating::Full,
                ),
            ],
            IncidentCategory::Weather => vec![
                Self::template(
                    "ZSHC", "杭州萧山", 380.0, 60, 4_000.0, 85,
                    "目的地天气低于标准,改降",
                    UrgencyTier::Urgent, WeatherSuitability::Moderate, FacilitiesRating::Full,
                ),
                Self::template(
                    "ZHHH", "武汉天河", 700.0, 100, 6_500.0, 125,
                    "目的地天气低于标准,远端备降",
                    UrgencyTier::Routine, WeatherSuitability::Good, FacilitiesRating::Adequate,
                ),
                Self::template(
                    "ZSOF", "合肥新桥", 560.0, 85, 5_500.0, 110,
                    "目的地天气低于标准,备选航路",
                    UrgencyTier::Routine, WeatherSuitability::Poor, FacilitiesRating::Limited,
                ),
            ],
            IncidentCategory::Security => vec![
                Self::template(
                    "ZBTJ", "天津滨海", 180.0, 35, 2_500.0, 50,
                    "安保事件,就近落地处置",
                    UrgencyTier::Critical, WeatherSuitability::Good, FacilitiesRating::Full,
                ),
                Self::template(
                    "ZBSJ", "石家庄正定", 260.0, 45, 3_100.0, 65,
                    "安保事件,具备隔离机位",
                    UrgencyTier::Emergency, WeatherSuitability::Good, FacilitiesRating::Adequate,
                ),
            ],
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn template(
        airport: &str,
        airport_name: &str,
        distance_km: f64,
        estimated_flight_time_min: i64,
        extra_fuel_burn_kg: f64,
        crew_time_used_min: i64,
        reason: &str,
        urgency: UrgencyTier,
        weather_suitability: WeatherSuitability,
        facilities_rating: FacilitiesRating,
    ) -> DiversionScenario {
        DiversionScenario {
            airport: airport.to_string(),
            airport_name: airport_name.to_string(),
            distance_km,
            estimated_flight_time_min,
            extra_fuel_burn_kg,
            crew_time_used_min,
            reason: reason.to_string(),
            urgency,
            weather_suitability,
            facilities_rating,
        }
    }
}

impl Default for ScenarioEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_flight(crew_min: i64, fuel_kg: f64) -> FlightState {
        let etd = Utc.with_ymd_and_hms(2026, 3, 12, 8, 0, 0).unwrap();
        let eta = Utc.with_ymd_and_hms(2026, 3, 12, 12, 0, 0).unwrap();
        let mut flight = FlightState::new(
            "MU5137", "ZBAA", "ZSSS", "B738", crew_min, fuel_kg, etd, eta,
        );
        flight.update_status(FlightStatus::EnRoute);
        flight
    }

    fn make_scenario(
        time_min: i64,
        fuel_burn: f64,
        crew_used: i64,
        urgency: UrgencyTier,
        weather: WeatherSuitability,
    ) -> DiversionScenario {
        DiversionScenario {
            airport: "ZBTJ".to_string(),
            airport_name: "天津滨海".to_string(),
            distance_km: 180.0,
            estimated_flight_time_min: time_min,
            extra_fuel_burn_kg: fuel_burn,
            crew_time_used_min: crew_used,
            reason: "测试场景".to_string(),
            urgency,
            weather_suitability: weather,
            facilities_rating: FacilitiesRating::Full,
        }
    }

    #[test]
    fn test_simulate_diversion_mutates_flight() {
        let engine = ScenarioEngine::new();
        let mut flight = make_flight(300, 18_000.0);
        let scenario = make_scenario(45, 2_000.0, 60, UrgencyTier::Urgent, WeatherSuitability::Good);
        let now = Utc.with_ymd_and_hms(2026, 3, 12, 10, 0, 0).unwrap();

        let result = engine.simulate_diversion(&mut flight, &scenario, now);

        assert_eq!(flight.status, FlightStatus::Diverted);
        assert_eq!(flight.eta, result.new_eta);
        assert_eq!(result.new_eta, now + Duration::minutes(45));
        assert_eq!(flight.fuel_on_board_kg, 16_000.0);
        assert_eq!(flight.crew_on_duty_min, 240);
        assert_eq!(result.fuel_remaining_kg, 16_000.0);
        assert_eq!(result.crew_time_remaining_min, 240);
    }

    #[test]
    fn test_simulate_diversion_delay_clamped_to_zero() {
        let engine = ScenarioEngine::new();
        let mut flight = make_flight(300, 18_000.0);
        // 10:00 出发 45 分钟,10:45 落地早于原 ETA 12:00
        let scenario = make_scenario(45, 2_000.0, 60, UrgencyTier::Routine, WeatherSuitability::Good);
        let now = Utc.with_ymd_and_hms(2026, 3, 12, 10, 0, 0).unwrap();

        let result = engine.simulate_diversion(&mut flight, &scenario, now);
        assert_eq!(result.total_delay_min, 0);
        // 延误 0 → 旅客成本 0,机组成本 500
        assert_eq!(result.additional_costs.passenger, 0.0);
        assert_eq!(result.additional_costs.crew, 500.0);
    }

    #[test]
    fn test_additional_costs_bands() {
        let engine = ScenarioEngine::new();
        let scenario = make_scenario(60, 3_000.0, 60, UrgencyTier::Emergency, WeatherSuitability::Good);

        // 延误 250 分钟: 旅客 ≤300 → 15000, 机组 >240 → 4000
        let costs = engine.calculate_additional_costs(&scenario, 250);
        assert_eq!(costs.fuel, 2_400.0); // 3000 × 0.80
        assert_eq!(costs.handling, 8_000.0);
        assert_eq!(costs.passenger, 15_000.0);
        assert_eq!(costs.crew, 4_000.0);
        assert_eq!(costs.total, 29_400.0);

        // 延误 310 分钟: 旅客 > 300 → 25000
        let costs = engine.calculate_additional_costs(&scenario, 310);
        assert_eq!(costs.passenger, 25_000.0);

        // 延误 180 分钟边界: 旅客 0, 机组 >120 → 2000
        let costs = engine.calculate_additional_costs(&scenario, 180);
        assert_eq!(costs.passenger, 0.0);
        assert_eq!(costs.crew, 2_000.0);
    }

    #[test]
    fn test_handling_fee_literal_table() {
        let engine = ScenarioEngine::new();
        // critical 不在表内,落入基础档
        let scenario = make_scenario(60, 1_000.0, 60, UrgencyTier::Critical, WeatherSuitability::Good);
        let costs = engine.calculate_additional_costs(&scenario, 0);
        assert_eq!(costs.handling, 3_000.0);

        let scenario = make_scenario(60, 1_000.0, 60, UrgencyTier::Urgent, WeatherSuitability::Good);
        assert_eq!(engine.calculate_additional_costs(&scenario, 0).handling, 5_000.0);
    }

    #[test]
    fn test_operational_impact_downstream_and_recovery() {
        let engine = ScenarioEngine::new();
        let scenario = make_scenario(60, 1_000.0, 60, UrgencyTier::Emergency, WeatherSuitability::Good);

        // 延误 181 → ceil(181/120)=2; emergency → slot_loss + 恢复 ×1.5
        let impact = engine.calculate_operational_impact(&scenario, 181);
        assert_eq!(impact.downstream_flights, 2);
        assert!(impact.slot_loss);
        assert_eq!(impact.recovery_time_min, 271.5);

        // 延误 180 边界: 不计波及
        let impact = engine.calculate_operational_impact(&scenario, 180);
        assert_eq!(impact.downstream_flights, 0);

        // routine + 延误 241 → slot_loss 仅由延误触发, 恢复不加成
        let scenario = make_scenario(60, 1_000.0, 60, UrgencyTier::Routine, WeatherSuitability::Good);
        let impact = engine.calculate_operational_impact(&scenario, 241);
        assert!(impact.slot_loss);
        assert_eq!(impact.recovery_time_min, 241.0);
    }

    #[test]
    fn test_risk_poor_weather_escalates_operational_axis() {
        let engine = ScenarioEngine::new();
        // 波及 4 班 → high;天气 poor → 抬升到 critical
        let risk = engine.assess_risk(20_000.0, 200, 4, WeatherSuitability::Poor);
        assert_eq!(risk.operational, RiskGrade::Critical);
        assert_eq!(risk.overall, RiskGrade::Critical);
        assert!(risk.reason.contains("poor"));
    }

    #[test]
    fn test_risk_absolute_thresholds() {
        let engine = ScenarioEngine::new();

        let risk = engine.assess_risk(7_999.0, 200, 0, WeatherSuitability::Good);
        assert_eq!(risk.fuel, RiskGrade::Critical);

        let risk = engine.assess_risk(11_999.0, 200, 0, WeatherSuitability::Good);
        assert_eq!(risk.fuel, RiskGrade::High);

        let risk = engine.assess_risk(20_000.0, 29, 0, WeatherSuitability::Good);
        assert_eq!(risk.crew, RiskGrade::Critical);
        assert_eq!(risk.overall, RiskGrade::Critical);

        let risk = engine.assess_risk(20_000.0, 119, 0, WeatherSuitability::Good);
        assert_eq!(risk.crew, RiskGrade::Medium);

        // 全正常
        let risk = engine.assess_risk(20_000.0, 200, 0, WeatherSuitability::Good);
        assert_eq!(risk.overall, RiskGrade::Low);
        assert!(risk.reason.contains("RISK_OK"));
    }

    #[test]
    fn test_generate_scenarios_filters_infeasible() {
        let engine = ScenarioEngine::new();
        // 值勤充足、油量充足 → 医疗类 3 个候选全保留
        let flight = make_flight(400, 30_000.0);
        let scenarios = engine.generate_diversion_scenarios(&flight, IncidentCategory::Medical);
        assert_eq!(scenarios.len(), 3);

        // 值勤 100 分钟: 占用 50 的候选可行 (余 50),占用 75/95 的被剔除
        let flight = make_flight(100, 30_000.0);
        let scenarios = engine.generate_diversion_scenarios(&flight, IncidentCategory::Medical);
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].airport, "ZBTJ");

        // 油量极低: 全部剔除,静默返回空集
        let flight = make_flight(400, 3_000.0);
        let scenarios = engine.generate_diversion_scenarios(&flight, IncidentCategory::Medical);
        assert!(scenarios.is_empty());
    }

    #[test]
    fn test_validate_feasibility_advisory_does_not_flip() {
        let engine = ScenarioEngine::new();
        // 油量可行 (B738 45min → 2079 kg, 余 9921 − 2000 实际扣减口径为提示项)
        let flight = make_flight(200, 12_000.0);
        let scenario = make_scenario(45, 5_000.0, 90, UrgencyTier::Urgent, WeatherSuitability::Good);

        let report = engine.validate_diversion_feasibility(&flight, &scenario);
        // 硬性项均通过
        assert!(report.feasible);
        // 备降后存油 7000 < 8000 → 提示
        assert!(report.limitations.iter().any(|l| l.starts_with("FUEL_FLOOR")));
        // 备降后值勤 110 ≥ 60 → 无机组提示
        assert!(!report.limitations.iter().any(|l| l.starts_with("CREW_FLOOR")));
    }

    #[test]
    fn test_validate_feasibility_hard_limits() {
        let engine = ScenarioEngine::new();
        let flight = make_flight(80, 4_000.0);
        let scenario = make_scenario(60, 3_000.0, 70, UrgencyTier::Urgent, WeatherSuitability::Good);

        let report = engine.validate_diversion_feasibility(&flight, &scenario);
        assert!(!report.feasible);
        assert!(report.limitations.iter().any(|l| l.starts_with("FUEL_SHORT")));
        assert!(report
            .limitations
            .iter()
            .any(|l| l.starts_with("CREW_DUTY_EXCEEDED")));
    }
}
