// ==========================================
// 备降决策全流程 E2E 测试
// ==========================================
// 测试目标: 候选生成 → 可行性校验 → 场景推演 →
//           三类计算器 → 报告聚合 的端到端一致性
// ==========================================

use chrono::{TimeZone, Utc};
use flight_diversion_dss::{
    logging, CachedFeedProvider, CostEngine, CrewLegalityEngine, FlightState, FlightStatus,
    FuelAnalyticsEngine, IncidentCategory, PassengerRegion, ReportEngine, RiskGrade,
    ScenarioEngine, StaticFeedProvider, WeatherSuitability,
};

#[test]
fn test_full_medical_diversion_flow() {
    logging::init_test();

    let scenario_engine = ScenarioEngine::new();
    let cost_engine = CostEngine::new();
    let crew_engine = CrewLegalityEngine::new();
    let fuel_engine = FuelAnalyticsEngine::new();
    let report_engine = ReportEngine::new();

    // 巡航中的航班: 值勤/油量均有余量
    let etd = Utc.with_ymd_and_hms(2026, 3, 12, 8, 40, 0).unwrap();
    let eta = Utc.with_ymd_and_hms(2026, 3, 12, 12, 10, 0).unwrap();
    let mut flight = FlightState::new("MU5137", "ZBAA", "ZSSS", "B738", 320, 16_500.0, etd, eta);
    flight.update_status(FlightStatus::EnRoute);
    let crew_before = flight.crew_on_duty_min;
    let fuel_before = flight.fuel_on_board_kg;

    // 1. 候选生成: 全部通过航班可行性过滤
    let now = Utc.with_ymd_and_hms(2026, 3, 12, 10, 20, 0).unwrap();
    let scenarios = scenario_engine.generate_diversion_scenarios(&flight, IncidentCategory::Medical);
    assert!(!scenarios.is_empty());
    for scenario in &scenarios {
        assert!(flight.can_complete_diversion(scenario.estimated_flight_time_min));
        assert!(flight.can_accept_diversion(scenario.crew_time_used_min));
    }

    // 2. 可行性校验: 候选集内不得出现硬性受限项
    let scenario = &scenarios[0];
    let feasibility = scenario_engine.validate_diversion_feasibility(&flight, scenario);
    assert!(feasibility.feasible);
    assert!(!feasibility.limitations.iter().any(|l| l.starts_with("FUEL_SHORT")));
    assert!(!feasibility
        .limitations
        .iter()
        .any(|l| l.starts_with("CREW_DUTY_EXCEEDED")));

    // 3. 场景推演: 状态改写与数值守恒
    let result = scenario_engine.simulate_diversion(&mut flight, scenario, now);
    assert_eq!(flight.status, FlightStatus::Diverted);
    assert_eq!(flight.eta, result.new_eta);
    assert_eq!(result.fuel_remaining_kg, fuel_before - scenario.extra_fuel_burn_kg);
    assert_eq!(
        result.crew_time_remaining_min,
        crew_before - scenario.crew_time_used_min
    );
    assert!(result.total_delay_min >= 0);
    assert_eq!(
        result.additional_costs.total,
        result.additional_costs.fuel
            + result.additional_costs.handling
            + result.additional_costs.passenger
            + result.additional_costs.crew
    );
    // 综合风险 = 三轴最差
    let expected_overall = RiskGrade::worst_of(&[
        result.risk_assessment.fuel,
        result.risk_assessment.crew,
        result.risk_assessment.operational,
    ]);
    assert_eq!(result.risk_assessment.overall, expected_overall);

    // 4. 三类计算器
    let delay_hours = result.total_delay_min as f64 / 60.0;
    let cost = cost_engine.estimate_diversion_cost(158, PassengerRegion::Domestic, false, delay_hours);
    let customer =
        cost_engine.customer_disruption_score(result.total_delay_min, true, false);
    let legality = crew_engine.check_legality_status(crew_before, scenario.crew_time_used_min);
    let fuel = fuel_engine.evaluate_fuel_decision(
        flight.calculate_diversion_fuel(scenario.estimated_flight_time_min),
        scenario.extra_fuel_burn_kg,
    );
    assert!(legality.legal);
    assert!(cost.total > 0.0);
    assert!(fuel.efficiency_pct <= 100.0);

    // 5. 报告聚合: 口径一致性
    let report = report_engine.build_incident_report(
        &flight, scenario, &result, &cost, &customer, &legality, &fuel, now,
    );
    assert_eq!(report.total_disruption_cost, result.additional_costs.total + cost.total);
    assert_eq!(report.overall_risk, result.risk_assessment.overall);
    assert_eq!(report.crew_risk, result.risk_assessment.crew);

    let aggregate = report_engine.build_json_aggregate(
        &report, &flight, &result, &cost, &customer, &legality, &fuel,
    );
    assert_eq!(aggregate["report"]["flight_number"], "MU5137");
    assert_eq!(
        aggregate["diversion_result"]["diversion_airport"],
        scenario.airport
    );
}

#[test]
fn test_crew_limited_flight_yields_reduced_candidate_set() {
    let scenario_engine = ScenarioEngine::new();

    // 值勤受限航班: 候选集收缩且剩余候选全部可行
    let etd = Utc.with_ymd_and_hms(2026, 3, 12, 8, 0, 0).unwrap();
    let eta = Utc.with_ymd_and_hms(2026, 3, 12, 12, 0, 0).unwrap();
    let mut flight = FlightState::new("CZ6902", "ZBAA", "ZSOF", "A320", 110, 14_000.0, etd, eta);
    flight.update_status(FlightStatus::EnRoute);

    assert!(flight.is_crew_duty_limited());
    let scenarios = scenario_engine.generate_diversion_scenarios(&flight, IncidentCategory::Medical);
    // 医疗类仅值勤占用 50 分钟的候选可行 (110−50 > 30)
    assert_eq!(scenarios.len(), 1);
    assert_eq!(scenarios[0].airport, "ZBTJ");
}

#[test]
fn test_feeds_inform_scenario_weather_lookup() {
    // 数据源与场景推演协同: 备降场气象可查且带来源标记
    let now = Utc.with_ymd_and_hms(2026, 3, 12, 10, 0, 0).unwrap();
    let feeds = CachedFeedProvider::new(StaticFeedProvider::with_defaults(now));
    let scenario_engine = ScenarioEngine::new();

    let etd = Utc.with_ymd_and_hms(2026, 3, 12, 8, 0, 0).unwrap();
    let eta = Utc.with_ymd_and_hms(2026, 3, 12, 12, 0, 0).unwrap();
    let mut flight = FlightState::new("MU5137", "ZBAA", "ZSSS", "B738", 320, 16_500.0, etd, eta);
    flight.update_status(FlightStatus::EnRoute);

    for scenario in scenario_engine.generate_diversion_scenarios(&flight, IncidentCategory::Weather) {
        let weather = feeds.get_weather_at(&scenario.airport, now).unwrap();
        assert_eq!(weather.icao, scenario.airport);
        // 恶劣天气备降场的推演结果运行轴至少与好天气持平
        let mut probe = flight.clone();
        let result = scenario_engine.simulate_diversion(&mut probe, &scenario, now);
        if scenario.weather_suitability == WeatherSuitability::Poor {
            assert!(result.risk_assessment.operational >= RiskGrade::Medium);
        }
    }
}
