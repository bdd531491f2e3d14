// ==========================================
// FuelAnalyticsEngine 引擎集成测试
// ==========================================
// 测试目标: 验证加油复盘/场景油量/加油评审/空中监控
// ==========================================

use flight_diversion_dss::{
    FuelAnalyticsEngine, FuelMonitorStatus, RiskGrade, WeatherSuitability,
};

#[test]
fn test_evaluate_fuel_decision_review_band() {
    let engine = FuelAnalyticsEngine::new();
    let analysis = engine.evaluate_fuel_decision(5_000.0, 4_000.0);

    assert_eq!(analysis.wasted_fuel_kg, 1_000.0);
    assert!((analysis.cost - 820.0).abs() < 1e-9);
    assert_eq!(analysis.efficiency_pct, 80.0);
    // 70~85 档建议
    assert!(analysis.recommendation.starts_with("REVIEW"));
}

#[test]
fn test_evaluate_fuel_decision_custom_price() {
    let engine = FuelAnalyticsEngine::with_waste_price(1.00);
    let analysis = engine.evaluate_fuel_decision(2_000.0, 500.0);

    assert_eq!(analysis.wasted_fuel_kg, 1_500.0);
    assert_eq!(analysis.cost, 1_500.0);
    assert_eq!(analysis.efficiency_pct, 25.0);
    assert!(analysis.recommendation.starts_with("POOR"));
}

#[test]
fn test_scenario_fuel_weather_and_altitude_factors() {
    let engine = FuelAnalyticsEngine::new();

    // 好天气无修正: B789 5.8×800=4640
    let req = engine.calculate_scenario_fuel(800.0, "B789", WeatherSuitability::Good, false);
    assert!((req.trip_fuel_kg - 4_640.0).abs() < 1e-9);
    assert!((req.total_kg - (4_640.0 * 1.15 + 1_800.0)).abs() < 1e-9);

    // 恶劣天气 + 高度受限: ×1.35×1.20
    let req = engine.calculate_scenario_fuel(800.0, "B789", WeatherSuitability::Poor, true);
    assert!((req.trip_fuel_kg - 4_640.0 * 1.35 * 1.20).abs() < 1e-6);

    // 未知机型按兜底公里油耗 4.0
    let req = engine.calculate_scenario_fuel(500.0, "TU154", WeatherSuitability::Good, false);
    assert!((req.trip_fuel_kg - 2_000.0).abs() < 1e-9);
}

#[test]
fn test_optimize_fuel_loading_margin_bands() {
    let engine = FuelAnalyticsEngine::new();
    let required = engine
        .calculate_scenario_fuel(600.0, "A333", WeatherSuitability::Moderate, false)
        .total_kg;

    let review = engine.optimize_fuel_loading(required * 0.93, 600.0, "A333", WeatherSuitability::Moderate, None);
    assert_eq!(review.risk_level, RiskGrade::Critical);

    let review = engine.optimize_fuel_loading(required * 1.04, 600.0, "A333", WeatherSuitability::Moderate, None);
    assert_eq!(review.risk_level, RiskGrade::High);

    let review = engine.optimize_fuel_loading(required * 1.30, 600.0, "A333", WeatherSuitability::Moderate, None);
    assert_eq!(review.risk_level, RiskGrade::Low);
}

#[test]
fn test_optimize_fuel_loading_historical_average_flag() {
    let engine = FuelAnalyticsEngine::new();
    let history = [9_000.0, 10_000.0, 11_000.0]; // 均值 10000

    let review = engine.optimize_fuel_loading(
        12_001.0,
        600.0,
        "A333",
        WeatherSuitability::Moderate,
        Some(&history),
    );
    assert!(review.exceeds_historical);

    let review = engine.optimize_fuel_loading(
        12_000.0,
        600.0,
        "A333",
        WeatherSuitability::Moderate,
        Some(&history),
    );
    assert!(!review.exceeds_historical);
}

#[test]
fn test_monitor_flight_fuel_status_tiers_and_actions() {
    let engine = FuelAnalyticsEngine::new();

    // 余量 = current − burn×time − (min+alt)
    let report = engine.monitor_flight_fuel(10_000.0, 40.0, 60, 4_000.0, 2_000.0);
    // 10000−2400−6000 = 1600 → caution
    assert_eq!(report.status, FuelMonitorStatus::Caution);
    assert!(report.recommended_action.starts_with("MONITOR_CAUTION"));

    let report = engine.monitor_flight_fuel(9_000.0, 40.0, 60, 4_000.0, 2_000.0);
    assert_eq!(report.status, FuelMonitorStatus::Critical);

    let report = engine.monitor_flight_fuel(11_000.0, 40.0, 60, 4_000.0, 2_000.0);
    assert_eq!(report.status, FuelMonitorStatus::Monitor);

    let report = engine.monitor_flight_fuel(13_000.0, 40.0, 60, 4_000.0, 2_000.0);
    assert_eq!(report.status, FuelMonitorStatus::Normal);
    assert!(report.recommended_action.starts_with("MONITOR_NORMAL"));
}
