// ==========================================
// 航班备降决策支持系统 - 演示入口
// ==========================================
// 依据: Diversion_DSS_Master_Spec.md
// 用途: 以一条样例航班串起候选生成 → 推演 → 计算器 → 报告,
//       打印到标准输出;展示层/接口层由外部协作方承担
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::{Duration, Utc};
use flight_diversion_dss::{
    config::ConfigManager, i18n, logging, CostEngine, CrewLegalityEngine, FlightState,
    FuelAnalyticsEngine, IncidentCategory, PassengerRegion, ReportEngine, ScenarioEngine,
    StaticFeedProvider, CachedFeedProvider, FeedProvider, FlightStatus,
};

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("航班备降决策支持系统");
    tracing::info!("系统版本: {}", flight_diversion_dss::VERSION);
    tracing::info!("==================================================");

    // 加载配置 (不存在时使用默认值)
    let config_path = ConfigManager::default_config_path();
    let config = ConfigManager::load_or_default(&config_path)
        .with_context(|| format!("配置加载失败: {}", config_path.display()))?;
    i18n::set_locale(&config.locale);

    // 事件类别取自命令行 (默认 medical)
    let category: IncidentCategory = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "medical".to_string())
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let now = Utc::now();

    // 样例航班: 巡航中,值勤与油量均有余量
    let mut flight = FlightState::new(
        "MU5137",
        "ZBAA",
        "ZSSS",
        "B738",
        320,
        16_500.0,
        now - Duration::minutes(70),
        now + Duration::minutes(95),
    );
    flight.update_status(FlightStatus::EnRoute);

    // 引擎装配 (口径由配置注入)
    let scenario_engine = ScenarioEngine::with_fuel_price(config.fuel_price_per_kg);
    let cost_engine = CostEngine::with_crew_complement(config.crew_complement);
    let crew_engine = CrewLegalityEngine::new();
    let fuel_engine = FuelAnalyticsEngine::with_waste_price(config.waste_fuel_price_per_kg);
    let report_engine = ReportEngine::new();

    // 外部数据源: 合成数据 + 读穿缓存
    let feeds = CachedFeedProvider::with_ttl_minutes(
        StaticFeedProvider::with_defaults(now),
        config.feed_ttl_minutes,
    );

    // 1. 候选生成 (不可行候选已静默剔除)
    let scenarios = scenario_engine.generate_diversion_scenarios(&flight, category);
    if scenarios.is_empty() {
        bail!("事件类别 {} 下无可行备降候选", category);
    }
    tracing::info!("可行候选 {} 个", scenarios.len());

    // 2. 选型: 按可行性校验提示项最少者 (同数取首个)
    let scenario = scenarios
        .iter()
        .min_by_key(|s| {
            scenario_engine
                .validate_diversion_feasibility(&flight, s)
                .limitations
                .len()
        })
        .expect("候选集非空");

    // 备降场气象/NOTAM/油价速览
    if let Ok(weather) = feeds.get_weather(&scenario.airport) {
        tracing::info!(
            "{} 气象: {} 能见度 {:.0} km ({})",
            scenario.airport,
            weather.conditions,
            weather.visibility_km,
            weather.origin
        );
    }
    if let Ok(notams) = feeds.get_notams(&scenario.airport) {
        for notam in notams {
            tracing::warn!("{} NOTAM [{}]: {}", scenario.airport, notam.notam_id, notam.text);
        }
    }

    // 3. 场景推演 (改写航班状态)
    let result = scenario_engine.simulate_diversion(&mut flight, scenario, now);

    // 4. 三类计算器
    let delay_hours = result.total_delay_min as f64 / 60.0;
    let overnight = delay_hours >= 8.0;
    let cost = cost_engine.estimate_diversion_cost(158, PassengerRegion::Domestic, overnight, delay_hours);
    let customer = cost_engine.customer_disruption_score(result.total_delay_min, true, delay_hours > 3.0);
    let legality = crew_engine.check_legality_status(
        result.crew_time_remaining_min + scenario.crew_time_used_min,
        scenario.crew_time_used_min,
    );
    let fuel = fuel_engine.evaluate_fuel_decision(
        flight.calculate_diversion_fuel(scenario.estimated_flight_time_min),
        scenario.extra_fuel_burn_kg,
    );

    // 5. 报告
    let report = report_engine
        .build_incident_report(&flight, scenario, &result, &cost, &customer, &legality, &fuel, now);
    println!("{}", report_engine.render_incident_report(&report, &result, &cost));
    println!("{}", report_engine.render_executive_summary(&report));

    let aggregate = report_engine
        .build_json_aggregate(&report, &flight, &result, &cost, &customer, &legality, &fuel);
    println!("{}", serde_json::to_string_pretty(&aggregate)?);

    Ok(())
}
