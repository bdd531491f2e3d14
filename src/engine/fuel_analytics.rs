// ==========================================
// 航班备降决策支持系统 - 燃油分析引擎
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 7. Fuel Analytics
// ==========================================
// 职责: 加油决策复盘 / 场景油量计算 / 加油方案评审 / 空中油量监控
// 红线: 无状态引擎;机型油耗一律走机型性能档案,不自建数值表
// ==========================================

use crate::domain::aircraft::profile_for;
use crate::domain::fuel::{
    FuelDecisionAnalysis, FuelLoadingReview, FuelMonitorReport, ScenarioFuelRequirement,
};
use crate::domain::types::{FuelMonitorStatus, RiskGrade, WeatherSuitability};
use tracing::{debug, instrument};

// ===== 复盘口径 =====
const DEFAULT_WASTE_PRICE_PER_KG: f64 = 0.82; // 浪费油量计价 ($/kg)

// ===== 场景油量口径 =====
const WEATHER_FACTOR_MODERATE: f64 = 1.15;
const WEATHER_FACTOR_POOR: f64 = 1.35;
const ALTITUDE_RESTRICTED_FACTOR: f64 = 1.20;
const CONTINGENCY_RATIO: f64 = 0.05; // 应急油 5%
const ALTERNATE_RATIO: f64 = 0.10; // 备降油 10%
const HOLDING_RESERVE_KG: f64 = 1_800.0; // 固定等待油

// ===== 加油评审口径 (余量比例分档) =====
const LOADING_MARGIN_CRITICAL_PCT: f64 = -5.0;
const LOADING_MARGIN_HIGH_PCT: f64 = 5.0;
const LOADING_MARGIN_MEDIUM_PCT: f64 = 15.0;
const HISTORICAL_EXCESS_RATIO: f64 = 1.20;

// ===== 监控口径 (余量 kg 分档) =====
const MONITOR_CRITICAL_KG: f64 = 1_000.0;
const MONITOR_CAUTION_KG: f64 = 2_000.0;
const MONITOR_WATCH_KG: f64 = 3_000.0;

// ==========================================
// FuelAnalyticsEngine - 燃油分析引擎
// ==========================================
pub struct FuelAnalyticsEngine {
    waste_price_per_kg: f64,
}

impl FuelAnalyticsEngine {
    /// 创建新的燃油分析引擎 (浪费计价默认 $0.82/kg)
    pub fn new() -> Self {
        Self {
            waste_price_per_kg: DEFAULT_WASTE_PRICE_PER_KG,
        }
    }

    /// 指定浪费计价创建 (配置层注入)
    pub fn with_waste_price(waste_price_per_kg: f64) -> Self {
        Self { waste_price_per_kg }
    }

    // ==========================================
    // 加油决策复盘 (依据 Engine_Specs 7.1)
    // ==========================================

    /// 复盘一次额外加油决策
    ///
    /// 口径:
    /// - wasted = max(0, 申请额外 − 实际消耗)
    /// - cost = wasted × 计价
    /// - efficiency = min(100, 实际/申请 × 100);申请为 0 视为 100
    /// - 建议分档: ≥95 / ≥85 / ≥70 / 其余
    pub fn evaluate_fuel_decision(
        &self,
        requested_extra_kg: f64,
        actual_burn_kg: f64,
    ) -> FuelDecisionAnalysis {
        let wasted_fuel_kg = (requested_extra_kg - actual_burn_kg).max(0.0);
        let cost = wasted_fuel_kg * self.waste_price_per_kg;

        let efficiency_pct = if requested_extra_kg > 0.0 {
            (actual_burn_kg / requested_extra_kg * 100.0).min(100.0)
        } else {
            100.0
        };

        let recommendation = if efficiency_pct >= 95.0 {
            "EXCELLENT: 加油决策精准,维持现行申请口径".to_string()
        } else if efficiency_pct >= 85.0 {
            "GOOD: 利用率良好,结合航路天气继续校准".to_string()
        } else if efficiency_pct >= 70.0 {
            "REVIEW: 利用率偏低,复核额外加油申请依据".to_string()
        } else {
            "POOR: 浪费显著,建议签派与机长联合复盘申请口径".to_string()
        };

        FuelDecisionAnalysis {
            requested_extra_kg,
            actual_burn_kg,
            wasted_fuel_kg,
            cost,
            efficiency_pct,
            recommendation,
        }
    }

    // ==========================================
    // 场景油量计算 (依据 Engine_Specs 7.2)
    // ==========================================

    /// 计算备降场景油量需求
    ///
    /// 口径:
    /// - 航段油 = 距离 × 机型公里油耗
    /// - 天气修正: moderate ×1.15, poor ×1.35
    /// - 高度受限 ×1.20
    /// - 应急油 5%,备降油 10%,固定等待油 1,800 kg
    #[instrument(skip(self))]
    pub fn calculate_scenario_fuel(
        &self,
        distance_km: f64,
        aircraft_type: &str,
        weather: WeatherSuitability,
        altitude_restricted: bool,
    ) -> ScenarioFuelRequirement {
        let profile = profile_for(aircraft_type);
        let mut trip_fuel_kg = distance_km * profile.burn_kg_per_km;

        match weather {
            WeatherSuitability::Moderate => trip_fuel_kg *= WEATHER_FACTOR_MODERATE,
            WeatherSuitability::Poor => trip_fuel_kg *= WEATHER_FACTOR_POOR,
            WeatherSuitability::Good => {}
        }
        if altitude_restricted {
            trip_fuel_kg *= ALTITUDE_RESTRICTED_FACTOR;
        }

        let contingency_kg = trip_fuel_kg * CONTINGENCY_RATIO;
        let alternate_kg = trip_fuel_kg * ALTERNATE_RATIO;

        let total_kg = trip_fuel_kg + contingency_kg + alternate_kg + HOLDING_RESERVE_KG;

        debug!(trip_fuel_kg, total_kg, "场景油量计算完成");

        ScenarioFuelRequirement {
            trip_fuel_kg,
            contingency_kg,
            alternate_kg,
            holding_reserve_kg: HOLDING_RESERVE_KG,
            total_kg,
        }
    }

    // ==========================================
    // 加油方案评审 (依据 Engine_Specs 7.3)
    // ==========================================

    /// 评审计划加油量
    ///
    /// 口径:
    /// - 余量比例 = (计划 − 需求)/需求 × 100
    /// - 风险分档: critical<−5%, high<5%, medium<15%, 其余 low
    /// - 计划 > 历史均值 × 120% 时置超额标记
    pub fn optimize_fuel_loading(
        &self,
        planned_kg: f64,
        distance_km: f64,
        aircraft_type: &str,
        weather: WeatherSuitability,
        history_kg: Option<&[f64]>,
    ) -> FuelLoadingReview {
        let required = self.calculate_scenario_fuel(distance_km, aircraft_type, weather, false);
        let margin_pct = if required.total_kg > 0.0 {
            (planned_kg - required.total_kg) / required.total_kg * 100.0
        } else {
            0.0
        };

        let risk_level = if margin_pct < LOADING_MARGIN_CRITICAL_PCT {
            RiskGrade::Critical
        } else if margin_pct < LOADING_MARGIN_HIGH_PCT {
            RiskGrade::High
        } else if margin_pct < LOADING_MARGIN_MEDIUM_PCT {
            RiskGrade::Medium
        } else {
            RiskGrade::Low
        };

        let exceeds_historical = match history_kg {
            Some(history) if !history.is_empty() => {
                let avg = history.iter().sum::<f64>() / history.len() as f64;
                planned_kg > avg * HISTORICAL_EXCESS_RATIO
            }
            _ => false,
        };

        let recommendation = match risk_level {
            RiskGrade::Critical => {
                "LOADING_CRITICAL: 计划油量低于需求 5% 以上,必须增加装载".to_string()
            }
            RiskGrade::High => "LOADING_HIGH: 余量不足 5%,建议按需求量补足".to_string(),
            RiskGrade::Medium => "LOADING_MEDIUM: 余量偏紧,关注航路天气变化".to_string(),
            RiskGrade::Low => {
                if exceeds_historical {
                    "LOADING_EXCESS: 余量充足但超历史均值 120%,复核申请依据".to_string()
                } else {
                    "LOADING_OK: 装载方案合理".to_string()
                }
            }
        };

        FuelLoadingReview {
            planned_kg,
            required_kg: required.total_kg,
            margin_pct,
            risk_level,
            exceeds_historical,
            recommendation,
        }
    }

    // ==========================================
    // 空中油量监控 (依据 Engine_Specs 7.4)
    // ==========================================

    /// 监控空中剩余油量
    ///
    /// 口径:
    /// - 预计落地存油 = 当前存油 − 油耗率 × 剩余时间
    /// - 余量 = 预计存油 − (最低需求 + 备降需求)
    /// - 分档: critical<1000, caution<2000, monitor<3000, 其余 normal
    pub fn monitor_flight_fuel(
        &self,
        current_kg: f64,
        burn_rate_kg_per_min: f64,
        remaining_time_min: i64,
        min_required_kg: f64,
        alternate_required_kg: f64,
    ) -> FuelMonitorReport {
        let projected_remaining_kg = current_kg - burn_rate_kg_per_min * remaining_time_min as f64;
        let margin_kg = projected_remaining_kg - (min_required_kg + alternate_required_kg);

        let (status, recommended_action) = if margin_kg < MONITOR_CRITICAL_KG {
            (
                FuelMonitorStatus::Critical,
                "MONITOR_CRITICAL: 宣布最低油量,立即执行就近备降".to_string(),
            )
        } else if margin_kg < MONITOR_CAUTION_KG {
            (
                FuelMonitorStatus::Caution,
                "MONITOR_CAUTION: 申请优先进近,准备备降预案".to_string(),
            )
        } else if margin_kg < MONITOR_WATCH_KG {
            (
                FuelMonitorStatus::Monitor,
                "MONITOR_WATCH: 加密油量检查频次,复核航路风".to_string(),
            )
        } else {
            (
                FuelMonitorStatus::Normal,
                "MONITOR_NORMAL: 按计划运行".to_string(),
            )
        };

        FuelMonitorReport {
            projected_remaining_kg,
            margin_kg,
            status,
            recommended_action,
        }
    }
}

impl Default for FuelAnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}
