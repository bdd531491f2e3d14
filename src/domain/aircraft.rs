// ==========================================
// 航班备降决策支持系统 - 机型性能档案
// ==========================================
// 依据: Diversion_DSS_Master_Spec.md - PART C 数据体系
// 红线: 机型数值表全系统唯一,禁止在各引擎内各自维护副本
// ==========================================
// 用途: FlightState 油耗判定 / FuelAnalytics 航段油量计算
//       统一从本档案读取,避免数值漂移
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// AircraftPerformanceProfile - 机型性能档案
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftPerformanceProfile {
    pub burn_kg_per_min: f64,            // 巡航油耗 (kg/分钟)
    pub burn_kg_per_km: f64,             // 航路油耗 (kg/公里)
    pub fuel_critical_threshold_kg: f64, // 油量告警阈值 (kg)
}

/// 未知机型兜底档案
///
/// 机型代码不在档案表中时使用 (阈值 15,000 kg,保守口径)
pub const DEFAULT_PROFILE: AircraftPerformanceProfile = AircraftPerformanceProfile {
    burn_kg_per_min: 50.0,
    burn_kg_per_km: 4.0,
    fuel_critical_threshold_kg: 15_000.0,
};

/// 按机型代码查询性能档案
///
/// 机型代码兼容 ICAO 代码与厂商型号写法 (如 "B738" / "B737-800")
///
/// # 参数
/// - `aircraft_type`: 机型代码
///
/// # 返回
/// 性能档案;未知机型返回 DEFAULT_PROFILE
pub fn profile_for(aircraft_type: &str) -> AircraftPerformanceProfile {
    match aircraft_type.trim().to_uppercase().as_str() {
        "B738" | "B737-800" => AircraftPerformanceProfile {
            burn_kg_per_min: 42.0,
            burn_kg_per_km: 3.0,
            fuel_critical_threshold_kg: 10_000.0,
        },
        "A320" | "A320-200" => AircraftPerformanceProfile {
            burn_kg_per_min: 40.0,
            burn_kg_per_km: 2.8,
            fuel_critical_threshold_kg: 9_500.0,
        },
        "B77W" | "B777-300ER" => AircraftPerformanceProfile {
            burn_kg_per_min: 110.0,
            burn_kg_per_km: 7.5,
            fuel_critical_threshold_kg: 22_000.0,
        },
        "A359" | "A350-900" => AircraftPerformanceProfile {
            burn_kg_per_min: 95.0,
            burn_kg_per_km: 6.5,
            fuel_critical_threshold_kg: 20_000.0,
        },
        "B789" | "B787-9" => AircraftPerformanceProfile {
            burn_kg_per_min: 85.0,
            burn_kg_per_km: 5.8,
            fuel_critical_threshold_kg: 18_000.0,
        },
        "A333" | "A330-300" => AircraftPerformanceProfile {
            burn_kg_per_min: 90.0,
            burn_kg_per_km: 6.8,
            fuel_critical_threshold_kg: 19_000.0,
        },
        _ => DEFAULT_PROFILE,
    }
}
