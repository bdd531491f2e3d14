// ==========================================
// 航班备降决策支持系统 - 航班状态领域模型
// ==========================================
// 依据: Diversion_DSS_Master_Spec.md - PART C 数据体系
// 依据: Engine_Specs_v0.2_Diversion.md - 2. Flight State
// ==========================================
// 红线: 数值字段永不为负,写入时钳位到 0
// 红线: 状态仅通过场景应用变更,业务判定一律返回布尔,不抛错
// ==========================================

use crate::domain::aircraft::{profile_for, AircraftPerformanceProfile};
use crate::domain::types::FlightStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

// ===== 判定阈值 =====
// 依据: Engine_Specs_v0.2_Diversion.md - 2.3 判定口径
const CREW_DUTY_LIMITED_MIN: i64 = 120; // 值勤受限阈值 (分钟)
const CREW_MIN_MARGIN_MIN: i64 = 30; // 接受备降的最小值勤余量 (分钟)
const FUEL_MIN_LANDING_RESERVE_KG: f64 = 3_000.0; // 落地最低存油 (kg)
const DIVERSION_FUEL_CONTINGENCY: f64 = 1.10; // 备降油量余度系数

// ==========================================
// FlightState - 航班运行状态
// ==========================================
// 用途: 单航班运行事实层,场景引擎唯一写入方
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightState {
    // ===== 航班标识 =====
    pub flight_number: String, // 航班号
    pub origin: String,        // 始发站 (ICAO)
    pub destination: String,   // 目的站 (ICAO)
    pub aircraft_type: String, // 机型代码

    // ===== 运行数值 (钳位字段,永不为负) =====
    pub crew_on_duty_min: i64, // 机组剩余值勤时间 (分钟)
    pub fuel_on_board_kg: f64, // 机上存油 (kg)

    // ===== 时刻 =====
    pub etd: DateTime<Utc>, // 预计离港时刻
    pub eta: DateTime<Utc>, // 预计到港时刻

    // ===== 状态 =====
    pub status: FlightStatus, // 航班状态
}

impl FlightState {
    /// 构造航班状态
    ///
    /// 数值字段在构造时同样执行钳位
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_number: &str,
        origin: &str,
        destination: &str,
        aircraft_type: &str,
        crew_on_duty_min: i64,
        fuel_on_board_kg: f64,
        etd: DateTime<Utc>,
        eta: DateTime<Utc>,
    ) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            aircraft_type: aircraft_type.to_string(),
            crew_on_duty_min: crew_on_duty_min.max(0),
            fuel_on_board_kg: fuel_on_board_kg.max(0.0),
            etd,
            eta,
            status: FlightStatus::Scheduled,
        }
    }

    // ==========================================
    // 写入操作 (钳位)
    // ==========================================

    /// 更新预计到港时刻
    pub fn update_eta(&mut self, eta: DateTime<Utc>) {
        self.eta = eta;
    }

    /// 更新航班状态
    pub fn update_status(&mut self, status: FlightStatus) {
        self.status = status;
    }

    /// 更新机组剩余值勤时间 (负值钳位到 0)
    pub fn update_crew_on_duty(&mut self, minutes: i64) {
        if minutes < 0 {
            warn!(
                flight = %self.flight_number,
                requested = minutes,
                "机组值勤时间写入为负,已钳位到 0"
            );
        }
        self.crew_on_duty_min = minutes.max(0);
    }

    /// 更新机上存油 (负值钳位到 0)
    pub fn update_fuel_on_board(&mut self, kg: f64) {
        if kg < 0.0 {
            warn!(
                flight = %self.flight_number,
                requested = kg,
                "机上存油写入为负,已钳位到 0"
            );
        }
        self.fuel_on_board_kg = kg.max(0.0);
    }

    // ==========================================
    // 布尔判定 (无异常,只读)
    // ==========================================

    /// 是否处于终态 (Arrived/Cancelled)
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// 油量是否告警
    ///
    /// 阈值按机型档案查询,未知机型按兜底档案 (15,000 kg)
    pub fn is_fuel_critical(&self) -> bool {
        self.fuel_on_board_kg < self.performance_profile().fuel_critical_threshold_kg
    }

    /// 机组值勤是否受限 (剩余 ≤120 分钟)
    pub fn is_crew_duty_limited(&self) -> bool {
        self.crew_on_duty_min <= CREW_DUTY_LIMITED_MIN
    }

    /// 计算备降所需油量
    ///
    /// 口径: 机型分钟油耗 × 飞行时间 × 1.10 余度,四舍五入到整 kg
    ///
    /// # 参数
    /// - `flight_time_min`: 备降航段预计飞行时间 (分钟)
    pub fn calculate_diversion_fuel(&self, flight_time_min: i64) -> f64 {
        let profile = self.performance_profile();
        (profile.burn_kg_per_min * flight_time_min as f64 * DIVERSION_FUEL_CONTINGENCY).round()
    }

    /// 油量是否足以完成备降
    ///
    /// 口径: 存油 − 备降所需油量 ≥ 3,000 kg (落地最低存油)
    pub fn can_complete_diversion(&self, flight_time_min: i64) -> bool {
        self.fuel_on_board_kg - self.calculate_diversion_fuel(flight_time_min)
            >= FUEL_MIN_LANDING_RESERVE_KG
    }

    /// 机组值勤是否允许接受备降
    ///
    /// 口径: 剩余值勤 − 场景占用 > 30 分钟
    pub fn can_accept_diversion(&self, crew_time_used_min: i64) -> bool {
        self.crew_on_duty_min - crew_time_used_min > CREW_MIN_MARGIN_MIN
    }

    /// 查询机型性能档案
    pub fn performance_profile(&self) -> AircraftPerformanceProfile {
        profile_for(&self.aircraft_type)
    }
}
