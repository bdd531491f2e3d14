// ==========================================
// 航班备降决策支持系统 - 外部数据源契约
// ==========================================
// 依据: Diversion_DSS_Master_Spec.md - PART E 外部协作方
// ==========================================
// 职责: 定义气象/NOTAM/油价查询面 (核心层只依赖本契约)
// 红线: 每个值必须携带 DataOrigin,权威与合成数据不得静默混用
// ==========================================

use crate::domain::types::DataOrigin;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ==========================================
// 气象条件 (Weather Conditions)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherConditions {
    Vmc,  // 目视气象条件
    Mvfr, // 边缘目视条件
    Imc,  // 仪表气象条件
}

impl fmt::Display for WeatherConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherConditions::Vmc => write!(f, "VMC"),
            WeatherConditions::Mvfr => write!(f, "MVFR"),
            WeatherConditions::Imc => write!(f, "IMC"),
        }
    }
}

// ==========================================
// WeatherReport - 台站气象报文
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub icao: String,                 // 台站 (ICAO)
    pub conditions: WeatherConditions, // 气象条件
    pub visibility_km: f64,           // 能见度 (km)
    pub ceiling_ft: i32,              // 云底高 (ft)
    pub wind_deg: i32,                // 风向 (度)
    pub wind_kt: i32,                 // 风速 (节)
    pub phenomena: Vec<String>,       // 天气现象 (TS/FG/BR...)
    pub observed_at: DateTime<Utc>,   // 观测时刻
    pub origin: DataOrigin,           // 数据来源标记
}

// ==========================================
// NOTAM 类型与影响
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotamKind {
    RunwayClosure,        // 跑道关闭
    NavaidOutage,         // 导航设施失效
    FuelLimited,          // 供油受限
    Obstacle,             // 障碍物
    AirspaceRestriction,  // 空域限制
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotamImpact {
    Low,    // 低
    Medium, // 中
    High,   // 高
}

// ==========================================
// Notam - 航行通告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notam {
    pub notam_id: String,           // 通告编号
    pub icao: String,               // 台站 (ICAO)
    pub kind: NotamKind,            // 类型
    pub impact: NotamImpact,        // 影响评级
    pub valid_from: DateTime<Utc>,  // 生效时刻
    pub valid_to: DateTime<Utc>,    // 失效时刻
    pub text: String,               // 通告正文
    pub origin: DataOrigin,         // 数据来源标记
}

// ==========================================
// 供油可用性与油价
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelAvailability {
    Normal,      // 正常
    Limited,     // 受限
    Unavailable, // 不可用
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelPriceQuote {
    pub icao: String,                  // 台站 (ICAO)
    pub price_per_kg: f64,             // 油价 ($/kg)
    pub supplier: String,              // 供油商
    pub availability: FuelAvailability, // 可用性
    pub origin: DataOrigin,            // 数据来源标记
}

// ==========================================
// FeedError - 数据源错误
// ==========================================
// 说明: 仅外部协作方会产生真正的错误;核心层业务结论不走错误通道
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("未知台站: {0}")]
    UnknownStation(String),

    #[error("数据源不可用: {0}")]
    Unavailable(String),

    #[error("缓存锁获取失败: {0}")]
    LockPoisoned(String),
}

// ==========================================
// FeedProvider - 数据源查询契约
// ==========================================
// 用途: 核心层在计算时按需查询;实现方可为实时源或 TTL 缓存
pub trait FeedProvider {
    /// 查询台站气象
    fn get_weather(&self, icao: &str) -> Result<WeatherReport, FeedError>;

    /// 查询台站航行通告
    fn get_notams(&self, icao: &str) -> Result<Vec<Notam>, FeedError>;

    /// 查询台站油价
    fn get_fuel_price(&self, icao: &str) -> Result<FuelPriceQuote, FeedError>;
}
