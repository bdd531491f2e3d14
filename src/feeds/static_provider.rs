// ==========================================
// 航班备降决策支持系统 - 静态合成数据源
// ==========================================
// 依据: Diversion_DSS_Master_Spec.md - PART E 外部协作方
// ==========================================
// 职责: 提供确定性的台站数据,供演示与测试注入
// 红线: 所有值标记 DataOrigin::Synthetic;随机"实时流"生成器不在本层
// ==========================================

use crate::domain::types::DataOrigin;
use crate::feeds::provider::{
    FeedError, FeedProvider, FuelAvailability, FuelPriceQuote, Notam, NotamImpact, NotamKind,
    WeatherConditions, WeatherReport,
};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

// ==========================================
// StationRecord - 台站静态记录
// ==========================================
#[derive(Debug, Clone)]
struct StationRecord {
    weather: WeatherReport,
    notams: Vec<Notam>,
    fuel: FuelPriceQuote,
}

// ==========================================
// StaticFeedProvider - 静态数据源
// ==========================================
pub struct StaticFeedProvider {
    stations: HashMap<String, StationRecord>,
}

impl StaticFeedProvider {
    /// 构建空数据源
    pub fn new() -> Self {
        Self {
            stations: HashMap::new(),
        }
    }

    /// 构建带默认台站表的数据源
    ///
    /// # 参数
    /// - `now`: 观测时刻基准 (显式传入,保证可复现)
    pub fn with_defaults(now: DateTime<Utc>) -> Self {
        let mut provider = Self::new();

        provider.insert_station(
            "ZBTJ", WeatherConditions::Vmc, 10.0, 4_500, 310, 14, vec![],
            vec![], 0.78, "中航油天津", FuelAvailability::Normal, now,
        );
        provider.insert_station(
            "ZSJN", WeatherConditions::Vmc, 8.0, 3_600, 270, 10, vec![],
            vec![], 0.80, "中航油济南", FuelAvailability::Normal, now,
        );
        provider.insert_station(
            "ZYTL", WeatherConditions::Mvfr, 5.0, 1_800, 200, 18, vec!["BR".to_string()],
            vec![], 0.82, "中航油大连", FuelAvailability::Normal, now,
        );
        provider.insert_station(
            "ZBSJ", WeatherConditions::Vmc, 9.0, 4_000, 290, 8, vec![],
            vec![(
                NotamKind::NavaidOutage,
                NotamImpact::Medium,
                "ILS 18R 校验维护,预计今日 22:00 恢复",
            )],
            0.79, "中航油石家庄", FuelAvailability::Normal, now,
        );
        provider.insert_station(
            "ZSQD", WeatherConditions::Mvfr, 6.0, 2_200, 120, 16, vec!["HZ".to_string()],
            vec![], 0.84, "中航油青岛", FuelAvailability::Limited, now,
        );
        provider.insert_station(
            "ZHCC", WeatherConditions::Vmc, 10.0, 5_000, 330, 12, vec![],
            vec![], 0.81, "中航油郑州", FuelAvailability::Normal, now,
        );
        provider.insert_station(
            "ZSHC", WeatherConditions::Mvfr, 4.0, 1_500, 90, 20, vec!["RA".to_string()],
            vec![(
                NotamKind::FuelLimited,
                NotamImpact::Low,
                "国际航班供油需提前 2 小时申请",
            )],
            0.86, "中航油杭州", FuelAvailability::Limited, now,
        );
        provider.insert_station(
            "ZHHH", WeatherConditions::Vmc, 9.0, 4_200, 180, 9, vec![],
            vec![], 0.80, "中航油武汉", FuelAvailability::Normal, now,
        );
        provider.insert_station(
            "ZSOF", WeatherConditions::Imc, 2.0, 600, 70, 22, vec!["RA".to_string(), "BR".to_string()],
            vec![(
                NotamKind::RunwayClosure,
                NotamImpact::High,
                "跑道 33 道面维修,单跑道运行",
            )],
            0.83, "中航油合肥", FuelAvailability::Normal, now,
        );

        provider
    }

    #[allow(clippy::too_many_arguments)]
    fn insert_station(
        &mut self,
        icao: &str,
        conditions: WeatherConditions,
        visibility_km: f64,
        ceiling_ft: i32,
        wind_deg: i32,
        wind_kt: i32,
        phenomena: Vec<String>,
        notams: Vec<(NotamKind, NotamImpact, &str)>,
        price_per_kg: f64,
        supplier: &str,
        availability: FuelAvailability,
        now: DateTime<Utc>,
    ) {
        let notams = notams
            .into_iter()
            .enumerate()
            .map(|(idx, (kind, impact, text))| Notam {
                notam_id: format!("{}-{:03}", icao, idx + 1),
                icao: icao.to_string(),
                kind,
                impact,
                valid_from: now - Duration::hours(6),
                valid_to: now + Duration::hours(18),
                text: text.to_string(),
                origin: DataOrigin::Synthetic,
            })
            .collect();

        self.stations.insert(
            icao.to_string(),
            StationRecord {
                weather: WeatherReport {
                    icao: icao.to_string(),
                    conditions,
                    visibility_km,
                    ceiling_ft,
                    wind_deg,
                    wind_kt,
                    phenomena,
                    observed_at: now,
                    origin: DataOrigin::Synthetic,
                },
                notams,
                fuel: FuelPriceQuote {
                    icao: icao.to_string(),
                    price_per_kg,
                    supplier: supplier.to_string(),
                    availability,
                    origin: DataOrigin::Synthetic,
                },
            },
        );
    }

    fn station(&self, icao: &str) -> Result<&StationRecord, FeedError> {
        self.stations
            .get(&icao.trim().to_uppercase())
            .ok_or_else(|| FeedError::UnknownStation(icao.to_string()))
    }
}

impl Default for StaticFeedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedProvider for StaticFeedProvider {
    fn get_weather(&self, icao: &str) -> Result<WeatherReport, FeedError> {
        Ok(self.station(icao)?.weather.clone())
    }

    fn get_notams(&self, icao: &str) -> Result<Vec<Notam>, FeedError> {
        Ok(self.station(icao)?.notams.clone())
    }

    fn get_fuel_price(&self, icao: &str) -> Result<FuelPriceQuote, FeedError> {
        Ok(self.station(icao)?.fuel.clone())
    }
}
