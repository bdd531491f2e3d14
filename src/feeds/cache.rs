// ==========================================
// 航班备降决策支持系统 - 数据源读穿缓存
// ==========================================
// 依据: Diversion_DSS_Master_Spec.md - PART E 外部协作方
// ==========================================
// 职责: 按台站缓存数据源查询结果,固定时效窗口 30 分钟
// 红线: 缓存只存在于协作方一侧,决策核心本身保持无状态
// ==========================================

use crate::feeds::provider::{
    FeedError, FeedProvider, FuelPriceQuote, Notam, WeatherReport,
};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

const DEFAULT_TTL_MINUTES: i64 = 30;

type Slot<T> = Mutex<HashMap<String, (DateTime<Utc>, T)>>;

// ==========================================
// CachedFeedProvider - 读穿 TTL 缓存
// ==========================================
pub struct CachedFeedProvider<P: FeedProvider> {
    inner: P,
    ttl: Duration,
    weather: Slot<WeatherReport>,
    notams: Slot<Vec<Notam>>,
    fuel: Slot<FuelPriceQuote>,
}

impl<P: FeedProvider> CachedFeedProvider<P> {
    /// 包装数据源 (默认时效窗口 30 分钟)
    pub fn new(inner: P) -> Self {
        Self::with_ttl_minutes(inner, DEFAULT_TTL_MINUTES)
    }

    /// 指定时效窗口包装 (配置层注入)
    pub fn with_ttl_minutes(inner: P, ttl_minutes: i64) -> Self {
        Self {
            inner,
            ttl: Duration::minutes(ttl_minutes),
            weather: Mutex::new(HashMap::new()),
            notams: Mutex::new(HashMap::new()),
            fuel: Mutex::new(HashMap::new()),
        }
    }

    /// 读穿查询: 窗口内命中返回缓存值,否则回源并刷新
    fn lookup<T: Clone>(
        slot: &Slot<T>,
        icao: &str,
        now: DateTime<Utc>,
        ttl: Duration,
        fetch: impl FnOnce() -> Result<T, FeedError>,
    ) -> Result<T, FeedError> {
        {
            let cache = slot
                .lock()
                .map_err(|e| FeedError::LockPoisoned(e.to_string()))?;
            if let Some((fetched_at, value)) = cache.get(icao) {
                if now - *fetched_at < ttl {
                    debug!(icao, "缓存命中");
                    return Ok(value.clone());
                }
            }
        }

        let value = fetch()?;
        let mut cache = slot
            .lock()
            .map_err(|e| FeedError::LockPoisoned(e.to_string()))?;
        cache.insert(icao.to_string(), (now, value.clone()));
        debug!(icao, "回源刷新缓存");
        Ok(value)
    }

    // ===== 显式时刻入口 (测试与复现用) =====

    pub fn get_weather_at(
        &self,
        icao: &str,
        now: DateTime<Utc>,
    ) -> Result<WeatherReport, FeedError> {
        Self::lookup(&self.weather, icao, now, self.ttl, || {
            self.inner.get_weather(icao)
        })
    }

    pub fn get_notams_at(&self, icao: &str, now: DateTime<Utc>) -> Result<Vec<Notam>, FeedError> {
        Self::lookup(&self.notams, icao, now, self.ttl, || {
            self.inner.get_notams(icao)
        })
    }

    pub fn get_fuel_price_at(
        &self,
        icao: &str,
        now: DateTime<Utc>,
    ) -> Result<FuelPriceQuote, FeedError> {
        Self::lookup(&self.fuel, icao, now, self.ttl, || {
            self.inner.get_fuel_price(icao)
        })
    }
}

impl<P: FeedProvider> FeedProvider for CachedFeedProvider<P> {
    fn get_weather(&self, icao: &str) -> Result<WeatherReport, FeedError> {
        self.get_weather_at(icao, Utc::now())
    }

    fn get_notams(&self, icao: &str) -> Result<Vec<Notam>, FeedError> {
        self.get_notams_at(icao, Utc::now())
    }

    fn get_fuel_price(&self, icao: &str) -> Result<FuelPriceQuote, FeedError> {
        self.get_fuel_price_at(icao, Utc::now())
    }
}
