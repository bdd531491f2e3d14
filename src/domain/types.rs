// ==========================================
// 航班备降决策支持系统 - 领域类型定义
// ==========================================
// 依据: Diversion_DSS_Master_Spec.md - PART A 红线
// 依据: Engine_Specs_v0.2_Diversion.md - 0.2 等级体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 航班状态 (Flight Status)
// ==========================================
// 生命周期: Scheduled → Departed → EnRoute → (Delayed/Diverted) → Arrived
// 终态: Arrived / Cancelled (终态后不再接受场景写入)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    Scheduled, // 计划
    Departed,  // 已起飞
    EnRoute,   // 巡航
    Delayed,   // 延误
    Diverted,  // 已备降
    Arrived,   // 已到达
    Cancelled, // 已取消
}

impl FlightStatus {
    /// 是否为终态 (到达/取消后状态冻结)
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlightStatus::Arrived | FlightStatus::Cancelled)
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightStatus::Scheduled => write!(f, "SCHEDULED"),
            FlightStatus::Departed => write!(f, "DEPARTED"),
            FlightStatus::EnRoute => write!(f, "EN_ROUTE"),
            FlightStatus::Delayed => write!(f, "DELAYED"),
            FlightStatus::Diverted => write!(f, "DIVERTED"),
            FlightStatus::Arrived => write!(f, "ARRIVED"),
            FlightStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

// ==========================================
// 紧急程度 (Urgency Tier)
// ==========================================
// 红线: 等级制,不是评分制
// 顺序: Routine < Urgent < Emergency < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    Routine,   // 常规
    Urgent,    // 紧急
    Emergency, // 应急
    Critical,  // 危急
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyTier::Routine => write!(f, "routine"),
            UrgencyTier::Urgent => write!(f, "urgent"),
            UrgencyTier::Emergency => write!(f, "emergency"),
            UrgencyTier::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 风险等级 (Risk Grade)
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 4. Risk Assessment
// 顺序: Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskGrade {
    Low,      // 正常
    Medium,   // 关注
    High,     // 紧张
    Critical, // 危险
}

impl RiskGrade {
    /// 抬升一级 (Critical 封顶)
    pub fn escalate(self) -> RiskGrade {
        match self {
            RiskGrade::Low => RiskGrade::Medium,
            RiskGrade::Medium => RiskGrade::High,
            RiskGrade::High => RiskGrade::Critical,
            RiskGrade::Critical => RiskGrade::Critical,
        }
    }

    /// 多轴取最差 (worst-case 合并规则)
    pub fn worst_of(grades: &[RiskGrade]) -> RiskGrade {
        grades.iter().copied().max().unwrap_or(RiskGrade::Low)
    }
}

impl fmt::Display for RiskGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskGrade::Low => write!(f, "LOW"),
            RiskGrade::Medium => write!(f, "MEDIUM"),
            RiskGrade::High => write!(f, "HIGH"),
            RiskGrade::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 备降场天气适航性 (Weather Suitability)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSuitability {
    Good,     // 良好
    Moderate, // 一般
    Poor,     // 恶劣
}

impl fmt::Display for WeatherSuitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherSuitability::Good => write!(f, "good"),
            WeatherSuitability::Moderate => write!(f, "moderate"),
            WeatherSuitability::Poor => write!(f, "poor"),
        }
    }
}

// ==========================================
// 备降场保障能力 (Facilities Rating)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilitiesRating {
    Full,     // 完整保障
    Adequate, // 基本保障
    Limited,  // 有限保障
}

impl fmt::Display for FacilitiesRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilitiesRating::Full => write!(f, "full"),
            FacilitiesRating::Adequate => write!(f, "adequate"),
            FacilitiesRating::Limited => write!(f, "limited"),
        }
    }
}

// ==========================================
// 旅客影响分类 (Impact Category)
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 5.2 Customer Disruption
// 分档: severe≥80, high≥60, moderate≥30, 其余 low
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactCategory {
    Low,      // 轻微
    Moderate, // 中等
    High,     // 较重
    Severe,   // 严重
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactCategory::Low => write!(f, "low"),
            ImpactCategory::Moderate => write!(f, "moderate"),
            ImpactCategory::High => write!(f, "high"),
            ImpactCategory::Severe => write!(f, "severe"),
        }
    }
}

// ==========================================
// 机组疲劳等级 (Fatigue Level)
// ==========================================
// 红线: 疲劳评估仅输出建议,不阻断决策
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatigueLevel {
    Low,      // 正常
    Moderate, // 关注
    High,     // 疲劳
}

impl FatigueLevel {
    /// 抬升一级 (High 封顶)
    pub fn escalate(self) -> FatigueLevel {
        match self {
            FatigueLevel::Low => FatigueLevel::Moderate,
            FatigueLevel::Moderate => FatigueLevel::High,
            FatigueLevel::High => FatigueLevel::High,
        }
    }
}

impl fmt::Display for FatigueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatigueLevel::Low => write!(f, "low"),
            FatigueLevel::Moderate => write!(f, "moderate"),
            FatigueLevel::High => write!(f, "high"),
        }
    }
}

// ==========================================
// 油量监控状态 (Fuel Monitor Status)
// ==========================================
// 分档: critical<1000, caution<2000, monitor<3000, 其余 normal (按余量kg)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FuelMonitorStatus {
    Normal,   // 正常
    Monitor,  // 监控
    Caution,  // 警戒
    Critical, // 危险
}

impl fmt::Display for FuelMonitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuelMonitorStatus::Normal => write!(f, "NORMAL"),
            FuelMonitorStatus::Monitor => write!(f, "MONITOR"),
            FuelMonitorStatus::Caution => write!(f, "CAUTION"),
            FuelMonitorStatus::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 值勤延长类别 (Extension Class)
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 6. Crew Legality
// 分档: commander≤60, discretionary≤120, operational≤180, 其余 not_permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionClass {
    Commander,     // 机长决断延长
    Discretionary, // 酌情延长
    Operational,   // 运行延长
    NotPermitted,  // 不允许
}

impl fmt::Display for ExtensionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionClass::Commander => write!(f, "commander"),
            ExtensionClass::Discretionary => write!(f, "discretionary"),
            ExtensionClass::Operational => write!(f, "operational"),
            ExtensionClass::NotPermitted => write!(f, "not_permitted"),
        }
    }
}

// ==========================================
// 旅客航线区域 (Passenger Region)
// ==========================================
// 用途: 选择每旅客单价表 (住宿/餐食/改签)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerRegion {
    Domestic, // 国内
    European, // 欧洲
    LongHaul, // 远程国际
}

impl fmt::Display for PassengerRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassengerRegion::Domestic => write!(f, "domestic"),
            PassengerRegion::European => write!(f, "european"),
            PassengerRegion::LongHaul => write!(f, "longhaul"),
        }
    }
}

impl std::str::FromStr for PassengerRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "domestic" => Ok(PassengerRegion::Domestic),
            "european" => Ok(PassengerRegion::European),
            "longhaul" | "long_haul" | "long-haul" => Ok(PassengerRegion::LongHaul),
            other => Err(format!("未知区域类型: {}", other)),
        }
    }
}

// ==========================================
// 事件类别 (Incident Category)
// ==========================================
// 用途: 候选备降场生成 + 保险责任基准额选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentCategory {
    Medical,  // 医疗
    Technical, // 机械/技术
    Weather,  // 天气
    Security, // 安保
}

impl fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentCategory::Medical => write!(f, "medical"),
            IncidentCategory::Technical => write!(f, "technical"),
            IncidentCategory::Weather => write!(f, "weather"),
            IncidentCategory::Security => write!(f, "security"),
        }
    }
}

impl std::str::FromStr for IncidentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "medical" => Ok(IncidentCategory::Medical),
            "technical" | "tech" => Ok(IncidentCategory::Technical),
            "weather" | "wx" => Ok(IncidentCategory::Weather),
            "security" => Ok(IncidentCategory::Security),
            other => Err(format!("未知事件类别: {}", other)),
        }
    }
}

// ==========================================
// 事件严重度 (Incident Severity)
// ==========================================
// 用途: 保险责任计算的索赔率选择 (minor 10% / major 30% / serious 60%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentSeverity {
    Minor,   // 轻微
    Major,   // 较大
    Serious, // 严重
}

impl fmt::Display for IncidentSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentSeverity::Minor => write!(f, "minor"),
            IncidentSeverity::Major => write!(f, "major"),
            IncidentSeverity::Serious => write!(f, "serious"),
        }
    }
}

// ==========================================
// 数据来源标记 (Data Origin)
// ==========================================
// 红线: 权威数据与合成数据不得静默混用,外部数据必须携带来源标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataOrigin {
    Authoritative, // 权威源
    Synthetic,     // 合成数据
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::Authoritative => write!(f, "AUTHORITATIVE"),
            DataOrigin::Synthetic => write!(f, "SYNTHETIC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_grade_ordering() {
        assert!(RiskGrade::Low < RiskGrade::Medium);
        assert!(RiskGrade::Medium < RiskGrade::High);
        assert!(RiskGrade::High < RiskGrade::Critical);
    }

    #[test]
    fn test_risk_grade_escalate_saturates() {
        assert_eq!(RiskGrade::Low.escalate(), RiskGrade::Medium);
        assert_eq!(RiskGrade::High.escalate(), RiskGrade::Critical);
        assert_eq!(RiskGrade::Critical.escalate(), RiskGrade::Critical);
    }

    #[test]
    fn test_risk_grade_worst_of() {
        let grades = [RiskGrade::Low, RiskGrade::High, RiskGrade::Medium];
        assert_eq!(RiskGrade::worst_of(&grades), RiskGrade::High);
        // 空输入视为 Low
        assert_eq!(RiskGrade::worst_of(&[]), RiskGrade::Low);
    }

    #[test]
    fn test_flight_status_terminal() {
        assert!(FlightStatus::Arrived.is_terminal());
        assert!(FlightStatus::Cancelled.is_terminal());
        assert!(!FlightStatus::Diverted.is_terminal());
        assert!(!FlightStatus::EnRoute.is_terminal());
    }

    #[test]
    fn test_incident_category_from_str() {
        assert_eq!("medical".parse::<IncidentCategory>().unwrap(), IncidentCategory::Medical);
        assert_eq!("WX".parse::<IncidentCategory>().unwrap(), IncidentCategory::Weather);
        assert!("unknown".parse::<IncidentCategory>().is_err());
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&FlightStatus::EnRoute).unwrap();
        assert_eq!(json, "\"EN_ROUTE\"");
        let json = serde_json::to_string(&UrgencyTier::Emergency).unwrap();
        assert_eq!(json, "\"emergency\"");
    }
}
