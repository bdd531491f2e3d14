// ==========================================
// 航班备降决策支持系统 - 机组合规引擎
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 6. Crew Legality
// 依据: Diversion_DSS_Master_Spec.md - PART A 红线 (简化 FTL 口径)
// ==========================================
// 职责: 值勤合规判定 + 机组替换方案 + 疲劳评估
// 红线: 合规结论是分级结果值,不抛错;疲劳评估仅建议,不阻断
// ==========================================

use crate::domain::crew::{
    CrewFatigueAssessment, CrewLegalityCheck, CrewPositioning, CrewReplacementPlan,
};
use crate::domain::types::{ExtensionClass, FatigueLevel, RiskGrade};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

// ===== 合规口径 =====
const MARGIN_CRITICAL_MIN: i64 = 30;
const MARGIN_HIGH_MIN: i64 = 60;
const MARGIN_MEDIUM_MIN: i64 = 120;
const EXTENSION_COMMANDER_MAX_MIN: i64 = 60;
const EXTENSION_DISCRETIONARY_MAX_MIN: i64 = 120;
const EXTENSION_OPERATIONAL_MAX_MIN: i64 = 180;

// ===== 替换口径 =====
const REPLACEMENT_REQUIRED_BELOW_MIN: i64 = 120;
const LOCAL_CREW_HOURS: f64 = 3.0;
const LOCAL_CREW_COST: f64 = 5_000.0;
const POSITIONED_CREW_HOURS: f64 = 6.0;
const POSITIONED_CREW_COST: f64 = 15_000.0;

/// 驻有后备机组的基地机场
const CREW_BASES: &[&str] = &["ZBAA", "ZSPD", "ZSSS", "ZGGG", "ZUUU", "ZSHC"];

// ===== 疲劳口径 =====
const FATIGUE_DUTY_WARN_HOURS: f64 = 10.0;
const FATIGUE_DUTY_HARD_HOURS: f64 = 12.0;
const FATIGUE_MAX_SEGMENTS: u32 = 4;
const FATIGUE_MIN_REST_HOURS: f64 = 10.0;

// ==========================================
// CrewLegalityEngine - 机组合规引擎
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数
pub struct CrewLegalityEngine;

impl CrewLegalityEngine {
    /// 创建新的机组合规引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 值勤合规判定 (依据 Engine_Specs 6.1)
    // ==========================================

    /// 判定值勤合规状态
    ///
    /// 规则 (可解释):
    /// - legal = 剩余值勤 ≥ 场景所需延长
    /// - 安全余量 = 剩余 − 所需 (可为负)
    /// - 风险分档按余量: critical<30, high<60, medium<120, 其余 low
    /// - 延长类别: commander≤60 / discretionary≤120 / operational≤180 /
    ///   not_permitted>180 (此档无论余量一律 critical)
    pub fn check_legality_status(
        &self,
        minutes_remaining: i64,
        scenario_extension_min: i64,
    ) -> CrewLegalityCheck {
        let legal = minutes_remaining >= scenario_extension_min;
        let safety_margin_min = minutes_remaining - scenario_extension_min;

        let extension_class = if scenario_extension_min <= EXTENSION_COMMANDER_MAX_MIN {
            ExtensionClass::Commander
        } else if scenario_extension_min <= EXTENSION_DISCRETIONARY_MAX_MIN {
            ExtensionClass::Discretionary
        } else if scenario_extension_min <= EXTENSION_OPERATIONAL_MAX_MIN {
            ExtensionClass::Operational
        } else {
            ExtensionClass::NotPermitted
        };

        let margin_risk = if safety_margin_min < MARGIN_CRITICAL_MIN {
            RiskGrade::Critical
        } else if safety_margin_min < MARGIN_HIGH_MIN {
            RiskGrade::High
        } else if safety_margin_min < MARGIN_MEDIUM_MIN {
            RiskGrade::Medium
        } else {
            RiskGrade::Low
        };

        // not_permitted 档无论余量一律 critical
        let risk_level = if extension_class == ExtensionClass::NotPermitted {
            RiskGrade::Critical
        } else {
            margin_risk
        };

        let mut recommendations = Vec::new();
        if !legal {
            recommendations.push("LEGALITY: 剩余值勤不足以覆盖场景延长,不得派遣".to_string());
        }
        match extension_class {
            ExtensionClass::NotPermitted => {
                recommendations
                    .push("EXTENSION: 所需延长超出任何许可类别,必须安排机组替换".to_string());
            }
            ExtensionClass::Operational => {
                recommendations.push("EXTENSION: 需运行延长审批,提前通知运控值班经理".to_string());
            }
            ExtensionClass::Discretionary => {
                recommendations.push("EXTENSION: 需机长酌情决断延长,落地后提交报告".to_string());
            }
            ExtensionClass::Commander => {}
        }
        if risk_level >= RiskGrade::High {
            recommendations.push("MARGIN: 安全余量偏低,同步启动机组替换评估".to_string());
        }

        CrewLegalityCheck {
            legal,
            time_remaining_min: minutes_remaining,
            required_time_min: scenario_extension_min,
            safety_margin_min,
            extension_class,
            risk_level,
            recommendations,
        }
    }

    // ==========================================
    // 机组替换方案 (依据 Engine_Specs 6.2)
    // ==========================================

    /// 计算机组替换方案
    ///
    /// 口径:
    /// - 剩余值勤 <120 分钟时需要替换
    /// - 备降场为基地机场 → 本场机组 (3h, $5,000)
    /// - 否则从基地调派 (6h, $15,000)
    /// - 无需替换时耗时/成本为 0,定位方式仍给出以供预案
    #[instrument(skip(self))]
    pub fn calculate_crew_replacement(
        &self,
        current_location: &str,
        diversion_airport: &str,
        remaining_duty_min: i64,
    ) -> CrewReplacementPlan {
        let required = remaining_duty_min < REPLACEMENT_REQUIRED_BELOW_MIN;

        let airport = diversion_airport.trim().to_uppercase();
        let local = CREW_BASES.contains(&airport.as_str());
        let positioning = if local {
            CrewPositioning::Local
        } else {
            CrewPositioning::FromBase
        };

        let (estimated_hours, estimated_cost) = if !required {
            (0.0, 0.0)
        } else if local {
            (LOCAL_CREW_HOURS, LOCAL_CREW_COST)
        } else {
            (POSITIONED_CREW_HOURS, POSITIONED_CREW_COST)
        };

        let reason = if required {
            format!(
                "REPLACEMENT: 剩余值勤 {} 分钟 < 120,{} → {} 补充",
                remaining_duty_min,
                current_location,
                if local { "备降场本场机组" } else { "基地调派机组" }
            )
        } else {
            format!(
                "REPLACEMENT_NOT_REQUIRED: 剩余值勤 {} 分钟 ≥ 120",
                remaining_duty_min
            )
        };

        debug!(required, %positioning, estimated_cost, "机组替换方案生成");

        CrewReplacementPlan {
            required,
            positioning,
            estimated_hours,
            estimated_cost,
            reason,
        }
    }

    // ==========================================
    // 疲劳评估 (依据 Engine_Specs 6.3)
    // ==========================================

    /// 评估机组疲劳
    ///
    /// 疲劳因子 (独立计,每命中一项抬升一级, High 封顶):
    /// - DUTY_10H: 已执勤 >10 小时
    /// - DUTY_12H: 已执勤 >12 小时
    /// - SEGMENTS: 已执行航段 >4
    /// - REST: 上次休息 <10 小时
    ///
    /// # 参数
    /// - `duty_start`: 执勤开始时刻
    /// - `now`: 评估时刻 (显式传入)
    /// - `segments`: 已执行航段数
    /// - `last_rest_hours`: 上次休息时长 (小时)
    pub fn assess_crew_fatigue(
        &self,
        duty_start: DateTime<Utc>,
        now: DateTime<Utc>,
        segments: u32,
        last_rest_hours: f64,
    ) -> CrewFatigueAssessment {
        let duty_hours = (now - duty_start).num_minutes().max(0) as f64 / 60.0;

        let mut level = FatigueLevel::Low;
        let mut factors = Vec::new();

        if duty_hours > FATIGUE_DUTY_WARN_HOURS {
            level = level.escalate();
            factors.push(format!("DUTY_10H: 已执勤 {:.1} 小时 > 10", duty_hours));
        }
        if duty_hours > FATIGUE_DUTY_HARD_HOURS {
            level = level.escalate();
            factors.push(format!("DUTY_12H: 已执勤 {:.1} 小时 > 12", duty_hours));
        }
        if segments > FATIGUE_MAX_SEGMENTS {
            level = level.escalate();
            factors.push(format!("SEGMENTS: 已执行 {} 个航段 > 4", segments));
        }
        if last_rest_hours < FATIGUE_MIN_REST_HOURS {
            level = level.escalate();
            factors.push(format!("REST: 上次休息 {:.1} 小时 < 10", last_rest_hours));
        }

        let mut recommendations = Vec::new();
        match level {
            FatigueLevel::High => {
                recommendations.push("FATIGUE: 建议后续航段更换机组".to_string());
                recommendations.push("FATIGUE: 落地后安排不少于 12 小时休息".to_string());
            }
            FatigueLevel::Moderate => {
                recommendations.push("FATIGUE: 建议控制后续值勤延长,优先安排休息".to_string());
            }
            FatigueLevel::Low => {}
        }

        CrewFatigueAssessment {
            fatigue_level: level,
            duty_hours,
            factors,
            recommendations,
        }
    }
}

impl Default for CrewLegalityEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_check_legality_margin_critical() {
        let engine = CrewLegalityEngine::new();
        let check = engine.check_legality_status(100, 90);

        assert!(check.legal);
        assert_eq!(check.safety_margin_min, 10);
        assert_eq!(check.risk_level, RiskGrade::Critical);
        assert_eq!(check.extension_class, ExtensionClass::Discretionary);
    }

    #[test]
    fn test_check_legality_margin_bands() {
        let engine = CrewLegalityEngine::new();

        // 余量 45 → high
        let check = engine.check_legality_status(100, 55);
        assert_eq!(check.risk_level, RiskGrade::High);

        // 余量 100 → medium
        let check = engine.check_legality_status(160, 60);
        assert_eq!(check.risk_level, RiskGrade::Medium);

        // 余量 150 → low
        let check = engine.check_legality_status(200, 50);
        assert_eq!(check.risk_level, RiskGrade::Low);
        assert!(check.recommendations.is_empty());
    }

    #[test]
    fn test_check_legality_not_permitted_forces_critical() {
        let engine = CrewLegalityEngine::new();
        // 余量 420 本应 low,但延长 >180 → not_permitted 一律 critical
        let check = engine.check_legality_status(600, 181);

        assert!(check.legal);
        assert_eq!(check.extension_class, ExtensionClass::NotPermitted);
        assert_eq!(check.risk_level, RiskGrade::Critical);
        assert!(check
            .recommendations
            .iter()
            .any(|r| r.starts_with("EXTENSION")));
    }

    #[test]
    fn test_check_legality_illegal() {
        let engine = CrewLegalityEngine::new();
        let check = engine.check_legality_status(60, 90);

        assert!(!check.legal);
        assert_eq!(check.safety_margin_min, -30);
        assert_eq!(check.risk_level, RiskGrade::Critical);
        assert!(check.recommendations.iter().any(|r| r.starts_with("LEGALITY")));
    }

    #[test]
    fn test_crew_replacement_local_base() {
        let engine = CrewLegalityEngine::new();
        let plan = engine.calculate_crew_replacement("ZBAA", "ZSPD", 90);

        assert!(plan.required);
        assert_eq!(plan.positioning, CrewPositioning::Local);
        assert_eq!(plan.estimated_hours, 3.0);
        assert_eq!(plan.estimated_cost, 5_000.0);
    }

    #[test]
    fn test_crew_replacement_positioned_from_base() {
        let engine = CrewLegalityEngine::new();
        let plan = engine.calculate_crew_replacement("ZBAA", "ZBSJ", 119);

        assert!(plan.required);
        assert_eq!(plan.positioning, CrewPositioning::FromBase);
        assert_eq!(plan.estimated_hours, 6.0);
        assert_eq!(plan.estimated_cost, 15_000.0);
    }

    #[test]
    fn test_crew_replacement_not_required() {
        let engine = CrewLegalityEngine::new();
        let plan = engine.calculate_crew_replacement("ZBAA", "ZBSJ", 120);

        assert!(!plan.required);
        assert_eq!(plan.estimated_cost, 0.0);
        assert!(plan.reason.starts_with("REPLACEMENT_NOT_REQUIRED"));
    }

    #[test]
    fn test_fatigue_no_factors() {
        let engine = CrewLegalityEngine::new();
        let start = Utc.with_ymd_and_hms(2026, 3, 12, 6, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 12, 14, 0, 0).unwrap();

        let assessment = engine.assess_crew_fatigue(start, now, 3, 12.0);
        assert_eq!(assessment.fatigue_level, FatigueLevel::Low);
        assert_eq!(assessment.duty_hours, 8.0);
        assert!(assessment.factors.is_empty());
        assert!(assessment.recommendations.is_empty());
    }

    #[test]
    fn test_fatigue_single_factor_moderate() {
        let engine = CrewLegalityEngine::new();
        let start = Utc.with_ymd_and_hms(2026, 3, 12, 2, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 12, 13, 0, 0).unwrap();

        // 11 小时: 仅命中 DUTY_10H
        let assessment = engine.assess_crew_fatigue(start, now, 2, 12.0);
        assert_eq!(assessment.fatigue_level, FatigueLevel::Moderate);
        assert_eq!(assessment.factors.len(), 1);
    }

    #[test]
    fn test_fatigue_multiple_factors_high() {
        let engine = CrewLegalityEngine::new();
        let start = Utc.with_ymd_and_hms(2026, 3, 11, 22, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 12, 11, 30, 0).unwrap();

        // 13.5 小时 (命中 10h+12h) + 5 航段 + 休息 8h → 4 因子, High 封顶
        let assessment = engine.assess_crew_fatigue(start, now, 5, 8.0);
        assert_eq!(assessment.fatigue_level, FatigueLevel::High);
        assert_eq!(assessment.factors.len(), 4);
        assert!(!assessment.recommendations.is_empty());
    }
}
