// ==========================================
// 航班备降决策支持系统 - 报告生成引擎
// ==========================================
// 依据: Engine_Specs_v0.2_Diversion.md - 8. Report Generator
// ==========================================
// 职责: 聚合航班状态 + 推演结果 + 三类计算器输出,
//       产出事件报告 / 处置摘要 / JSON 聚合
// 红线: 纯聚合与格式化,无外部副作用,不落库
// ==========================================

use crate::domain::cost::{CostEstimate, CustomerImpactScore};
use crate::domain::crew::CrewLegalityCheck;
use crate::domain::flight::FlightState;
use crate::domain::fuel::FuelDecisionAnalysis;
use crate::domain::report::IncidentReport;
use crate::domain::scenario::{DiversionResult, DiversionScenario};
use crate::domain::types::{ExtensionClass, ImpactCategory, RiskGrade};
use crate::i18n::t;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

// ===== 复盘规则阈值 =====
const LESSON_FUEL_EFFICIENCY_PCT: f64 = 85.0; // 加油效率低于此值 → 燃油教训
const LESSON_CUSTOMER_SCORE: f64 = 60.0; // 旅客评分高于此值 → 沟通教训
const RECO_COST_REVIEW_THRESHOLD: f64 = 100_000.0; // 总成本高于此值 → 商务复核

// ==========================================
// ReportEngine - 报告生成引擎
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数
pub struct ReportEngine;

impl ReportEngine {
    /// 创建新的报告生成引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 结构化事件报告
    // ==========================================

    /// 构建结构化事件报告
    ///
    /// 经验教训/改进建议由各指标的独立阈值规则派生,互不耦合
    ///
    /// # 参数
    /// - `flight`: 推演后的航班状态
    /// - `scenario`: 已应用的备降场景
    /// - `result`: 备降推演结果
    /// - `cost`: 处置成本估算
    /// - `customer`: 旅客影响评分
    /// - `legality`: 值勤合规检查
    /// - `fuel`: 加油决策复盘
    /// - `now`: 报告生成时刻
    #[allow(clippy::too_many_arguments)]
    pub fn build_incident_report(
        &self,
        flight: &FlightState,
        scenario: &DiversionScenario,
        result: &DiversionResult,
        cost: &CostEstimate,
        customer: &CustomerImpactScore,
        legality: &CrewLegalityCheck,
        fuel: &FuelDecisionAnalysis,
        now: DateTime<Utc>,
    ) -> IncidentReport {
        let total_disruption_cost = result.additional_costs.total + cost.total;
        let lessons_learned = self.derive_lessons(result, customer, legality, fuel);
        let recommendations =
            self.derive_recommendations(result, legality, total_disruption_cost, customer);

        IncidentReport {
            report_id: Uuid::new_v4().to_string(),
            generated_at: now,
            flight_number: flight.flight_number.clone(),
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            aircraft_type: flight.aircraft_type.clone(),
            diversion_airport: result.diversion_airport.clone(),
            diversion_reason: result.diversion_reason.clone(),
            urgency: scenario.urgency,
            total_delay_min: result.total_delay_min,
            total_disruption_cost,
            fuel_remaining_kg: result.fuel_remaining_kg,
            crew_time_remaining_min: result.crew_time_remaining_min,
            fuel_efficiency_pct: fuel.efficiency_pct,
            customer_score: customer.score,
            customer_category: customer.category,
            crew_risk: result.risk_assessment.crew,
            overall_risk: result.risk_assessment.overall,
            lessons_learned,
            recommendations,
        }
    }

    /// 派生经验教训 (独立阈值规则)
    ///
    /// 规则:
    /// - 加油效率 <85% → 燃油筹划教训
    /// - 机组风险轴非 low → 机组排班教训
    /// - 值勤不合规 → 值勤红线教训
    /// - 旅客评分 >60 → 旅客沟通教训
    fn derive_lessons(
        &self,
        result: &DiversionResult,
        customer: &CustomerImpactScore,
        legality: &CrewLegalityCheck,
        fuel: &FuelDecisionAnalysis,
    ) -> Vec<String> {
        let mut lessons = Vec::new();

        if fuel.efficiency_pct < LESSON_FUEL_EFFICIENCY_PCT {
            lessons.push(format!(
                "燃油筹划: 加油决策效率 {:.1}% 低于 85%,需复核申请口径",
                fuel.efficiency_pct
            ));
        }
        if result.risk_assessment.crew != RiskGrade::Low {
            lessons.push(format!(
                "机组排班: 备降后值勤余量触发 {} 风险,排班余量需加大",
                result.risk_assessment.crew
            ));
        }
        if !legality.legal {
            lessons.push("值勤红线: 场景延长超出剩余值勤,签派放行环节需前置校验".to_string());
        }
        if customer.score > LESSON_CUSTOMER_SCORE {
            lessons.push(format!(
                "旅客沟通: 影响评分 {:.0} 超过 60,告知与安置流程需提速",
                customer.score
            ));
        }

        lessons
    }

    /// 派生改进建议 (独立阈值规则)
    ///
    /// 规则:
    /// - 综合风险 ≥ high → 运行复盘会
    /// - 总成本 >$100,000 → 商务复核
    /// - 延长类别 not_permitted → 机组替换预案
    /// - 旅客分类 ≥ high → 补偿与安抚跟进
    fn derive_recommendations(
        &self,
        result: &DiversionResult,
        legality: &CrewLegalityCheck,
        total_disruption_cost: f64,
        customer: &CustomerImpactScore,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if result.risk_assessment.overall >= RiskGrade::High {
            recommendations.push(format!(
                "组织运行复盘会: 综合风险 {},覆盖 {}",
                result.risk_assessment.overall, result.risk_assessment.reason
            ));
        }
        if total_disruption_cost > RECO_COST_REVIEW_THRESHOLD {
            recommendations.push(format!(
                "商务复核: 处置总成本 ${:.0} 超过 $100,000",
                total_disruption_cost
            ));
        }
        if legality.extension_class == ExtensionClass::NotPermitted {
            recommendations.push("完善备降机组替换预案: 所需延长超出任何许可类别".to_string());
        }
        if customer.category >= ImpactCategory::High {
            recommendations.push("启动旅客补偿与安抚跟进,72 小时内闭环".to_string());
        }

        recommendations
    }

    // ==========================================
    // 文本渲染
    // ==========================================

    /// 渲染事件报告文本 (节标题走 i18n)
    pub fn render_incident_report(
        &self,
        report: &IncidentReport,
        result: &DiversionResult,
        cost: &CostEstimate,
    ) -> String {
        let mut out = String::new();
        let rule = "==========================================";

        out.push_str(&format!("{}\n{}  {}\n{}\n", rule, t("report.incident.title"), report.report_id, rule));
        out.push_str(&format!("{}: {}\n\n", t("report.label.generated_at"), report.generated_at.format("%Y-%m-%d %H:%M UTC")));

        out.push_str(&format!("【{}】\n", t("report.section.flight")));
        out.push_str(&format!(
            "{} {} → {}  ({})\n",
            report.flight_number, report.origin, report.destination, report.aircraft_type
        ));
        out.push_str(&format!(
            "{}: {} ({})  {}: {}\n\n",
            t("report.label.diversion_airport"),
            report.diversion_airport,
            report.diversion_reason,
            t("report.label.urgency"),
            report.urgency
        ));

        out.push_str(&format!("【{}】\n", t("report.section.timeline")));
        out.push_str(&format!(
            "{}: {} → {}  {}: {} min\n\n",
            t("report.label.eta"),
            result.original_eta.format("%H:%M"),
            result.new_eta.format("%H:%M"),
            t("report.label.total_delay"),
            report.total_delay_min
        ));

        out.push_str(&format!("【{}】\n", t("report.section.cost")));
        out.push_str(&format!(
            "{}: ${:.0}  ({}: ${:.0} / {}: ${:.0})\n\n",
            t("report.label.total_cost"),
            report.total_disruption_cost,
            t("report.label.diversion_cost"),
            result.additional_costs.total,
            t("report.label.ground_cost"),
            cost.total
        ));

        out.push_str(&format!("【{}】\n", t("report.section.crew")));
        out.push_str(&format!(
            "{}: {} min  {}: {}\n\n",
            t("report.label.crew_remaining"),
            report.crew_time_remaining_min,
            t("report.label.crew_risk"),
            report.crew_risk
        ));

        out.push_str(&format!("【{}】\n", t("report.section.fuel")));
        out.push_str(&format!(
            "{}: {:.0} kg  {}: {:.1}%\n\n",
            t("report.label.fuel_remaining"),
            report.fuel_remaining_kg,
            t("report.label.fuel_efficiency"),
            report.fuel_efficiency_pct
        ));

        out.push_str(&format!("【{}】\n", t("report.section.customer")));
        out.push_str(&format!(
            "{}: {:.0} ({})\n\n",
            t("report.label.customer_score"),
            report.customer_score,
            report.customer_category
        ));

        out.push_str(&format!("【{}】\n", t("report.section.risk")));
        out.push_str(&format!(
            "{}: {}  (fuel={} crew={} ops={})\n{}\n\n",
            t("report.label.overall_risk"),
            report.overall_risk,
            result.risk_assessment.fuel,
            result.risk_assessment.crew,
            result.risk_assessment.operational,
            result.risk_assessment.reason
        ));

        out.push_str(&format!("【{}】\n", t("report.section.lessons")));
        if report.lessons_learned.is_empty() {
            out.push_str(&format!("{}\n", t("report.label.none")));
        }
        for lesson in &report.lessons_learned {
            out.push_str(&format!("- {}\n", lesson));
        }
        out.push('\n');

        out.push_str(&format!("【{}】\n", t("report.section.recommendations")));
        if report.recommendations.is_empty() {
            out.push_str(&format!("{}\n", t("report.label.none")));
        }
        for recommendation in &report.recommendations {
            out.push_str(&format!("- {}\n", recommendation));
        }

        out
    }

    /// 渲染处置摘要 (一屏速览)
    pub fn render_executive_summary(&self, report: &IncidentReport) -> String {
        format!(
            "{}: {} {} → {} | {}: {} | {}: {} min | {}: ${:.0} | {}: {}",
            t("report.summary.title"),
            report.flight_number,
            report.origin,
            report.destination,
            t("report.label.diversion_airport"),
            report.diversion_airport,
            t("report.label.total_delay"),
            report.total_delay_min,
            t("report.label.total_cost"),
            report.total_disruption_cost,
            t("report.label.overall_risk"),
            report.overall_risk
        )
    }

    // ==========================================
    // JSON 聚合
    // ==========================================

    /// 构建 JSON 聚合 (机读口径,字段与各结构体 serde 形态一致)
    #[allow(clippy::too_many_arguments)]
    pub fn build_json_aggregate(
        &self,
        report: &IncidentReport,
        flight: &FlightState,
        result: &DiversionResult,
        cost: &CostEstimate,
        customer: &CustomerImpactScore,
        legality: &CrewLegalityCheck,
        fuel: &FuelDecisionAnalysis,
    ) -> Value {
        json!({
            "report": report,
            "flight": flight,
            "diversion_result": result,
            "cost_estimate": cost,
            "customer_impact": customer,
            "crew_legality": legality,
            "fuel_analysis": fuel,
        })
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}
