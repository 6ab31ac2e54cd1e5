use crate::domain::riskregister::grouping::count_risks_by;
use crate::domain::riskregister::risk::Risk;
use crate::domain::riskregister::risk_id::RiskId;
use crate::domain::riskregister::severity::Severity;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// How many of the highest-scoring risks to surface when no Critical risk
/// exists.
const TOP_RISKS_LIMIT: usize = 5;

/// Aggregate register summary consumed by dashboards and reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskStats {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub by_status: IndexMap<String, usize>,
    pub by_owner: IndexMap<String, usize>,
    pub by_framework: IndexMap<String, usize>,
    pub by_category: IndexMap<String, usize>,
    pub top_risks: Vec<TopRisk>,
}

/// Slim risk view listed in `top_risks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopRisk {
    pub id: RiskId,
    pub name: String,
    pub score: u32,
    pub severity: Severity,
    pub status: String,
    pub owner: String,
}

impl From<&Arc<Risk>> for TopRisk {
    fn from(risk: &Arc<Risk>) -> Self {
        TopRisk {
            id: risk.id().clone(),
            name: risk.name().to_string(),
            score: risk.score(),
            severity: risk.severity(),
            status: risk.status().to_string(),
            owner: risk.owner_or_unassigned().to_string(),
        }
    }
}

impl RiskStats {
    /// Computes the full summary in one pass over the list. Pure: repeated
    /// calls on the same list yield identical values.
    pub fn from_risks(risks: &[Arc<Risk>]) -> RiskStats {
        let mut critical = 0;
        let mut high = 0;
        let mut medium = 0;
        let mut low = 0;
        for risk in risks {
            match risk.severity() {
                Severity::Critical => critical += 1,
                Severity::High => high += 1,
                Severity::Medium => medium += 1,
                Severity::Low => low += 1,
            }
        }

        RiskStats {
            total: risks.len(),
            critical,
            high,
            medium,
            low,
            by_status: count_risks_by(risks, |r| r.status().to_string()),
            by_owner: count_risks_by(risks, |r| r.owner_or_unassigned().to_string()),
            by_framework: count_risks_by(risks, |r| r.framework().to_string()),
            by_category: count_risks_by(risks, |r| r.category().to_string()),
            top_risks: top_risks(risks),
        }
    }
}

/// The Critical risks, or when none exist the `TOP_RISKS_LIMIT`
/// highest-scoring ones; score descending, ties in input order.
fn top_risks(risks: &[Arc<Risk>]) -> Vec<TopRisk> {
    let mut by_score: Vec<&Arc<Risk>> = risks.iter().collect();
    by_score.sort_by(|a, b| b.score().cmp(&a.score()));

    let critical: Vec<&Arc<Risk>> = by_score
        .iter()
        .copied()
        .filter(|r| r.severity() == Severity::Critical)
        .collect();

    let chosen = if critical.is_empty() {
        by_score.into_iter().take(TOP_RISKS_LIMIT).collect()
    } else {
        critical
    };

    chosen.into_iter().map(TopRisk::from).collect()
}

/// Control coverage on a 0-10 scale: the fraction of risks marked Mitigated,
/// rounded to one decimal place. Zero for an empty register.
pub fn coverage_score(risks: &[Arc<Risk>]) -> f64 {
    if risks.is_empty() {
        return 0.0;
    }

    let mitigated = risks.iter().filter(|r| r.status().is_mitigated()).count();
    let raw = mitigated as f64 * 10.0 / risks.len() as f64;
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::riskregister::risk_register::RiskRegister;
    use crate::domain::riskregister::{
        framework::Framework, risk_status::RiskStatus, scanner_type::ScannerType,
        treatment::Treatment, tsc_category::TscCategory,
    };

    fn add_scored_risk(
        register: &mut RiskRegister,
        id: u64,
        likelihood: u32,
        impact: u32,
        status: RiskStatus,
        owner: Option<&str>,
    ) {
        register.add_risk(
            RiskId::from(id),
            format!("risk-{id}"),
            None,
            likelihood,
            impact,
            None,
            vec![],
            Treatment::Mitigate,
            String::new(),
            owner.map(str::to_string),
            None,
            status,
            Framework::Soc2,
            TscCategory::Security,
            ScannerType::Manual,
        );
    }

    #[test]
    fn counts_severity_buckets_and_total() {
        let mut register = RiskRegister::new();
        add_scored_risk(&mut register, 1, 5, 5, RiskStatus::Open, Some("alice"));
        add_scored_risk(&mut register, 2, 2, 2, RiskStatus::Open, None);

        let stats = register.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.high, 0);
        assert_eq!(stats.medium, 0);
        assert_eq!(stats.low, 1);

        let top_names: Vec<&str> = stats.top_risks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(top_names, vec!["risk-1"]);
    }

    #[test]
    fn top_risks_fall_back_to_highest_scoring_when_no_critical() {
        let mut register = RiskRegister::new();
        for (id, (likelihood, impact)) in
            [(3, 3), (1, 1), (4, 4), (2, 2), (3, 4), (2, 3), (1, 2)].iter().enumerate()
        {
            add_scored_risk(
                &mut register,
                id as u64,
                *likelihood,
                *impact,
                RiskStatus::Open,
                None,
            );
        }

        let stats = register.stats();
        assert_eq!(stats.critical, 0);
        assert_eq!(stats.top_risks.len(), 5);
        assert_eq!(stats.top_risks[0].score, 16);
        let scores: Vec<u32> = stats.top_risks.iter().map(|t| t.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn top_risks_tie_break_keeps_input_order() {
        let mut register = RiskRegister::new();
        add_scored_risk(&mut register, 1, 5, 5, RiskStatus::Open, None);
        add_scored_risk(&mut register, 2, 5, 5, RiskStatus::Open, None);
        add_scored_risk(&mut register, 3, 4, 5, RiskStatus::Open, None);

        let stats = register.stats();
        let ids: Vec<&str> = stats.top_risks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn groupings_resolve_documented_defaults() {
        let mut register = RiskRegister::new();
        add_scored_risk(&mut register, 1, 3, 3, RiskStatus::Open, Some("alice"));
        add_scored_risk(&mut register, 2, 3, 3, RiskStatus::Mitigated, None);

        let stats = register.stats();
        assert_eq!(stats.by_status["Open"], 1);
        assert_eq!(stats.by_status["Mitigated"], 1);
        assert_eq!(stats.by_owner["alice"], 1);
        assert_eq!(stats.by_owner["Unassigned"], 1);
        assert_eq!(stats.by_framework["soc2"], 2);
        assert_eq!(stats.by_category["Security (CC)"], 2);
    }

    #[test]
    fn stats_are_idempotent() {
        let mut register = RiskRegister::new();
        add_scored_risk(&mut register, 1, 5, 5, RiskStatus::Open, Some("alice"));
        add_scored_risk(&mut register, 2, 2, 4, RiskStatus::Mitigated, None);

        assert_eq!(register.stats(), register.stats());
    }

    #[test]
    fn coverage_is_zero_for_empty_register() {
        assert_eq!(coverage_score(&[]), 0.0);
    }

    #[test]
    fn coverage_rounds_to_one_decimal() {
        let mut register = RiskRegister::new();
        add_scored_risk(&mut register, 1, 1, 1, RiskStatus::Mitigated, None);
        add_scored_risk(&mut register, 2, 1, 1, RiskStatus::Open, None);
        add_scored_risk(&mut register, 3, 1, 1, RiskStatus::InProgress, None);

        assert_eq!(register.coverage_score(), 3.3);
    }

    #[test]
    fn coverage_reaches_ten_when_everything_is_mitigated() {
        let mut register = RiskRegister::new();
        add_scored_risk(&mut register, 1, 1, 1, RiskStatus::Mitigated, None);
        add_scored_risk(&mut register, 2, 1, 1, RiskStatus::Mitigated, None);

        assert_eq!(register.coverage_score(), 10.0);
    }
}
