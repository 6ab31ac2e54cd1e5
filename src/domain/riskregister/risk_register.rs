use crate::domain::riskregister::framework::Framework;
use crate::domain::riskregister::heat_map::HeatMap;
use crate::domain::riskregister::risk::Risk;
use crate::domain::riskregister::risk_id::RiskId;
use crate::domain::riskregister::risk_status::RiskStatus;
use crate::domain::riskregister::scanner_type::ScannerType;
use crate::domain::riskregister::stats::{RiskStats, coverage_score};
use crate::domain::riskregister::treatment::Treatment;
use crate::domain::riskregister::tsc_category::TscCategory;
use chrono::NaiveDate;
use std::sync::Arc;

/// In-memory aggregate of the risks fetched from the upstream store,
/// recomputed on every load. Ingestion order is preserved.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct RiskRegister {
    risks: Vec<Arc<Risk>>,
}

impl RiskRegister {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_risk(
        &mut self,
        id: RiskId,
        name: String,
        description: Option<String>,
        likelihood: u32,
        impact: u32,
        score: Option<u32>,
        controls: Vec<String>,
        treatment: Treatment,
        action_items: String,
        owner: Option<String>,
        due_date: Option<NaiveDate>,
        status: RiskStatus,
        framework: Framework,
        category: TscCategory,
        scanner_type: ScannerType,
    ) -> Arc<Risk> {
        self.insert(Risk::new(
            id,
            name,
            description,
            likelihood,
            impact,
            score,
            controls,
            treatment,
            action_items,
            owner,
            due_date,
            status,
            framework,
            category,
            scanner_type,
        ))
    }

    pub fn insert(&mut self, risk: Risk) -> Arc<Risk> {
        let risk = Arc::new(risk);
        self.risks.push(risk.clone());
        risk
    }

    pub fn find_risk_by_id(&self, id: &RiskId) -> Option<Arc<Risk>> {
        self.risks.iter().find(|r| r.id() == id).cloned()
    }

    pub fn risks(&self) -> &[Arc<Risk>] {
        &self.risks
    }

    pub fn len(&self) -> usize {
        self.risks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.risks.is_empty()
    }

    pub fn stats(&self) -> RiskStats {
        RiskStats::from_risks(&self.risks)
    }

    pub fn heat_map(&self) -> HeatMap {
        HeatMap::from_risks(&self.risks)
    }

    pub fn coverage_score(&self) -> f64 {
        coverage_score(&self.risks)
    }
}
