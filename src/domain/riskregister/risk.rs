use crate::domain::riskregister::framework::Framework;
use crate::domain::riskregister::risk_id::RiskId;
use crate::domain::riskregister::risk_status::RiskStatus;
use crate::domain::riskregister::scanner_type::ScannerType;
use crate::domain::riskregister::scoring::risk_score;
use crate::domain::riskregister::severity::Severity;
use crate::domain::riskregister::treatment::Treatment;
use crate::domain::riskregister::tsc_category::TscCategory;
use chrono::NaiveDate;
use std::hash::{Hash, Hasher};

/// A tracked compliance risk, consumed read-only from the upstream store.
#[derive(Clone, Debug)]
pub struct Risk {
    id: RiskId,
    name: String,
    description: Option<String>,
    likelihood: u32,
    impact: u32,
    score: u32,
    controls: Vec<String>,
    treatment: Treatment,
    action_items: String,
    owner: Option<String>,
    due_date: Option<NaiveDate>,
    status: RiskStatus,
    framework: Framework,
    category: TscCategory,
    scanner_type: ScannerType,
}

impl Risk {
    #[allow(clippy::too_many_arguments)]
    pub(in crate::domain::riskregister) fn new(
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
    ) -> Self {
        Self {
            id,
            name,
            description,
            likelihood,
            impact,
            // Invariant: score == likelihood * impact; recomputed when the
            // store omits it.
            score: score.unwrap_or_else(|| risk_score(likelihood, impact)),
            controls,
            treatment,
            action_items,
            owner,
            due_date,
            status,
            framework,
            category,
            scanner_type,
        }
    }

    pub fn id(&self) -> &RiskId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn likelihood(&self) -> u32 {
        self.likelihood
    }

    pub fn impact(&self) -> u32 {
        self.impact
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn severity(&self) -> Severity {
        Severity::from_score(self.score)
    }

    pub fn controls(&self) -> &[String] {
        &self.controls
    }

    pub fn treatment(&self) -> Treatment {
        self.treatment
    }

    pub fn action_items(&self) -> &str {
        &self.action_items
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Owner label for grouping and display; unowned risks resolve to
    /// `"Unassigned"`.
    pub fn owner_or_unassigned(&self) -> &str {
        self.owner.as_deref().unwrap_or("Unassigned")
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn status(&self) -> RiskStatus {
        self.status
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn category(&self) -> TscCategory {
        self.category
    }

    pub fn scanner_type(&self) -> ScannerType {
        self.scanner_type
    }

    /// Returns a copy of this risk with its mapped controls replaced.
    pub fn with_controls(&self, controls: Vec<String>) -> Risk {
        Risk {
            controls,
            ..self.clone()
        }
    }
}

impl PartialEq for Risk {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Risk {}

impl Hash for Risk {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
