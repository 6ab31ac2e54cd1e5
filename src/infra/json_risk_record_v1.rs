use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::riskregister::{
    framework::Framework, risk::Risk, risk_id::RiskId, risk_register::RiskRegister,
    risk_status::RiskStatus, scanner_type::ScannerType, treatment::Treatment,
    tsc_category::TscCategory,
};

/// One risk record as the upstream risk store serializes it. Every field
/// except `id` and `name` is optional on the wire; conversion resolves the
/// documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRiskRecordV1 {
    pub id: JsonRiskIdV1,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub likelihood: u32,
    #[serde(default)]
    pub impact: u32,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub controls: Vec<String>,
    #[serde(default)]
    pub treatment: Option<String>,
    #[serde(default)]
    pub action_items: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub scanner_type: Option<String>,
}

/// The store assigns numeric ids to manually entered risks and string ids to
/// scanner findings; both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRiskIdV1 {
    Integer(u64),
    Text(String),
}

impl From<JsonRiskIdV1> for RiskId {
    fn from(value: JsonRiskIdV1) -> Self {
        match value {
            JsonRiskIdV1::Integer(id) => RiskId::from(id),
            JsonRiskIdV1::Text(id) => RiskId::new(id),
        }
    }
}

impl From<Vec<JsonRiskRecordV1>> for RiskRegister {
    fn from(records: Vec<JsonRiskRecordV1>) -> Self {
        let mut register = RiskRegister::new();
        for record in records {
            add_record(&mut register, record);
        }
        register
    }
}

fn add_record(register: &mut RiskRegister, record: JsonRiskRecordV1) {
    register.add_risk(
        record.id.into(),
        record.name,
        record.description,
        record.likelihood,
        record.impact,
        record.score,
        record.controls,
        record
            .treatment
            .as_deref()
            .map(Treatment::from_tag)
            .unwrap_or_default(),
        record.action_items,
        record.owner.filter(|owner| !owner.is_empty()),
        record.due_date.as_deref().and_then(parse_due_date),
        record
            .status
            .as_deref()
            .map(RiskStatus::from_tag)
            .unwrap_or_default(),
        record
            .framework
            .as_deref()
            .map(Framework::from_tag)
            .unwrap_or_default(),
        record
            .category
            .as_deref()
            .map(TscCategory::from_tag)
            .unwrap_or_default(),
        record
            .scanner_type
            .as_deref()
            .map(ScannerType::from_tag)
            .unwrap_or_default(),
    );
}

fn parse_due_date(value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("discarding unparseable due date: {value:?}");
            None
        }
    }
}

impl From<&Risk> for JsonRiskRecordV1 {
    fn from(risk: &Risk) -> Self {
        JsonRiskRecordV1 {
            id: JsonRiskIdV1::Text(risk.id().to_string()),
            name: risk.name().to_string(),
            description: risk.description().map(str::to_string),
            likelihood: risk.likelihood(),
            impact: risk.impact(),
            score: Some(risk.score()),
            controls: risk.controls().to_vec(),
            treatment: Some(risk.treatment().to_string()),
            action_items: risk.action_items().to_string(),
            owner: risk.owner().map(str::to_string),
            due_date: risk.due_date().map(|d| d.format("%Y-%m-%d").to_string()),
            status: Some(risk.status().to_string()),
            framework: Some(risk.framework().tag().to_string()),
            category: Some(risk.category().tag().to_string()),
            scanner_type: Some(risk.scanner_type().to_string()),
        }
    }
}
