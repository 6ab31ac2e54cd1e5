use thiserror::Error;

use crate::app::{ExportError, RegisterExporter};
use crate::domain::riskregister::risk_register::RiskRegister;

use super::json_risk_record_v1::JsonRiskRecordV1;

/// Exports the register back to its wire shape as a pretty-printed JSON
/// array, suitable for feeding into another `riskmap` invocation.
pub struct JsonRegisterExporter;

#[derive(Error, Debug)]
pub(in crate::infra) enum JsonExportError {
    #[error("error serializing the risk register: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<JsonExportError> for ExportError {
    fn from(value: JsonExportError) -> Self {
        ExportError::ExportFailed(Box::new(value))
    }
}

impl RegisterExporter for JsonRegisterExporter {
    fn export(&self, register: &RiskRegister) -> Result<String, ExportError> {
        let records: Vec<JsonRiskRecordV1> = register
            .risks()
            .iter()
            .map(|risk| JsonRiskRecordV1::from(risk.as_ref()))
            .collect();

        Ok(serde_json::to_string_pretty(&records).map_err(JsonExportError::from)?)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::riskregister::{
        framework::Framework, risk_id::RiskId, risk_status::RiskStatus,
        scanner_type::ScannerType, treatment::Treatment, tsc_category::TscCategory,
    };

    #[test]
    fn empty_register_exports_an_empty_array() {
        let exported = JsonRegisterExporter.export(&RiskRegister::new()).unwrap();
        assert_eq!(exported, "[]");
    }

    #[test]
    fn exported_register_parses_back_with_the_same_values() {
        let mut register = RiskRegister::new();
        register.add_risk(
            RiskId::from(1u64),
            "Missing Email SPF Record".to_string(),
            None,
            4,
            4,
            None,
            vec!["CC6.6".to_string()],
            Treatment::Mitigate,
            String::new(),
            Some("bob".to_string()),
            None,
            RiskStatus::Open,
            Framework::Soc2,
            TscCategory::Security,
            ScannerType::CloudConfiguration,
        );

        let exported = JsonRegisterExporter.export(&register).unwrap();
        let records: Vec<JsonRiskRecordV1> = serde_json::from_str(&exported).unwrap();
        let reparsed = RiskRegister::from(records);

        let risk = reparsed.find_risk_by_id(&RiskId::from("1")).unwrap();
        assert_eq!(risk.name(), "Missing Email SPF Record");
        assert_eq!(risk.score(), 16);
        assert_eq!(risk.owner(), Some("bob"));
        assert_eq!(risk.scanner_type(), ScannerType::CloudConfiguration);
    }
}
