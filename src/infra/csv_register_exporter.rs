use csv::Writer;
use thiserror::Error;

use crate::app::{ExportError, RegisterExporter};
use crate::domain::riskregister::risk_register::RiskRegister;

/// Exports the register as CSV, one row per risk. Controls are `;`-joined
/// inside a single column; absent optional fields export as empty strings.
pub struct CsvRegisterExporter;

#[derive(Error, Debug)]
pub(in crate::infra) enum CsvExportError {
    #[error("error writing the csv record: {0}")]
    RecordWrite(#[from] csv::Error),

    #[error("error finishing the csv document: {0}")]
    DocumentFinish(String),
}

impl From<CsvExportError> for ExportError {
    fn from(value: CsvExportError) -> Self {
        ExportError::ExportFailed(Box::new(value))
    }
}

impl CsvRegisterExporter {
    fn write(&self, register: &RiskRegister) -> Result<String, CsvExportError> {
        let mut writer = Writer::from_writer(vec![]);

        writer.write_record([
            "id",
            "name",
            "description",
            "likelihood",
            "impact",
            "score",
            "controls",
            "treatment",
            "action_items",
            "owner",
            "due_date",
            "status",
            "framework",
        ])?;

        for risk in register.risks() {
            writer.write_record([
                risk.id().to_string(),
                risk.name().to_string(),
                risk.description().unwrap_or_default().to_string(),
                risk.likelihood().to_string(),
                risk.impact().to_string(),
                risk.score().to_string(),
                risk.controls().join(";"),
                risk.treatment().to_string(),
                risk.action_items().to_string(),
                risk.owner().unwrap_or_default().to_string(),
                risk.due_date()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                risk.status().to_string(),
                risk.framework().to_string(),
            ])?;
        }

        let data = writer
            .into_inner()
            .map_err(|e| CsvExportError::DocumentFinish(e.to_string()))?;
        String::from_utf8(data).map_err(|e| CsvExportError::DocumentFinish(e.to_string()))
    }
}

impl RegisterExporter for CsvRegisterExporter {
    fn export(&self, register: &RiskRegister) -> Result<String, ExportError> {
        Ok(self.write(register)?)
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }
}
