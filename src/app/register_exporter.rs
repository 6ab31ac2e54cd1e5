use crate::domain::riskregister::risk_register::RiskRegister;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Formats a risk register for download. Implementations are pure
/// serializers; writing the result anywhere is the caller's concern.
pub trait RegisterExporter {
    fn export(&self, register: &RiskRegister) -> Result<String, ExportError>;

    /// Extension used when the caller derives a file name for the export.
    fn file_extension(&self) -> &'static str;
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ExportFormat {
    Csv,
    Json,
    Markdown,
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ExportFormat::Csv => "csv",
                ExportFormat::Json => "json",
                ExportFormat::Markdown => "markdown",
            }
        )
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("unable to export the risk register: {0}")]
    ExportFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}
