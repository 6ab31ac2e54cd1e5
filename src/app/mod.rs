mod commands;
mod control_mapper;
mod queries;
mod register_exporter;
mod risk_source;

pub mod markdown;

pub use commands::CommandExecutor;
pub use control_mapper::{ControlMapError, ControlMapper};
pub use queries::QueryExecutor;
pub use register_exporter::{ExportError, ExportFormat, RegisterExporter};
pub use risk_source::{RiskSource, RiskSourceError};
