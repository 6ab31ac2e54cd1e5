mod csv_register_exporter;
mod json_register_exporter;
mod json_risk_record_v1;
mod json_risk_source;
mod keyword_control_mapper;

pub use csv_register_exporter::CsvRegisterExporter;
pub use json_register_exporter::JsonRegisterExporter;
pub use json_risk_source::JsonFileRiskSource;
pub use keyword_control_mapper::KeywordControlMapper;
