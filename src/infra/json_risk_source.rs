use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::app::{RiskSource, RiskSourceError};
use crate::domain::riskregister::risk_register::RiskRegister;

use super::json_risk_record_v1::JsonRiskRecordV1;

/// Risk source backed by a JSON document: the array of risk records the
/// upstream store serves from its `GET /api/risks` endpoint, saved to disk.
#[derive(Clone)]
pub struct JsonFileRiskSource {
    path: PathBuf,
}

#[derive(Error, Debug)]
pub(in crate::infra) enum JsonRiskSourceError {
    #[error("error reading the risk register document: {0}")]
    DocumentRead(#[from] std::io::Error),

    #[error("error deserializing the risk register document: {0}")]
    DocumentDeserialization(#[from] serde_json::Error),
}

impl From<JsonRiskSourceError> for RiskSourceError {
    fn from(value: JsonRiskSourceError) -> Self {
        RiskSourceError::FetchFailed(Box::new(value))
    }
}

impl JsonFileRiskSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<RiskRegister, JsonRiskSourceError> {
        let contents = tokio::fs::read(&self.path).await?;
        let records: Vec<JsonRiskRecordV1> = serde_json::from_slice(&contents)?;

        debug!(
            "loaded {} risk records from {}",
            records.len(),
            self.path.display()
        );

        Ok(RiskRegister::from(records))
    }
}

#[async_trait::async_trait]
impl RiskSource for JsonFileRiskSource {
    async fn fetch_risks(&self) -> Result<RiskRegister, RiskSourceError> {
        Ok(self.load().await?)
    }
}
