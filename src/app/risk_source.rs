use crate::domain::riskregister::risk_register::RiskRegister;
use thiserror::Error;

/// Seam to the upstream risk store. Implementations fetch the full register;
/// the engine consumes it read-only.
#[async_trait::async_trait]
pub trait RiskSource {
    async fn fetch_risks(&self) -> Result<RiskRegister, RiskSourceError>;
}

#[derive(Error, Debug)]
pub enum RiskSourceError {
    #[error("unable to fetch risks from the risk store: {0}")]
    FetchFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}
