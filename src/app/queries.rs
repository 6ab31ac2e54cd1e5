use crate::domain::riskregister::heat_map::HeatMap;
use crate::domain::riskregister::risk_register::RiskRegister;
use crate::domain::riskregister::stats::RiskStats;

use super::{RiskSource, RiskSourceError};

pub struct QueryExecutor<S> {
    risk_source: S,
}

impl<S> QueryExecutor<S>
where
    S: RiskSource,
{
    pub fn new(risk_source: S) -> Self {
        Self { risk_source }
    }

    pub async fn fetch_register(&self) -> Result<RiskRegister, RiskSourceError> {
        self.risk_source.fetch_risks().await
    }

    pub async fn register_stats(&self) -> Result<RiskStats, RiskSourceError> {
        Ok(self.fetch_register().await?.stats())
    }

    pub async fn register_heat_map(&self) -> Result<HeatMap, RiskSourceError> {
        Ok(self.fetch_register().await?.heat_map())
    }
}
