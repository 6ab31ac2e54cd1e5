use crate::domain::riskregister::framework::Framework;
use thiserror::Error;

/// Maps a risk to the compliance controls that mitigate it, for a given
/// framework. Returns control ids from that framework's catalog.
#[async_trait::async_trait]
pub trait ControlMapper {
    async fn map_controls(
        &self,
        risk_name: &str,
        risk_description: Option<&str>,
        framework: Framework,
    ) -> Result<Vec<String>, ControlMapError>;
}

#[derive(Error, Debug)]
pub enum ControlMapError {
    #[error("unable to map controls: {0}")]
    MappingFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}
