use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use itertools::Itertools;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::app::{ControlMapError, ControlMapper};
use crate::domain::riskregister::framework::Framework;

/// Control mapper that matches catalog keywords as case-insensitive
/// substrings of the risk's name and description.
///
/// Catalogs are JSON files named `<framework>_controls.json` inside the
/// catalog directory, loaded once per framework and cached.
pub struct KeywordControlMapper {
    catalog_dir: PathBuf,
    catalogs: Mutex<HashMap<&'static str, Arc<Vec<JsonControlDefinitionV1>>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(in crate::infra) struct JsonControlDefinitionV1 {
    pub id: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Error, Debug)]
pub(in crate::infra) enum KeywordControlMapperError {
    #[error("error reading the control catalog: {0}")]
    CatalogRead(#[from] std::io::Error),

    #[error("error deserializing the control catalog: {0}")]
    CatalogDeserialization(#[from] serde_json::Error),
}

impl From<KeywordControlMapperError> for ControlMapError {
    fn from(value: KeywordControlMapperError) -> Self {
        ControlMapError::MappingFailed(Box::new(value))
    }
}

impl KeywordControlMapper {
    pub fn new(catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
            catalogs: Mutex::new(HashMap::new()),
        }
    }

    async fn catalog_for(
        &self,
        framework: Framework,
    ) -> Result<Arc<Vec<JsonControlDefinitionV1>>, KeywordControlMapperError> {
        let mut catalogs = self.catalogs.lock().await;
        if let Some(catalog) = catalogs.get(framework.tag()) {
            return Ok(catalog.clone());
        }

        let path = self
            .catalog_dir
            .join(format!("{}_controls.json", framework.tag()));

        let contents = match tokio::fs::read(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "control catalog for {framework} not found at {}, mapping no controls",
                    path.display()
                );
                let empty = Arc::new(Vec::new());
                catalogs.insert(framework.tag(), empty.clone());
                return Ok(empty);
            }
            Err(e) => return Err(e.into()),
        };

        let catalog: Vec<JsonControlDefinitionV1> = serde_json::from_slice(&contents)?;
        debug!(
            "loaded {} control definitions for {framework} from {}",
            catalog.len(),
            path.display()
        );

        let catalog = Arc::new(catalog);
        catalogs.insert(framework.tag(), catalog.clone());
        Ok(catalog)
    }
}

#[async_trait::async_trait]
impl ControlMapper for KeywordControlMapper {
    async fn map_controls(
        &self,
        risk_name: &str,
        risk_description: Option<&str>,
        framework: Framework,
    ) -> Result<Vec<String>, ControlMapError> {
        let catalog = self.catalog_for(framework).await?;
        Ok(controls_matching(&catalog, risk_name, risk_description))
    }
}

/// Controls whose keywords appear in the risk text, in catalog order,
/// deduplicated.
fn controls_matching(
    catalog: &[JsonControlDefinitionV1],
    risk_name: &str,
    risk_description: Option<&str>,
) -> Vec<String> {
    let haystack = format!("{} {}", risk_name, risk_description.unwrap_or_default()).to_lowercase();

    catalog
        .iter()
        .filter(|control| {
            control
                .keywords
                .iter()
                .any(|keyword| haystack.contains(&keyword.to_lowercase()))
        })
        .map(|control| control.id.clone())
        .unique()
        .collect()
}
