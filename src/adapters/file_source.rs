use crate::domain::model::ServiceOption;
use crate::domain::ports::{OptionSource, SourceKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a JSON array of options from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub fn parse_options(content: &str) -> Result<Vec<ServiceOption>> {
    Ok(serde_json::from_str(content)?)
}

#[async_trait]
impl OptionSource for JsonFileSource {
    fn kind(&self) -> SourceKind {
        SourceKind::LocalFile
    }

    async fn load(&self) -> Result<Vec<ServiceOption>> {
        tracing::debug!("Reading options from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        let options = parse_options(&content)?;
        tracing::info!("📁 Loaded {} options from {}", options.len(), self.path.display());
        Ok(options)
    }
}
