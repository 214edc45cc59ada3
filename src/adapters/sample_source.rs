use crate::adapters::file_source::parse_options;
use crate::domain::model::ServiceOption;
use crate::domain::ports::{OptionSource, SourceKind};
use crate::utils::error::Result;
use async_trait::async_trait;

const SAMPLE_SERVICES: &str = include_str!("../data/services.json");

/// Sample catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OptionSource for SampleSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Sample
    }

    async fn load(&self) -> Result<Vec<ServiceOption>> {
        let options = parse_options(SAMPLE_SERVICES)?;
        tracing::debug!("Loaded {} sample options", options.len());
        Ok(options)
    }
}
