use crate::domain::model::ServiceOption;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where a batch of options comes from.
///
/// Catalog sources (`LocalFile`, `Sample`) hold every service and are filtered
/// through a repository; `Places` already answers a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    LocalFile,
    Sample,
    Places,
}

impl SourceKind {
    pub fn is_catalog(&self) -> bool {
        matches!(self, SourceKind::LocalFile | SourceKind::Sample)
    }
}

#[async_trait]
pub trait OptionSource: Send + Sync {
    fn kind(&self) -> SourceKind;
    async fn load(&self) -> Result<Vec<ServiceOption>>;
}
