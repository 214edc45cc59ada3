use crate::core::repository::ServiceRepository;
use crate::domain::model::ServiceOption;
use crate::domain::ports::{OptionSource, SourceKind};
use crate::utils::error::Result;

/// Outcome of comparing one service.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    /// Options to show, already in display order.
    Found {
        service_name: String,
        options: Vec<ServiceOption>,
    },
    /// A catalog source has no bucket for the requested service.
    NotFound {
        kind: SourceKind,
        available: Vec<String>,
    },
    /// A live search came back empty.
    NoResults,
}

pub struct CompareEngine<S: OptionSource> {
    source: S,
}

impl<S: OptionSource> CompareEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn run(&self, service: &str) -> Result<Comparison> {
        let kind = self.source.kind();
        tracing::debug!("Loading options from {:?} source", kind);
        let options = self.source.load().await?;
        tracing::debug!("Loaded {} options", options.len());

        if !kind.is_catalog() {
            if options.is_empty() {
                return Ok(Comparison::NoResults);
            }
            return Ok(Comparison::Found {
                service_name: service.to_string(),
                options,
            });
        }

        let repository = ServiceRepository::new(options);
        let matches: Vec<ServiceOption> = repository
            .for_service(service)
            .into_iter()
            .cloned()
            .collect();

        let Some(first) = matches.first() else {
            let available = repository.services();
            tracing::warn!(
                "No options for '{}' ({} services available)",
                service,
                available.len()
            );
            return Ok(Comparison::NotFound { kind, available });
        };

        tracing::info!("✅ Found {} options for '{}'", matches.len(), service);
        Ok(Comparison::Found {
            service_name: first.service().to_string(),
            options: matches,
        })
    }
}
