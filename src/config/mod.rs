#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::google_places::{PlacesConfig, PLACES_TEXTSEARCH_URL};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_LANGUAGE: &str = "es";
pub const DEFAULT_MAX_RESULTS: usize = 20;
pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_TOP: usize = 5;
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(2);

/// Which collaborator supplies the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    LocalFile(String),
    Sample,
    Places,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacesSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub location: Option<String>,
    pub language: String,
    pub max_results: usize,
    pub currency: String,
    pub page_delay: Duration,
}

impl Default for PlacesSettings {
    fn default() -> Self {
        Self {
            endpoint: PLACES_TEXTSEARCH_URL.to_string(),
            api_key: None,
            location: None,
            language: DEFAULT_LANGUAGE.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            currency: DEFAULT_CURRENCY.to_string(),
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }
}

/// Fully resolved run settings: command line first, then config file, then defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub service: String,
    pub source: SourceSelection,
    pub places: PlacesSettings,
    /// Rows in the detailed ranking; `0` shows every option.
    pub top: usize,
}

impl Settings {
    /// Builds the Places request configuration; fails without an API key.
    pub fn places_config(&self) -> Result<PlacesConfig> {
        let api_key = validation::required("api_key", &self.places.api_key)?;

        Ok(PlacesConfig {
            endpoint: self.places.endpoint.clone(),
            api_key: api_key.clone(),
            service: self.service.clone(),
            location: self.places.location.clone(),
            language: self.places.language.clone(),
            max_results: self.places.max_results,
            currency: self.places.currency.clone(),
            page_delay: self.places.page_delay,
        })
    }
}

impl Validate for Settings {
    /// Catalog sources accept any service name: an unknown or blank one ends
    /// up as a not-found comparison listing the available services.
    fn validate(&self) -> Result<()> {
        match &self.source {
            SourceSelection::LocalFile(path) => validation::data_path("data", path),
            SourceSelection::Sample => Ok(()),
            SourceSelection::Places => {
                validation::not_blank("service", &self.service)?;
                validation::at_least("max_results", self.places.max_results, 1)?;
                validation::endpoint_url("places_endpoint", &self.places.endpoint)
            }
        }
    }
}
