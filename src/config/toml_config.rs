use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional defaults read from a TOML file.
///
/// ```toml
/// [places]
/// api_key = "${GOOGLE_MAPS_API_KEY}"
/// location = "Madrid, España"
/// language = "es"
/// max_results = 20
/// currency = "EUR"
///
/// [output]
/// top = 5
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub places: Option<PlacesSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacesSection {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub location: Option<String>,
    pub language: Option<String>,
    pub max_results: Option<usize>,
    pub currency: Option<String>,
    pub page_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub top: Option<usize>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn places(&self) -> PlacesSection {
        self.places.clone().unwrap_or_default()
    }

    pub fn top(&self) -> Option<usize> {
        self.output.as_ref().and_then(|output| output.top)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let places = self.places();

        if let Some(endpoint) = &places.endpoint {
            validation::endpoint_url("places.endpoint", endpoint)?;
        }

        if let Some(max_results) = places.max_results {
            validation::at_least("places.max_results", max_results, 1)?;
        }

        if let Some(language) = &places.language {
            validation::not_blank("places.language", language)?;
        }

        Ok(())
    }
}
