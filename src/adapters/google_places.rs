use crate::domain::model::ServiceOption;
use crate::domain::ports::{OptionSource, SourceKind};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const PLACES_TEXTSEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const UNNAMED_PROVIDER: &str = "Proveedor sin nombre";
const PRICE_LEVEL_UNIT: &str = "aprox. (nivel Google)";

/// Rough amounts for Google's 0-4 price levels.
const PRICE_LEVEL_TO_AMOUNT: [(u8, f64); 5] = [
    (0, 1.0),   // free
    (1, 15.0),  // inexpensive
    (2, 40.0),  // moderate
    (3, 75.0),  // expensive
    (4, 150.0), // very expensive
];

#[derive(Debug, Clone, PartialEq)]
pub struct PlacesConfig {
    pub endpoint: String,
    pub api_key: String,
    pub service: String,
    pub location: Option<String>,
    pub language: String,
    pub max_results: usize,
    pub currency: String,
    /// Wait before a `next_page_token` becomes usable.
    pub page_delay: Duration,
}

impl PlacesConfig {
    pub fn query(&self) -> String {
        match &self.location {
            Some(location) => format!("{} en {}", self.service, location),
            None => self.service.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<Place>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Place {
    name: Option<String>,
    rating: Option<f64>,
    user_ratings_total: Option<u64>,
    price_level: Option<u8>,
    place_id: Option<String>,
    formatted_address: Option<String>,
}

pub fn price_from_level(price_level: Option<u8>) -> Option<f64> {
    let level = price_level?;
    PRICE_LEVEL_TO_AMOUNT
        .iter()
        .find(|(candidate, _)| *candidate == level)
        .map(|(_, amount)| *amount)
}

fn build_notes(place: &Place) -> Option<String> {
    let mut components = Vec::new();
    if let Some(address) = place.formatted_address.as_deref().filter(|a| !a.is_empty()) {
        components.push(address.to_string());
    }
    if let Some(level) = place.price_level {
        components.push(format!("Nivel de precio Google: {}", level));
    }

    if components.is_empty() {
        None
    } else {
        Some(components.join(" · "))
    }
}

/// Places without a rating or review count are skipped.
fn place_to_option(place: Place, service: &str, currency: &str) -> Option<ServiceOption> {
    let rating = place.rating?;
    let review_count = i64::try_from(place.user_ratings_total?).unwrap_or(i64::MAX);
    let price = price_from_level(place.price_level);
    let notes = build_notes(&place);
    let link = place
        .place_id
        .filter(|id| !id.is_empty())
        .map(|id| format!("https://www.google.com/maps/place/?q=place_id:{}", id));

    Some(
        ServiceOption::new(
            service,
            place.name.unwrap_or_else(|| UNNAMED_PROVIDER.to_string()),
            rating,
            review_count,
        )
        .with_price(price)
        .with_currency(price.map(|_| currency.to_string()))
        .with_pricing_unit(price.map(|_| PRICE_LEVEL_UNIT.to_string()))
        .with_link(link)
        .with_notes(notes),
    )
}

/// Live provider search through Google Places Text Search.
pub struct PlacesSource {
    config: PlacesConfig,
    client: Client,
}

impl PlacesSource {
    pub fn new(config: PlacesConfig) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { config, client })
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> Result<TextSearchResponse> {
        let mut params = vec![
            ("key", self.config.api_key.clone()),
            ("language", self.config.language.clone()),
        ];
        match page_token {
            Some(token) => params.push(("pagetoken", token.to_string())),
            None => params.push(("query", self.config.query())),
        }

        tracing::debug!("Requesting Places page (token: {})", page_token.is_some());
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Places response status: {}", response.status());
        Ok(response.json().await?)
    }
}

#[async_trait]
impl OptionSource for PlacesSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Places
    }

    async fn load(&self) -> Result<Vec<ServiceOption>> {
        let mut results = Vec::new();
        let mut next_page_token: Option<String> = None;

        tracing::info!("🔎 Searching Google Places for '{}'", self.config.query());

        while results.len() < self.config.max_results {
            let payload = self.fetch_page(next_page_token.as_deref()).await?;

            match payload.status.as_deref() {
                Some("OK") => {}
                Some("ZERO_RESULTS") => break,
                status => {
                    let status = status.unwrap_or_default().to_string();
                    let message = payload
                        .error_message
                        .filter(|m| !m.is_empty())
                        .or_else(|| Some(status.clone()).filter(|s| !s.is_empty()))
                        .unwrap_or_else(|| "Error desconocido".to_string());
                    return Err(AppError::PlacesStatusError { status, message });
                }
            }

            for place in payload.results {
                let Some(option) =
                    place_to_option(place, &self.config.service, &self.config.currency)
                else {
                    continue;
                };
                results.push(option);

                if results.len() >= self.config.max_results {
                    break;
                }
            }

            next_page_token = payload.next_page_token.filter(|token| !token.is_empty());
            if next_page_token.is_none() || results.len() >= self.config.max_results {
                break;
            }

            tokio::time::sleep(self.config.page_delay).await;
        }

        tracing::info!("Fetched {} providers from Google Places", results.len());
        Ok(results)
    }
}
