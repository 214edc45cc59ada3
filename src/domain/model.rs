use serde::{Deserialize, Serialize};

/// One provider's offering for one service, as gathered from reviews.
///
/// Values are immutable once built: optional fields are attached with the
/// consuming `with_*` methods and read back through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceOption {
    service: String,
    provider: String,
    rating: f64,
    review_count: i64,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    pricing_unit: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl ServiceOption {
    pub fn new(
        service: impl Into<String>,
        provider: impl Into<String>,
        rating: f64,
        review_count: i64,
    ) -> Self {
        Self {
            service: service.into(),
            provider: provider.into(),
            rating,
            review_count,
            price: None,
            currency: None,
            pricing_unit: None,
            link: None,
            notes: None,
        }
    }

    pub fn with_price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    pub fn with_currency(mut self, currency: Option<String>) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_pricing_unit(mut self, pricing_unit: Option<String>) -> Self {
        self.pricing_unit = pricing_unit;
        self
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn review_count(&self) -> i64 {
        self.review_count
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn pricing_unit(&self) -> Option<&str> {
        self.pricing_unit.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Friendly label: `"{provider} ({service})"`.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.provider, self.service)
    }
}
