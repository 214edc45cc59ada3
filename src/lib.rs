pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{JsonFileSource, PlacesConfig, PlacesSource, SampleSource};
pub use config::{Settings, SourceSelection};
pub use core::engine::{CompareEngine, Comparison};
pub use core::ranking::{best_rated, best_value, cheapest, Summary};
pub use core::repository::ServiceRepository;
pub use domain::model::ServiceOption;
pub use utils::error::{AppError, Result};
