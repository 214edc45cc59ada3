pub mod engine;
pub mod ranking;
pub mod report;
pub mod repository;

pub use crate::domain::model::ServiceOption;
pub use crate::domain::ports::{OptionSource, SourceKind};
pub use crate::utils::error::Result;
