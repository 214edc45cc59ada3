// Adapters layer: concrete option sources (local JSON file, bundled sample, Google Places).

pub mod file_source;
pub mod google_places;
pub mod sample_source;

pub use file_source::JsonFileSource;
pub use google_places::{PlacesConfig, PlacesSource};
pub use sample_source::SampleSource;
