// Service exports
pub mod loader;

pub use loader::{JsonFileSource, StaticSource, ProfileSource, LoadError, parse_profiles, validate_profiles};
