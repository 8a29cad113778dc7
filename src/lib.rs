//! Talent Directory - searchable, filterable directory of candidate profiles
//!
//! The core is a pure query engine: given the full profile collection, a
//! free-text search term and a set of filters, it returns the profiles to
//! display along with the language facet used to populate the filter panel.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_profiles, extract_languages, FilterController, DirectorySession, DirectoryError};
pub use crate::models::{Profile, FilterState, NumericRange, QuerySnapshot, DirectoryView};
pub use crate::services::{ProfileSource, JsonFileSource, LoadError};
