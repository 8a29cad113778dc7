// Core algorithm exports
pub mod controller;
pub mod facets;
pub mod filters;
pub mod query;
pub mod session;

pub use controller::FilterController;
pub use facets::{extract_languages, sorted_languages};
pub use filters::{matches_search, matches_ranges, matches_languages, matches_profile};
pub use query::{filter_profiles, run_query, QueryResult};
pub use session::{DirectorySession, DirectoryError};
