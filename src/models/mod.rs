// Model exports
pub mod domain;
pub mod views;

pub use domain::{Profile, NumericRange, FilterState, QuerySnapshot, DEFAULT_EXPERIENCE, DEFAULT_PAY, DEFAULT_MIN_HOURS_WEEK};
pub use views::{ProfileCard, ProfileDetail, FilterControls, DirectoryView};
