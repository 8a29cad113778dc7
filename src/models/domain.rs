use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// Candidate profile as supplied by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub employer: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[validate(range(min = 0.0))]
    pub experience: f64,
    #[validate(range(min = 0.0))]
    pub pay: f64,
    #[serde(rename = "minHoursWeek")]
    #[validate(range(min = 0.0))]
    pub min_hours_week: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Profile {
    /// Whether the profile lists the given language
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

/// Inclusive numeric range used by the slider filters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both bounds. An inverted range contains nothing.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

pub const DEFAULT_EXPERIENCE: NumericRange = NumericRange::new(0.0, 40.0);
pub const DEFAULT_PAY: NumericRange = NumericRange::new(0.0, 300.0);
pub const DEFAULT_MIN_HOURS_WEEK: NumericRange = NumericRange::new(0.0, 50.0);

/// Active filter constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default = "default_experience")]
    pub experience: NumericRange,
    #[serde(default = "default_pay")]
    pub pay: NumericRange,
    #[serde(rename = "minHoursWeek", alias = "min_hours_week", default = "default_min_hours_week")]
    pub min_hours_week: NumericRange,
    /// Empty means no constraint; otherwise every entry must be present
    #[serde(default)]
    pub languages: BTreeSet<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            experience: DEFAULT_EXPERIENCE,
            pay: DEFAULT_PAY,
            min_hours_week: DEFAULT_MIN_HOURS_WEEK,
            languages: BTreeSet::new(),
        }
    }
}

fn default_experience() -> NumericRange { DEFAULT_EXPERIENCE }
fn default_pay() -> NumericRange { DEFAULT_PAY }
fn default_min_hours_week() -> NumericRange { DEFAULT_MIN_HOURS_WEEK }

/// Immutable copy of the controller state handed to the query engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuerySnapshot {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub filters: FilterState,
}
