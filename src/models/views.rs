use serde::{Deserialize, Serialize};
use crate::models::domain::{
    FilterState, NumericRange, Profile, DEFAULT_EXPERIENCE, DEFAULT_MIN_HOURS_WEEK, DEFAULT_PAY,
};

/// List view payload for a single profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCard {
    pub id: String,
    pub name: String,
    pub employer: String,
    pub location: String,
    pub experience: f64,
    pub pay: f64,
    #[serde(rename = "minHoursWeek")]
    pub min_hours_week: f64,
    pub skills: Vec<String>,
}

impl From<&Profile> for ProfileCard {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            employer: profile.employer.clone(),
            location: profile.location.clone(),
            experience: profile.experience,
            pay: profile.pay,
            min_hours_week: profile.min_hours_week,
            skills: profile.skills.clone(),
        }
    }
}

/// Drawer payload for the selected profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDetail {
    pub id: String,
    pub name: String,
    pub employer: String,
    pub college: String,
    pub location: String,
    pub bio: String,
    pub skills: Vec<String>,
}

impl From<&Profile> for ProfileDetail {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            employer: profile.employer.clone(),
            college: profile.college.clone(),
            location: profile.location.clone(),
            bio: profile.bio.clone(),
            skills: profile.skills.clone(),
        }
    }
}

/// Bounds and options for the filter panel controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterControls {
    pub experience: NumericRange,
    pub pay: NumericRange,
    #[serde(rename = "minHoursWeek")]
    pub min_hours_week: NumericRange,
    pub languages: Vec<String>,
}

impl FilterControls {
    /// Slider bounds match the filter defaults
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            experience: DEFAULT_EXPERIENCE,
            pay: DEFAULT_PAY,
            min_hours_week: DEFAULT_MIN_HOURS_WEEK,
            languages,
        }
    }
}

/// Everything a presentation layer needs to render one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryView {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub filters: FilterState,
    pub controls: FilterControls,
    pub profiles: Vec<ProfileCard>,
    #[serde(rename = "totalProfiles")]
    pub total_profiles: usize,
    #[serde(rename = "visibleProfiles")]
    pub visible_profiles: usize,
    pub selected: Option<ProfileDetail>,
    #[serde(rename = "filtersOpen")]
    pub filters_open: bool,
}
