use crate::models::{DirectoryView, FilterControls, Profile, ProfileCard, ProfileDetail};
use crate::core::{
    controller::FilterController,
    facets::sorted_languages,
    query::run_query,
};
use thiserror::Error;

/// Errors raised by session operations
#[derive(Debug, Error, PartialEq)]
pub enum DirectoryError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
}

/// One user's view of the directory
///
/// Owns the profile collection (never mutated), the language facet computed
/// at construction, the filter controller, the selected profile and whether
/// the filter panel is open.
#[derive(Debug, Clone)]
pub struct DirectorySession {
    profiles: Vec<Profile>,
    languages: Vec<String>,
    controller: FilterController,
    selected_id: Option<String>,
    filters_open: bool,
}

impl DirectorySession {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self::with_controller(profiles, FilterController::new())
    }

    pub fn with_controller(profiles: Vec<Profile>, controller: FilterController) -> Self {
        let languages = sorted_languages(&profiles);

        tracing::info!(
            "Directory session created with {} profiles and {} languages",
            profiles.len(),
            languages.len()
        );

        Self {
            profiles,
            languages,
            controller,
            selected_id: None,
            filters_open: false,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Language options for the filter control, sorted
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn controller(&self) -> &FilterController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FilterController {
        &mut self.controller
    }

    /// Profiles passing the current search term and filters, in collection order
    pub fn visible_profiles(&self) -> Vec<&Profile> {
        run_query(&self.profiles, &self.controller.snapshot()).profiles
    }

    /// Open the detail view for a profile
    pub fn select_profile(&mut self, id: &str) -> Result<&Profile, DirectoryError> {
        let profile = self
            .profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DirectoryError::ProfileNotFound(id.to_string()))?;

        tracing::debug!("Selected profile {}", id);
        self.selected_id = Some(profile.id.clone());
        Ok(profile)
    }

    pub fn selected_profile(&self) -> Option<&Profile> {
        let id = self.selected_id.as_deref()?;
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn open_filters(&mut self) {
        self.filters_open = true;
    }

    pub fn close_filters(&mut self) {
        self.filters_open = false;
    }

    pub fn filters_open(&self) -> bool {
        self.filters_open
    }

    /// Reset every filter (and with it the search term) and close the panel
    pub fn clear_filters(&mut self) {
        self.controller.reset_to_defaults();
        self.filters_open = false;
    }

    /// Render the current state for the presentation layer
    pub fn view(&self) -> DirectoryView {
        let snapshot = self.controller.snapshot();
        let result = run_query(&self.profiles, &snapshot);

        DirectoryView {
            profiles: result.profiles.iter().map(|p| ProfileCard::from(*p)).collect(),
            total_profiles: result.total_profiles,
            visible_profiles: result.profiles.len(),
            search_term: snapshot.search_term,
            filters: snapshot.filters,
            controls: FilterControls::new(self.languages.clone()),
            selected: self.selected_profile().map(ProfileDetail::from),
            filters_open: self.filters_open,
        }
    }
}
