use crate::models::{FilterState, NumericRange, QuerySnapshot};

/// Owns the mutable filter state and search term for one session
///
/// Setters apply in place; [`FilterController::snapshot`] hands the query
/// engine an immutable copy.
///
/// Clearing the language selection also clears the search term. This
/// coupling is part of the filter panel's observable behavior.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterController {
    search_term: String,
    filters: FilterState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a configured state, e.g. an initial query from settings
    ///
    /// The language rule holds from the start: with no language selected the
    /// search term is dropped.
    pub fn with_state(search_term: impl Into<String>, filters: FilterState) -> Self {
        let mut controller = Self {
            search_term: search_term.into(),
            filters,
        };

        if controller.filters.languages.is_empty() {
            controller.clear_search_term();
        }

        controller
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn snapshot(&self) -> QuerySnapshot {
        QuerySnapshot {
            search_term: self.search_term.clone(),
            filters: self.filters.clone(),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        tracing::debug!("Search term set to {:?}", self.search_term);
    }

    pub fn set_experience(&mut self, range: NumericRange) {
        self.filters.experience = range;
        tracing::debug!("Experience filter set to {:?}", range);
    }

    pub fn set_pay(&mut self, range: NumericRange) {
        self.filters.pay = range;
        tracing::debug!("Pay filter set to {:?}", range);
    }

    pub fn set_min_hours_week(&mut self, range: NumericRange) {
        self.filters.min_hours_week = range;
        tracing::debug!("Minimum hours filter set to {:?}", range);
    }

    /// Replace the language selection
    ///
    /// An empty selection clears the search term as well.
    pub fn set_languages<I, S>(&mut self, languages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.languages = languages.into_iter().map(Into::into).collect();
        tracing::debug!("Language filter set to {:?}", self.filters.languages);

        if self.filters.languages.is_empty() {
            self.clear_search_term();
        }
    }

    /// Restore every filter to its default; the search term is cleared too
    pub fn reset_to_defaults(&mut self) {
        self.filters = FilterState::default();
        self.clear_search_term();
        tracing::debug!("Filters reset to defaults");
    }

    fn clear_search_term(&mut self) {
        if !self.search_term.is_empty() {
            tracing::debug!("Clearing search term {:?}", self.search_term);
        }
        self.search_term.clear();
    }
}
