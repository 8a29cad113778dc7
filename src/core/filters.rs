use crate::models::{Profile, FilterState};

/// Check if a profile matches the free-text search term
///
/// An empty term always matches. Otherwise the lower-cased term must be a
/// substring of the lower-cased name or of at least one lower-cased skill.
#[inline]
pub fn matches_search(profile: &Profile, term: &str) -> bool {
    matches_lowered_search(profile, &term.to_lowercase())
}

/// Same as [`matches_search`] with `term` already lower-cased
#[inline]
pub(crate) fn matches_lowered_search(profile: &Profile, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    if profile.name.to_lowercase().contains(term) {
        return true;
    }

    profile
        .skills
        .iter()
        .any(|skill| skill.to_lowercase().contains(term))
}

/// Check the three numeric range filters, each inclusive on both bounds
#[inline]
pub fn matches_ranges(profile: &Profile, filters: &FilterState) -> bool {
    if !filters.experience.contains(profile.experience) {
        return false;
    }

    if !filters.pay.contains(profile.pay) {
        return false;
    }

    if !filters.min_hours_week.contains(profile.min_hours_week) {
        return false;
    }

    true
}

/// Check the language facet
///
/// Conjunctive: the profile must list every selected language.
#[inline]
pub fn matches_languages(profile: &Profile, filters: &FilterState) -> bool {
    filters
        .languages
        .iter()
        .all(|language| profile.speaks(language))
}

/// Full inclusion test for one profile
#[inline]
pub fn matches_profile(profile: &Profile, term: &str, filters: &FilterState) -> bool {
    matches_lowered_profile(profile, &term.to_lowercase(), filters)
}

/// Same as [`matches_profile`] with `term` already lower-cased
#[inline]
pub(crate) fn matches_lowered_profile(profile: &Profile, term: &str, filters: &FilterState) -> bool {
    matches_lowered_search(profile, term)
        && matches_ranges(profile, filters)
        && matches_languages(profile, filters)
}
