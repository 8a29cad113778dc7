use crate::models::{Profile, FilterState, QuerySnapshot};
use crate::core::filters::matches_lowered_profile;

/// Result of evaluating a query against the full collection
#[derive(Debug)]
pub struct QueryResult<'a> {
    pub profiles: Vec<&'a Profile>,
    pub total_profiles: usize,
}

/// Filter the profile collection by search term and filter state
///
/// Stable: matching profiles keep their original relative order. No ranking.
/// Never fails; an empty collection or an inverted range yields an empty
/// result.
///
/// # Arguments
/// * `profiles` - The full profile collection
/// * `search_term` - Free text, matched case-insensitively against name and skills
/// * `filters` - Range and language constraints
pub fn filter_profiles<'a>(
    profiles: &'a [Profile],
    search_term: &str,
    filters: &FilterState,
) -> Vec<&'a Profile> {
    let term = search_term.to_lowercase();

    profiles
        .iter()
        .filter(|profile| matches_lowered_profile(profile, &term, filters))
        .collect()
}

/// Evaluate a controller snapshot, keeping the collection size alongside the matches
pub fn run_query<'a>(profiles: &'a [Profile], snapshot: &QuerySnapshot) -> QueryResult<'a> {
    let filters = &snapshot.filters;
    if filters.experience.is_inverted()
        || filters.pay.is_inverted()
        || filters.min_hours_week.is_inverted()
    {
        tracing::debug!("Inverted range in filters, no profile can match: {:?}", filters);
    }

    let matches = filter_profiles(profiles, &snapshot.search_term, filters);

    tracing::debug!(
        "Query evaluated: term={:?}, languages={:?}, visible={}/{}",
        snapshot.search_term,
        snapshot.filters.languages,
        matches.len(),
        profiles.len()
    );

    QueryResult {
        profiles: matches,
        total_profiles: profiles.len(),
    }
}
