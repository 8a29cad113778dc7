use crate::models::Profile;
use std::collections::HashSet;

/// Distinct languages across all profiles
///
/// Order is unspecified; use [`sorted_languages`] for display.
pub fn extract_languages(profiles: &[Profile]) -> HashSet<String> {
    profiles
        .iter()
        .flat_map(|profile| profile.languages.iter().cloned())
        .collect()
}

/// Distinct languages in lexicographic order, for populating the language control
pub fn sorted_languages(profiles: &[Profile]) -> Vec<String> {
    let mut languages: Vec<String> = extract_languages(profiles).into_iter().collect();
    languages.sort();
    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_languages(id: &str, languages: &[&str]) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Profile {}", id),
            employer: String::new(),
            college: String::new(),
            location: String::new(),
            bio: String::new(),
            experience: 1.0,
            pay: 50.0,
            min_hours_week: 10.0,
            skills: vec![],
            languages: languages.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_extract_deduplicates() {
        let profiles = vec![
            profile_with_languages("1", &["Go", "Rust"]),
            profile_with_languages("2", &["Go"]),
        ];

        let languages = extract_languages(&profiles);

        let expected: HashSet<String> = ["Go", "Rust"].iter().map(|s| s.to_string()).collect();
        assert_eq!(languages, expected);
    }

    #[test]
    fn test_extract_empty_collection() {
        assert!(extract_languages(&[]).is_empty());
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let profiles = vec![profile_with_languages("1", &["go", "Go"])];
        assert_eq!(extract_languages(&profiles).len(), 2);
    }

    #[test]
    fn test_sorted_languages() {
        let profiles = vec![
            profile_with_languages("1", &["Rust", "Go"]),
            profile_with_languages("2", &["Elixir", "Go"]),
        ];

        assert_eq!(sorted_languages(&profiles), vec!["Elixir", "Go", "Rust"]);
    }
}
