// Unit tests for Talent Directory

use talent_directory::core::{
    controller::FilterController,
    facets::extract_languages,
    filters::{matches_profile, matches_search},
    query::filter_profiles,
};
use talent_directory::models::{FilterState, NumericRange, Profile};
use std::collections::HashSet;

fn create_profile(
    id: &str,
    name: &str,
    skills: &[&str],
    experience: f64,
    pay: f64,
    min_hours_week: f64,
    languages: &[&str],
) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        employer: String::new(),
        college: String::new(),
        location: String::new(),
        bio: String::new(),
        experience,
        pay,
        min_hours_week,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        languages: languages.iter().map(|l| l.to_string()).collect(),
    }
}

fn ada_and_lin() -> Vec<Profile> {
    vec![
        create_profile("ada", "Ada", &["Go", "SQL"], 5.0, 80.0, 20.0, &["Go"]),
        create_profile("lin", "Lin", &["Rust"], 12.0, 150.0, 40.0, &["Rust", "Go"]),
    ]
}

fn names(result: &[&Profile]) -> Vec<String> {
    result.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_scenario_search_go() {
    let profiles = ada_and_lin();
    let result = filter_profiles(&profiles, "go", &FilterState::default());
    assert_eq!(names(&result), vec!["Ada"]);
}

#[test]
fn test_scenario_language_go() {
    let profiles = ada_and_lin();
    let filters = FilterState {
        languages: ["Go".to_string()].into_iter().collect(),
        ..FilterState::default()
    };

    let result = filter_profiles(&profiles, "", &filters);
    assert_eq!(names(&result), vec!["Ada", "Lin"]);
}

#[test]
fn test_scenario_experience_ten_to_forty() {
    let profiles = ada_and_lin();
    let filters = FilterState {
        experience: NumericRange::new(10.0, 40.0),
        ..FilterState::default()
    };

    let result = filter_profiles(&profiles, "", &filters);
    assert_eq!(names(&result), vec!["Lin"]);
}

#[test]
fn test_scenario_clearing_languages_resets_search() {
    let mut controller = FilterController::new();
    controller.set_languages(["Go"]);
    controller.set_search_term("something unrelated");

    controller.set_languages(Vec::<String>::new());

    assert_eq!(controller.search_term(), "");
}

#[test]
fn test_range_boundary_epsilon() {
    let profiles = vec![
        create_profile("at_max", "At Max", &[], 40.0, 10.0, 10.0, &[]),
        create_profile("over_max", "Over Max", &[], 40.0 + f64::EPSILON * 64.0, 10.0, 10.0, &[]),
    ];

    let result = filter_profiles(&profiles, "", &FilterState::default());
    assert_eq!(names(&result), vec!["At Max"]);
}

#[test]
fn test_language_filter_missing_one() {
    let profiles = vec![
        create_profile("1", "Polyglot", &[], 1.0, 1.0, 1.0, &["English", "French", "German"]),
        create_profile("2", "Bilingual", &[], 1.0, 1.0, 1.0, &["English", "French"]),
    ];
    let filters = FilterState {
        languages: ["English", "French", "German"].iter().map(|s| s.to_string()).collect(),
        ..FilterState::default()
    };

    let result = filter_profiles(&profiles, "", &filters);
    assert_eq!(names(&result), vec!["Polyglot"]);
}

#[test]
fn test_search_unicode_case_folding() {
    let profiles = vec![create_profile("1", "Ängel Ørsted", &["Évaluation"], 1.0, 1.0, 1.0, &[])];

    assert_eq!(filter_profiles(&profiles, "äng", &FilterState::default()).len(), 1);
    assert_eq!(filter_profiles(&profiles, "ÉVAL", &FilterState::default()).len(), 1);
}

#[test]
fn test_facet_extraction_example() {
    let profiles = vec![
        create_profile("1", "A", &[], 1.0, 1.0, 1.0, &["Go", "Rust"]),
        create_profile("2", "B", &[], 1.0, 1.0, 1.0, &["Go"]),
    ];

    let expected: HashSet<String> = ["Go", "Rust"].iter().map(|s| s.to_string()).collect();
    assert_eq!(extract_languages(&profiles), expected);
}

#[test]
fn test_public_predicates_fold_term_case() {
    let profile = create_profile("1", "Grace", &["COBOL"], 1.0, 1.0, 1.0, &["English"]);

    assert!(matches_search(&profile, "COBOL"));
    assert!(matches_search(&profile, "gRACE"));
    assert!(matches_profile(&profile, "Grace", &FilterState::default()));
    assert!(!matches_search(&profile, "FORTRAN"));
}
