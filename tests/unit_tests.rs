// Filter-algebra tests for the directory engine

use artistly_core::catalog;
use artistly_core::core::filters::matches_selection;
use artistly_core::{Artist, Directory, Field, FilterSelection, Step};

fn directory() -> Directory {
    Directory::default()
}

fn ids(artists: &[Artist]) -> Vec<&str> {
    artists.iter().map(|a| a.id.as_str()).collect()
}

#[test]
fn empty_query_and_selection_is_the_identity() {
    let artists = catalog::sample_artists();
    let result = directory().search(&artists, "", &FilterSelection::default());
    assert_eq!(result, artists);
}

#[test]
fn filtering_is_idempotent() {
    let artists = catalog::sample_artists();
    let selection = FilterSelection {
        categories: vec!["singers".to_string()],
        location: None,
        price_range: Some("₹25,000 - ₹50,000".to_string()),
    };
    let once = directory().search(&artists, "vocalist", &selection);
    let twice = directory().search(&once, "vocalist", &selection);
    assert_eq!(once, twice);
}

#[test]
fn adding_a_category_never_shrinks_the_result() {
    let artists = catalog::sample_artists();
    let mut selection = FilterSelection::for_category("singers");
    let narrow = directory().search(&artists, "", &selection);

    selection.categories.push("djs".to_string());
    let wide = directory().search(&artists, "", &selection);

    assert!(wide.len() >= narrow.len());
    for artist in &narrow {
        assert!(wide.contains(artist));
    }
}

#[test]
fn text_match_is_case_insensitive() {
    let artists = catalog::sample_artists();
    let selection = FilterSelection::default();
    let upper = directory().search(&artists, "SHARMA", &selection);
    let lower = directory().search(&artists, "sharma", &selection);
    assert_eq!(upper, lower);
}

#[test]
fn all_clauses_must_pass() {
    let artists = catalog::sample_artists();
    let selection = FilterSelection {
        categories: vec!["singers".to_string()],
        location: Some("Chennai, Tamil Nadu".to_string()),
        price_range: None,
    };
    // Both singers live elsewhere, so the conjunction is empty
    assert!(directory().search(&artists, "", &selection).is_empty());
}

#[test]
fn selection_predicate_matches_engine_output() {
    let artists = catalog::sample_artists();
    let selection = FilterSelection {
        categories: vec!["dancers".to_string()],
        location: None,
        price_range: None,
    };
    let engine = directory().search(&artists, "", &selection);
    let direct: Vec<Artist> = artists
        .iter()
        .filter(|a| matches_selection(a, &selection))
        .cloned()
        .collect();
    assert_eq!(engine, direct);
    assert_eq!(ids(&engine), vec!["3", "5"]);
}

#[test]
fn step_table_matches_the_wizard_contract() {
    assert_eq!(
        Step::PersonalInfo.required_fields(),
        &[Field::Name, Field::Email, Field::Phone]
    );
    assert_eq!(
        Step::ProfessionalDetails.required_fields(),
        &[Field::Bio, Field::Categories, Field::Languages, Field::Experience]
    );
    assert_eq!(
        Step::PricingLocation.required_fields(),
        &[Field::PriceRange, Field::Location]
    );
    assert!(Step::Review.required_fields().is_empty());
}
