use crate::models::{Artist, Category, FilterSelection, Submission, SubmissionFilter};

/// Check an artist against the free-text query
///
/// Case-insensitive substring containment over name, bio, each category
/// display name and the location. An empty query matches everything.
/// Category identifiers are resolved to display names through `categories`;
/// an id with no entry in the join table falls back to the id itself so the
/// artist stays searchable.
#[inline]
pub fn matches_query(artist: &Artist, query: &str, categories: &[Category]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    if artist.name.to_lowercase().contains(&query) || artist.bio.to_lowercase().contains(&query) {
        return true;
    }

    if artist.categories.iter().any(|id| {
        let label = categories
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or(id);
        label.to_lowercase().contains(&query)
    }) {
        return true;
    }

    artist.location.to_lowercase().contains(&query)
}

/// Check an artist against the selected category identifiers
///
/// OR semantics: any selected id present on the artist is a match. An empty
/// selection is no constraint.
#[inline]
pub fn matches_categories(artist: &Artist, selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|id| artist.categories.contains(id))
}

/// Exact location match, `None` is no constraint
#[inline]
pub fn matches_location(artist: &Artist, location: Option<&str>) -> bool {
    location.map_or(true, |location| artist.location == location)
}

/// Exact price-range match, `None` is no constraint
#[inline]
pub fn matches_price(artist: &Artist, price_range: Option<&str>) -> bool {
    price_range.map_or(true, |price_range| artist.price_range == price_range)
}

/// Check an artist against the full structured selection
#[inline]
pub fn matches_selection(artist: &Artist, selection: &FilterSelection) -> bool {
    matches_categories(artist, &selection.categories)
        && matches_location(artist, selection.location.as_deref())
        && matches_price(artist, selection.price_range.as_deref())
}

/// Check a dashboard submission against the table filter
///
/// Free-text substring over name/category/city, exact status match and
/// case-insensitive category equality; every clause is skipped when its
/// criterion is unconstrained.
#[inline]
pub fn matches_submission(submission: &Submission, filter: &SubmissionFilter) -> bool {
    let query = filter.query.trim().to_lowercase();
    let matches_search = query.is_empty()
        || submission.name.to_lowercase().contains(&query)
        || submission.category.to_lowercase().contains(&query)
        || submission.city.to_lowercase().contains(&query);
    if !matches_search {
        return false;
    }

    if let Some(status) = filter.status {
        if submission.status != status {
            return false;
        }
    }

    if let Some(category) = filter.category.as_deref() {
        if !submission.category.eq_ignore_ascii_case(category) {
            return false;
        }
    }

    true
}
