use crate::core::filters::{matches_query, matches_selection};
use crate::models::{Artist, Category, FilterSelection};

/// Directory filter engine
///
/// Owns the category join table and computes the visible artist subset
/// from the current query and structured selection. Pure with respect to
/// its inputs: deterministic, no side effects, output preserves the input
/// relative order and is never re-sorted.
#[derive(Debug, Clone)]
pub struct Directory {
    categories: Vec<Category>,
}

impl Directory {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Compute the visible subset for the current query and selection
    ///
    /// Each predicate clause short-circuits and unconstrained criteria are
    /// skipped, so an empty query with an empty selection returns the full
    /// input. An empty result is a normal terminal state, not an error.
    pub fn search(
        &self,
        artists: &[Artist],
        query: &str,
        selection: &FilterSelection,
    ) -> Vec<Artist> {
        artists
            .iter()
            .filter(|artist| matches_query(artist, query, &self.categories))
            .filter(|artist| matches_selection(artist, selection))
            .cloned()
            .collect()
    }

    /// Artists flagged for the homepage featured strip, input order kept
    pub fn featured(&self, artists: &[Artist]) -> Vec<Artist> {
        artists.iter().filter(|a| a.featured).cloned().collect()
    }

    /// Look up a single artist by id (quote-request path)
    pub fn find<'a>(&self, artists: &'a [Artist], id: &str) -> Option<&'a Artist> {
        artists.iter().find(|a| a.id == id)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(crate::catalog::categories())
    }
}
