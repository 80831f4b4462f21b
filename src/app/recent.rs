//! Bounded, deduplicated, most-recent-first search history.
//!
//! Terms are compared by exact, case-sensitive string equality. Re-inserting a
//! term moves it to the front instead of duplicating it; the list never holds
//! more than [`RECENT_SEARCH_LIMIT`] entries.

/// Maximum number of remembered search terms.
pub const RECENT_SEARCH_LIMIT: usize = 10;

/// Recent-search history, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    terms: Vec<String>,
}

impl RecentSearches {
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Records `term` as the most recent search.
    ///
    /// ```
    /// use reelscope::app::RecentSearches;
    ///
    /// let mut recent = RecentSearches::new();
    /// recent.insert("a");
    /// recent.insert("b");
    /// recent.insert("a");
    /// assert_eq!(recent.as_slice(), ["a", "b"]);
    /// ```
    pub fn insert(&mut self, term: &str) {
        self.terms.retain(|existing| existing != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(RECENT_SEARCH_LIMIT);
    }

    /// Forgets `term`. Returns `true` if it was present.
    pub fn remove(&mut self, term: &str) -> bool {
        let before = self.terms.len();
        self.terms.retain(|existing| existing != term);
        self.terms.len() != before
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
