#![forbid(unsafe_code)]

//! Bidirectional synchronization between a [`FilterSet`] and the
//! navigable location's query string.
//!
//! Mount semantics: recognized parameters seed the corresponding fields;
//! everything else in the query is ignored and preserved. The `exhibitor`
//! parameter is an alias consumed as a seed for the `search` field —
//! applied exactly once per arrival value, so re-renders and unrelated
//! state changes never re-apply it after the user has edited the search
//! box.
//!
//! Write semantics: every field change rewrites the query with a replace
//! (never push) transition, leaving unrecognized parameters exactly where
//! they were. `clear_filters` removes every recognized parameter in one
//! atomic replace.

use tracing::debug;

use crate::filter_set::{FieldSpec, FilterSet};
use crate::location::{History, Location};

/// The field name every page uses for its free-text search box.
pub const SEARCH_FIELD: &str = "search";

/// Alias parameter carried by external links ("view opportunities for
/// exhibitor X"); consumed as a search seed, never stored as a field.
pub const EXHIBITOR_PARAM: &str = "exhibitor";

/// Keeps one page's [`FilterSet`] and the current [`Location`] in
/// agreement.
#[derive(Debug, Clone)]
pub struct FilterSync {
    filters: FilterSet,
    /// Arrival-seed guard: the alias value already applied to `search`.
    applied_seed: Option<String>,
}

impl FilterSync {
    /// Seed a fresh filter set from the current location.
    #[must_use]
    pub fn mount(specs: &[FieldSpec], location: &Location) -> Self {
        let mut filters = FilterSet::new(specs);
        for (key, value) in &location.query {
            // Unrecognized parameters are ignored, never an error.
            filters.set(key, value.clone());
        }

        let mut applied_seed = None;
        if filters.recognizes(SEARCH_FIELD)
            && let Some(seed) = location.query_get(EXHIBITOR_PARAM)
        {
            filters.set(SEARCH_FIELD, seed);
            applied_seed = Some(seed.to_string());
            debug!(seed, "seeded search from exhibitor alias");
        }
        Self {
            filters,
            applied_seed,
        }
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Re-apply the arrival seed after an externally-triggered navigation.
    ///
    /// Guarded on the arrival value itself: the same value is never
    /// applied twice, so calling this on every render is safe.
    pub fn reseed(&mut self, location: &Location) {
        if !self.filters.recognizes(SEARCH_FIELD) {
            return;
        }
        let Some(seed) = location.query_get(EXHIBITOR_PARAM) else {
            return;
        };
        if self.applied_seed.as_deref() == Some(seed) {
            return;
        }
        self.filters.set(SEARCH_FIELD, seed);
        self.applied_seed = Some(seed.to_string());
    }

    /// Update one field and the location's query in a single step.
    ///
    /// After this returns, set and URL agree. Unknown field names change
    /// nothing at all.
    pub fn set_field(&mut self, history: &mut History, name: &str, value: impl Into<String>) {
        if self.filters.set(name, value) {
            self.write_query(history);
        }
    }

    /// Reset every field and strip all recognized parameters (and the
    /// alias) from the location in one atomic replace.
    pub fn clear_filters(&mut self, history: &mut History) {
        self.filters.clear();
        self.write_query(history);
    }

    fn owns_param(&self, key: &str) -> bool {
        key == EXHIBITOR_PARAM || self.filters.recognizes(key)
    }

    fn write_query(&self, history: &mut History) {
        let current = history.current().clone();
        let mut query: Vec<(String, String)> = current
            .query
            .into_iter()
            .filter(|(key, _)| !self.owns_param(key))
            .collect();
        for field in self.filters.active() {
            query.push((field.name.to_string(), field.value.clone()));
        }
        history.replace(Location {
            path: current.path,
            query,
        });
    }
}
