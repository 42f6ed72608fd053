#![forbid(unsafe_code)]

//! Navigable location and history.
//!
//! A [`Location`] is a path plus ordered query pairs; a [`History`] is
//! the back stack. The distinction that matters to the filter layer is
//! `push` versus `replace`: field edits use `replace` so the stack depth
//! never grows with keystrokes, while real navigation uses `push`.

use crate::query;

/// One navigable location: path and decoded query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_query(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Parse `path?query` form, e.g. a link target like
    /// `/opportunities?exhibitor=Loopcraft`.
    #[must_use]
    pub fn parse(url: &str) -> Self {
        match url.split_once('?') {
            Some((path, raw_query)) => Self {
                path: path.to_string(),
                query: query::decode(raw_query),
            },
            None => Self::new(url),
        }
    }

    /// First value for a query key, if present.
    #[must_use]
    pub fn query_get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Re-serialize to `path?query` (bare path when the query is empty).
    #[must_use]
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query::encode(&self.query))
        }
    }
}

/// A back stack of locations.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Location>,
}

impl History {
    #[must_use]
    pub fn new(initial: Location) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    #[must_use]
    pub fn current(&self) -> &Location {
        // The stack is never empty: new() seeds one entry and back() stops
        // at the last.
        self.stack.last().expect("history stack is never empty")
    }

    /// Navigate, growing the back stack.
    pub fn push(&mut self, location: Location) {
        self.stack.push(location);
    }

    /// Overwrite the current entry without growing the back stack.
    pub fn replace(&mut self, location: Location) {
        if let Some(top) = self.stack.last_mut() {
            *top = location;
        }
    }

    /// Go back one entry; the initial entry is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_path_and_query() {
        let loc = Location::parse("/opportunities?exhibitor=Loopcraft&zone=Career%20Hub%20Zone");
        assert_eq!(loc.path, "/opportunities");
        assert_eq!(loc.query_get("exhibitor"), Some("Loopcraft"));
        assert_eq!(loc.query_get("zone"), Some("Career Hub Zone"));
        assert_eq!(loc.query_get("missing"), None);
    }

    #[test]
    fn to_url_round_trips() {
        let loc = Location::parse("/schedule?type=Panel");
        assert_eq!(Location::parse(&loc.to_url()), loc);

        let bare = Location::new("/venue");
        assert_eq!(bare.to_url(), "/venue");
    }

    #[test]
    fn replace_keeps_depth_constant() {
        let mut history = History::new(Location::new("/exhibitors"));
        for i in 0..50 {
            history.replace(Location::with_query(
                "/exhibitors",
                vec![("search".into(), format!("q{i}"))],
            ));
        }
        assert_eq!(history.depth(), 1);
        assert_eq!(history.current().query_get("search"), Some("q49"));
    }

    #[test]
    fn push_grows_and_back_shrinks() {
        let mut history = History::new(Location::new("/"));
        history.push(Location::new("/exhibitors"));
        history.push(Location::new("/schedule"));
        assert_eq!(history.depth(), 3);

        assert!(history.back());
        assert_eq!(history.current().path, "/exhibitors");
        assert!(history.back());
        assert!(!history.back()); // initial entry stays
        assert_eq!(history.current().path, "/");
    }
}
