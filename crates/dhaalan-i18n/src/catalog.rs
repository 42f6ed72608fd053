#![forbid(unsafe_code)]

//! Nested message catalog with dot-path lookup and locale fallback.
//!
//! A [`Catalog`] maps each locale to a tree of messages. Resolution walks
//! the active locale's tree segment by segment; any missing segment
//! restarts the walk against the primary locale; if that also misses, the
//! raw key string itself is returned. Resolution therefore never fails and
//! never panics, which is what lets every call site stay infallible.
//!
//! # Invariants
//!
//! 1. `resolve` is total: for any `(locale, key)` it returns a string.
//! 2. A key present in the primary locale is never resolved to the raw key.
//! 3. Lookup does not allocate on the happy path (`lookup` returns `&str`).

use std::collections::BTreeSet;
use std::collections::HashMap;

use crate::locale::Locale;

/// One node in a locale's message tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageNode {
    /// A leaf translation.
    Text(String),
    /// An interior namespace (e.g. the `nav` in `nav.home`).
    Branch(HashMap<String, MessageNode>),
}

/// All messages for a single locale.
///
/// Keys are inserted as dot-delimited paths; interior branches are created
/// on demand. Inserting a path through an existing leaf replaces the leaf
/// with a branch (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleMessages {
    root: HashMap<String, MessageNode>,
}

impl LocaleMessages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a message at a dot-delimited path.
    pub fn insert(&mut self, path: &str, text: impl Into<String>) {
        fn insert_at(map: &mut HashMap<String, MessageNode>, segments: &[&str], text: String) {
            let Some((head, rest)) = segments.split_first() else {
                return;
            };
            if rest.is_empty() {
                map.insert((*head).to_string(), MessageNode::Text(text));
                return;
            }
            let node = map
                .entry((*head).to_string())
                .or_insert_with(|| MessageNode::Branch(HashMap::new()));
            if let MessageNode::Text(_) = node {
                *node = MessageNode::Branch(HashMap::new());
            }
            if let MessageNode::Branch(children) = node {
                insert_at(children, rest, text);
            }
        }
        let segments: Vec<&str> = path.split('.').collect();
        insert_at(&mut self.root, &segments, text.into());
    }

    /// Walk a dot-delimited path to a leaf, if one exists.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&str> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;
        for segment in segments {
            match node {
                MessageNode::Branch(children) => node = children.get(segment)?,
                MessageNode::Text(_) => return None,
            }
        }
        match node {
            MessageNode::Text(text) => Some(text),
            MessageNode::Branch(_) => None,
        }
    }

    /// Number of leaf messages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        fn count(map: &HashMap<String, MessageNode>) -> usize {
            map.values()
                .map(|node| match node {
                    MessageNode::Text(_) => 1,
                    MessageNode::Branch(children) => count(children),
                })
                .sum()
        }
        count(&self.root)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Collect every leaf path, sorted, for coverage reporting.
    #[must_use]
    pub fn leaf_paths(&self) -> BTreeSet<String> {
        fn walk(map: &HashMap<String, MessageNode>, prefix: &str, out: &mut BTreeSet<String>) {
            for (segment, node) in map {
                let path = if prefix.is_empty() {
                    segment.clone()
                } else {
                    format!("{prefix}.{segment}")
                };
                match node {
                    MessageNode::Text(_) => {
                        out.insert(path);
                    }
                    MessageNode::Branch(children) => walk(children, &path, out),
                }
            }
        }
        let mut out = BTreeSet::new();
        walk(&self.root, "", &mut out);
        out
    }
}

/// Messages for every locale, plus the fallback chain.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: HashMap<Locale, LocaleMessages>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) all messages for a locale.
    pub fn add_locale(&mut self, locale: Locale, messages: LocaleMessages) {
        self.locales.insert(locale, messages);
    }

    /// Direct lookup in a single locale, no fallback.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.locales.get(&locale)?.find(key)
    }

    /// Resolve a key under the given locale with the full fallback chain:
    /// active locale, then the primary locale, then the raw key itself.
    #[must_use]
    pub fn resolve(&self, locale: Locale, key: &str) -> String {
        if let Some(text) = self.lookup(locale, key) {
            return text.to_string();
        }
        if locale != Locale::PRIMARY
            && let Some(text) = self.lookup(Locale::PRIMARY, key)
        {
            return text.to_string();
        }
        key.to_string()
    }

    /// Translation coverage of `locale`, measured against the primary
    /// locale's key set.
    #[must_use]
    pub fn coverage(&self, locale: Locale) -> Coverage {
        let reference = self
            .locales
            .get(&Locale::PRIMARY)
            .map(LocaleMessages::leaf_paths)
            .unwrap_or_default();
        let total = reference.len();
        let mut missing = Vec::new();
        for key in &reference {
            if self.lookup(locale, key).is_none() {
                missing.push(key.clone());
            }
        }
        Coverage {
            locale,
            total,
            present: total - missing.len(),
            missing,
        }
    }
}

/// Report of which primary-locale keys a locale still lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub locale: Locale,
    pub total: usize,
    pub present: usize,
    pub missing: Vec<String>,
}

impl Coverage {
    /// Covered fraction in percent; 100 for an empty reference set.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.present as f64 * 100.0 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut en = LocaleMessages::new();
        en.insert("heroTitle", "Dhaalan 2025");
        en.insert("nav.home", "Home");
        en.insert("nav.schedule", "Schedule");
        en.insert("forms.dataFetchError", "Could not load data.");

        let mut dv = LocaleMessages::new();
        dv.insert("heroTitle", "ދާލަން 2025");
        dv.insert("nav.home", "ފުރަތަމަ ޞަފްޙާ");

        let mut catalog = Catalog::new();
        catalog.add_locale(Locale::En, en);
        catalog.add_locale(Locale::Dv, dv);
        catalog
    }

    #[test]
    fn resolves_in_active_locale() {
        let c = catalog();
        assert_eq!(c.resolve(Locale::Dv, "heroTitle"), "ދާލަން 2025");
        assert_eq!(c.resolve(Locale::En, "heroTitle"), "Dhaalan 2025");
    }

    #[test]
    fn missing_in_secondary_falls_back_to_primary() {
        let c = catalog();
        assert_eq!(c.resolve(Locale::Dv, "nav.schedule"), "Schedule");
        assert_eq!(
            c.resolve(Locale::Dv, "forms.dataFetchError"),
            "Could not load data."
        );
    }

    #[test]
    fn missing_everywhere_returns_raw_key() {
        let c = catalog();
        assert_eq!(c.resolve(Locale::Dv, "nav.missing"), "nav.missing");
        assert_eq!(c.resolve(Locale::En, "does.not.exist"), "does.not.exist");
    }

    #[test]
    fn partial_path_is_not_a_leaf() {
        let c = catalog();
        // "nav" is a branch, not a message.
        assert_eq!(c.lookup(Locale::En, "nav"), None);
        assert_eq!(c.resolve(Locale::En, "nav"), "nav");
        // Walking through a leaf also misses.
        assert_eq!(c.lookup(Locale::En, "heroTitle.extra"), None);
    }

    #[test]
    fn insert_through_leaf_replaces_with_branch() {
        let mut messages = LocaleMessages::new();
        messages.insert("a", "leaf");
        messages.insert("a.b", "nested");
        assert_eq!(messages.find("a"), None);
        assert_eq!(messages.find("a.b"), Some("nested"));
    }

    #[test]
    fn leaf_count_and_paths() {
        let c = catalog();
        let en = c.locales.get(&Locale::En).unwrap();
        assert_eq!(en.len(), 4);
        let paths = en.leaf_paths();
        assert!(paths.contains("nav.home"));
        assert!(paths.contains("forms.dataFetchError"));
    }

    #[test]
    fn coverage_counts_missing_keys() {
        let c = catalog();
        let cov = c.coverage(Locale::Dv);
        assert_eq!(cov.total, 4);
        assert_eq!(cov.present, 2);
        assert_eq!(
            cov.missing,
            vec!["forms.dataFetchError".to_string(), "nav.schedule".to_string()]
        );
        assert!((cov.percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn coverage_of_primary_is_full() {
        let c = catalog();
        let cov = c.coverage(Locale::En);
        assert_eq!(cov.present, cov.total);
        assert!(cov.missing.is_empty());
    }

    #[test]
    fn empty_catalog_resolves_to_key() {
        let c = Catalog::new();
        assert_eq!(c.resolve(Locale::En, "anything"), "anything");
        assert_eq!(c.coverage(Locale::Dv).total, 0);
        assert!((c.coverage(Locale::Dv).percent() - 100.0).abs() < f64::EPSILON);
    }
}
