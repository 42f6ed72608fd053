#![forbid(unsafe_code)]

//! The filter record and the pure filtering predicate.
//!
//! A [`FilterSet`] is an ordered record of named fields; an empty value
//! means "no filter". Matching semantics per kind: text fields match by
//! case-insensitive substring containment, choice fields by exact
//! equality. [`apply_filters`] ANDs every active field, so filtering is a
//! pure function of (collection, set) — never of edit history.

/// How a field's value is matched against an item attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Case-insensitive substring containment (search boxes).
    Text,
    /// Exact equality against a closed enumeration (type, zone).
    Choice,
}

/// Static description of one filter field; each listing page declares its
/// allow-list as a slice of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    #[must_use]
    pub const fn choice(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Choice,
        }
    }
}

/// One field with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl Field {
    /// Whether this field currently constrains results.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.value.is_empty()
    }
}

/// An ordered record of filter fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    fields: Vec<Field>,
}

impl FilterSet {
    #[must_use]
    pub fn new(specs: &[FieldSpec]) -> Self {
        Self {
            fields: specs
                .iter()
                .map(|spec| Field {
                    name: spec.name,
                    kind: spec.kind,
                    value: String::new(),
                })
                .collect(),
        }
    }

    /// Current value of a field; `None` for names outside the allow-list.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Set a field. Returns false (and changes nothing) for unknown names.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Fields that currently constrain results.
    pub fn active(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_active())
    }

    #[must_use]
    pub fn recognizes(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        self.fields.iter().any(Field::is_active)
    }
}

/// Apply every active field to every item, ANDed.
///
/// `attributes` yields the item's values for a named field; a text field
/// passes when any value contains the needle (case-insensitive), a choice
/// field when any value equals it exactly. Items with no value for an
/// active field fail that field.
pub fn apply_filters<'a, T>(
    items: &'a [T],
    filters: &FilterSet,
    attributes: impl Fn(&T, &str) -> Vec<String>,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| {
            filters.active().all(|field| {
                let values = attributes(item, field.name);
                match field.kind {
                    FieldKind::Text => {
                        let needle = field.value.to_lowercase();
                        values.iter().any(|v| v.to_lowercase().contains(&needle))
                    }
                    FieldKind::Choice => values.iter().any(|v| v == &field.value),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: &[FieldSpec] = &[
        FieldSpec::text("search"),
        FieldSpec::choice("type"),
        FieldSpec::choice("zone"),
    ];

    struct Job {
        title: &'static str,
        exhibitor: &'static str,
        kind: &'static str,
        zone: &'static str,
    }

    const JOBS: &[Job] = &[
        Job {
            title: "Junior Developer",
            exhibitor: "Loopcraft",
            kind: "Full-time",
            zone: "Innovation & Startup Zone",
        },
        Job {
            title: "Marketing Intern",
            exhibitor: "Ooredoo Maldives",
            kind: "Internship",
            zone: "Career Hub Zone",
        },
        Job {
            title: "Data Analyst",
            exhibitor: "Bank of Maldives",
            kind: "Full-time",
            zone: "Career Hub Zone",
        },
    ];

    fn attributes_of(job: &Job, field: &str) -> Vec<String> {
        match field {
            "search" => vec![job.title.to_string(), job.exhibitor.to_string()],
            "type" => vec![job.kind.to_string()],
            "zone" => vec![job.zone.to_string()],
            _ => Vec::new(),
        }
    }

    fn run(filters: &FilterSet) -> Vec<&'static str> {
        apply_filters(JOBS, filters, |job, field| attributes_of(job, field))
            .into_iter()
            .map(|j| j.title)
            .collect()
    }

    #[test]
    fn empty_set_passes_everything() {
        let filters = FilterSet::new(SPECS);
        assert_eq!(run(&filters).len(), JOBS.len());
    }

    #[test]
    fn text_match_is_case_insensitive_substring() {
        let mut filters = FilterSet::new(SPECS);
        filters.set("search", "loopCRAFT");
        assert_eq!(run(&filters), vec!["Junior Developer"]);

        filters.set("search", "maldives");
        assert_eq!(run(&filters), vec!["Marketing Intern", "Data Analyst"]);
    }

    #[test]
    fn choice_match_is_exact() {
        let mut filters = FilterSet::new(SPECS);
        filters.set("type", "Full-time");
        assert_eq!(run(&filters), vec!["Junior Developer", "Data Analyst"]);

        // Substring of a category does not match.
        filters.set("type", "Full");
        assert!(run(&filters).is_empty());
    }

    #[test]
    fn active_fields_are_anded() {
        let mut filters = FilterSet::new(SPECS);
        filters.set("type", "Full-time");
        filters.set("zone", "Career Hub Zone");
        assert_eq!(run(&filters), vec!["Data Analyst"]);
    }

    #[test]
    fn filtering_is_pure_function_of_current_set() {
        let mut edited = FilterSet::new(SPECS);
        // A winding edit history...
        edited.set("search", "intern");
        edited.set("type", "Internship");
        edited.set("search", "");
        edited.set("type", "Full-time");

        // ...equals the same set built directly.
        let mut direct = FilterSet::new(SPECS);
        direct.set("type", "Full-time");
        assert_eq!(edited, direct);
        assert_eq!(run(&edited), run(&direct));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut filters = FilterSet::new(SPECS);
        assert!(!filters.set("utm_source", "newsletter"));
        assert_eq!(filters.value("utm_source"), None);
        assert!(!filters.has_active());
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut filters = FilterSet::new(SPECS);
        filters.set("search", "x");
        filters.set("zone", "Career Hub Zone");
        assert!(filters.has_active());
        filters.clear();
        assert!(!filters.has_active());
        assert_eq!(filters.value("search"), Some(""));
    }
}
