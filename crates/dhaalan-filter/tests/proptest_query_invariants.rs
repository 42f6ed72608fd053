//! Property-based invariant tests for the filter/query layer.
//!
//! 1. Query encode/decode round-trips arbitrary pairs.
//! 2. Seeding from a query string then clearing yields a query with none
//!    of the recognized parameters present (spec round-trip property).
//! 3. Any sequence of field edits leaves set and URL in agreement, with
//!    history depth unchanged.
//! 4. Filtering equals a fresh application of the AND predicate.

use dhaalan_filter::{
    apply_filters, FieldSpec, FilterSync, History, Location,
};
use proptest::prelude::*;

const SPECS: &[FieldSpec] = &[
    FieldSpec::text("search"),
    FieldSpec::choice("type"),
    FieldSpec::choice("zone"),
];

fn param_value() -> impl Strategy<Value = String> {
    // Printable ASCII including the characters that need percent-encoding.
    "[ -~]{0,20}"
}

proptest! {
    #[test]
    fn encode_decode_round_trips(
        pairs in proptest::collection::vec(("[a-z]{1,8}", param_value()), 0..6)
    ) {
        let pairs: Vec<(String, String)> =
            pairs.into_iter().map(|(k, v)| (k, v)).collect();
        let encoded = dhaalan_filter::query::encode(&pairs);
        prop_assert_eq!(dhaalan_filter::query::decode(&encoded), pairs);
    }

    #[test]
    fn seed_then_clear_strips_recognized_params(
        search in param_value(),
        ty in param_value(),
        extra in "[a-z]{1,8}",
        extra_val in param_value(),
    ) {
        prop_assume!(extra != "search" && extra != "type" && extra != "zone" && extra != "exhibitor");
        let location = Location::with_query(
            "/opportunities",
            vec![
                ("search".to_string(), search),
                ("type".to_string(), ty),
                (extra.clone(), extra_val.clone()),
            ],
        );
        let mut sync = FilterSync::mount(SPECS, &location);
        let mut history = History::new(location);

        sync.clear_filters(&mut history);
        let current = history.current();
        prop_assert_eq!(current.query_get("search"), None);
        prop_assert_eq!(current.query_get("type"), None);
        prop_assert_eq!(current.query_get("zone"), None);
        prop_assert_eq!(current.query_get(&extra), Some(extra_val.as_str()));
    }

    #[test]
    fn edits_keep_set_and_url_in_agreement(
        edits in proptest::collection::vec(
            (prop_oneof!["search", "type", "zone"], param_value()),
            1..12,
        )
    ) {
        let location = Location::new("/exhibitors");
        let mut sync = FilterSync::mount(SPECS, &location);
        let mut history = History::new(location);

        for (name, value) in &edits {
            sync.set_field(&mut history, name, value.clone());
        }

        prop_assert_eq!(history.depth(), 1);
        for field in sync.filters().fields() {
            let in_url = history.current().query_get(field.name);
            if field.is_active() {
                prop_assert_eq!(in_url, Some(field.value.as_str()));
            } else {
                prop_assert_eq!(in_url, None);
            }
        }
    }

    #[test]
    fn filtering_is_fresh_application_of_predicate(
        needle in "[a-z]{0,4}",
        items in proptest::collection::vec(("[a-z]{1,8}", prop_oneof!["A", "B"]), 0..20)
    ) {
        let location = Location::new("/list");
        let mut sync = FilterSync::mount(SPECS, &location);
        let mut history = History::new(location);
        sync.set_field(&mut history, "search", needle.clone());
        sync.set_field(&mut history, "type", "A");

        let attributes = |item: &(String, String), field: &str| match field {
            "search" => vec![item.0.clone()],
            "type" => vec![item.1.clone()],
            _ => Vec::new(),
        };
        let filtered = apply_filters(&items, sync.filters(), attributes);
        for item in &filtered {
            prop_assert!(item.0.contains(&needle));
            prop_assert_eq!(item.1.as_str(), "A");
        }
        let expected = items
            .iter()
            .filter(|i| i.0.contains(&needle) && i.1 == "A")
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }
}
