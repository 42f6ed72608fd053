#![forbid(unsafe_code)]

//! Filter-state synchronization for the Dhaalan listing pages.
//!
//! Every listing surface (exhibitors, opportunities, schedule) gets
//! identical filter-to-URL semantics from one reusable pattern:
//!
//! - a [`FilterSet`] of named fields (free-text search, category, zone),
//! - an explicit query-string codec ([`query::encode`]/[`query::decode`]),
//! - a [`FilterSync`] that keeps set and [`Location`] in agreement, using
//!   replace (not push) history transitions so keystrokes never pollute
//!   the back stack,
//! - a pure [`apply_filters`] predicate over any collection.
//!
//! # Ordering guarantee
//! `FilterSync::set_field` updates the in-memory set and the location's
//! query string before returning; no intermediate state where the two
//! disagree is observable after the call completes.

pub mod filter_set;
pub mod location;
pub mod query;
pub mod sync;

pub use filter_set::{apply_filters, Field, FieldKind, FieldSpec, FilterSet};
pub use location::{History, Location};
pub use sync::{FilterSync, EXHIBITOR_PARAM, SEARCH_FIELD};
