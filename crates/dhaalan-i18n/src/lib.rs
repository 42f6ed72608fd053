#![forbid(unsafe_code)]

//! Localization foundation for the Dhaalan expo UI.
//!
//! Provides externalized string storage keyed by dot-delimited paths,
//! a two-locale (English/Dhivehi) fallback chain, and text-direction
//! metadata for right-to-left layout switching.
//!
//! # Role in the workspace
//! `dhaalan-i18n` isolates localization so pages and widgets can resolve
//! display strings without knowing which locale is active or whether a
//! translation exists. Lookup is total: a missing key degrades to the
//! primary-locale value, then to the literal key, and never errors.
//!
//! # How it fits in the system
//! `dhaalan-state` owns the active [`Locale`] and delegates resolution to
//! a [`Catalog`]. This crate has no dependency on state or rendering,
//! keeping the localization layer reusable and testable.

pub mod catalog;
pub mod locale;
pub mod strings;

pub use catalog::{Catalog, Coverage, LocaleMessages, MessageNode};
pub use locale::{Locale, TextDirection};
pub use strings::expo_catalog;
