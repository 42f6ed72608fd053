#![forbid(unsafe_code)]

//! Application-wide UI state for the Dhaalan expo: the observable context
//! cell, the durable preference store, and the locale/theme engines built
//! on top of both.
//!
//! # Role in the workspace
//! This crate is the "provider tree root": one [`LocaleStore`] and one
//! [`ThemeStore`] are constructed at startup and handed by reference to
//! every page and widget. Consumers read current values synchronously and
//! subscribe for change notification; nothing polls.
//!
//! # Shared resource policy
//! The preference store is process-wide and single-writer by construction:
//! only `set_locale` and `set_theme` write to it. Reads are safe from any
//! number of consumers because the stores are the sole source of truth and
//! broadcast changes synchronously.

pub mod context;
pub mod locale_store;
pub mod prefs;
pub mod theme_store;

pub use context::{ContextValue, Subscription};
pub use locale_store::{DocumentAttrs, LocaleStore};
pub use prefs::{FilePrefs, MemoryPrefs, PrefStore, PrefsError, LOCALE_KEY, THEME_KEY};
pub use theme_store::{EnvAppearance, SystemAppearance, Theme, ThemeStore};
