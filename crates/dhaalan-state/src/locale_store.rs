#![forbid(unsafe_code)]

//! The localization engine: active locale, catalog resolution, document
//! attributes, and persistence.
//!
//! `set_locale` is a synchronous state transition: by the time it returns,
//! the document attributes are updated, the preference is persisted (or
//! the failure logged and swallowed), and every subscriber has been
//! notified. Consumers therefore never observe a locale/direction
//! mismatch.

use std::cell::Cell;
use std::rc::Rc;

use dhaalan_i18n::{Catalog, Locale, TextDirection};
use tracing::warn;

use crate::context::{ContextValue, Subscription};
use crate::prefs::{PrefStore, LOCALE_KEY};

/// Document-level language attributes, the TUI analogue of
/// `<html lang dir>`. Layout code reads `direction` to decide RTL
/// mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttrs {
    pub lang: &'static str,
    pub direction: TextDirection,
}

impl DocumentAttrs {
    fn for_locale(locale: Locale) -> Self {
        Self {
            lang: locale.code(),
            direction: locale.direction(),
        }
    }

    /// The `dir` attribute value, `"ltr"` or `"rtl"`.
    #[must_use]
    pub fn dir_attr(self) -> &'static str {
        self.direction.attr()
    }
}

/// Owns the active locale and the message catalog.
pub struct LocaleStore {
    locale: ContextValue<Locale>,
    catalog: Catalog,
    prefs: Rc<dyn PrefStore>,
    document: Cell<DocumentAttrs>,
}

impl LocaleStore {
    /// Seed from the persisted locale when present and valid, else the
    /// primary locale. Storage read failures surface as "no preference".
    pub fn new(catalog: Catalog, prefs: Rc<dyn PrefStore>) -> Self {
        let initial = prefs
            .load(LOCALE_KEY)
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or(Locale::PRIMARY);
        Self {
            locale: ContextValue::new(initial),
            catalog,
            prefs,
            document: Cell::new(DocumentAttrs::for_locale(initial)),
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    #[must_use]
    pub fn direction(&self) -> TextDirection {
        self.locale().direction()
    }

    /// Current document attributes, kept in lockstep with the locale.
    #[must_use]
    pub fn document(&self) -> DocumentAttrs {
        self.document.get()
    }

    /// Resolve a translation key under the active locale, with the full
    /// fallback chain. Never fails.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.catalog.resolve(self.locale(), key)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Switch the active locale.
    ///
    /// Idempotent: repeating the current locale re-applies the (identical)
    /// document attributes and persisted value but notifies nobody.
    pub fn set_locale(&self, locale: Locale) {
        self.document.set(DocumentAttrs::for_locale(locale));
        if let Err(err) = self.prefs.save(LOCALE_KEY, locale.code()) {
            warn!(code = locale.code(), %err, "could not persist locale; continuing in memory");
        }
        self.locale.set(locale);
    }

    /// Subscribe to locale changes; fires after the document attributes
    /// and persistence side effects are already applied.
    pub fn subscribe(&self, callback: impl Fn(&Locale) + 'static) -> Subscription {
        self.locale.subscribe(callback)
    }
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("locale", &self.locale.get())
            .field("document", &self.document.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefs;
    use dhaalan_i18n::expo_catalog;
    use std::cell::Cell as StdCell;

    fn store_with(prefs: MemoryPrefs) -> LocaleStore {
        LocaleStore::new(expo_catalog(), Rc::new(prefs))
    }

    #[test]
    fn defaults_to_primary_locale() {
        let store = store_with(MemoryPrefs::new());
        assert_eq!(store.locale(), Locale::En);
        assert_eq!(store.document().lang, "en");
        assert_eq!(store.document().direction, TextDirection::Ltr);
    }

    #[test]
    fn seeds_from_persisted_code() {
        let prefs = MemoryPrefs::new();
        prefs.seed(LOCALE_KEY, "dv");
        let store = store_with(prefs);
        assert_eq!(store.locale(), Locale::Dv);
        assert_eq!(store.document().direction, TextDirection::Rtl);
    }

    #[test]
    fn invalid_persisted_code_falls_back_to_primary() {
        let prefs = MemoryPrefs::new();
        prefs.seed(LOCALE_KEY, "zz");
        let store = store_with(prefs);
        assert_eq!(store.locale(), Locale::En);
    }

    #[test]
    fn switching_to_dhivehi_flips_document_direction() {
        let prefs = MemoryPrefs::new();
        let store = store_with(prefs);

        store.set_locale(Locale::Dv);
        assert_eq!(store.resolve("heroTitle"), "ދާލަން 2025: ޤައުމީ ހުނަރާއި ކެރިއަރ މައުރަޒު");
        assert_eq!(store.document().dir_attr(), "rtl");
        assert_eq!(store.document().lang, "dv");
    }

    #[test]
    fn set_locale_persists_choice() {
        let prefs = Rc::new(MemoryPrefs::new());
        let store = LocaleStore::new(expo_catalog(), Rc::clone(&prefs) as Rc<dyn PrefStore>);
        store.set_locale(Locale::Dv);
        assert_eq!(prefs.load(LOCALE_KEY), Some("dv".to_string()));
    }

    #[test]
    fn persistence_failure_is_swallowed() {
        let store = store_with(MemoryPrefs::failing());
        store.set_locale(Locale::Dv);
        // Still functional in memory.
        assert_eq!(store.locale(), Locale::Dv);
        assert_eq!(store.document().direction, TextDirection::Rtl);
    }

    #[test]
    fn set_locale_is_idempotent() {
        let store = store_with(MemoryPrefs::new());
        let hits = Rc::new(StdCell::new(0u32));
        let hits_cb = Rc::clone(&hits);
        let _sub = store.subscribe(move |_| hits_cb.set(hits_cb.get() + 1));

        store.set_locale(Locale::Dv);
        store.set_locale(Locale::Dv);
        assert_eq!(hits.get(), 1);
        assert_eq!(store.locale(), Locale::Dv);
    }

    #[test]
    fn subscriber_observes_consistent_document() {
        let store = Rc::new(store_with(MemoryPrefs::new()));
        let seen = Rc::new(StdCell::new(TextDirection::Ltr));
        let store_cb = Rc::clone(&store);
        let seen_cb = Rc::clone(&seen);
        let _sub = store.subscribe(move |locale| {
            // Document attributes were applied before notification.
            assert_eq!(store_cb.document().direction, locale.direction());
            seen_cb.set(store_cb.document().direction);
        });
        store.set_locale(Locale::Dv);
        assert_eq!(seen.get(), TextDirection::Rtl);
    }

    #[test]
    fn untranslated_key_resolves_through_fallback_chain() {
        let store = store_with(MemoryPrefs::new());
        store.set_locale(Locale::Dv);
        assert_eq!(
            store.resolve("forms.dataFetchError"),
            "Something went wrong while loading data."
        );
        assert_eq!(store.resolve("totally.unknown"), "totally.unknown");
    }
}
