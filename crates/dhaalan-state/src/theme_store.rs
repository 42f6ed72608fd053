#![forbid(unsafe_code)]

//! The theme engine: light/dark preference with one-shot system seeding.
//!
//! Initialization reads the persisted theme; if absent, a
//! [`SystemAppearance`] probe is consulted exactly once and the result is
//! persisted. There is no live listener for later system changes — an
//! explicit user toggle is the only mutation after startup.

use std::rc::Rc;

use tracing::warn;

use crate::context::{ContextValue, Subscription};
use crate::prefs::{PrefStore, THEME_KEY};

/// Closed two-value theme enumeration; no validation errors are possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// One-shot probe of the ambient appearance preference.
pub trait SystemAppearance {
    fn prefers_dark(&self) -> bool;
}

/// Heuristic probe based on the `COLORFGBG` terminal convention
/// (`<fg>;<bg>`, background indexes 0-6 and 8 are dark palettes).
/// Absent or unparseable values read as "light", matching the browser
/// original's default.
#[derive(Debug, Default)]
pub struct EnvAppearance;

impl SystemAppearance for EnvAppearance {
    fn prefers_dark(&self) -> bool {
        let Ok(raw) = std::env::var("COLORFGBG") else {
            return false;
        };
        let Some(bg) = raw.rsplit(';').next().and_then(|s| s.parse::<u8>().ok()) else {
            return false;
        };
        bg <= 6 || bg == 8
    }
}

/// Owns the active theme and its persistence.
pub struct ThemeStore {
    theme: ContextValue<Theme>,
    prefs: Rc<dyn PrefStore>,
}

impl ThemeStore {
    /// Persisted value wins; otherwise probe the system once and persist
    /// the probed seed so later sessions skip the probe entirely.
    pub fn new(prefs: Rc<dyn PrefStore>, probe: &dyn SystemAppearance) -> Self {
        let initial = match prefs.load(THEME_KEY).and_then(|name| Theme::from_name(&name)) {
            Some(theme) => theme,
            None => {
                let seeded = if probe.prefers_dark() {
                    Theme::Dark
                } else {
                    Theme::Light
                };
                if let Err(err) = prefs.save(THEME_KEY, seeded.name()) {
                    warn!(theme = seeded.name(), %err, "could not persist seeded theme");
                }
                seeded
            }
        };
        Self {
            theme: ContextValue::new(initial),
            prefs,
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Explicit user toggle: persists on every change, notifies on change.
    pub fn set_theme(&self, theme: Theme) {
        if let Err(err) = self.prefs.save(THEME_KEY, theme.name()) {
            warn!(theme = theme.name(), %err, "could not persist theme; continuing in memory");
        }
        self.theme.set(theme);
    }

    pub fn subscribe(&self, callback: impl Fn(&Theme) + 'static) -> Subscription {
        self.theme.subscribe(callback)
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme.get())
            .finish_non_exhaustive()
    }
}
