#![forbid(unsafe_code)]

//! Locale enumeration and text-direction metadata.
//!
//! Exactly one locale is active at a time (ownership lives in
//! `dhaalan-state`); direction is a pure function of locale, so layout
//! code never stores it separately.

/// The two locales the expo site ships in.
///
/// `En` is the primary locale: it is the fallback target for missing
/// translations and the default when no preference is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English, left-to-right.
    #[default]
    En,
    /// Dhivehi (Thaana script), right-to-left.
    Dv,
}

impl Locale {
    /// The primary locale used as the fallback for missing keys.
    pub const PRIMARY: Locale = Locale::En;

    /// BCP-47-ish language code, as persisted and as set on the document.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Dv => "dv",
        }
    }

    /// Parse a persisted language code. Unknown codes are rejected so a
    /// corrupted preference falls back to the primary locale at the caller.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "dv" => Some(Locale::Dv),
            _ => None,
        }
    }

    /// Layout direction for this locale.
    #[must_use]
    pub fn direction(self) -> TextDirection {
        match self {
            Locale::En => TextDirection::Ltr,
            Locale::Dv => TextDirection::Rtl,
        }
    }
}

/// Horizontal layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Attribute value as used on a document root (`dir="rtl"`).
    #[must_use]
    pub fn attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for locale in [Locale::En, Locale::Dv] {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn unknown_code_rejected() {
        assert_eq!(Locale::from_code(""), None);
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code("EN"), None);
    }

    #[test]
    fn direction_is_pure_function_of_locale() {
        assert_eq!(Locale::En.direction(), TextDirection::Ltr);
        assert_eq!(Locale::Dv.direction(), TextDirection::Rtl);
        assert_eq!(Locale::Dv.direction().attr(), "rtl");
    }

    #[test]
    fn default_is_primary() {
        assert_eq!(Locale::default(), Locale::PRIMARY);
    }
}
