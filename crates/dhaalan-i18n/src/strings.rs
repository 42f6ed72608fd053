#![forbid(unsafe_code)]

//! Embedded bilingual message data for the expo surface.
//!
//! The Dhivehi set intentionally trails the English set: untranslated keys
//! exercise the fallback chain in production the same way they do in tests.
//! Run `Catalog::coverage(Locale::Dv)` to see what is still outstanding.

use crate::catalog::{Catalog, LocaleMessages};
use crate::locale::Locale;

/// Build the full expo catalog with both locales registered.
#[must_use]
pub fn expo_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_locale(Locale::En, english());
    catalog.add_locale(Locale::Dv, dhivehi());
    catalog
}

fn english() -> LocaleMessages {
    let mut m = LocaleMessages::new();
    m.insert("heroTitle", "Dhaalan 2025: National Skills & Career Expo");
    m.insert(
        "heroSubtitle",
        "Transforming youth development through digital innovation",
    );
    m.insert("heroDates", "6 – 8 November 2025 · Central Park, Hulhumale'");

    m.insert("nav.home", "Home");
    m.insert("nav.exhibitors", "Exhibitors");
    m.insert("nav.opportunities", "Opportunities");
    m.insert("nav.schedule", "Schedule");
    m.insert("nav.venue", "Venue");
    m.insert("nav.news", "News");
    m.insert("nav.resources", "Resources");
    m.insert("nav.register", "Register");

    m.insert("filterByZone", "Filter by zone");
    m.insert("filterByType", "Filter by type");
    m.insert("searchPlaceholder", "Search...");
    m.insert("clearFilters", "Clear filters");
    m.insert("noResults", "No results match your filters.");
    m.insert("loading", "Loading...");
    m.insert("retry", "Retry");

    m.insert("forms.dataFetchError", "Something went wrong while loading data.");

    m.insert("exhibitorsPage.title", "Exhibitors");
    m.insert(
        "exhibitorsPage.text",
        "Meet the companies and institutions at this year's expo.",
    );
    m.insert("opportunitiesPage.title", "Opportunities");
    m.insert(
        "opportunitiesPage.text",
        "Jobs, internships and apprenticeships from our exhibitors.",
    );
    m.insert("opportunitiesPage.applyNow", "Apply now");
    m.insert("schedulePage.title", "Schedule");
    m.insert("schedulePage.day1", "Day 1");
    m.insert("schedulePage.day2", "Day 2");
    m.insert("schedulePage.day3", "Day 3");

    m.insert("search.title", "Search the expo");
    m.insert("search.hint", "Press Enter to search exhibitors");

    m.insert("chat.title", "Dhaalan Guide");
    m.insert("chat.placeholder", "Ask about the expo...");
    m.insert(
        "chat.fallback",
        "Sorry, the guide is unavailable right now. Please try again later.",
    );

    m.insert("language.en", "English");
    m.insert("language.dv", "ދިވެހި");
    m.insert("theme.light", "Light");
    m.insert("theme.dark", "Dark");
    m
}

fn dhivehi() -> LocaleMessages {
    let mut m = LocaleMessages::new();
    m.insert("heroTitle", "ދާލަން 2025: ޤައުމީ ހުނަރާއި ކެރިއަރ މައުރަޒު");
    m.insert("heroSubtitle", "ޑިޖިޓަލް އީޖާދުން ޒުވާނުންގެ ކުރިއެރުން");

    m.insert("nav.home", "ފުރަތަމަ ޞަފްޙާ");
    m.insert("nav.exhibitors", "މައުރަޒުވެރިން");
    m.insert("nav.opportunities", "ފުރުޞަތުތައް");
    m.insert("nav.schedule", "ޝެޑިއުލް");
    m.insert("nav.venue", "ތަން");
    m.insert("nav.news", "ޚަބަރު");
    m.insert("nav.resources", "ވަސީލަތްތައް");
    m.insert("nav.register", "ރަޖިސްޓަރ");

    m.insert("filterByZone", "ޒޯނުން ފުރޭނޭ");
    m.insert("filterByType", "ބާވަތުން ފުރޭނޭ");
    m.insert("searchPlaceholder", "ހޯދާ...");
    m.insert("clearFilters", "ފިލްޓަރތައް ސާފުކުރޭ");
    m.insert("loading", "ލޯޑްވަނީ...");
    m.insert("retry", "އަލުން މަސައްކަތްކުރޭ");

    m.insert("exhibitorsPage.title", "މައުރަޒުވެރިން");
    m.insert("opportunitiesPage.title", "ފުރުޞަތުތައް");
    m.insert("opportunitiesPage.applyNow", "މިހާރު ހުށަހަޅާ");
    m.insert("schedulePage.title", "ޝެޑިއުލް");

    m.insert("chat.title", "ދާލަން ގައިޑް");

    m.insert("language.en", "English");
    m.insert("language.dv", "ދިވެހި");
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_title_localized_both_ways() {
        let c = expo_catalog();
        assert_eq!(
            c.resolve(Locale::En, "heroTitle"),
            "Dhaalan 2025: National Skills & Career Expo"
        );
        assert_ne!(c.resolve(Locale::Dv, "heroTitle"), c.resolve(Locale::En, "heroTitle"));
    }

    #[test]
    fn untranslated_keys_fall_back_to_english() {
        let c = expo_catalog();
        // Deliberately untranslated in the Dhivehi set.
        assert_eq!(
            c.resolve(Locale::Dv, "forms.dataFetchError"),
            c.resolve(Locale::En, "forms.dataFetchError")
        );
        assert_eq!(
            c.resolve(Locale::Dv, "chat.fallback"),
            c.resolve(Locale::En, "chat.fallback")
        );
    }

    #[test]
    fn dhivehi_coverage_is_partial_but_nonzero() {
        let c = expo_catalog();
        let cov = c.coverage(Locale::Dv);
        assert!(cov.present > 0);
        assert!(!cov.missing.is_empty());
        assert!(cov.missing.contains(&"forms.dataFetchError".to_string()));
    }
}
