#![forbid(unsafe_code)]

use dhaalan_cms::types::Zone;
use dhaalan_cms::{Exhibitor, Remote};
use dhaalan_filter::{FieldSpec, FilterSync, History, Location, apply_filters};
use dhaalan_state::LocaleStore;

const FIELDS: [FieldSpec; 2] = [FieldSpec::text("search"), FieldSpec::choice("zone")];

/// Exhibitor directory, filterable by free-text search and zone.
#[derive(Debug)]
pub struct ExhibitorsPage {
    pub sync: FilterSync,
    pub data: Remote<Vec<Exhibitor>>,
}

impl ExhibitorsPage {
    /// Seed filters from the arrival URL; data starts pending.
    pub fn mount(location: &Location) -> Self {
        Self {
            sync: FilterSync::mount(&FIELDS, location),
            data: Remote::Pending,
        }
    }

    /// Re-apply the exhibitor-alias seed after an external navigation
    /// (e.g. history back) while this page stays mounted.
    pub fn reseed(&mut self, location: &Location) {
        self.sync.reseed(location);
    }

    /// Ignored while loading; filters are inert until data arrives.
    pub fn set_filter(&mut self, history: &mut History, name: &str, value: &str) {
        if self.data.is_pending() {
            return;
        }
        self.sync.set_field(history, name, value);
    }

    pub fn clear_filters(&mut self, history: &mut History) {
        if self.data.is_pending() {
            return;
        }
        self.sync.clear_filters(history);
    }

    /// Step the zone filter through all zones and back to "any".
    pub fn cycle_zone(&mut self, history: &mut History) {
        let next = match self.sync.filters().value("zone") {
            None | Some("") => Some(Zone::ALL[0]),
            Some(current) => {
                let at = Zone::ALL.iter().position(|z| z.as_str() == current);
                at.and_then(|i| Zone::ALL.get(i + 1)).copied()
            }
        };
        let value = next.map(Zone::as_str).unwrap_or("");
        self.set_filter(history, "zone", value);
    }

    pub fn visible(&self) -> Vec<&Exhibitor> {
        match self.data.ready() {
            Some(items) => apply_filters(items, self.sync.filters(), |e, field| match field {
                "search" => vec![e.name.clone(), e.description.en.clone()],
                "zone" => vec![e.zone.as_str().to_string()],
                _ => Vec::new(),
            }),
            None => Vec::new(),
        }
    }

    pub fn view(&self, locale: &LocaleStore) -> String {
        let mut out = String::new();
        out.push_str(&format!("== {} ==\n", locale.resolve("exhibitorsPage.title")));
        out.push_str(&format!(
            "{}: {}   [z: {}]\n",
            locale.resolve("filterByZone"),
            self.sync.filters().value("zone").filter(|v| !v.is_empty()).unwrap_or("-"),
            locale.resolve("clearFilters")
        ));
        if let Some(needle) = self.sync.filters().value("search")
            && !needle.is_empty()
        {
            out.push_str(&format!("{}: {needle}\n", locale.resolve("search.title")));
        }
        match &self.data {
            Remote::Pending => out.push_str(&format!("{}\n", locale.resolve("loading"))),
            Remote::Failed(_) => out.push_str(&format!(
                "{} [r: {}]\n",
                locale.resolve("forms.dataFetchError"),
                locale.resolve("retry")
            )),
            Remote::Ready(_) => {
                let visible = self.visible();
                if visible.is_empty() {
                    out.push_str(&format!("{}\n", locale.resolve("noResults")));
                }
                for exhibitor in visible {
                    out.push_str(&format!(
                        "  {} | {} | {}\n",
                        exhibitor.booth, exhibitor.name, exhibitor.zone
                    ));
                }
            }
        }
        out
    }
}
