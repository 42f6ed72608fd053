#![forbid(unsafe_code)]

use dhaalan_cms::types::{OpportunityType, Zone};
use dhaalan_cms::{Opportunity, Remote};
use dhaalan_filter::{FieldSpec, FilterSync, History, Location, apply_filters};
use dhaalan_state::LocaleStore;

const FIELDS: [FieldSpec; 3] = [
    FieldSpec::text("search"),
    FieldSpec::choice("type"),
    FieldSpec::choice("zone"),
];

/// Opportunity board: free-text search over title and exhibitor name,
/// plus exact type and zone filters.
#[derive(Debug)]
pub struct OpportunitiesPage {
    pub sync: FilterSync,
    pub data: Remote<Vec<Opportunity>>,
}

impl OpportunitiesPage {
    pub fn mount(location: &Location) -> Self {
        Self {
            sync: FilterSync::mount(&FIELDS, location),
            data: Remote::Pending,
        }
    }

    pub fn reseed(&mut self, location: &Location) {
        self.sync.reseed(location);
    }

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

    pub fn cycle_type(&mut self, history: &mut History) {
        let next = match self.sync.filters().value("type") {
            None | Some("") => Some(OpportunityType::ALL[0]),
            Some(current) => {
                let at = OpportunityType::ALL.iter().position(|t| t.as_str() == current);
                at.and_then(|i| OpportunityType::ALL.get(i + 1)).copied()
            }
        };
        let value = next.map(OpportunityType::as_str).unwrap_or("");
        self.set_filter(history, "type", value);
    }

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

    /// A text match may hit the title or the exhibitor name.
    pub fn visible(&self) -> Vec<&Opportunity> {
        match self.data.ready() {
            Some(items) => apply_filters(items, self.sync.filters(), |o, field| match field {
                "search" => vec![o.title.clone(), o.exhibitor_name.clone()],
                "type" => vec![o.kind.as_str().to_string()],
                "zone" => vec![o.zone.as_str().to_string()],
                _ => Vec::new(),
            }),
            None => Vec::new(),
        }
    }

    pub fn view(&self, locale: &LocaleStore) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "== {} ==\n",
            locale.resolve("opportunitiesPage.title")
        ));
        let filters = self.sync.filters();
        out.push_str(&format!(
            "{}: {}   {}: {}   [o/z, x: {}]\n",
            locale.resolve("filterByType"),
            filters.value("type").filter(|v| !v.is_empty()).unwrap_or("-"),
            locale.resolve("filterByZone"),
            filters.value("zone").filter(|v| !v.is_empty()).unwrap_or("-"),
            locale.resolve("clearFilters")
        ));
        if let Some(needle) = filters.value("search")
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
                for op in visible {
                    let apply = match &op.url {
                        Some(url) => format!("{} -> {url}", locale.resolve("opportunitiesPage.applyNow")),
                        None => "-".to_string(),
                    };
                    out.push_str(&format!(
                        "  {} | {} | {} | {apply}\n",
                        op.title, op.exhibitor_name, op.kind
                    ));
                }
            }
        }
        out
    }
}
