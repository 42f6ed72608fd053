#![forbid(unsafe_code)]

use dhaalan_cms::{Remote, Session};
use dhaalan_state::LocaleStore;

pub const DAYS: u8 = 3;

/// Programme view, one expo day at a time.
#[derive(Debug)]
pub struct SchedulePage {
    pub data: Remote<Vec<Session>>,
    pub day: u8,
}

impl SchedulePage {
    pub fn new() -> Self {
        Self {
            data: Remote::Pending,
            day: 1,
        }
    }

    /// Advance the day tab, wrapping after the last day.
    pub fn next_day(&mut self) {
        self.day = self.day % DAYS + 1;
    }

    /// Sessions for the selected day, already ordered by start time.
    pub fn visible(&self) -> Vec<&Session> {
        match self.data.ready() {
            Some(sessions) => sessions.iter().filter(|s| s.day == self.day).collect(),
            None => Vec::new(),
        }
    }

    pub fn view(&self, locale: &LocaleStore) -> String {
        let mut out = String::new();
        out.push_str(&format!("== {} ==\n", locale.resolve("schedulePage.title")));
        out.push_str(&format!("[d] Day {}/{DAYS}\n", self.day));
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
                for session in visible {
                    out.push_str(&format!(
                        "  {} | {} | {} | {:?}\n",
                        session.time,
                        session.title.get(locale.locale()),
                        session.location,
                        session.kind
                    ));
                }
            }
        }
        out
    }
}

impl Default for SchedulePage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dhaalan_cms::data;

    #[test]
    fn day_tab_wraps() {
        let mut page = SchedulePage::new();
        page.next_day();
        page.next_day();
        page.next_day();
        assert_eq!(page.day, 1);
    }

    #[test]
    fn visible_is_filtered_to_the_selected_day() {
        let mut page = SchedulePage::new();
        page.data = Remote::Ready(data::sessions());
        page.day = 2;
        let visible = page.visible();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|s| s.day == 2));
    }

    #[test]
    fn pending_shows_nothing() {
        let page = SchedulePage::new();
        assert!(page.visible().is_empty());
    }
}
