#![forbid(unsafe_code)]

//! Latency-simulating content client.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::data;
use crate::types::{
    Announcement, Exhibitor, GalleryImage, ImportantInfo, NewsArticle, Opportunity, Resource,
    Session, Speaker, Sponsor, Update,
};

/// Default simulated round-trip, matching a believable CMS response time.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("content service unavailable")]
    Unavailable,
}

/// Blocking client over the static datasets in [`crate::data`].
///
/// Every getter sleeps for the configured delay before answering, so
/// callers run it off the UI thread. Clones share the failure switch,
/// which lets a test hand a clone to the code under test and trip it
/// from outside.
#[derive(Debug, Clone)]
pub struct CmsClient {
    delay: Duration,
    fail_next: Arc<AtomicBool>,
}

impl CmsClient {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            fail_next: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Client with zero delay, for tests and scripted runs.
    #[must_use]
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Arrange for the next getter call to fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn fetch<T>(&self, what: &str, produce: impl FnOnce() -> T) -> Result<T, CmsError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        if self.fail_next.swap(false, Ordering::SeqCst) {
            debug!(what, "simulated fetch failure");
            return Err(CmsError::Unavailable);
        }
        debug!(what, "fetch resolved");
        Ok(produce())
    }

    pub fn exhibitors(&self) -> Result<Vec<Exhibitor>, CmsError> {
        self.fetch("exhibitors", data::exhibitors)
    }

    /// The homepage carousel subset, in display order.
    pub fn featured_exhibitors(&self) -> Result<Vec<Exhibitor>, CmsError> {
        self.fetch("featured_exhibitors", || {
            let all = data::exhibitors();
            data::FEATURED_EXHIBITORS
                .iter()
                .filter_map(|name| all.iter().find(|e| e.name == *name).cloned())
                .collect()
        })
    }

    pub fn opportunities(&self) -> Result<Vec<Opportunity>, CmsError> {
        self.fetch("opportunities", data::opportunities)
    }

    /// Latest articles, newest first, capped at `limit`.
    pub fn news(&self, limit: usize) -> Result<Vec<NewsArticle>, CmsError> {
        self.fetch("news", move || {
            let mut articles = data::news();
            articles.sort_by(|a, b| b.date.cmp(&a.date));
            articles.truncate(limit);
            articles
        })
    }

    /// Full programme, ordered by day then start time.
    pub fn sessions(&self) -> Result<Vec<Session>, CmsError> {
        self.fetch("sessions", || {
            let mut sessions = data::sessions();
            sessions.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.time.cmp(&b.time)));
            sessions
        })
    }

    pub fn session_by_id(&self, id: u32) -> Result<Option<Session>, CmsError> {
        self.fetch("session_by_id", move || {
            data::sessions().into_iter().find(|s| s.id == id)
        })
    }

    pub fn sessions_by_speaker(&self, speaker_id: u32) -> Result<Vec<Session>, CmsError> {
        self.fetch("sessions_by_speaker", move || {
            let mut sessions: Vec<Session> = data::sessions()
                .into_iter()
                .filter(|s| s.speaker_ids.contains(&speaker_id))
                .collect();
            sessions.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.time.cmp(&b.time)));
            sessions
        })
    }

    pub fn speakers(&self) -> Result<Vec<Speaker>, CmsError> {
        self.fetch("speakers", data::speakers)
    }

    pub fn speaker_by_id(&self, id: u32) -> Result<Option<Speaker>, CmsError> {
        self.fetch("speaker_by_id", move || {
            data::speakers().into_iter().find(|s| s.id == id)
        })
    }

    pub fn resources(&self) -> Result<Vec<Resource>, CmsError> {
        self.fetch("resources", data::resources)
    }

    pub fn sponsors(&self) -> Result<Vec<Sponsor>, CmsError> {
        self.fetch("sponsors", data::sponsors)
    }

    pub fn updates(&self) -> Result<Vec<Update>, CmsError> {
        self.fetch("updates", || {
            let mut updates = data::updates();
            updates.sort_by(|a, b| b.date.cmp(&a.date));
            updates
        })
    }

    /// Only announcements currently switched on.
    pub fn announcements(&self) -> Result<Vec<Announcement>, CmsError> {
        self.fetch("announcements", || {
            data::announcements().into_iter().filter(|a| a.active).collect()
        })
    }

    pub fn gallery_images(&self) -> Result<Vec<GalleryImage>, CmsError> {
        self.fetch("gallery_images", data::gallery_images)
    }

    pub fn important_info(&self) -> Result<Vec<ImportantInfo>, CmsError> {
        self.fetch("important_info", data::important_info)
    }
}

impl Default for CmsClient {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_next_fails_exactly_one_call() {
        let client = CmsClient::immediate();
        client.fail_next();
        assert!(client.exhibitors().is_err());
        assert!(client.exhibitors().is_ok());
    }

    #[test]
    fn clones_share_the_failure_switch() {
        let client = CmsClient::immediate();
        let handle = client.clone();
        handle.fail_next();
        assert!(client.sessions().is_err());
    }

    #[test]
    fn news_is_newest_first_and_capped() {
        let client = CmsClient::immediate();
        let articles = client.news(2).unwrap();
        assert_eq!(articles.len(), 2);
        assert!(articles[0].date >= articles[1].date);
        assert_eq!(articles[0].date, "2025-10-10");
    }

    #[test]
    fn sessions_are_ordered_by_day_then_time() {
        let client = CmsClient::immediate();
        let sessions = client.sessions().unwrap();
        for pair in sessions.windows(2) {
            assert!((pair[0].day, pair[0].time.as_str()) <= (pair[1].day, pair[1].time.as_str()));
        }
    }

    #[test]
    fn featured_keeps_carousel_order() {
        let client = CmsClient::immediate();
        let featured = client.featured_exhibitors().unwrap();
        let names: Vec<&str> = featured.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, data::FEATURED_EXHIBITORS);
    }

    #[test]
    fn session_lookup_by_speaker() {
        let client = CmsClient::immediate();
        let sessions = client.sessions_by_speaker(1).unwrap();
        assert!(!sessions.is_empty());
        assert!(sessions.iter().all(|s| s.speaker_ids.contains(&1)));
    }
}
