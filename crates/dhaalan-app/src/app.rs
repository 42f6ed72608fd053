#![forbid(unsafe_code)]

//! Top-level application model.
//!
//! One `App` owns the stores, the navigation history, the current page
//! sub-model, and the overlay surfaces. All side effects (CMS fetches,
//! the chat stream) leave `update` as commands; results come back as
//! messages tagged with the navigation epoch so answers for a page the
//! user already left are dropped.

use std::rc::Rc;
use std::sync::Arc;

use dhaalan_cms::{CmsClient, CmsError, Exhibitor, NewsArticle, Opportunity, Remote, Session};
use dhaalan_filter::{History, Location};
use dhaalan_i18n::Locale;
use dhaalan_overlay::{FocusId, Key, KeyOutcome};
use dhaalan_state::{LocaleStore, PrefStore, SystemAppearance, Theme, ThemeStore};
use tracing::debug;

use crate::chat::ChatTransport;
use crate::overlays::{
    self, CHAT_INPUT, CHAT_SEND, LANG_ITEM_DV, LANG_ITEM_EN, Overlays, SEARCH_INPUT,
    SEARCH_SUBMIT, Surface,
};
use crate::pages::{ExhibitorsPage, HomePage, OpportunitiesPage, SchedulePage};
use crate::route::Route;
use crate::runtime::{Cmd, Model};
use crate::telemetry::Telemetry;

/// Currently mounted page sub-model.
pub enum Page {
    Home(HomePage),
    Exhibitors(ExhibitorsPage),
    Opportunities(OpportunitiesPage),
    Schedule(SchedulePage),
}

/// One line of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatLine {
    User(String),
    Bot(String),
}

/// Payload of a completed CMS fetch.
pub enum Fetched {
    Featured(Result<Vec<Exhibitor>, CmsError>),
    News(Result<Vec<NewsArticle>, CmsError>),
    Exhibitors(Result<Vec<Exhibitor>, CmsError>),
    Opportunities(Result<Vec<Opportunity>, CmsError>),
    Sessions(Result<Vec<Session>, CmsError>),
}

pub enum Msg {
    Key(Key),
    Backspace,
    Pointer { inside: bool },
    Navigate(Route),
    /// Overlay content finished mounting (deferred one tick).
    Mounted(Surface),
    Fetched { epoch: u64, data: Fetched },
    ChatChunk(String),
    ChatDone,
    ChatFailed,
    Quit,
}

pub struct App {
    pub locale: LocaleStore,
    pub theme: ThemeStore,
    pub history: History,
    pub route: Route,
    pub page: Page,
    pub overlays: Overlays,
    /// Focus target in the page chrome, restored when overlays close.
    pub focus: Option<FocusId>,
    pub search_input: String,
    pub chat_input: String,
    pub chat_log: Vec<ChatLine>,
    pub chat_busy: bool,
    cms: CmsClient,
    chat: Arc<dyn ChatTransport>,
    telemetry: Telemetry,
    /// Bumped on every navigation; stale fetch results are dropped.
    epoch: u64,
}

impl App {
    pub fn new(
        prefs: Rc<dyn PrefStore>,
        appearance: &dyn SystemAppearance,
        cms: CmsClient,
        chat: Arc<dyn ChatTransport>,
        initial: Location,
    ) -> Self {
        let locale = LocaleStore::new(dhaalan_i18n::expo_catalog(), Rc::clone(&prefs));
        let theme = ThemeStore::new(prefs, appearance);
        let route = Route::from_path(&initial.path).unwrap_or(Route::Home);
        let page = Self::mount_page(route, &initial);
        Self {
            locale,
            theme,
            history: History::new(initial),
            route,
            page,
            overlays: Overlays::new(),
            focus: None,
            search_input: String::new(),
            chat_input: String::new(),
            chat_log: Vec::new(),
            chat_busy: false,
            cms,
            chat,
            telemetry: Telemetry,
            epoch: 0,
        }
    }

    fn mount_page(route: Route, location: &Location) -> Page {
        match route {
            Route::Home => Page::Home(HomePage::default()),
            Route::Exhibitors => Page::Exhibitors(ExhibitorsPage::mount(location)),
            Route::Opportunities => Page::Opportunities(OpportunitiesPage::mount(location)),
            Route::Schedule => Page::Schedule(SchedulePage::new()),
        }
    }

    /// Fetch commands for the current route, tagged with the current
    /// epoch.
    fn fetch_current(&self) -> Cmd<Msg> {
        let epoch = self.epoch;
        let cms = self.cms.clone();
        match self.route {
            Route::Home => {
                let cms2 = self.cms.clone();
                Cmd::batch(vec![
                    Cmd::task(move || Msg::Fetched {
                        epoch,
                        data: Fetched::Featured(cms.featured_exhibitors()),
                    }),
                    Cmd::task(move || Msg::Fetched {
                        epoch,
                        data: Fetched::News(cms2.news(HomePage::NEWS_LIMIT)),
                    }),
                ])
            }
            Route::Exhibitors => Cmd::task(move || Msg::Fetched {
                epoch,
                data: Fetched::Exhibitors(cms.exhibitors()),
            }),
            Route::Opportunities => Cmd::task(move || Msg::Fetched {
                epoch,
                data: Fetched::Opportunities(cms.opportunities()),
            }),
            Route::Schedule => Cmd::task(move || Msg::Fetched {
                epoch,
                data: Fetched::Sessions(cms.sessions()),
            }),
        }
    }

    /// Push a new location and mount its page.
    fn navigate_to(&mut self, location: Location) -> Cmd<Msg> {
        let route = Route::from_path(&location.path).unwrap_or(Route::Home);
        self.epoch += 1;
        self.route = route;
        self.page = Self::mount_page(route, &location);
        self.history.push(location);
        self.fetch_current()
    }

    /// History back. Same-route arrivals keep the mounted page and only
    /// re-apply the arrival seed; a route change remounts.
    fn go_back(&mut self) -> Cmd<Msg> {
        if !self.history.back() {
            return Cmd::none();
        }
        let location = self.history.current().clone();
        let route = Route::from_path(&location.path).unwrap_or(Route::Home);
        if route == self.route {
            match &mut self.page {
                Page::Exhibitors(page) => page.reseed(&location),
                Page::Opportunities(page) => page.reseed(&location),
                _ => {}
            }
            return Cmd::none();
        }
        self.epoch += 1;
        self.route = route;
        self.page = Self::mount_page(route, &location);
        self.fetch_current()
    }

    fn retry(&mut self) -> Cmd<Msg> {
        let failed = match &mut self.page {
            Page::Home(page) => {
                let any = page.featured.failed().is_some() || page.news.failed().is_some();
                if any {
                    page.featured = Remote::Pending;
                    page.news = Remote::Pending;
                }
                any
            }
            Page::Exhibitors(page) => {
                let any = page.data.failed().is_some();
                if any {
                    page.data = Remote::Pending;
                }
                any
            }
            Page::Opportunities(page) => {
                let any = page.data.failed().is_some();
                if any {
                    page.data = Remote::Pending;
                }
                any
            }
            Page::Schedule(page) => {
                let any = page.data.failed().is_some();
                if any {
                    page.data = Remote::Pending;
                }
                any
            }
        };
        if failed { self.fetch_current() } else { Cmd::none() }
    }

    fn on_fetched(&mut self, epoch: u64, data: Fetched) {
        if epoch != self.epoch {
            debug!(epoch, current = self.epoch, "dropping stale fetch result");
            return;
        }
        match data {
            Fetched::Featured(result) => {
                let remote = self.settle("home.featured", result);
                if let Page::Home(page) = &mut self.page {
                    page.featured = remote;
                }
            }
            Fetched::News(result) => {
                let remote = self.settle("home.news", result);
                if let Page::Home(page) = &mut self.page {
                    page.news = remote;
                }
            }
            Fetched::Exhibitors(result) => {
                let remote = self.settle("exhibitors", result);
                if let Page::Exhibitors(page) = &mut self.page {
                    page.data = remote;
                }
            }
            Fetched::Opportunities(result) => {
                let remote = self.settle("opportunities", result);
                if let Page::Opportunities(page) = &mut self.page {
                    page.data = remote;
                }
            }
            Fetched::Sessions(result) => {
                let remote = self.settle("schedule", result);
                if let Page::Schedule(page) = &mut self.page {
                    page.data = remote;
                }
            }
        }
    }

    fn settle<T>(&self, what: &str, result: Result<T, CmsError>) -> Remote<T> {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(err) => {
                self.telemetry.report(&err, &[("fetch", what)]);
                Remote::Failed(self.locale.resolve("forms.dataFetchError"))
            }
        }
    }

    fn open_overlay(&mut self, surface: Surface) -> Cmd<Msg> {
        self.overlays.open(surface, self.focus);
        // Content mounts on the next turn, as in a real render cycle.
        Cmd::msg(Msg::Mounted(surface))
    }

    fn submit_search(&mut self) -> Cmd<Msg> {
        let query = std::mem::take(&mut self.search_input);
        let restore = self.overlays.close_active();
        self.restore_focus(restore);
        let query = query.trim().to_string();
        if query.is_empty() {
            return Cmd::none();
        }
        self.navigate_to(Location::with_query(
            Route::Opportunities.path(),
            vec![("search".to_string(), query)],
        ))
    }

    fn send_chat(&mut self) -> Cmd<Msg> {
        if self.chat_busy {
            return Cmd::none();
        }
        let prompt = std::mem::take(&mut self.chat_input);
        let prompt = prompt.trim().to_string();
        if prompt.is_empty() {
            return Cmd::none();
        }
        self.chat_log.push(ChatLine::User(prompt.clone()));
        self.chat_busy = true;
        let transport = Arc::clone(&self.chat);
        Cmd::stream(move |tx| match transport.send(&prompt) {
            Ok(chunks) => {
                for chunk in chunks {
                    if tx.send(Msg::ChatChunk(chunk)).is_err() {
                        return;
                    }
                }
                let _ = tx.send(Msg::ChatDone);
            }
            Err(_) => {
                let _ = tx.send(Msg::ChatFailed);
            }
        })
    }

    fn restore_focus(&mut self, restore: Option<FocusId>) {
        // A vanished target is skipped silently; the chrome targets here
        // are static, so any restore id is still valid.
        if let Some(id) = restore {
            self.focus = Some(id);
        }
    }

    /// Keys while an overlay is active: overlay navigation first, then
    /// text entry for whichever input holds focus.
    fn overlay_key(&mut self, key: Key) -> Cmd<Msg> {
        let outcome = self.overlays.handle_key(key);
        match outcome {
            KeyOutcome::Closed { restore } => {
                self.restore_focus(restore);
                Cmd::none()
            }
            KeyOutcome::Selected { item, restore } => {
                self.restore_focus(restore);
                match item {
                    LANG_ITEM_EN => self.locale.set_locale(Locale::En),
                    LANG_ITEM_DV => self.locale.set_locale(Locale::Dv),
                    _ => {}
                }
                Cmd::none()
            }
            KeyOutcome::FocusMoved(_) => Cmd::none(),
            KeyOutcome::Ignored => match (self.overlays.focused(), key) {
                (Some(SEARCH_INPUT), Key::Char(c)) => {
                    self.search_input.push(c);
                    Cmd::none()
                }
                (Some(SEARCH_INPUT | SEARCH_SUBMIT), Key::Enter) => self.submit_search(),
                (Some(CHAT_INPUT), Key::Char(c)) => {
                    self.chat_input.push(c);
                    Cmd::none()
                }
                (Some(CHAT_INPUT | CHAT_SEND), Key::Enter) => self.send_chat(),
                _ => Cmd::none(),
            },
        }
    }

    /// Keys with no overlay active: navigation and page-level controls.
    fn page_key(&mut self, key: Key) -> Cmd<Msg> {
        let Key::Char(c) = key else {
            return Cmd::none();
        };
        match c {
            'q' => Cmd::quit(),
            '1' => self.navigate_to(Location::new(Route::Home.path())),
            '2' => self.navigate_to(Location::new(Route::Exhibitors.path())),
            '3' => self.navigate_to(Location::new(Route::Opportunities.path())),
            '4' => self.navigate_to(Location::new(Route::Schedule.path())),
            'b' => self.go_back(),
            '/' => {
                self.focus = Some(overlays::NAV_SEARCH);
                self.open_overlay(Surface::Search)
            }
            'c' => {
                self.focus = Some(overlays::NAV_CHAT);
                self.open_overlay(Surface::Chat)
            }
            'l' => {
                self.focus = Some(overlays::NAV_LANGUAGE);
                self.open_overlay(Surface::Language)
            }
            't' => {
                let next = if self.theme.theme().is_dark() {
                    Theme::Light
                } else {
                    Theme::Dark
                };
                self.theme.set_theme(next);
                Cmd::none()
            }
            'r' => self.retry(),
            'x' => {
                match &mut self.page {
                    Page::Exhibitors(page) => page.clear_filters(&mut self.history),
                    Page::Opportunities(page) => page.clear_filters(&mut self.history),
                    _ => {}
                }
                Cmd::none()
            }
            'z' => {
                match &mut self.page {
                    Page::Exhibitors(page) => page.cycle_zone(&mut self.history),
                    Page::Opportunities(page) => page.cycle_zone(&mut self.history),
                    _ => {}
                }
                Cmd::none()
            }
            'o' => {
                if let Page::Opportunities(page) = &mut self.page {
                    page.cycle_type(&mut self.history);
                }
                Cmd::none()
            }
            'd' => {
                if let Page::Schedule(page) = &mut self.page {
                    page.next_day();
                }
                Cmd::none()
            }
            _ => Cmd::none(),
        }
    }

    fn overlay_view(&self) -> String {
        let Some(surface) = self.overlays.active() else {
            return String::new();
        };
        let mut out = String::from("\n");
        match surface {
            Surface::Search => {
                out.push_str(&format!("[ {} ]\n", self.locale.resolve("search.title")));
                let hint = if self.search_input.is_empty() {
                    self.locale.resolve("searchPlaceholder")
                } else {
                    self.search_input.clone()
                };
                out.push_str(&format!("> {hint}\n"));
                out.push_str(&format!("{}\n", self.locale.resolve("search.hint")));
            }
            Surface::Chat => {
                out.push_str(&format!("[ {} ]\n", self.locale.resolve("chat.title")));
                for line in &self.chat_log {
                    match line {
                        ChatLine::User(text) => out.push_str(&format!("you: {text}\n")),
                        ChatLine::Bot(text) => out.push_str(&format!("bot: {text}\n")),
                    }
                }
                let hint = if self.chat_input.is_empty() {
                    self.locale.resolve("chat.placeholder")
                } else {
                    self.chat_input.clone()
                };
                out.push_str(&format!("> {hint}\n"));
            }
            Surface::Language => {
                let marker = |l: Locale| if self.locale.locale() == l { "*" } else { " " };
                out.push_str(&format!(
                    "[{}] {}\n[{}] {}\n",
                    marker(Locale::En),
                    self.locale.resolve("language.en"),
                    marker(Locale::Dv),
                    self.locale.resolve("language.dv"),
                ));
            }
        }
        out
    }
}

impl Model for App {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        self.fetch_current()
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Key(key) => {
                if self.overlays.active().is_some() {
                    self.overlay_key(key)
                } else {
                    self.page_key(key)
                }
            }
            Msg::Backspace => {
                match self.overlays.focused() {
                    Some(SEARCH_INPUT) => {
                        self.search_input.pop();
                    }
                    Some(CHAT_INPUT) => {
                        self.chat_input.pop();
                    }
                    _ => {}
                }
                Cmd::none()
            }
            Msg::Pointer { inside } => {
                if let KeyOutcome::Closed { restore } = self.overlays.pointer_down(inside) {
                    self.restore_focus(restore);
                }
                Cmd::none()
            }
            Msg::Navigate(route) => self.navigate_to(Location::new(route.path())),
            Msg::Mounted(surface) => {
                self.overlays.mounted(surface);
                Cmd::none()
            }
            Msg::Fetched { epoch, data } => {
                self.on_fetched(epoch, data);
                Cmd::none()
            }
            Msg::ChatChunk(chunk) => {
                match self.chat_log.last_mut() {
                    Some(ChatLine::Bot(text)) if self.chat_busy => text.push_str(&chunk),
                    _ => self.chat_log.push(ChatLine::Bot(chunk)),
                }
                Cmd::none()
            }
            Msg::ChatDone => {
                self.chat_busy = false;
                Cmd::none()
            }
            Msg::ChatFailed => {
                self.telemetry.report(&"chat transport failed", &[]);
                self.chat_log
                    .push(ChatLine::Bot(self.locale.resolve("chat.fallback")));
                self.chat_busy = false;
                Cmd::none()
            }
            Msg::Quit => Cmd::quit(),
        }
    }

    fn view(&self) -> String {
        let document = self.locale.document();
        let mut out = String::new();
        out.push_str(&format!(
            "{} [{} {} | {} | {}]\n",
            self.locale.resolve("heroTitle"),
            document.lang,
            document.dir_attr(),
            self.theme.theme().name(),
            self.history.current().to_url(),
        ));
        let nav: Vec<String> = Route::ALL
            .iter()
            .enumerate()
            .map(|(i, route)| {
                let label = self.locale.resolve(route.nav_key());
                if *route == self.route {
                    format!("[{}:{label}]", i + 1)
                } else {
                    format!(" {}:{label} ", i + 1)
                }
            })
            .collect();
        out.push_str(&nav.join(" "));
        out.push_str("\n\n");
        out.push_str(&match &self.page {
            Page::Home(page) => page.view(&self.locale),
            Page::Exhibitors(page) => page.view(&self.locale),
            Page::Opportunities(page) => page.view(&self.locale),
            Page::Schedule(page) => page.view(&self.locale),
        });
        out.push_str(&self.overlay_view());
        out.push_str("\n/:search  c:chat  l:lang  t:theme  b:back  q:quit\n");
        out
    }
}
