#![forbid(unsafe_code)]

use std::io::Write;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use crossterm::terminal;
use tracing_subscriber::EnvFilter;

use dhaalan_app::app::{App, Msg};
use dhaalan_app::chat::ScriptedTransport;
use dhaalan_app::runtime::{Model, Runtime};
use dhaalan_cms::CmsClient;
use dhaalan_cms::client::DEFAULT_DELAY;
use dhaalan_filter::Location;
use dhaalan_i18n::Locale;
use dhaalan_overlay::Key;
use dhaalan_state::{EnvAppearance, FilePrefs, LOCALE_KEY, PrefStore, THEME_KEY, Theme};

#[derive(Debug, Parser)]
#[command(name = "dhaalan", about = "Dhaalan 2025 expo terminal client", version)]
struct Cli {
    /// Start in this locale (en or dv); overrides the saved preference.
    #[arg(long)]
    locale: Option<String>,

    /// Start with this theme (light or dark); overrides the saved
    /// preference.
    #[arg(long)]
    theme: Option<String>,

    /// Simulated CMS latency in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Tracing filter (e.g. `debug`, `dhaalan_filter=trace`); logs go
    /// to dhaalan.log.
    #[arg(long)]
    log: Option<String>,

    /// Preference file path.
    #[arg(long, default_value = ".dhaalan-prefs.json")]
    prefs: String,

    /// Initial URL, e.g. `/exhibitors?exhibitor=Loopcraft`.
    #[arg(default_value = "/")]
    url: String,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("terminal: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("unknown locale {0:?} (expected en or dv)")]
    BadLocale(String),
    #[error("unknown theme {0:?} (expected light or dark)")]
    BadTheme(String),
}

fn main() {
    if let Err(error) = run(Cli::parse()) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(filter) = &cli.log {
        let file = std::fs::File::create("dhaalan.log")?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(file)
            .with_ansi(false)
            .init();
    }

    let prefs: Rc<dyn PrefStore> = Rc::new(FilePrefs::new(cli.prefs.clone()));

    // CLI overrides land in the store the same way a saved choice would,
    // so the session behaves identically either way.
    if let Some(code) = &cli.locale {
        let locale = Locale::from_code(code).ok_or_else(|| AppError::BadLocale(code.clone()))?;
        let _ = prefs.save(LOCALE_KEY, locale.code());
    }
    if let Some(name) = &cli.theme {
        let theme = Theme::from_name(name).ok_or_else(|| AppError::BadTheme(name.clone()))?;
        let _ = prefs.save(THEME_KEY, theme.name());
    }

    let delay = cli
        .delay_ms
        .map_or(DEFAULT_DELAY, Duration::from_millis);
    let app = App::new(
        prefs,
        &EnvAppearance,
        CmsClient::new(delay),
        Arc::new(ScriptedTransport::demo()),
        Location::parse(&cli.url),
    );

    terminal::enable_raw_mode()?;
    let result = event_loop(Runtime::new(app));
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(mut rt: Runtime<App>) -> Result<(), AppError> {
    let mut last_frame = String::new();
    while rt.is_running() {
        let frame = rt.model().view();
        if frame != last_frame {
            draw(&frame)?;
            last_frame = frame;
        }
        if crossterm::event::poll(Duration::from_millis(50))? {
            match crossterm::event::read()? {
                Event::Key(key) => {
                    if let Some(msg) = map_key(key) {
                        rt.deliver(msg);
                    }
                }
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    // Without real hit-testing, any click counts as
                    // outside the overlay boundary.
                    rt.deliver(Msg::Pointer { inside: false });
                }
                _ => {}
            }
        }
        // Drain effect results that arrived while we waited for input.
        while rt.poll(Duration::ZERO) {}
    }
    Ok(())
}

fn map_key(key: KeyEvent) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }
    match key.code {
        KeyCode::Tab => Some(Msg::Key(Key::Tab)),
        KeyCode::BackTab => Some(Msg::Key(Key::BackTab)),
        KeyCode::Esc => Some(Msg::Key(Key::Escape)),
        KeyCode::Enter => Some(Msg::Key(Key::Enter)),
        KeyCode::Up => Some(Msg::Key(Key::Up)),
        KeyCode::Down => Some(Msg::Key(Key::Down)),
        KeyCode::Backspace => Some(Msg::Backspace),
        KeyCode::Char(c) => Some(Msg::Key(Key::Char(c))),
        _ => None,
    }
}

fn draw(frame: &str) -> Result<(), AppError> {
    let mut out = std::io::stdout();
    crossterm::execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    )?;
    // Raw mode needs explicit carriage returns.
    for line in frame.lines() {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\r\n")?;
    }
    out.flush()?;
    Ok(())
}
