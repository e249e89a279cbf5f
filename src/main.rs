//! Terminal front-end and runtime loop.
//!
//! Thin integration layer between the gallery library and a line-oriented
//! terminal: commands are read from stdin, page fetches run on the tokio
//! runtime, and the screen is redrawn after every handled event that asks for
//! it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   Event    ┌──────────────┐  Action::FetchPage  ┌────────────┐
//! │ stdin lines  │ ─────────▶ │ handle_event │ ──────────────────▶ │ PageWorker │
//! └──────────────┘            └──────────────┘                     └────────────┘
//!                                    ▲         Event::PageLoaded         │
//!                                    └───────────── mpsc ◀───────────────┘
//! ```
//!
//! Both sources are polled with `tokio::select!`, so state is only ever touched
//! from this loop.
//!
//! # Commands
//!
//! - `<n>` / `open <n>`: open the n-th card in the preview
//! - `select <n>`: select the n-th card without opening it
//! - `l` / `next`, `h` / `prev`: next/previous photo (crosses pages)
//! - `]` / `next-page`, `[` / `prev-page`: next/previous page
//! - `page <n>`: load page n
//! - `esc` / `close`: close the preview
//! - `r` / `reload`: fetch the current page again
//! - `q` / `quit`: exit
//!
//! The terminal size is taken from `LINES` and `COLUMNS`.

#![allow(clippy::multiple_crate_versions)]

use gallerist::ui::helpers::position_cursor;
use gallerist::worker::{FetchResponse, PageWorker};
use gallerist::{build_repository, handle_event, initialize, parse_args, ui, Action, Config, Event, GalleryState};
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};

const DEFAULT_ROWS: usize = 32;
const DEFAULT_COLS: usize = 100;

/// Whether the loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Session wrapper: library state plus the runtime's side of the worker.
struct Session {
    app: GalleryState,
    worker: PageWorker,
    results: UnboundedSender<FetchResponse>,
    rows: usize,
    cols: usize,
}

impl Session {
    /// Feeds one event to the engine, executes its actions and redraws if asked.
    fn dispatch(&mut self, event: &Event) -> gallerist::Result<Flow> {
        let (should_render, actions) = handle_event(&mut self.app, event)?;
        tracing::debug!(action_count = actions.len(), should_render, "event handled");

        let mut flow = Flow::Continue;
        for action in actions {
            if self.execute_action(action) == Flow::Quit {
                flow = Flow::Quit;
            }
        }

        if should_render && flow == Flow::Continue {
            self.draw()?;
        }
        Ok(flow)
    }

    fn execute_action(&self, action: Action) -> Flow {
        match action {
            Action::FetchPage(request) => {
                tracing::debug!(request_id = %request.request_id, page = request.page.get(), "spawning page fetch");
                self.worker.spawn(request, self.results.clone());
                Flow::Continue
            }
            Action::ReplaceUrl(url) => {
                tracing::info!(url = %url, "location replaced");
                Flow::Continue
            }
            Action::Quit => Flow::Quit,
        }
    }

    fn draw(&self) -> gallerist::Result<()> {
        let mut out = io::stdout().lock();
        ui::render(&mut out, &self.app, self.rows.saturating_sub(1), self.cols)?;
        position_cursor(&mut out, self.rows, 1)?;
        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }

    fn notice(&self, message: &str) -> gallerist::Result<()> {
        let mut out = io::stdout().lock();
        position_cursor(&mut out, self.rows, 1)?;
        write!(out, "\u{1b}[2K{message}  > ")?;
        out.flush()?;
        Ok(())
    }
}

/// Maps a command line to an engine event.
///
/// Card numbers are 1-based positions on the current page; numbers with no card
/// behind them map to nothing.
fn map_command(line: &str, app: &GalleryState) -> Option<Event> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_ascii_lowercase();
    let argument = words.next();

    let card = |number: &str| {
        number
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| app.photos().get(index))
            .cloned()
    };

    match (command.as_str(), argument) {
        ("q" | "quit", None) => Some(Event::Quit),
        ("l" | "next", None) => Some(Event::SelectNext),
        ("h" | "prev", None) => Some(Event::SelectPrev),
        ("]" | "next-page", None) => Some(Event::NextPage),
        ("[" | "prev-page", None) => Some(Event::PrevPage),
        ("esc" | "close", None) => Some(Event::ClosePreview),
        ("r" | "reload", None) => Some(Event::Reload),
        ("page", Some(number)) => number.parse().ok().map(Event::LoadPage),
        ("open", Some(number)) => card(number).map(Event::OpenPreview),
        ("select", Some(number)) => card(number).map(Event::SelectPhoto),
        (number, None) => card(number).map(Event::OpenPreview),
        _ => None,
    }
}

/// Terminal size from `LINES`/`COLUMNS`, with fallbacks.
fn terminal_size() -> (usize, usize) {
    let read = |name: &str, default: usize| {
        std::env::var(name)
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|&value: &usize| value > 0)
            .unwrap_or(default)
    };
    (read("LINES", DEFAULT_ROWS), read("COLUMNS", DEFAULT_COLS))
}

#[tokio::main]
async fn main() -> gallerist::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::load(&args)?;
    gallerist::observability::init_tracing(&config);

    tracing::debug!(start_url = %config.start_url, "gallery session starting");

    let repository = build_repository(&config)?;
    let (results, mut responses) = mpsc::unbounded_channel();
    let (rows, cols) = terminal_size();

    let mut session = Session {
        app: initialize(&config)?,
        worker: PageWorker::new(repository),
        results,
        rows,
        cols,
    };

    session.dispatch(&Event::Initialize)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let flow = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) if line.trim().is_empty() => Flow::Continue,
                Some(line) => match map_command(&line, &session.app) {
                    Some(event) => session.dispatch(&event)?,
                    None => {
                        session.notice(&format!("unknown command: {}", line.trim()))?;
                        Flow::Continue
                    }
                },
                None => Flow::Quit,
            },
            Some(response) = responses.recv() => session.dispatch(&Event::PageLoaded(response))?,
        };

        if flow == Flow::Quit {
            break;
        }
    }

    tracing::debug!("session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallerist::{Photo, Theme, User};
    use url::Url;

    fn app_with(ids: &[&str]) -> GalleryState {
        let mut app = GalleryState::new(Url::parse("http://gallery.local/").expect("url"), Theme::default());
        app.replace_photos(
            ids.iter()
                .map(|id| Photo {
                    id: (*id).to_string(),
                    color: "#000000".to_string(),
                    description: String::new(),
                    image_url: String::new(),
                    thumb_url: String::new(),
                    user: User {
                        id: "u".to_string(),
                        username: "u".to_string(),
                        name: "U".to_string(),
                        image_url: String::new(),
                    },
                })
                .collect(),
        );
        app
    }

    #[test]
    fn maps_navigation_commands() {
        let app = app_with(&[]);
        assert_eq!(map_command("l", &app), Some(Event::SelectNext));
        assert_eq!(map_command("prev", &app), Some(Event::SelectPrev));
        assert_eq!(map_command("]", &app), Some(Event::NextPage));
        assert_eq!(map_command("PREV-PAGE", &app), Some(Event::PrevPage));
        assert_eq!(map_command("esc", &app), Some(Event::ClosePreview));
        assert_eq!(map_command("page 3", &app), Some(Event::LoadPage(3)));
        assert_eq!(map_command("q", &app), Some(Event::Quit));
        assert_eq!(map_command("dance", &app), None);
    }

    #[test]
    fn card_numbers_are_one_based() {
        let app = app_with(&["a", "b"]);
        assert!(matches!(map_command("2", &app), Some(Event::OpenPreview(p)) if p.id == "b"));
        assert!(matches!(map_command("open 1", &app), Some(Event::OpenPreview(p)) if p.id == "a"));
        assert!(matches!(map_command("select 1", &app), Some(Event::SelectPhoto(p)) if p.id == "a"));
        assert_eq!(map_command("0", &app), None);
        assert_eq!(map_command("3", &app), None);
    }
}
