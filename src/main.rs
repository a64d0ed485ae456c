// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Movie Browser TUI.
//!
//! A terminal-based browser for a remote movie catalog.
//!
//! On start-up the application shows the currently popular movies. Typing in
//! the search field filters that list by title; pressing `Enter` asks the
//! catalog to search instead, and shows its results until the field is
//! cleared.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all UI state,
//!   and renders.
//! * A **Background Worker** makes the blocking catalog requests and reports
//!   back with events.
//! * **Input and Tick Threads** capture key presses and periodic redraw
//!   triggers.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod catalog;
mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    panic,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    catalog::{MovieCatalog, TmdbClient},
    components::{MovieGridState, SearchBar},
    events::{AppEvent, process_events},
    model::search::{MovieSearch, SearchAction},
    tasks::AppTask,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub search: MovieSearch,
    pub search_bar: SearchBar,
    pub grid_state: MovieGridState,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            search: MovieSearch::new(),
            search_bar: SearchBar::new(),
            grid_state: MovieGridState::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration, starts logging, builds the catalog client, and then
/// hands over to the terminal UI until the user quits.
fn main() -> Result<()> {
    let config = config::load_config();

    let log_path = logging::init()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = %log_path.display(), "starting");

    let api_key = config.api_key();
    if api_key.is_empty() {
        tracing::warn!("no catalog API key configured, requests will be rejected");
    }

    tracing::debug!(base_url = %config.base_url, language = %config.language, "catalog configured");

    let catalog = TmdbClient::new(&config, api_key).context("Failed to initialise catalog client")?;

    let (task_tx, task_rx) = mpsc::channel();
    let mut app = App::new(task_tx);

    install_panic_hook();

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, Box::new(catalog), task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        tracing::error!("exiting with error: {e:#}");
    } else {
        tracing::info!("exiting");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background colour based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour).ok();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it also runs while panicking.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Restores the terminal before a panic on the UI thread is reported.
///
/// Panics on helper threads are only logged; the drawing thread is still in
/// charge of the screen.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");

        if thread::current().name() == Some("main") {
            disable_raw_mode().ok();
            execute!(io::stdout(), LeaveAlternateScreen).ok();
            util::term::reset_terminal_bg().ok();
            default_hook(info);
        }
    }));
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to answer catalog requests.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// It then activates the search, which requests the popular movies, and
/// hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    catalog: Box<dyn MovieCatalog>,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(catalog, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("failed to read terminal input: {e}");
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Initial trigger to populate the grid with popular movies
    events::apply(app, SearchAction::Activate)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
