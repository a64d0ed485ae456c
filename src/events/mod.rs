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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (catalog replies), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function turns each event into a
//!    [`SearchAction`](crate::model::search::SearchAction) for the search
//!    state, and forwards any catalog request it produces to the task worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;

pub(crate) use handlers::apply;
use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, catalog::CatalogError, model::Movie, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    PopularLoaded(Result<Vec<Movie>, CatalogError>),
    SearchCompleted(Result<Vec<Movie>, CatalogError>),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key),
        AppEvent::PopularLoaded(result) => handle_popular_loaded(app, result),
        AppEvent::SearchCompleted(result) => handle_search_completed(app, result),
        AppEvent::Tick | AppEvent::ExitApplication => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver, TryRecvError};

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{
        components::SearchBarMode,
        model::search::{CatalogRequest, SearchAction},
        tasks::AppTask,
    };

    /// An application showing three popular movies, with the start-up
    /// request already taken off the task channel.
    fn loaded_app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        let mut app = App::new(task_tx);

        apply(&mut app, SearchAction::Activate).unwrap();
        assert!(matches!(
            task_rx.try_recv(),
            Ok(AppTask::Fetch(CatalogRequest::Popular))
        ));

        handle_popular_loaded(
            &mut app,
            Ok(vec![
                Movie::new(1, "Inception"),
                Movie::new(2, "Interstellar"),
                Movie::new(3, "The Prestige"),
            ]),
        )
        .unwrap();

        (app, task_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_then_enter_sends_one_search() {
        let (mut app, task_rx) = loaded_app();

        type_text(&mut app, "dune");
        assert!(matches!(task_rx.try_recv(), Err(TryRecvError::Empty)));

        press(&mut app, KeyCode::Enter);

        match task_rx.try_recv() {
            Ok(AppTask::Fetch(CatalogRequest::Search(query))) => assert_eq!(query, "dune"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(task_rx.try_recv(), Err(TryRecvError::Empty)));
        assert!(app.search.is_loading());
    }

    #[test]
    fn enter_on_blank_field_sends_nothing() {
        let (mut app, task_rx) = loaded_app();

        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(task_rx.try_recv(), Err(TryRecvError::Empty)));
        assert!(!app.search.is_loading());
        assert_eq!(app.search.displayed().len(), 3);
    }

    #[test]
    fn esc_and_ctrl_c_request_exit() {
        let (mut app, task_rx) = loaded_app();

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));

        process_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));

        assert_eq!(app.search_bar.value(), "");
        assert!(matches!(task_rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn new_results_move_the_cursor_back_to_the_start() {
        let (mut app, _task_rx) = loaded_app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.grid_state.cursor(), 1);
        assert_eq!(app.search_bar.value(), "");

        handle_search_completed(
            &mut app,
            Ok(vec![Movie::new(9, "Dune"), Movie::new(10, "Arrival")]),
        )
        .unwrap();

        assert_eq!(app.grid_state.cursor(), 0);
    }

    #[test]
    fn cursor_stays_put_when_filtering_keeps_every_movie() {
        let (mut app, _task_rx) = loaded_app();

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "e");

        assert_eq!(app.search.displayed().len(), 3);
        assert_eq!(app.grid_state.cursor(), 1);
    }

    #[test]
    fn search_bar_mode_follows_the_search_state() {
        let (mut app, _task_rx) = loaded_app();
        assert_eq!(app.search_bar.mode, SearchBarMode::Popular);

        type_text(&mut app, "in");
        assert_eq!(app.search_bar.mode, SearchBarMode::Filter);
        assert_eq!(app.search.displayed().len(), 2);

        press(&mut app, KeyCode::Enter);
        handle_event(
            &mut app,
            AppEvent::SearchCompleted(Ok(vec![Movie::new(4, "Inside Out")])),
        )
        .unwrap();
        assert_eq!(app.search_bar.mode, SearchBarMode::Results);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.search_bar.mode, SearchBarMode::Results);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.search_bar.mode, SearchBarMode::Popular);
        assert_eq!(app.search.displayed().len(), 3);
    }
}
