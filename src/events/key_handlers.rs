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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App,
    events::{AppEvent, handlers::apply},
    model::search::SearchAction,
};

/// Maps keyboard input to search actions.
///
/// The search field always has focus, so almost every key is text. The
/// exceptions are:
///
/// * **Application Control**: `Esc` and `Ctrl+C` exit.
/// * **Submit**: `Enter` runs a server search for the current query.
/// * **Navigation**: arrow, tab and page keys move the grid cursor.
///
/// # Errors
///
/// Returns an error if a request fails to send to the task worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        (KeyCode::Enter, _) => return apply(app, SearchAction::Submit),

        _ => {}
    }

    let event = Event::Key(key);

    if app
        .grid_state
        .process_event(&event, app.search.displayed().len())
    {
        return Ok(());
    }

    if let Some(value) = app.search_bar.process_event(&event) {
        apply(app, SearchAction::InputChanged(value))?;
    }

    Ok(())
}
