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

//! Input handling for the search bar.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use tui_input::backend::crossterm::EventHandler;

use crate::components::SearchBar;

impl SearchBar {
    /// Feed a terminal event to the text input.
    ///
    /// Returns the new text when the event changed it. Keys that belong to
    /// other parts of the UI (submit, grid navigation, exit) are left alone.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<String> {
        let Event::Key(key) = event else {
            return None;
        };

        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Enter
            | KeyCode::Esc
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::PageUp
            | KeyCode::PageDown => return None,
            _ => {}
        }

        let before = self.input.value().to_string();
        self.input.handle_event(event);
        let after = self.input.value();

        (after != before).then(|| after.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(bar: &mut SearchBar, text: &str) -> Vec<String> {
        text.chars()
            .filter_map(|c| bar.process_event(&key(KeyCode::Char(c))))
            .collect()
    }

    #[test]
    fn every_keystroke_reports_the_new_value() {
        let mut bar = SearchBar::new();

        let changes = type_str(&mut bar, "dune");

        assert_eq!(changes, vec!["d", "du", "dun", "dune"]);
        assert_eq!(bar.value(), "dune");
    }

    #[test]
    fn backspace_to_empty_reports_empty_value() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "x");

        let change = bar.process_event(&key(KeyCode::Backspace));

        assert_eq!(change, Some(String::new()));
    }

    #[test]
    fn cursor_movement_is_not_a_change() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "dune");

        assert_eq!(bar.process_event(&key(KeyCode::Left)), None);
        assert_eq!(bar.process_event(&key(KeyCode::Home)), None);
        assert_eq!(bar.value(), "dune");
    }

    #[test]
    fn submit_and_navigation_keys_are_ignored() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "dune");

        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Down, KeyCode::Tab] {
            assert_eq!(bar.process_event(&key(code)), None);
        }
        assert_eq!(bar.value(), "dune");
    }
}
