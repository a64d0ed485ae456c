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

//! Input handling and event processing for the movie grid.
//!
//! This module maps raw terminal keyboard events to cursor movement. Keys
//! that edit text are never consumed here, since the search field always has
//! focus.

use crossterm::event::{Event, KeyCode, KeyEventKind};

use crate::components::MovieGridState;

impl MovieGridState {
    /// Moves the cursor for navigation keys, returning whether the key was
    /// consumed.
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if key_event.kind == KeyEventKind::Release {
            return false;
        }

        match key_event.code {
            KeyCode::Down => self.goto_row_below(len),
            KeyCode::Up => self.goto_row_above(),
            KeyCode::Tab => self.goto_next(len),
            KeyCode::BackTab => self.goto_previous(len),
            KeyCode::PageDown => self.goto_page_forward(len),
            KeyCode::PageUp => self.goto_page_back(),
            _ => return false,
        }

        self.clamp(len);
        true
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn navigation_keys_are_consumed() {
        let mut state = MovieGridState::new();

        assert!(state.process_event(&key(KeyCode::Tab), 3));
        assert_eq!(state.cursor(), 1);

        assert!(state.process_event(&key(KeyCode::BackTab), 3));
        assert!(state.process_event(&key(KeyCode::BackTab), 3));
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn text_keys_are_left_for_the_search_bar() {
        let mut state = MovieGridState::new();

        for code in [KeyCode::Char('j'), KeyCode::Left, KeyCode::Backspace, KeyCode::Enter] {
            assert!(!state.process_event(&key(code), 3));
        }
        assert_eq!(state.cursor(), 0);
    }
}
