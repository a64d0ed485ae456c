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

//! Search text input.
//!
//! This module wraps a single-line text input. Submitting is not handled
//! here: the bar only owns the text and the cursor, and reports when the text
//! has changed so the caller can react.

mod event;
mod render;

use tui_input::Input;

pub(crate) const PLACEHOLDER: &str = "Search for a movie...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchBarMode {
    Popular,
    Filter,
    Results,
}

pub(crate) struct SearchBar {
    pub(crate) input: Input,
    pub(crate) mode: SearchBarMode,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            mode: SearchBarMode::Popular,
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }
}
