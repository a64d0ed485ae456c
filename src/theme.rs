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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the application's colour palette. All colours are RGB
//! so the terminal background can be matched to the frame.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) status_fg: Color,

    pub(crate) input_fg: Color,
    pub(crate) placeholder_fg: Color,

    pub(crate) card_title_fg: Color,
    pub(crate) card_year_fg: Color,
    pub(crate) card_poster_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(20, 24, 33),
            accent_colour: Color::Rgb(229, 9, 20),
            border_colour: Color::Rgb(90, 94, 105),
            error_colour: Color::Rgb(255, 107, 107),
            status_fg: Color::Rgb(162, 161, 166),

            input_fg: Color::Rgb(255, 255, 255),
            placeholder_fg: Color::Rgb(110, 112, 120),

            card_title_fg: Color::Rgb(255, 255, 255),
            card_year_fg: Color::Rgb(179, 157, 219),
            card_poster_fg: Color::Rgb(120, 124, 134),
        }
    }
}
