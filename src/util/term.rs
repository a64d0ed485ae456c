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

//! Terminal environment and styling utilities.
//!
//! These functions use OSC (Operating System Command) escape sequences to
//! change the terminal emulator's own background colour, so the area outside
//! the drawn frame matches the theme. Terminals that do not understand the
//! sequences ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

/// Sets the terminal background colour using an OSC 11 escape sequence.
///
/// Non-RGB colours are left to the terminal's own palette.
pub(crate) fn set_terminal_bg(colour: Color) -> io::Result<()> {
    let Some(hex) = to_hex(colour) else {
        return Ok(());
    };

    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{hex}\x07")?;
    stdout.flush()
}

/// Resets the terminal background to the user's configured default with
/// OSC 111.
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}

fn to_hex(colour: Color) -> Option<String> {
    match colour {
        Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
        _ => None,
    }
}
