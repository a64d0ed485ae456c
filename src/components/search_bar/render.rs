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

//! Render the search bar.
//!
//! This module draws the bordered text input, its placeholder, the cursor,
//! and the search button label.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{
        SearchBar,
        search_bar::{PLACEHOLDER, SearchBarMode},
    },
    render::Render,
    theme::Theme,
};

const BUTTON_LABEL: &str = "[ Search ]";

impl Render for SearchBar {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = match self.mode {
            SearchBarMode::Popular => " Popular ",
            SearchBarMode::Filter => " Filter ",
            SearchBarMode::Results => " Search results ",
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(Span::styled(title, Style::default().fg(theme.accent_colour)))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(BUTTON_LABEL.len() as u16 + 1),
            ])
            .split(inner);

        let text = if self.value().is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(theme.placeholder_fg),
            ))
        } else {
            Line::from(Span::styled(
                self.value(),
                Style::default().fg(theme.input_fg),
            ))
        };

        // Keep the cursor in view once the text is wider than the field
        let width = chunks[0].width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);
        f.render_widget(Paragraph::new(text).scroll((0, scroll as u16)), chunks[0]);

        let button = Paragraph::new(Line::from(Span::styled(
            BUTTON_LABEL,
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )))
        .right_aligned();
        f.render_widget(button, chunks[1]);

        let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position((chunks[0].x + cursor, chunks[0].y));
    }
}
