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

//! UI rendering logic for the movie grid.
//!
//! Cards are laid out left to right, top to bottom, as many per row as fit
//! at [`MIN_CARD_WIDTH`]. Each card shows the title in its border, then the
//! release year and the poster reference.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{
        MovieGrid,
        movie_grid::{CARD_HEIGHT, MIN_CARD_WIDTH},
    },
    model::Movie,
    render::Render,
    theme::Theme,
    util::format::{truncate, year_label},
};

impl Render for MovieGrid<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let columns = (area.width / MIN_CARD_WIDTH).max(1);
        let rows = (area.height / CARD_HEIGHT).max(1);
        let card_width = area.width / columns;

        self.state.set_layout(columns as usize, rows as usize);
        self.state.clamp(self.movies.len());
        self.state.scroll_to_cursor();

        let first = self.state.offset_row * self.state.columns;
        let visible = self
            .movies
            .iter()
            .enumerate()
            .skip(first)
            .take(self.state.columns * self.state.visible_rows);

        for (index, movie) in visible {
            let slot = index - first;
            let column = (slot % self.state.columns) as u16;
            let row = (slot / self.state.columns) as u16;

            let card = Rect {
                x: area.x + column * card_width,
                y: area.y + row * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(area.height - row * CARD_HEIGHT),
            };

            draw_card(f, card, movie, index == self.state.cursor, theme);
        }
    }
}

fn draw_card(f: &mut Frame, area: Rect, movie: &Movie, is_current: bool, theme: &Theme) {
    let border_style = if is_current {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    // Borders and padding take four columns
    let title_width = area.width.saturating_sub(4) as usize;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            truncate(&movie.title, title_width),
            Style::default()
                .fg(theme.card_title_fg)
                .add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1));

    let poster = movie.poster_path.as_deref().unwrap_or("No poster");

    let body = vec![
        Line::from(Span::styled(
            year_label(movie),
            Style::default().fg(theme.card_year_fg),
        )),
        Line::from(Span::styled(
            truncate(poster, title_width),
            Style::default().fg(theme.card_poster_fg),
        )),
    ];

    f.render_widget(Paragraph::new(body).block(block), area);
}
