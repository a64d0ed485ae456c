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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    components::MovieGrid,
    model::search::MovieSearch,
    theme::Theme,
    util::format::{count_label, year_label},
};

const LOADING_TEXT: &str = "Loading...";
const NO_RESULTS_TEXT: &str = "No movies found.";
const HELP_TEXT: &str =
    " Enter search · Tab/Shift+Tab next/prev · ↑↓ rows · PgUp/PgDn pages · Esc quit ";

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// Top to bottom:
///
/// * **Search bar**: the query input and the search button.
/// * **Status line**: the current error, or the movie count and the movie
///   under the cursor.
/// * **Content**: the movie grid, or a loading / no results placeholder.
/// * **Footer**: key help.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    app.search_bar.draw(f, outer[0], &app.theme);

    let search = &app.search;
    let mut grid = app.grid_state.as_widget(search.displayed());

    draw_status(f, outer[1], search, &grid, &app.theme);

    if search.is_loading() {
        draw_placeholder(f, outer[2], LOADING_TEXT, &app.theme);
    } else if search.displayed().is_empty() {
        draw_placeholder(f, outer[2], NO_RESULTS_TEXT, &app.theme);
    } else {
        grid.draw(f, outer[2], &app.theme);
    }

    f.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(app.theme.status_fg)),
        outer[3],
    );
}

fn draw_status(f: &mut Frame, area: Rect, search: &MovieSearch, grid: &MovieGrid, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .horizontal_margin(1)
        .split(area);

    if let Some(error) = search.error() {
        let line = Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(theme.error_colour)
                .add_modifier(Modifier::BOLD),
        ));
        f.render_widget(Paragraph::new(line), chunks[0]);
        return;
    }

    if search.is_loading() {
        return;
    }

    let total = (!search.is_server_search()).then(|| search.baseline().len());
    let count = count_label(search.displayed().len(), total);
    f.render_widget(
        Paragraph::new(count).style(Style::default().fg(theme.status_fg)),
        chunks[0],
    );

    if let Some(movie) = grid.selected() {
        let line = Line::from(vec![
            Span::styled(
                movie.title.as_str(),
                Style::default().fg(theme.accent_colour),
            ),
            Span::styled(
                format!(" ({})", year_label(movie)),
                Style::default().fg(theme.status_fg),
            ),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Right), chunks[1]);
    }
}

fn draw_placeholder(f: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.status_fg)),
        middle,
    );
}
