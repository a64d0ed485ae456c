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

//! Movie card grid and cursor management.
//!
//! This module provides a grid of movie cards. It separates the persistent
//! state ([`MovieGridState`], the cursor and scroll position) from the
//! transient widget ([`MovieGrid`]) that borrows the movies to draw.
//!
//! The grid's column count depends on the width it was last drawn at, so
//! vertical movement uses the layout from the most recent frame.

mod event;
mod render;

use crate::model::Movie;

pub(crate) const CARD_HEIGHT: u16 = 4;
pub(crate) const MIN_CARD_WIDTH: u16 = 24;

#[derive(Debug)]
pub(crate) struct MovieGridState {
    cursor: usize,
    offset_row: usize,
    columns: usize,
    visible_rows: usize,
}

impl MovieGridState {
    pub(crate) fn new() -> Self {
        Self {
            cursor: 0,
            offset_row: 0,
            columns: 1,
            visible_rows: 1,
        }
    }

    pub(crate) fn as_widget<'a>(&'a mut self, movies: &'a [Movie]) -> MovieGrid<'a> {
        MovieGrid {
            movies,
            state: self,
        }
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn reset(&mut self) {
        self.cursor = 0;
        self.offset_row = 0;
    }

    fn set_layout(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
    }

    fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 >= len { 0 } else { self.cursor + 1 };
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    fn goto_row_below(&mut self, len: usize) {
        let target = self.cursor + self.columns;
        if target < len {
            self.cursor = target;
        }
    }

    fn goto_row_above(&mut self) {
        if self.cursor >= self.columns {
            self.cursor -= self.columns;
        }
    }

    fn goto_page_forward(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let step = self.columns * self.visible_rows;
        self.cursor = (self.cursor + step).min(len - 1);
    }

    fn goto_page_back(&mut self) {
        let step = self.columns * self.visible_rows;
        self.cursor = self.cursor.saturating_sub(step);
    }

    /// Scroll so the row holding the cursor is on screen.
    fn scroll_to_cursor(&mut self) {
        let row = self.cursor / self.columns;
        if row < self.offset_row {
            self.offset_row = row;
        } else if row >= self.offset_row + self.visible_rows {
            self.offset_row = row + 1 - self.visible_rows;
        }
    }
}

pub(crate) struct MovieGrid<'a> {
    movies: &'a [Movie],
    state: &'a mut MovieGridState,
}

impl MovieGrid<'_> {
    pub(crate) fn selected(&self) -> Option<&Movie> {
        self.movies.get(self.state.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: usize, rows: usize) -> MovieGridState {
        let mut state = MovieGridState::new();
        state.set_layout(columns, rows);
        state
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut state = grid(3, 2);

        state.goto_previous(5);
        assert_eq!(state.cursor(), 4);

        state.goto_next(5);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn vertical_moves_stay_inside_the_list() {
        let mut state = grid(3, 2);

        state.goto_row_below(5);
        assert_eq!(state.cursor(), 3);

        // Nothing below index 4 in a five card list
        state.goto_next(5);
        state.goto_row_below(5);
        assert_eq!(state.cursor(), 4);

        state.goto_row_above();
        assert_eq!(state.cursor(), 1);
        state.goto_row_above();
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn paging_moves_by_a_screenful_and_clamps() {
        let mut state = grid(2, 3);

        state.goto_page_forward(20);
        assert_eq!(state.cursor(), 6);

        state.goto_page_forward(8);
        assert_eq!(state.cursor(), 7);

        state.goto_page_back();
        assert_eq!(state.cursor(), 1);
        state.goto_page_back();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn scrolling_follows_the_cursor() {
        let mut state = grid(2, 2);

        state.cursor = 9;
        state.scroll_to_cursor();
        assert_eq!(state.offset_row, 3);

        state.cursor = 2;
        state.scroll_to_cursor();
        assert_eq!(state.offset_row, 1);
    }

    #[test]
    fn empty_list_keeps_cursor_at_zero() {
        let mut state = grid(4, 4);

        state.goto_next(0);
        state.goto_previous(0);
        state.goto_page_forward(0);
        state.goto_row_below(0);
        state.clamp(0);

        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn selected_movie_follows_cursor() {
        let movies = vec![Movie::new(1, "Inception"), Movie::new(2, "Interstellar")];
        let mut state = grid(2, 1);
        state.goto_next(movies.len());

        let widget = state.as_widget(&movies);

        assert_eq!(widget.selected().map(|m| m.id), Some(2));
    }
}
