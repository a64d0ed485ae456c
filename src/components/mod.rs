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

//! Reusable interactive widgets.
//!
//! Each component keeps its own state, handles the key events routed to it,
//! and knows how to draw itself through [`crate::render::Render`].

mod movie_grid;
mod search_bar;

pub(crate) use movie_grid::{MovieGrid, MovieGridState};
pub(crate) use search_bar::{SearchBar, SearchBarMode};
