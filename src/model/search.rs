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

//! Movie search and filter state.
//!
//! [`MovieSearch`] owns everything the search page shows: the query text, the
//! movies on screen, the unfiltered popular list they are filtered from, and
//! the loading and error indicators.
//!
//! There are two ways of narrowing the list:
//!
//! * **Filtering**: while typing, the popular list is filtered locally by
//!   title.
//! * **Server search**: submitting the query asks the catalog instead, and the
//!   response replaces the list outright. Further typing leaves those results
//!   alone until the query is submitted again or cleared.
//!
//! State only changes through [`MovieSearch::update`], which performs no I/O.
//! When a transition needs the catalog it hands back a [`CatalogRequest`] for
//! the caller to carry out, and the outcome comes back in later as another
//! [`SearchAction`].

use std::fmt;

use crate::{catalog::CatalogError, model::Movie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchError {
    LoadFailed,
    SearchFailed,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::LoadFailed => f.write_str("Failed to load movies"),
            SearchError::SearchFailed => f.write_str("Failed to search movies"),
        }
    }
}

#[derive(Debug)]
pub(crate) enum SearchAction {
    Activate,
    InputChanged(String),
    Submit,
    PopularLoaded(Result<Vec<Movie>, CatalogError>),
    SearchCompleted(Result<Vec<Movie>, CatalogError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogRequest {
    Popular,
    Search(String),
}

#[derive(Debug, Default)]
pub(crate) struct MovieSearch {
    query: String,
    displayed: Vec<Movie>,
    baseline: Vec<Movie>,
    error: Option<SearchError>,
    loading: bool,
    server_search_mode: bool,
}

impl MovieSearch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn displayed(&self) -> &[Movie] {
        &self.displayed
    }

    pub(crate) fn baseline(&self) -> &[Movie] {
        &self.baseline
    }

    pub(crate) fn error(&self) -> Option<SearchError> {
        self.error
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn is_server_search(&self) -> bool {
        self.server_search_mode
    }

    /// Apply a single action, returning the catalog request it calls for.
    pub(crate) fn update(&mut self, action: SearchAction) -> Option<CatalogRequest> {
        match action {
            SearchAction::Activate => {
                self.loading = true;
                Some(CatalogRequest::Popular)
            }

            SearchAction::InputChanged(value) => {
                self.input_changed(value);
                None
            }

            SearchAction::Submit => self.submit(),

            SearchAction::PopularLoaded(result) => {
                match result {
                    Ok(movies) => {
                        self.baseline = movies.clone();
                        self.displayed = movies;
                        self.error = None;
                    }
                    Err(_) => self.error = Some(SearchError::LoadFailed),
                }
                self.loading = false;
                None
            }

            SearchAction::SearchCompleted(result) => {
                match result {
                    Ok(movies) => {
                        self.displayed = movies;
                        self.server_search_mode = true;
                        self.error = None;
                    }
                    Err(_) => {
                        // Search mode is left as it was
                        self.error = Some(SearchError::SearchFailed);
                        self.displayed.clear();
                    }
                }
                self.loading = false;
                None
            }
        }
    }

    fn input_changed(&mut self, value: String) {
        if value.trim().is_empty() {
            self.displayed = self.baseline.clone();
            self.server_search_mode = false;
            self.error = None;
        } else if !self.server_search_mode {
            self.displayed = filter_by_title(&self.baseline, &value);
        }

        self.query = value;
    }

    fn submit(&mut self) -> Option<CatalogRequest> {
        if self.query.trim().is_empty() {
            return None;
        }

        self.loading = true;
        Some(CatalogRequest::Search(self.query.clone()))
    }
}

/// Movies whose title contains `needle`, ignoring case, in their original
/// order.
pub(crate) fn filter_by_title(movies: &[Movie], needle: &str) -> Vec<Movie> {
    let needle = needle.to_lowercase();

    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
