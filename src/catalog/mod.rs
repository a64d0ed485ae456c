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

//! Remote movie catalog access.
//!
//! The application only ever asks two questions of the catalog: which movies
//! are popular right now, and which movies match a title. Both are read-only
//! and are answered in full or not at all.
//!
//! Catalog calls block the calling thread, so they are only ever made from
//! the background task worker (see [`crate::tasks`]).

mod tmdb;

pub(crate) use tmdb::TmdbClient;

use thiserror::Error;

use crate::model::Movie;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("catalog service error{}: {message}", status_suffix(.status))]
    Service {
        status: Option<u16>,
        message: String,
    },
}

impl CatalogError {
    pub(crate) fn service(message: impl Into<String>) -> Self {
        Self::Service {
            status: None,
            message: message.into(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    }
}

pub(crate) trait MovieCatalog: Send {
    /// Fetch the current list of popular movies.
    fn popular(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Fetch the movies whose titles match `query`.
    ///
    /// No matches is an empty list, not an error.
    fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_message_includes_status_when_known() {
        let err = CatalogError::Service {
            status: Some(401),
            message: "Invalid API key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "catalog service error (HTTP 401): Invalid API key"
        );

        let err = CatalogError::service("request abandoned");
        assert_eq!(err.to_string(), "catalog service error: request abandoned");
    }
}
