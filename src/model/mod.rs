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

//! Domain models and core data structures.
//!
//! This module defines the central entity of the application, the movie as
//! presented by the remote catalog, independent of the wire format used to
//! fetch it.

pub(crate) mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Movie {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) poster_path: Option<String>,
    pub(crate) release_date: Option<String>,
}

impl Movie {
    pub(crate) fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            release_date: None,
        }
    }

    /// The year component of the release date, if the catalog supplied one.
    ///
    /// Release dates arrive as `YYYY-MM-DD` strings, but the catalog is known
    /// to send empty strings for unreleased titles, so anything without four
    /// leading digits yields `None`.
    pub(crate) fn release_year(&self) -> Option<&str> {
        let date = self.release_date.as_deref()?;
        let year = date.get(..4)?;
        year.chars().all(|c| c.is_ascii_digit()).then_some(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released(date: &str) -> Movie {
        Movie {
            release_date: Some(date.to_string()),
            ..Movie::new(1, "Dune")
        }
    }

    #[test]
    fn release_year_takes_leading_digits() {
        assert_eq!(released("2021-09-15").release_year(), Some("2021"));
    }

    #[test]
    fn release_year_ignores_empty_or_malformed_dates() {
        assert_eq!(released("").release_year(), None);
        assert_eq!(released("TBA").release_year(), None);
        assert_eq!(released("20x1-01-01").release_year(), None);
        assert_eq!(Movie::new(1, "Dune").release_year(), None);
    }
}
