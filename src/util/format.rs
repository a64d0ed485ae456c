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

use crate::model::Movie;

const ELLIPSIS: char = '…';

/// Shortens `text` to at most `width` characters, marking the cut with an
/// ellipsis.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate("Interstellar", 8), "Interst…");
/// assert_eq!(truncate("Dune", 8), "Dune");
/// ```
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    if width == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(width - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// The card caption for a movie's release year.
pub(crate) fn year_label(movie: &Movie) -> String {
    match movie.release_year() {
        Some(year) => year.to_string(),
        None => "Unknown year".to_string(),
    }
}

/// Movie count for the status line, e.g. `"3 of 20 movies"` while filtering.
pub(crate) fn count_label(shown: usize, total: Option<usize>) -> String {
    match total {
        Some(total) if total != shown => format!("{shown} of {total} movies"),
        _ if shown == 1 => "1 movie".to_string(),
        _ => format!("{shown} movies"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Dune", 8), "Dune");
        assert_eq!(truncate("Interstellar", 12), "Interstellar");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("Interstellar", 8), "Interst…");
        assert_eq!(truncate("Amélie", 3), "Am…");
        assert_eq!(truncate("Interstellar", 0), "");
    }

    #[test]
    fn year_label_falls_back_when_unknown() {
        let mut movie = Movie::new(1, "Dune");
        assert_eq!(year_label(&movie), "Unknown year");

        movie.release_date = Some("2021-09-15".into());
        assert_eq!(year_label(&movie), "2021");
    }

    #[test]
    fn count_label_mentions_total_only_when_narrowed() {
        assert_eq!(count_label(20, Some(20)), "20 movies");
        assert_eq!(count_label(1, Some(20)), "1 of 20 movies");
        assert_eq!(count_label(1, None), "1 movie");
        assert_eq!(count_label(0, None), "0 movies");
    }
}
