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

use anyhow::Result;

use crate::{
    App,
    catalog::CatalogError,
    components::SearchBarMode,
    model::{
        Movie,
        search::{SearchAction, SearchError},
    },
    tasks::AppTask,
};

/// Applies an action to the search state and carries out whatever catalog
/// request it asks for.
pub(crate) fn apply(app: &mut App, action: SearchAction) -> Result<()> {
    let before: Vec<u64> = app.search.displayed().iter().map(|m| m.id).collect();

    if let Some(request) = app.search.update(action) {
        tracing::debug!(?request, "dispatching catalog request");
        app.task_tx.send(AppTask::Fetch(request))?;
    }

    let after = app.search.displayed().iter().map(|m| m.id);
    if !after.eq(before.iter().copied()) {
        app.grid_state.reset();
    }

    app.search_bar.mode = if app.search.is_server_search() {
        SearchBarMode::Results
    } else if app.search.query().trim().is_empty() {
        SearchBarMode::Popular
    } else {
        SearchBarMode::Filter
    };

    Ok(())
}

pub(super) fn handle_popular_loaded(
    app: &mut App,
    result: Result<Vec<Movie>, CatalogError>,
) -> Result<()> {
    match &result {
        Ok(movies) => tracing::info!(count = movies.len(), "popular movies loaded"),
        Err(e) => tracing::error!("{}: {e}", SearchError::LoadFailed),
    }

    apply(app, SearchAction::PopularLoaded(result))
}

pub(super) fn handle_search_completed(
    app: &mut App,
    result: Result<Vec<Movie>, CatalogError>,
) -> Result<()> {
    match &result {
        Ok(movies) => tracing::info!(count = movies.len(), "search results received"),
        Err(e) => tracing::error!("{}: {e}", SearchError::SearchFailed),
    }

    apply(app, SearchAction::SearchCompleted(result))
}
