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

use std::{
    panic::{self, AssertUnwindSafe},
    time::Instant,
};

use anyhow::Result;

use crate::{
    catalog::CatalogError,
    model::Movie,
    tasks::{Reply, TaskContext},
};

pub(super) fn fetch_popular(ctx: &TaskContext, reply: Reply) -> Result<()> {
    let started = Instant::now();
    let result = guarded("popular", || ctx.catalog.popular());
    log_outcome("popular", &result, started);

    reply.send(result)
}

pub(super) fn search(ctx: &TaskContext, reply: Reply, query: &str) -> Result<()> {
    let started = Instant::now();
    let result = guarded("search", || ctx.catalog.search(query));
    log_outcome("search", &result, started);

    reply.send(result)
}

/// Runs a catalog call, turning a panic into a failed reply so the worker
/// stays available for the next request.
fn guarded(
    request: &str,
    call: impl FnOnce() -> Result<Vec<Movie>, CatalogError>,
) -> Result<Vec<Movie>, CatalogError> {
    panic::catch_unwind(AssertUnwindSafe(call)).unwrap_or_else(|_| {
        tracing::error!(request, "catalog call panicked");
        Err(CatalogError::service("request abandoned"))
    })
}

fn log_outcome(request: &str, result: &Result<Vec<Movie>, CatalogError>, started: Instant) {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(movies) => tracing::debug!(request, count = movies.len(), elapsed_ms, "catalog reply"),
        Err(e) => tracing::warn!(request, elapsed_ms, "catalog request failed: {e}"),
    }
}
