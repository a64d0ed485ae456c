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

//! Catalog client for The Movie Database (TMDB) v3 REST API.
//!
//! Only the first page of each listing is requested. Response records are
//! mapped down to [`Movie`], and every field the application does not display
//! is dropped during decoding.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{StatusCode, blocking::Client};
use serde::Deserialize;

use crate::{
    catalog::{CatalogError, MovieCatalog},
    config::AppConfig,
    model::Movie,
};

const USER_AGENT: &str = concat!("flickui/", env!("CARGO_PKG_VERSION"));

const POPULAR_PATH: &str = "/movie/popular";
const SEARCH_PATH: &str = "/search/movie";

pub(crate) struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
    language: String,
}

#[derive(Deserialize)]
struct MoviePage {
    #[serde(default)]
    results: Vec<MovieRecord>,
}

// Every field is optional so one odd record cannot fail the whole page
#[derive(Deserialize)]
struct MovieRecord {
    id: Option<u64>,
    title: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    status_message: Option<String>,
}

impl MovieRecord {
    /// Records without an identifier cannot be told apart, so are skipped.
    fn into_movie(self) -> Option<Movie> {
        Some(Movie {
            id: self.id?,
            title: self.title.unwrap_or_default(),
            poster_path: self.poster_path.filter(|p| !p.is_empty()),
            release_date: self.release_date.filter(|d| !d.is_empty()),
        })
    }
}

impl TmdbClient {
    pub(crate) fn new(config: &AppConfig, api_key: String) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
        })
    }

    fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Vec<Movie>, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "catalog request");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("page", "1"),
            ])
            .query(params)
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if status.is_success() {
            decode_movies(&body)
        } else {
            Err(decode_error(status, &body))
        }
    }
}

impl MovieCatalog for TmdbClient {
    fn popular(&self) -> Result<Vec<Movie>, CatalogError> {
        self.get(POPULAR_PATH, &[])
    }

    fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        if query.trim().is_empty() {
            return Err(CatalogError::service("empty search query"));
        }

        self.get(SEARCH_PATH, &[("query", query), ("include_adult", "false")])
    }
}

fn decode_movies(body: &str) -> Result<Vec<Movie>, CatalogError> {
    let page: MoviePage = serde_json::from_str(body)
        .map_err(|e| CatalogError::service(format!("malformed response: {e}")))?;

    let total = page.results.len();
    let movies: Vec<Movie> = page
        .results
        .into_iter()
        .filter_map(MovieRecord::into_movie)
        .collect();

    if movies.len() < total {
        tracing::debug!(skipped = total - movies.len(), "dropped records without an id");
    }

    Ok(movies)
}

fn decode_error(status: StatusCode, body: &str) -> CatalogError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.status_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });

    CatalogError::Service {
        status: Some(status.as_u16()),
        message,
    }
}
