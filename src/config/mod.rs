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

//! Application configuration.
//!
//! This module manages the application configuration file, and resolves the
//! catalog credential from either the file or the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "flickui";

const API_KEY_ENV: &str = "TMDB_API_KEY";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_key: String::new(),
            base_url: "https://api.themoviedb.org/3".to_string(),
            language: "en-US".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// The catalog credential, preferring the environment over the file.
    pub(crate) fn api_key(&self) -> String {
        resolve_api_key(&self.api_key, std::env::var(API_KEY_ENV).ok())
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Directory holding the configuration file, which also receives the log.
pub(crate) fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
}

fn resolve_api_key(configured: &str, from_env: Option<String>) -> String {
    match from_env.map(|k| k.trim().to_string()) {
        Some(key) if !key.is_empty() => key,
        _ => configured.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_key_wins_when_set() {
        assert_eq!(resolve_api_key("from-file", Some("from-env".into())), "from-env");
    }

    #[test]
    fn blank_environment_key_falls_back_to_file() {
        assert_eq!(resolve_api_key("from-file", Some("  ".into())), "from-file");
        assert_eq!(resolve_api_key(" from-file ", None), "from-file");
    }

    #[test]
    fn partial_file_is_completed_with_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"api_key": "abc"}"#).unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.request_timeout_secs, 10);
    }
}
