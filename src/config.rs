// code_assist — A terminal code assistant with segmented Markdown rendering
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::Cli;
use crate::ui::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub(crate) const API_KEY_ENV: &str = "CODE_ASSIST_API_KEY";
const ENDPOINT_ENV: &str = "CODE_ASSIST_ENDPOINT";
const MODEL_ENV: &str = "CODE_ASSIST_MODEL";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GITHUB_API: &str = "https://api.github.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);
const CONFIG_DIR_NAME: &str = "code-assist-rust";
const PREFERENCES_FILE: &str = "preferences.json";

/// Endpoint configuration resolved from CLI flags, then env, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub model: String,
    /// Read from the environment only, never from a flag.
    pub api_key: Option<String>,
    pub github_api: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
            github_api: DEFAULT_GITHUB_API.to_owned(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    fn resolve(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            endpoint: non_blank(cli.endpoint.clone())
                .or_else(|| non_blank(env(ENDPOINT_ENV)))
                .unwrap_or(defaults.endpoint),
            model: non_blank(cli.model.clone())
                .or_else(|| non_blank(env(MODEL_ENV)))
                .unwrap_or(defaults.model),
            api_key: non_blank(env(API_KEY_ENV)).map(|key| key.trim().to_owned()),
            ..defaults
        }
    }
}

/// The only state persisted across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(PREFERENCES_FILE))
    }

    /// Missing or unreadable files yield defaults.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!("ignoring malformed preferences at {}: {err}", path.display());
                Self::default()
            }),
            Err(err) => {
                tracing::debug!("no preferences at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
