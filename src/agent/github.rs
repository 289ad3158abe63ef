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

use super::{CallError, RepositoryFetcher};
use crate::config::Config;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

const REPO_HOST: &str = "github.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Parse `[scheme://][www.]github.com/<owner>/<repo>[.git][/...]`.
///
/// Anything after the repository segment (tree paths, query, fragment) is
/// ignored.
pub fn parse_repo_url(raw: &str) -> Option<RepoRef> {
    let trimmed = raw.trim();
    let without_scheme = trimmed.split_once("://").map_or(trimmed, |(_, rest)| rest);
    let without_www = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    let (host, path) = without_www.split_once('/')?;
    if !host.eq_ignore_ascii_case(REPO_HOST) {
        return None;
    }

    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut parts = path.split('/');
    let owner = parts.next().filter(|s| is_valid_name(s))?;
    let repo = parts.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if !is_valid_name(repo) {
        return None;
    }
    Some(RepoRef { owner: owner.to_owned(), repo: repo.to_owned() })
}

fn is_valid_name(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.chars().all(|c| c == '.')
        && segment.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[derive(Debug, Deserialize)]
struct ReadmeMetadata {
    download_url: Option<String>,
}

/// Repository fetcher backed by the GitHub REST API.
pub struct GithubFetcher {
    http: reqwest::Client,
    api_base: String,
}

impl GithubFetcher {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("code-assist-rust/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, api_base: config.github_api.trim_end_matches('/').to_owned() })
    }

    async fn get(&self, url: &str, accept: &str) -> Result<reqwest::Response, CallError> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await
            .map_err(|e| CallError::new(format!("GitHub request failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CallError::with_status(
                format!("GitHub API error: {status}"),
                status.as_u16(),
            ));
        }
        Ok(response)
    }
}

#[async_trait]
impl RepositoryFetcher for GithubFetcher {
    async fn readme_url(&self, repo: &RepoRef) -> Result<String, CallError> {
        let url = format!("{}/repos/{}/{}/readme", self.api_base, repo.owner, repo.repo);
        tracing::debug!(%repo, "resolving README metadata");
        let metadata: ReadmeMetadata = self
            .get(&url, "application/vnd.github+json")
            .await?
            .json()
            .await
            .map_err(|e| CallError::new(format!("Invalid GitHub API response: {e}")))?;
        metadata
            .download_url
            .ok_or_else(|| CallError::new(format!("Repository {repo} has no downloadable README")))
    }

    async fn fetch_text(&self, url: &str) -> Result<String, CallError> {
        self.get(url, "text/plain")
            .await?
            .text()
            .await
            .map_err(|e| CallError::new(format!("Failed to read repository content: {e}")))
    }
}
