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

//! External collaborators: the model endpoint and the repository host.

pub mod client;
pub mod error_handling;
pub mod github;

pub use client::HttpExecutor;
pub use github::{GithubFetcher, RepoRef, parse_repo_url};

use async_trait::async_trait;

/// Failure of an external call. `message` is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CallError {
    pub message: String,
    /// HTTP status when the failure came from a non-2xx response.
    pub status: Option<u16>,
}

impl CallError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), status: None }
    }

    #[must_use]
    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self { message: message.into(), status: Some(status) }
    }
}

/// Sends a fully formed prompt to the model and returns its text.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, prompt: &str) -> Result<String, CallError>;
}

/// Two-stage repository lookup used by repository analysis.
#[async_trait]
pub trait RepositoryFetcher: Send + Sync {
    /// Resolve the raw-content URL of the repository README.
    async fn readme_url(&self, repo: &RepoRef) -> Result<String, CallError>;

    async fn fetch_text(&self, url: &str) -> Result<String, CallError>;
}
