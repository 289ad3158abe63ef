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

use super::error_handling::{classify_call_error, summarize_error_body, truncate_for_log};
use super::{CallError, RequestExecutor};
use crate::config::Config;
use anyhow::Context as _;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Request executor for a `generateContent`-style model endpoint.
pub struct HttpExecutor {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpExecutor {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.api_key.clone().context("model API key is not configured")?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to build HTTP client")?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );
        Ok(Self { http, url, api_key })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, prompt: &str) -> Result<String, CallError> {
        let body = GenerateRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
        };
        tracing::debug!(url = %self.url, prompt_len = prompt.len(), "sending model request");

        let response = self
            .http
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| log_call_error(CallError::new(format!("Request failed: {e}"))))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| log_call_error(CallError::new(format!("Failed to read response: {e}"))))?;

        if !status.is_success() {
            let message = summarize_error_body(&raw)
                .unwrap_or_else(|| format!("API request failed with status {status}"));
            return Err(log_call_error(CallError::with_status(message, status.as_u16())));
        }

        extract_text(&raw).map_err(log_call_error)
    }
}

/// Pull the first candidate's text out of a successful response body.
fn extract_text(raw: &str) -> Result<String, CallError> {
    let parsed: GenerateResponse = serde_json::from_str(raw)
        .map_err(|e| CallError::new(format!("Invalid API response: {e}")))?;
    if let Some(error) = parsed.error {
        return Err(CallError::new(error.message));
    }
    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(CallError::new("The model returned an empty response."));
    }
    Ok(text)
}

fn log_call_error(err: CallError) -> CallError {
    tracing::warn!(
        class = ?classify_call_error(&err.message),
        status = ?err.status,
        "model request failed: {}",
        truncate_for_log(&err.message)
    );
    err
}
