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

use super::language::Language;
use super::mode::Mode;
use super::request::{Draft, Request, ValidationError};
use crate::agent::CallError;
use crate::response::{OriginalSnapshot, RenderBlock, parse_segments, plan_render};

/// Handle for one in-flight dispatch.
///
/// Carries the generation it was issued in; completing a ticket from an older
/// generation is a no-op.
#[derive(Debug)]
pub struct Ticket {
    generation: u64,
    request: Request,
    snapshot: Option<OriginalSnapshot>,
}

impl Ticket {
    #[must_use]
    pub fn request(&self) -> &Request {
        &self.request
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Per-session dispatcher state.
#[derive(Debug, Default)]
pub struct Session {
    mode: Mode,
    pub language: Language,
    pub draft: Draft,
    response: Option<String>,
    error: Option<String>,
    /// Only set together with `response`.
    original: Option<OriginalSnapshot>,
    busy: bool,
    /// Bumped on every dispatch and mode switch.
    generation: u64,
}

impl Session {
    #[must_use]
    pub fn new(mode: Mode, language: Language) -> Self {
        Self { mode, language, ..Self::default() }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn original(&self) -> Option<&OriginalSnapshot> {
        self.original.as_ref()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switch modes. Drafts, results and the snapshot never carry over, and
    /// any in-flight dispatch is orphaned.
    pub fn switch_mode(&mut self, mode: Mode) {
        tracing::debug!(from = %self.mode, to = %mode, "switching mode");
        self.mode = mode;
        self.draft = Draft::default();
        self.clear_results();
        self.busy = false;
        self.generation += 1;
    }

    /// Validate the draft and start a dispatch.
    ///
    /// Previous results are cleared first. On validation failure the error
    /// message is stored, busy is cleared and no request exists. Starting a
    /// dispatch while another is in flight supersedes it.
    pub fn begin_dispatch(&mut self) -> Result<Ticket, ValidationError> {
        self.clear_results();
        self.generation += 1;

        let request = match Request::build(self.mode, self.language, &self.draft) {
            Ok(request) => request,
            Err(err) => {
                tracing::info!(mode = %self.mode, "dispatch rejected: {err}");
                self.error = Some(err.to_string());
                self.busy = false;
                return Err(err);
            }
        };

        let snapshot = self.mode.retains_original_code().then(|| OriginalSnapshot {
            code: request.primary_text().to_owned(),
            language: request.language(),
        });
        if self.busy {
            tracing::debug!(generation = self.generation, "superseding in-flight dispatch");
        }
        self.busy = true;
        Ok(Ticket { generation: self.generation, request, snapshot })
    }

    /// Apply the outcome of a dispatch. Returns false when the ticket is
    /// stale and the outcome was discarded.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<String, CallError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale response"
            );
            return false;
        }

        self.busy = false;
        match outcome {
            Ok(text) => {
                self.response = Some(text);
                self.original = ticket.snapshot;
            }
            Err(err) => {
                tracing::warn!(mode = %self.mode, "dispatch failed: {err}");
                self.error = Some(err.message);
            }
        }
        true
    }

    /// Segment the last response and pair its first code block with the
    /// snapshot, if any.
    #[must_use]
    pub fn render_plan(&self) -> Vec<RenderBlock> {
        let Some(text) = self.response.as_deref() else {
            return Vec::new();
        };
        plan_render(&parse_segments(text), self.original.as_ref())
    }

    fn clear_results(&mut self) {
        self.response = None;
        self.error = None;
        self.original = None;
    }
}
