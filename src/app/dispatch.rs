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

use super::request::{Outbound, Request, ValidationError, analysis_prompt};
use super::state::Session;
use crate::agent::{CallError, RepositoryFetcher, RequestExecutor};
use std::time::Instant;

/// Run one dispatch for the session's current mode and draft.
///
/// Validation errors abort before any external call. External failures are
/// stored on the session as its error text; `Ok(false)` means the response
/// arrived after the dispatch was superseded and was dropped.
pub async fn dispatch(
    session: &mut Session,
    executor: &dyn RequestExecutor,
    fetcher: &dyn RepositoryFetcher,
) -> Result<bool, ValidationError> {
    let ticket = session.begin_dispatch()?;
    let started = Instant::now();
    let outcome = execute_request(ticket.request(), executor, fetcher).await;
    tracing::info!(
        mode = %ticket.request().mode(),
        ok = outcome.is_ok(),
        "dispatch finished in {:?}",
        started.elapsed()
    );
    Ok(session.complete(ticket, outcome))
}

/// Perform the external calls a request needs. Never touches session state.
pub async fn execute_request(
    request: &Request,
    executor: &dyn RequestExecutor,
    fetcher: &dyn RepositoryFetcher,
) -> Result<String, CallError> {
    match request.outbound() {
        Outbound::Prompt(prompt) => executor.execute(prompt).await,
        Outbound::AnalyzeRepository(repo) => {
            let url = fetcher.readme_url(repo).await?;
            tracing::debug!(%repo, %url, "fetching repository content");
            let content = fetcher.fetch_text(&url).await?;
            executor.execute(&analysis_prompt(repo, &content)).await
        }
    }
}
