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

mod dispatch;
mod language;
mod mode;
mod request;
mod state;

pub use dispatch::{dispatch, execute_request};
pub use language::{Language, UnknownLanguage};
pub use mode::{InputField, Mode};
pub use request::{Draft, Outbound, Request, ValidationError, analysis_prompt};
pub use state::{Session, Ticket};

use crate::Cli;
use crate::agent::{GithubFetcher, HttpExecutor};
use crate::config::{Config, Preferences};
use crate::error::AppError;
use crate::response::{OriginalSnapshot, parse_segments, plan_render};
use crate::ui::{self, Palette};
use anyhow::Context as _;
use crossterm::tty::IsTty as _;
use ratatui::text::Line;
use std::path::Path;

/// Run one CLI invocation: either render a saved response or dispatch a
/// request and render its result.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    let palette = resolve_theme(cli).palette();

    if let Some(path) = cli.response_file.as_deref() {
        return render_saved_response(cli, path, &palette).await;
    }

    let mode = cli.mode.context("a mode is required unless --response-file is given")?;
    let mut session = Session::new(mode, cli.language);
    session.draft = read_draft(cli).await?;

    let config = Config::from_cli(cli);
    let result = if config.api_key.is_none() {
        // Without a key only validation can run; a bad draft is still reported.
        match session.begin_dispatch() {
            Ok(_) => return Err(AppError::ApiKeyMissing.into()),
            Err(err) => Err(err),
        }
    } else {
        let executor = HttpExecutor::new(&config)?;
        let fetcher = GithubFetcher::new(&config)?;
        dispatch(&mut session, &executor, &fetcher).await
    };

    if let Err(err) = result {
        emit(&ui::render_error(&err.to_string(), &palette))?;
        return Err(AppError::ValidationFailed.into());
    }
    if let Some(message) = session.error() {
        emit(&ui::render_error(message, &palette))?;
        return Err(AppError::RequestFailed.into());
    }
    emit(&ui::render_plan_lines(&session.render_plan(), &palette))?;
    Ok(())
}

fn resolve_theme(cli: &Cli) -> ui::Theme {
    let Some(path) = Preferences::default_path() else {
        return cli.theme.unwrap_or_default();
    };
    let mut prefs = Preferences::load(&path);
    if let Some(theme) = cli.theme
        && theme != prefs.theme
    {
        prefs.theme = theme;
        if let Err(err) = prefs.save(&path) {
            tracing::warn!("failed to persist theme preference: {err}");
        }
    }
    prefs.theme
}

async fn read_draft(cli: &Cli) -> anyhow::Result<Draft> {
    let code = match (&cli.code, &cli.code_file) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => read_input(path).await?,
        (None, None) => String::new(),
    };
    Ok(Draft {
        code,
        description: cli.description.clone().unwrap_or_default(),
        repo_url: cli.url.clone().unwrap_or_default(),
    })
}

async fn render_saved_response(cli: &Cli, path: &Path, palette: &Palette) -> anyhow::Result<()> {
    let text = read_input(path).await?;
    let original = match cli.original_file.as_deref() {
        Some(original_path) => Some(OriginalSnapshot {
            code: read_input(original_path).await?,
            language: cli.language,
        }),
        None => None,
    };
    let segments = parse_segments(&text);
    tracing::debug!(segments = segments.len(), "rendering saved response");
    emit(&ui::render_plan_lines(&plan_render(&segments, original.as_ref()), palette))?;
    Ok(())
}

async fn read_input(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|err| {
        tracing::error!("failed to read {}: {err}", path.display());
        anyhow::Error::new(AppError::InputUnreadable)
            .context(format!("failed to read {}: {err}", path.display()))
    })
}

fn emit(lines: &[Line<'_>]) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    let styled = std::io::stdout().is_tty();
    ui::print_lines(&mut stdout, lines, styled).context("failed to write output")
}
