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

pub mod agent;
pub mod app;
pub mod config;
pub mod error;
pub mod response;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "code-assist", about = "Terminal code assistant backed by a hosted LLM")]
pub struct Cli {
    /// Operating mode
    #[arg(value_enum, required_unless_present = "response_file")]
    pub mode: Option<app::Mode>,

    /// Language of the submitted code (python, rust, c++, ...)
    #[arg(long, short, default_value = "python")]
    pub language: app::Language,

    /// Code to submit
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// Read the code to submit from a file
    #[arg(long, value_name = "PATH")]
    pub code_file: Option<PathBuf>,

    /// Problem description (assist) or what to generate (generate)
    #[arg(long, short)]
    pub description: Option<String>,

    /// GitHub repository URL (analyze-repo)
    #[arg(long)]
    pub url: Option<String>,

    /// Render a saved response instead of sending a request
    #[arg(long, value_name = "PATH", conflicts_with = "mode")]
    pub response_file: Option<PathBuf>,

    /// Original code to diff the saved response's first code block against
    #[arg(long, value_name = "PATH", requires = "response_file")]
    pub original_file: Option<PathBuf>,

    /// Model endpoint base URL (overrides CODE_ASSIST_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Model name (overrides CODE_ASSIST_MODEL)
    #[arg(long, short)]
    pub model: Option<String>,

    /// Color theme; the choice is remembered
    #[arg(long, value_enum)]
    pub theme: Option<ui::Theme>,

    /// Write tracing diagnostics to a file (enables logging when set)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directives, e.g. `info,code_assist=debug`
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to --log-file instead of truncating
    #[arg(long)]
    pub log_append: bool,
}
