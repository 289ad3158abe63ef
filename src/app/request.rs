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
use super::mode::{InputField, Mode};
use crate::agent::{RepoRef, parse_repo_url};

/// Cap on repository content forwarded to the model.
const MAX_REPO_CONTENT_CHARS: usize = 30_000;

/// User inputs for the current mode. Cleared on every mode switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub code: String,
    /// Problem description (assist) or generation request (generate).
    pub description: String,
    pub repo_url: String,
}

impl Draft {
    fn field(&self, field: InputField) -> &str {
        match field {
            InputField::Code => &self.code,
            InputField::Description => &self.description,
            InputField::RepoUrl => &self.repo_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please provide both your code and a description of the problem.")]
    AssistInputsMissing,
    #[error("Please describe the code you want to generate.")]
    DescriptionMissing,
    #[error("Please enter the code you want to {action}.")]
    CodeMissing { action: &'static str },
    #[error("Please enter a GitHub repository URL.")]
    RepoUrlMissing,
    #[error("Invalid GitHub repository URL. Expected github.com/<owner>/<repo>.")]
    RepoUrlInvalid,
}

/// An outbound request. Only [`Request::build`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    mode: Mode,
    language: Language,
    primary_text: String,
    secondary_text: Option<String>,
    outbound: Outbound,
}

/// What the dispatcher must do to satisfy a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Prompt(String),
    /// Fetch repository content first, then summarise it.
    AnalyzeRepository(RepoRef),
}

impl Request {
    /// Validate the draft for `mode` and build the request.
    pub fn build(mode: Mode, language: Language, draft: &Draft) -> Result<Self, ValidationError> {
        let missing = mode
            .required_inputs()
            .iter()
            .copied()
            .find(|field| draft.field(*field).trim().is_empty());
        if let Some(field) = missing {
            return Err(missing_input_error(mode, field));
        }

        let lang = language.label();
        let tag = language.code_tag();
        let code = draft.code.as_str();
        let code_prompt = |prompt: String| (code.to_owned(), None, Outbound::Prompt(prompt));

        let (primary_text, secondary_text, outbound) = match mode {
            Mode::Assist => {
                let problem = draft.description.as_str();
                let prompt = format!(
                    "You are an expert {lang} developer. A user needs help with the code below.\n\n\
                     Problem description:\n{problem}\n\n\
                     Code:\n```{tag}\n{code}\n```\n\n\
                     Explain the issue, then provide the corrected code in a single \
                     ```{tag} code block."
                );
                (code.to_owned(), Some(problem.to_owned()), Outbound::Prompt(prompt))
            }
            Mode::Generate => {
                let request = draft.description.as_str();
                let prompt = format!(
                    "Write {lang} code for the following request:\n{request}\n\n\
                     Return the code in a ```{tag} code block followed by a short explanation."
                );
                (request.to_owned(), None, Outbound::Prompt(prompt))
            }
            Mode::Debug => code_prompt(format!(
                "Find and fix the bugs in this {lang} code. List each bug found, then give \
                 the fixed code in a single ```{tag} code block.\n\n```{tag}\n{code}\n```"
            )),
            Mode::Refactor => code_prompt(format!(
                "Refactor this {lang} code for readability and maintainability without \
                 changing behaviour. Return the refactored code in a single ```{tag} code \
                 block, then summarise the changes.\n\n```{tag}\n{code}\n```"
            )),
            Mode::Review => code_prompt(format!(
                "Review this {lang} code. Use **bold** headings and bullet lists for \
                 issues, risks and suggestions.\n\n```{tag}\n{code}\n```"
            )),
            Mode::GenerateDocs => code_prompt(format!(
                "Write documentation for this {lang} code: a short overview, then the code \
                 with doc comments added.\n\n```{tag}\n{code}\n```"
            )),
            Mode::GenerateTests => code_prompt(format!(
                "Write unit tests for this {lang} code using the language's standard test \
                 tooling. Cover edge cases.\n\n```{tag}\n{code}\n```"
            )),
            Mode::AnalyzeRepo => {
                let url = draft.repo_url.trim();
                let repo = parse_repo_url(url).ok_or(ValidationError::RepoUrlInvalid)?;
                (url.to_owned(), None, Outbound::AnalyzeRepository(repo))
            }
        };

        Ok(Self { mode, language, primary_text, secondary_text, outbound })
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Code, description, or repository URL depending on the mode.
    #[must_use]
    pub fn primary_text(&self) -> &str {
        &self.primary_text
    }

    #[must_use]
    pub fn secondary_text(&self) -> Option<&str> {
        self.secondary_text.as_deref()
    }

    /// The prompt or repository step resolved when the request was built.
    #[must_use]
    pub fn outbound(&self) -> &Outbound {
        &self.outbound
    }
}

/// Summarisation prompt for fetched repository content.
pub fn analysis_prompt(repo: &RepoRef, content: &str) -> String {
    let content: String = content.chars().take(MAX_REPO_CONTENT_CHARS).collect();
    format!(
        "Analyze the GitHub repository {repo} from its README below. Summarize its purpose, \
         main features, tech stack and how to get started, using **bold** section titles \
         and bullet lists.\n\n{content}"
    )
}

fn missing_input_error(mode: Mode, field: InputField) -> ValidationError {
    match (mode, field) {
        (Mode::Assist, _) => ValidationError::AssistInputsMissing,
        (_, InputField::Description) => ValidationError::DescriptionMissing,
        (_, InputField::RepoUrl) => ValidationError::RepoUrlMissing,
        (_, InputField::Code) => ValidationError::CodeMissing { action: mode.code_action() },
    }
}
