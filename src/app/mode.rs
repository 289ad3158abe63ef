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

use std::fmt;

/// Operating mode selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Mode {
    #[default]
    Assist,
    Generate,
    Debug,
    Refactor,
    Review,
    GenerateDocs,
    GenerateTests,
    AnalyzeRepo,
}

/// A draft field a mode may require before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Code,
    Description,
    RepoUrl,
}

impl Mode {
    pub const ALL: [Self; 8] = [
        Self::Assist,
        Self::Generate,
        Self::Debug,
        Self::Refactor,
        Self::Review,
        Self::GenerateDocs,
        Self::GenerateTests,
        Self::AnalyzeRepo,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Assist => "Assist",
            Self::Generate => "Generate",
            Self::Debug => "Debug",
            Self::Refactor => "Refactor",
            Self::Review => "Review",
            Self::GenerateDocs => "Generate Docs",
            Self::GenerateTests => "Generate Tests",
            Self::AnalyzeRepo => "Analyze Repo",
        }
    }

    /// Fields that must be non-blank before a request is built.
    #[must_use]
    pub fn required_inputs(self) -> &'static [InputField] {
        match self {
            Self::Assist => &[InputField::Code, InputField::Description],
            Self::Generate => &[InputField::Description],
            Self::Debug
            | Self::Refactor
            | Self::Review
            | Self::GenerateDocs
            | Self::GenerateTests => &[InputField::Code],
            Self::AnalyzeRepo => &[InputField::RepoUrl],
        }
    }

    /// Whether the submitted code is kept to diff against the response.
    #[must_use]
    pub fn retains_original_code(self) -> bool {
        match self {
            Self::Assist | Self::Debug | Self::Refactor => true,
            Self::Generate
            | Self::Review
            | Self::GenerateDocs
            | Self::GenerateTests
            | Self::AnalyzeRepo => false,
        }
    }

    /// Verb phrase used in "missing code" messages.
    pub(super) fn code_action(self) -> &'static str {
        match self {
            Self::Assist => "get help with",
            Self::Generate => "extend",
            Self::Debug => "debug",
            Self::Refactor => "refactor",
            Self::Review => "review",
            Self::GenerateDocs => "document",
            Self::GenerateTests => "generate tests for",
            Self::AnalyzeRepo => "analyze",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
