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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported request languages, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    CSharp,
    Go,
    Rust,
    Ruby,
    Php,
    Swift,
    Kotlin,
    Sql,
    Html,
    Css,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language `{0}`")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Self; 16] = [
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::Java,
        Self::C,
        Self::Cpp,
        Self::CSharp,
        Self::Go,
        Self::Rust,
        Self::Ruby,
        Self::Php,
        Self::Swift,
        Self::Kotlin,
        Self::Sql,
        Self::Html,
        Self::Css,
    ];

    /// Display label, also the primary case-insensitive match key.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Java => "Java",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Ruby => "Ruby",
            Self::Php => "PHP",
            Self::Swift => "Swift",
            Self::Kotlin => "Kotlin",
            Self::Sql => "SQL",
            Self::Html => "HTML",
            Self::Css => "CSS",
        }
    }

    /// Short fence tags models commonly emit for this language.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Python => &["py", "python3"],
            Self::JavaScript => &["js", "jsx", "node"],
            Self::TypeScript => &["ts", "tsx"],
            Self::Java => &[],
            Self::C => &["h"],
            Self::Cpp => &["cpp", "cc", "cxx", "hpp"],
            Self::CSharp => &["cs", "csharp"],
            Self::Go => &["golang"],
            Self::Rust => &["rs"],
            Self::Ruby => &["rb"],
            Self::Php => &[],
            Self::Swift => &[],
            Self::Kotlin => &["kt", "kts"],
            Self::Sql => &["postgres", "mysql", "sqlite"],
            Self::Html => &["htm", "xhtml"],
            Self::Css => &["scss"],
        }
    }

    /// Case-insensitive lookup by label or alias.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        if needle.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|lang| {
            lang.label().eq_ignore_ascii_case(needle)
                || lang.aliases().iter().any(|alias| alias.eq_ignore_ascii_case(needle))
        })
    }

    /// Map a free-text fence tag from a response onto the catalog.
    /// Unknown tags resolve to `None`; renderers show those as plain text.
    #[must_use]
    pub fn resolve_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().trim_start_matches('{').trim_start_matches('.');
        Self::from_label(tag)
    }

    /// Lowercase name used in prompts and code-area headers.
    #[must_use]
    pub fn code_tag(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Ruby => "ruby",
            Self::Php => "php",
            Self::Swift => "swift",
            Self::Kotlin => "kotlin",
            Self::Sql => "sql",
            Self::Html => "html",
            Self::Css => "css",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownLanguage(s.to_owned()))
    }
}
