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

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

// Accent
pub const RUST_ORANGE: Color = Color::Rgb(244, 118, 0);

// UI chrome
pub const BULLET_CHAR: &str = "•";
pub const CODE_RULE_CHAR: &str = "─";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Colors used by the response renderer for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub emphasis: Color,
    pub dim: Color,
    pub code: Color,
    pub code_header: Color,
    pub diff_insert: Color,
    pub diff_delete: Color,
    pub diff_hunk: Color,
    pub error: Color,
}

impl Theme {
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                text: Color::Reset,
                emphasis: Color::White,
                dim: Color::DarkGray,
                code: Color::Gray,
                code_header: RUST_ORANGE,
                diff_insert: Color::Green,
                diff_delete: Color::Red,
                diff_hunk: Color::Cyan,
                error: Color::Red,
            },
            Self::Light => Palette {
                text: Color::Reset,
                emphasis: Color::Black,
                dim: Color::Gray,
                code: Color::DarkGray,
                code_header: Color::Blue,
                diff_insert: Color::Rgb(0, 128, 0),
                diff_delete: Color::Rgb(170, 0, 0),
                diff_hunk: Color::Blue,
                error: Color::Rgb(170, 0, 0),
            },
        }
    }
}
