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

const MARKER: &str = "**";

/// A run of prose text, either plain or wrapped in `**...**`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    Plain(String),
    Emphasis(String),
}

impl Run {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Emphasis(text) => text,
        }
    }
}

/// Split prose into alternating plain and emphasis runs.
///
/// The first closing `**` after an opener wins. An opener with no closer, or
/// with nothing between the markers, is kept as plain text. Adjacent plain
/// text is merged so callers never see two `Plain` runs in a row.
pub fn split_emphasis(text: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(open) = rest.find(MARKER) {
        let after_open = &rest[open + MARKER.len()..];
        match after_open.find(MARKER) {
            Some(close) if close > 0 => {
                plain.push_str(&rest[..open]);
                if !plain.is_empty() {
                    runs.push(Run::Plain(std::mem::take(&mut plain)));
                }
                runs.push(Run::Emphasis(after_open[..close].to_owned()));
                rest = &after_open[close + MARKER.len()..];
            }
            Some(_) => {
                // `****`: nothing to emphasise, keep all four markers literal
                plain.push_str(&rest[..open + MARKER.len() * 2]);
                rest = &after_open[MARKER.len()..];
            }
            None => break,
        }
    }

    plain.push_str(rest);
    if !plain.is_empty() {
        runs.push(Run::Plain(plain));
    }
    runs
}
