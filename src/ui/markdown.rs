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

use crate::response::{Run, split_emphasis};
use crate::ui::theme::{BULLET_CHAR, Palette};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Render prose runs, breaking lines on `\n` inside any run.
/// Emphasis may span a line break; each piece keeps the bold style.
pub(super) fn render_prose(runs: &[Run], palette: &Palette) -> Vec<Line<'static>> {
    let plain = Style::default().fg(palette.text);
    let bold = Style::default().fg(palette.emphasis).add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for run in runs {
        let style = if matches!(run, Run::Emphasis(_)) { bold } else { plain };
        let mut pieces = run.text().split('\n');
        if let Some(first) = pieces.next()
            && !first.is_empty()
        {
            current.push(Span::styled(first.to_owned(), style));
        }
        for piece in pieces {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !piece.is_empty() {
                current.push(Span::styled(piece.to_owned(), style));
            }
        }
    }
    lines.push(Line::from(current));
    lines
}

/// Render list items as bullets. Items get emphasis splitting too.
pub(super) fn render_list(items: &[String], palette: &Palette) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            let mut spans = vec![Span::styled(
                format!("  {BULLET_CHAR} "),
                Style::default().fg(palette.code_header),
            )];
            for line in render_prose(&split_emphasis(item), palette) {
                spans.extend(line.spans);
            }
            Line::from(spans)
        })
        .collect()
}
