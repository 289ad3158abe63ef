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

use crate::app::Language;
use crate::ui::theme::{CODE_RULE_CHAR, Palette};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use similar::{ChangeTag, TextDiff};
use std::borrow::Cow;

/// Line counts for a rendered diff header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub inserted: usize,
    pub deleted: usize,
}

pub fn diff_stats(original: &str, updated: &str) -> DiffStats {
    let (original, updated) = (terminate_last_line(original), terminate_last_line(updated));
    stats_of(&TextDiff::from_lines(original.as_ref(), updated.as_ref()))
}

fn stats_of<'a>(text_diff: &TextDiff<'a, 'a, 'a, str>) -> DiffStats {
    text_diff.iter_all_changes().fold(DiffStats::default(), |mut stats, change| {
        match change.tag() {
            ChangeTag::Insert => stats.inserted += 1,
            ChangeTag::Delete => stats.deleted += 1,
            ChangeTag::Equal => {}
        }
        stats
    })
}

/// Line diffs compare terminators too, and fence bodies never keep their
/// final line break while submitted files usually do.
fn terminate_last_line(text: &str) -> Cow<'_, str> {
    if text.is_empty() || text.ends_with('\n') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{text}\n"))
    }
}

/// Render original vs. updated code as unified hunks using the `similar` crate.
/// Only changed lines and 3 lines of context are shown. Identical inputs
/// render a header and a "no changes" note.
pub fn render_diff(
    language: Language,
    original: &str,
    updated: &str,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let (original, updated) = (terminate_last_line(original), terminate_last_line(updated));
    let text_diff = TextDiff::from_lines(original.as_ref(), updated.as_ref());
    let stats = stats_of(&text_diff);

    lines.push(Line::from(vec![
        Span::styled(
            format!("{} {} changes ", CODE_RULE_CHAR.repeat(2), language.code_tag()),
            Style::default().fg(palette.code_header).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("+{}", stats.inserted), Style::default().fg(palette.diff_insert)),
        Span::raw(" "),
        Span::styled(format!("-{}", stats.deleted), Style::default().fg(palette.diff_delete)),
    ]));

    if stats == DiffStats::default() {
        lines.push(Line::from(Span::styled(
            "  (no changes)".to_owned(),
            Style::default().fg(palette.dim),
        )));
        return lines;
    }

    let udiff = text_diff.unified_diff();
    for hunk in udiff.iter_hunks() {
        // Extract the @@ header from the hunk's Display output (first line).
        let hunk_str = hunk.to_string();
        if let Some(header) = hunk_str.lines().next()
            && header.starts_with("@@")
        {
            lines.push(Line::from(Span::styled(
                header.to_owned(),
                Style::default().fg(palette.diff_hunk),
            )));
        }

        for change in hunk.iter_changes() {
            let value = change.as_str().unwrap_or("").trim_end_matches(['\n', '\r']);
            let (prefix, style) = match change.tag() {
                ChangeTag::Delete => ("-", Style::default().fg(palette.diff_delete)),
                ChangeTag::Insert => ("+", Style::default().fg(palette.diff_insert)),
                ChangeTag::Equal => (" ", Style::default().fg(palette.dim)),
            };
            lines.push(Line::from(Span::styled(format!("{prefix} {value}"), style)));
        }
    }

    lines
}
