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

mod code_area;
mod diff;
mod markdown;
mod print;
pub mod theme;

pub use code_area::{CodeAreaOptions, CodeSurface, PLAIN_TEXT_LABEL};
pub use diff::{DiffStats, diff_stats, render_diff};
pub use print::print_lines;
pub use theme::{Palette, Theme};

use crate::response::RenderBlock;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Turn a render plan into styled lines, one blank line between blocks.
///
/// Plain code blocks share one read-only [`CodeSurface`] that is reconfigured
/// per block.
pub fn render_plan_lines(blocks: &[RenderBlock], palette: &Palette) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut surface: Option<CodeSurface> = None;

    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        match block {
            RenderBlock::Prose(runs) => lines.extend(markdown::render_prose(runs, palette)),
            RenderBlock::List(items) => lines.extend(markdown::render_list(items, palette)),
            RenderBlock::Code { language, body, .. } => {
                let options =
                    CodeAreaOptions { text: body.clone(), language: *language, read_only: true };
                match surface.as_mut() {
                    Some(existing) => existing.reconfigure(options),
                    None => surface = Some(CodeSurface::new(options)),
                }
                if let Some(surface) = surface.as_ref() {
                    lines.extend(surface.render(palette));
                }
            }
            RenderBlock::Diff { language, original, updated } => {
                lines.extend(render_diff(*language, original, updated, palette));
            }
        }
    }
    lines
}

/// A single error line in the palette's error color.
pub fn render_error(message: &str, palette: &Palette) -> Vec<Line<'static>> {
    message
        .lines()
        .enumerate()
        .map(|(i, text)| {
            let prefix = if i == 0 { "✗ " } else { "  " };
            Line::from(Span::styled(
                format!("{prefix}{text}"),
                Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Language;
    use crate::response::{OriginalSnapshot, parse_segments, plan_render};
    use pretty_assertions::assert_eq;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn renders_prose_code_prose() {
        let text = "Here is code:\n```python\nprint(1)\n```\ndone";
        let blocks = plan_render(&parse_segments(text), None);
        let lines = render_plan_lines(&blocks, &Theme::Dark.palette());
        assert_eq!(
            plain(&lines),
            vec!["Here is code:", "", "── python ", "  print(1)", "────────", "", "done"]
        );
    }

    #[test]
    fn unknown_language_falls_back_to_plain_text_label() {
        let blocks = plan_render(&parse_segments("```zig\nconst x = 1;\n```"), None);
        let lines = render_plan_lines(&blocks, &Theme::Dark.palette());
        assert_eq!(plain(&lines)[0], format!("── {PLAIN_TEXT_LABEL} "));
    }

    #[test]
    fn diff_block_renders_hunks() {
        let original =
            OriginalSnapshot { code: "def f(): pass".to_owned(), language: Language::Python };
        let blocks = plan_render(
            &parse_segments("```python\ndef f():\n    return None\n```"),
            Some(&original),
        );
        let lines = plain(&render_plan_lines(&blocks, &Theme::Dark.palette()));
        assert_eq!(lines[0], "── python changes +2 -1");
        assert!(lines.iter().any(|l| l == "- def f(): pass"));
    }

    #[test]
    fn empty_plan_renders_nothing() {
        assert!(render_plan_lines(&[], &Theme::Dark.palette()).is_empty());
    }

    #[test]
    fn error_lines_are_prefixed() {
        let lines = plain(&render_error("GitHub API error: 404\nNot Found", &Theme::Dark.palette()));
        assert_eq!(lines, vec!["✗ GitHub API error: 404", "  Not Found"]);
    }
}
