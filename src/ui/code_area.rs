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

/// Header label for code whose fence tag is not in the catalog.
pub const PLAIN_TEXT_LABEL: &str = "text";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeAreaOptions {
    pub text: String,
    /// `None` renders as plain text.
    pub language: Option<Language>,
    pub read_only: bool,
}

type ChangeListener = Box<dyn FnMut(&str)>;

/// Owned handle for a styled code area.
///
/// One surface is created and then reconfigured in place when its inputs
/// change, instead of being rebuilt. Dropping the handle releases it.
pub struct CodeSurface {
    options: CodeAreaOptions,
    on_change: Option<ChangeListener>,
    reconfigure_count: usize,
}

impl CodeSurface {
    #[must_use]
    pub fn new(options: CodeAreaOptions) -> Self {
        tracing::trace!(
            language = options.language.map_or(PLAIN_TEXT_LABEL, Language::code_tag),
            read_only = options.read_only,
            "code surface created"
        );
        Self { options, on_change: None, reconfigure_count: 0 }
    }

    /// Register the callback fired when the text is edited.
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Replace all options. Does not fire the change listener: only edits do.
    pub fn reconfigure(&mut self, options: CodeAreaOptions) {
        self.options = options;
        self.reconfigure_count += 1;
    }

    /// Apply an edit. Returns false (and ignores the edit) when read-only.
    pub fn edit(&mut self, text: impl Into<String>) -> bool {
        if self.options.read_only {
            return false;
        }
        let text = text.into();
        if text == self.options.text {
            return true;
        }
        self.options.text = text;
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.options.text);
        }
        true
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.options.text
    }

    #[must_use]
    pub fn options(&self) -> &CodeAreaOptions {
        &self.options
    }

    #[must_use]
    pub fn reconfigure_count(&self) -> usize {
        self.reconfigure_count
    }

    /// Language label for the header line, falling back to plain text.
    #[must_use]
    pub fn language_label(&self) -> &'static str {
        self.options.language.map_or(PLAIN_TEXT_LABEL, Language::code_tag)
    }

    pub fn render(&self, palette: &Palette) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.options.text.lines().count() + 2);
        lines.push(Line::from(Span::styled(
            format!("{} {} ", CODE_RULE_CHAR.repeat(2), self.language_label()),
            Style::default().fg(palette.code_header).add_modifier(Modifier::BOLD),
        )));
        let body_style = Style::default().fg(palette.code);
        for line in self.options.text.split('\n') {
            lines.push(Line::from(Span::styled(
                format!("  {}", line.trim_end_matches('\r')),
                body_style,
            )));
        }
        lines.push(Line::from(Span::styled(
            CODE_RULE_CHAR.repeat(8),
            Style::default().fg(palette.dim),
        )));
        lines
    }
}

impl Drop for CodeSurface {
    fn drop(&mut self) {
        tracing::trace!(reconfigured = self.reconfigure_count, "code surface released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn options(text: &str, read_only: bool) -> CodeAreaOptions {
        CodeAreaOptions { text: text.to_owned(), language: Some(Language::Rust), read_only }
    }

    #[test]
    fn edit_notifies_listener() {
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let mut surface = CodeSurface::new(options("a", false));
        let sink = Rc::clone(&seen);
        surface.on_change(move |text| sink.borrow_mut().push(text.to_owned()));

        assert!(surface.edit("ab"));
        assert!(surface.edit("ab"));
        assert_eq!(*seen.borrow(), vec!["ab".to_owned()]);
        assert_eq!(surface.text(), "ab");
    }

    #[test]
    fn read_only_rejects_edits() {
        let fired = Rc::new(RefCell::new(false));
        let mut surface = CodeSurface::new(options("fixed", true));
        let flag = Rc::clone(&fired);
        surface.on_change(move |_| *flag.borrow_mut() = true);

        assert!(!surface.edit("changed"));
        assert_eq!(surface.text(), "fixed");
        assert!(!*fired.borrow());
    }

    #[test]
    fn reconfigure_replaces_options_without_notifying() {
        let fired = Rc::new(RefCell::new(false));
        let mut surface = CodeSurface::new(options("one", false));
        let flag = Rc::clone(&fired);
        surface.on_change(move |_| *flag.borrow_mut() = true);

        surface.reconfigure(CodeAreaOptions {
            text: "two".to_owned(),
            language: None,
            read_only: true,
        });
        assert_eq!(surface.text(), "two");
        assert_eq!(surface.language_label(), PLAIN_TEXT_LABEL);
        assert_eq!(surface.reconfigure_count(), 1);
        assert!(!*fired.borrow());
    }

    #[test]
    fn render_frames_body_with_language_header() {
        let surface = CodeSurface::new(options("fn main() {}\n    x();", true));
        let lines = surface.render(&Theme::Dark.palette());
        let text: Vec<String> = lines.iter().map(|l| l.spans[0].content.to_string()).collect();
        assert_eq!(text, vec!["── rust ", "  fn main() {}", "      x();", "────────"]);
    }

    #[test]
    fn empty_body_renders_one_empty_line() {
        let surface = CodeSurface::new(CodeAreaOptions::default());
        let lines = surface.render(&Theme::Dark.palette());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].spans[0].content.as_ref(), "  ");
    }
}
