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

use super::emphasis::{Run, split_emphasis};
use std::ops::Range;

const FENCE: &str = "```";

/// One typed unit of a response document.
///
/// `span` is the byte range of the source text this segment was parsed from.
/// Spans of a parsed document are contiguous and cover the whole input, so
/// joining them reproduces the response exactly (see [`reconstruct`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    Prose {
        runs: Vec<Run>,
    },
    List {
        items: Vec<String>,
    },
    Code {
        /// Tag written after the opening fence. May be empty or unknown.
        declared_language: String,
        body: String,
        /// False when the response ended before a closing fence.
        terminated: bool,
    },
}

impl Segment {
    /// The literal source slice this segment covers.
    #[must_use]
    pub fn source<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.span.clone()).unwrap_or("")
    }

    #[must_use]
    pub fn is_code(&self) -> bool {
        matches!(self.kind, SegmentKind::Code { .. })
    }
}

/// Split a Markdown-flavoured response into ordered segments.
///
/// Rules apply in a fixed order: fenced code blocks are cut out first, the
/// text between them is split into list blocks and prose, and prose is split
/// into emphasis runs. The function is total: malformed Markdown degrades to
/// broader prose segments instead of failing.
pub fn parse_segments(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    while let Some(fence) = find_fence(text, cursor) {
        segment_text(text, cursor..fence.span.start, &mut segments);
        cursor = fence.span.end;
        segments.push(fence);
    }
    segment_text(text, cursor..text.len(), &mut segments);

    if segments.is_empty() {
        // Whitespace-only input: keep a single empty prose segment so the
        // document still reconstructs to its source.
        segments.push(Segment { kind: SegmentKind::Prose { runs: Vec::new() }, span: 0..0 });
    }
    close_span_gaps(&mut segments, text.len());
    segments
}

/// Re-join the source slices of every segment.
pub fn reconstruct(text: &str, segments: &[Segment]) -> String {
    segments.iter().map(|segment| segment.source(text)).collect()
}

fn find_fence(text: &str, from: usize) -> Option<Segment> {
    let open = from + text[from..].find(FENCE)?;
    let after_open = open + FENCE.len();
    let info_end = text[after_open..].find('\n').map_or(text.len(), |i| after_open + i);
    let info = &text[after_open..info_end];

    // Fence opened and closed on one line: ```inline```
    if let Some(close) = info.find(FENCE) {
        let body = &text[after_open..after_open + close];
        return Some(Segment {
            kind: SegmentKind::Code {
                declared_language: String::new(),
                body: body.to_owned(),
                terminated: true,
            },
            span: open..after_open + close + FENCE.len(),
        });
    }

    let declared_language = info.split_whitespace().next().unwrap_or_default().to_owned();
    let body_start = (info_end + 1).min(text.len());

    let (body, end, terminated) = match text[body_start..].find(FENCE) {
        Some(close) => {
            let close = body_start + close;
            (&text[body_start..close], close + FENCE.len(), true)
        }
        None => (&text[body_start..], text.len(), false),
    };

    Some(Segment {
        kind: SegmentKind::Code {
            declared_language,
            body: strip_one_line_break(body).to_owned(),
            terminated,
        },
        span: open..end,
    })
}

fn strip_one_line_break(body: &str) -> &str {
    body.strip_suffix('\n').map_or(body, |b| b.strip_suffix('\r').unwrap_or(b))
}

/// Split non-code text into list blocks and prose.
fn segment_text(text: &str, range: Range<usize>, out: &mut Vec<Segment>) {
    let mut group_start = range.start;
    let mut group_is_list = false;
    let mut offset = range.start;

    for line in text[range.clone()].split_inclusive('\n') {
        let is_item = list_item(line).is_some();
        if offset > group_start && is_item != group_is_list {
            push_group(text, group_start..offset, group_is_list, out);
            group_start = offset;
        }
        group_is_list = is_item;
        offset += line.len();
    }
    if offset > group_start {
        push_group(text, group_start..offset, group_is_list, out);
    }
}

fn push_group(text: &str, span: Range<usize>, is_list: bool, out: &mut Vec<Segment>) {
    let source = &text[span.clone()];
    if is_list {
        let items = source
            .split_inclusive('\n')
            .filter_map(list_item)
            .map(ToOwned::to_owned)
            .collect();
        out.push(Segment { kind: SegmentKind::List { items }, span });
        return;
    }

    let trimmed = source.trim();
    if trimmed.is_empty() {
        return;
    }
    out.push(Segment { kind: SegmentKind::Prose { runs: split_emphasis(trimmed) }, span });
}

fn list_item(line: &str) -> Option<&str> {
    let content = line.trim_start();
    content.strip_prefix("* ").or_else(|| content.strip_prefix("- ")).map(str::trim)
}

/// Hand unclaimed bytes (blank lines, whitespace around fences) to the
/// preceding segment, so spans tile `0..len` with no holes.
fn close_span_gaps(segments: &mut [Segment], len: usize) {
    if let Some(first) = segments.first_mut() {
        first.span.start = 0;
    }
    for i in 1..segments.len() {
        segments[i - 1].span.end = segments[i].span.start;
    }
    if let Some(last) = segments.last_mut() {
        last.span.end = len;
    }
}
