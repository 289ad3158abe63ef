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

use super::emphasis::Run;
use super::segment::{Segment, SegmentKind};
use crate::app::Language;

/// Code submitted with a request, kept to diff against the first code block
/// of the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalSnapshot {
    pub code: String,
    pub language: Language,
}

/// A segment resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderBlock {
    Prose(Vec<Run>),
    List(Vec<String>),
    Code {
        /// `None` when the fence tag is empty or not in the catalog.
        language: Option<Language>,
        declared_language: String,
        body: String,
    },
    Diff {
        language: Language,
        original: String,
        updated: String,
    },
}

/// Index of the code segment to render as a diff.
///
/// Only the first code segment is ever eligible, and only when an original
/// snapshot exists. Later code segments always render plain.
pub fn diff_candidate(segments: &[Segment], original: Option<&OriginalSnapshot>) -> Option<usize> {
    if original.is_none() {
        return None;
    }
    segments.iter().position(Segment::is_code)
}

/// Resolve segments into render blocks, promoting at most one code segment
/// to a diff against `original`.
pub fn plan_render(segments: &[Segment], original: Option<&OriginalSnapshot>) -> Vec<RenderBlock> {
    let candidate = diff_candidate(segments, original);

    segments
        .iter()
        .enumerate()
        .filter_map(|(index, segment)| match &segment.kind {
            SegmentKind::Prose { runs } if runs.is_empty() => None,
            SegmentKind::Prose { runs } => Some(RenderBlock::Prose(runs.clone())),
            SegmentKind::List { items } => Some(RenderBlock::List(items.clone())),
            SegmentKind::Code { declared_language, body, .. } => {
                if candidate == Some(index)
                    && let Some(snapshot) = original
                {
                    Some(RenderBlock::Diff {
                        language: snapshot.language,
                        original: snapshot.code.clone(),
                        updated: body.clone(),
                    })
                } else {
                    Some(RenderBlock::Code {
                        language: Language::resolve_tag(declared_language),
                        declared_language: declared_language.clone(),
                        body: body.clone(),
                    })
                }
            }
        })
        .collect()
}
