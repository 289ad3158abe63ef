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

//! Response interpretation: Markdown segmentation and diff pairing.
//! Everything here is pure and synchronous.

mod emphasis;
mod pairing;
mod segment;

pub use emphasis::{Run, split_emphasis};
pub use pairing::{OriginalSnapshot, RenderBlock, diff_candidate, plan_render};
pub use segment::{Segment, SegmentKind, parse_segments, reconstruct};
