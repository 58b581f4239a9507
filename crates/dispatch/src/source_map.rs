//! Concatenated sub-compiler input and the map back to document offsets.

use chtl_types::{BlockAnchor, Fragment, FragmentKind, SourceSpan};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    range: Range<usize>,
    source: SourceSpan,
    /// The fragment text is the exact source slice, so offsets map one to one.
    exact: bool,
}

/// Maps offsets in a concatenated text back to document offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap {
    segments: Vec<Segment>,
}

impl SourceMap {
    /// Returns the document offset for `offset` in the concatenated text.
    ///
    /// Inside fragments that carry placeholder tokens the mapping is only
    /// approximate and is clamped to the fragment's span. Offsets in a
    /// separator or past the end map to the end of the preceding fragment.
    pub fn locate(&self, offset: usize) -> Option<usize> {
        let index = self
            .segments
            .partition_point(|segment| segment.range.start <= offset)
            .checked_sub(1)?;
        let segment = &self.segments[index];
        if offset >= segment.range.end {
            return Some(segment.source.end);
        }
        let delta = offset - segment.range.start;
        if segment.exact {
            Some(segment.source.start + delta)
        } else {
            Some(segment.source.start + delta.min(segment.source.len()))
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// The text handed to one sub-compiler: its fragments joined in document order.
#[derive(Debug, Clone, Default)]
pub struct Concatenation {
    pub text: String,
    pub map: SourceMap,
    /// Where other kinds of fragment were cut out of this text.
    pub anchors: Vec<BlockAnchor>,
    separator: String,
}

impl Concatenation {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, fragment: &Fragment) {
        if !self.map.is_empty() {
            self.text.push_str(&self.separator);
        }
        let start = self.text.len();
        self.text.push_str(&fragment.text);
        self.map.segments.push(Segment {
            range: start..self.text.len(),
            source: fragment.source_offset,
            exact: fragment.text.len() == fragment.source_offset.len(),
        });
    }

    /// Records that a fragment of `kind` was cut out at the current end of the text.
    pub fn anchor(&mut self, kind: FragmentKind, source_span: SourceSpan) {
        self.anchors.push(BlockAnchor {
            host_offset: self.text.len(),
            kind,
            source_span,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of fragments joined so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }
}
