//! Kind-tagged fragments of a CHTL document.

use crate::ids::PlaceholderId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The language a fragment belongs to.
///
/// The set is closed: every fragment produced by the scanner carries exactly
/// one of these kinds, and consumers match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentKind {
    /// Host markup (CHTL itself).
    Host,
    /// Style-sheet text from a `style` block.
    StyleSheet,
    /// Plain script text. Only ever stored in the placeholder table.
    Script,
    /// Enhanced script (CHTL JS) text from a `script` block.
    EnhancedScript,
}

impl FragmentKind {
    pub const ALL: [FragmentKind; 4] = [
        FragmentKind::Host,
        FragmentKind::StyleSheet,
        FragmentKind::Script,
        FragmentKind::EnhancedScript,
    ];

    /// A short human-readable name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            FragmentKind::Host => "host",
            FragmentKind::StyleSheet => "style-sheet",
            FragmentKind::Script => "script",
            FragmentKind::EnhancedScript => "enhanced-script",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A half-open byte range `[start, end)` into the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `offset` falls inside the span.
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Moves the span by `by` bytes, e.g. from body-relative to document-relative.
    pub const fn shift(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }

    /// Returns the covered slice of `source`.
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds or not on character boundaries,
    /// like any other string slice.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

impl From<(usize, usize)> for SourceSpan {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A contiguous, kind-tagged span of source text.
///
/// `text` is the exact source slice for `Host` fragments. Style-sheet and
/// enhanced-script fragments may carry placeholder tokens in place of spans
/// that were moved into the placeholder table; restoring those tokens yields
/// the exact source slice again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
    pub source_offset: SourceSpan,
    /// Set only for fragments excised from a larger region and registered
    /// in the placeholder table.
    pub placeholder_id: Option<PlaceholderId>,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>, source_offset: SourceSpan) -> Self {
        Self {
            kind,
            text: text.into(),
            source_offset,
            placeholder_id: None,
        }
    }

    /// A host fragment copied verbatim from `source`.
    pub fn host(source: &str, span: SourceSpan) -> Self {
        Self::new(FragmentKind::Host, span.slice(source), span)
    }

    pub fn with_placeholder(mut self, id: PlaceholderId) -> Self {
        self.placeholder_id = Some(id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Records where a style or script fragment was cut out of the host text.
///
/// `host_offset` is a byte offset into the concatenated host text handed to
/// the host compiler, so that compiler can still tell which element encloses
/// a given block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAnchor {
    pub host_offset: usize,
    pub kind: FragmentKind,
    pub source_span: SourceSpan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_slicing_and_shifting() {
        let source = "div { style { color: red; } }";
        let span = SourceSpan::new(13, 26).shift(0);
        assert_eq!(span.slice(source), " color: red; ");
        assert_eq!(span.len(), 13);
        assert!(span.contains(13));
        assert!(!span.contains(26));
        assert_eq!(SourceSpan::new(1, 3).shift(10), SourceSpan::new(11, 13));
    }

    #[test]
    fn host_fragment_copies_source_slice() {
        let source = "html { body { } }";
        let fragment = Fragment::host(source, SourceSpan::new(0, 6));
        assert_eq!(fragment.kind, FragmentKind::Host);
        assert_eq!(fragment.text, "html {");
        assert_eq!(fragment.placeholder_id, None);
    }

    #[test]
    fn fragment_kind_names_are_distinct() {
        let names: Vec<_> = FragmentKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["host", "style-sheet", "script", "enhanced-script"]);
    }
}
