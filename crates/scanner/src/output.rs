use chtl_config::BlockKind;
use chtl_placeholder::{PlaceholderError, PlaceholderTable};
use chtl_types::{Fragment, FragmentKind, Position};
use serde::Serialize;
use std::fmt;

/// A problem the scanner recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ScanDiagnostic {
    /// A block with no matching `}`; the rest of the document was kept as host text.
    UnterminatedBlock {
        kind: BlockKind,
        offset: usize,
        position: Position,
    },
}

impl fmt::Display for ScanDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanDiagnostic::UnterminatedBlock { kind, position, .. } => {
                write!(f, "Unterminated {} block at {}", kind, position)
            }
        }
    }
}

/// Per-kind counts for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub host: usize,
    pub style_sheet: usize,
    /// Plain script spans, which only exist as placeholder entries.
    pub script: usize,
    pub enhanced_script: usize,
    pub placeholders: usize,
}

/// Everything a scan produces: the ordered fragments, the table holding the
/// text they reference by token, and any recovered problems.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub fragments: Vec<Fragment>,
    pub table: PlaceholderTable,
    pub diagnostics: Vec<ScanDiagnostic>,
}

impl ScanOutput {
    pub fn stats(&self) -> ScanStats {
        let mut stats = ScanStats {
            placeholders: self.table.len(),
            ..ScanStats::default()
        };
        for fragment in &self.fragments {
            match fragment.kind {
                FragmentKind::Host => stats.host += 1,
                FragmentKind::StyleSheet => stats.style_sheet += 1,
                FragmentKind::Script => stats.script += 1,
                FragmentKind::EnhancedScript => stats.enhanced_script += 1,
            }
        }
        stats.script += self
            .table
            .entries()
            .iter()
            .filter(|entry| entry.originating_kind == FragmentKind::Script)
            .count();
        stats
    }

    /// The excised spans as fragments of their own, in registration order.
    pub fn excised_fragments(&self) -> Vec<Fragment> {
        self.table.entries().iter().map(|entry| entry.to_fragment()).collect()
    }

    /// The fragment's text with its placeholder tokens replaced by the
    /// original source text.
    pub fn restored_text(&self, fragment: &Fragment) -> Result<String, PlaceholderError> {
        self.table.restore(&fragment.text)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
