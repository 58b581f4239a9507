//! The boundary scanner: finds style and script blocks in a document.

use crate::error::ScanError;
use crate::output::{ScanDiagnostic, ScanOutput};
use crate::state::{ScanState, matches_word_at, skip_trivia};
use chtl_config::{BlockKind, KeywordConfig};
use chtl_placeholder::PlaceholderTable;
use chtl_types::{Fragment, SourceSpan, is_ident_start};

/// Scans documents with one keyword configuration.
///
/// A scanner holds no per-document state; every call to [`Scanner::scan`]
/// builds its own placeholder table, so one scanner can serve any number of
/// documents.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'c> {
    config: &'c KeywordConfig,
}

impl<'c> Scanner<'c> {
    pub fn new(config: &'c KeywordConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'c KeywordConfig {
        self.config
    }

    /// Cuts `source` into ordered fragments.
    ///
    /// Text outside blocks becomes `Host` fragments. Each block body is
    /// handed to the style or script classifier; the keyword and the braces
    /// around the body belong to no fragment. A keyword not followed by `{`
    /// is ordinary host text. A block that is never closed ends the scan:
    /// the rest of the document, from the keyword on, is one `Host` fragment.
    pub fn scan(&self, source: &str) -> Result<ScanOutput, ScanError> {
        let bytes = source.as_bytes();
        let mut table = PlaceholderTable::for_source(source, &self.config.placeholder);
        let mut fragments = Vec::new();
        let mut diagnostics = Vec::new();
        let mut host_start = 0;
        let mut state = ScanState::new(bytes);

        while let Some(b) = state.peek() {
            if !state.at_code() || !is_ident_start(b) {
                state.bump();
                continue;
            }
            let Some((kind, keyword)) = self.block_keyword_at(bytes, state.cursor) else {
                state.bump();
                continue;
            };

            let keyword_start = state.cursor;
            let after_keyword = keyword_start + keyword.len();
            let open = skip_trivia(bytes, after_keyword);
            if bytes.get(open) != Some(&b'{') {
                log::trace!("'{}' at {} does not open a block", keyword, keyword_start);
                state.advance_to(after_keyword);
                continue;
            }

            let position = state.position();
            state.advance_to(open);
            let Some(close) = state.matching(b'{', b'}') else {
                log::warn!(
                    "Unterminated {} block at {}; keeping the rest of the document as host text",
                    kind,
                    position
                );
                push_host(&mut fragments, source, host_start, keyword_start);
                push_host(&mut fragments, source, keyword_start, source.len());
                diagnostics.push(ScanDiagnostic::UnterminatedBlock {
                    kind,
                    offset: keyword_start,
                    position,
                });
                host_start = source.len();
                break;
            };

            push_host(&mut fragments, source, host_start, keyword_start);
            let body_span = SourceSpan::new(open + 1, close);
            let body = body_span.slice(source);
            let refined = match kind {
                BlockKind::Style => self.classify_style(body, body_span.start, &mut table)?,
                BlockKind::Script => self.classify_script(body, body_span.start, &mut table)?,
            };
            log::trace!(
                "{} block {} yielded {} fragment(s)",
                kind,
                body_span,
                refined.len()
            );
            fragments.extend(refined);

            state.jump_to(close + 1);
            host_start = close + 1;
        }
        push_host(&mut fragments, source, host_start, source.len());

        let output = ScanOutput {
            fragments,
            table,
            diagnostics,
        };
        let stats = output.stats();
        log::debug!(
            "Scanned {} bytes: {} host, {} style-sheet, {} enhanced-script fragment(s), {} placeholder(s)",
            source.len(),
            stats.host,
            stats.style_sheet,
            stats.enhanced_script,
            stats.placeholders
        );
        Ok(output)
    }

    /// Returns the block keyword that starts at `pos` as a whole word.
    fn block_keyword_at(&self, bytes: &[u8], pos: usize) -> Option<(BlockKind, &'c str)> {
        self.config
            .block_keywords
            .iter()
            .find(|(_, keyword)| matches_word_at(bytes, pos, keyword))
    }
}

/// Scans `source` with `config`.
pub fn scan(source: &str, config: &KeywordConfig) -> Result<ScanOutput, ScanError> {
    Scanner::new(config).scan(source)
}

fn push_host(fragments: &mut Vec<Fragment>, source: &str, start: usize, end: usize) {
    if start < end {
        fragments.push(Fragment::host(source, SourceSpan::new(start, end)));
    }
}
