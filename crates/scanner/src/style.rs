//! Style-region classification.
//!
//! A style block body is mostly style-sheet text with host constructs mixed
//! in. The classifier does not parse the style-sheet grammar; it finds where
//! a host marker starts and where its statement ends.

use crate::boundary::Scanner;
use crate::error::ScanError;
use crate::state::{ScanState, find_matching, matches_word_at};
use chtl_placeholder::PlaceholderTable;
use chtl_types::{Fragment, FragmentKind, SourceSpan, is_ident_byte, is_ident_start};

/// The extent of one host construct inside a style body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Construct {
    end: usize,
    /// The construct carries its own `{ ... }` body.
    braced: bool,
}

impl Scanner<'_> {
    /// Splits a style block body into fragments.
    ///
    /// `base` is the body's offset in the document; spans of the returned
    /// fragments and of any registered placeholders are document offsets.
    ///
    /// Host constructs inside the style-sheet text are registered in `table`
    /// and replaced in place by their token. A brace-bodied construct at the
    /// top level of the body is a statement of its own and becomes a `Host`
    /// fragment between the surrounding `StyleSheet` fragments.
    pub fn classify_style(
        &self,
        body: &str,
        base: usize,
        table: &mut PlaceholderTable,
    ) -> Result<Vec<Fragment>, ScanError> {
        let bytes = body.as_bytes();
        let mut fragments = Vec::new();
        let mut pending = String::new();
        let mut pending_start = 0;
        let mut copied = 0;
        let mut statement_start = true;
        let mut state = ScanState::new(bytes);

        while let Some(b) = state.peek() {
            if !state.at_code() {
                if state.opening().is_some_and(|mode| mode.is_string()) {
                    statement_start = false;
                }
                state.bump();
                continue;
            }
            if b.is_ascii_whitespace() {
                state.bump();
                continue;
            }

            let start = state.cursor;
            let Some(marker) = self.style_marker_at(bytes, start, statement_start) else {
                statement_start = matches!(b, b'{' | b'}' | b';');
                state.bump();
                continue;
            };
            let construct = construct_extent(bytes, start, start + marker.len(), statement_start);
            let span = SourceSpan::new(start, construct.end);
            let text = span.slice(body);

            if construct.braced && state.depth == 0 {
                pending.push_str(&body[copied..start]);
                flush(&mut fragments, &mut pending, pending_start, start, base);
                log::trace!("Host statement '{}' in style block at {}", marker, base + start);
                fragments.push(Fragment::new(FragmentKind::Host, text, span.shift(base)));
                pending_start = construct.end;
            } else {
                pending.push_str(&body[copied..start]);
                let id = table.register(text, FragmentKind::Host, span.shift(base))?;
                pending.push_str(&table.format().render(id));
            }

            copied = construct.end;
            statement_start = matches!(bytes[construct.end - 1], b';' | b'}');
            state.jump_to(construct.end);
        }

        pending.push_str(&body[copied..]);
        flush(&mut fragments, &mut pending, pending_start, body.len(), base);
        Ok(fragments)
    }

    /// Returns the longest style marker that starts at `pos`.
    ///
    /// Word markers such as `inherit` only count at the start of a statement,
    /// so a CSS value like `color: inherit;` is left alone.
    fn style_marker_at(&self, bytes: &[u8], pos: usize, statement_start: bool) -> Option<&str> {
        self.config()
            .style_markers
            .iter()
            .filter(|marker| statement_start || !marker.bytes().next().is_some_and(is_ident_start))
            .filter(|marker| matches_word_at(bytes, pos, marker))
            .max_by_key(|marker| marker.len())
            .map(String::as_str)
    }
}

/// Finds where the host construct starting at `start` ends.
///
/// The construct runs to the first of: a `;` (included), a `,` outside
/// parentheses, an unmatched `}`, or the end of the body. A `{` gives the
/// construct a body of its own that ends at the matching `}`. Commas only
/// end constructs used inside a declaration; at statement start they
/// separate arguments (`inherit @Style A, @Style B;`).
fn construct_extent(bytes: &[u8], start: usize, after_marker: usize, statement_start: bool) -> Construct {
    let mut state = ScanState::new(bytes);
    state.jump_to(after_marker);
    let mut parens = 0usize;

    while let Some(b) = state.peek() {
        if !state.at_code() {
            state.bump();
            continue;
        }
        match b {
            b'(' => parens += 1,
            b')' => parens = parens.saturating_sub(1),
            b';' => {
                // Keep a token from running into the next identifier.
                let glued = bytes.get(state.cursor + 1).is_some_and(|&n| is_ident_byte(n));
                let end = if glued { state.cursor } else { state.cursor + 1 };
                return Construct {
                    end: trim_end(bytes, start, end),
                    braced: false,
                };
            }
            b',' if parens == 0 && !statement_start => {
                return Construct {
                    end: trim_end(bytes, start, state.cursor),
                    braced: false,
                };
            }
            b'{' => {
                return match find_matching(bytes, state.cursor, b'{', b'}') {
                    Some(close) => Construct {
                        end: close + 1,
                        braced: true,
                    },
                    None => Construct {
                        end: trim_end(bytes, start, bytes.len()),
                        braced: false,
                    },
                };
            }
            b'}' => {
                return Construct {
                    end: trim_end(bytes, start, state.cursor),
                    braced: false,
                };
            }
            _ => {}
        }
        state.bump();
    }

    Construct {
        end: trim_end(bytes, start, bytes.len()),
        braced: false,
    }
}

fn trim_end(bytes: &[u8], start: usize, mut end: usize) -> usize {
    while end > start + 1 && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    end
}

fn flush(fragments: &mut Vec<Fragment>, pending: &mut String, start: usize, end: usize, base: usize) {
    if pending.is_empty() {
        return;
    }
    let span = SourceSpan::new(start, end).shift(base);
    fragments.push(Fragment::new(FragmentKind::StyleSheet, std::mem::take(pending), span));
}

#[cfg(test)]
mod tests {
    use chtl_config::KeywordConfig;
    use chtl_placeholder::PlaceholderTable;
    use chtl_types::FragmentKind;

    use crate::boundary::Scanner;

    fn classify(body: &str) -> (Vec<chtl_types::Fragment>, PlaceholderTable) {
        let config = KeywordConfig::default();
        let mut table = PlaceholderTable::default();
        let fragments = Scanner::new(&config).classify_style(body, 0, &mut table).unwrap();
        (fragments, table)
    }

    #[test]
    fn plain_style_is_one_fragment() {
        let (fragments, table) = classify(" width: 100px; color: red; ");
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].kind, FragmentKind::StyleSheet);
        assert_eq!(fragments[0].text, " width: 100px; color: red; ");
        assert!(table.is_empty());
    }

    #[test]
    fn template_reference_becomes_inline_placeholder() {
        let (fragments, table) = classify(" width: 100px; @Style Base; color: red; ");
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, " width: 100px; __chtl_ph_0__ color: red; ");
        assert_eq!(table.entries()[0].original_text, "@Style Base;");
        assert_eq!(table.entries()[0].originating_kind, FragmentKind::Host);
        assert_eq!(table.restore(&fragments[0].text).unwrap(), " width: 100px; @Style Base; color: red; ");
    }

    #[test]
    fn keyword_values_are_style_text() {
        let (fragments, table) = classify("color: inherit; inherit @Style A, @Style B;");
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].original_text, "inherit @Style A, @Style B;");
        assert_eq!(fragments[0].text, "color: inherit; __chtl_ph_0__");
    }

    #[test]
    fn comma_ends_a_nested_construct() {
        let (fragments, table) = classify("font: @Var Fonts(main) , serif;");
        assert_eq!(table.entries()[0].original_text, "@Var Fonts(main)");
        assert_eq!(fragments[0].text, "font: __chtl_ph_0__ , serif;");
    }

    #[test]
    fn unmatched_brace_ends_a_construct() {
        let (fragments, table) = classify(".box { @Style Card } .x { }");
        assert_eq!(table.entries()[0].original_text, "@Style Card");
        assert_eq!(fragments[0].text, ".box { __chtl_ph_0__ } .x { }");
    }

    #[test]
    fn braced_statement_at_top_level_is_host() {
        let (fragments, table) = classify("a { b: c; } @Style Base { color: red; } d { }");
        let kinds: Vec<_> = fragments.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            [FragmentKind::StyleSheet, FragmentKind::Host, FragmentKind::StyleSheet]
        );
        assert_eq!(fragments[1].text, "@Style Base { color: red; }");
        assert_eq!(fragments[1].source_offset.start, 12);
        assert_eq!(fragments[2].text, " d { }");
        assert!(table.is_empty());
    }

    #[test]
    fn braced_construct_inside_rule_stays_inline() {
        let (fragments, table) = classify(".a { @Style B { x: y; } }");
        assert_eq!(fragments.len(), 1);
        assert_eq!(table.entries()[0].original_text, "@Style B { x: y; }");
    }

    #[test]
    fn semicolon_stays_outside_when_an_identifier_follows() {
        let (fragments, table) = classify("@Var V;color:red");
        assert_eq!(table.entries()[0].original_text, "@Var V");
        assert_eq!(fragments[0].text, "__chtl_ph_0__;color:red");
    }

    #[test]
    fn markers_in_strings_and_comments_are_ignored() {
        let (fragments, table) = classify("content: \"@Style X;\"; /* @Var Y; */");
        assert!(table.is_empty());
        assert_eq!(fragments.len(), 1);
    }
}
