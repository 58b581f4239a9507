//! Script-region classification.
//!
//! Enhanced constructs stay in place; every run of plain script between them
//! is moved into the placeholder table. What is left is one enhanced-script
//! fragment the enhanced compiler can parse without knowing plain script.

use crate::boundary::Scanner;
use crate::error::ScanError;
use crate::state::{ScanState, find_matching, matches_word_at, skip_whitespace};
use chtl_placeholder::PlaceholderTable;
use chtl_types::{Fragment, FragmentKind, SourceSpan, is_ident_byte, is_ident_start};

impl Scanner<'_> {
    /// Turns a script block body into exactly one `EnhancedScript` fragment.
    ///
    /// Enhanced constructs are `{{selector}}` expressions and configured
    /// keywords followed by a `{ ... }` body, each optionally extended by
    /// chained calls (`->listen { ... }`, `&-> click { ... }`). Plain script
    /// between them is registered in `table` as `Script` text and replaced by
    /// its token. A keyword that is not followed by `{` is an ordinary
    /// identifier and stays plain script.
    pub fn classify_script(
        &self,
        body: &str,
        base: usize,
        table: &mut PlaceholderTable,
    ) -> Result<Vec<Fragment>, ScanError> {
        let bytes = body.as_bytes();
        let mut enhanced = String::with_capacity(body.len());
        let mut plain_start = 0;
        let mut constructs = 0usize;
        let mut unclosed_selector = false;
        let mut state = ScanState::new(bytes);

        while !state.is_at_end() {
            if !state.at_code() {
                state.bump();
                continue;
            }
            let Some(end) = self.construct_at(bytes, &state, &mut unclosed_selector) else {
                state.bump();
                continue;
            };

            let start = state.cursor;
            excise_plain(body, base, plain_start, start, &mut enhanced, table)?;
            enhanced.push_str(&body[start..end]);
            log::trace!(
                "Enhanced construct at {}: '{}'",
                base + start,
                first_line(&body[start..end])
            );
            constructs += 1;
            plain_start = end;
            state.jump_to(end);
        }
        excise_plain(body, base, plain_start, body.len(), &mut enhanced, table)?;

        log::debug!(
            "Script block at {} holds {} enhanced construct(s)",
            base,
            constructs
        );
        let span = SourceSpan::new(base, base + body.len());
        Ok(vec![Fragment::new(FragmentKind::EnhancedScript, enhanced, span)])
    }

    /// Returns the end of the enhanced construct starting at the cursor.
    ///
    /// Once a selector opening has no close, no later opening has one either;
    /// `unclosed_selector` records that so the body is searched only once.
    /// A construct is never empty, whatever the configured delimiters are.
    fn construct_at(
        &self,
        bytes: &[u8],
        state: &ScanState<'_>,
        unclosed_selector: &mut bool,
    ) -> Option<usize> {
        let pos = state.cursor;
        let delimiters = &self.config().selector_delimiters;
        let open = delimiters.open.as_bytes();

        let end = if !open.is_empty() && bytes[pos..].starts_with(open) {
            if *unclosed_selector {
                return None;
            }
            let mut probe = state.clone();
            probe.jump_to(pos + open.len());
            let Some(close) = probe.find_code(delimiters.close.as_bytes()) else {
                *unclosed_selector = true;
                return None;
            };
            close + delimiters.close.len()
        } else if is_ident_start(bytes[pos]) {
            let keyword = self
                .config()
                .script_keywords
                .iter()
                .find(|keyword| matches_word_at(bytes, pos, keyword))?;
            let open = skip_whitespace(bytes, pos + keyword.len());
            if bytes.get(open) != Some(&b'{') {
                return None;
            }
            find_matching(bytes, open, b'{', b'}')? + 1
        } else {
            return None;
        };

        (end > pos).then(|| self.extend_chain(bytes, end))
    }

    /// Extends a construct over chained calls such as `->listen { ... }`.
    fn extend_chain(&self, bytes: &[u8], mut end: usize) -> usize {
        let mut operators: Vec<&str> = self.config().chain_operators.iter().map(String::as_str).collect();
        operators.sort_by_key(|op| std::cmp::Reverse(op.len()));

        loop {
            let at = skip_whitespace(bytes, end);
            let Some(op) = operators
                .iter()
                .find(|op| !op.is_empty() && bytes[at..].starts_with(op.as_bytes()))
            else {
                return end;
            };

            let name_start = skip_whitespace(bytes, at + op.len());
            if !bytes.get(name_start).is_some_and(|&b| is_ident_start(b)) {
                return end;
            }
            let mut name_end = name_start;
            while bytes.get(name_end).is_some_and(|&b| is_ident_byte(b)) {
                name_end += 1;
            }

            let args = skip_whitespace(bytes, name_end);
            end = match bytes.get(args) {
                Some(b'(') => find_matching(bytes, args, b'(', b')').map_or(name_end, |c| c + 1),
                Some(b'{') => find_matching(bytes, args, b'{', b'}').map_or(name_end, |c| c + 1),
                _ => name_end,
            };
        }
    }
}

/// Moves `body[from..to]` into the table and writes its token into `enhanced`.
///
/// Surrounding whitespace stays in the enhanced text. A punctuation byte at
/// either edge also stays outside when the neighbouring enhanced text is an
/// identifier character, so the token never merges with it.
fn excise_plain(
    body: &str,
    base: usize,
    from: usize,
    to: usize,
    enhanced: &mut String,
    table: &mut PlaceholderTable,
) -> Result<(), ScanError> {
    let bytes = body.as_bytes();
    let mut lead = skip_whitespace(bytes, from).min(to);
    let mut trail = trim_whitespace_end(bytes, lead, to);

    let glues_left = lead == from && enhanced.as_bytes().last().is_some_and(|&b| is_ident_byte(b));
    if glues_left && lead < trail && !is_ident_byte(bytes[lead]) {
        lead = skip_whitespace(bytes, lead + 1).min(trail);
    }
    let glues_right = trail == to && bytes.get(to).is_some_and(|&b| is_ident_byte(b));
    if glues_right && lead < trail && !is_ident_byte(bytes[trail - 1]) {
        trail = trim_whitespace_end(bytes, lead, trail - 1);
    }

    if lead >= trail {
        enhanced.push_str(&body[from..to]);
        return Ok(());
    }

    enhanced.push_str(&body[from..lead]);
    let span = SourceSpan::new(lead, trail).shift(base);
    let id = table.register(&body[lead..trail], FragmentKind::Script, span)?;
    enhanced.push_str(&table.format().render(id));
    enhanced.push_str(&body[trail..to]);
    Ok(())
}

fn trim_whitespace_end(bytes: &[u8], start: usize, mut end: usize) -> usize {
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    end
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
