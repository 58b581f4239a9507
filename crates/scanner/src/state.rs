//! Literal-aware cursor over a source text.
//!
//! Keywords and braces only count when they appear in code. [`ScanState`]
//! tracks whether the cursor is inside a string, template literal or comment
//! so the scanner and classifiers can skip those regions without a separate
//! tokenizer.

use chtl_types::{Position, is_ident_byte};

/// What kind of literal, if any, the cursor is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralMode {
    #[default]
    None,
    SingleQuote,
    DoubleQuote,
    Backtick,
    LineComment,
    BlockComment,
}

impl LiteralMode {
    pub fn is_comment(self) -> bool {
        matches!(self, LiteralMode::LineComment | LiteralMode::BlockComment)
    }

    pub fn is_string(self) -> bool {
        matches!(
            self,
            LiteralMode::SingleQuote | LiteralMode::DoubleQuote | LiteralMode::Backtick
        )
    }
}

/// Returns the literal that starts at `pos`, if any.
///
/// A `'` or `"` directly after an identifier character is text, not a
/// string (`Don't panic` in an unquoted host literal). `//` opens a comment
/// only at a token boundary, so URLs such as `url(//cdn/a.png)` or
/// `url(http://host/a.png)` in style text stay intact.
pub fn literal_opening(bytes: &[u8], pos: usize) -> Option<LiteralMode> {
    let b = *bytes.get(pos)?;
    let after_ident = pos > 0 && is_ident_byte(bytes[pos - 1]);
    match b {
        b'\'' if !after_ident => Some(LiteralMode::SingleQuote),
        b'"' if !after_ident => Some(LiteralMode::DoubleQuote),
        b'`' => Some(LiteralMode::Backtick),
        b'/' => match bytes.get(pos + 1) {
            Some(b'/') if at_token_boundary(bytes, pos) => Some(LiteralMode::LineComment),
            Some(b'*') => Some(LiteralMode::BlockComment),
            _ => None,
        },
        _ => None,
    }
}

fn at_token_boundary(bytes: &[u8], pos: usize) -> bool {
    pos == 0
        || matches!(
            bytes[pos - 1],
            b' ' | b'\t' | b'\n' | b'\r' | b';' | b'{' | b'}' | b')' | b','
        )
}

/// The scanner's working state: cursor, position, brace depth and literal mode.
///
/// `depth` counts braces seen in code since the state was created. It is
/// scoped to whatever region the state walks; each classifier starts its own
/// state over its block body.
#[derive(Debug, Clone)]
pub struct ScanState<'a> {
    bytes: &'a [u8],
    pub cursor: usize,
    pub line: usize,
    pub column: usize,
    pub depth: usize,
    pub literal: LiteralMode,
}

impl<'a> ScanState<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            cursor: 0,
            line: 1,
            column: 1,
            depth: 0,
            literal: LiteralMode::None,
        }
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.bytes.len()
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// True if the byte under the cursor is code: outside any literal and not
    /// itself the start of one.
    pub fn at_code(&self) -> bool {
        self.literal == LiteralMode::None
            && !self.is_at_end()
            && literal_opening(self.bytes, self.cursor).is_none()
    }

    /// The literal that opens at the cursor, if the cursor is in code.
    pub fn opening(&self) -> Option<LiteralMode> {
        if self.literal == LiteralMode::None {
            literal_opening(self.bytes, self.cursor)
        } else {
            None
        }
    }

    /// Consumes one lexical step: a code byte, a literal delimiter, an
    /// escape pair, or a byte of literal content.
    pub fn bump(&mut self) {
        let Some(b) = self.peek() else {
            return;
        };

        match self.literal {
            LiteralMode::None => match literal_opening(self.bytes, self.cursor) {
                Some(mode) => {
                    self.literal = mode;
                    self.step(if mode.is_comment() { 2 } else { 1 });
                }
                None => {
                    match b {
                        b'{' => self.depth += 1,
                        b'}' => self.depth = self.depth.saturating_sub(1),
                        _ => {}
                    }
                    self.step(1);
                }
            },
            LiteralMode::SingleQuote | LiteralMode::DoubleQuote => {
                let quote = if self.literal == LiteralMode::SingleQuote {
                    b'\''
                } else {
                    b'"'
                };
                match b {
                    b'\\' => self.step(2),
                    // Unterminated strings end at the line break.
                    b'\n' => {
                        self.literal = LiteralMode::None;
                        self.step(1);
                    }
                    _ if b == quote => {
                        self.literal = LiteralMode::None;
                        self.step(1);
                    }
                    _ => self.step(1),
                }
            }
            LiteralMode::Backtick => match b {
                b'\\' => self.step(2),
                b'`' => {
                    self.literal = LiteralMode::None;
                    self.step(1);
                }
                _ => self.step(1),
            },
            LiteralMode::LineComment => {
                if b == b'\n' {
                    self.literal = LiteralMode::None;
                }
                self.step(1);
            }
            LiteralMode::BlockComment => {
                if b == b'*' && self.bytes.get(self.cursor + 1) == Some(&b'/') {
                    self.literal = LiteralMode::None;
                    self.step(2);
                } else {
                    self.step(1);
                }
            }
        }
    }

    /// Bumps until the cursor reaches `target`, tracking literals and depth.
    pub fn advance_to(&mut self, target: usize) {
        while self.cursor < target && !self.is_at_end() {
            self.bump();
        }
    }

    /// Moves the cursor to `target` without interpreting the skipped bytes.
    ///
    /// Used after a balanced region has been consumed as a whole, so the
    /// literal mode resets and the depth is unchanged.
    pub fn jump_to(&mut self, target: usize) {
        let target = target.min(self.bytes.len());
        if target > self.cursor {
            self.step(target - self.cursor);
        }
        self.literal = LiteralMode::None;
    }

    /// Returns the offset of the `close` byte matching the `open` byte under
    /// the cursor, skipping literals. `None` if it is never closed.
    pub fn matching(&self, open: u8, close: u8) -> Option<usize> {
        let mut probe = self.clone();
        let mut depth = 0usize;
        while let Some(b) = probe.peek() {
            if probe.at_code() {
                if b == open {
                    depth += 1;
                } else if b == close {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(probe.cursor);
                    }
                }
            }
            probe.bump();
        }
        None
    }

    /// Finds the next code occurrence of `needle` at or after the cursor.
    pub fn find_code(&self, needle: &[u8]) -> Option<usize> {
        let mut probe = self.clone();
        while !probe.is_at_end() {
            if probe.at_code() && self.bytes[probe.cursor..].starts_with(needle) {
                return Some(probe.cursor);
            }
            probe.bump();
        }
        None
    }

    fn step(&mut self, n: usize) {
        let end = (self.cursor + n).min(self.bytes.len());
        for &b in &self.bytes[self.cursor..end] {
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else if b & 0xC0 != 0x80 {
                self.column += 1;
            }
        }
        self.cursor = end;
    }
}

/// Returns the offset of the `close` byte matching the `open` byte at `at`.
pub fn find_matching(bytes: &[u8], at: usize, open: u8, close: u8) -> Option<usize> {
    let mut state = ScanState::new(bytes);
    state.jump_to(at);
    state.matching(open, close)
}

pub fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(|b| b.is_ascii_whitespace()) {
        pos += 1;
    }
    pos
}

/// Skips whitespace and comments starting at `pos`.
pub fn skip_trivia(bytes: &[u8], mut pos: usize) -> usize {
    loop {
        pos = skip_whitespace(bytes, pos);
        match literal_opening(bytes, pos) {
            Some(LiteralMode::LineComment) => {
                pos = match bytes[pos..].iter().position(|&b| b == b'\n') {
                    Some(i) => pos + i + 1,
                    None => return bytes.len(),
                };
            }
            Some(LiteralMode::BlockComment) => {
                pos = match bytes[pos + 2..].windows(2).position(|w| w == b"*/") {
                    Some(i) => pos + 2 + i + 2,
                    None => return bytes.len(),
                };
            }
            _ => return pos,
        }
    }
}

/// True if `word` occurs at `pos` as a whole word.
///
/// The boundary check only applies to edges of `word` that are identifier
/// characters, so sigil words like `@Style` or `[Template]` can follow
/// punctuation directly.
pub fn matches_word_at(bytes: &[u8], pos: usize, word: &str) -> bool {
    let word = word.as_bytes();
    let (Some(&first), Some(&last)) = (word.first(), word.last()) else {
        return false;
    };
    if !bytes[pos.min(bytes.len())..].starts_with(word) {
        return false;
    }
    if is_ident_byte(first) && pos > 0 && is_ident_byte(bytes[pos - 1]) {
        return false;
    }
    let end = pos + word.len();
    !(is_ident_byte(last) && bytes.get(end).is_some_and(|&b| is_ident_byte(b)))
}
