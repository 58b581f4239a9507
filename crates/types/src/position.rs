//! Line and column positions for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based line/column location. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, column): (usize, usize)) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Maps byte offsets of one source text to line/column positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    source: String,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            line_starts,
            source: source.to_string(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the position of `offset`. Offsets past the end clamp to the end.
    pub fn position(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        Position {
            line: line + 1,
            column: self.source[line_start..offset].chars().count() + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.position(0), Position::START);
        assert_eq!(index.position(1), Position::from((1, 2)));
        assert_eq!(index.position(3), Position::from((2, 1)));
        assert_eq!(index.position(6), Position::from((3, 1)));
        assert_eq!(index.position(8), Position::from((4, 2)));
        assert_eq!(index.line_count(), 4);
    }

    #[test]
    fn offsets_past_the_end_clamp() {
        let index = LineIndex::new("abc");
        assert_eq!(index.position(99), Position::from((1, 4)));
    }

    #[test]
    fn columns_count_characters() {
        let index = LineIndex::new("样式 x");
        assert_eq!(index.position("样式 ".len()), Position::from((1, 4)));
    }

    #[test]
    fn position_display_matches_diagnostics() {
        assert_eq!(Position::from((3, 7)).to_string(), "line 3, column 7");
    }
}
