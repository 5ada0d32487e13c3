//! Position tracking for source locations
//!
//!     The scanner hands out byte spans. Errors and syntax tree nodes need line and column
//!     positions instead, which [SourceLocation] computes with a binary search over the byte
//!     offsets where lines start.
//!
//!     Positions are stored zero-based and displayed one-based, so `Position::new(0, 4)`
//!     prints as `1:5`, the way editors count.

use serde::Serialize;
use std::fmt;

/// A line:column position in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Converts byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    ///
    /// Columns count bytes from the start of the line.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        Position::new(line, byte_offset - self.line_starts[line])
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1:1");
        assert_eq!(Position::new(4, 12).to_string(), "5:13");
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 5) < Position::new(2, 0));
        assert!(Position::new(1, 5) > Position::new(1, 4));
    }

    #[test]
    fn test_byte_to_position() {
        let source = "effect \"a\"\n{\n  technique";
        let location = SourceLocation::new(source);

        assert_eq!(location.line_count(), 3);
        assert_eq!(location.byte_to_position(0), Position::new(0, 0));
        assert_eq!(location.byte_to_position(7), Position::new(0, 7));
        assert_eq!(location.byte_to_position(11), Position::new(1, 0));
        assert_eq!(location.byte_to_position(15), Position::new(2, 2));
    }

    #[test]
    fn test_offset_at_end_of_input() {
        let source = "pass\n";
        let location = SourceLocation::new(source);
        assert_eq!(location.byte_to_position(5), Position::new(1, 0));
    }
}
