//! Source positions for error reporting

use std::fmt;

/// A 1-indexed line/column pair.
///
/// The column is a byte offset within the line, so a multi-byte character
/// before a reference advances it by more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 15).to_string(), "2:15");
    }

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Position::default(), Position::new(1, 1));
    }

    #[test]
    fn test_ordering_is_line_major() {
        assert!(Position::new(1, 40) < Position::new(2, 1));
    }
}
