/// A 1-based start/end pair on one axis (lines or columns)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub start: i64,
    pub end: i64,
}

impl Position {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// Span of text inside a manifest, together with the manifest it came from
///
/// Zero or negative fields mean "unknown". Such a position is never turned
/// into a location; see [`FilePosition::is_valid`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilePosition {
    pub line: Position,
    pub column: Position,
    pub filename: String,
}

impl FilePosition {
    pub fn new(
        line_start: i64,
        line_end: i64,
        column_start: i64,
        column_end: i64,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            line: Position::new(line_start, line_end),
            column: Position::new(column_start, column_end),
            filename: filename.into(),
        }
    }

    /// True iff all four numeric fields are strictly positive
    pub fn is_valid(&self) -> bool {
        is_position_valid(self)
    }

    /// Returns `Some(self)` only when the position was extracted successfully
    pub fn into_valid(self) -> Option<Self> {
        self.is_valid().then_some(self)
    }
}

pub fn is_position_valid(position: &FilePosition) -> bool {
    position.line.start > 0
        && position.line.end > 0
        && position.column.start > 0
        && position.column.end > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_positive_is_valid() {
        assert!(FilePosition::new(1, 1, 1, 1, "go.mod").is_valid());
        assert!(FilePosition::new(19, 64, 9, 10, "Pipfile.lock").is_valid());
    }

    #[test]
    fn test_default_is_invalid() {
        assert!(!FilePosition::default().is_valid());
    }

    #[test]
    fn test_single_zero_field_is_invalid() {
        assert!(!FilePosition::new(0, 1, 1, 1, "f").is_valid());
        assert!(!FilePosition::new(1, 0, 1, 1, "f").is_valid());
        assert!(!FilePosition::new(1, 1, 0, 1, "f").is_valid());
        assert!(!FilePosition::new(1, 1, 1, 0, "f").is_valid());
    }

    #[test]
    fn test_single_negative_field_is_invalid() {
        assert!(!FilePosition::new(-1, 1, 1, 1, "f").is_valid());
        assert!(!FilePosition::new(1, -1, 1, 1, "f").is_valid());
        assert!(!FilePosition::new(1, 1, -1, 1, "f").is_valid());
        assert!(!FilePosition::new(1, 1, 1, -1, "f").is_valid());
    }

    #[test]
    fn test_into_valid() {
        assert!(FilePosition::new(2, 2, 3, 9, "f").into_valid().is_some());
        assert!(FilePosition::new(2, 2, 0, 9, "f").into_valid().is_none());
    }
}
