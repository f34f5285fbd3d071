use crate::inventory::domain::FilePosition;

/// Manifest text indexed by line, for turning tokens and byte offsets into
/// 1-based line/column positions
///
/// Columns count characters, not bytes.
pub struct SourceText<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, line_starts }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns a 1-based line without its line terminator
    pub fn line(&self, line_number: i64) -> Option<&'a str> {
        if line_number < 1 {
            return None;
        }
        let index = usize::try_from(line_number - 1).ok()?;
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        let line = &self.text[start..end];
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Converts a byte offset into a 1-based (line, column) pair
    pub fn line_column(&self, offset: usize) -> (i64, i64) {
        let offset = offset.min(self.text.len());
        let index = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = self.line_starts[index];
        let column = self.text[line_start..offset].chars().count() + 1;
        (index as i64 + 1, column as i64)
    }
}

/// 1-based column of a byte index inside a line
fn column_of(line: &str, byte_index: usize) -> i64 {
    line[..byte_index].chars().count() as i64 + 1
}

fn token_position(
    line_number: i64,
    line: &str,
    byte_index: usize,
    token: &str,
    filename: &str,
) -> FilePosition {
    let column_start = column_of(line, byte_index);
    let column_end = column_start + token.chars().count() as i64;
    FilePosition::new(line_number, line_number, column_start, column_end, filename)
}

/// Locates the first occurrence of a name token inside `[column_start, column_end)` of one line
///
/// Returns `None` when the token is not literally present in that range,
/// e.g. because it was synthesized rather than read from the file.
pub fn find_name_position(
    source: &SourceText<'_>,
    name: &str,
    line_number: i64,
    columns: (i64, i64),
    filename: &str,
) -> Option<FilePosition> {
    let (line, from, to) = column_slice(source, line_number, columns)?;
    if name.is_empty() {
        return None;
    }
    line[from..to]
        .find(name)
        .map(|i| token_position(line_number, line, from + i, name, filename))
}

/// Locates the last occurrence of a version token inside `[column_start, column_end)` of one line
///
/// A defaulted version (e.g. `0.0.0` standing in for a branch name) is not
/// in the text and yields `None`.
pub fn find_version_position(
    source: &SourceText<'_>,
    version: &str,
    line_number: i64,
    columns: (i64, i64),
    filename: &str,
) -> Option<FilePosition> {
    let (line, from, to) = column_slice(source, line_number, columns)?;
    if version.is_empty() {
        return None;
    }
    line[from..to]
        .rfind(version)
        .map(|i| token_position(line_number, line, from + i, version, filename))
}

/// Byte bounds of a 1-based, end-exclusive column range; clamped to the line
fn column_slice<'a>(
    source: &SourceText<'a>,
    line_number: i64,
    (column_start, column_end): (i64, i64),
) -> Option<(&'a str, usize, usize)> {
    let line = source.line(line_number)?;
    let start = usize::try_from(column_start - 1).ok()?;
    let end = usize::try_from(column_end - 1).ok()?;
    if end < start {
        return None;
    }
    let byte_at = |column: usize| {
        line.char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(line.len()))
            .nth(column)
    };
    let from = byte_at(start)?;
    let to = byte_at(end).unwrap_or(line.len());
    Some((line, from, to))
}
