use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

/// A readable manifest handle that knows where it came from
///
/// Extractors take ownership of one of these per call and read it to the end.
pub trait DepFile: Read + Send {
    fn path(&self) -> &Path;
}

/// DepFile backed by an in-memory buffer
///
/// Used when manifest bytes were obtained by something other than the
/// filesystem adapter (archives, network, tests).
pub struct InMemoryFile {
    path: PathBuf,
    cursor: Cursor<Vec<u8>>,
}

impl InMemoryFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            cursor: Cursor::new(content.into()),
        }
    }
}

impl Read for InMemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl DepFile for InMemoryFile {
    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_file_reads_content() {
        let mut file = InMemoryFile::new("dir/go.mod", "module a\n");
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();

        assert_eq!(content, "module a\n");
        assert_eq!(file.path(), Path::new("dir/go.mod"));
    }
}
