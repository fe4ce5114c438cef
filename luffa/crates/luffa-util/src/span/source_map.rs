//! Source map for keeping loaded files addressable by [`FileIndex`].

use std::path::Path;
use std::sync::Arc;

use super::FileIndex;
use crate::error::{SourceError, SourceResult};

/// A loaded source file
///
/// Content is kept as raw bytes; the scanner treats every byte as a single
/// character.
///
/// # Examples
///
/// ```
/// use luffa_util::{FileIndex, SourceFile};
///
/// let file = SourceFile::new(FileIndex(0), "main.lua", b"print(1)".to_vec());
/// assert_eq!(file.name(), "main.lua");
/// assert_eq!(file.bytes(), b"print(1)");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    index: FileIndex,
    name: String,
    bytes: Arc<[u8]>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    pub fn new(index: FileIndex, name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        let line_starts = Self::line_starts(&bytes);
        Self {
            index,
            name: name.into(),
            bytes,
            line_starts,
        }
    }

    fn line_starts(bytes: &[u8]) -> Arc<[usize]> {
        let mut starts = vec![0];
        starts.extend(
            bytes
                .iter()
                .enumerate()
                .filter(|(_, b)| **b == b'\n')
                .map(|(i, _)| i + 1),
        );
        starts.into()
    }

    #[inline]
    pub fn index(&self) -> FileIndex {
        self.index
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of lines, counting a trailing partial line.
    ///
    /// ```
    /// use luffa_util::{FileIndex, SourceFile};
    ///
    /// let file = SourceFile::new(FileIndex(0), "a", b"one\ntwo\nthree".to_vec());
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the bytes of a zero-based line, without its newline.
    ///
    /// ```
    /// use luffa_util::{FileIndex, SourceFile};
    ///
    /// let file = SourceFile::new(FileIndex(0), "a", b"one\ntwo\r\nthree".to_vec());
    /// assert_eq!(file.line(1), Some(&b"two"[..]));
    /// assert_eq!(file.line(2), Some(&b"three"[..]));
    /// assert_eq!(file.line(3), None);
    /// ```
    pub fn line(&self, line: usize) -> Option<&[u8]> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.bytes.len());
        let text = &self.bytes[start..end];
        Some(text.strip_suffix(b"\r").unwrap_or(text))
    }
}

/// Registry of the files handed to the scanner.
///
/// Indexes are assigned sequentially starting from zero, so a token's
/// file index can be used to look up the name it was scanned from.
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an in-memory buffer and returns its index.
    pub fn add(&mut self, name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> FileIndex {
        let index = FileIndex(self.files.len());
        self.files.push(SourceFile::new(index, name, bytes));
        index
    }

    /// Reads a file from disk and registers it under its display path.
    pub fn load(&mut self, path: &Path) -> SourceResult<FileIndex> {
        let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::trace!(path = %path.display(), len = bytes.len(), "loaded source");
        Ok(self.add(path.display().to_string(), bytes))
    }

    pub fn get(&self, index: FileIndex) -> Option<&SourceFile> {
        self.files.get(index.as_usize())
    }

    /// Like [`SourceMap::get`], but reports unknown indexes as an error.
    pub fn file(&self, index: FileIndex) -> SourceResult<&SourceFile> {
        self.get(index)
            .ok_or(SourceError::UnknownFile(index.as_usize()))
    }

    pub fn name(&self, index: FileIndex) -> Option<&str> {
        self.get(index).map(SourceFile::name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_indexes_are_sequential() {
        let mut map = SourceMap::new();
        let a = map.add("a.lua", b"a".to_vec());
        let b = map.add("b.lua", b"b".to_vec());
        assert_eq!(a, FileIndex(0));
        assert_eq!(b, FileIndex(1));
        assert_eq!(map.name(b), Some("b.lua"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_unknown_index() {
        let map = SourceMap::new();
        assert!(map.get(FileIndex(0)).is_none());
        assert!(matches!(
            map.file(FileIndex(4)),
            Err(SourceError::UnknownFile(4))
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("init.lua");
        std::fs::write(&path, "local x = 1\nreturn x\n").unwrap();

        let mut map = SourceMap::new();
        let index = map.load(&path).unwrap();
        let file = map.file(index).unwrap();
        assert_eq!(file.line(1), Some(&b"return x"[..]));
        assert_eq!(file.line_count(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let mut map = SourceMap::new();
        let err = map.load(Path::new("/nonexistent/luffa/file.lua")).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(map.is_empty());
    }
}
