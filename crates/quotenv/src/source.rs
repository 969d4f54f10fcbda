//! Byte sources for the loader. A source is read to the end before parsing
//! starts; there is no streaming mode.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    vec::Vec,
};

/// Something that can hand over the complete content to parse.
pub trait Source {
    /// Read the whole content.
    ///
    /// # Errors
    ///
    /// Any I/O failure of the underlying file or reader.
    fn fetch(&mut self) -> io::Result<Vec<u8>>;
}

/// A file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Read from `path` when fetched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Source for FileSource {
    fn fetch(&mut self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

/// Any [`Read`] implementation, drained on fetch.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Recover the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Source for ReaderSource<R> {
    fn fetch(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl Source for &[u8] {
    fn fetch(&mut self) -> io::Result<Vec<u8>> {
        Ok(self.to_vec())
    }
}
