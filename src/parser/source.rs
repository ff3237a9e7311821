//! Input sources for smell exports.
//!
//! A source is only opened while the aggregator works on it; the returned
//! reader is dropped before the next source is touched.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// Anything the aggregator can read a smell export from
pub trait SmellSource {
    /// Name used for smell type detection and diagnostics
    fn name(&self) -> &str;

    /// Acquire a reader over the whole export, header included
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>>;
}

/// A smell export on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SmellSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// An in-memory export, handy for tests and piped data
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    content: String,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl SmellSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(self.content.as_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_source_name_is_file_name() {
        let source = FileSource::new("/tmp/exports/2017_7_18_LIC.csv");
        assert_eq!(source.name(), "2017_7_18_LIC.csv");
    }

    #[test]
    fn test_file_source_reads_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "header").unwrap();
        writeln!(file, "1,sha,A,dev,Foo").unwrap();

        let source = FileSource::new(file.path());
        let lines: Vec<String> = source.open().unwrap().lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["header", "1,sha,A,dev,Foo"]);
    }

    #[test]
    fn test_missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing_LIC.csv"));
        assert!(source.open().is_err());
    }
}
