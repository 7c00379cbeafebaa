//! Resume marker: index of the record that failed
//!
//! Each failure overwrites the file, so after a run it holds the index of the
//! last failed record. The importer never reads it back on its own.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Default marker file name, relative to the working directory
pub const DEFAULT_MARKER_FILE: &str = "load_resume.txt";

#[derive(Debug, Clone)]
pub struct ResumeMarker {
    path: PathBuf,
}

impl ResumeMarker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the marker contents with `index` as decimal text
    pub fn record_failure(&self, index: usize) -> io::Result<()> {
        fs::write(&self.path, index.to_string())
    }

    /// Index stored by a previous run, if the file exists
    pub fn read(&self) -> io::Result<Option<usize>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        content
            .trim()
            .parse()
            .map(Some)
            .map_err(|err| io::Error::new(ErrorKind::InvalidData, err))
    }
}
