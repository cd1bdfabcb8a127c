//! File sink implementation

use crate::core::{Level, LogError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Appends lines to a file. The path is probed at construction time so
/// misconfiguration surfaces immediately rather than on the first log call.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        probe(&path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::sink(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

/// Reject paths that can never take an append: directories, other non-file
/// types, and existing files without write permission.
fn probe(path: &std::path::Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(LogError::config("FileSink", "empty path"));
    }

    match path.metadata() {
        Ok(meta) if meta.is_dir() => {
            Err(LogError::sink(path.display().to_string(), "is a directory"))
        }
        Ok(meta) if !meta.is_file() => Err(LogError::sink(
            path.display().to_string(),
            "not a regular file",
        )),
        Ok(meta) if meta.permissions().readonly() => Err(LogError::sink(
            path.display().to_string(),
            "file is read-only",
        )),
        // Missing file is fine, OpenOptions creates it.
        _ => Ok(()),
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, _level: Level, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
