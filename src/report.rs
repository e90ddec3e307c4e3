//! The append-only daily report log.
//!
//! One file per calendar day, `report_<YYYYMMDD>.log`, accumulating across
//! runs: a start-of-run line, then one line per failed document.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Error, Result};

pub struct ReportLog {
    path: PathBuf,
}

impl ReportLog {
    /// Report log for today in the given directory.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let name = format!("report_{}.log", Local::now().format("%Y%m%d"));
        Self {
            path: dir.as_ref().join(name),
        }
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record the start of a batch run.
    pub fn run_started(&self) -> Result<()> {
        self.append("Processing started")
    }

    /// Record a per-file failure.
    pub fn file_error(&self, filename: &str, message: impl std::fmt::Display) -> Result<()> {
        self.append(&format!("Error processing {}: {}", filename, message))
    }

    fn append(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::Report(format!("{}: {}", parent.display(), e)))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::Report(format!("{}: {}", self.path.display(), e)))?;

        writeln!(
            file,
            "[{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            line
        )
        .map_err(|e| Error::Report(e.to_string()))
    }
}
