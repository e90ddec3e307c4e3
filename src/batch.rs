//! Sequential batch processing of a résumé directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::model::JsonFormat;
use crate::report::ReportLog;
use crate::ResumeParser;

/// Counts for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents parsed and written
    pub processed: usize,

    /// Documents skipped after an error
    pub failed: usize,

    /// Where the JSON records went
    pub output_dir: PathBuf,
}

impl BatchSummary {
    /// Total documents attempted.
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }
}

/// Drives one document at a time through parse and write.
///
/// A failure in either stage is appended to the report log with the file
/// name and the driver moves on; nothing aborts the batch and nothing is
/// retried.
pub struct BatchRunner {
    parser: ResumeParser,
    format: JsonFormat,
    report_dir: Option<PathBuf>,
}

impl BatchRunner {
    pub fn new(parser: ResumeParser) -> Self {
        Self {
            parser,
            format: JsonFormat::Pretty,
            report_dir: None,
        }
    }

    /// Set the JSON output format (pretty by default).
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Write the report log somewhere other than the output directory.
    pub fn with_report_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.report_dir = Some(dir.into());
        self
    }

    /// The `.pdf` files (case-insensitive) directly inside `input`, sorted
    /// by file name for a deterministic batch order.
    pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(input)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| Error::Io(io::Error::from(e)))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
            {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Process every PDF in `input`, writing one JSON per document into
    /// `output`.
    pub fn run(&self, input: &Path, output: &Path) -> Result<BatchSummary> {
        self.run_with_progress(input, output, |_| {})
    }

    /// Like [`run`](Self::run), invoking `progress` after each document.
    pub fn run_with_progress<F>(
        &self,
        input: &Path,
        output: &Path,
        mut progress: F,
    ) -> Result<BatchSummary>
    where
        F: FnMut(&Path),
    {
        fs::create_dir_all(output)?;

        let report = ReportLog::new(self.report_dir.as_deref().unwrap_or(output));
        report.run_started()?;

        let files = Self::collect_inputs(input)?;
        let mut summary = BatchSummary {
            processed: 0,
            failed: 0,
            output_dir: output.to_path_buf(),
        };

        for file in files {
            match self.process_one(&file, output) {
                Ok(written) => {
                    summary.processed += 1;
                    log::info!("Processed {} -> {}", file.display(), written.display());
                }
                Err(e) => {
                    summary.failed += 1;
                    let name = file
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| file.display().to_string());
                    log::error!("Error processing {}: {}", name, e);
                    if let Err(report_err) = report.file_error(&name, &e) {
                        log::warn!("Could not append to report log: {}", report_err);
                    }
                }
            }
            progress(&file);
        }

        Ok(summary)
    }

    fn process_one(&self, file: &Path, output: &Path) -> Result<PathBuf> {
        let record = self.parser.parse_file(file)?;
        let json = record.to_json(self.format)?;

        let stem = file
            .file_stem()
            .ok_or_else(|| Error::Other(format!("invalid file name: {}", file.display())))?;
        let out_path = output.join(stem).with_extension("json");
        fs::write(&out_path, json)?;
        Ok(out_path)
    }
}
