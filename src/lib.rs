//! # cvsift
//!
//! Structured field extraction from PDF résumés.
//!
//! cvsift pulls text out of a PDF, runs a rule-based annotation pipeline
//! over it (tokens, sentences, noun phrases, entities), and applies one
//! extractor per output field: summary, total experience, skills,
//! companies, positions, education, certifications, and tools. The result
//! is a [`ResumeRecord`] serialized as JSON, one file per document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cvsift::ResumeParser;
//!
//! fn main() -> cvsift::Result<()> {
//!     let parser = ResumeParser::new();
//!     let record = parser.parse_file("resume.pdf")?;
//!     println!("{}", record.to_json(cvsift::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Batch mode
//!
//! ```no_run
//! use cvsift::{BatchRunner, ResumeParser};
//! use std::path::Path;
//!
//! fn main() -> cvsift::Result<()> {
//!     let runner = BatchRunner::new(ResumeParser::new());
//!     let summary = runner.run(Path::new("input/resumes"), Path::new("output/processed"))?;
//!     println!("{} processed, {} failed", summary.processed, summary.failed);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **PDF text extraction**: page-ordered text via lopdf, with a
//!   line-preserving normalization pass (ligatures, bullets, NFC)
//! - **Rule-based annotation**: configurable entity rules (TECH, TOOL,
//!   CERTIFICATION, TITLE) over a tokenizer/tagger/chunker pipeline
//! - **Batch driver**: per-file failure isolation and a daily report log

pub mod annotate;
pub mod batch;
pub mod config;
pub mod dates;
pub mod detect;
pub mod error;
pub mod extract;
pub mod fields;
pub mod model;
pub mod report;

// Re-export commonly used types
pub use annotate::{Annotator, EntityRule, EntityRuler, RulePipeline, TokenPattern};
pub use batch::{BatchRunner, BatchSummary};
pub use config::SiftConfig;
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use extract::{
    ErrorMode, ExtractOptions, ExtractedDocument, NormalizeOptions, Normalizer, PdfExtractor,
};
pub use fields::extract_record;
pub use model::{
    AnnotatedText, DepRole, Entity, EntityLabel, JsonFormat, NounPhrase, PosTag, ResumeRecord,
    Sentence, Token,
};
pub use report::ReportLog;

use std::path::Path;

/// A parser holding the annotation pipeline and extraction options.
///
/// Construction compiles every rule and lexicon once; reuse one value for
/// a whole batch rather than building a parser per document.
pub struct ResumeParser {
    pipeline: RulePipeline,
    options: ExtractOptions,
}

impl ResumeParser {
    /// Parser with the built-in rule sets and default extraction options.
    pub fn new() -> Self {
        Self {
            pipeline: RulePipeline::new(),
            options: ExtractOptions::default(),
        }
    }

    /// Parser with custom entity rules.
    pub fn with_rules(rules: &[EntityRule]) -> Result<Self> {
        Ok(Self {
            pipeline: RulePipeline::with_rules(rules)?,
            options: ExtractOptions::default(),
        })
    }

    /// Set the text extraction options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Extract the page texts of a PDF.
    pub fn extract_document<P: AsRef<Path>>(&self, path: P) -> Result<ExtractedDocument> {
        let extractor = PdfExtractor::open_with_options(path, self.options.clone())?;
        extractor.extract()
    }

    /// Annotate a text blob.
    pub fn annotate(&self, text: &str) -> Result<AnnotatedText> {
        self.pipeline.annotate(text)
    }

    /// Parse a PDF résumé into a [`ResumeRecord`].
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ResumeRecord> {
        let document = self.extract_document(path)?;
        self.parse_text(&document.text())
    }

    /// Extract fields from already-extracted text.
    pub fn parse_text(&self, text: &str) -> Result<ResumeRecord> {
        let annotated = self.pipeline.annotate(text)?;
        Ok(fields::extract_record(text, &annotated))
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a PDF résumé with a one-shot default parser.
///
/// Builds the pipeline per call; for many documents construct a
/// [`ResumeParser`] (or a [`BatchRunner`]) once instead.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ResumeRecord> {
    ResumeParser::new().parse_file(path)
}

/// Extract the full text of a PDF as one newline-joined blob.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let extractor = PdfExtractor::open(path)?;
    Ok(extractor.extract()?.text())
}

/// Annotate a text blob with the built-in pipeline.
pub fn annotate_text(text: &str) -> Result<AnnotatedText> {
    RulePipeline::new().annotate(text)
}
