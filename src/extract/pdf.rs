//! PDF text extraction using lopdf.

use std::path::{Path, PathBuf};

use lopdf::Document as LopdfDocument;

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};

use super::cleanup::Normalizer;
use super::document::ExtractedDocument;
use super::options::{ErrorMode, ExtractOptions};

/// PDF text extractor.
///
/// Owns the open document; the handle is released when the extractor is
/// dropped, on success and error paths alike.
pub struct PdfExtractor {
    doc: LopdfDocument,
    path: PathBuf,
    options: ExtractOptions,
    normalizer: Option<Normalizer>,
}

impl PdfExtractor {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a PDF before handing it to lopdf
        detect_format_from_path(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::from_document(doc, path.to_path_buf(), options)
    }

    /// Read a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ExtractOptions::default())
    }

    /// Read a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ExtractOptions) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::from_document(doc, PathBuf::new(), options)
    }

    fn from_document(doc: LopdfDocument, path: PathBuf, options: ExtractOptions) -> Result<Self> {
        // No decryption support; fail up front rather than extract garbage.
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        let normalizer = options.normalize.clone().map(Normalizer::new);
        Ok(Self {
            doc,
            path,
            options,
            normalizer,
        })
    }

    /// Extract all page texts in page order.
    pub fn extract(&self) -> Result<ExtractedDocument> {
        let mut document = ExtractedDocument::new(self.path.clone());

        for (&page_num, _) in self.doc.get_pages().iter() {
            match self.extract_page_text(page_num) {
                Ok(text) => {
                    let text = match &self.normalizer {
                        Some(normalizer) => normalizer.process(&text),
                        None => text,
                    };
                    document.add_page(text);
                }
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(e);
                    }
                    // In lenient mode the page contributes no text
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    document.add_page(String::new());
                }
            }
        }

        Ok(document)
    }

    /// Extract text from a single page.
    fn extract_page_text(&self, page_num: u32) -> Result<String> {
        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_num, e)))
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }
}
