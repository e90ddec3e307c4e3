//! Extracted document type.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A document reduced to its page texts, in page order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Source file path (empty when parsed from bytes)
    pub path: PathBuf,

    /// Page texts in page order
    pub pages: Vec<String>,
}

impl ExtractedDocument {
    /// Create an empty document for the given source path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pages: Vec::new(),
        }
    }

    /// Append a page's text.
    pub fn add_page(&mut self, text: String) {
        self.pages.push(text);
    }

    /// Number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Whether no page carries any text.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.trim().is_empty())
    }

    /// The whole document as one blob: page texts joined with `\n`.
    pub fn text(&self) -> String {
        self.pages.join("\n")
    }

    /// Source path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
