//! Text extraction from PDF documents.

mod cleanup;
mod document;
mod options;
mod pdf;

pub use cleanup::{NormalizeOptions, Normalizer};
pub use document::ExtractedDocument;
pub use options::{ErrorMode, ExtractOptions};
pub use pdf::PdfExtractor;
