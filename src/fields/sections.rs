//! Labeled-section extraction from the raw text.
//!
//! Sections are line-anchored: a line starting with the section label
//! (colon optional) opens the section, and the next `Label:` line or the
//! end of text closes it.

use regex::Regex;

/// Text of the first summary/objective section, or empty.
pub fn summary(text: &str) -> String {
    section_body(text, r"(?im)^(?:summary|objective):?[ \t]*").unwrap_or_default()
}

/// Non-empty trimmed lines of the education section, in document order,
/// with duplicates removed.
pub fn education(text: &str) -> Vec<String> {
    let body = section_body(text, r"(?im)^education:?[ \t]*").unwrap_or_default();
    let mut lines: Vec<String> = Vec::new();
    for line in body.lines() {
        let line = line.trim();
        if !line.is_empty() && !lines.iter().any(|seen| seen == line) {
            lines.push(line.to_string());
        }
    }
    lines
}

fn section_body(text: &str, header: &str) -> Option<String> {
    let header = Regex::new(header).unwrap();
    let next_section = Regex::new(r"\n\w+:").unwrap();

    let opened = header.find(text)?;
    let rest = &text[opened.end()..];
    let end = next_section
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}
