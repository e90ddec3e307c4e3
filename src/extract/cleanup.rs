//! Line-preserving text normalization for extracted page text.
//!
//! PDF extraction leaves ligatures, decorative bullets, and stray control
//! characters in the text; "certiﬁed" with a U+FB01 ligature will never
//! match a pattern written against ASCII. Every stage here keeps line
//! boundaries intact — section extraction is line-anchored.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Options for text normalization.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Expand ligatures (ﬁ → fi, etc.)
    pub fix_ligatures: bool,

    /// Standardize bullet characters (●, ○, ■ → •)
    pub standardize_bullets: bool,

    /// Remove the Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Convert CRLF to LF and trim trailing whitespace per line
    pub trim_line_ends: bool,

    /// Maximum consecutive blank lines (0 = unlimited)
    pub max_blank_lines: u8,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            standardize_bullets: true,
            remove_replacement_char: true,
            trim_line_ends: true,
            max_blank_lines: 1,
        }
    }
}

/// Text normalizer with compiled rules.
pub struct Normalizer {
    options: NormalizeOptions,
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            ligature_map: vec![
                ("\u{FB00}", "ff"),  // ﬀ
                ("\u{FB01}", "fi"),  // ﬁ
                ("\u{FB02}", "fl"),  // ﬂ
                ("\u{FB03}", "ffi"), // ﬃ
                ("\u{FB04}", "ffl"), // ﬄ
                ("\u{FB05}", "st"),  // ﬅ (long s + t)
                ("\u{FB06}", "st"),  // ﬆ
            ],
        }
    }

    /// Run the normalization stages over the text.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.standardize_bullets {
            result = self.standardize_bullets(&result);
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.trim_line_ends {
            result = self.trim_line_ends(&result);
        }

        if self.options.max_blank_lines > 0 {
            result = self.limit_blank_lines(&result);
        }

        result
    }

    fn standardize_bullets(&self, text: &str) -> String {
        let bullets = ['●', '○', '■', '□', '◆', '◇', '▪', '▫', '►', '▻'];
        let mut result = text.to_string();
        for bullet in bullets {
            result = result.replace(bullet, "•");
        }
        result
    }

    fn trim_line_ends(&self, text: &str) -> String {
        text.replace("\r\n", "\n")
            .replace('\r', "\n")
            .lines()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn limit_blank_lines(&self, text: &str) -> String {
        // A run of N blank lines is N+1 newlines in a row.
        let max = self.options.max_blank_lines as usize;
        let pattern = format!(r"\n{{{},}}", max + 2);
        let re = Regex::new(&pattern).unwrap();
        let replacement = "\n".repeat(max + 1);
        re.replace_all(text, replacement.as_str()).to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}
