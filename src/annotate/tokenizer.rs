//! Regex tokenization and sentence segmentation.

use std::collections::HashSet;

use regex::Regex;

use crate::model::{DepRole, PosTag, Sentence, Token};

/// Tokenizer with compiled rules.
///
/// Produces word, number, and punctuation tokens with byte spans into the
/// source text. Dotted abbreviations ("B.S.", "e.g.") stay single tokens;
/// a trailing period after a plain word is its own token so sentence
/// segmentation can see it.
pub struct Tokenizer {
    token_re: Regex,
    abbreviations: HashSet<&'static str>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            // Order matters: dotted words, plain words, numbers (with
            // internal / or .), then any other non-space character.
            token_re: Regex::new(r"\p{L}+(?:\.\p{L}+)+\.?|\p{L}+|\d+(?:[/.]\d+)*|\S").unwrap(),
            abbreviations: [
                "inc", "corp", "ltd", "co", "llc", "sr", "jr", "mr", "mrs", "ms", "dr", "st",
                "vs", "etc", "no", "univ", "dept",
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Tokenize the text and group the tokens into sentences.
    pub fn tokenize(&self, text: &str) -> (Vec<Token>, Vec<Sentence>) {
        let mut tokens = Vec::new();
        for m in self.token_re.find_iter(text) {
            tokens.push(Token {
                text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
                pos: PosTag::Other,
                lemma: String::new(),
                dep: DepRole::default(),
            });
        }

        let sentences = self.segment(text, &tokens);
        (tokens, sentences)
    }

    /// Sentence boundaries: line breaks always split; sentence-final
    /// punctuation splits unless it trails a known abbreviation.
    fn segment(&self, text: &str, tokens: &[Token]) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut first = 0;

        for i in 0..tokens.len() {
            let boundary = if i + 1 == tokens.len() {
                true
            } else {
                let gap = &text[tokens[i].end..tokens[i + 1].start];
                gap.contains('\n') || self.ends_sentence(tokens, i)
            };

            if boundary {
                let start = tokens[first].start;
                let end = tokens[i].end;
                sentences.push(Sentence {
                    text: text[start..end].to_string(),
                    start,
                    end,
                    token_start: first,
                    token_end: i + 1,
                });
                first = i + 1;
            }
        }

        sentences
    }

    fn ends_sentence(&self, tokens: &[Token], i: usize) -> bool {
        match tokens[i].text.as_str() {
            "!" | "?" => true,
            "." => {
                if i == 0 {
                    return true;
                }
                let prev = tokens[i - 1].lower();
                !self.abbreviations.contains(prev.as_str())
            }
            _ => false,
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_basic_tokens() {
        let tokenizer = Tokenizer::new();
        let (tokens, _) = tokenizer.tokenize("Built scalable systems.");
        assert_eq!(texts(&tokens), ["Built", "scalable", "systems", "."]);
    }

    #[test]
    fn test_spans_slice_back() {
        let text = "I worked at Acme Corp (NYC).";
        let tokenizer = Tokenizer::new();
        let (tokens, _) = tokenizer.tokenize(text);
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_dotted_abbreviation_is_one_token() {
        let tokenizer = Tokenizer::new();
        let (tokens, sentences) = tokenizer.tokenize("B.S. in Computer Science");
        assert_eq!(tokens[0].text, "B.S.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_numeric_date_tokens() {
        let tokenizer = Tokenizer::new();
        let (tokens, _) = tokenizer.tokenize("03/2016 and 2015-03-07");
        assert_eq!(
            texts(&tokens),
            ["03/2016", "and", "2015", "-", "03", "-", "07"]
        );
    }

    #[test]
    fn test_newline_splits_sentences() {
        let tokenizer = Tokenizer::new();
        let (_, sentences) = tokenizer.tokenize("Summary: Built things\nEducation: BS");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Summary: Built things");
        assert_eq!(sentences[1].text, "Education: BS");
    }

    #[test]
    fn test_period_splits_sentences() {
        let tokenizer = Tokenizer::new();
        let (_, sentences) = tokenizer.tokenize("I worked at Acme. We shipped features.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "I worked at Acme.");
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let tokenizer = Tokenizer::new();
        let (_, sentences) = tokenizer.tokenize("Engineer at Acme Inc. since 2015");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        let (tokens, sentences) = tokenizer.tokenize("");
        assert!(tokens.is_empty());
        assert!(sentences.is_empty());
    }
}
