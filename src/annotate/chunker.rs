//! Base noun-phrase chunking.

use crate::model::{NounPhrase, PosTag, Sentence, Token};

/// Chunks maximal determiner/adjective/number/noun runs, trimmed to end at
/// their last nominal token. One pass per sentence; phrases never cross
/// sentence boundaries.
pub struct Chunker;

impl Chunker {
    pub fn new() -> Self {
        Self
    }

    pub fn chunks(&self, text: &str, tokens: &[Token], sentences: &[Sentence]) -> Vec<NounPhrase> {
        let mut phrases = Vec::new();

        for (sentence_idx, sentence) in sentences.iter().enumerate() {
            let mut i = sentence.token_start;
            while i < sentence.token_end {
                if !allowed(tokens[i].pos) {
                    i += 1;
                    continue;
                }

                let mut j = i;
                while j < sentence.token_end && allowed(tokens[j].pos) {
                    j += 1;
                }

                // A run without a nominal head is not a phrase.
                if let Some(last) = (i..j).rev().find(|&k| tokens[k].pos.is_nominal()) {
                    let start = tokens[i].start;
                    let end = tokens[last].end;
                    phrases.push(NounPhrase {
                        text: text[start..end].to_string(),
                        start,
                        end,
                        token_start: i,
                        token_end: last + 1,
                        sentence: sentence_idx,
                    });
                }
                i = j;
            }
        }

        phrases
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new()
    }
}

fn allowed(pos: PosTag) -> bool {
    pos.is_nominal() || matches!(pos, PosTag::Determiner | PosTag::Adjective | PosTag::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::tagger::Tagger;
    use crate::annotate::tokenizer::Tokenizer;

    fn chunk(text: &str) -> Vec<String> {
        let tokenizer = Tokenizer::new();
        let tagger = Tagger::new();
        let (mut tokens, sentences) = tokenizer.tokenize(text);
        tagger.tag(&mut tokens, &sentences);
        Chunker::new()
            .chunks(text, &tokens, &sentences)
            .into_iter()
            .map(|np| np.text)
            .collect()
    }

    #[test]
    fn test_adjective_noun_phrase() {
        assert_eq!(chunk("Built scalable systems."), ["scalable systems"]);
    }

    #[test]
    fn test_determiner_included() {
        assert_eq!(chunk("We maintained the deployment pipeline"), ["the deployment pipeline"]);
    }

    #[test]
    fn test_conjunction_splits_phrases() {
        assert_eq!(
            chunk("the backend service and the admin console"),
            ["the backend service", "the admin console"]
        );
    }

    #[test]
    fn test_number_leads_phrase() {
        assert_eq!(chunk("We shipped 3 releases"), ["3 releases"]);
    }

    #[test]
    fn test_run_without_nominal_is_skipped() {
        // "the" alone before a verb heads no phrase
        assert!(chunk("the shipped").is_empty());
    }

    #[test]
    fn test_phrases_do_not_cross_sentences() {
        let phrases = chunk("scalable systems\ndistributed pipelines");
        assert_eq!(phrases, ["scalable systems", "distributed pipelines"]);
    }
}
