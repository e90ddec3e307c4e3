//! The annotation pipeline behind the [`Annotator`] trait.

use std::cmp::Reverse;

use crate::error::Result;
use crate::model::{AnnotatedText, Entity, EntityLabel, Token};

use super::chunker::Chunker;
use super::ner::NerRecognizer;
use super::ruler::{EntityRule, EntityRuler};
use super::tagger::Tagger;
use super::tokenizer::Tokenizer;

/// An annotation engine: text in, [`AnnotatedText`] out.
///
/// The built-in implementation is [`RulePipeline`]; anything equivalent
/// (an external NLP service, a different model) can stand in behind this
/// trait.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedText>;
}

/// Rule-based annotation pipeline.
///
/// All rules, lexicons, and regexes compile once at construction; one
/// pipeline value is meant to be reused across documents.
pub struct RulePipeline {
    tokenizer: Tokenizer,
    tagger: Tagger,
    chunker: Chunker,
    ner: NerRecognizer,
    ruler: EntityRuler,
}

impl RulePipeline {
    /// Pipeline with the built-in rule sets.
    pub fn new() -> Self {
        Self::with_rules(&EntityRule::defaults()).expect("built-in rules compile")
    }

    /// Pipeline with custom entity rules (for example from a config file).
    pub fn with_rules(rules: &[EntityRule]) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(),
            tagger: Tagger::new(),
            chunker: Chunker::new(),
            ner: NerRecognizer::new(),
            ruler: EntityRuler::new(rules)?,
        })
    }

    /// Merge ruler and built-in NER candidates into a non-overlapping,
    /// position-ordered entity list. Ruler matches take precedence; within
    /// the same priority the longer match wins, ties go to the earlier
    /// start.
    fn resolve_entities(&self, text: &str, tokens: &[Token]) -> Vec<Entity> {
        struct Candidate {
            priority: u8,
            token_start: usize,
            token_end: usize,
            label: EntityLabel,
        }

        let mut candidates: Vec<Candidate> = self
            .ruler
            .find_matches(tokens)
            .into_iter()
            .map(|m| Candidate {
                priority: 0,
                token_start: m.token_start,
                token_end: m.token_end,
                label: m.label,
            })
            .chain(self.ner.find_matches(tokens).into_iter().map(|m| Candidate {
                priority: 1,
                token_start: m.token_start,
                token_end: m.token_end,
                label: m.label,
            }))
            .collect();

        candidates.sort_by_key(|c| {
            (
                c.priority,
                Reverse(c.token_end - c.token_start),
                c.token_start,
            )
        });

        let mut claimed = vec![false; tokens.len()];
        let mut accepted: Vec<&Candidate> = Vec::new();
        for candidate in &candidates {
            if claimed[candidate.token_start..candidate.token_end]
                .iter()
                .any(|&taken| taken)
            {
                continue;
            }
            for slot in &mut claimed[candidate.token_start..candidate.token_end] {
                *slot = true;
            }
            accepted.push(candidate);
        }
        accepted.sort_by_key(|c| c.token_start);

        accepted
            .into_iter()
            .map(|c| {
                let start = tokens[c.token_start].start;
                let end = tokens[c.token_end - 1].end;
                Entity {
                    text: text[start..end].to_string(),
                    label: c.label,
                    start,
                    end,
                    token_start: c.token_start,
                    token_end: c.token_end,
                    root_dep: tokens[c.token_end - 1].dep,
                }
            })
            .collect()
    }
}

impl Default for RulePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for RulePipeline {
    fn annotate(&self, text: &str) -> Result<AnnotatedText> {
        let (mut tokens, sentences) = self.tokenizer.tokenize(text);
        self.tagger.tag(&mut tokens, &sentences);
        let noun_phrases = self.chunker.chunks(text, &tokens, &sentences);
        let entities = self.resolve_entities(text, &tokens);

        Ok(AnnotatedText {
            text: text.to_string(),
            tokens,
            sentences,
            noun_phrases,
            entities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::ruler::TokenPattern;

    fn annotate(text: &str) -> AnnotatedText {
        RulePipeline::new().annotate(text).unwrap()
    }

    fn labeled(annotated: &AnnotatedText, label: EntityLabel) -> Vec<&str> {
        annotated
            .entities_with(label)
            .map(|e| e.text.as_str())
            .collect()
    }

    #[test]
    fn test_entities_are_ordered_and_disjoint() {
        let annotated = annotate("Java and Docker at Acme Corp since January 2015.");
        let mut last_end = 0;
        for entity in &annotated.entities {
            assert!(entity.start >= last_end);
            last_end = entity.end;
        }
        assert_eq!(labeled(&annotated, EntityLabel::Tech), ["Java"]);
        assert_eq!(labeled(&annotated, EntityLabel::Tool), ["Docker"]);
        assert_eq!(labeled(&annotated, EntityLabel::Org), ["Acme Corp"]);
        assert_eq!(labeled(&annotated, EntityLabel::Date), ["January 2015"]);
    }

    #[test]
    fn test_ruler_takes_precedence_over_ner() {
        // "Java Systems" is a capitalized run ending in an ORG suffix, but
        // the TECH rule claims "Java" first.
        let annotated = annotate("We run Java Systems");
        assert_eq!(labeled(&annotated, EntityLabel::Tech), ["Java"]);
        assert!(labeled(&annotated, EntityLabel::Org).is_empty());
    }

    #[test]
    fn test_custom_rules_replace_defaults() {
        let rules = vec![EntityRule {
            label: EntityLabel::Tech,
            pattern: vec![TokenPattern::LowerIn(vec!["rust".to_string()])],
        }];
        let pipeline = RulePipeline::with_rules(&rules).unwrap();
        let annotated = pipeline.annotate("Rust and Java").unwrap();
        assert_eq!(labeled(&annotated, EntityLabel::Tech), ["Rust"]);
    }

    #[test]
    fn test_certification_surface_keeps_case() {
        let annotated = annotate("Certified Kubernetes Administrator");
        assert_eq!(
            labeled(&annotated, EntityLabel::Certification),
            ["Certified Kubernetes"]
        );
    }

    #[test]
    fn test_empty_text() {
        let annotated = annotate("");
        assert!(annotated.tokens.is_empty());
        assert!(annotated.entities.is_empty());
    }
}
