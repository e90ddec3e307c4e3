//! Annotation types produced by the pipeline.

use serde::{Deserialize, Serialize};

/// Part-of-speech tag assigned by the tagger.
///
/// A coarse tag set in the universal-dependencies style; only the
/// distinctions the field extractors rely on are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    /// Common noun
    Noun,
    /// Proper noun (capitalized mid-sentence, known names)
    ProperNoun,
    /// Verb, including auxiliaries
    Verb,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Determiner (the, a, this, ...)
    Determiner,
    /// Preposition or subordinating conjunction
    Adposition,
    /// Pronoun
    Pronoun,
    /// Coordinating conjunction
    Conjunction,
    /// Numeric token
    Number,
    /// Punctuation
    Punctuation,
    /// Anything else
    Other,
}

impl PosTag {
    /// Whether this tag is a noun or proper noun.
    pub fn is_nominal(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

/// Shallow dependency role of a token.
///
/// Only the copula-attribute relation is modeled; everything else is
/// [`DepRole::Other`]. The positions extractor is the sole consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepRole {
    /// Nominal complement of a copula ("is a senior engineer")
    Attribute,
    /// Unclassified
    #[default]
    Other,
}

/// A single token with its source span and annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,

    /// Byte offset of the token start in the source text
    pub start: usize,

    /// Byte offset one past the token end
    pub end: usize,

    /// Part-of-speech tag
    pub pos: PosTag,

    /// Base form (lemma); lowercased surface when no rule applies
    pub lemma: String,

    /// Shallow dependency role
    pub dep: DepRole,
}

impl Token {
    /// Lowercased surface text.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Label of a recognized entity span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    /// Calendar reference ("January 2015", "03/2016")
    Date,
    /// Organization name ("Acme Corp")
    Org,
    /// Technology term from the TECH rule set
    Tech,
    /// Tooling term from the TOOL rule set
    Tool,
    /// "certified" + qualifier phrase
    Certification,
    /// Job title from the TITLE rule set
    Title,
}

/// A labeled text span produced by the annotator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Exact source slice covered by the span
    pub text: String,

    /// Entity label
    pub label: EntityLabel,

    /// Byte offset of the span start
    pub start: usize,

    /// Byte offset one past the span end
    pub end: usize,

    /// Index of the first covered token
    pub token_start: usize,

    /// Index one past the last covered token
    pub token_end: usize,

    /// Dependency role of the span's final token
    pub root_dep: DepRole,
}

impl Entity {
    /// Whether the span lies entirely within the given sentence.
    pub fn within(&self, sentence: &Sentence) -> bool {
        self.start >= sentence.start && self.end <= sentence.end
    }
}

/// A sentence span with its token range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text as sliced from the source
    pub text: String,

    /// Byte offset of the sentence start
    pub start: usize,

    /// Byte offset one past the sentence end
    pub end: usize,

    /// Index of the first token in the sentence
    pub token_start: usize,

    /// Index one past the last token
    pub token_end: usize,
}

/// A base noun phrase identified by the chunker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NounPhrase {
    /// Phrase text as sliced from the source
    pub text: String,

    /// Byte offset of the phrase start
    pub start: usize,

    /// Byte offset one past the phrase end
    pub end: usize,

    /// Index of the first token in the phrase
    pub token_start: usize,

    /// Index one past the last token
    pub token_end: usize,

    /// Index of the containing sentence
    pub sentence: usize,
}

/// The annotator's full output over one text blob.
///
/// Tokens, sentences, noun phrases, and entities are all in source order;
/// entities never share tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedText {
    /// The annotated source text
    pub text: String,

    /// Tokens in order
    pub tokens: Vec<Token>,

    /// Sentences in order
    pub sentences: Vec<Sentence>,

    /// Base noun phrases in order
    pub noun_phrases: Vec<NounPhrase>,

    /// Non-overlapping entities in order
    pub entities: Vec<Entity>,
}

impl AnnotatedText {
    /// Entities carrying the given label, in source order.
    pub fn entities_with(&self, label: EntityLabel) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.label == label)
    }

    /// Entities contained in the given sentence.
    pub fn entities_in<'a>(&'a self, sentence: &'a Sentence) -> impl Iterator<Item = &'a Entity> {
        self.entities.iter().filter(move |e| e.within(sentence))
    }

    /// Whether any entity in the sentence carries the given label.
    pub fn sentence_has(&self, sentence: &Sentence, label: EntityLabel) -> bool {
        self.entities_in(sentence).any(|e| e.label == label)
    }

    /// Tokens covered by the given sentence.
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        &self.tokens[sentence.token_start..sentence.token_end]
    }
}
