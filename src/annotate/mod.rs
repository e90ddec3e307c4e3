//! Annotation pipeline: tokens, sentences, noun phrases, and entities.

mod chunker;
mod ner;
mod pipeline;
mod ruler;
mod tagger;
mod tokenizer;

pub use pipeline::{Annotator, RulePipeline};
pub use ruler::{EntityRule, EntityRuler, RulerMatch, TokenPattern};
