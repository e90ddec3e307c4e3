//! Data model for annotations and output records.

mod annotated;
mod record;

pub use annotated::{
    AnnotatedText, DepRole, Entity, EntityLabel, NounPhrase, PosTag, Sentence, Token,
};
pub use record::{JsonFormat, ResumeRecord};
