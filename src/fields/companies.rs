//! Company names from " at " phrases, confirmed by ORG entities.

use std::collections::BTreeSet;

use crate::model::{AnnotatedText, EntityLabel};

/// Scan sentences in order, tracking the most recent " at " phrase.
///
/// A sentence containing " at " sets the current company to the text after
/// its last " at ", cut before any "(" and trimmed. A sentence containing
/// an ORG entity confirms the current company into the result; the current
/// company persists across sentences that lack " at ". Sorted and
/// deduplicated.
pub fn companies(annotated: &AnnotatedText) -> Vec<String> {
    let mut current = String::new();
    let mut out = BTreeSet::new();

    for sentence in &annotated.sentences {
        if sentence.text.contains(" at ") {
            let tail = sentence.text.rsplit(" at ").next().unwrap_or("");
            current = tail.split('(').next().unwrap_or("").trim().to_string();
        }
        if !current.is_empty() && annotated.sentence_has(sentence, EntityLabel::Org) {
            out.insert(current.clone());
        }
    }

    out.into_iter().collect()
}
