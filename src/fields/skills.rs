//! Skills: noun phrases tied to action verbs, plus TECH entities.

use std::collections::BTreeSet;

use crate::model::{AnnotatedText, EntityLabel, PosTag};

const ACTION_LEMMAS: [&str; 3] = ["develop", "design", "build"];

/// Noun phrases whose text contains the surface form of any action verb in
/// the document (the scan is document-wide, not per sentence), unioned
/// with every TECH entity text. Sorted and deduplicated.
pub fn skills(annotated: &AnnotatedText) -> Vec<String> {
    let verb_surfaces: Vec<String> = annotated
        .tokens
        .iter()
        .filter(|t| t.pos == PosTag::Verb && ACTION_LEMMAS.contains(&t.lemma.as_str()))
        .map(|t| t.lower())
        .collect();

    let mut out = BTreeSet::new();

    for phrase in &annotated.noun_phrases {
        let lower = phrase.text.to_lowercase();
        if verb_surfaces.iter().any(|verb| lower.contains(verb.as_str())) {
            out.insert(phrase.text.clone());
        }
    }

    for entity in annotated.entities_with(EntityLabel::Tech) {
        out.insert(entity.text.clone());
    }

    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{Annotator, RulePipeline};

    fn extract(text: &str) -> Vec<String> {
        let annotated = RulePipeline::new().annotate(text).unwrap();
        skills(&annotated)
    }

    #[test]
    fn test_tech_entities_always_count() {
        assert_eq!(extract("Proficient in AWS and Java"), ["AWS", "Java"]);
    }

    #[test]
    fn test_phrase_containing_verb_surface() {
        // "development process" contains the surface of the verb "develop"
        let found = extract("We develop software. Our development process is mature.");
        assert!(found.contains(&"development process".to_string()));
    }

    #[test]
    fn test_phrase_without_verb_surface_excluded() {
        // "scalable systems" does not contain the surface "built"
        let found = extract("Built scalable systems.");
        assert!(!found.contains(&"scalable systems".to_string()));
    }

    #[test]
    fn test_no_duplicates() {
        let found = extract("Java and Java and more Java");
        assert_eq!(found, ["Java"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract("").is_empty());
    }
}
