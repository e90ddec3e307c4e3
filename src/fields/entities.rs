//! Fields read directly off entity labels.

use std::collections::BTreeSet;

use crate::model::{AnnotatedText, DepRole, EntityLabel};

/// TITLE entity texts, plus any entity serving as a copula attribute whose
/// text mentions "experience". Sorted and deduplicated.
pub fn positions(annotated: &AnnotatedText) -> Vec<String> {
    let mut out = BTreeSet::new();
    for entity in &annotated.entities {
        let attribute_experience = entity.root_dep == DepRole::Attribute
            && entity.text.to_lowercase().contains("experience");
        if entity.label == EntityLabel::Title || attribute_experience {
            out.insert(entity.text.clone());
        }
    }
    out.into_iter().collect()
}

/// CERTIFICATION entity texts, sorted and deduplicated.
pub fn certifications(annotated: &AnnotatedText) -> Vec<String> {
    label_set(annotated, EntityLabel::Certification)
}

/// TOOL entity texts, sorted and deduplicated.
pub fn tools(annotated: &AnnotatedText) -> Vec<String> {
    label_set(annotated, EntityLabel::Tool)
}

fn label_set(annotated: &AnnotatedText, label: EntityLabel) -> Vec<String> {
    let out: BTreeSet<String> = annotated
        .entities_with(label)
        .map(|e| e.text.clone())
        .collect();
    out.into_iter().collect()
}
