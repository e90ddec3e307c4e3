//! Field extractors: pure functions from the raw text and its annotations
//! to the fields of a [`ResumeRecord`].
//!
//! A field that finds nothing yields an empty value, never an error.

mod companies;
mod entities;
mod experience;
mod sections;
mod skills;

pub use companies::companies;
pub use entities::{certifications, positions, tools};
pub use experience::total_experience;
pub use sections::{education, summary};
pub use skills::skills;

use crate::model::{AnnotatedText, ResumeRecord};

/// Run every field extractor and assemble the record for one document.
pub fn extract_record(text: &str, annotated: &AnnotatedText) -> ResumeRecord {
    ResumeRecord {
        summary: summary(text),
        total_experience: total_experience(annotated),
        skills: skills::skills(annotated),
        companies: companies(annotated),
        positions: positions(annotated),
        education: education(text),
        certifications: certifications(annotated),
        tools: tools(annotated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{Annotator, RulePipeline};

    #[test]
    fn test_extract_record_assembles_all_fields() {
        let text = "Summary: Built scalable systems.\n\
                    Experience: Worked with AWS and Docker at Acme Corp (NYC) from January 2015 until March 2019.\n\
                    Education: BS Computer Science";
        let annotated = RulePipeline::new().annotate(text).unwrap();
        let record = extract_record(text, &annotated);

        assert_eq!(record.summary, "Built scalable systems.");
        assert_eq!(record.total_experience, 4);
        assert!(record.skills.contains(&"AWS".to_string()));
        assert_eq!(record.companies, ["Acme Corp"]);
        assert_eq!(record.education, ["BS Computer Science"]);
        assert_eq!(record.tools, ["Docker"]);
    }
}
