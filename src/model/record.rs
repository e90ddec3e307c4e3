//! The structured output artifact for one résumé.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Structured fields extracted from one résumé.
///
/// Created once per document and written as `<stem>.json`. Field order in
/// the serialized output follows the declaration order below. Every
/// list-valued field is deduplicated; the set-derived fields (skills,
/// companies, positions, certifications, tools) are sorted, while education
/// keeps its document line order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Text of the summary/objective section, or empty
    pub summary: String,

    /// Total experience in whole years derived from date spans
    pub total_experience: i64,

    /// Skill phrases and TECH entity texts
    pub skills: Vec<String>,

    /// Company names
    pub companies: Vec<String>,

    /// Job titles and experience attributes
    pub positions: Vec<String>,

    /// Lines of the education section
    pub education: Vec<String>,

    /// CERTIFICATION entity texts
    pub certifications: Vec<String>,

    /// TOOL entity texts
    pub tools: Vec<String>,
}

impl ResumeRecord {
    /// Serialize the record to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let json = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self)?,
            JsonFormat::Compact => serde_json::to_string(self)?,
        };
        Ok(json)
    }

    /// Whether no field extracted anything.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.total_experience == 0
            && self.skills.is_empty()
            && self.companies.is_empty()
            && self.positions.is_empty()
            && self.education.is_empty()
            && self.certifications.is_empty()
            && self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_pretty() {
        let record = ResumeRecord {
            summary: "Built scalable systems.".to_string(),
            skills: vec!["AWS".to_string()],
            ..Default::default()
        };

        let json = record.to_json(JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"summary\""));
        assert!(json.contains("Built scalable systems."));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let record = ResumeRecord::default();
        let json = record.to_json(JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_field_order() {
        // Serialized field order is the original artifact order.
        let json = ResumeRecord::default().to_json(JsonFormat::Compact).unwrap();
        let summary = json.find("\"summary\"").unwrap();
        let experience = json.find("\"total_experience\"").unwrap();
        let tools = json.find("\"tools\"").unwrap();
        assert!(summary < experience);
        assert!(experience < tools);
    }

    #[test]
    fn test_is_empty() {
        assert!(ResumeRecord::default().is_empty());

        let record = ResumeRecord {
            total_experience: 3,
            ..Default::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let record = ResumeRecord {
            summary: "Engineer.".to_string(),
            total_experience: 5,
            skills: vec!["AWS".to_string(), "Java".to_string()],
            education: vec!["BS Computer Science".to_string()],
            ..Default::default()
        };

        let json = record.to_json(JsonFormat::Compact).unwrap();
        let back: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
