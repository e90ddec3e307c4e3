//! End-to-end pipeline tests: PDF in, record out.

mod common;

use cvsift::{annotate_text, EntityLabel, JsonFormat, NormalizeOptions, Normalizer, ResumeParser};

use common::write_pdf;

const RESUME_LINES: &[&str] = &[
    "Summary: Built scalable systems.",
    "Experience: Java developer at Acme Corp (New York) from January 2015 until March 2019.",
    "Education: BS Computer Science",
    "Skills: AWS, Docker and Jenkins",
];

#[test]
fn test_parse_pdf_to_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(dir.path(), "resume.pdf", RESUME_LINES);

    let record = ResumeParser::new().parse_file(&path).unwrap();

    assert_eq!(record.summary, "Built scalable systems.");
    assert_eq!(record.total_experience, 4);
    assert!(record.skills.contains(&"Java".to_string()));
    assert!(record.skills.contains(&"AWS".to_string()));
    assert_eq!(record.companies, ["Acme Corp"]);
    assert_eq!(record.education, ["BS Computer Science"]);
    assert_eq!(record.tools, ["Docker", "Jenkins"]);
}

#[test]
fn test_no_duplicates_in_any_list_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(
        dir.path(),
        "resume.pdf",
        &[
            "Java and Java at Acme Corp. Docker and Docker.",
            "Java again at Acme Corp.",
        ],
    );

    let record = ResumeParser::new().parse_file(&path).unwrap();
    for field in [
        &record.skills,
        &record.companies,
        &record.positions,
        &record.education,
        &record.certifications,
        &record.tools,
    ] {
        let mut sorted = field.clone();
        sorted.dedup();
        assert_eq!(&sorted, field, "duplicate entries in {:?}", field);
    }
}

#[test]
fn test_set_fields_are_sorted() {
    let annotated = annotate_text("Kubernetes before Docker, Python before Java and AWS").unwrap();
    assert_eq!(cvsift::fields::tools(&annotated), ["Docker", "Kubernetes"]);
    assert_eq!(
        cvsift::fields::skills(&annotated),
        ["AWS", "Java", "Python"]
    );
}

#[test]
fn test_ligature_normalization_feeds_certification_rule() {
    // "Certiﬁed" with U+FB01; the raw form never matches the rule
    let raw = "Certi\u{FB01}ed Kubernetes Administrator";
    assert!(annotate_text(raw)
        .unwrap()
        .entities_with(EntityLabel::Certification)
        .next()
        .is_none());

    let normalized = Normalizer::new(NormalizeOptions::default()).process(raw);
    let annotated = annotate_text(&normalized).unwrap();
    let certs: Vec<_> = annotated
        .entities_with(EntityLabel::Certification)
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(certs, ["Certified Kubernetes"]);
}

#[test]
fn test_record_serializes_pretty_and_compact() {
    let record = ResumeParser::new()
        .parse_text("Skills: Docker")
        .unwrap();

    let pretty = record.to_json(JsonFormat::Pretty).unwrap();
    let compact = record.to_json(JsonFormat::Compact).unwrap();
    assert!(pretty.contains('\n'));
    assert!(!compact.contains('\n'));
    assert!(pretty.contains("\"tools\""));
}

#[test]
fn test_corrupt_body_is_an_error() {
    // Garbage that passes the magic check but not lopdf's parser
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"%PDF-1.4\nthis is not a real pdf body").unwrap();

    assert!(ResumeParser::new().parse_file(&path).is_err());
}
