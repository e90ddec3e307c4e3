//! Benchmarks for the annotation pipeline and field extraction.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cvsift::{annotate_text, dates, fields, Annotator, ResumeParser, RulePipeline};

fn sample_resume(paragraphs: usize) -> String {
    let block = "Summary: Built scalable systems for high-volume processing.\n\
                 Experience: Senior Software Engineer at Acme Corp (NYC) from January 2015 until March 2019.\n\
                 We develop services in Java and Python, deployed with Docker and Jenkins on AWS.\n\
                 Certified Kubernetes Administrator since June 2020.\n\
                 Education: BS Computer Science\n";
    block.repeat(paragraphs)
}

fn bench_annotate(c: &mut Criterion) {
    let pipeline = RulePipeline::new();
    let text = sample_resume(10);

    c.bench_function("annotate_10_paragraphs", |b| {
        b.iter(|| pipeline.annotate(black_box(&text)).unwrap());
    });
}

fn bench_extract_record(c: &mut Criterion) {
    let text = sample_resume(10);
    let annotated = annotate_text(&text).unwrap();

    c.bench_function("extract_record", |b| {
        b.iter(|| fields::extract_record(black_box(&text), black_box(&annotated)));
    });
}

fn bench_parse_text(c: &mut Criterion) {
    let parser = ResumeParser::new();
    let text = sample_resume(10);

    c.bench_function("parse_text_end_to_end", |b| {
        b.iter(|| parser.parse_text(black_box(&text)).unwrap());
    });
}

fn bench_date_parsing(c: &mut Criterion) {
    let mentions = [
        "January 2015",
        "March 3, 2015",
        "03/2016",
        "2016-03-07",
        "not a date",
    ];

    c.bench_function("parse_flexible", |b| {
        b.iter(|| {
            for mention in &mentions {
                black_box(dates::parse_flexible(black_box(mention)));
            }
        });
    });
}

fn bench_pipeline_construction(c: &mut Criterion) {
    c.bench_function("pipeline_construction", |b| {
        b.iter(RulePipeline::new);
    });
}

criterion_group!(
    benches,
    bench_annotate,
    bench_extract_record,
    bench_parse_text,
    bench_date_parsing,
    bench_pipeline_construction
);
criterion_main!(benches);
