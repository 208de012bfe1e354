//! Benchmarks for resume extraction and report rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic resumes built in memory.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resume_collate::classify::clean;
use resume_collate::render::RenderOptions;
use resume_collate::{CorpusAggregator, Document, DocumentExtractor, ExtractOptions, Paragraph};

/// Creates a resume with the given number of roles, five bullets each.
fn create_resume(name: &str, roles: usize) -> Document {
    let mut doc = Document::named(name);
    doc.add_paragraph(Paragraph::with_text("SUMMARY"));
    doc.add_paragraph(Paragraph::with_text("• Engineer focused on reliable systems"));
    doc.add_paragraph(Paragraph::with_text("Experience").styled("heading 1"));

    for r in 0..roles {
        doc.add_paragraph(Paragraph::bold(format!(
            "Engineer {} | Company {} | 20{:02} - 20{:02}",
            r,
            r,
            r % 90,
            (r + 2) % 90
        )));
        for b in 0..5 {
            doc.add_paragraph(Paragraph::with_text(format!(
                "• Delivered project {} for role {}, cutting latency by {}%",
                b, r, b * 10
            )));
        }
    }

    doc.add_paragraph(Paragraph::with_text("Skills:"));
    for s in ["Rust", "SQL", "Kubernetes", "Terraform"] {
        doc.add_paragraph(Paragraph::with_text(format!("- {}", s)));
    }
    doc
}

/// Benchmark line normalization.
fn bench_clean(c: &mut Criterion) {
    c.bench_function("clean_bullet_line", |b| {
        b.iter(|| clean(black_box("  3)   Optimized   database   queries by 40%  ")));
    });
}

/// Benchmark single-document extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let extractor = DocumentExtractor::new(ExtractOptions::default()).unwrap();
    let mut group = c.benchmark_group("extraction");

    for roles in [1, 10, 50].iter() {
        let doc = create_resume("cv.docx", *roles);

        group.bench_function(format!("{}_roles", roles), |b| {
            b.iter(|| extractor.extract(black_box(&doc)));
        });
    }

    group.finish();
}

/// Benchmark corpus aggregation and rendering.
fn bench_corpus(c: &mut Criterion) {
    let aggregator = CorpusAggregator::new(ExtractOptions::default()).unwrap();
    let docs: Vec<Document> = (0..20)
        .map(|i| create_resume(&format!("cv-{}.docx", i), 5))
        .collect();

    c.bench_function("aggregate_20_documents", |b| {
        b.iter(|| aggregator.aggregate_documents(black_box(&docs)));
    });

    let report = aggregator.aggregate_documents(&docs);
    let options = RenderOptions::default();

    c.bench_function("render_docx", |b| {
        b.iter(|| resume_collate::render::to_docx(black_box(&report), &options).unwrap());
    });

    c.bench_function("render_xlsx", |b| {
        b.iter(|| resume_collate::render::to_xlsx(black_box(&report), &options).unwrap());
    });
}

criterion_group!(benches, bench_clean, bench_extraction, bench_corpus);
criterion_main!(benches);
