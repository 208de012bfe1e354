//! End-to-end tests: `.docx` fixtures on disk through extraction, aggregation and emission.

mod common;

use common::{read_part, DocxBuilder};
use resume_collate::{
    extract_file, parse_file, Collator, Error, Section, SectionProfile, UNKNOWN_ROLE,
};

fn experience() -> Section {
    Section::new("Experience")
}

#[test]
fn test_bold_role_header_with_duplicate_bullets() {
    let dir = tempfile::tempdir().unwrap();
    let path = DocxBuilder::new()
        .heading("Experience")
        .bold("Backend Engineer — Acme — Jan 2020 – Present")
        .para("• Built API")
        .para("• Built API")
        .write(dir.path(), "cv.docx");

    let extraction = extract_file(&path).unwrap();
    let roles = extraction.collation.roles(&experience()).unwrap();
    assert_eq!(roles.len(), 1);

    let bullets = &roles["Backend Engineer — Acme — Jan 2020 – Present"];
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].text, "Built API");
    assert_eq!(extraction.stats.duplicate_count, 1);
}

#[test]
fn test_bullet_before_role_header_is_unknown_role() {
    let dir = tempfile::tempdir().unwrap();
    let path = DocxBuilder::new()
        .para("EXPERIENCE")
        .para("• Shipped the first release")
        .para("Platform Engineer | Initech | 2019 - 2021")
        .list("Migrated services to Kubernetes")
        .write(dir.path(), "cv.docx");

    let extraction = extract_file(&path).unwrap();
    let c = &extraction.collation;
    assert_eq!(
        c.role(&experience(), UNKNOWN_ROLE).unwrap()[0].text,
        "Shipped the first release"
    );
    assert_eq!(
        c.role(&experience(), "Platform Engineer | Initech | 2019 - 2021")
            .unwrap()[0]
            .text,
        "Migrated services to Kubernetes"
    );
}

#[test]
fn test_first_document_wins_across_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let resume = |bullet: &str| {
        DocxBuilder::new()
            .heading("Work Experience")
            .para("Lead Engineer | Acme")
            .para(bullet)
    };
    resume("• Led cross-functional team").write(dir.path(), "a.docx");
    resume("• led Cross-Functional Team").write(dir.path(), "b.docx");

    let result = Collator::new().collate(dir.path()).unwrap();
    let bullets = result
        .report()
        .collation
        .role(&experience(), "Lead Engineer | Acme")
        .unwrap();

    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].text, "Led cross-functional team");
    assert_eq!(bullets[0].source.as_deref(), Some("a.docx"));
    assert_eq!(result.report().sources, vec!["a.docx", "b.docx"]);
}

#[test]
fn test_dedup_disabled_keeps_every_bullet() {
    let dir = tempfile::tempdir().unwrap();
    DocxBuilder::new()
        .heading("Skills")
        .para("• Rust")
        .para("• rust")
        .write(dir.path(), "cv.docx");

    let result = Collator::new()
        .with_deduplicate(false)
        .collate(dir.path())
        .unwrap();
    assert_eq!(
        result
            .report()
            .collation
            .section(&Section::new("Skills"))
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn test_unlisted_section_dropped_uncategorized_kept() {
    let dir = tempfile::tempdir().unwrap();
    DocxBuilder::new()
        .para("• Bullet before any heading")
        .para("HOBBIES")
        .para("• Chess")
        .para("Certs")
        .para("• AWS Solutions Architect")
        .write(dir.path(), "cv.docx");

    let result = Collator::new().collate(dir.path()).unwrap();
    let c = &result.report().collation;

    assert!(c.section(&Section::new("Hobbies")).is_none());
    assert_eq!(c.section(&Section::uncategorized()).unwrap().len(), 1);
    assert_eq!(
        c.section(&Section::new("Certifications")).unwrap()[0].text,
        "AWS Solutions Architect"
    );
    assert_eq!(result.stats().filtered_count, 1);
}

#[test]
fn test_table_content_follows_body() {
    let dir = tempfile::tempdir().unwrap();
    let path = DocxBuilder::new()
        .heading("Experience")
        .para("Data Engineer | Globex")
        .para("• Built pipelines")
        .heading("Education")
        .para("• BSc Computer Science")
        .table(&[&["• Led migration", "Notes"], &["1. Mentored interns", ""]])
        .write(dir.path(), "cv.docx");

    let extraction = extract_file(&path).unwrap();
    let education = extraction
        .collation
        .section(&Section::new("Education"))
        .unwrap();
    let texts: Vec<&str> = education.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["BSc Computer Science", "Led migration", "Mentored interns"]
    );
    assert_eq!(
        extraction
            .collation
            .role(&experience(), "Data Engineer | Globex")
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_core_properties_carried_to_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let path = DocxBuilder::new()
        .core_properties("Jane Doe - Resume", "Jane Doe", "2024-01-15T10:30:00Z")
        .heading("Skills")
        .para("• Rust")
        .write(dir.path(), "cv.docx");

    let extraction = extract_file(&path).unwrap();
    let metadata = &extraction.metadata;
    assert_eq!(metadata.source.as_deref(), Some("cv.docx"));
    assert_eq!(metadata.title.as_deref(), Some("Jane Doe - Resume"));
    assert_eq!(metadata.author.as_deref(), Some("Jane Doe"));
    assert_eq!(
        metadata.created.map(|d| d.to_rfc3339()),
        Some("2024-01-15T10:30:00+00:00".to_string())
    );
    assert!(metadata.modified.is_none());
}

#[test]
fn test_consecutive_role_headers_drop_empty_role() {
    let dir = tempfile::tempdir().unwrap();
    let path = DocxBuilder::new()
        .heading("Experience")
        .para("Senior Engineer | Acme | 2021 - Present")
        .para("Engineer | Acme | 2018 - 2021")
        .para("• Automated releases")
        .write(dir.path(), "cv.docx");

    let extraction = extract_file(&path).unwrap();
    let roles = extraction.collation.roles(&experience()).unwrap();
    assert_eq!(roles.len(), 1);
    assert!(roles.contains_key("Engineer | Acme | 2018 - 2021"));
}

#[test]
fn test_unreadable_document_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a-broken.docx"), b"not a zip archive").unwrap();
    DocxBuilder::new()
        .heading("Skills")
        .para("• Rust")
        .write(dir.path(), "b.docx");

    let mut skipped = Vec::new();
    let result = Collator::new()
        .collate_paths(
            &resume_collate::collect_docx_files(dir.path()).unwrap(),
            |outcome| {
                if let resume_collate::DocumentOutcome::Skipped { source, error } = outcome {
                    assert!(matches!(error, Error::DocumentRead { .. }));
                    skipped.push(source.to_string());
                }
            },
        )
        .unwrap();

    assert_eq!(skipped, vec!["a-broken.docx"]);
    assert_eq!(result.stats().documents_read, 1);
    assert_eq!(result.stats().documents_skipped, 1);
    assert!(!result.is_empty());
}

#[test]
fn test_nested_folders_are_searched() {
    let dir = tempfile::tempdir().unwrap();
    DocxBuilder::new()
        .heading("Summary")
        .para("• Pragmatic engineer")
        .write(dir.path(), "2024/submitted/cv.DOCX");

    let result = Collator::new().collate(dir.path()).unwrap();
    assert_eq!(result.stats().documents_found, 1);
    assert_eq!(
        result.report().collation.section(&Section::new("Summary")).unwrap()[0]
            .source
            .as_deref(),
        Some("cv.DOCX")
    );
}

#[cfg(unix)]
#[test]
fn test_symlinked_folder_read_once() {
    let dir = tempfile::tempdir().unwrap();
    DocxBuilder::new()
        .heading("Skills")
        .para("• Rust")
        .write(dir.path(), "a.docx");
    std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

    let result = Collator::new().collate(dir.path()).unwrap();
    assert_eq!(result.stats().documents_found, 1);
    assert_eq!(result.stats().documents_read, 1);
    assert_eq!(result.report().sources, vec!["a.docx"]);
}

#[test]
fn test_extended_profile_families() {
    let dir = tempfile::tempdir().unwrap();
    DocxBuilder::new()
        .heading("Professional Experience")
        .para("Architect | Initech")
        .para("• Designed the platform")
        .heading("Additional Skills")
        .para("• Public speaking")
        .heading("Technical Skills")
        .para("• Kubernetes")
        .write(dir.path(), "cv.docx");

    let classic = Collator::new().collate(dir.path()).unwrap();
    let extended = Collator::new()
        .with_profile(SectionProfile::Extended)
        .collate(dir.path())
        .unwrap();

    let families: Vec<&str> = extended
        .report()
        .ordered_families()
        .iter()
        .map(|(f, _)| f.as_str())
        .collect();
    assert_eq!(families, vec!["Professional Experience"]);

    let sections: Vec<&str> = extended
        .report()
        .ordered_sections()
        .iter()
        .map(|(s, _)| s.as_str())
        .collect();
    assert_eq!(
        sections,
        vec!["Technical Skills", "Additional Skills & Qualifications"]
    );

    // Classic folds Technical Skills into Skills and has no Professional Experience family.
    assert!(classic.report().collation.experience.is_empty());
    assert!(classic
        .report()
        .collation
        .section(&Section::new("Skills"))
        .is_some());
}

#[test]
fn test_run_writes_docx_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("resumes");
    DocxBuilder::new()
        .heading("Experience")
        .para("zeta Role | Beta Co")
        .para("• Z bullet")
        .para("Alpha Role | Acme")
        .para("• A bullet")
        .heading("Skills")
        .para("• Rust & Go")
        .write(&input, "cv.docx");

    let output = dir.path().join("out").join("bullets.docx");
    Collator::new().run(&input, &output).unwrap();

    let doc = parse_file(&output).unwrap();
    let lines: Vec<(String, String)> = doc
        .paragraphs
        .iter()
        .map(|p| (p.style_name().to_string(), p.plain_text()))
        .collect();

    assert_eq!(
        lines[0],
        (
            "Title".to_string(),
            "Collated Bullets from Resumes (Role-separated Experience)".to_string()
        )
    );
    let texts: Vec<&str> = lines.iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(
        &texts[1..],
        &[
            "Experience",
            "Alpha Role | Acme",
            "A bullet",
            "zeta Role | Beta Co",
            "Z bullet",
            "Skills",
            "Rust & Go",
        ]
    );
    assert_eq!(lines[2].0, "heading 2");
    assert_eq!(lines[3].0, "List Bullet");
}

#[test]
fn test_run_writes_xlsx() {
    let dir = tempfile::tempdir().unwrap();
    DocxBuilder::new()
        .heading("Experience")
        .para("Engineer | Acme")
        .para("• Built API")
        .heading("Core Competencies")
        .para("• Leadership")
        .write(dir.path(), "cv.docx");

    let output = dir.path().join("bullets.xlsx");
    Collator::new().run(dir.path(), &output).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    let workbook = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Experience (by Role)""#));
    assert!(workbook.contains(r#"name="Core Competencies""#));

    let roles = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(roles.contains(">Role<"));
    assert!(roles.contains(">Engineer | Acme<"));
    assert!(roles.contains(">cv.docx<"));
}

#[test]
fn test_empty_result_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    DocxBuilder::new()
        .heading("Experience")
        .para("Just a sentence about the weather.")
        .write(dir.path(), "cv.docx");

    let output = dir.path().join("bullets.docx");
    let err = Collator::new().run(dir.path(), &output).err().unwrap();
    assert!(matches!(err, Error::EmptyResult));
    assert!(err.is_informational());
    assert!(!output.exists());
}
