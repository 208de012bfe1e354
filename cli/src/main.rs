//! resume-collate CLI - collate resume bullets into one role-separated report

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use resume_collate::{
    extract_file_with_options, Collator, DocumentOutcome, Error, ExtractOptions, JsonFormat,
    ParseOptions, SectionCatalog, SectionProfile,
};

const DEFAULT_OUTPUT: &str = "Collated Bullets - Resumes.docx";

#[derive(Parser)]
#[command(name = "resume-collate")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Collate resume bullets from .docx files into DOCX, XLSX, Markdown, or JSON",
    long_about = None
)]
struct Cli {
    /// Folder searched recursively for .docx resumes
    #[arg(value_name = "INPUT_FOLDER")]
    input: Option<PathBuf>,

    /// Output file; the extension picks the format (.docx, .xlsx, .md, .json)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    flags: CollateFlags,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct CollateFlags {
    /// Section profile
    #[arg(long, value_enum, env = "RESUME_COLLATE_PROFILE", default_value = "classic")]
    profile: Profile,

    /// Keep duplicate bullets
    #[arg(long)]
    no_dedup: bool,

    /// Do not tag bullets with their source file
    #[arg(long)]
    no_source: bool,

    /// Skip a document on the first malformed XML part
    #[arg(long)]
    strict: bool,

    /// Title of document-style output
    #[arg(long)]
    title: Option<String>,

    /// Append source file names to bullets in document-style output
    #[arg(long)]
    annotate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Collate every .docx under a folder into one report
    Collate {
        /// Folder searched recursively for .docx resumes
        #[arg(value_name = "INPUT_FOLDER")]
        input: PathBuf,

        /// Output file; the extension picks the format
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        flags: CollateFlags,
    },

    /// Show what one resume contributes: sections, roles and bullets
    Inspect {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Section profile
        #[arg(long, value_enum, env = "RESUME_COLLATE_PROFILE", default_value = "classic")]
        profile: Profile,

        /// Print the bullets, not only counts
        #[arg(short, long)]
        bullets: bool,

        /// Print the extraction as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the sections, synonyms and heading patterns of a profile
    Sections {
        /// Section profile
        #[arg(long, value_enum, env = "RESUME_COLLATE_PROFILE", default_value = "classic")]
        profile: Profile,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Profile {
    /// Experience, Core Competencies, Skills, Education, Certifications, Summary
    Classic,
    /// Classic plus Professional Profile, Technical Skills, Professional Experience,
    /// Additional Skills & Qualifications
    Extended,
}

impl From<Profile> for SectionProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Classic => SectionProfile::Classic,
            Profile::Extended => SectionProfile::Extended,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Collate {
            input,
            output,
            flags,
        }) => cmd_collate(&input, output.as_deref(), &flags),
        Some(Commands::Inspect {
            input,
            profile,
            bullets,
            json,
        }) => cmd_inspect(&input, profile, bullets, json),
        Some(Commands::Sections { profile }) => {
            cmd_sections(profile);
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_collate(&input, cli.output.as_deref(), &cli.flags)
            } else {
                println!(
                    "{}",
                    "Usage: resume-collate <INPUT_FOLDER> [OUTPUT]".yellow()
                );
                println!("       resume-collate --help for more information");
                Ok(())
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Print an error; diagnostics about the input exit cleanly.
fn report_error(error: &Error) -> ExitCode {
    match error {
        Error::InputNotFound(_) | Error::NoDocuments(_) => {
            eprintln!("{}: {}", "ERROR".red().bold(), error);
            ExitCode::SUCCESS
        }
        Error::EmptyResult => {
            println!("{}: No bullets detected.", "INFO".cyan().bold());
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("{}: {}", "ERROR".red().bold(), error);
            ExitCode::FAILURE
        }
    }
}

fn build_collator(flags: &CollateFlags) -> Collator {
    let mut collator = Collator::new()
        .with_profile(flags.profile.into())
        .with_deduplicate(!flags.no_dedup)
        .with_provenance(!flags.no_source);
    if flags.strict {
        collator = collator.strict();
    }

    let mut render = resume_collate::RenderOptions::new().with_source_annotations(flags.annotate);
    if let Some(ref title) = flags.title {
        render = render.with_title(title.clone());
    }
    collator.with_render_options(render)
}

/// A bar that stays hidden until the document count is known.
fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden());
    let style = ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .map(|s| s.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

fn cmd_collate(input: &Path, output: Option<&Path>, flags: &CollateFlags) -> resume_collate::Result<()> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let collator = build_collator(flags);
    log::debug!(
        "Collating {} into {} (profile: {})",
        input.display(),
        output.display(),
        SectionProfile::from(flags.profile)
    );

    let bar = progress_bar();
    let result = collator.run_with_progress(
        input,
        &output,
        |count| {
            bar.set_length(count as u64);
            bar.set_draw_target(ProgressDrawTarget::stderr());
            bar.set_message("Reading resumes...");
        },
        |outcome| match outcome {
            DocumentOutcome::Merged { source, bullets } => {
                bar.set_message(format!("{} ({} bullets)", source, bullets));
                bar.inc(1);
            }
            DocumentOutcome::Skipped { source, error } => {
                bar.println(format!(
                    "{}: Skipping '{}' due to read error: {}",
                    "WARN".yellow().bold(),
                    source,
                    error
                ));
                bar.inc(1);
            }
        },
    );
    bar.finish_and_clear();

    let result = result?;
    let stats = result.stats();

    println!("{} Wrote: {}", "Done.".green().bold(), output.display());
    println!(
        "  {} {} bullets in {} roles",
        "├─".dimmed(),
        result.report().collation.bullet_count(),
        result.report().collation.role_count()
    );
    println!(
        "  {} {} of {} documents read ({} skipped)",
        "├─".dimmed(),
        stats.documents_read,
        stats.documents_found,
        stats.documents_skipped
    );
    println!(
        "  {} {} duplicates removed, {} bullets in unlisted sections dropped",
        "└─".dimmed(),
        stats.duplicate_count,
        stats.filtered_count
    );

    Ok(())
}

fn cmd_inspect(input: &Path, profile: Profile, bullets: bool, json: bool) -> resume_collate::Result<()> {
    // Lenient, so a damaged resume still shows what could be read
    let options = ExtractOptions::new()
        .with_profile(profile.into())
        .with_parse_options(ParseOptions::new().lenient());
    let extraction = extract_file_with_options(input, options)?;

    if json {
        let text = extraction_json(&extraction)?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", "Resume Extraction".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Profile".bold(), SectionProfile::from(profile));

    let metadata = &extraction.metadata;
    if let Some(ref title) = metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(created) = metadata.created {
        println!("{}: {}", "Created".bold(), created.format("%Y-%m-%d %H:%M"));
    }
    if let Some(modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified.format("%Y-%m-%d %H:%M"));
    }

    for (family, roles) in &extraction.collation.experience {
        println!();
        println!("{}", family.to_string().green().bold());
        for (role, items) in roles {
            println!("  {} ({})", role.bold(), items.len());
            if bullets {
                for item in items {
                    println!("    - {}", item.text);
                }
            }
        }
    }

    for (section, items) in &extraction.collation.sections {
        println!();
        println!("{} ({})", section.to_string().green().bold(), items.len());
        if bullets {
            for item in items {
                println!("  - {}", item.text);
            }
        }
    }

    let stats = &extraction.stats;
    println!();
    println!("{}", "Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Role headers".bold(), stats.role_header_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Duplicates".bold(), stats.duplicate_count);

    Ok(())
}

fn extraction_json(extraction: &resume_collate::DocumentExtraction) -> resume_collate::Result<String> {
    let report = resume_collate::Report {
        collation: extraction.collation.clone(),
        sources: extraction.source.iter().cloned().collect(),
        stats: extraction.stats.clone(),
        ..Default::default()
    };
    resume_collate::render::to_json(&report, JsonFormat::Pretty)
}

fn cmd_sections(profile: Profile) {
    let catalog = SectionCatalog::for_profile(profile.into());

    println!(
        "{} {}",
        "Section profile:".cyan().bold(),
        SectionProfile::from(profile)
    );
    println!("{}", "─".repeat(40).dimmed());

    println!("{}", "Allowed sections".bold());
    for section in &catalog.sections {
        let marker = if catalog.is_experience(&section.as_str().into()) {
            " (by role)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {} {}{}", "•".dimmed(), section, marker);
    }

    println!("{}", "Synonyms".bold());
    for synonym in &catalog.synonyms {
        println!("  {} {} → {}", "•".dimmed(), synonym.alias, synonym.section);
    }

    println!("{}", "Emission order".bold());
    for (index, section) in catalog.section_order().iter().enumerate() {
        println!("  {}. {}", index + 1, section);
    }

    println!("{}", "Heading patterns".bold());
    for pattern in &catalog.heading_patterns {
        println!("  {} {}", "•".dimmed(), pattern.dimmed());
    }
}

fn cmd_version() {
    println!(
        "{} {}",
        "resume-collate".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Resume bullet collation tool");
    println!();
    println!("Outputs: .docx, .xlsx, .md, .json");
    println!("License: MIT");
}
