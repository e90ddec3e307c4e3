//! cvsift CLI - structured field extraction from PDF résumés

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cvsift::{
    BatchRunner, ExtractOptions, JsonFormat, PdfExtractor, ResumeParser, SiftConfig,
};

#[derive(Parser)]
#[command(name = "cvsift")]
#[command(version)]
#[command(about = "Extract structured fields from PDF résumés to JSON", long_about = None)]
struct Cli {
    /// Input PDF file (shortcut for `parse FILE`)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a directory of résumés into JSON records
    Run {
        /// Directory of input PDF files
        #[arg(short, long, value_name = "DIR")]
        input: Option<PathBuf>,

        /// Directory for the output JSON records
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Directory for the daily report log (default: output directory)
        #[arg(long, value_name = "DIR")]
        report: Option<PathBuf>,

        /// JSON configuration file (paths and entity rules)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Parse a single résumé and print or save the record
    Parse {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract the plain text of a résumé
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip text normalization
        #[arg(long)]
        raw: bool,
    },

    /// Dump the annotation pipeline output as JSON
    Annotate {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document and annotation information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run {
            input,
            output,
            report,
            config,
            compact,
        }) => cmd_run(input, output, report, config, compact),
        Some(Commands::Parse {
            input,
            output,
            compact,
        }) => cmd_parse(&input, output.as_deref(), compact),
        Some(Commands::Text { input, output, raw }) => cmd_text(&input, output.as_deref(), raw),
        Some(Commands::Annotate { input, compact }) => cmd_annotate(&input, compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            // Default behavior: parse if input is provided
            if let Some(input) = cli.input {
                cmd_parse(&input, None, false)
            } else {
                println!("{}", "Usage: cvsift <FILE>".yellow());
                println!("       cvsift run --input <DIR> --output <DIR>");
                println!("       cvsift --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
    config: Option<PathBuf>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Defaults, overridden by the config file, overridden by flags
    let mut config = match config {
        Some(path) => SiftConfig::load(path)?,
        None => SiftConfig::default(),
    };
    if let Some(dir) = input {
        config.input_dir = dir;
    }
    if let Some(dir) = output {
        config.output_dir = dir;
    }
    if let Some(dir) = report {
        config.report_dir = Some(dir);
    }

    let parser = match &config.rules {
        Some(rules) => ResumeParser::with_rules(rules)?,
        None => ResumeParser::new(),
    };

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let runner = BatchRunner::new(parser)
        .with_format(format)
        .with_report_dir(config.report_dir().to_path_buf());

    let files = BatchRunner::collect_inputs(&config.input_dir)?;
    println!(
        "{} {} file(s) in {}",
        "Found".green().bold(),
        files.len(),
        config.input_dir.display()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let summary = runner.run_with_progress(&config.input_dir, &config.output_dir, |path| {
        if let Some(name) = path.file_name() {
            pb.set_message(name.to_string_lossy().into_owned());
        }
        pb.inc(1);
    })?;
    pb.finish_with_message("Done");

    println!();
    println!(
        "{} {} processed, {} failed",
        "Summary:".green().bold(),
        summary.processed,
        if summary.failed > 0 {
            summary.failed.to_string().red().to_string()
        } else {
            summary.failed.to_string()
        }
    );
    println!("  {} {}", "Records:".dimmed(), summary.output_dir.display());
    println!(
        "  {} {}",
        "Report: ".dimmed(),
        config.report_dir().display()
    );

    Ok(())
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = ResumeParser::new();
    let record = parser.parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = record.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = if raw {
        ExtractOptions::new().raw()
    } else {
        ExtractOptions::default()
    };
    let extractor = PdfExtractor::open_with_options(input, options)?;
    let text = extractor.extract()?.text();

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_annotate(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let parser = ResumeParser::new();
    let document = parser.extract_document(input)?;
    let annotated = parser.annotate(&document.text())?;

    let json = if compact {
        serde_json::to_string(&annotated)?
    } else {
        serde_json::to_string_pretty(&annotated)?
    };
    println!("{}", json);

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = cvsift::detect_format_from_path(input)?;
    let extractor = PdfExtractor::open(input)?;
    let document = extractor.extract()?;
    let text = document.text();

    let parser = ResumeParser::new();
    let annotated = parser.annotate(&text)?;

    println!("{}", "Document".green().bold());
    println!("  {} {}", "Format:".dimmed(), format);
    println!("  {} {}", "Pages:".dimmed(), document.page_count());
    println!("  {} {}", "Characters:".dimmed(), text.len());

    println!("{}", "Annotations".green().bold());
    println!("  {} {}", "Tokens:".dimmed(), annotated.tokens.len());
    println!("  {} {}", "Sentences:".dimmed(), annotated.sentences.len());
    println!(
        "  {} {}",
        "Noun phrases:".dimmed(),
        annotated.noun_phrases.len()
    );
    println!("  {} {}", "Entities:".dimmed(), annotated.entities.len());

    Ok(())
}
