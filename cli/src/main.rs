//! docmark CLI - DOCX to Markdown and PDF to text extraction tool

use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docmark::{
    convert_file, default_output_path, BackendPreference, ConvertOptions, ConvertResult,
    ErrorKind, Manifest, OutputTarget, PdfBackendKind,
};

type CliResult<T> = Result<T, Box<dyn StdError>>;

#[derive(Parser)]
#[command(name = "docmark")]
#[command(version)]
#[command(about = "Extract DOCX content to Markdown and PDF content to text", long_about = None)]
struct Cli {
    /// Input DOCX or PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (defaults to the input with a .md extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    pdf: PdfArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Clone, Copy)]
struct PdfArgs {
    /// PDF text-extraction backend
    #[arg(long, value_enum, default_value = "auto", global = true)]
    backend: BackendChoice,

    /// Treat unreadable PDF pages as empty instead of failing
    #[arg(long, global = true)]
    lenient: bool,
}

impl PdfArgs {
    fn convert_options(&self) -> ConvertOptions {
        let options = ConvertOptions::new().with_pdf_backend(self.backend.into());
        if self.lenient {
            options.lenient()
        } else {
            options
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a DOCX file to Markdown
    Docx {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to the input with a .md extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a PDF file to plain text
    Pdf {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Run every conversion listed in a JSON manifest
    Batch {
        /// Manifest file
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
    },

    /// List the PDF backends compiled into this binary
    Backends,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BackendChoice {
    /// First available backend
    Auto,
    /// The pdf-extract crate
    PdfExtract,
    /// lopdf's content-stream text reader
    Lopdf,
}

impl From<BackendChoice> for BackendPreference {
    fn from(choice: BackendChoice) -> Self {
        match choice {
            BackendChoice::Auto => BackendPreference::Auto,
            BackendChoice::PdfExtract => PdfBackendKind::PdfExtract.into(),
            BackendChoice::Lopdf => PdfBackendKind::Lopdf.into(),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.pdf.convert_options();

    let result = match cli.command {
        Some(Commands::Docx { input, output }) => {
            let target = OutputTarget::file(output.unwrap_or_else(|| default_output_path(&input)));
            cmd_convert(&input, &target, &options)
        }
        Some(Commands::Pdf { input, output }) => {
            let target = output.map(OutputTarget::file).unwrap_or(OutputTarget::Stdout);
            cmd_convert(&input, &target, &options)
        }
        Some(Commands::Batch { manifest }) => cmd_batch(&manifest, &options),
        Some(Commands::Backends) => {
            cmd_backends();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                let output = cli.output.unwrap_or_else(|| default_output_path(&input));
                cmd_convert(&input, &OutputTarget::file(output), &options)
            } else {
                println!("{}", "Usage: docmark <FILE> [OUTPUT]".yellow());
                println!("       docmark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        report_failure(e.as_ref());
        std::process::exit(1);
    }
}

/// Print a failure. A missing backend is reported on stdout.
fn report_failure(e: &(dyn StdError + 'static)) {
    match e.downcast_ref::<docmark::Error>() {
        Some(err) if err.kind() == ErrorKind::MissingDependency => {
            println!("{}: {}", "Error".red().bold(), err);
            println!(
                "Rebuild docmark with one of the PDF backend features: {}",
                PdfBackendKind::PRIORITY
                    .iter()
                    .map(|k| k.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Some(err) => eprintln!("{}: {}", "Error".red().bold(), err.report()),
        None => eprintln!("{}: {}", "Error".red().bold(), e),
    }
}

fn cmd_convert(input: &Path, output: &OutputTarget, options: &ConvertOptions) -> CliResult<()> {
    log::info!("Extracting text from: {}", input.display());
    let result = convert_file(input, output, options)?;

    if let OutputTarget::File(path) = output {
        print_summary(path, &result);
    }
    Ok(())
}

fn print_summary(path: &Path, result: &ConvertResult) {
    println!("{} {}", "Successfully created".green(), path.display());
    let stats = &result.stats;
    match result.format {
        docmark::SourceFormat::Docx => println!(
            "  {} {} paragraphs, {} headings, {} tables",
            "└─".dimmed(),
            stats.paragraph_count,
            stats.heading_count,
            stats.table_count
        ),
        docmark::SourceFormat::Pdf => println!(
            "  {} {} of {} pages with text",
            "└─".dimmed(),
            stats.pages_with_text,
            stats.page_count
        ),
    }
}

fn cmd_batch(manifest_path: &Path, options: &ConvertOptions) -> CliResult<()> {
    let manifest = Manifest::load(manifest_path)?;
    let jobs = manifest.resolved_jobs();

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut failures = Vec::new();
    for job in &jobs {
        pb.set_message(job.input.display().to_string());
        let target = OutputTarget::file(&job.output);
        match convert_file(&job.input, &target, options) {
            Ok(_) => {
                pb.println(format!("{} {}", "Created".green(), job.output.display()));
            }
            Err(e) if e.kind() == ErrorKind::MissingDependency => {
                pb.abandon();
                return Err(e.into());
            }
            Err(e) => {
                pb.println(format!(
                    "{} {}: {}",
                    "Failed".red(),
                    job.input.display(),
                    e.report()
                ));
                failures.push(job.input.clone());
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    let succeeded = jobs.len() - failures.len();
    println!(
        "\n{} {} of {} jobs succeeded",
        "Batch complete:".bold(),
        succeeded,
        jobs.len()
    );

    if failures.is_empty() {
        Ok(())
    } else {
        for path in &failures {
            println!("  {} {}", "✗".red(), path.display());
        }
        Err(format!("{} job(s) failed", failures.len()).into())
    }
}

fn cmd_backends() {
    println!("{}", "PDF backends".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for kind in PdfBackendKind::PRIORITY {
        let status = if kind.is_available() {
            "available".green()
        } else {
            "not compiled in".dimmed()
        };
        println!("{}: {}", kind.name().bold(), status);
    }
}
