//! pagetext - Extract text from a page range of a PDF file
//!
//! A command line tool for extracting the text of a contiguous page
//! range and writing it out as plain text, marked text or JSON.

use clap::{ArgAction, Parser, ValueEnum};
use pagetext_core::error::Result;
use pagetext_core::{Document, ExtractionJob, OutputFormat, extract_range, render};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Output type for the extracted content.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Plain text, pages concatenated (default)
    #[default]
    Text,
    /// Plain text with a "--- Page N ---" marker before each page
    Markers,
    /// JSON array of one record per page
    Json,
}

impl From<OutputType> for OutputFormat {
    fn from(t: OutputType) -> Self {
        match t {
            OutputType::Text => OutputFormat::Text,
            OutputType::Markers => OutputFormat::Markers,
            OutputType::Json => OutputFormat::Json,
        }
    }
}

/// A command line tool for extracting the text of a contiguous page
/// range and writing it out as plain text, marked text or JSON.
#[derive(Parser, Debug)]
#[command(name = "pagetext")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// Path to the PDF file
    file: PathBuf,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Range options ===
    /// First page of the range (0-indexed)
    #[arg(short = 's', long, default_value = "0")]
    start: usize,

    /// End of the range, exclusive (0-indexed). Defaults to the end of the document
    #[arg(short = 'e', long)]
    end: Option<usize>,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate. Inferred from the outfile extension if omitted
    #[arg(short = 't', long = "format", value_enum)]
    format: Option<OutputType>,
}

/// Infer output type from file extension.
fn infer_output_type(path: &str) -> Option<OutputType> {
    let path_lower = path.to_lowercase();
    if path_lower.ends_with(".json") {
        Some(OutputType::Json)
    } else if path_lower.ends_with(".txt") || path_lower.ends_with(".text") {
        Some(OutputType::Text)
    } else {
        None
    }
}

/// Set up logging to stderr. RUST_LOG overrides the -d flag.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Extract the requested range and write it to stdout.
fn extract_to_stdout(args: &Args, format: OutputFormat) -> Result<()> {
    let doc = Document::open(&args.file)?;
    let end = args.end.unwrap_or_else(|| doc.page_count());
    let pages = extract_range(&doc, args.start..end)?;
    let rendered = render(&pages, format)?;

    let mut output = BufWriter::new(io::stdout());
    output.write_all(rendered.as_bytes())?;
    output.flush()?;
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_logging(args.debug);

    // Determine output type (may be inferred from output filename)
    let output_type = match args.format {
        Some(t) => t,
        None if args.outfile != "-" => infer_output_type(&args.outfile).unwrap_or_default(),
        None => OutputType::default(),
    };
    let format = OutputFormat::from(output_type);

    tracing::debug!(file = %args.file.display(), start = args.start, end = args.end, "starting extraction");

    if args.outfile == "-" {
        if let Err(e) = extract_to_stdout(&args, format) {
            eprintln!("Error processing {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    } else {
        let job = ExtractionJob {
            document_path: args.file.clone(),
            start_page: args.start,
            end_page: args.end,
            output_path: PathBuf::from(&args.outfile),
            format,
        };

        match job.run() {
            Ok(summary) => {
                tracing::info!(pages = summary.pages, bytes = summary.bytes, "wrote output");
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", args.file.display(), e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
