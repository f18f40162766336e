//! pdfpeek - Check whether a PDF has extractable text
//!
//! A command line tool that reports the page count of a document and a
//! short text snippet from one page, as a quick sanity check before a
//! full extraction run.

use clap::{ArgAction, Parser};
use pagetext_core::Document;
use pagetext_core::error::Result;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A command line tool that reports the page count of a document and a
/// short text snippet from one page.
#[derive(Parser, Debug)]
#[command(name = "pdfpeek")]
#[command(author, version, about = "Report page count and a text snippet from a PDF", long_about = None)]
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

    /// Page to probe for text (0-indexed)
    #[arg(short = 'p', long, default_value = "0")]
    page: usize,

    /// Maximum number of characters of text to show
    #[arg(short = 'n', long, default_value = "100")]
    chars: usize,
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

/// Report the page count and a text snippet from the probed page.
fn peek<W: Write>(writer: &mut W, args: &Args) -> Result<()> {
    let doc = Document::open(&args.file)?;

    writeln!(writer, "{} pages", doc.page_count())?;

    let text = doc.page_text(args.page)?;
    if text.trim().is_empty() {
        writeln!(writer, "No text found on page {}", args.page)?;
    } else {
        let snippet: String = text.chars().take(args.chars).collect();
        writeln!(writer, "Text found on page {}: {}", args.page, snippet)?;
    }

    Ok(())
}

fn main() -> core::result::Result<(), Box<dyn core::error::Error>> {
    let args = Args::parse();

    init_logging(args.debug);

    let mut output = BufWriter::new(io::stdout());

    if let Err(e) = peek(&mut output, &args) {
        eprintln!("Error processing {}: {}", args.file.display(), e);
        std::process::exit(1);
    }

    output.flush()?;
    Ok(())
}
