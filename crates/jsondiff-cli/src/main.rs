//! `jsondiff` CLI — compare two JSON files and report every difference.
//!
//! ## Usage
//!
//! ```sh
//! # Side-by-side HTML report (written to diff.html)
//! jsondiff old.json new.json
//!
//! # Choose the output file
//! jsondiff old.json new.json -o report.html
//!
//! # Use a custom page template ({{title}}, {{summary}}, {{original}}, {{modified}}, {{diffs}})
//! jsondiff old.json new.json --template my-template.html
//!
//! # Machine-readable change list on stdout
//! jsondiff old.json new.json --format json
//!
//! # Annotated text for the terminal
//! jsondiff old.json new.json --format text
//! ```

mod page;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use jsondiff_core::{compare, parse_document, JsonDiffError, Markup, TextMarkup};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Output path meaning "standard output".
const STDOUT: &str = "-";

#[derive(Parser)]
#[command(
    name = "jsondiff",
    version,
    about = "Compare two JSON documents and report every addition, removal and modification"
)]
struct Cli {
    /// Original JSON file
    original: String,

    /// Modified JSON file
    modified: String,

    /// Output file; `-` writes to stdout. Defaults to diff.html for the html
    /// format and stdout otherwise
    #[arg(short, long)]
    output: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// HTML page template replacing the built-in one
    #[arg(long)]
    template: Option<String>,

    /// Log progress to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Standalone HTML page with both documents annotated
    Html,
    /// JSON array of change records
    Json,
    /// Marker-prefixed text of both documents
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let original = read_document(&cli.original)?;
    let modified = read_document(&cli.modified)?;

    let cmp = compare(&original, &modified);
    let summary = cmp.summary();
    info!(%summary, "comparison complete");

    let report = match cli.format {
        Format::Html => {
            let template = match cli.template.as_deref() {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read template: {}", path))?,
                None => page::DEFAULT_TEMPLATE.to_string(),
            };
            let title = format!("{} vs {}", cli.original, cli.modified);
            page::render_page(&template, &title, &cmp)
        }
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&cmp.changes)
                .context("Failed to serialize change list")?;
            json.push('\n');
            json
        }
        Format::Text => {
            let text = TextMarkup::default();
            format!(
                "{}\n--- {}\n{}+++ {}\n{}",
                summary,
                cli.original,
                text.to_markup(&cmp.original),
                cli.modified,
                text.to_markup(&cmp.modified),
            )
        }
    };

    let destination = match (cli.output.as_deref(), cli.format) {
        (Some(path), _) => path,
        (None, Format::Html) => "diff.html",
        (None, _) => STDOUT,
    };
    write_output(destination, &report)?;
    if destination != STDOUT {
        println!("Diff written to {}", destination);
    }

    Ok(())
}

/// Route logs to stderr; stdout may carry the report itself.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_document(path: &str) -> Result<serde_json::Value> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    debug!(path, bytes = text.len(), "read input");
    Ok(parse_document(path, &text)?)
}

fn write_output(path: &str, content: &str) -> Result<()> {
    if path == STDOUT {
        print!("{}", content);
        return Ok(());
    }
    std::fs::write(path, content).map_err(|source| JsonDiffError::OutputWriteFailure {
        destination: path.to_string(),
        source,
    })?;
    debug!(path, bytes = content.len(), "report written");
    Ok(())
}
