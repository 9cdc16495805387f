//! CLI binary for zkvm-pdf-input.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `PrepareConfig` and prints the hex tape.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zkvm_pdf_input::{
    inspect, prepare, prepare_to_file, PageSelection, PrepareConfig, TapeSummary,
};

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Tape for a signed PDF, all pages (stdout)
  prepare-input signed.pdf > input.txt

  # Expect a string somewhere in the document
  prepare-input signed.pdf "Total: 42.00 EUR" > input.txt

  # Only check the first page, write to a file
  prepare-input --page 0 signed.pdf "ACME Corp" -o input.txt

  # Reject documents the verifier build cannot hold
  prepare-input --max-document-bytes 10000000 big.pdf

  # Decode an existing tape
  prepare-input --decode input.txt --json

TAPE LAYOUT:
  [4 bytes BE] doc_len | document | 0-3 zero bytes
  [4 bytes BE] text_len | expected text | [4 bytes] page | 0-3 zero bytes
  Rendered as big-endian 32-bit words, 8 lowercase hex digits each.
"#;

/// Pack a PDF and expected text into a zkVM input tape.
#[derive(Parser, Debug)]
#[command(
    name = "prepare-input",
    version,
    about = "Pack a PDF and expected text into a zkVM input tape",
    long_about = "Pack a document, an optional expected-text string and a page selector into \
the word-aligned hex tape consumed by the zkVM PDF verifier's input reader.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Document to pack (normally a PDF).
    #[arg(required_unless_present = "decode")]
    document: Option<PathBuf>,

    /// Text the verifier should find in the document.
    #[arg(default_value = "")]
    expected_text: String,

    /// Page selector: a zero-based page index, or "all".
    #[arg(long, env = "ZKVM_INPUT_PAGE", default_value = "all")]
    page: String,

    /// Write the tape to this file instead of stdout.
    #[arg(short, long, env = "ZKVM_INPUT_OUTPUT")]
    output: Option<PathBuf>,

    /// Refuse documents larger than this many bytes.
    #[arg(long, env = "ZKVM_INPUT_MAX_DOCUMENT_BYTES")]
    max_document_bytes: Option<usize>,

    /// Decode an existing tape file instead of packing a document.
    #[arg(long, conflicts_with_all = ["document", "output"])]
    decode: Option<PathBuf>,

    /// Output structured JSON instead of the bare hex string.
    #[arg(long, env = "ZKVM_INPUT_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "ZKVM_INPUT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "ZKVM_INPUT_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // stdout carries only the tape, so logs always go to stderr.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Decode mode ──────────────────────────────────────────────────────
    if let Some(ref tape_path) = cli.decode {
        let text = tokio::fs::read_to_string(tape_path)
            .await
            .with_context(|| format!("Failed to read tape from {:?}", tape_path))?;
        let summary = inspect(&text).context("Failed to decode tape")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?
            );
        } else {
            print_summary(tape_path, &summary);
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    let config = build_config(&cli)?;
    let document = cli
        .document
        .as_ref()
        .context("A document path is required")?;

    // ── Run ──────────────────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let stats = prepare_to_file(document, output_path, &config)
            .await
            .context("Failed to prepare tape")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?
            );
        } else if !cli.quiet {
            eprintln!(
                "{}  {} words  {} bytes  →  {}",
                green("✔"),
                stats.word_count,
                stats.total_bytes,
                bold(&output_path.display().to_string()),
            );
            eprintln!(
                "   {}",
                dim(&format!(
                    "document {} B (+{} pad), text {} B, page {:#010x}",
                    stats.document_len,
                    stats.document_padding,
                    stats.expected_text_len,
                    stats.page_word
                )),
            );
        }
    } else {
        let prepared = prepare(document, &config)
            .await
            .context("Failed to prepare tape")?;

        if cli.json {
            let json =
                serde_json::to_string_pretty(&prepared).context("Failed to serialise output")?;
            println!("{json}");
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(prepared.hex.as_bytes())
                .context("Failed to write to stdout")?;
            if config.trailing_newline {
                handle
                    .write_all(b"\n")
                    .context("Failed to write to stdout")?;
            }
        }
    }

    Ok(())
}

/// Map CLI args to `PrepareConfig`.
fn build_config(cli: &Cli) -> Result<PrepareConfig> {
    let mut builder = PrepareConfig::builder()
        .page(parse_page(&cli.page)?)
        .expected_text(cli.expected_text.clone())
        .trailing_newline(true);

    if let Some(max) = cli.max_document_bytes {
        builder = builder.max_document_len(max);
    }

    builder.build().context("Invalid configuration")
}

/// Parse `--page` into a `PageSelection`.
fn parse_page(s: &str) -> Result<PageSelection> {
    let s = s.trim().to_lowercase();
    if s == "all" {
        return Ok(PageSelection::All);
    }
    let page: u32 = if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16).context("Invalid hex page number")?
    } else {
        s.parse().context("Invalid page number")?
    };
    Ok(PageSelection::Page(page))
}

fn print_summary(tape_path: &std::path::Path, summary: &TapeSummary) {
    println!("Tape:           {}", tape_path.display());
    println!("Words:          {}", summary.word_count);
    println!("Document:       {} bytes", summary.document_len);
    println!("PDF header:     {}", summary.has_pdf_header);
    if summary.expected_text_is_utf8 {
        println!("Expected text:  {:?}", summary.expected_text);
    } else {
        println!("Expected text:  {:?} (not valid UTF-8)", summary.expected_text);
    }
    match summary.page {
        PageSelection::All => println!("Page:           all"),
        PageSelection::Page(n) => println!("Page:           {}", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_page_variants() {
        assert_eq!(parse_page("all").unwrap(), PageSelection::All);
        assert_eq!(parse_page(" ALL ").unwrap(), PageSelection::All);
        assert_eq!(parse_page("0").unwrap(), PageSelection::Page(0));
        assert_eq!(parse_page("12").unwrap(), PageSelection::Page(12));
        assert_eq!(parse_page("0x10").unwrap(), PageSelection::Page(16));
        assert!(parse_page("-1").is_err());
        assert!(parse_page("4294967296").is_err());
    }

    #[test]
    fn cli_defaults_to_all_pages() {
        let cli = Cli::try_parse_from(["prepare-input", "doc.pdf"]).unwrap();
        let config = build_config(&cli).unwrap();
        assert_eq!(config.page, PageSelection::All);
        assert!(config.expected_text.is_empty());
        assert!(config.trailing_newline);
    }

    #[test]
    fn cli_decode_conflicts_with_document() {
        assert!(Cli::try_parse_from(["prepare-input", "--decode", "t.txt", "doc.pdf"]).is_err());
        assert!(Cli::try_parse_from(["prepare-input", "--decode", "t.txt"]).is_ok());
    }
}
