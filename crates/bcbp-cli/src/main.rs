/// Boarding-pass command-line tool — decode, validate, and inspect the
/// barcode strings carried inside boarding-pass barcodes.
///
/// # Command overview
///
/// ```text
/// bcbp <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode a barcode string and print the pass
///   validate   Check a barcode string for structural correctness
///   inspect    Print a field-by-field breakdown of a pass
///   help       Print help information
/// ```
///
/// Every command takes the barcode as a literal argument, as `@path` to
/// read a file, or as `-` to read stdin.
///
/// # Exit codes
///
/// | Code | Meaning                                   |
/// |------|-------------------------------------------|
/// | 0    | Success                                   |
/// | 1    | Error (I/O failure, invalid pass, etc.)   |
///
/// All error details are written to stderr so stdout can be piped
/// cleanly.
use std::io::Read;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod cmd_decode;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The boarding-pass barcode command-line tool.
#[derive(Parser)]
#[command(name = "bcbp", version, about = "IATA boarding-pass barcode CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a barcode string and print the pass.
    Decode(DecodeArgs),
    /// Check a barcode string for structural correctness.
    Validate(ValidateArgs),
    /// Print a field-by-field breakdown of a pass.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `bcbp decode`.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Barcode string, `@path`, or `-` for stdin.
    pub input: String,

    /// Print the decoded pass as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,

    /// Keep leading zeros on flight number, seat, and check-in
    /// sequence.
    #[arg(long)]
    pub keep_zeros: bool,

    /// Keep surrounding spaces on extracted fields.
    #[arg(long)]
    pub keep_spaces: bool,

    /// Report blank optional fields as empty strings, not as absent.
    #[arg(long)]
    pub keep_empty: bool,

    /// Log every field read to stderr while decoding.
    #[arg(long)]
    pub trace: bool,

    /// Tolerate non-bag-tag padding in the unique conditional block.
    #[arg(long)]
    pub lenient_bag_tags: bool,
}

/// Arguments for `bcbp validate`.
///
/// Runs the lightweight shape validator first, then a full structural
/// decode, and prints a checkmark report. Exit code 0 only when both
/// stages pass.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Barcode string, `@path`, or `-` for stdin.
    pub input: String,
}

/// Arguments for `bcbp inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Barcode string, `@path`, or `-` for stdin.
    pub input: String,

    /// Inspect only the leg at this zero-based index.
    #[arg(long)]
    pub leg: Option<usize>,
}

// ── Input loading ─────────────────────────────────────────────────────────────

/// Resolve the positional input argument into the barcode string.
///
/// `@path` reads a file, `-` reads stdin, anything else is the barcode
/// itself. Trailing newlines from files and pipes are stripped — they
/// are artifacts of the transport, not of the pass.
pub fn load_input(arg: &str) -> Result<String> {
    let raw = if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("cannot read stdin")?;
        buf
    } else if let Some(path) = arg.strip_prefix('@') {
        std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?
    } else {
        return Ok(arg.to_string());
    };
    Ok(raw.trim_end_matches(['\r', '\n']).to_string())
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Decode(args) => cmd_decode::run(args),
        Commands::Validate(args) => cmd_validate::run(args),
        Commands::Inspect(args) => cmd_inspect::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
