//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "crf-compliance",
    version,
    about = "Check CRF data against controlled terminology",
    long_about = "Check filled CRF datasets against a controlled-terminology table.\n\n\
                  Values absent from their codelist are flagged and paired with a\n\
                  fuzzy-match correction suggestion where one comes close enough."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a filled CRF dataset against controlled terminology.
    Check(CheckArgs),

    /// List the codelists defined in a terminology table.
    Codelists(CodelistsArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the filled CRF dataset (CSV).
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Path to the controlled-terminology table (CSV with CODELIST,VALUE).
    #[arg(long = "terminology", value_name = "CSV")]
    pub terminology: PathBuf,

    /// Identifier column naming each record.
    #[arg(long = "id-column", value_name = "COLUMN", default_value = "SUBJID")]
    pub id_column: String,

    /// Field to check, as COLUMN or COLUMN=CODELIST. Repeatable.
    ///
    /// Without this flag, every dataset column whose name matches a
    /// codelist in the terminology table is checked against it.
    #[arg(long = "field", value_name = "COLUMN[=CODELIST]", value_parser = parse_field_spec)]
    pub fields: Vec<FieldSpec>,

    /// Write the compliance report as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Hide fully compliant fields from the summary output.
    #[arg(long = "quiet-compliant")]
    pub quiet_compliant: bool,
}

#[derive(Parser)]
pub struct CodelistsArgs {
    /// Path to the controlled-terminology table (CSV with CODELIST,VALUE).
    #[arg(long = "terminology", value_name = "CSV")]
    pub terminology: PathBuf,
}

/// One column-to-codelist check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub column: String,
    pub codelist: String,
}

fn parse_field_spec(raw: &str) -> Result<FieldSpec, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("field spec must not be empty".to_string());
    }
    let (column, codelist) = match raw.split_once('=') {
        Some((column, codelist)) => (column.trim(), codelist.trim()),
        None => (raw, raw),
    };
    if column.is_empty() || codelist.is_empty() {
        return Err(format!("invalid field spec: {raw}"));
    }
    Ok(FieldSpec {
        column: column.to_string(),
        codelist: codelist.to_string(),
    })
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
