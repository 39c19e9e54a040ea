//! CLI argument definitions for bomparse.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bomparse",
    version,
    about = "Parse, deduplicate, and rank bill-of-materials line items",
    long_about = "Parse free-text BOM lines into a normalized, deduplicated summary.\n\n\
                  Each line names a part number, a manufacturer, and one or more\n\
                  reference designators in one of three supported layouts. Repeated\n\
                  parts are merged and the result is ranked by occurrence count."
)]
pub struct Cli {
    /// Number of spaces when pretty-printing JSON output (0 for compact).
    #[arg(short = 's', long = "spaces", value_name = "N", default_value_t = 2)]
    pub spaces: usize,

    /// The file to read the input from; "-" for stdin.
    #[arg(short = 'f', long = "file", value_name = "PATH", default_value = "-")]
    pub file: String,

    /// Number of BOM line items to display when reading from a file.
    ///
    /// In stdin mode the limit is taken from the first input line instead,
    /// so this flag is rejected there.
    #[arg(short = 'n', long = "number", value_name = "N")]
    pub number: Option<usize>,

    /// Check whether the given string parses and print its JSON; useful for
    /// testing.
    #[arg(short = 'c', long = "check", value_name = "LINE")]
    pub check: Option<String>,

    /// Render the summary as a terminal table instead of JSON.
    #[arg(long = "table")]
    pub table: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// How one invocation runs, after flag validation.
#[derive(Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Parse a single string and print its JSON.
    Check(String),
    /// Read a file with an explicit result-count limit.
    File { path: PathBuf, limit: usize },
    /// Read stdin; the first input line carries the limit.
    Stdin,
}

impl Cli {
    /// Validate flag combinations and resolve the run mode.
    ///
    /// `--check` takes precedence over the input flags. A file input
    /// requires `--number`; stdin input forbids it (the limit comes from
    /// the leading input line there).
    pub fn mode(&self) -> Result<RunMode> {
        if let Some(line) = &self.check {
            if line.is_empty() {
                bail!("must specify a string to check");
            }
            return Ok(RunMode::Check(line.clone()));
        }
        if self.file == "-" {
            if self.number.is_some() {
                bail!("must not specify --number/-n when reading from stdin");
            }
            Ok(RunMode::Stdin)
        } else if let Some(limit) = self.number {
            Ok(RunMode::File {
                path: PathBuf::from(&self.file),
                limit,
            })
        } else {
            bail!("must specify --number/-n when reading from a file");
        }
    }
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
