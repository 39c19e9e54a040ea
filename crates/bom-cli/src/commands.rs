use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result, anyhow};
use tracing::info_span;

use bom_cli::render::{render_json, render_table};
use bom_cli::stream::{LimitSource, StreamOutcome, process_lines};
use bom_model::BomEntry;
use bom_parse::parse_line;

use crate::cli::{Cli, RunMode};

pub fn run(cli: &Cli) -> Result<()> {
    match cli.mode()? {
        RunMode::Check(line) => run_check(&line, cli),
        RunMode::File { path, limit } => {
            let span = info_span!("aggregate", file = %path.display());
            let _guard = span.enter();
            let file = File::open(&path)
                .with_context(|| format!("open input file {}", path.display()))?;
            let outcome = process_lines(BufReader::new(file), LimitSource::Fixed(Some(limit)))?;
            emit(&outcome, cli)
        }
        RunMode::Stdin => {
            let span = info_span!("aggregate", file = "stdin");
            let _guard = span.enter();
            let outcome = process_lines(io::stdin().lock(), LimitSource::LeadingLine)?;
            emit(&outcome, cli)
        }
    }
}

/// Parse a single string and print its JSON, failing when it matches no
/// layout.
fn run_check(line: &str, cli: &Cli) -> Result<()> {
    let entry = parse_line(line).ok_or_else(|| anyhow!("failed to parse {line:?}"))?;
    println!("{}", render_json(&entry, cli.spaces)?);
    Ok(())
}

fn emit(outcome: &StreamOutcome, cli: &Cli) -> Result<()> {
    let entries: &[BomEntry] = &outcome.entries;
    if cli.table {
        println!("{}", render_table(entries));
    } else {
        println!("{}", render_json(&entries, cli.spaces)?);
    }
    Ok(())
}
