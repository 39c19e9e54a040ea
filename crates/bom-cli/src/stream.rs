//! Line-stream processing: read, skip blanks, parse, aggregate.
//!
//! Lines are processed strictly in arrival order; each line is fully parsed
//! and folded into the aggregate before the next is read, which is what
//! keeps the ranking's tie order reproducible.

use std::io::BufRead;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use bom_aggregate::Aggregator;
use bom_model::BomEntry;
use bom_parse::parse_line;

/// Where the result-count limit comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitSource {
    /// The limit was supplied out of band (`--number`), or not at all.
    Fixed(Option<usize>),
    /// The first non-blank line of the stream is the limit (stdin mode).
    LeadingLine,
}

/// What a stream run produced.
#[derive(Debug)]
pub struct StreamOutcome {
    /// Ranked, truncated entries.
    pub entries: Vec<BomEntry>,
    /// Lines that parsed into an entry.
    pub parsed: usize,
    /// Lines that matched no layout.
    pub unparseable: usize,
}

/// Read every line from `reader`, aggregate the parseable ones, and return
/// the ranked result.
///
/// Blank lines are skipped. An unparseable line is reported at `warn` and
/// skipped; it never aborts the run. With [`LimitSource::LeadingLine`] the
/// first non-blank line must be a non-negative integer naming the limit; a
/// malformed leading line is a fatal error.
pub fn process_lines<R: BufRead>(reader: R, limit: LimitSource) -> Result<StreamOutcome> {
    let mut limit = match limit {
        LimitSource::Fixed(limit) => Some(limit),
        LimitSource::LeadingLine => None,
    };
    let mut aggregator = Aggregator::new();
    let mut parsed = 0usize;
    let mut unparseable = 0usize;

    for line in reader.lines() {
        let line = line.context("read input line")?;
        if line.trim().is_empty() {
            continue;
        }

        // In stdin mode the first non-blank line is the result-count limit.
        if limit.is_none() {
            match line.trim().parse::<usize>() {
                Ok(number) => {
                    debug!(number, "result-count limit read from stream");
                    limit = Some(Some(number));
                }
                Err(_) => bail!("expected a non-negative number of entries; got {line:?} instead"),
            }
            continue;
        }

        match parse_line(&line) {
            Some(entry) => {
                aggregator.ingest(entry);
                parsed += 1;
            }
            None => {
                warn!(line = %line, "failed to parse line");
                unparseable += 1;
            }
        }
    }

    let entries = aggregator.finalize(limit.flatten());
    info!(
        parsed,
        unparseable,
        entries = entries.len(),
        "input aggregated"
    );
    Ok(StreamOutcome {
        entries,
        parsed,
        unparseable,
    })
}
