//! Layout matching for raw BOM lines.
//!
//! Each layout is an anchored, case-insensitive regular expression built
//! from three named capture groups (`MPN`, `Manufacturer`, `Refs`). The
//! layouts are tried in [`LayoutKind::ALL`] order and the first full match
//! wins; that ordering is a contract, not an implementation detail.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use bom_model::{BomError, LayoutKind, Result};

/// Manufacturer part number: letters, digits, hyphens, and spaces.
const MPN_GROUP: &str = r"(?P<MPN>[A-Z0-9- ]+)";

/// Manufacturer name: letters, digits, and spaces.
const MANUFACTURER_GROUP: &str = r"(?P<Manufacturer>[A-Za-z0-9 ]+)";

/// Comma-separated reference designator list.
const REFS_GROUP: &str = r"(?P<Refs>[A-Za-z0-9 ]+(?:,[A-Za-z0-9 ]+)*)";

struct LayoutPattern {
    kind: LayoutKind,
    pattern: Regex,
}

fn layout_pattern(kind: LayoutKind) -> LayoutPattern {
    let body = match kind {
        LayoutKind::Colon => format!("{MPN_GROUP}:{MANUFACTURER_GROUP}:{REFS_GROUP}"),
        // Whitespace is tolerated between the two hyphens; spaces around
        // them land in the adjacent fields and are stripped by the
        // normalizer.
        LayoutKind::DoubleHyphen => format!("{MANUFACTURER_GROUP}-\\s*-{MPN_GROUP}:{REFS_GROUP}"),
        LayoutKind::Semicolon => format!("{REFS_GROUP};{MPN_GROUP};{MANUFACTURER_GROUP}"),
    };
    let pattern = Regex::new(&format!("(?i)^{body}$")).expect("layout pattern is valid");
    LayoutPattern { kind, pattern }
}

static LAYOUTS: LazyLock<Vec<LayoutPattern>> =
    LazyLock::new(|| LayoutKind::ALL.into_iter().map(layout_pattern).collect());

/// The three raw field substrings extracted from a matched line, before
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub mpn: &'a str,
    pub manufacturer: &'a str,
    pub reference_designators: &'a str,
}

/// Try the line against every layout in matching order and return the first
/// full match, or `None` when no layout applies.
///
/// The line must be non-blank; callers skip blank lines before matching.
pub fn match_line(line: &str) -> Option<(LayoutKind, RawFields<'_>)> {
    for layout in LAYOUTS.iter() {
        if let Some(captures) = layout.pattern.captures(line) {
            trace!(layout = %layout.kind, "line matched");
            let fields = RawFields {
                mpn: captures.name("MPN").map_or("", |m| m.as_str()),
                manufacturer: captures.name("Manufacturer").map_or("", |m| m.as_str()),
                reference_designators: captures.name("Refs").map_or("", |m| m.as_str()),
            };
            return Some((layout.kind, fields));
        }
    }
    None
}

/// Match a line that is required to use the `expected` layout.
///
/// Matching still runs in the fixed first-match-wins order; if the first
/// layout to accept the line is not `expected`, the result is
/// [`BomError::LayoutMismatch`] rather than a silent success.
pub fn match_line_expecting(line: &str, expected: LayoutKind) -> Result<RawFields<'_>> {
    match match_line(line) {
        Some((matched, fields)) if matched == expected => Ok(fields),
        Some((matched, _)) => Err(BomError::LayoutMismatch { expected, matched }),
        None => Err(BomError::NoMatch),
    }
}
