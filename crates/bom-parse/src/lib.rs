//! BOM line parsing.
//!
//! A raw input line passes through two stages:
//! 1. **Matching** ([`matcher`]): the line is tried against a fixed, ordered
//!    list of layout patterns; the first full match yields three raw field
//!    substrings.
//! 2. **Normalization** ([`normalize`]): the raw fields are canonicalized
//!    (whitespace and casing fixed) into a [`BomEntry`].

pub mod matcher;
pub mod normalize;

pub use matcher::{RawFields, match_line, match_line_expecting};
pub use normalize::normalize;

use bom_model::{BomEntry, LayoutKind, Result};

/// Parse one non-blank input line into a canonical [`BomEntry`].
///
/// Returns `None` when the line matches none of the known layouts; the
/// caller decides whether that is worth reporting.
pub fn parse_line(line: &str) -> Option<BomEntry> {
    match_line(line).map(|(_, fields)| normalize(fields))
}

/// Parse a line that is required to use a specific layout.
///
/// Returns [`bom_model::BomError::LayoutMismatch`] when the line parses
/// under a different layout than `expected`, and
/// [`bom_model::BomError::NoMatch`] when it parses under none. Intended for
/// verification tooling; normal aggregation never constrains the layout.
pub fn parse_line_expecting(line: &str, expected: LayoutKind) -> Result<BomEntry> {
    match_line_expecting(line, expected).map(normalize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_model::BomError;

    #[test]
    fn parse_line_composes_matching_and_normalization() {
        let entry = parse_line("AXXX-1000:Panasonic:D1,D8,D9").expect("layout 1 line");
        assert_eq!(entry.mpn, "AXXX-1000");
        assert_eq!(entry.manufacturer, "Panasonic");
        assert_eq!(entry.reference_designators, vec!["D1", "D8", "D9"]);
        assert_eq!(entry.occurrences, 1);
    }

    #[test]
    fn parse_line_rejects_unknown_layouts() {
        assert_eq!(parse_line("bad input"), None);
    }

    #[test]
    fn parse_line_expecting_reports_the_mismatched_layout() {
        let error = parse_line_expecting("AXXX-1000:Panasonic:D1", LayoutKind::Semicolon)
            .expect_err("colon line cannot satisfy the semicolon layout");
        assert_eq!(
            error,
            BomError::LayoutMismatch {
                expected: LayoutKind::Semicolon,
                matched: LayoutKind::Colon,
            }
        );
    }
}
