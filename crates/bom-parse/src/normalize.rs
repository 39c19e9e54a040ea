//! Field canonicalization.
//!
//! Raw fields arrive with whatever spacing and casing the input used; every
//! downstream comparison (the dedup identity above all) works on the
//! canonical forms produced here.

use bom_model::BomEntry;

use crate::matcher::RawFields;

/// Canonical part number: every whitespace character removed, uppercased.
pub fn normalize_mpn(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Canonical manufacturer name: title case with single spaces.
///
/// Splits on whitespace runs (dropping empty tokens), lowercases each word,
/// capitalizes its first character, and rejoins with single spaces.
pub fn normalize_manufacturer(raw: &str) -> String {
    let mut canonical = String::new();
    for word in raw.split_whitespace() {
        if !canonical.is_empty() {
            canonical.push(' ');
        }
        let lowered = word.to_lowercase();
        let mut chars = lowered.chars();
        if let Some(first) = chars.next() {
            canonical.extend(first.to_uppercase());
            canonical.push_str(chars.as_str());
        }
    }
    canonical
}

/// Canonical designator list: whitespace removed, split on commas,
/// uppercased, deduplicated in first-appearance order. Empty tokens (a refs
/// field of only spaces or stray commas) are dropped.
pub fn normalize_reference_designators(raw: &str) -> Vec<String> {
    let compact: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    let mut designators: Vec<String> = Vec::new();
    for token in compact.split(',') {
        if token.is_empty() {
            continue;
        }
        let designator = token.to_uppercase();
        if !designators.contains(&designator) {
            designators.push(designator);
        }
    }
    designators
}

/// Canonicalize the three raw fields into a [`BomEntry`] with an occurrence
/// count of 1.
pub fn normalize(fields: RawFields<'_>) -> BomEntry {
    BomEntry::new(
        normalize_mpn(fields.mpn),
        normalize_manufacturer(fields.manufacturer),
        normalize_reference_designators(fields.reference_designators),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mpn_removes_all_whitespace_and_uppercases() {
        assert_eq!(normalize_mpn("tsr - 10 02"), "TSR-1002");
        assert_eq!(normalize_mpn("  AXXX-1000  "), "AXXX-1000");
        assert_eq!(normalize_mpn("40001"), "40001");
    }

    #[test]
    fn manufacturer_title_cases_and_collapses_spaces() {
        assert_eq!(normalize_manufacturer(" panaSonic "), "Panasonic");
        assert_eq!(normalize_manufacturer("TEXAS   instruments"), "Texas Instruments");
        assert_eq!(normalize_manufacturer("keystone"), "Keystone");
    }

    #[test]
    fn designators_are_compacted_uppercased_and_deduped() {
        assert_eq!(normalize_reference_designators("a1,D 2"), vec!["A1", "D2"]);
        assert_eq!(
            normalize_reference_designators("Z1, z 3,Z 8"),
            vec!["Z1", "Z3", "Z8"]
        );
        assert_eq!(normalize_reference_designators("D1,d1, D 1"), vec!["D1"]);
    }

    #[test]
    fn designator_order_follows_first_appearance() {
        assert_eq!(
            normalize_reference_designators("D9,D1,D8,D1"),
            vec!["D9", "D1", "D8"]
        );
    }

    #[test]
    fn empty_designator_tokens_are_dropped() {
        assert_eq!(normalize_reference_designators("   "), Vec::<String>::new());
        assert_eq!(normalize_reference_designators("A1, ,B2"), vec!["A1", "B2"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let canonical_mpn = normalize_mpn("tsr - 10 02");
        assert_eq!(normalize_mpn(&canonical_mpn), canonical_mpn);

        let canonical_manufacturer = normalize_manufacturer("texas  INSTRUMENTS");
        assert_eq!(
            normalize_manufacturer(&canonical_manufacturer),
            canonical_manufacturer
        );

        let canonical_refs = normalize_reference_designators("a1, d2");
        assert_eq!(
            normalize_reference_designators(&canonical_refs.join(",")),
            canonical_refs
        );
    }
}
