//! Aggregation behavior over parsed lines, including the order-independence
//! of the merged mapping.

use std::collections::BTreeMap;

use proptest::prelude::*;

use bom_aggregate::{Aggregator, aggregate};
use bom_model::BomEntry;
use bom_parse::parse_line;

fn parse_all(lines: &[&str]) -> Vec<BomEntry> {
    lines.iter().filter_map(|line| parse_line(line)).collect()
}

#[test]
fn repeated_identity_merges_across_layouts() {
    // Same part expressed through two different layouts and messy casing.
    let ranked = aggregate(
        parse_all(&[
            "Z1,Z3;40001;Keystone",
            "Z1, z 3,Z 8;40001;Keystone",
            "40001:keystone:Z1",
        ]),
        None,
    );
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].mpn, "40001");
    assert_eq!(ranked[0].manufacturer, "Keystone");
    assert_eq!(ranked[0].occurrences, 3);
    assert_eq!(ranked[0].reference_designators, vec!["Z1", "Z3", "Z8"]);
}

#[test]
fn unparseable_lines_do_not_suppress_valid_ones() {
    let ranked = aggregate(
        parse_all(&[
            "AXXX-1000:Panasonic:D1",
            "bad input",
            "Z1;40001;Keystone",
        ]),
        None,
    );
    assert_eq!(ranked.len(), 2);
}

#[test]
fn ranked_output_respects_limit() {
    let ranked = aggregate(
        parse_all(&[
            "AXXX-1000:Panasonic:D1",
            "AXXX-1000:Panasonic:D2",
            "Z1;40001;Keystone",
        ]),
        Some(1),
    );
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].mpn, "AXXX-1000");
    assert_eq!(ranked[0].occurrences, 2);
}

/// Collapse a ranked list into an order-independent map for comparison.
fn as_map(entries: Vec<BomEntry>) -> BTreeMap<String, (u64, Vec<String>)> {
    entries
        .into_iter()
        .map(|entry| {
            let key = entry.identity();
            let mut refs = entry.reference_designators;
            refs.sort();
            (key, (entry.occurrences, refs))
        })
        .collect()
}

proptest! {
    #[test]
    fn ingest_order_never_changes_the_merged_mapping(
        lines in proptest::collection::vec(
            ("[A-Z0-9]{1,4}", "[A-Za-z]{2,6}", "[A-Z][0-9]"),
            1..12,
        ),
        rotation in 0usize..12,
    ) {
        let raw: Vec<String> = lines
            .iter()
            .map(|(mpn, manufacturer, refs)| format!("{mpn}:{manufacturer}:{refs}"))
            .collect();

        let mut forward = Aggregator::new();
        for line in &raw {
            forward.ingest(parse_line(line).expect("generated line parses"));
        }

        let mut rotated = Aggregator::new();
        let pivot = rotation % raw.len();
        for line in raw[pivot..].iter().chain(raw[..pivot].iter()) {
            rotated.ingest(parse_line(line).expect("generated line parses"));
        }

        prop_assert_eq!(
            as_map(forward.finalize(None)),
            as_map(rotated.finalize(None))
        );
    }

    #[test]
    fn occurrence_counts_sum_to_the_number_of_lines(
        repeats in 1usize..20,
    ) {
        let ranked = aggregate(
            std::iter::repeat_n("AXXX-1000:Panasonic:D1", repeats)
                .filter_map(parse_line),
            None,
        );
        prop_assert_eq!(ranked.len(), 1);
        prop_assert_eq!(ranked[0].occurrences, repeats as u64);
    }
}
