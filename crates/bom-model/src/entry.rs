use serde::{Deserialize, Serialize};

/// A single deduplicated BOM line item in canonical form.
///
/// All fields hold canonical values: the part number is uppercased with
/// every whitespace character removed, the manufacturer is title-cased with
/// single spaces between words, and each reference designator is uppercased
/// with whitespace stripped. Canonicalization happens before construction;
/// this type never stores raw input.
///
/// The serialized field names (`MPN`, `Manufacturer`, `ReferenceDesignators`,
/// `NumOccurrences`) are the tool's JSON wire format and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomEntry {
    /// Manufacturer part number.
    #[serde(rename = "MPN")]
    pub mpn: String,
    /// Manufacturer name.
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    /// Reference designators, unique, in first-appearance order.
    #[serde(rename = "ReferenceDesignators")]
    pub reference_designators: Vec<String>,
    /// Number of input lines that resolved to this entry.
    #[serde(rename = "NumOccurrences")]
    pub occurrences: u64,
}

impl BomEntry {
    /// Create an entry from canonical fields with an occurrence count of 1.
    pub fn new(mpn: String, manufacturer: String, reference_designators: Vec<String>) -> Self {
        Self {
            mpn,
            manufacturer,
            reference_designators,
            occurrences: 1,
        }
    }

    /// Deduplication key: same manufacturer plus same part number means the
    /// same entity. Computed from canonical fields only, so case or spacing
    /// differences in the raw input can never split one entity in two.
    pub fn identity(&self) -> String {
        format!("{}:{}", self.manufacturer, self.mpn)
    }

    /// Add a designator unless it is already present.
    pub fn add_reference_designator(&mut self, designator: String) {
        if !self.reference_designators.contains(&designator) {
            self.reference_designators.push(designator);
        }
    }

    /// Fold another occurrence of the same entity into this one: counts add,
    /// designator sets union (first-appearance order kept).
    ///
    /// Callers are responsible for only merging entries with equal
    /// [`identity`](Self::identity) values.
    pub fn merge(&mut self, other: BomEntry) {
        self.occurrences += other.occurrences;
        for designator in other.reference_designators {
            self.add_reference_designator(designator);
        }
    }
}
