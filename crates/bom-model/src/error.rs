use thiserror::Error;

use crate::layout::LayoutKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BomError {
    /// The line matched none of the known BOM layouts. Non-fatal: callers
    /// report the line and keep processing.
    #[error("line does not match any known BOM layout")]
    NoMatch,
    /// The constrained-format check matched a layout other than the one
    /// requested. Only verification tooling constrains the layout, so this
    /// never occurs during normal aggregation.
    #[error("line matched the {matched} layout but the {expected} layout was expected")]
    LayoutMismatch {
        expected: LayoutKind,
        matched: LayoutKind,
    },
}

pub type Result<T> = std::result::Result<T, BomError>;
