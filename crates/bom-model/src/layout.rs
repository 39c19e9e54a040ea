use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed textual layouts a BOM line may use.
///
/// The variant order is the matching order: a line is tried against each
/// layout in declaration order and the first full match wins. `index()` and
/// `from_index()` expose the stable zero-based position used by the
/// constrained-format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    /// `<mpn>:<manufacturer>:<refs>`
    Colon,
    /// `<manufacturer>--<mpn>:<refs>`, tolerating spaces between the hyphens.
    DoubleHyphen,
    /// `<refs>;<mpn>;<manufacturer>`
    Semicolon,
}

impl LayoutKind {
    /// All layouts in matching order.
    pub const ALL: [LayoutKind; 3] = [
        LayoutKind::Colon,
        LayoutKind::DoubleHyphen,
        LayoutKind::Semicolon,
    ];

    /// Zero-based position in the matching order.
    pub fn index(self) -> usize {
        match self {
            LayoutKind::Colon => 0,
            LayoutKind::DoubleHyphen => 1,
            LayoutKind::Semicolon => 2,
        }
    }

    /// Layout at the given matching-order position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayoutKind::Colon => "colon-delimited",
            LayoutKind::DoubleHyphen => "double-hyphen",
            LayoutKind::Semicolon => "semicolon-delimited",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for kind in LayoutKind::ALL {
            assert_eq!(LayoutKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(LayoutKind::from_index(3), None);
    }

    #[test]
    fn matching_order_is_stable() {
        assert_eq!(LayoutKind::ALL[0], LayoutKind::Colon);
        assert_eq!(LayoutKind::ALL[1], LayoutKind::DoubleHyphen);
        assert_eq!(LayoutKind::ALL[2], LayoutKind::Semicolon);
    }
}
