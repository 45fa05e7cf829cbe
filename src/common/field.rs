//! Field coordinates used in diagnostics.

use std::fmt;

/// One of the three header values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    /// Fanout `M`.
    Fanout,
    /// Index of the root node.
    RootPtr,
    /// Number of node records `N`.
    NodeCount,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderField::Fanout => write!(f, "M"),
            HeaderField::RootPtr => write!(f, "rootPtr"),
            HeaderField::NodeCount => write!(f, "N"),
        }
    }
}

/// A field inside a node group, indexed by its slot.
///
/// TP slots run `0..M`, KV and DRP slots run `0..M-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Tp(usize),
    Kv(usize),
    Drp(usize),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Tp(j) => write!(f, "TP[{}]", j),
            Field::Kv(j) => write!(f, "KV[{}]", j),
            Field::Drp(j) => write!(f, "DRP[{}]", j),
        }
    }
}
