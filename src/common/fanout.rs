//! Fanout (`M`) of a B-tree node.

use std::fmt;

use super::config::{DRP_SIZE, FIELD_MAX, KV_LEN, TP_SIZE};

/// Number of child pointers per node, validated to `1..=127`.
///
/// Every per-group count derives from the fanout:
/// - `M` TP values
/// - `M - 1` key values and `M - 1` DRP values
///
/// # Example
/// ```
/// use btree_txt2bin::Fanout;
///
/// let m = Fanout::new(4).unwrap();
/// assert_eq!(m.key_count(), 3);
/// assert_eq!(m.group_size(), 16);
/// assert!(Fanout::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fanout(u8);

impl Fanout {
    /// Create a fanout, returning `None` unless `1 <= m <= 127`.
    #[inline]
    pub fn new(m: i8) -> Option<Self> {
        if (1..=FIELD_MAX).contains(&m) {
            Some(Fanout(m as u8))
        } else {
            None
        }
    }

    /// The fanout as its raw header byte value.
    #[inline]
    pub fn get(self) -> i8 {
        self.0 as i8
    }

    /// Number of TP values in a node group.
    #[inline]
    pub fn tp_count(self) -> usize {
        self.0 as usize
    }

    /// Number of key values (and DRP values) in a node group.
    #[inline]
    pub fn key_count(self) -> usize {
        self.0 as usize - 1
    }

    /// Packed size of one node group: `5M - 4` bytes.
    #[inline]
    pub fn group_size(self) -> usize {
        self.tp_count() * TP_SIZE + self.key_count() * (KV_LEN + DRP_SIZE)
    }
}

impl fmt::Display for Fanout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M={}", self.0)
    }
}
