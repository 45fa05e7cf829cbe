//! Decoded view of a packed index image.

use crate::common::{Error, Result};

use super::header::IndexHeader;
use super::node_group::NodeGroup;

/// A packed index split back into its header and node groups.
///
/// # File Layout
/// ```text
/// ┌────────┬───────────┬───────────┬─────────┬─────────────┐
/// │ Header │ Group 0   │ Group 1   │  ...    │ Group N-1   │
/// │ (3B)   │ (5M - 4)  │ (5M - 4)  │         │ (5M - 4)    │
/// └────────┴───────────┴───────────┴─────────┴─────────────┘
/// ```
///
/// Group `i` is located at offset `3 + i × (5M - 4)`.
///
/// # Example
/// ```
/// use btree_txt2bin::BinaryIndex;
///
/// let index = BinaryIndex::from_bytes(&[2, 0, 1, 5, 7, b'a', b'b', b'c', 0xfd]).unwrap();
/// assert_eq!(index.header().node_count(), 1);
/// assert_eq!(index.groups()[0].tps().collect::<Vec<_>>(), vec![5, 7]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryIndex {
    header: IndexHeader,
    groups: Vec<NodeGroup>,
}

impl BinaryIndex {
    /// Decode a complete packed image.
    ///
    /// # Errors
    /// - [`Error::HeaderParse`] / [`Error::Truncated`] for a bad header
    /// - [`Error::Truncated`] if fewer than `N` groups are present
    /// - [`Error::TrailingBytes`] if bytes follow the last group
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let header = IndexHeader::from_bytes(bytes)?;

        let expected = header.encoded_len();
        if bytes.len() < expected {
            return Err(Error::Truncated {
                expected,
                actual: bytes.len(),
            });
        }
        if bytes.len() > expected {
            return Err(Error::TrailingBytes {
                expected,
                actual: bytes.len(),
            });
        }

        let groups = bytes[IndexHeader::SIZE..]
            .chunks_exact(header.group_size())
            .map(|chunk| NodeGroup::from_bytes(header.fanout(), chunk))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { header, groups })
    }

    /// The decoded header.
    #[inline]
    pub fn header(&self) -> &IndexHeader {
        &self.header
    }

    /// Node groups in file order.
    #[inline]
    pub fn groups(&self) -> &[NodeGroup] {
        &self.groups
    }

    /// Number of node groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the index holds no node groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
