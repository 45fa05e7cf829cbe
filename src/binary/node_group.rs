//! NodeGroup - one node record in its packed layout.
//!
//! A [`NodeGroup`] owns a fixed-capacity byte buffer sized by the fanout.
//! The transcoder allocates one per run and reuses it for every record.

use crate::common::config::{DRP_SIZE, KV_LEN, TP_SIZE};
use crate::common::{Error, Fanout, Result};

/// A single node record, regrouped by field type.
///
/// # Memory Layout (`5M - 4` bytes, no padding)
/// ```text
/// ┌──────────────┬──────────────────────┬──────────────────┐
/// │ TP[0..M]     │ KV[0..M-1]           │ DRP[0..M-1]      │
/// │ M bytes      │ (M - 1) × 3 bytes    │ M - 1 bytes      │
/// └──────────────┴──────────────────────┴──────────────────┘
/// Offset: 0      M                      4M - 3
/// ```
///
/// Setters write directly into their slot, so fields may arrive in any
/// order; the text grammar delivers them as `(TP, KV, DRP)` triplets.
///
/// # Example
/// ```
/// use btree_txt2bin::{Fanout, NodeGroup};
///
/// let mut group = NodeGroup::new(Fanout::new(2).unwrap());
/// group.set_tp(0, 5);
/// group.set_key(0, *b"abc");
/// group.set_drp(0, -3);
/// group.set_tp(1, 7);
/// assert_eq!(group.as_slice(), &[5, 7, b'a', b'b', b'c', 0xfd]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeGroup {
    fanout: Fanout,
    data: Box<[u8]>,
}

impl NodeGroup {
    /// Create a zeroed group for the given fanout.
    pub fn new(fanout: Fanout) -> Self {
        Self {
            fanout,
            data: vec![0u8; fanout.group_size()].into_boxed_slice(),
        }
    }

    /// Copy a packed group out of a byte slice.
    ///
    /// # Errors
    /// Returns [`Error::Truncated`] or [`Error::TrailingBytes`] unless
    /// `bytes.len()` equals the group size.
    pub fn from_bytes(fanout: Fanout, bytes: &[u8]) -> Result<Self> {
        let expected = fanout.group_size();
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
        Ok(Self {
            fanout,
            data: bytes.into(),
        })
    }

    /// Fanout this group was sized for.
    #[inline]
    pub fn fanout(&self) -> Fanout {
        self.fanout
    }

    /// Offset of the KV run.
    #[inline]
    pub fn kv_offset(&self) -> usize {
        self.fanout.tp_count() * TP_SIZE
    }

    /// Offset of the DRP run.
    #[inline]
    pub fn drp_offset(&self) -> usize {
        self.kv_offset() + self.fanout.key_count() * KV_LEN
    }

    /// The packed bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Zero out the whole group.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Store `TP[slot]`.
    ///
    /// # Panics
    /// Panics if `slot >= M`.
    pub fn set_tp(&mut self, slot: usize, value: i8) {
        assert!(slot < self.fanout.tp_count(), "TP slot out of bounds");
        self.data[slot * TP_SIZE] = value as u8;
    }

    /// Store `KV[slot]`.
    ///
    /// # Panics
    /// Panics if `slot >= M - 1`.
    pub fn set_key(&mut self, slot: usize, key: [u8; KV_LEN]) {
        assert!(slot < self.fanout.key_count(), "KV slot out of bounds");
        let start = self.kv_offset() + slot * KV_LEN;
        self.data[start..start + KV_LEN].copy_from_slice(&key);
    }

    /// Store `DRP[slot]`.
    ///
    /// # Panics
    /// Panics if `slot >= M - 1`.
    pub fn set_drp(&mut self, slot: usize, value: i8) {
        assert!(slot < self.fanout.key_count(), "DRP slot out of bounds");
        let offset = self.drp_offset() + slot * DRP_SIZE;
        self.data[offset] = value as u8;
    }

    /// TP values in slot order.
    pub fn tps(&self) -> impl Iterator<Item = i8> + '_ {
        self.data[..self.kv_offset()].iter().map(|&b| b as i8)
    }

    /// Key values in slot order.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data[self.kv_offset()..self.drp_offset()].chunks_exact(KV_LEN)
    }

    /// DRP values in slot order.
    pub fn drps(&self) -> impl Iterator<Item = i8> + '_ {
        self.data[self.drp_offset()..].iter().map(|&b| b as i8)
    }
}
