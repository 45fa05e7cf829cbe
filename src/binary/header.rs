//! Index header definition.

use crate::common::config::{FIELD_MIN, HEADER_SIZE};
use crate::common::{Error, Fanout, HeaderFault, HeaderField, Result};

/// Metadata stored at the beginning of every packed index.
///
/// # Layout (3 bytes)
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0       1     M (fanout, signed byte)
/// 1       1     rootPtr (signed byte)
/// 2       1     N (node count, signed byte)
/// ```
///
/// `rootPtr` is opaque: it is not checked against `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHeader {
    fanout: Fanout,
    root_ptr: i8,
    node_count: i8,
}

impl IndexHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = HEADER_SIZE;

    /// Offset of each field within the header.
    pub const OFFSET_FANOUT: usize = 0;
    pub const OFFSET_ROOT_PTR: usize = 1;
    pub const OFFSET_NODE_COUNT: usize = 2;

    /// Validate the three header values.
    ///
    /// # Errors
    /// Returns [`Error::HeaderParse`] if `m < 1`, `n < 0`, or any value
    /// is -128.
    pub fn new(m: i8, root_ptr: i8, n: i8) -> Result<Self> {
        let m = check_range(HeaderField::Fanout, m)?;
        let root_ptr = check_range(HeaderField::RootPtr, root_ptr)?;
        let n = check_range(HeaderField::NodeCount, n)?;

        let fanout = Fanout::new(m).ok_or(Error::HeaderParse {
            field: HeaderField::Fanout,
            fault: HeaderFault::InvalidFanout(m),
        })?;
        if n < 0 {
            return Err(Error::HeaderParse {
                field: HeaderField::NodeCount,
                fault: HeaderFault::NegativeCount(n),
            });
        }

        Ok(Self {
            fanout,
            root_ptr,
            node_count: n,
        })
    }

    /// Fanout `M`.
    #[inline]
    pub fn fanout(&self) -> Fanout {
        self.fanout
    }

    /// Index of the root node.
    #[inline]
    pub fn root_ptr(&self) -> i8 {
        self.root_ptr
    }

    /// Number of node groups `N`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count as usize
    }

    /// Packed size of one node group.
    #[inline]
    pub fn group_size(&self) -> usize {
        self.fanout.group_size()
    }

    /// Total packed size: `3 + N * (5M - 4)` bytes.
    pub fn encoded_len(&self) -> usize {
        Self::SIZE + self.node_count() * self.group_size()
    }

    /// Serialize the header.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[Self::OFFSET_FANOUT] = self.fanout.get() as u8;
        buf[Self::OFFSET_ROOT_PTR] = self.root_ptr as u8;
        buf[Self::OFFSET_NODE_COUNT] = self.node_count as u8;
        buf
    }

    /// Read a header from the beginning of a byte slice.
    ///
    /// # Errors
    /// Returns [`Error::Truncated`] if `data` is shorter than the header, or
    /// [`Error::HeaderParse`] if the stored values are invalid.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(Error::Truncated {
                expected: Self::SIZE,
                actual: data.len(),
            });
        }

        Self::new(
            data[Self::OFFSET_FANOUT] as i8,
            data[Self::OFFSET_ROOT_PTR] as i8,
            data[Self::OFFSET_NODE_COUNT] as i8,
        )
    }
}

fn check_range(field: HeaderField, value: i8) -> Result<i8> {
    if value < FIELD_MIN {
        return Err(Error::HeaderParse {
            field,
            fault: HeaderFault::OutOfRange {
                literal: value.to_string(),
            },
        });
    }
    Ok(value)
}
