//! Per-run transcoding summary.

use std::fmt;

use crate::binary::IndexHeader;

/// A snapshot of what one transcoding run produced.
///
/// # Example
/// ```
/// use btree_txt2bin::transcode;
///
/// let mut out: Vec<u8> = Vec::new();
/// let summary = transcode(&b"1 0 2\n4\n5\n"[..], &mut out).unwrap();
/// assert_eq!(summary.groups_written, 2);
/// assert_eq!(summary.bytes_written, 5);
/// assert!(summary.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeSummary {
    /// The validated header.
    pub header: IndexHeader,

    /// Number of node groups written.
    pub groups_written: usize,

    /// Total bytes written, header included.
    pub bytes_written: u64,

    /// Whether non-whitespace input followed the last group.
    pub trailing_input: bool,
}

impl TranscodeSummary {
    /// Start a summary once the header has been written.
    pub(crate) fn new(header: IndexHeader) -> Self {
        Self {
            header,
            groups_written: 0,
            bytes_written: IndexHeader::SIZE as u64,
            trailing_input: false,
        }
    }

    pub(crate) fn record_group(&mut self, bytes: usize) {
        self.groups_written += 1;
        self.bytes_written += bytes as u64;
    }

    /// Whether every group the header declares was written.
    pub fn is_complete(&self) -> bool {
        self.groups_written == self.header.node_count()
            && self.bytes_written == self.header.encoded_len() as u64
    }
}

impl fmt::Display for TranscodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rootPtr={} N={}: {} groups, {} bytes",
            self.header.fanout(),
            self.header.root_ptr(),
            self.header.node_count(),
            self.groups_written,
            self.bytes_written
        )
    }
}
