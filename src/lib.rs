//! btree-txt2bin - converts the textual form of a fixed-fanout B-tree index
//! into its packed binary layout.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          btree-txt2bin                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Text Layer (text/)                          │   │
//! │  │     TextScanner: integers + fixed-width key values       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Pipeline (transcode/)                          │   │
//! │  │   Transcoder: header → N × (triplets + trailing TP)      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Packed Format (binary/)                        │   │
//! │  │     IndexHeader + NodeGroup [TP run|KV run|DRP run]      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tree is opaque: node occupancy, key order and pointer targets are
//! copied, never checked.
//!
//! # Modules
//! - [`common`] - Shared primitives (Fanout, Field, Error, config)
//! - [`text`] - Textual grammar scanner
//! - [`binary`] - Packed header and node group layouts
//! - [`transcode`] - The conversion pipeline
//!
//! # Quick Start
//! ```
//! use btree_txt2bin::convert;
//!
//! let packed = convert(b"2 0 1\n5 abc -3 7\n").unwrap();
//! assert_eq!(packed.len(), 3 + (5 * 2 - 4));
//! ```

pub mod binary;
pub mod common;
pub mod text;
pub mod transcode;

// Re-export commonly used items at crate root for convenience
pub use common::config::{HEADER_SIZE, KV_LEN};
pub use common::{Error, Fanout, Field, GroupFault, HeaderFault, HeaderField, Result};

pub use binary::{BinaryIndex, IndexHeader, NodeGroup};
pub use transcode::{convert, transcode, TranscodeSummary, Transcoder};
