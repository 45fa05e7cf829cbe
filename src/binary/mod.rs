//! Packed binary index format.
//!
//! This module contains:
//! - [`IndexHeader`] - The 3-byte header (`M`, `rootPtr`, `N`)
//! - [`NodeGroup`] - One node record regrouped as TP, KV and DRP runs
//! - [`BinaryIndex`] - A decoded view of a whole packed image

mod header;
mod index;
mod node_group;

pub use header::IndexHeader;
pub use index::BinaryIndex;
pub use node_group::NodeGroup;
