//! Common types and utilities shared across the transcoder.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Format constants and exit codes
//! - Error types
//! - The validated fanout and diagnostic field coordinates

pub mod config;
pub mod error;
mod fanout;
mod field;

pub use error::{Error, GroupFault, HeaderFault, Result};
pub use fanout::Fanout;
pub use field::{Field, HeaderField};
