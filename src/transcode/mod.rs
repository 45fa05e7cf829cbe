//! Text-to-binary transcoding pipeline.
//!
//! # Components
//! - [`Transcoder`] - Streaming read → repack → write state machine
//! - [`transcode`] - Run a transcoder over a reader/writer pair
//! - [`convert`] - In-memory conversion, output returned only on success
//! - [`TranscodeSummary`] - What one run produced

mod summary;
mod transcoder;

pub use summary::TranscodeSummary;
pub use transcoder::{convert, transcode, Transcoder};
