//! Textual index grammar.
//!
//! The text form is a stream of whitespace-separated integers with
//! fixed-width key values embedded:
//! ```text
//! M rootPtr N
//! TP KV DRP TP KV DRP ... TP      (N times)
//! ```
//! - [`TextScanner`] - Byte-level tokenizer over any `BufRead`

mod scanner;

pub use scanner::{is_separator, ScanError, TextScanner};
