//! Error types for the transcoder.

use thiserror::Error;

use super::config::exit_code;
use super::field::{Field, HeaderField};

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised while converting or decoding an index.
///
/// Every error is fatal to the conversion: the first one stops the pass.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on the input or output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header value missing, malformed or out of range.
    #[error("header {field}: {fault}")]
    HeaderParse {
        field: HeaderField,
        fault: HeaderFault,
    },

    /// A field of a node group is missing or malformed.
    #[error("group {group}, {field}: {fault}")]
    GroupParse {
        group: usize,
        field: Field,
        fault: GroupFault,
    },

    /// A node group integer decodes outside [-127, 127].
    #[error("group {group}, {field}: value {literal} outside [-127, 127]")]
    FieldRange {
        group: usize,
        field: Field,
        literal: String,
    },

    /// Fewer than three bytes were left for a key value.
    #[error("group {group}, {field}: key value needs 3 bytes, {available} available")]
    ShortKeyValue {
        group: usize,
        field: Field,
        available: usize,
    },

    /// Packed image is shorter than its header declares.
    #[error("packed index truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Packed image is longer than its header declares.
    #[error("packed index has trailing bytes: expected {expected} bytes, found {actual}")]
    TrailingBytes { expected: usize, actual: usize },
}

impl Error {
    /// Process exit code for this error's class.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io(_) => exit_code::IO,
            Error::HeaderParse { .. } => exit_code::HEADER,
            Error::GroupParse { .. } => exit_code::GROUP,
            Error::FieldRange { .. } => exit_code::FIELD_RANGE,
            Error::ShortKeyValue { .. } => exit_code::SHORT_KEY_VALUE,
            Error::Truncated { .. } | Error::TrailingBytes { .. } => exit_code::DECODE,
        }
    }
}

/// Why a header value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderFault {
    #[error("missing")]
    Missing,

    #[error("expected an integer, found {}", display_byte(.found))]
    Malformed { found: u8 },

    #[error("value {literal} outside [-127, 127]")]
    OutOfRange { literal: String },

    /// `M` must be at least 1.
    #[error("fanout {0} must be at least 1")]
    InvalidFanout(i8),

    /// `N` must not be negative.
    #[error("node count {0} must not be negative")]
    NegativeCount(i8),
}

/// Why a node group field could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupFault {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("expected an integer, found {}", display_byte(.found))]
    Malformed { found: u8 },
}

fn display_byte(byte: &u8) -> String {
    format!("'{}'", std::ascii::escape_default(*byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::GroupParse {
            group: 1,
            field: Field::Tp(0),
            fault: GroupFault::UnexpectedEof,
        };
        assert_eq!(format!("{}", err), "group 1, TP[0]: unexpected end of input");

        let err = Error::HeaderParse {
            field: HeaderField::Fanout,
            fault: HeaderFault::InvalidFanout(0),
        };
        assert_eq!(format!("{}", err), "header M: fanout 0 must be at least 1");
    }

    #[test]
    fn test_malformed_escapes_byte() {
        let fault = GroupFault::Malformed { found: b'\n' };
        assert_eq!(format!("{}", fault), "expected an integer, found '\\n'");

        let fault = HeaderFault::Malformed { found: b'x' };
        assert_eq!(format!("{}", fault), "expected an integer, found 'x'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
        assert_eq!(err.exit_code(), exit_code::IO);
    }

    #[test]
    fn test_exit_code_per_class() {
        let range = Error::FieldRange {
            group: 0,
            field: Field::Drp(0),
            literal: "200".to_string(),
        };
        let short = Error::ShortKeyValue {
            group: 0,
            field: Field::Kv(0),
            available: 2,
        };
        assert_eq!(range.exit_code(), exit_code::FIELD_RANGE);
        assert_eq!(short.exit_code(), exit_code::SHORT_KEY_VALUE);
    }
}
