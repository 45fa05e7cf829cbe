//! Format constants for the packed B-tree index.

/// Size of the binary header in bytes (`M`, `rootPtr`, `N`).
pub const HEADER_SIZE: usize = 3;

/// Width of a key value field in bytes.
///
/// Key values are opaque: the bytes are copied verbatim, whitespace included.
pub const KV_LEN: usize = 3;

/// Size of a tracker/child pointer in bytes.
pub const TP_SIZE: usize = 1;

/// Size of a data record pointer in bytes.
pub const DRP_SIZE: usize = 1;

/// Smallest accepted integer value.
///
/// -128 fits an `i8` but is rejected so that every accepted value has a
/// positive counterpart.
pub const FIELD_MIN: i8 = -127;

/// Largest accepted integer value.
pub const FIELD_MAX: i8 = 127;

/// Process exit codes, one per error class.
pub mod exit_code {
    /// Conversion completed.
    pub const SUCCESS: u8 = 0;
    /// Header missing, malformed or out of range.
    pub const HEADER: u8 = 2;
    /// A node group field is missing or malformed.
    pub const GROUP: u8 = 3;
    /// A node group integer is outside the accepted range.
    pub const FIELD_RANGE: u8 = 4;
    /// A key value has fewer than [`KV_LEN`](super::KV_LEN) bytes.
    pub const SHORT_KEY_VALUE: u8 = 5;
    /// Packed image could not be decoded (sysexits `EX_DATAERR`).
    pub const DECODE: u8 = 65;
    /// Reading stdin or writing stdout failed (sysexits `EX_IOERR`).
    pub const IO: u8 = 74;
}
