//! Byte-level scanner for the textual index grammar.

use std::io::{self, BufRead, ErrorKind};

use thiserror::Error;

use crate::common::config::{FIELD_MAX, FIELD_MIN, KV_LEN};

/// Failure to read one token.
///
/// Scanner errors carry no position; the transcoder attaches the header or
/// group coordinates when it converts them into [`crate::Error`].
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unexpected end of input")]
    Eof,

    #[error("unexpected byte 0x{found:02x}")]
    Malformed { found: u8 },

    #[error("value {literal} outside [-127, 127]")]
    OutOfRange { literal: String },

    /// Only `available` bytes remained for a key value.
    #[error("key value needs 3 bytes, {available} available")]
    ShortKey { available: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Separator bytes: the C `isspace` set.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab (0x0B).
#[inline]
pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Tokenizer reading integers and fixed-width key values.
///
/// # Token Rules
/// - Integers: separators skipped, then an optional `+`/`-` sign and one or
///   more decimal digits. The token ends at the first non-digit byte, which
///   stays in the stream.
/// - Key values: separators skipped, then exactly [`KV_LEN`] raw bytes. The
///   bytes are not interpreted, so a separator inside a key is copied as-is.
///
/// # Example
/// ```
/// use btree_txt2bin::text::TextScanner;
///
/// let mut scanner = TextScanner::new(&b" 5abc -3"[..]);
/// assert_eq!(scanner.read_i8().unwrap(), 5);
/// assert_eq!(&scanner.read_key().unwrap(), b"abc");
/// assert_eq!(scanner.read_i8().unwrap(), -3);
/// ```
pub struct TextScanner<R> {
    reader: R,
    /// Bytes consumed so far.
    offset: u64,
}

impl<R: BufRead> TextScanner<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader, offset: 0 }
    }

    /// Number of bytes consumed from the reader.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Look at the next byte without consuming it.
    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Consume the byte returned by the last `peek`.
    #[inline]
    fn bump(&mut self) {
        self.reader.consume(1);
        self.offset += 1;
    }

    /// Skip any run of separator bytes.
    pub fn skip_whitespace(&mut self) -> io::Result<()> {
        while let Some(byte) = self.peek()? {
            if !is_separator(byte) {
                break;
            }
            self.bump();
        }
        Ok(())
    }

    /// Check whether any non-separator byte is left.
    pub fn has_remaining(&mut self) -> io::Result<bool> {
        self.skip_whitespace()?;
        Ok(self.peek()?.is_some())
    }

    /// Read a signed integer in [-127, 127].
    ///
    /// # Errors
    /// - [`ScanError::Eof`] if the input ends before a digit
    /// - [`ScanError::Malformed`] if the token does not start with a digit
    /// - [`ScanError::OutOfRange`] if the value is outside [-127, 127]
    pub fn read_i8(&mut self) -> Result<i8, ScanError> {
        self.skip_whitespace()?;

        let mut literal = String::new();
        let negative = match self.peek()? {
            None => return Err(ScanError::Eof),
            Some(sign @ (b'-' | b'+')) => {
                self.bump();
                literal.push(sign as char);
                sign == b'-'
            }
            Some(_) => false,
        };

        // Saturates above the accepted range.
        let mut magnitude: u32 = 0;
        let mut digits = 0usize;
        while let Some(byte) = self.peek()? {
            if !byte.is_ascii_digit() {
                break;
            }
            self.bump();
            literal.push(byte as char);
            digits += 1;
            magnitude = (magnitude * 10 + u32::from(byte - b'0')).min(1_000);
        }

        if digits == 0 {
            return match self.peek()? {
                None => Err(ScanError::Eof),
                Some(found) => Err(ScanError::Malformed { found }),
            };
        }

        let value = if negative {
            -(magnitude as i32)
        } else {
            magnitude as i32
        };
        if value < i32::from(FIELD_MIN) || value > i32::from(FIELD_MAX) {
            return Err(ScanError::OutOfRange { literal });
        }
        Ok(value as i8)
    }

    /// Read one key value: exactly [`KV_LEN`] raw bytes after separators.
    ///
    /// # Errors
    /// Returns [`ScanError::ShortKey`] if the input ends first.
    pub fn read_key(&mut self) -> Result<[u8; KV_LEN], ScanError> {
        self.skip_whitespace()?;

        let mut key = [0u8; KV_LEN];
        for (available, slot) in key.iter_mut().enumerate() {
            match self.peek()? {
                Some(byte) => {
                    *slot = byte;
                    self.bump();
                }
                None => return Err(ScanError::ShortKey { available }),
            }
        }
        Ok(key)
    }
}
