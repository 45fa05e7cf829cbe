//! Transcoder - streams the text form into the packed form.
//!
//! The [`Transcoder`] drives one linear pass:
//! - Read and validate the header, then write it
//! - For each of the `N` node groups, read `M - 1` `(TP, KV, DRP)` triplets
//!   and one trailing TP into a reused [`NodeGroup`], then write it
//!
//! Output order is the input order; nothing is reordered across groups.

use std::io::{BufRead, Write};

use tracing::{debug, trace, warn};

use crate::binary::{IndexHeader, NodeGroup};
use crate::common::{Error, Field, GroupFault, HeaderFault, HeaderField, Result};
use crate::text::{ScanError, TextScanner};

use super::summary::TranscodeSummary;

/// Streaming text-to-binary converter.
///
/// # Partial Output
/// The header is fully validated before the first byte is written. After
/// that each node group is written as soon as it is complete, so a failure
/// in group `i` leaves the header and groups `0..i` in the writer. Use
/// [`convert`] when the output must be all-or-nothing.
///
/// # Example
/// ```
/// use btree_txt2bin::Transcoder;
///
/// let mut transcoder = Transcoder::new(&b"2 0 1\n5 abc -3 7\n"[..], Vec::<u8>::new());
/// transcoder.run().unwrap();
/// assert_eq!(transcoder.into_writer(), vec![2, 0, 1, 5, 7, b'a', b'b', b'c', 0xfd]);
/// ```
pub struct Transcoder<R, W> {
    scanner: TextScanner<R>,
    writer: W,
}

impl<R: BufRead, W: Write> Transcoder<R, W> {
    /// Create a transcoder over a text reader and a binary writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            scanner: TextScanner::new(reader),
            writer,
        }
    }

    /// Recover the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Convert the whole input.
    ///
    /// # Errors
    /// Stops at the first malformed, missing or out-of-range field, and on
    /// any I/O error. See [`Error`] for the classes.
    pub fn run(&mut self) -> Result<TranscodeSummary> {
        let header = self.read_header()?;
        debug!(
            m = header.fanout().get(),
            root_ptr = header.root_ptr(),
            n = header.node_count(),
            "read index header"
        );

        self.writer.write_all(&header.to_bytes())?;
        let mut summary = TranscodeSummary::new(header);

        let mut group = NodeGroup::new(header.fanout());
        for index in 0..header.node_count() {
            self.read_group(index, &mut group)?;
            self.writer.write_all(group.as_slice())?;
            summary.record_group(group.as_slice().len());
            trace!(group = index, "packed node group");
        }
        self.writer.flush()?;

        summary.trailing_input = self.scanner.has_remaining()?;
        if summary.trailing_input {
            warn!(
                offset = self.scanner.offset(),
                "ignoring input after the last node group"
            );
        }
        Ok(summary)
    }

    fn read_header(&mut self) -> Result<IndexHeader> {
        let m = self.read_header_field(HeaderField::Fanout)?;
        let root_ptr = self.read_header_field(HeaderField::RootPtr)?;
        let n = self.read_header_field(HeaderField::NodeCount)?;
        IndexHeader::new(m, root_ptr, n)
    }

    fn read_header_field(&mut self, field: HeaderField) -> Result<i8> {
        self.scanner
            .read_i8()
            .map_err(|e| header_error(field, e))
    }

    /// Fill `group` with node group `index`.
    ///
    /// Every slot is overwritten, so the buffer needs no reset between groups.
    fn read_group(&mut self, index: usize, group: &mut NodeGroup) -> Result<()> {
        let keys = group.fanout().key_count();

        for slot in 0..keys {
            let tp = self.read_group_int(index, Field::Tp(slot))?;
            let key = self
                .scanner
                .read_key()
                .map_err(|e| group_error(index, Field::Kv(slot), e))?;
            let drp = self.read_group_int(index, Field::Drp(slot))?;

            group.set_tp(slot, tp);
            group.set_key(slot, key);
            group.set_drp(slot, drp);
        }

        let tp = self.read_group_int(index, Field::Tp(keys))?;
        group.set_tp(keys, tp);
        Ok(())
    }

    fn read_group_int(&mut self, index: usize, field: Field) -> Result<i8> {
        self.scanner
            .read_i8()
            .map_err(|e| group_error(index, field, e))
    }
}

/// Transcode `reader` into `writer` in one streaming pass.
///
/// On error, `writer` may already hold the header and some whole groups.
pub fn transcode<R: BufRead, W: Write>(reader: R, writer: W) -> Result<TranscodeSummary> {
    Transcoder::new(reader, writer).run()
}

/// Convert a complete text index held in memory.
///
/// Returns the packed bytes only if the whole input converted.
///
/// # Example
/// ```
/// let out = btree_txt2bin::convert(b"2 0 1\n5 abc -3 7\n").unwrap();
/// assert_eq!(out, [2, 0, 1, 5, 7, b'a', b'b', b'c', (-3i8) as u8]);
/// ```
pub fn convert(input: &[u8]) -> Result<Vec<u8>> {
    let mut transcoder = Transcoder::new(input, Vec::<u8>::new());
    transcoder.run()?;
    Ok(transcoder.into_writer())
}

fn header_error(field: HeaderField, err: ScanError) -> Error {
    let fault = match err {
        ScanError::Io(e) => return Error::Io(e),
        ScanError::Eof | ScanError::ShortKey { .. } => HeaderFault::Missing,
        ScanError::Malformed { found } => HeaderFault::Malformed { found },
        ScanError::OutOfRange { literal } => HeaderFault::OutOfRange { literal },
    };
    Error::HeaderParse { field, fault }
}

fn group_error(group: usize, field: Field, err: ScanError) -> Error {
    match err {
        ScanError::Io(e) => Error::Io(e),
        ScanError::Eof => Error::GroupParse {
            group,
            field,
            fault: GroupFault::UnexpectedEof,
        },
        ScanError::Malformed { found } => Error::GroupParse {
            group,
            field,
            fault: GroupFault::Malformed { found },
        },
        ScanError::OutOfRange { literal } => Error::FieldRange {
            group,
            field,
            literal,
        },
        ScanError::ShortKey { available } => Error::ShortKeyValue {
            group,
            field,
            available,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_single_group() {
        let out = convert(b"2 0 1\n5 abc -3 7\n").unwrap();
        assert_eq!(out, vec![2, 0, 1, 5, 7, b'a', b'b', b'c', 0xfd]);
    }

    #[test]
    fn test_empty_index() {
        assert_eq!(convert(b"5 0 0").unwrap(), vec![5, 0, 0]);
    }

    #[test]
    fn test_newlines_insignificant() {
        let compact = convert(b"3 1 1 1 aaa 2 3 bbb 4 5").unwrap();
        let spread = convert(b"3\n1\n1\n1\naaa\n2\n3\nbbb\n4\n5\n").unwrap();
        assert_eq!(compact, spread);
        assert_eq!(compact.len(), 3 + 11);
    }

    #[test]
    fn test_key_adjacent_to_integer() {
        let out = convert(b"2 0 1 5abc-3 7").unwrap();
        assert_eq!(out, vec![2, 0, 1, 5, 7, b'a', b'b', b'c', 0xfd]);
    }

    #[test]
    fn test_key_with_interior_space() {
        let out = convert(b"2 0 1 1 a c 2 3").unwrap();
        assert_eq!(&out[5..8], b"a c");
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            convert(b"2 0"),
            Err(Error::HeaderParse {
                field: HeaderField::NodeCount,
                fault: HeaderFault::Missing,
            })
        ));
        assert!(matches!(
            convert(b""),
            Err(Error::HeaderParse {
                field: HeaderField::Fanout,
                fault: HeaderFault::Missing,
            })
        ));
    }

    #[test]
    fn test_header_out_of_range() {
        assert!(matches!(
            convert(b"200 0 0"),
            Err(Error::HeaderParse {
                field: HeaderField::Fanout,
                fault: HeaderFault::OutOfRange { .. },
            })
        ));
    }

    #[test]
    fn test_missing_trailing_tp() {
        assert!(matches!(
            convert(b"2 0 1 5 abc -3"),
            Err(Error::GroupParse {
                group: 0,
                field: Field::Tp(1),
                fault: GroupFault::UnexpectedEof,
            })
        ));
    }

    #[test]
    fn test_group_field_out_of_range() {
        match convert(b"2 0 1 5 abc -128 7") {
            Err(Error::FieldRange {
                group: 0,
                field: Field::Drp(0),
                literal,
            }) => assert_eq!(literal, "-128"),
            other => panic!("expected FieldRange, got {:?}", other),
        }
    }

    #[test]
    fn test_short_key_value() {
        assert!(matches!(
            convert(b"2 0 1 5 ab"),
            Err(Error::ShortKeyValue {
                group: 0,
                field: Field::Kv(0),
                available: 2,
            })
        ));
    }

    #[test]
    fn test_header_written_before_failing_group() {
        let mut out: Vec<u8> = Vec::new();
        let err = transcode(&b"1 0 3 4 5"[..], &mut out).unwrap_err();
        assert!(matches!(
            err,
            Error::GroupParse {
                group: 2,
                field: Field::Tp(0),
                ..
            }
        ));
        assert_eq!(out, vec![1, 0, 3, 4, 5]);
    }

    #[test]
    fn test_nothing_written_on_bad_header() {
        let mut out: Vec<u8> = Vec::new();
        assert!(transcode(&b"0 0 0"[..], &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_trailing_input_reported() {
        let mut out: Vec<u8> = Vec::new();
        let summary = transcode(&b"1 0 1 9 extra"[..], &mut out).unwrap();
        assert!(summary.trailing_input);
        assert_eq!(out, vec![1, 0, 1, 9]);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_propagates() {
        let err = transcode(&b"1 0 0"[..], FailingWriter).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
