//! Core types for the ECHI decoder library
//!
//! This module defines the values the decoder produces while walking a call history
//! file: the file header, individual decoded field values, whole decoded records and
//! the summary returned once a stream has been exhausted.

use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Errors that can occur during decoding
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("Unsupported ECHI format version: {0}")]
    UnsupportedVersion(u32),

    #[error("File header truncated: expected {expected} bytes, got {0}", expected = FileHeader::LEN)]
    TruncatedHeader(usize),

    #[error("Record truncated: expected {expected} bytes, got {actual}")]
    TruncatedRecord { expected: usize, actual: usize },

    #[error("Invalid timestamp format: {0:?}")]
    InvalidTimestampFormat(String),

    #[error("Invalid format descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Failed to write output: {0}")]
    WriteFailure(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The fixed 8-byte header at the start of every ECHI file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHeader {
    /// Format version tag, selects the record layout
    pub version: u32,
    /// Sequence number of the file as assigned by the CMS
    pub sequence: u32,
}

impl FileHeader {
    /// Size of the header in bytes
    pub const LEN: usize = 8;

    /// Parse a header from the first 8 bytes of a file
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::LEN {
            return Err(DecoderError::TruncatedHeader(bytes.len()));
        }

        Ok(Self {
            version: LittleEndian::read_u32(&bytes[0..4]),
            sequence: LittleEndian::read_u32(&bytes[4..8]),
        })
    }
}

/// A single decoded field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Integer value (unsigned on the wire, possibly reinterpreted as signed)
    Integer(i64),
    /// Epoch seconds rendered through the configured date format
    Timestamp(String),
    /// Fixed-width text with padding stripped, possibly wrapped in delimiters
    ///
    /// Held as the raw record bytes; no character set is assumed.
    Text(Vec<u8>),
    /// One bit of the packed flag word
    Flag(bool),
}

impl FieldValue {
    /// Get the integer value, if this field holds one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the raw text bytes, if this field holds text
    pub fn as_text(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Text(bytes) => Some(bytes),
            FieldValue::Timestamp(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// Output bytes of this field, exactly as they appear in a row
    pub fn to_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            FieldValue::Integer(v) => Cow::Owned(v.to_string().into_bytes()),
            FieldValue::Timestamp(s) => Cow::Borrowed(s.as_bytes()),
            FieldValue::Text(bytes) => Cow::Borrowed(bytes.as_slice()),
            FieldValue::Flag(v) => Cow::Borrowed(if *v { &b"1"[..] } else { &b"0"[..] }),
        }
    }
}

/// Lossy for text that is not valid UTF-8; rows are written through [`FieldValue::to_bytes`]
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Timestamp(s) => f.write_str(s),
            FieldValue::Text(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            FieldValue::Flag(v) => f.write_str(if *v { "1" } else { "0" }),
        }
    }
}

/// One decoded call segment, positionally aligned with the format's column names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub fields: Vec<FieldValue>,
}

impl DecodedRecord {
    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field by position
    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.fields.get(index)
    }

    /// Serialize the record as one comma-joined output row (without line terminator)
    pub fn to_row(&self) -> Vec<u8> {
        let mut row = Vec::new();
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                row.push(b',');
            }
            row.extend_from_slice(&field.to_bytes());
        }
        row
    }
}

/// Totals reported once a stream has been fully decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeSummary {
    /// Header of the decoded file
    pub header: FileHeader,
    /// Record length of the active format
    pub record_length: usize,
    /// Number of records decoded and written
    pub records_processed: u64,
    /// Bytes of an incomplete trailing record that were discarded
    pub trailing_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_parse() {
        let bytes = [2, 0, 0, 0, 7, 0, 0, 0];
        let header = FileHeader::parse(&bytes).unwrap();
        assert_eq!(header, FileHeader { version: 2, sequence: 7 });
    }

    #[test]
    fn test_header_parse_little_endian() {
        let bytes = [0xAA, 0x00, 0x00, 0x00, 0x01, 0x02, 0x00, 0x00];
        let header = FileHeader::parse(&bytes).unwrap();
        assert_eq!(header.version, 170);
        assert_eq!(header.sequence, 0x0201);
    }

    #[test]
    fn test_header_too_short() {
        let result = FileHeader::parse(&[2, 0, 0]);
        assert!(matches!(result, Err(DecoderError::TruncatedHeader(3))));
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Integer(-1).to_string(), "-1");
        assert_eq!(FieldValue::Flag(true).to_string(), "1");
        assert_eq!(FieldValue::Flag(false).to_string(), "0");
        assert_eq!(FieldValue::Text("\"ABC\"".into()).to_string(), "\"ABC\"");
        assert_eq!(FieldValue::Timestamp("2020-01-01".into()).to_string(), "2020-01-01");
    }

    #[test]
    fn test_text_bytes_pass_through() {
        let field = FieldValue::Text(vec![b'A', 0xE9, b'B']);
        assert_eq!(&*field.to_bytes(), &[b'A', 0xE9, b'B'][..]);
        assert_eq!(field.as_text(), Some(&[b'A', 0xE9, b'B'][..]));

        let record = DecodedRecord {
            fields: vec![FieldValue::Integer(-7), field],
        };
        assert_eq!(record.to_row(), [b'-', b'7', b',', b'A', 0xE9, b'B']);
    }

    #[test]
    fn test_record_to_row() {
        let record = DecodedRecord {
            fields: vec![
                FieldValue::Integer(42),
                FieldValue::Flag(true),
                FieldValue::Text("x".into()),
            ],
        };
        assert_eq!(record.to_row(), b"42,1,x");
        assert_eq!(record.len(), 3);
        assert_eq!(record.get(0).and_then(FieldValue::as_i64), Some(42));
    }
}
