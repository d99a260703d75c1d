//! Delimited row output
//!
//! Rows are comma-joined and newline-terminated. Every failure of the underlying sink
//! surfaces as [`DecoderError::WriteFailure`].

use crate::formats::FormatDescriptor;
use crate::types::{DecodedRecord, DecoderError, Result};
use std::io::Write;

/// Writes decoded records as delimited text rows
pub struct RowWriter<W: Write> {
    writer: W,
    rows_written: u64,
}

impl<W: Write> RowWriter<W> {
    /// Wrap a sink; nothing is written until the first row
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows_written: 0,
        }
    }

    /// Write the column-name header line for a format
    pub fn write_header(&mut self, format: &FormatDescriptor) -> Result<()> {
        writeln!(self.writer, "{}", format.header_row()).map_err(DecoderError::WriteFailure)
    }

    /// Write one record as a data row
    pub fn write_record(&mut self, record: &DecodedRecord) -> Result<()> {
        let mut row = record.to_row();
        row.push(b'\n');
        self.writer
            .write_all(&row)
            .map_err(DecoderError::WriteFailure)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of data rows written so far (header excluded)
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().map_err(DecoderError::WriteFailure)?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats;
    use crate::types::FieldValue;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_header_and_rows() {
        let mut writer = RowWriter::new(Vec::new());
        writer.write_header(formats::lookup(2).unwrap()).unwrap();
        writer
            .write_record(&DecodedRecord {
                fields: vec![FieldValue::Integer(1), FieldValue::Flag(false)],
            })
            .unwrap();
        assert_eq!(writer.rows_written(), 1);

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("CALLID,"));
        assert_eq!(lines[1], "1,0");
    }

    #[test]
    fn test_text_written_unchanged() {
        let mut writer = RowWriter::new(Vec::new());
        writer
            .write_record(&DecodedRecord {
                fields: vec![FieldValue::Text(vec![0xE9, 0x80]), FieldValue::Integer(3)],
            })
            .unwrap();
        assert_eq!(writer.finish().unwrap(), [0xE9, 0x80, b',', b'3', b'\n']);
    }

    #[test]
    fn test_write_failure() {
        let mut writer = RowWriter::new(BrokenPipe);
        let result = writer.write_record(&DecodedRecord { fields: vec![] });
        assert!(matches!(result, Err(DecoderError::WriteFailure(_))));
        assert_eq!(writer.rows_written(), 0);
    }
}
