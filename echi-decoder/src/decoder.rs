//! Main decoder API
//!
//! The [`Decoder`] is the entry point of the library. It owns the rendering
//! configuration and turns a byte stream into decoded records, either lazily through a
//! [`RecordStream`] or all at once into a writer.

use crate::config::DecoderConfig;
use crate::formats::{self, FormatDescriptor};
use crate::output::RowWriter;
use crate::record_decoder::RecordDecoder;
use crate::types::{DecodeSummary, DecodedRecord, DecoderError, FileHeader, Result};
use std::io::{self, Read, Write};

/// The main decoder struct - entry point for all decoding operations
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder, rejecting invalid configuration up front
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Rendering configuration this decoder was built with
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Start decoding a stream; the header is read on first use
    ///
    /// # Example
    /// ```no_run
    /// use echi_decoder::{Decoder, DecoderConfig};
    /// use std::fs::File;
    ///
    /// let decoder = Decoder::new(DecoderConfig::new()).unwrap();
    /// let file = File::open("chr1234").unwrap();
    /// for record in decoder.stream(file) {
    ///     println!("{}", String::from_utf8_lossy(&record.unwrap().to_row()));
    /// }
    /// ```
    pub fn stream<R: Read>(&self, reader: R) -> RecordStream<'_, R> {
        RecordStream::new(reader, &self.config)
    }

    /// Decode a whole stream into delimited rows
    ///
    /// Writes the optional header row, then one row per complete record. A short
    /// trailing chunk ends the stream without error. Nothing is written if the header
    /// fails to resolve.
    pub fn decode_to_writer<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<DecodeSummary> {
        let mut stream = self.stream(reader);
        stream.read_header()?;
        stream.write_rows(writer)
    }
}

/// Decoding state of a [`RecordStream`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// The 8-byte file header has not been read yet
    AwaitingHeader,
    /// The header resolved to a format; records are being read
    Streaming,
    /// Input exhausted or a fatal error occurred
    Done,
}

/// Iterator over the records of one ECHI stream
pub struct RecordStream<'a, R: Read> {
    reader: R,
    config: &'a DecoderConfig,
    state: StreamState,
    header: Option<FileHeader>,
    format: Option<&'static FormatDescriptor>,
    header_bytes: usize,
    buffer: Vec<u8>,
    processed: u64,
    trailing_bytes: usize,
}

impl<'a, R: Read> RecordStream<'a, R> {
    /// Wrap a reader positioned at the start of an ECHI file
    pub fn new(reader: R, config: &'a DecoderConfig) -> Self {
        Self {
            reader,
            config,
            state: StreamState::AwaitingHeader,
            header: None,
            format: None,
            header_bytes: 0,
            buffer: Vec::new(),
            processed: 0,
            trailing_bytes: 0,
        }
    }

    /// Read the file header and resolve its format
    ///
    /// Calling this again after the header was read returns the resolved format. Once
    /// the header has failed the stream is `Done` and the same failure is reported
    /// without touching the reader again.
    pub fn read_header(&mut self) -> Result<&'static FormatDescriptor> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        if self.state == StreamState::Done {
            return Err(self.header_failure());
        }

        match self.resolve_header() {
            Ok(format) => {
                self.state = StreamState::Streaming;
                Ok(format)
            }
            Err(e) => {
                self.state = StreamState::Done;
                Err(e)
            }
        }
    }

    fn resolve_header(&mut self) -> Result<&'static FormatDescriptor> {
        let mut bytes = [0u8; FileHeader::LEN];
        let read = read_full(&mut self.reader, &mut bytes)?;
        self.header_bytes = read;
        let header = FileHeader::parse(&bytes[..read])?;
        self.header = Some(header);

        let format = formats::lookup(header.version)?;
        log::info!(
            "ECHI file version {} (sequence {}), {} byte records",
            header.version,
            header.sequence,
            format.record_length
        );

        self.format = Some(format);
        self.buffer = vec![0u8; format.record_length];
        Ok(format)
    }

    fn header_failure(&self) -> DecoderError {
        match self.header {
            Some(header) => DecoderError::UnsupportedVersion(header.version),
            None => DecoderError::TruncatedHeader(self.header_bytes),
        }
    }

    /// Current position in the `AwaitingHeader -> Streaming -> Done` sequence
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// File header, once read
    pub fn header(&self) -> Option<FileHeader> {
        self.header
    }

    /// Active format, once the header has been resolved
    pub fn format(&self) -> Option<&'static FormatDescriptor> {
        self.format
    }

    /// Number of records decoded so far
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Totals for the stream; reads the header if that has not happened yet
    pub fn summary(&mut self) -> Result<DecodeSummary> {
        let format = self.read_header()?;
        let header = self.header.unwrap_or(FileHeader {
            version: format.version,
            sequence: 0,
        });
        Ok(DecodeSummary {
            header,
            record_length: format.record_length,
            records_processed: self.processed,
            trailing_bytes: self.trailing_bytes,
        })
    }

    /// Write the optional header row and every remaining record, then flush
    pub fn write_rows<W: Write>(&mut self, writer: W) -> Result<DecodeSummary> {
        let format = self.read_header()?;

        let mut rows = RowWriter::new(writer);
        if self.config.header {
            rows.write_header(format)?;
        }

        for record in &mut *self {
            rows.write_record(&record?)?;
        }
        rows.finish()?;

        let summary = self.summary()?;
        log::info!(
            "Decoded {} records (version {}, sequence {})",
            summary.records_processed,
            summary.header.version,
            summary.header.sequence
        );
        Ok(summary)
    }

    fn next_record(&mut self, format: &'static FormatDescriptor) -> Result<Option<DecodedRecord>> {
        let read = read_full(&mut self.reader, &mut self.buffer)?;
        if read < format.record_length {
            if read > 0 {
                log::warn!(
                    "Discarding {} trailing bytes (incomplete {} byte record)",
                    read,
                    format.record_length
                );
            }
            self.trailing_bytes = read;
            self.state = StreamState::Done;
            return Ok(None);
        }

        let record = RecordDecoder::decode(format, &self.buffer, self.config)?;
        self.processed += 1;

        if self.config.verbose {
            log::debug!(
                "Record {}: callid={} segment={}",
                self.processed,
                record.get(0).map(ToString::to_string).unwrap_or_default(),
                record
                    .get(format.segment_index)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            );
        }

        Ok(Some(record))
    }
}

impl<'a, R: Read> Iterator for RecordStream<'a, R> {
    type Item = Result<DecodedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let format = match self.state {
            StreamState::Done => return None,
            StreamState::AwaitingHeader => match self.read_header() {
                Ok(format) => format,
                Err(e) => return Some(Err(e)),
            },
            StreamState::Streaming => self.format?,
        };

        match self.next_record(format) {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.state = StreamState::Done;
                Some(Err(e))
            }
        }
    }
}

/// Fill `buf` from `reader`, stopping early only at end of input
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn header(version: u32, sequence: u32) -> Vec<u8> {
        let mut bytes = version.to_le_bytes().to_vec();
        bytes.extend_from_slice(&sequence.to_le_bytes());
        bytes
    }

    /// Reader that hands out one byte per call
    struct Trickle(Cursor<Vec<u8>>);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let len = buf.len().min(1);
            self.0.read(&mut buf[..len])
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DecoderConfig::new().with_date_format("%Q");
        assert!(Decoder::new(config).is_err());
    }

    #[test]
    fn test_state_transitions() {
        let decoder = Decoder::new(DecoderConfig::new()).unwrap();
        let mut input = header(2, 7);
        input.extend(vec![0u8; 189]);

        let mut stream = decoder.stream(Cursor::new(input));
        assert_eq!(stream.state(), StreamState::AwaitingHeader);

        stream.read_header().unwrap();
        assert_eq!(stream.state(), StreamState::Streaming);
        assert_eq!(stream.header(), Some(FileHeader { version: 2, sequence: 7 }));

        assert!(stream.next().is_some());
        assert!(stream.next().is_none());
        assert_eq!(stream.state(), StreamState::Done);
        assert!(stream.next().is_none());
        assert_eq!(stream.processed(), 1);
    }

    #[test]
    fn test_unsupported_version() {
        let decoder = Decoder::new(DecoderConfig::new()).unwrap();
        let mut input = header(99, 1);
        input.extend(vec![0u8; 500]);

        let mut stream = decoder.stream(Cursor::new(input));
        assert!(matches!(stream.next(), Some(Err(DecoderError::UnsupportedVersion(99)))));
        assert_eq!(stream.state(), StreamState::Done);
        assert!(stream.next().is_none());
        assert_eq!(stream.processed(), 0);
    }

    #[test]
    fn test_done_after_header_failure_is_terminal() {
        let decoder = Decoder::new(DecoderConfig::new()).unwrap();
        let mut input = header(99, 1);
        input.extend(header(2, 5));
        input.extend(vec![0u8; 189]);

        let mut stream = decoder.stream(Cursor::new(input));
        assert!(matches!(stream.next(), Some(Err(DecoderError::UnsupportedVersion(99)))));
        assert_eq!(stream.state(), StreamState::Done);

        assert!(matches!(stream.read_header(), Err(DecoderError::UnsupportedVersion(99))));
        assert!(matches!(stream.summary(), Err(DecoderError::UnsupportedVersion(99))));
        assert_eq!(stream.state(), StreamState::Done);
        assert!(stream.format().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_short_header_not_reread() {
        let decoder = Decoder::new(DecoderConfig::new()).unwrap();
        let mut stream = decoder.stream(Trickle(Cursor::new(vec![2, 0, 0])));
        assert!(matches!(stream.read_header(), Err(DecoderError::TruncatedHeader(3))));
        assert!(matches!(stream.read_header(), Err(DecoderError::TruncatedHeader(3))));
        assert_eq!(stream.state(), StreamState::Done);
    }

    #[test]
    fn test_empty_input() {
        let decoder = Decoder::new(DecoderConfig::new()).unwrap();
        let result = decoder.decode_to_writer(Cursor::new(Vec::new()), Vec::new());
        assert!(matches!(result, Err(DecoderError::TruncatedHeader(0))));
    }

    #[test]
    fn test_short_reads_are_reassembled() {
        let decoder = Decoder::new(DecoderConfig::new()).unwrap();
        let mut input = header(3, 1);
        input.extend(vec![0u8; 210 * 2]);

        let stream = decoder.stream(Trickle(Cursor::new(input)));
        let records: Vec<_> = stream.collect::<Result<_>>().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_trailing_partial_record_discarded() {
        let decoder = Decoder::new(DecoderConfig::new()).unwrap();
        let mut input = header(2, 1);
        input.extend(vec![0u8; 189 + 50]);

        let mut out = Vec::new();
        let summary = decoder.decode_to_writer(Cursor::new(input), &mut out).unwrap();
        assert_eq!(summary.records_processed, 1);
        assert_eq!(summary.trailing_bytes, 50);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
