//! ECHI Decoder Library
//!
//! A stateless, reusable library for decoding binary External Call History (ECHI)
//! files into delimited text rows.
//!
//! # Architecture
//!
//! - The file header selects one format descriptor from a static registry
//! - Each fixed-length record is unpacked slot by slot
//! - The packed flag word is expanded into one field per bit
//! - Field corrections repair the switch's duration quirk, render timestamps,
//!   reinterpret signed fields and quote text
//!
//! The library does NOT:
//! - Parse command lines or open files
//! - Install a logger (it only emits through the `log` facade)
//! - Encode records back to binary
//!
//! # Example Usage
//!
//! ```no_run
//! use echi_decoder::{Decoder, DecoderConfig};
//! use std::fs::File;
//! use std::io;
//!
//! let config = DecoderConfig::new()
//!     .with_header(true)
//!     .with_date_format("%Y-%m-%d %H:%M:%S");
//! let decoder = Decoder::new(config).unwrap();
//!
//! let input = File::open("chr0042").unwrap();
//! let summary = decoder.decode_to_writer(input, io::stdout().lock()).unwrap();
//! eprintln!("{} records", summary.records_processed);
//! ```

// Public modules
pub mod config;
pub mod corrections;
pub mod decoder;
pub mod formats;
pub mod output;
pub mod record_decoder;
pub mod types;

// Re-export main types for convenience
pub use config::DecoderConfig;
pub use decoder::{Decoder, RecordStream, StreamState};
pub use formats::{BitField, FormatDescriptor, Slot};
pub use output::RowWriter;
pub use record_decoder::RecordDecoder;
pub use types::{DecodeSummary, DecodedRecord, DecoderError, FieldValue, FileHeader, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: ensure we can create a decoder
        let decoder = Decoder::new(DecoderConfig::new()).unwrap();
        assert!(!decoder.config().header);
        assert_eq!(formats::supported_versions().len(), 9);
    }
}
