//! Decoder configuration types
//!
//! The decoder never reads process-wide settings. Everything that affects how records
//! are rendered is carried in a [`DecoderConfig`] value handed to the decoder.

use crate::types::{DecoderError, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Configuration for the decoder library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Emit per-record diagnostics through the `log` facade
    #[serde(default)]
    pub verbose: bool,

    /// Write a header row of column names before the first record
    #[serde(default)]
    pub header: bool,

    /// strftime-style format for timestamp fields (empty = raw epoch seconds)
    #[serde(default)]
    pub date_format: String,

    /// Delimiter wrapped around text fields (empty = no quoting)
    #[serde(default = "default_delimiter")]
    pub string_delimiter: String,
}

fn default_delimiter() -> String {
    "\"".to_string()
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            header: false,
            date_format: String::new(),
            string_delimiter: default_delimiter(),
        }
    }
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: enable or disable per-record diagnostics
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    /// Builder method: enable or disable the header row
    pub fn with_header(mut self, enabled: bool) -> Self {
        self.header = enabled;
        self
    }

    /// Builder method: set the timestamp format
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Builder method: set the text field delimiter
    pub fn with_string_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.string_delimiter = delimiter.into();
        self
    }

    /// True if timestamp fields should be rendered as calendar time
    pub fn formats_timestamps(&self) -> bool {
        !self.date_format.is_empty()
    }

    /// Reject settings that would fail while decoding
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(DecoderError::InvalidTimestampFormat(self.date_format.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_config_builder() {
        let config = DecoderConfig::new()
            .with_verbose(true)
            .with_header(true)
            .with_date_format("%Y-%m-%d %H:%M:%S")
            .with_string_delimiter("'");

        assert!(config.verbose);
        assert!(config.header);
        assert!(config.formats_timestamps());
        assert_eq!(config.string_delimiter, "'");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::new();
        assert!(!config.verbose);
        assert!(!config.header);
        assert!(!config.formats_timestamps());
        assert_eq!(config.string_delimiter, "\"");
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let config = DecoderConfig::new().with_date_format("%Y-%Q");
        assert!(matches!(
            config.validate(),
            Err(DecoderError::InvalidTimestampFormat(_))
        ));
    }
}
