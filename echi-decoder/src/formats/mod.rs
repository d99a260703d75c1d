//! ECHI format registry
//!
//! Every historical revision of the external call history record is described by one
//! immutable [`FormatDescriptor`]. The registry maps the version tag found in the file
//! header to its descriptor; nothing in it is mutated at runtime.

use crate::types::{DecoderError, Result};
use serde::Serialize;
use std::ops::{Range, RangeInclusive};

mod current;
mod legacy;

/// One typed slot of a record layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    /// Unsigned 32-bit little-endian integer
    U32,
    /// Unsigned 16-bit little-endian integer
    U16,
    /// Unsigned 8-bit integer
    U8,
    /// Raw bytes that produce no field
    Skip(usize),
    /// Fixed-width text, right-padded with spaces or NULs
    Text(usize),
}

impl Slot {
    /// Number of bytes this slot occupies in the record
    pub const fn width(&self) -> usize {
        match self {
            Slot::U32 => 4,
            Slot::U16 => 2,
            Slot::U8 => 1,
            Slot::Skip(n) | Slot::Text(n) => *n,
        }
    }

    /// True if this slot yields a field value
    pub const fn produces_value(&self) -> bool {
        !matches!(self, Slot::Skip(_))
    }
}

/// Packed flag word location and its splice point in the field sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitField {
    /// Byte offset of the first flag byte within the record
    pub byte_offset: usize,
    /// Number of flags, read MSB-first
    pub bit_count: usize,
    /// Field position replaced by the expanded flags
    pub splice_index: usize,
}

/// Complete description of one ECHI record format revision
#[derive(Debug, Serialize)]
pub struct FormatDescriptor {
    /// Version tag as found in the file header
    pub version: u32,
    /// Exact byte length of every record
    pub record_length: usize,
    /// Slot layout; slot widths sum to `record_length`
    pub layout: &'static [Slot],
    /// Output column names, one per decoded field
    pub column_names: &'static [&'static str],
    /// Packed flag word location
    pub bit_field: BitField,
    /// Post-splice positions holding signed 16-bit values
    pub signed_indices: &'static [usize],
    /// Position of the SEGMENT field (diagnostics only)
    pub segment_index: usize,
    /// Position of the local SEGSTOP field used to repair SEGSTART
    pub segstop_index: usize,
    /// Positions holding epoch seconds
    pub timestamp_fields: Range<usize>,
    /// First position of the text block
    pub string_start: usize,
    /// Last position of the text block; `None` runs to the end of the record
    pub string_end: Option<usize>,
}

/// Position of the DURATION field in every format
pub const DURATION_INDEX: usize = 5;

/// Position of the (local) SEGSTART field in every format
pub const SEGSTART_INDEX: usize = 6;

impl FormatDescriptor {
    /// Number of fields the layout yields before the flag word is expanded
    pub fn layout_field_count(&self) -> usize {
        self.layout.iter().filter(|slot| slot.produces_value()).count()
    }

    /// Number of fields in a fully decoded record
    pub fn field_count(&self) -> usize {
        self.column_names.len()
    }

    /// Inclusive range of positions that must be delimiter-quoted
    pub fn string_range(&self) -> RangeInclusive<usize> {
        let end = self
            .string_end
            .unwrap_or_else(|| self.field_count().saturating_sub(1));
        self.string_start..=end
    }

    /// Header row: comma-joined column names
    pub fn header_row(&self) -> String {
        self.column_names.join(",")
    }

    /// Check the descriptor against the structural invariants of the format tables
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| {
            Err(DecoderError::InvalidDescriptor(format!(
                "version {}: {}",
                self.version, msg
            )))
        };

        let width: usize = self.layout.iter().map(Slot::width).sum();
        if width != self.record_length {
            return invalid(format!(
                "slot widths sum to {} but record length is {}",
                width, self.record_length
            ));
        }

        let layout_fields = self.layout_field_count();
        if self.bit_field.bit_count == 0 || self.bit_field.splice_index >= layout_fields {
            return invalid(format!(
                "bit field splice index {} outside {} layout fields",
                self.bit_field.splice_index, layout_fields
            ));
        }

        let expected = layout_fields + self.bit_field.bit_count - 1;
        if expected != self.field_count() {
            return invalid(format!(
                "{} column names but {} decoded fields",
                self.field_count(),
                expected
            ));
        }

        let bit_bytes = self.bit_field.bit_count.div_ceil(8);
        if self.bit_field.byte_offset + bit_bytes > self.record_length {
            return invalid(format!(
                "bit field at byte {} overruns the record",
                self.bit_field.byte_offset
            ));
        }

        let fields = self.field_count();
        let indices = self
            .signed_indices
            .iter()
            .copied()
            .chain([self.segment_index, self.segstop_index, DURATION_INDEX, SEGSTART_INDEX]);
        for index in indices {
            if index >= fields {
                return invalid(format!("field index {} out of range", index));
            }
        }

        if self.timestamp_fields.end > fields {
            return invalid(format!(
                "timestamp range {:?} out of range",
                self.timestamp_fields
            ));
        }

        let strings = self.string_range();
        if strings.start() > strings.end() || *strings.end() >= fields {
            return invalid(format!("string range {:?} out of range", strings));
        }

        Ok(())
    }
}

static FORMATS: [&FormatDescriptor; 9] = [
    &legacy::V2,
    &legacy::V3,
    &legacy::V4,
    &legacy::V5,
    &legacy::V11,
    &legacy::V12,
    &current::V16,
    &current::V163,
    &current::V170,
];

/// Look up the descriptor for a version tag
pub fn lookup(version: u32) -> Result<&'static FormatDescriptor> {
    FORMATS
        .iter()
        .copied()
        .find(|format| format.version == version)
        .ok_or(DecoderError::UnsupportedVersion(version))
}

/// All registered descriptors, ordered by version
pub fn all() -> impl Iterator<Item = &'static FormatDescriptor> {
    FORMATS.iter().copied()
}

/// All supported version tags
pub fn supported_versions() -> Vec<u32> {
    all().map(|format| format.version).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_LENGTHS: [(u32, usize); 9] = [
        (2, 189),
        (3, 210),
        (4, 225),
        (5, 233),
        (11, 322),
        (12, 493),
        (16, 615),
        (163, 617),
        (170, 629),
    ];

    #[test]
    fn test_lookup_known_versions() {
        for (version, length) in EXPECTED_LENGTHS {
            let format = lookup(version).unwrap();
            assert_eq!(format.version, version);
            assert_eq!(format.record_length, length);
        }
        assert_eq!(supported_versions(), vec![2, 3, 4, 5, 11, 12, 16, 163, 170]);
    }

    #[test]
    fn test_lookup_unknown_version() {
        assert!(matches!(lookup(99), Err(DecoderError::UnsupportedVersion(99))));
        assert!(matches!(lookup(0), Err(DecoderError::UnsupportedVersion(0))));
    }

    #[test]
    fn test_all_descriptors_validate() {
        for format in all() {
            format.validate().unwrap();
        }
    }

    #[test]
    fn test_slot_widths_match_record_length() {
        for format in all() {
            let width: usize = format.layout.iter().map(Slot::width).sum();
            assert_eq!(width, format.record_length, "version {}", format.version);
        }
    }

    #[test]
    fn test_column_count_matches_spliced_fields() {
        for format in all() {
            assert_eq!(
                format.layout_field_count() + format.bit_field.bit_count - 1,
                format.column_names.len(),
                "version {}",
                format.version
            );
        }
    }

    #[test]
    fn test_flag_slot_sits_at_bit_field_offset() {
        // The slot whose value is replaced by the flags must cover the flag bytes
        for format in all() {
            let mut offset = 0;
            let mut field = 0;
            let mut found = false;
            for slot in format.layout {
                if slot.produces_value() {
                    if field == format.bit_field.splice_index {
                        assert_eq!(offset, format.bit_field.byte_offset, "version {}", format.version);
                        assert!(slot.width() * 8 >= format.bit_field.bit_count);
                        found = true;
                    }
                    field += 1;
                }
                offset += slot.width();
            }
            assert!(found, "version {}", format.version);
        }
    }

    #[test]
    fn test_version_2_shape() {
        let format = lookup(2).unwrap();
        assert_eq!(format.layout_field_count(), 36);
        assert_eq!(format.field_count(), 43);
        assert_eq!(format.bit_field.bit_count, 8);
        assert_eq!(format.bit_field.splice_index, 16);
        assert_eq!(format.column_names[16], "ASSIST");
        assert_eq!(format.column_names[23], "TRANSFERRED");
    }

    #[test]
    fn test_timestamp_regimes() {
        // Pre-R16 formats render SEGSTART/SEGSTOP, R16+ adds the UTC shadows
        for version in [2, 3, 4, 5, 11, 12] {
            let format = lookup(version).unwrap();
            assert_eq!(format.timestamp_fields, 6..8);
            assert_eq!(format.segstop_index, 7);
            assert_eq!(format.column_names[7], "SEGSTOP");
        }
        for version in [16, 163, 170] {
            let format = lookup(version).unwrap();
            assert_eq!(format.timestamp_fields, 6..10);
            assert_eq!(format.segstop_index, 8);
            assert_eq!(format.column_names[8], "SEGSTOP");
        }
    }

    #[test]
    fn test_fixed_positions_named_consistently() {
        for format in all() {
            assert_eq!(format.column_names[DURATION_INDEX], "DURATION");
            assert_eq!(format.column_names[SEGSTART_INDEX], "SEGSTART");
            assert_eq!(format.column_names[format.segment_index], "SEGMENT");
        }
    }

    #[test]
    fn test_string_range_defaults_to_last_field() {
        let format = lookup(2).unwrap();
        assert_eq!(format.string_range(), 34..=42);

        let format = lookup(170).unwrap();
        assert_eq!(*format.string_range().end(), 82);
        assert_eq!(format.column_names[82], "ASAI_UUI");
    }

    #[test]
    fn test_header_row() {
        let format = lookup(2).unwrap();
        let header = format.header_row();
        assert!(header.starts_with("CALLID,ACWTIME,"));
        assert_eq!(header.split(',').count(), 43);
    }
}
