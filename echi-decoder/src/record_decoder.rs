//! Record Decoding Engine
//!
//! Turns one fixed-length record into a [`DecodedRecord`]: the layout is unpacked slot
//! by slot, the packed flag word is expanded into single-bit fields and spliced into
//! place, and the field corrections are applied.

use crate::config::DecoderConfig;
use crate::corrections;
use crate::formats::{FormatDescriptor, Slot};
use crate::types::{DecodedRecord, DecoderError, FieldValue, Result};
use byteorder::{ByteOrder, LittleEndian};

/// Record decoder - stateless, safe to call from any thread
pub struct RecordDecoder;

impl RecordDecoder {
    /// Decode one record
    ///
    /// # Arguments
    /// * `format` - Descriptor of the file's format version
    /// * `chunk` - Raw record bytes; must hold at least `format.record_length` bytes
    /// * `config` - Rendering configuration
    ///
    /// # Returns
    /// * `Err(DecoderError::TruncatedRecord)` if the chunk is too short
    pub fn decode(
        format: &FormatDescriptor,
        chunk: &[u8],
        config: &DecoderConfig,
    ) -> Result<DecodedRecord> {
        if chunk.len() < format.record_length {
            return Err(DecoderError::TruncatedRecord {
                expected: format.record_length,
                actual: chunk.len(),
            });
        }
        let chunk = &chunk[..format.record_length];

        let mut fields = Self::unpack(chunk, format.layout)?;
        let bits = Self::extract_bits(
            chunk,
            format.bit_field.byte_offset,
            format.bit_field.bit_count,
        )?;
        Self::splice_bits(&mut fields, format.bit_field.splice_index, bits);

        corrections::apply(&mut fields, format, config);

        Ok(DecodedRecord { fields })
    }

    /// Unpack the layout slots of a record into raw field values
    ///
    /// Integers are read little-endian and unsigned. Text slots keep their interior
    /// content and lose trailing spaces/NULs. Skip slots produce nothing.
    pub fn unpack(bytes: &[u8], layout: &[Slot]) -> Result<Vec<FieldValue>> {
        let mut fields = Vec::with_capacity(layout.len());
        let mut cursor = 0;

        for slot in layout {
            let width = slot.width();
            let raw = bytes
                .get(cursor..cursor + width)
                .ok_or(DecoderError::TruncatedRecord {
                    expected: cursor + width,
                    actual: bytes.len(),
                })?;
            cursor += width;

            match slot {
                Slot::U32 => fields.push(FieldValue::Integer(LittleEndian::read_u32(raw) as i64)),
                Slot::U16 => fields.push(FieldValue::Integer(LittleEndian::read_u16(raw) as i64)),
                Slot::U8 => fields.push(FieldValue::Integer(raw[0] as i64)),
                Slot::Text(_) => fields.push(FieldValue::Text(Self::decode_text(raw))),
                Slot::Skip(_) => {}
            }
        }

        Ok(fields)
    }

    /// Strip trailing spaces/NULs from a fixed-width text slot; interior bytes are kept as-is
    fn decode_text(raw: &[u8]) -> Vec<u8> {
        let end = raw
            .iter()
            .rposition(|&b| b != b' ' && b != 0)
            .map_or(0, |pos| pos + 1);
        raw[..end].to_vec()
    }

    /// Read `bit_count` flags starting at `byte_offset`, MSB-first within each byte
    pub fn extract_bits(bytes: &[u8], byte_offset: usize, bit_count: usize) -> Result<Vec<FieldValue>> {
        let needed = byte_offset + bit_count.div_ceil(8);
        if needed > bytes.len() {
            return Err(DecoderError::TruncatedRecord {
                expected: needed,
                actual: bytes.len(),
            });
        }

        Ok((0..bit_count)
            .map(|i| {
                let byte = bytes[byte_offset + i / 8];
                let bit_in_byte = 7 - (i % 8);
                FieldValue::Flag((byte >> bit_in_byte) & 0x01 != 0)
            })
            .collect())
    }

    /// Replace the nominal flag-word field at `index` with the expanded flags
    pub fn splice_bits(fields: &mut Vec<FieldValue>, index: usize, bits: Vec<FieldValue>) {
        let end = (index + 1).min(fields.len());
        fields.splice(index.min(end)..end, bits);
    }
}
