//! Field corrections
//!
//! Applied to every record after the flag word has been spliced in, always in this
//! order:
//!
//! 1. DURATION/SEGSTART repair
//! 2. Timestamp rendering
//! 3. Signed 16-bit reinterpretation
//! 4. Text delimiting
//!
//! Each step only touches the positions its descriptor entry names.

use crate::config::DecoderConfig;
use crate::formats::{FormatDescriptor, DURATION_INDEX, SEGSTART_INDEX};
use crate::types::FieldValue;
use chrono::DateTime;
use std::fmt::Write;
use std::ops::{Range, RangeInclusive};

/// Run the full correction pipeline over one record's fields
pub fn apply(fields: &mut [FieldValue], format: &FormatDescriptor, config: &DecoderConfig) {
    fix_duration_quirk(fields, format.segstop_index);
    if config.formats_timestamps() {
        format_timestamps(fields, format.timestamp_fields.clone(), &config.date_format);
    }
    reinterpret_signed(fields, format.signed_indices);
    delimit_strings(fields, format.string_range(), &config.string_delimiter);
}

/// Repair a negative DURATION that the switch wrote as unsigned 32-bit
///
/// The same switch bug leaves SEGSTART wrong, so it is recomputed from SEGSTOP.
pub fn fix_duration_quirk(fields: &mut [FieldValue], segstop_index: usize) {
    let raw = match fields.get(DURATION_INDEX) {
        Some(FieldValue::Integer(raw)) if *raw > 0x7fff_ffff => *raw,
        _ => return,
    };

    let duration = raw as u32 as i32 as i64;
    fields[DURATION_INDEX] = FieldValue::Integer(duration);

    if let Some(segstop) = fields.get(segstop_index).and_then(FieldValue::as_i64) {
        log::debug!(
            "Negative duration {} (raw 0x{:08X}), recomputing SEGSTART from SEGSTOP {}",
            duration,
            raw,
            segstop
        );
        if let Some(segstart) = fields.get_mut(SEGSTART_INDEX) {
            *segstart = FieldValue::Integer(segstop - duration);
        }
    }
}

/// Render epoch-second fields in `range` as UTC calendar time
///
/// A value chrono cannot represent, or a format it cannot render, is left as the raw
/// integer.
pub fn format_timestamps(fields: &mut [FieldValue], range: Range<usize>, date_format: &str) {
    let end = range.end.min(fields.len());
    for field in &mut fields[range.start.min(end)..end] {
        let FieldValue::Integer(secs) = *field else {
            continue;
        };
        let Some(datetime) = DateTime::from_timestamp(secs, 0) else {
            continue;
        };

        let mut rendered = String::new();
        if write!(rendered, "{}", datetime.format(date_format)).is_ok() {
            *field = FieldValue::Timestamp(rendered);
        }
    }
}

/// Reinterpret raw unsigned 16-bit values as two's-complement
pub fn reinterpret_signed(fields: &mut [FieldValue], indices: &[usize]) {
    for &index in indices {
        if let Some(FieldValue::Integer(raw)) = fields.get_mut(index) {
            *raw = *raw as u16 as i16 as i64;
        }
    }
}

/// Wrap every field in `start..=end` with the delimiter
pub fn delimit_strings(fields: &mut [FieldValue], range: RangeInclusive<usize>, delimiter: &str) {
    if delimiter.is_empty() {
        return;
    }

    let (start, end) = range.into_inner();
    for field in fields.iter_mut().take(end.saturating_add(1)).skip(start) {
        let mut quoted = delimiter.as_bytes().to_vec();
        quoted.extend_from_slice(&field.to_bytes());
        quoted.extend_from_slice(delimiter.as_bytes());
        *field = FieldValue::Text(quoted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats;

    fn ints(values: &[i64]) -> Vec<FieldValue> {
        values.iter().map(|&v| FieldValue::Integer(v)).collect()
    }

    #[test]
    fn test_duration_quirk_fix() {
        // DURATION = 0x80000001, SEGSTOP at 7
        let mut fields = ints(&[0, 0, 0, 0, 0, 0x8000_0001, 999, 1_000_000]);
        fix_duration_quirk(&mut fields, 7);

        let duration = -(0xFFFF_FFFFi64 - 0x8000_0001 + 1);
        assert_eq!(duration, -2_147_483_647);
        assert_eq!(fields[5], FieldValue::Integer(duration));
        assert_eq!(fields[6], FieldValue::Integer(1_000_000 - duration));
        assert_eq!(fields[7], FieldValue::Integer(1_000_000));
    }

    #[test]
    fn test_duration_quirk_uses_r16_segstop() {
        let mut fields = ints(&[0, 0, 0, 0, 0, 0xFFFF_FFFF, 0, 0, 500, 0]);
        fix_duration_quirk(&mut fields, 8);
        assert_eq!(fields[5], FieldValue::Integer(-1));
        assert_eq!(fields[6], FieldValue::Integer(501));
    }

    #[test]
    fn test_duration_boundary_untouched() {
        let mut fields = ints(&[0, 0, 0, 0, 0, 0x7fff_ffff, 10, 20]);
        fix_duration_quirk(&mut fields, 7);
        assert_eq!(fields, ints(&[0, 0, 0, 0, 0, 0x7fff_ffff, 10, 20]));
    }

    #[test]
    fn test_format_timestamps() {
        let mut fields = ints(&[0, 0, 0, 0, 0, 60, 1_577_836_800, 1_577_836_860, 42]);
        format_timestamps(&mut fields, 6..8, "%Y-%m-%d %H:%M:%S");
        assert_eq!(fields[6], FieldValue::Timestamp("2020-01-01 00:00:00".into()));
        assert_eq!(fields[7], FieldValue::Timestamp("2020-01-01 00:01:00".into()));
        assert_eq!(fields[8], FieldValue::Integer(42));
        assert_eq!(fields[5], FieldValue::Integer(60));
    }

    #[test]
    fn test_invalid_format_leaves_raw_value() {
        let mut fields = ints(&[0, 0, 0, 0, 0, 0, 100, 200]);
        format_timestamps(&mut fields, 6..8, "%Q");
        assert_eq!(fields[6], FieldValue::Integer(100));
    }

    #[test]
    fn test_reinterpret_signed() {
        let mut fields = ints(&[0xFFFF, 0x0001, 0x8000, 0xFFFF]);
        reinterpret_signed(&mut fields, &[0, 1, 2]);
        assert_eq!(fields, ints(&[-1, 1, -32768, 0xFFFF]));
    }

    #[test]
    fn test_delimit_strings() {
        let mut fields = vec![
            FieldValue::Integer(1),
            FieldValue::Text("ABC".into()),
            FieldValue::Text(Vec::new()),
        ];
        delimit_strings(&mut fields, 1..=2, "\"");
        assert_eq!(fields[0], FieldValue::Integer(1));
        assert_eq!(fields[1], FieldValue::Text("\"ABC\"".into()));
        assert_eq!(fields[2], FieldValue::Text("\"\"".into()));
    }

    #[test]
    fn test_delimit_keeps_raw_bytes() {
        let mut fields = vec![FieldValue::Text(vec![0xE9])];
        delimit_strings(&mut fields, 0..=0, "'");
        assert_eq!(fields[0], FieldValue::Text(vec![b'\'', 0xE9, b'\'']));
    }

    #[test]
    fn test_empty_delimiter_disables_quoting() {
        let mut fields = vec![FieldValue::Text("ABC".into())];
        delimit_strings(&mut fields, 0..=0, "");
        assert_eq!(fields[0], FieldValue::Text("ABC".into()));
    }

    #[test]
    fn test_apply_runs_in_order() {
        // Repaired SEGSTART must be the value that gets rendered
        let format = formats::lookup(2).unwrap();
        let mut fields = ints(&vec![0; format.layout_field_count()]);
        crate::record_decoder::RecordDecoder::splice_bits(
            &mut fields,
            format.bit_field.splice_index,
            vec![FieldValue::Flag(false); format.bit_field.bit_count],
        );
        fields[5] = FieldValue::Integer(0xFFFF_FFFF);
        fields[7] = FieldValue::Integer(1_577_836_800);
        fields[11] = FieldValue::Integer(0xFFFF);
        for field in &mut fields[format.string_start..] {
            *field = FieldValue::Text("x".into());
        }

        let config = DecoderConfig::new().with_date_format("%s");
        apply(&mut fields, format, &config);

        assert_eq!(fields[5], FieldValue::Integer(-1));
        assert_eq!(fields[6], FieldValue::Timestamp("1577836801".into()));
        assert_eq!(fields[7], FieldValue::Timestamp("1577836800".into()));
        assert_eq!(fields[11], FieldValue::Integer(-1));
        assert_eq!(fields[format.string_start], FieldValue::Text("\"x\"".into()));
        assert_eq!(fields.last(), Some(&FieldValue::Text("\"x\"".into())));
    }
}
