//! Parallel decode mode
//!
//! Records are independent of each other, so a whole file can be split into
//! record-sized chunks and decoded on a thread pool. Rows come back in input order.

use anyhow::{Context, Result};
use echi_decoder::{
    formats, DecodeSummary, DecodedRecord, DecoderConfig, FileHeader, FormatDescriptor,
    RecordDecoder,
};
use rayon::prelude::*;

/// Everything decoded from one in-memory file
#[derive(Debug)]
pub struct ParallelOutput {
    pub format: &'static FormatDescriptor,
    pub records: Vec<DecodedRecord>,
    pub summary: DecodeSummary,
}

/// Decode a complete ECHI file held in memory using `jobs` worker threads
pub fn decode_parallel(input: &[u8], config: &DecoderConfig, jobs: usize) -> Result<ParallelOutput> {
    config.validate()?;

    let header = FileHeader::parse(input)?;
    let format = formats::lookup(header.version)?;
    log::info!(
        "ECHI file version {} (sequence {}), {} byte records, {} jobs",
        header.version,
        header.sequence,
        format.record_length,
        jobs
    );

    let body = &input[FileHeader::LEN..];
    let trailing_bytes = body.len() % format.record_length;
    if trailing_bytes > 0 {
        log::warn!(
            "Discarding {} trailing bytes (incomplete {} byte record)",
            trailing_bytes,
            format.record_length
        );
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("Failed to build decode thread pool")?;

    let records = pool.install(|| {
        body.par_chunks_exact(format.record_length)
            .map(|chunk| RecordDecoder::decode(format, chunk, config))
            .collect::<echi_decoder::Result<Vec<_>>>()
    })?;

    let summary = DecodeSummary {
        header,
        record_length: format.record_length,
        records_processed: records.len() as u64,
        trailing_bytes,
    };

    Ok(ParallelOutput {
        format,
        records,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use echi_decoder::{Decoder, DecoderError};
    use std::io::Cursor;

    fn sample_file(version: u32, records: usize, trailing: usize) -> Vec<u8> {
        let format = formats::lookup(version).unwrap();
        let mut bytes = version.to_le_bytes().to_vec();
        bytes.extend_from_slice(&3u32.to_le_bytes());
        for i in 0..records {
            let mut record = vec![b' '; format.record_length];
            record[..4].copy_from_slice(&(i as u32 + 100).to_le_bytes());
            record[20..24].copy_from_slice(&0xFFFF_FFF0u32.to_le_bytes());
            bytes.extend(record);
        }
        bytes.extend(vec![0u8; trailing]);
        bytes
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let input = sample_file(16, 25, 7);
        let config = DecoderConfig::new().with_date_format("%Y-%m-%dT%H:%M:%S");

        let parallel = decode_parallel(&input, &config, 4).unwrap();
        assert_eq!(parallel.summary.records_processed, 25);
        assert_eq!(parallel.summary.trailing_bytes, 7);

        let decoder = Decoder::new(config).unwrap();
        let sequential: Vec<DecodedRecord> = decoder
            .stream(Cursor::new(input))
            .collect::<echi_decoder::Result<_>>()
            .unwrap();
        assert_eq!(parallel.records, sequential);
    }

    #[test]
    fn test_parallel_unknown_version() {
        let mut input = 99u32.to_le_bytes().to_vec();
        input.extend_from_slice(&[0u8; 4]);
        let err = decode_parallel(&input, &DecoderConfig::new(), 2).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DecoderError>(),
            Some(DecoderError::UnsupportedVersion(99))
        ));
    }
}
