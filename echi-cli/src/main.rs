//! ECHI to CSV command-line converter
//!
//! This is the command-line interface for the ECHI decoder library.
//! It adds what the library deliberately leaves out:
//! - Argument parsing and an optional TOML configuration file
//! - Opening input/output (`-` means stdin/stdout)
//! - Logger setup
//! - Parallel decoding of whole files
//! - Exit status per failure kind

use anyhow::{Context, Result};
use clap::Parser;
use echi_decoder::{formats, DecodeSummary, Decoder, DecoderError, RowWriter};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod config;
mod parallel;

use config::{AppConfig, Overrides};

/// ECHI to CSV - Decode binary call history files into delimited text
#[derive(Parser, Debug)]
#[command(name = "echi2csv")]
#[command(about = "Decode ECHI call history files into CSV rows", long_about = None)]
#[command(version)]
struct Args {
    /// ECHI file to decode ("-" reads stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    input: PathBuf,

    /// Output file ("-" writes stdout)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    output: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a header row of column names
    #[arg(long)]
    header: bool,

    /// strftime format for timestamp fields (empty = raw epoch seconds)
    #[arg(short, long, value_name = "FORMAT")]
    date_format: Option<String>,

    /// Delimiter wrapped around text fields (empty = no quoting)
    #[arg(long, value_name = "STRING")]
    delimiter: Option<String>,

    /// Number of decode threads (1 = streaming mode)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,

    /// Print all supported formats as JSON and exit
    #[arg(long)]
    list_formats: bool,

    /// Print a JSON decode summary to stderr
    #[arg(long)]
    summary: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::debug!("echi2csv v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using decoder library v{}", echi_decoder::VERSION);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if args.list_formats {
        let formats: Vec<_> = formats::all().collect();
        println!("{}", serde_json::to_string_pretty(&formats)?);
        return Ok(());
    }

    let file_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let overrides = Overrides {
        header: args.header,
        verbose: args.verbose > 0,
        date_format: args.date_format.clone(),
        delimiter: args.delimiter.clone(),
        jobs: args.jobs.map(|n| n as usize),
    };
    let app_config = file_config.merge(&overrides);
    let decoder_config = app_config.decoder_config();
    log::debug!("Decoder configuration: {:?}", decoder_config);

    // The output is only created once the header has resolved, so a bad input file
    // never truncates an existing output
    let input = open_input(&args.input)?;
    let summary = if app_config.decoder.jobs > 1 {
        parallel_mode(input, &args.output, &decoder_config, app_config.decoder.jobs)?
    } else {
        let decoder = Decoder::new(decoder_config)?;
        let mut stream = decoder.stream(input);
        stream.read_header()?;
        stream.write_rows(open_output(&args.output)?)?
    };

    log::info!(
        "Processed {} records from {:?}",
        summary.records_processed,
        args.input
    );
    if args.summary {
        eprintln!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}

/// Read the whole input, decode it on a thread pool, write rows in order
fn parallel_mode(
    mut input: Box<dyn Read>,
    output: &Path,
    config: &echi_decoder::DecoderConfig,
    jobs: usize,
) -> Result<DecodeSummary> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .context("Failed to read input")?;

    let decoded = parallel::decode_parallel(&bytes, config, jobs)?;

    let mut rows = RowWriter::new(open_output(output)?);
    if config.header {
        rows.write_header(decoded.format)?;
    }
    for record in &decoded.records {
        rows.write_record(record)?;
    }
    rows.finish()?;

    Ok(decoded.summary)
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin().lock())));
    }
    let file = File::open(path).with_context(|| format!("Failed to open input file: {:?}", path))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create output file: {:?}", path))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Map a fatal error to the process exit status
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DecoderError>() {
        Some(DecoderError::UnsupportedVersion(_)) => 2,
        Some(DecoderError::WriteFailure(_)) => 3,
        Some(DecoderError::TruncatedHeader(_)) => 4,
        Some(DecoderError::InvalidTimestampFormat(_)) => 5,
        _ => 1,
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["echi2csv"]);
        assert_eq!(args.input, PathBuf::from("-"));
        assert_eq!(args.output, PathBuf::from("-"));
        assert!(!args.header);
        assert_eq!(args.jobs, None);
    }

    #[test]
    fn test_args_full() {
        let args = Args::parse_from([
            "echi2csv", "chr0001", "-o", "out.csv", "--header", "-d", "%Y", "--delimiter", "",
            "-j", "4", "-vv",
        ]);
        assert_eq!(args.input, PathBuf::from("chr0001"));
        assert!(args.header);
        assert_eq!(args.date_format.as_deref(), Some("%Y"));
        assert_eq!(args.delimiter.as_deref(), Some(""));
        assert_eq!(args.jobs, Some(4));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_zero_jobs_rejected() {
        assert!(Args::try_parse_from(["echi2csv", "-j", "0"]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        let unsupported = anyhow::Error::from(DecoderError::UnsupportedVersion(99));
        assert_eq!(exit_code(&unsupported), 2);

        let write = anyhow::Error::from(DecoderError::WriteFailure(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "closed",
        )));
        assert_eq!(exit_code(&write), 3);

        let truncated = anyhow::Error::from(DecoderError::TruncatedHeader(0)).context("decoding");
        assert_eq!(exit_code(&truncated), 4);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }

    #[test]
    fn test_parallel_mode_writes_header_and_rows() {
        let mut input = 2u32.to_le_bytes().to_vec();
        input.extend_from_slice(&1u32.to_le_bytes());
        input.extend(vec![0u8; 189 * 3]);

        let out = tempfile::NamedTempFile::new().unwrap();
        let config = echi_decoder::DecoderConfig::new().with_header(true);
        let summary =
            parallel_mode(Box::new(Cursor::new(input)), out.path(), &config, 2).unwrap();
        assert_eq!(summary.records_processed, 3);

        let text = std::fs::read_to_string(out.path()).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("CALLID,"));
    }

    #[test]
    fn test_bad_input_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("chr0099");
        let mut bytes = 99u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0u8; 200]);
        std::fs::write(&input, bytes).unwrap();

        let output = dir.path().join("existing.csv");
        std::fs::write(&output, "keep me\n").unwrap();

        for jobs in ["1", "3"] {
            let args = Args::parse_from([
                "echi2csv",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-j",
                jobs,
            ]);
            let err = run(&args).unwrap_err();
            assert_eq!(exit_code(&err), 2);
            assert_eq!(std::fs::read_to_string(&output).unwrap(), "keep me\n");
        }
    }
}
