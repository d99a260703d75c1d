//! Configuration file loading and merging

use anyhow::{Context, Result};
use echi_decoder::DecoderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub decoder: DecoderSection,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub header: bool,
    pub date_format: Option<String>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DecoderSection {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for DecoderSection {
    fn default() -> Self {
        Self {
            verbose: false,
            jobs: default_jobs(),
        }
    }
}

fn default_jobs() -> usize {
    1
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub header: bool,
    pub verbose: bool,
    pub date_format: Option<String>,
    pub delimiter: Option<String>,
    pub jobs: Option<usize>,
}

impl AppConfig {
    /// Apply command-line overrides on top of the file values
    pub fn merge(mut self, overrides: &Overrides) -> Self {
        self.output.header |= overrides.header;
        self.decoder.verbose |= overrides.verbose;
        if let Some(format) = &overrides.date_format {
            self.output.date_format = Some(format.clone());
        }
        if let Some(delimiter) = &overrides.delimiter {
            self.output.delimiter = Some(delimiter.clone());
        }
        if let Some(jobs) = overrides.jobs {
            self.decoder.jobs = jobs;
        }
        self
    }

    /// Build the decoder library configuration
    pub fn decoder_config(&self) -> DecoderConfig {
        let mut config = DecoderConfig::new()
            .with_verbose(self.decoder.verbose)
            .with_header(self.output.header);
        if let Some(format) = &self.output.date_format {
            config = config.with_date_format(format.as_str());
        }
        if let Some(delimiter) = &self.output.delimiter {
            config = config.with_string_delimiter(delimiter.as_str());
        }
        config
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if config.decoder.jobs == 0 {
        anyhow::bail!("Invalid config file {:?}: decoder.jobs must be at least 1", path);
    }

    Ok(config)
}
