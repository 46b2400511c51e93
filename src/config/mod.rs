//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::analysis::SampleSize;
use crate::core::constants::{dataset, files, keywords, output_formats, sampling, server};
use crate::core::error::{Result, SentinelError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the analyzed-message CSV
    pub dataset_path: Option<String>,

    /// Rows shown by the sample inspector (5-50)
    pub sample_size: Option<usize>,

    /// Bars shown in the negative keyword chart
    pub top_keywords: Option<usize>,

    /// Output format for `report` (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Listen address for `serve`
    pub bind_address: Option<String>,

    /// Output path for `dashboard`
    pub dashboard_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: Some(dataset::DEFAULT_PATH.to_string()),
            sample_size: Some(sampling::DEFAULT_SAMPLE_SIZE),
            top_keywords: Some(keywords::DEFAULT_TOP_KEYWORDS),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            bind_address: Some(server::DEFAULT_BIND_ADDRESS.to_string()),
            dashboard_path: Some(files::DEFAULT_DASHBOARD_PATH.to_string()),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SentinelError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SentinelError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Find and load a config file in the working directory or its parents.
    ///
    /// Defaults are used when no file exists. A file that exists but cannot be
    /// read, parsed or validated is an error.
    pub fn load_from_standard_locations() -> Result<Self> {
        Self::load_from_locations(Self::standard_locations())
    }

    fn load_from_locations<I: IntoIterator<Item = PathBuf>>(locations: I) -> Result<Self> {
        match locations.into_iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn standard_locations() -> Vec<PathBuf> {
        Self::locations_under(Path::new(""))
    }

    fn locations_under(base: &Path) -> Vec<PathBuf> {
        (0..=files::CONFIG_SEARCH_DEPTH)
            .map(|depth| base.join(format!("{}{}", "../".repeat(depth), files::CONFIG_FILE_NAME)))
            .collect()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref dataset_path) = cli_config.dataset_path {
            self.dataset_path = Some(dataset_path.clone());
        }
        if let Some(sample_size) = cli_config.sample_size {
            self.sample_size = Some(sample_size);
        }
        if let Some(top_keywords) = cli_config.top_keywords {
            self.top_keywords = Some(top_keywords);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref bind_address) = cli_config.bind_address {
            self.bind_address = Some(bind_address.clone());
        }
        if let Some(ref dashboard_path) = cli_config.dashboard_path {
            self.dashboard_path = Some(dashboard_path.clone());
        }
    }

    pub fn dataset_path(&self) -> PathBuf {
        PathBuf::from(
            self.dataset_path
                .as_deref()
                .unwrap_or(dataset::DEFAULT_PATH),
        )
    }

    /// Sample size, pulled into the slider range if a caller skipped validation
    pub fn sample_size(&self) -> SampleSize {
        self.sample_size
            .map(SampleSize::clamped)
            .unwrap_or_default()
    }

    pub fn top_keywords(&self) -> usize {
        self.top_keywords
            .unwrap_or(keywords::DEFAULT_TOP_KEYWORDS)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    pub fn dashboard_path(&self) -> PathBuf {
        PathBuf::from(
            self.dashboard_path
                .as_deref()
                .unwrap_or(files::DEFAULT_DASHBOARD_PATH),
        )
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        let address = self
            .bind_address
            .as_deref()
            .unwrap_or(server::DEFAULT_BIND_ADDRESS);
        address.parse().map_err(|_| {
            SentinelError::Config(format!(
                "Bind address '{address}' is not a valid socket address. Expected HOST:PORT, e.g. {}.",
                server::DEFAULT_BIND_ADDRESS
            ))
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = self.sample_size {
            SampleSize::new(size).map_err(|e| SentinelError::Config(e.to_string()))?;
        }

        if let Some(top) = self.top_keywords {
            if top == 0 {
                return Err(SentinelError::Config(
                    "top_keywords cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if top > keywords::MAX_TOP_KEYWORDS {
                return Err(SentinelError::Config(format!(
                    "top_keywords of {top} is too large. Expected at most {}.",
                    keywords::MAX_TOP_KEYWORDS
                )));
            }
        }

        if let Some(ref format) = self.output_format {
            match format.as_str() {
                f if output_formats::ALL.contains(&f) => {}
                _ => {
                    return Err(SentinelError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        if let Some(ref path) = self.dataset_path
            && path.trim().is_empty()
        {
            return Err(SentinelError::Config(
                "dataset_path cannot be empty.".to_string(),
            ));
        }

        self.bind_address()?;

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default, Clone)]
pub struct CliConfig {
    pub config_file: Option<String>,
    pub no_config: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub dataset_path: Option<String>,
    pub sample_size: Option<usize>,
    pub top_keywords: Option<usize>,
    pub output_format: Option<String>,
    pub bind_address: Option<String>,
    pub dashboard_path: Option<String>,
}
