use std::path::Path;
use serde::Deserialize;
use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::processing::compile::StatOptions;
use crate::render::{RenderFormat, RenderOptions};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings: an optional JSON file, overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: RenderFormat,
    /// Digits after the decimal point.
    pub precision: usize,
    #[serde(flatten)]
    pub stats: StatOptions,
    /// Guess units for rows that have none from their labels.
    pub infer_units: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Worker threads; 0 lets rayon decide.
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: RenderFormat::Text,
            precision: 2,
            stats: StatOptions::default(),
            infer_units: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            threads: 0,
        }
    }
}

impl Config {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then the `--config` file if given, then flags.
    pub fn resolve(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(format) = args.renderer.format() {
            self.format = format;
        }
        if let Some(precision) = args.precision {
            self.precision = precision;
        }
        if args.no_row_stats {
            self.stats.row_stats = false;
        }
        if args.no_column_stats {
            self.stats.column_stats = false;
        }
        if args.infer_units {
            self.infer_units = true;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        if let Some(threads) = args.threads {
            self.threads = threads;
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            precision: self.precision,
        }
    }

    /// Size the global rayon pool. Only the first call in a process takes effect.
    pub fn init_thread_pool(&self) -> Result<(), ConfigError> {
        if self.threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build_global()?;
        }
        Ok(())
    }
}
