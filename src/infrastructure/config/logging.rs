//! Logging configuration and initialization.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::error::ConfigError;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
    /// Also append plain-text logs to this file.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Filter directive after applying CLI verbosity (`-v` debug, `-vv` trace).
    #[must_use]
    pub fn effective_level(&self, verbosity: u8) -> &str {
        match verbosity {
            0 => &self.level,
            1 => "debug",
            _ => "trace",
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over both the configured level and
    /// `verbosity`. Fails only when the log file cannot be opened.
    pub fn init(&self, verbosity: u8) -> Result<(), ConfigError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.effective_level(verbosity)));

        let mut layers = vec![self.console_layer()];
        if let Some(path) = &self.file {
            layers.push(file_layer(path)?);
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .init();
        Ok(())
    }

    fn console_layer(&self) -> BoxedLayer {
        match self.format.as_str() {
            "json" => fmt::layer().json().boxed(),
            _ => fmt::layer().boxed(),
        }
    }
}

fn open_log_file(path: &Path) -> Result<File, ConfigError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::LogFile {
            path: path.display().to_string(),
            source,
        })
}

fn file_layer(path: &Path) -> Result<BoxedLayer, ConfigError> {
    let file = open_log_file(path)?;
    Ok(fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .boxed())
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            file: None,
        }
    }
}
