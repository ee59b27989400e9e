//! `[logging]` section: filter level and the optional rolling log file

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use tracing_appender::rolling::{self, RollingFileAppender};

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file, never rolled
    Never,
}

impl fmt::Display for LogRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        })
    }
}

/// Where and how the JSON log file is written
#[derive(Debug, Clone, PartialEq)]
pub struct LogFile {
    pub dir: PathBuf,
    /// File name prefix; the appender adds the date suffix
    pub prefix: String,
    pub rotation: LogRotation,
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./logs"),
            prefix: "headlines".to_string(),
            rotation: LogRotation::Daily,
        }
    }
}

impl LogFile {
    /// Appender for this file. The directory must already exist.
    pub fn appender(&self) -> RollingFileAppender {
        match self.rotation {
            LogRotation::Hourly => rolling::hourly(&self.dir, &self.prefix),
            LogRotation::Daily => rolling::daily(&self.dir, &self.prefix),
            LogRotation::Never => rolling::never(&self.dir, &self.prefix),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter for the `headlines` target when RUST_LOG is unset
    pub level: String,
    /// `None` unless `file_enabled = true`
    pub file: Option<LogFile>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// `[logging]` as written in config.toml (flat keys)
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<LogRotation>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let base = LogFile::default();

        let log_file = file.file_enabled.unwrap_or(false).then(|| LogFile {
            dir: file.file_dir.map(PathBuf::from).unwrap_or(base.dir),
            prefix: file.file_prefix.unwrap_or(base.prefix),
            rotation: file.file_rotation.unwrap_or(base.rotation),
        });

        Self {
            level: file.level.unwrap_or_else(|| Self::default().level),
            file: log_file,
        }
    }
}
