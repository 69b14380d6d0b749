use anyhow::{Context, Result, bail};
use billsplit_core::constants::defaults;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "BILLSPLIT_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "billsplit.toml";

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_tip_percent")]
    pub default_tip_percent: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { default_tip_percent: default_tip_percent() }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: LogFormat::default(), filter: default_log_filter() }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Where the configuration came from, reported once logging is up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Defaults,
    File(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "built-in defaults"),
            ConfigSource::File(path) => write!(f, "{path}"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct BillsplitConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(skip)]
    pub source: ConfigSource,
}

impl BillsplitConfig {
    /// Reads the file named by `BILLSPLIT_CONFIG_PATH` (default
    /// `billsplit.toml`). A missing file means built-in defaults; an
    /// unreadable or malformed one is an error.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read configuration '{path}'"));
            }
        };

        let mut config = Self::from_toml(&contents)
            .with_context(|| format!("failed to parse configuration '{path}'"))?;
        config.source = ConfigSource::File(path);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies environment variable overrides on top of the loaded values.
    pub fn apply_profile(mut self) -> Result<Self> {
        if let Ok(tip) = std::env::var("BILLSPLIT_DEFAULT_TIP_PERCENT") {
            self.engine.default_tip_percent = tip
                .trim()
                .parse()
                .with_context(|| {
                    format!("BILLSPLIT_DEFAULT_TIP_PERCENT is not a number: '{tip}'")
                })?;
        }
        if let Ok(format) = std::env::var("BILLSPLIT_LOG_FORMAT") {
            self.logging.format = match format.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" => LogFormat::Text,
                other => bail!("BILLSPLIT_LOG_FORMAT must be 'text' or 'json', got '{other}'"),
            };
        }
        self.validate()?;
        Ok(self)
    }

    pub fn log_loaded(&self) {
        info!(
            source = %self.source,
            default_tip_percent = self.engine.default_tip_percent,
            "configuration loaded"
        );
    }

    fn validate(&self) -> Result<()> {
        let tip = self.engine.default_tip_percent;
        if !tip.is_finite() || tip <= 0.0 {
            bail!("engine.default_tip_percent must be greater than zero, got {tip}");
        }
        Ok(())
    }
}

fn default_tip_percent() -> f64 {
    defaults::TIP_PERCENT
}

fn default_log_filter() -> String {
    "billsplit=info".to_string()
}
