use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub samples: SamplesConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Limits applied before an input reaches the grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MatcherConfig {
    /// Inputs longer than this many bytes are rejected without matching.
    pub max_input_len: Option<usize>,
}

/// Sample lists the harness combines into `date T time tzinfo` inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SamplesConfig {
    pub dates: Vec<String>,
    pub times: Vec<String>,
    pub tzinfos: Vec<String>,
}

impl Default for SamplesConfig {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(ToString::to_string).collect()
        }

        Self {
            dates: owned(&[
                "2020-01-02",
                "20200102",
                "2020-W01-2",
                "2020W012",
                "2020123",
                "2020-123",
            ]),
            times: owned(&["12:34:56", "123456", "12:34:56.123456", "123456.123456"]),
            tzinfos: owned(&["", "Z", "+12:34", "+1234", "+12", "+123456"]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

impl Settings {
    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("report.format", "text")?)
    }

    /// ## Summary
    /// Loads configuration from `.env` file, environment variables and `isomatch.toml`.
    /// Values from `isomatch.toml` take precedence over environment variables.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            // Env file
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// ## Errors
    /// Returns an error if `matcher.max_input_len` is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.matcher.max_input_len == Some(0) {
            return Err(CoreError::ConfigError(
                "matcher.max_input_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// ## Summary
    /// Builds settings from the defaults overlaid with a TOML document.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not deserialize.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` file and `isomatch.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;
    tracing::debug!(
        samples = settings.samples.dates.len()
            * settings.samples.times.len()
            * settings.samples.tzinfos.len(),
        "Settings loaded"
    );

    Ok(settings)
}
