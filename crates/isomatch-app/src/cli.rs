//! Command-line arguments of the `isomatch` binary.

use clap::{Parser, ValueEnum};
use isomatch_core::constants::DATETIME_HELP;

use crate::report::ReportFormat;

#[derive(Debug, Parser)]
#[command(about, version, name = "isomatch", after_help = DATETIME_HELP)]
/// Decomposes ISO 8601 datetimes into their components.
pub struct Args {
    /// Datetimes to match. The configured samples are used when none are given.
    pub inputs: Vec<String>,
    /// Report format, overriding `report.format` from the configuration.
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// `input: date=.., time=.., tzinfo=..` lines
    Text,
    /// One JSON object per line
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Args {
    /// Report format to use, given the configured one.
    #[must_use]
    pub fn report_format(&self, configured: ReportFormat) -> ReportFormat {
        self.format.map_or(configured, ReportFormat::from)
    }
}
