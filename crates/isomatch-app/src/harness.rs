//! Input generation and the matching loop.

use isomatch_core::config::SamplesConfig;
use isomatch_core::error::CoreError;
use isomatch_grammar::Matcher;

use crate::error::AppResult;
use crate::report::{ReportFormat, render};

/// Joins every sample date, time and timezone as `date T time tzinfo`.
///
/// Dates vary slowest and timezones fastest.
#[must_use]
pub fn cartesian_inputs(samples: &SamplesConfig) -> Vec<String> {
    let mut inputs =
        Vec::with_capacity(samples.dates.len() * samples.times.len() * samples.tzinfos.len());

    for date in &samples.dates {
        for time in &samples.times {
            for tzinfo in &samples.tzinfos {
                inputs.push(format!("{date}T{time}{tzinfo}"));
            }
        }
    }

    inputs
}

/// Matches every input and returns the rendered report lines.
///
/// ## Errors
/// Returns an error if there is nothing to match or a line cannot be rendered.
#[tracing::instrument(skip_all, fields(count = inputs.len()))]
pub fn run<S: AsRef<str>>(
    matcher: &Matcher,
    inputs: &[S],
    format: ReportFormat,
) -> AppResult<Vec<String>> {
    if inputs.is_empty() {
        return Err(CoreError::InvalidInput("no inputs to match".to_string()).into());
    }

    let mut lines = Vec::with_capacity(inputs.len());
    let mut matched = 0_usize;

    for input in inputs {
        let input = input.as_ref();
        let components = matcher.decompose(input);
        if components.is_some() {
            matched += 1;
        }
        lines.push(render(input, components.as_ref(), format)?);
    }

    tracing::info!(matched, total = inputs.len(), "Matching complete");

    Ok(lines)
}
