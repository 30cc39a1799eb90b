//! Length-capped matching.

use isomatch_core::config::MatcherConfig;

use crate::error::{GrammarError, GrammarResult};
use crate::iso8601::core::DatetimeComponents;

/// Matcher with an optional cap on input length.
///
/// Matching cost grows with input length, so callers facing untrusted
/// input can refuse long strings before they reach the grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    max_input_len: Option<usize>,
}

impl Matcher {
    /// Matcher without a length cap.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_input_len: None,
        }
    }

    #[must_use]
    pub const fn with_max_input_len(max_input_len: usize) -> Self {
        Self {
            max_input_len: Some(max_input_len),
        }
    }

    #[must_use]
    pub const fn from_config(config: &MatcherConfig) -> Self {
        Self {
            max_input_len: config.max_input_len,
        }
    }

    #[must_use]
    pub const fn max_input_len(&self) -> Option<usize> {
        self.max_input_len
    }

    fn check_len(&self, input: &str) -> GrammarResult<()> {
        match self.max_input_len {
            Some(max) if input.len() > max => {
                tracing::debug!(len = input.len(), max, "Rejecting over-long input");
                Err(GrammarError::InputTooLong {
                    len: input.len(),
                    max,
                })
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn decompose<'a>(&self, input: &'a str) -> Option<DatetimeComponents<'a>> {
        self.check_len(input).ok()?;
        super::decompose(input)
    }

    #[must_use]
    pub fn is_valid(&self, input: &str) -> bool {
        self.check_len(input).is_ok() && super::is_valid(input)
    }

    /// ## Errors
    /// Returns [`GrammarError::InputTooLong`] if the input exceeds the cap,
    /// or [`GrammarError::NoMatch`] if it does not match.
    pub fn try_decompose<'a>(&self, input: &'a str) -> GrammarResult<DatetimeComponents<'a>> {
        self.check_len(input)?;
        super::try_decompose(input)
    }
}

impl From<&MatcherConfig> for Matcher {
    fn from(config: &MatcherConfig) -> Self {
        Self::from_config(config)
    }
}
