//! Anchored entry points over the ISO 8601 grammar.
//!
//! Every function here matches against the whole input: leading or trailing
//! characters of any kind, a trailing newline included, reject the input.
//! A failed match is an ordinary outcome and is reported as `None`/`false`.

mod cursor;
mod grammar;
mod matcher;

use cursor::Cursor;

use crate::error::{GrammarError, GrammarResult};
use crate::iso8601::core::{DateComponents, DatetimeComponents, TimeComponents, TzComponents};

pub use matcher::Matcher;

/// Runs `rule` over `input` and keeps the result only if it consumed everything.
fn anchored<'a, T>(input: &'a str, rule: impl FnOnce(&mut Cursor<'a>) -> Option<T>) -> Option<T> {
    let mut cursor = Cursor::new(input);
    let parsed = rule(&mut cursor)?;
    cursor.is_at_end().then_some(parsed)
}

/// Decomposes a `date T time [tzinfo]` string.
#[must_use]
pub fn decompose(input: &str) -> Option<DatetimeComponents<'_>> {
    let components = anchored(input, grammar::datetime);
    match &components {
        Some(components) => tracing::trace!(
            input_len = input.len(),
            notation = ?components.notation(),
            "Matched ISO 8601 datetime"
        ),
        None => tracing::trace!(input_len = input.len(), "Not an ISO 8601 datetime"),
    }
    components
}

/// Returns whether `input` is a `date T time [tzinfo]` string.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    anchored(input, grammar::datetime).is_some()
}

/// Like [`decompose`], for callers that propagate failures with `?`.
///
/// ## Errors
/// Returns [`GrammarError::NoMatch`] if the input does not match.
pub fn try_decompose(input: &str) -> GrammarResult<DatetimeComponents<'_>> {
    decompose(input).ok_or_else(|| GrammarError::NoMatch {
        input: input.to_string(),
    })
}

/// Matches a date alone (`2020-01-02`, `2020W012`, `2020123`, ...).
#[must_use]
pub fn parse_date(input: &str) -> Option<DateComponents<'_>> {
    anchored(input, grammar::date)
}

/// Matches a time alone (`12:34:56.789`, `1234`, `12`, ...).
#[must_use]
pub fn parse_time(input: &str) -> Option<TimeComponents<'_>> {
    anchored(input, grammar::time)
}

/// Matches a timezone designator alone (`Z`, `+05:30`, `-0800`, ...).
///
/// The empty designator is not matched here; at the datetime level the
/// designator is optional instead.
#[must_use]
pub fn parse_tzinfo(input: &str) -> Option<TzComponents<'_>> {
    anchored(input, grammar::tzinfo)
}
