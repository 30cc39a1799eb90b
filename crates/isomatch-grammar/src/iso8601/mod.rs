//! ISO 8601 combined date and time (`date T time [tzinfo]`).
//!
//! ## Usage
//!
//! ```rust
//! use isomatch_grammar::iso8601::{decompose, is_valid};
//!
//! let components = decompose("2020-W01-2T12:34:56+12:34").unwrap();
//! assert_eq!(components.date(), "2020-W01-2");
//! assert_eq!(components.week(), Some("01"));
//! assert_eq!(components.tzinfo(), Some("+12:34"));
//!
//! assert!(is_valid("20200102T123456"));
//! assert!(!is_valid("2020-0102T12:34:56"));
//! ```
//!
//! ## Accepted forms
//!
//! - Dates: calendar (`2020-01-02`, `20200102`), week (`2020-W01-2`,
//!   `2020W012`) and ordinal (`2020-123`, `2020123`).
//! - Times: `hh`, `hh:mm`, `hh:mm:ss`, `hh:mm:ss.f` up to six fraction
//!   digits, or the same without colons.
//! - Timezones: `Z`, or `+`, `-` or U+2212 followed by `hh[[:]mm[[:]ss]]`.
//!
//! Matching is purely syntactic. Month `13`, day `99` or hour `29` are
//! accepted as written.
//!
//! ## Submodules
//!
//! - [`core`](self::core) - Component record types
//! - [`parse`] - Grammar and entry points

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use self::core::{
    DateComponents, DateForm, DateNotation, DatetimeComponents, TimeComponents, TzComponents,
    TzOffset, TzSign,
};
pub use parse::{
    Matcher, decompose, is_valid, parse_date, parse_time, parse_tzinfo, try_decompose,
};
