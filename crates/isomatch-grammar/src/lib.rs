//! ISO 8601 combined date-and-time matching.
//!
//! The crate recognizes `date T time [tzinfo]` strings in the calendar,
//! week and ordinal date notations and decomposes them into borrowed
//! components. See [`iso8601`] for the grammar.

pub mod error;
pub mod iso8601;

pub use iso8601::{
    DatetimeComponents, Matcher, decompose, is_valid, parse_date, parse_time, parse_tzinfo,
    try_decompose,
};
