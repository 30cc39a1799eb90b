/// Notation constants shared across crates
pub const CALENDAR_DATE_NOTATION: &str = "YYYY[-]MM[-]DD";
pub const WEEK_DATE_NOTATION: &str = "YYYY[-]Www[-]D";
pub const ORDINAL_DATE_NOTATION: &str = "YYYY[-]DDD";

pub const DATE_NOTATION: &str = const_str::concat!(
    CALENDAR_DATE_NOTATION,
    " | ",
    WEEK_DATE_NOTATION,
    " | ",
    ORDINAL_DATE_NOTATION
);
pub const TIME_NOTATION: &str = "hh[[:]mm[[:]ss[.ffffff]]]";
pub const TZINFO_NOTATION: &str = "Z | ±hh[[:]mm[[:]ss]]";

pub const DATETIME_NOTATION: &str = const_str::concat!(
    "(",
    DATE_NOTATION,
    ")T",
    TIME_NOTATION,
    "[",
    TZINFO_NOTATION,
    "]"
);

/// Trailer of the command-line help.
pub const DATETIME_HELP: &str = const_str::concat!("Accepted datetimes:\n  ", DATETIME_NOTATION);

/// Unicode MINUS SIGN, accepted as a timezone sign next to `+` and `-`.
pub const UNICODE_MINUS: char = '\u{2212}';

/// Prefix for environment variable overrides (`ISOMATCH__LOGGING__LEVEL`).
pub const ENV_PREFIX: &str = "ISOMATCH";
pub const ENV_SEPARATOR: &str = "__";
pub const CONFIG_FILE: &str = "isomatch.toml";
