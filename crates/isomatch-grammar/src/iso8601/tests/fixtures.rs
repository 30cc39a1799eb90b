//! Sample inputs shared by the grammar tests.

/// Dates in every notation, with and without separators.
pub const DATES: &[&str] = &[
    "2020-01-02",
    "20200102",
    "2020-W01-2",
    "2020W012",
    "2020123",
    "2020-123",
];

/// Times at every precision, with and without separators.
pub const TIMES: &[&str] = &[
    "12",
    "12:34",
    "1234",
    "12:34:56",
    "123456",
    "12:34:56.1",
    "12:34:56.123456",
    "123456.123456",
];

/// Timezone designators, including the absent one.
pub const TZINFOS: &[&str] = &[
    "",
    "Z",
    "+12",
    "+12:34",
    "+1234",
    "+12:34:56",
    "+123456",
    "+12:3456",
    "-05:30",
    "\u{2212}05:30",
];

/// Inputs that must not match, with the reason.
pub const REJECTED: &[(&str, &str)] = &[
    ("", "empty input"),
    ("2020-01-02", "time is mandatory"),
    ("2020-01-02T", "hour is mandatory"),
    ("2020-0102T12:34:56", "date separators disagree"),
    ("202001-02T12:34:56", "date separators disagree"),
    ("2020-W012T12:34:56", "week separators disagree"),
    ("2020W01-2T12:34:56", "week separators disagree"),
    ("2020-W01-8T12:34:56", "weekday above 7"),
    ("2020-W01-0T12:34:56", "weekday below 1"),
    ("2020-01-02T12:3456", "time separators disagree"),
    ("2020-01-02T1234:56", "time separators disagree"),
    ("2020-01-02T12:34:56.", "empty fraction"),
    ("2020-01-02T12:34:56.1234567", "fraction longer than six digits"),
    ("2020-01-02T12:34.5", "fraction without seconds"),
    ("2020-01-02T12:34:56,5", "comma fraction separator"),
    ("2020-01-02T1", "one-digit hour"),
    ("2020-01-02T12:34:56+1", "one-digit offset hour"),
    ("2020-01-02T12:34:56+12:3", "one-digit offset minute"),
    ("2020-01-02T12:34:56+12:", "dangling offset separator"),
    ("2020-01-02T12:34:56ZZ", "repeated designator"),
    ("2020-01-02T12:34:56z", "lowercase designator"),
    ("2020-01-02t12:34:56", "lowercase time designator"),
    ("2020-01-02 12:34:56", "space instead of T"),
    ("2020-01-02T12:34:56\u{2013}05:00", "en dash sign"),
    (" 2020-01-02T12:34:56", "leading space"),
    ("2020-01-02T12:34:56 ", "trailing space"),
    ("2020-01-02T12:34:56\n", "trailing newline"),
    ("020-01-02T12:34:56", "three-digit year"),
    ("+2020-01-02T12:34:56", "expanded year"),
    ("2020-1-02T12:34:56", "one-digit month"),
    ("2020-12T12:34:56", "month without day"),
    ("2020-12-123T12:34:56", "three-digit day"),
    ("2020--123T12:34:56", "doubled ordinal separator"),
    ("2020-\u{0661}23T12:34:56", "non-ASCII digit"),
];
