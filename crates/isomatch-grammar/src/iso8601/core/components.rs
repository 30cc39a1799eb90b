//! Borrowed views of a matched ISO 8601 datetime.
//!
//! Every field is a slice of the matched input. Values are syntactic only:
//! month `13` or hour `29` are carried as written.

use std::fmt;

use serde::Serialize;

use super::TzSign;

/// Which of the three date notations a date was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateNotation {
    Calendar,
    Week,
    Ordinal,
}

/// The part of a date following the year.
///
/// Exactly one notation is present per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "notation", rename_all = "snake_case")]
pub enum DateForm<'a> {
    /// `YYYY-MM-DD` or `YYYYMMDD`.
    Calendar { month: &'a str, day: &'a str },
    /// `YYYY-Www-D` or `YYYYWwwD`.
    Week { week: &'a str, weekday: &'a str },
    /// `YYYY-DDD` or `YYYYDDD`.
    Ordinal { ordinalday: &'a str },
}

impl DateForm<'_> {
    #[must_use]
    pub const fn notation(&self) -> DateNotation {
        match self {
            Self::Calendar { .. } => DateNotation::Calendar,
            Self::Week { .. } => DateNotation::Week,
            Self::Ordinal { .. } => DateNotation::Ordinal,
        }
    }
}

/// Date super-group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateComponents<'a> {
    /// The whole date as written.
    pub text: &'a str,
    /// Four-digit year.
    pub year: &'a str,
    #[serde(flatten)]
    pub form: DateForm<'a>,
}

/// Time super-group: `hh[[:]mm[[:]ss[.f]]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeComponents<'a> {
    /// The whole time as written.
    pub text: &'a str,
    pub hour: &'a str,
    pub minute: Option<&'a str>,
    /// Only present together with `minute`.
    pub second: Option<&'a str>,
    /// One to six fraction digits, only present together with `second`.
    pub microsecond: Option<&'a str>,
}

/// Signed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TzOffset<'a> {
    pub sign: TzSign,
    pub hour: &'a str,
    pub minute: Option<&'a str>,
    /// Only present together with `minute`.
    pub second: Option<&'a str>,
}

impl TzOffset<'_> {
    /// Signed offset in seconds.
    ///
    /// Fields are not range checked, so `+99` yields 356400.
    #[must_use]
    pub fn total_seconds(&self) -> Option<i32> {
        let hour = decimal(self.hour)?;
        let minute = self.minute.map_or(Some(0), decimal)?;
        let second = self.second.map_or(Some(0), decimal)?;
        let total = hour
            .checked_mul(3600)?
            .checked_add(minute.checked_mul(60)?)?
            .checked_add(second)?;
        let total = i32::try_from(total).ok()?;

        Some(if self.sign.is_negative() { -total } else { total })
    }
}

/// Timezone super-group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TzComponents<'a> {
    /// The whole designator as written.
    pub text: &'a str,
    /// `None` for the `Z` designator.
    pub offset: Option<TzOffset<'a>>,
}

impl TzComponents<'_> {
    #[must_use]
    pub const fn is_utc_designator(&self) -> bool {
        self.offset.is_none()
    }
}

/// A successfully decomposed `date T time [tzinfo]` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatetimeComponents<'a> {
    pub date: DateComponents<'a>,
    pub time: TimeComponents<'a>,
    pub tzinfo: Option<TzComponents<'a>>,
}

impl<'a> DatetimeComponents<'a> {
    #[must_use]
    pub const fn date(&self) -> &'a str {
        self.date.text
    }

    #[must_use]
    pub const fn year(&self) -> &'a str {
        self.date.year
    }

    #[must_use]
    pub const fn month(&self) -> Option<&'a str> {
        match self.date.form {
            DateForm::Calendar { month, .. } => Some(month),
            _ => None,
        }
    }

    #[must_use]
    pub const fn day(&self) -> Option<&'a str> {
        match self.date.form {
            DateForm::Calendar { day, .. } => Some(day),
            _ => None,
        }
    }

    #[must_use]
    pub const fn week(&self) -> Option<&'a str> {
        match self.date.form {
            DateForm::Week { week, .. } => Some(week),
            _ => None,
        }
    }

    #[must_use]
    pub const fn weekday(&self) -> Option<&'a str> {
        match self.date.form {
            DateForm::Week { weekday, .. } => Some(weekday),
            _ => None,
        }
    }

    #[must_use]
    pub const fn ordinalday(&self) -> Option<&'a str> {
        match self.date.form {
            DateForm::Ordinal { ordinalday } => Some(ordinalday),
            _ => None,
        }
    }

    #[must_use]
    pub const fn notation(&self) -> DateNotation {
        self.date.form.notation()
    }

    #[must_use]
    pub const fn time(&self) -> &'a str {
        self.time.text
    }

    #[must_use]
    pub const fn hour(&self) -> &'a str {
        self.time.hour
    }

    #[must_use]
    pub const fn minute(&self) -> Option<&'a str> {
        self.time.minute
    }

    #[must_use]
    pub const fn second(&self) -> Option<&'a str> {
        self.time.second
    }

    #[must_use]
    pub const fn microsecond(&self) -> Option<&'a str> {
        self.time.microsecond
    }

    /// Fractional second scaled to microseconds (`.5` is 500000).
    #[must_use]
    pub fn microsecond_value(&self) -> Option<u32> {
        let digits = self.time.microsecond?;
        if digits.len() > 6 {
            return None;
        }
        let scale = 10_u32.pow(u32::try_from(6 - digits.len()).ok()?);

        Some(decimal(digits)? * scale)
    }

    #[must_use]
    pub fn tzinfo(&self) -> Option<&'a str> {
        self.tzinfo.map(|tz| tz.text)
    }

    fn offset(&self) -> Option<TzOffset<'a>> {
        self.tzinfo.and_then(|tz| tz.offset)
    }

    #[must_use]
    pub fn tzsign(&self) -> Option<TzSign> {
        self.offset().map(|offset| offset.sign)
    }

    #[must_use]
    pub fn tzhour(&self) -> Option<&'a str> {
        self.offset().map(|offset| offset.hour)
    }

    #[must_use]
    pub fn tzminute(&self) -> Option<&'a str> {
        self.offset().and_then(|offset| offset.minute)
    }

    #[must_use]
    pub fn tzsecond(&self) -> Option<&'a str> {
        self.offset().and_then(|offset| offset.second)
    }
}

impl fmt::Display for DatetimeComponents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date.text, self.time.text)?;
        if let Some(tzinfo) = &self.tzinfo {
            f.write_str(tzinfo.text)?;
        }
        Ok(())
    }
}

/// Reads an all-ASCII-digit string as a number.
fn decimal(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0_u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(c.to_digit(10)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DatetimeComponents<'static> {
        DatetimeComponents {
            date: DateComponents {
                text: "2020-W01-2",
                year: "2020",
                form: DateForm::Week {
                    week: "01",
                    weekday: "2",
                },
            },
            time: TimeComponents {
                text: "12:34:56.5",
                hour: "12",
                minute: Some("34"),
                second: Some("56"),
                microsecond: Some("5"),
            },
            tzinfo: Some(TzComponents {
                text: "\u{2212}05:30",
                offset: Some(TzOffset {
                    sign: TzSign::MinusSign,
                    hour: "05",
                    minute: Some("30"),
                    second: None,
                }),
            }),
        }
    }

    #[test]
    fn flat_accessors_follow_date_form() {
        let components = sample();

        assert_eq!(components.notation(), DateNotation::Week);
        assert_eq!(components.week(), Some("01"));
        assert_eq!(components.weekday(), Some("2"));
        assert_eq!(components.month(), None);
        assert_eq!(components.day(), None);
        assert_eq!(components.ordinalday(), None);
    }

    #[test]
    fn microsecond_value_scales_fraction() {
        let mut components = sample();
        assert_eq!(components.microsecond_value(), Some(500_000));

        components.time.microsecond = Some("000123");
        assert_eq!(components.microsecond_value(), Some(123));

        components.time.microsecond = None;
        assert_eq!(components.microsecond_value(), None);
    }

    #[test]
    fn offset_total_seconds_is_signed() {
        let components = sample();
        let offset = components.tzinfo.and_then(|tz| tz.offset).unwrap();

        assert_eq!(offset.total_seconds(), Some(-(5 * 3600 + 30 * 60)));
        assert_eq!(components.tzsign(), Some(TzSign::MinusSign));
        assert_eq!(components.tzsecond(), None);
    }

    #[test]
    fn display_reassembles_input() {
        assert_eq!(sample().to_string(), "2020-W01-2T12:34:56.5\u{2212}05:30");
    }

    #[test]
    fn decimal_rejects_non_digits() {
        assert_eq!(decimal("0042"), Some(42));
        assert_eq!(decimal("+1"), None);
        assert_eq!(decimal(""), None);
    }
}
