//! The ISO 8601 `date T time [tzinfo]` grammar.
//!
//! ```text
//! datetime   := date "T" time tzinfo?
//! date       := year ( sep MM sep DD | sep "W" ww sep D | "-"? DDD )
//! time       := hh ( sep mm ( sep ss ( "." f{1,6} )? )? )?
//! tzinfo     := "Z" | sign hh ( ":"? mm ( ":"? ss )? )?
//! sign       := "+" | "-" | U+2212
//! ```
//!
//! Within the calendar date, the week date and the time, the second
//! separator must repeat the choice made for the first one. The timezone
//! separators are independent of each other and of everything else.
//!
//! Each rule leaves the cursor untouched when it fails. Optional groups are
//! taken greedily and never revisited: the character that may follow each
//! group can never start it, so backing out of a group that matched cannot
//! let the rest of the input match.

use super::cursor::Cursor;
use crate::iso8601::core::{
    DateComponents, DateForm, DatetimeComponents, TimeComponents, TzComponents, TzOffset, TzSign,
};

pub fn datetime<'a>(cursor: &mut Cursor<'a>) -> Option<DatetimeComponents<'a>> {
    cursor.attempt(|cursor| {
        let date = date(cursor)?;
        if !cursor.eat('T') {
            return None;
        }
        let time = time(cursor)?;
        let tzinfo = tzinfo(cursor);

        Some(DatetimeComponents { date, time, tzinfo })
    })
}

pub fn date<'a>(cursor: &mut Cursor<'a>) -> Option<DateComponents<'a>> {
    cursor.attempt(|cursor| {
        let start = cursor.position();
        let year = cursor.digits(4)?;
        // First alternative wins
        let form = cursor
            .attempt(calendar_date)
            .or_else(|| cursor.attempt(week_date))
            .or_else(|| cursor.attempt(ordinal_date))?;

        Some(DateComponents {
            text: cursor.since(start),
            year,
            form,
        })
    })
}

fn calendar_date<'a>(cursor: &mut Cursor<'a>) -> Option<DateForm<'a>> {
    let sep = cursor.separator('-');
    let month = cursor.digits(2)?;
    if !cursor.repeat_separator('-', sep) {
        return None;
    }
    let day = cursor.digits(2)?;

    Some(DateForm::Calendar { month, day })
}

fn week_date<'a>(cursor: &mut Cursor<'a>) -> Option<DateForm<'a>> {
    let sep = cursor.separator('-');
    if !cursor.eat('W') {
        return None;
    }
    let week = cursor.digits(2)?;
    if !cursor.repeat_separator('-', sep) {
        return None;
    }
    let weekday = cursor.digit_in('1', '7')?;

    Some(DateForm::Week { week, weekday })
}

fn ordinal_date<'a>(cursor: &mut Cursor<'a>) -> Option<DateForm<'a>> {
    cursor.eat('-');
    let ordinalday = cursor.digits(3)?;

    Some(DateForm::Ordinal { ordinalday })
}

pub fn time<'a>(cursor: &mut Cursor<'a>) -> Option<TimeComponents<'a>> {
    cursor.attempt(|cursor| {
        let start = cursor.position();
        let hour = cursor.digits(2)?;

        let mut time = TimeComponents {
            text: "",
            hour,
            minute: None,
            second: None,
            microsecond: None,
        };

        cursor.attempt(|cursor| {
            let sep = cursor.separator(':');
            time.minute = Some(cursor.digits(2)?);

            cursor.attempt(|cursor| {
                if !cursor.repeat_separator(':', sep) {
                    return None;
                }
                time.second = Some(cursor.digits(2)?);
                time.microsecond = cursor.attempt(|cursor| {
                    if !cursor.eat('.') {
                        return None;
                    }
                    cursor.digits_between(1, 6)
                });
                Some(())
            });
            Some(())
        });

        time.text = cursor.since(start);
        Some(time)
    })
}

pub fn tzinfo<'a>(cursor: &mut Cursor<'a>) -> Option<TzComponents<'a>> {
    cursor.attempt(|cursor| {
        let start = cursor.position();
        let offset = if cursor.eat('Z') {
            None
        } else {
            Some(offset(cursor)?)
        };

        Some(TzComponents {
            text: cursor.since(start),
            offset,
        })
    })
}

fn offset<'a>(cursor: &mut Cursor<'a>) -> Option<TzOffset<'a>> {
    let sign = cursor.eat_map(TzSign::from_char)?;
    let hour = cursor.digits(2)?;

    let mut offset = TzOffset {
        sign,
        hour,
        minute: None,
        second: None,
    };

    cursor.attempt(|cursor| {
        cursor.eat(':');
        offset.minute = Some(cursor.digits(2)?);
        offset.second = cursor.attempt(|cursor| {
            cursor.eat(':');
            cursor.digits(2)
        });
        Some(())
    });

    Some(offset)
}
