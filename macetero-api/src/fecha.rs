//! ISO-8601 timestamp handling shared by the server and its clients.
//!
//! Accepted inputs mirror what a lenient ISO-8601 reader takes: full RFC 3339
//! date-times, date-times separated by `T` or a space down to hour precision
//! (optional fractional seconds, optional `Z` or `+HH:MM` offset), and bare
//! dates. Values without an offset are read as UTC.

use std::borrow::Cow;

use time::format_description::well_known::Rfc3339;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

const OFFSET_FORMATS: &[&[FormatItem<'static>]] = &[
    format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]"
    ),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"),
    format_description!("[year]-[month]-[day]T[hour][offset_hour sign:mandatory]:[offset_minute]"),
    format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]"
    ),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"),
    format_description!("[year]-[month]-[day] [hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"),
    format_description!("[year]-[month]-[day] [hour][offset_hour sign:mandatory]:[offset_minute]"),
];

const NAIVE_FORMATS: &[&[FormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day] [hour]"),
];

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse an ISO-8601 timestamp, returning it normalized to UTC.
///
/// A trailing `Z` is read as `+00:00`, so every precision accepts it.
pub fn parse(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();

    if let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(to_utc(parsed));
    }

    let with_offset = match value.strip_suffix(['Z', 'z']) {
        Some(naive) => Cow::Owned(format!("{naive}+00:00")),
        None => Cow::Borrowed(value),
    };

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = OffsetDateTime::parse(&with_offset, format) {
            return Some(to_utc(parsed));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = PrimitiveDateTime::parse(value, format) {
            return Some(parsed.assume_utc());
        }
    }

    Date::parse(value, DATE_FORMAT)
        .ok()
        .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc())
}

pub fn to_utc(value: OffsetDateTime) -> OffsetDateTime {
    value.to_offset(UtcOffset::UTC)
}
