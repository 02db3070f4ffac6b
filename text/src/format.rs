//! Canonical text forms of the primitive types. These are the exact strings produced by
//! [`crate::TextWriter`] and are stable across releases.
use base64::Engine;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serwrite::EnumValue;
use uuid::Uuid;

/// Formats a [`bool`] as `true` or `false`.
pub fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Formats an integer in decimal.
pub fn int_text(value: i64) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(value).to_owned()
}

/// Formats a floating-point number as the shortest decimal which reads back to the same value.
/// Integral values keep a trailing `.0`. Non-finite values are written as `NaN`, `inf` and
/// `-inf`.
pub fn float_text(value: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    buffer.format(value).to_owned()
}

/// Formats a [`Uuid`] in its hyphenated, lowercase form.
pub fn uuid_text(value: Uuid) -> String {
    value.hyphenated().to_string()
}

/// Formats a date and time in ISO-8601 extended form, followed by its numeric offset from UTC
/// (e.g. `+02:00`). The time part is written as by [`time_text`].
pub fn datetime_text(value: DateTime<FixedOffset>) -> String {
    let mut text = naive_datetime_text(value.naive_local());
    text.push_str(&value.format("%:z").to_string());
    text
}

/// Formats a date and time without an offset as `YYYY-MM-DDTHH:MM:SS[.ffffff]`.
pub fn naive_datetime_text(value: NaiveDateTime) -> String {
    format!("{}T{}", date_text(value.date()), time_text(value.time()))
}

/// Formats a date as `YYYY-MM-DD`.
pub fn date_text(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Formats a time of day as `HH:MM:SS`, followed by exactly six digits of fractional seconds
/// when the microsecond is non-zero. Precision below a microsecond is truncated. A leap second
/// is written as second `60`.
pub fn time_text(value: NaiveTime) -> String {
    let (second, nanos) = match value.nanosecond().checked_sub(1_000_000_000) {
        Some(nanos) => (60, nanos),
        None => (value.second(), value.nanosecond()),
    };
    let micros = nanos / 1_000;
    if micros == 0 {
        format!("{:02}:{:02}:{:02}", value.hour(), value.minute(), second)
    } else {
        format!("{:02}:{:02}:{:02}.{:06}", value.hour(), value.minute(), second, micros)
    }
}

/// Formats a duration as an ISO-8601 duration, e.g. `PT90S`.
pub fn duration_text(value: TimeDelta) -> String {
    value.to_string()
}

/// Gets the symbolic name of an enum member.
pub fn enum_text(value: &dyn EnumValue) -> &'static str {
    value.name()
}

/// Encodes bytes as standard, padded base64.
pub fn bytes_text(value: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(value)
}
