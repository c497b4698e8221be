//! Date coercion to `DateTime<Utc>`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_english::{parse_date_string, Dialect};

use crate::error::{Error, Result};

/// Input to [`coerce`]: an existing instant, a Unix timestamp in seconds, or
/// a date string.
pub enum DateInput {
    Instant(DateTime<Utc>),
    Timestamp(i64),
    Text(String),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Instant(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

/// Coerce a date-like value to `DateTime<Utc>`.
///
/// Existing instants pass through unchanged. Timestamps are interpreted as
/// seconds since the epoch. Strings first go through a format cascade
/// (RFC 3339, RFC 2822, `%Y-%m-%d %H:%M:%S`, `%Y-%m-%d`, `@<epoch>`), then
/// fall back to natural-language parsing (`now`, `tomorrow`,
/// `next tuesday`, `+1 week`, ...) anchored at the current time; anything
/// else fails with a `date.parse_failed` error.
pub fn coerce(input: impl Into<DateInput>) -> Result<DateTime<Utc>> {
    match input.into() {
        DateInput::Instant(value) => Ok(value),
        DateInput::Timestamp(secs) => from_timestamp(secs),
        DateInput::Text(text) => parse_text(text.trim()),
    }
}

fn from_timestamp(secs: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| Error::date_parse_failed(secs.to_string()))
}

fn parse_text(text: &str) -> Result<DateTime<Utc>> {
    if text.is_empty() {
        return Err(Error::date_parse_failed(text));
    }

    if let Some(epoch) = text.strip_prefix('@') {
        if let Ok(secs) = epoch.parse::<i64>() {
            return from_timestamp(secs);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&parsed));
    }

    if let Some(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(Utc.from_utc_datetime(&parsed));
    }

    // Natural-language fallback. The parser wants lowercase; the explicit
    // formats above have already had their shot, so case no longer matters.
    if let Ok(parsed) = parse_date_string(&text.to_lowercase(), Utc::now(), Dialect::Us) {
        return Ok(parsed);
    }

    Err(Error::date_parse_failed(text))
}
