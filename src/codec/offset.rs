use super::{join_nanos, nanos_to_number, number_to_nanos, split_nanos, TemporalCodec};
use crate::error::ParseError;
use crate::options::TemporalOptions;
use crate::patterns;
use crate::token::Number;
use crate::value::{TemporalKind, TemporalValue};
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};
use std::borrow::Cow;

impl TemporalCodec for DateTime<FixedOffset> {
    const KIND: TemporalKind = TemporalKind::OffsetDateTime;
    const NUMERIC: bool = true;

    fn parse_text(text: &str, options: &TemporalOptions) -> Result<Self, ParseError> {
        let date_time = parse_offset_date_time(text)?;
        Ok(adjust(date_time, options))
    }

    fn from_number(number: Number, options: &TemporalOptions) -> Result<Self, ParseError> {
        let instant = instant_from_number(number, options)?;
        Ok(instant.with_timezone(&options.time_zone))
    }

    fn format_text(&self) -> String {
        format_offset_date_time(self)
    }

    fn to_number(&self, options: &TemporalOptions) -> Option<Number> {
        if !options.write_dates_as_timestamps {
            return None;
        }
        timestamp_number(self, options)
    }

    fn into_value(self) -> TemporalValue {
        TemporalValue::OffsetDateTime(self)
    }

    fn from_value_ref(value: &TemporalValue) -> Option<&Self> {
        match value {
            TemporalValue::OffsetDateTime(date_time) => Some(date_time),
            _ => None,
        }
    }
}

/// Parses RFC 3339 text, also accepting a time without seconds and signed
/// or five-digit years.
pub(crate) fn parse_offset_date_time(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let err = match DateTime::parse_from_rfc3339(text) {
        Ok(date_time) => return Ok(date_time),
        Err(err) => err,
    };
    let text = zulu_as_offset(text);
    [patterns::OFFSET_DATE_TIME, patterns::OFFSET_DATE_TIME_NO_SECONDS]
        .into_iter()
        .find_map(|pattern| DateTime::parse_from_str(&text, pattern).ok())
        .ok_or_else(|| ParseError::from(err))
}

/// `%:z` has no `Z` form.
fn zulu_as_offset(text: &str) -> Cow<'_, str> {
    match text.strip_suffix(['Z', 'z']) {
        Some(rest) => Cow::Owned(format!("{rest}+00:00")),
        None => Cow::Borrowed(text),
    }
}

pub(crate) fn format_offset_date_time<Tz: TimeZone>(date_time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub(crate) fn adjust(
    date_time: DateTime<FixedOffset>,
    options: &TemporalOptions,
) -> DateTime<FixedOffset> {
    if options.adjust_to_context_time_zone {
        date_time.with_timezone(&options.time_zone)
    } else {
        date_time
    }
}

pub(crate) fn instant_from_number(
    number: Number,
    options: &TemporalOptions,
) -> Result<DateTime<Utc>, ParseError> {
    let (secs, nanos) = split_nanos(number_to_nanos(number, options.timestamp_unit)?)?;
    DateTime::<Utc>::from_timestamp(secs, nanos).ok_or_else(|| ParseError::out_of_range(number))
}

/// Leap seconds have no timestamp of their own, so they stay as text.
pub(crate) fn timestamp_number<Tz: TimeZone>(
    date_time: &DateTime<Tz>,
    options: &TemporalOptions,
) -> Option<Number> {
    if date_time.timestamp_subsec_nanos() >= 1_000_000_000 {
        return None;
    }
    let total = join_nanos(date_time.timestamp(), date_time.timestamp_subsec_nanos());
    nanos_to_number(total, options.timestamp_unit)
}
