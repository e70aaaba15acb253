use super::{nanos_to_number, number_to_nanos, split_nanos, TemporalCodec};
use crate::error::ParseError;
use crate::options::TemporalOptions;
use crate::patterns::DesignatorCursor;
use crate::token::Number;
use crate::value::{TemporalKind, TemporalValue};
use chrono::TimeDelta;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const SECONDS_PER_MINUTE: i128 = 60;
const SECONDS_PER_HOUR: i128 = 3_600;
const SECONDS_PER_DAY: i128 = 86_400;

impl TemporalCodec for TimeDelta {
    const KIND: TemporalKind = TemporalKind::Duration;
    const NUMERIC: bool = true;

    fn parse_text(text: &str, _options: &TemporalOptions) -> Result<Self, ParseError> {
        from_total_nanos(parse_duration(text)?, text)
    }

    fn from_number(number: Number, options: &TemporalOptions) -> Result<Self, ParseError> {
        from_total_nanos(number_to_nanos(number, options.timestamp_unit)?, number)
    }

    fn format_text(&self) -> String {
        format_duration(total_nanos(self))
    }

    fn to_number(&self, options: &TemporalOptions) -> Option<Number> {
        if !options.write_durations_as_timestamps {
            return None;
        }
        nanos_to_number(total_nanos(self), options.timestamp_unit)
    }

    fn into_value(self) -> TemporalValue {
        TemporalValue::Duration(self)
    }

    fn from_value_ref(value: &TemporalValue) -> Option<&Self> {
        match value {
            TemporalValue::Duration(duration) => Some(duration),
            _ => None,
        }
    }
}

fn total_nanos(duration: &TimeDelta) -> i128 {
    i128::from(duration.num_seconds()) * NANOS_PER_SECOND + i128::from(duration.subsec_nanos())
}

fn from_total_nanos(total: i128, input: impl std::fmt::Display) -> Result<TimeDelta, ParseError> {
    let (secs, nanos) = split_nanos(total)?;
    TimeDelta::new(secs, nanos).ok_or_else(|| ParseError::out_of_range(input))
}

/// Parses `[-]PnDTnHnMn.nS` into nanoseconds. Every component may carry its own sign.
fn parse_duration(text: &str) -> Result<i128, ParseError> {
    let mut cursor = DesignatorCursor::new(text);
    let negate = cursor.sign();
    cursor.expect_ignore_case('P')?;

    let mut total: i128 = 0;
    let mut components = 0;

    if !cursor.at_end() && !cursor.peek_is_ignore_case('T') {
        let days = cursor.signed_integer()?;
        cursor.expect_ignore_case('D')?;
        total = checked_component(text, total, days, SECONDS_PER_DAY * NANOS_PER_SECOND)?;
        components += 1;
    }

    if cursor.peek_is_ignore_case('T') {
        cursor.bump();
        let mut time_components = 0;
        for (unit, scale) in [('H', SECONDS_PER_HOUR), ('M', SECONDS_PER_MINUTE)] {
            if let Some(value) = cursor.try_component(unit)? {
                total = checked_component(text, total, value, scale * NANOS_PER_SECOND)?;
                time_components += 1;
            }
        }
        if let Some((whole, fraction)) = cursor.try_seconds()? {
            total = checked_component(text, total, whole, NANOS_PER_SECOND)?;
            total = total
                .checked_add(fraction)
                .ok_or_else(|| ParseError::out_of_range(text))?;
            time_components += 1;
        }
        if time_components == 0 {
            return Err(cursor.error());
        }
        components += time_components;
    }

    if components == 0 || !cursor.at_end() {
        return Err(cursor.error());
    }
    Ok(if negate { -total } else { total })
}

fn checked_component(text: &str, total: i128, value: i128, scale: i128) -> Result<i128, ParseError> {
    value
        .checked_mul(scale)
        .and_then(|nanos| total.checked_add(nanos))
        .ok_or_else(|| ParseError::out_of_range(text))
}

/// Writes hours, minutes and seconds under a single leading sign; zero is `PT0S`.
fn format_duration(total: i128) -> String {
    if total == 0 {
        return "PT0S".to_string();
    }
    let magnitude = total.unsigned_abs();
    let nanos = (magnitude % NANOS_PER_SECOND as u128) as u32;
    let seconds = magnitude / NANOS_PER_SECOND as u128;
    let hours = seconds / SECONDS_PER_HOUR as u128;
    let minutes = (seconds % SECONDS_PER_HOUR as u128) / SECONDS_PER_MINUTE as u128;
    let secs = seconds % SECONDS_PER_MINUTE as u128;

    let mut out = String::from(if total < 0 { "-PT" } else { "PT" });
    if hours != 0 {
        out.push_str(&format!("{}H", hours));
    }
    if minutes != 0 {
        out.push_str(&format!("{}M", minutes));
    }
    if secs != 0 || nanos != 0 {
        out.push_str(&secs.to_string());
        if nanos != 0 {
            let fraction = format!("{:09}", nanos);
            out.push('.');
            out.push_str(fraction.trim_end_matches('0'));
        }
        out.push('S');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<TimeDelta, ParseError> {
        TimeDelta::parse_text(text, &TemporalOptions::default())
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(parse("PT8H6M12.345S"), Ok(TimeDelta::milliseconds(29_172_345)));
        assert_eq!(parse("P2D"), Ok(TimeDelta::hours(48)));
        assert_eq!(parse("P1DT1S"), Ok(TimeDelta::seconds(86_401)));
        assert_eq!(parse("PT0.5S"), Ok(TimeDelta::milliseconds(500)));
        assert_eq!(parse("pt15m"), Ok(TimeDelta::minutes(15)));
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!(parse("-PT6H3M"), Ok(TimeDelta::minutes(-363)));
        assert_eq!(parse("PT-6H3M"), Ok(TimeDelta::minutes(-357)));
        assert_eq!(parse("-PT-6H+3M"), Ok(TimeDelta::minutes(357)));
        assert_eq!(parse("PT-0.5S"), Ok(TimeDelta::milliseconds(-500)));
    }

    #[test]
    fn test_parse_rejects() {
        for text in ["", "P", "PT", "PT1", "1H", "PT1H2H", "PT1S1M", "P1W", "PT1.S", "PT1.1234567891S", "PT1HX"] {
            assert!(parse(text).is_err(), "{text}");
        }
        assert!(matches!(
            parse("PT99999999999999999999H"),
            Err(ParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_format() {
        assert_eq!(TimeDelta::zero().format_text(), "PT0S");
        assert_eq!(TimeDelta::milliseconds(29_172_345).format_text(), "PT8H6M12.345S");
        assert_eq!(TimeDelta::hours(48).format_text(), "PT48H");
        assert_eq!(TimeDelta::milliseconds(-500).format_text(), "-PT0.5S");
        assert_eq!(TimeDelta::nanoseconds(1).format_text(), "PT0.000000001S");
        assert_eq!(TimeDelta::seconds(-3_661).format_text(), "-PT1H1M1S");
    }

    #[test]
    fn test_extremes_round_trip() {
        for duration in [TimeDelta::MAX, TimeDelta::MIN] {
            assert_eq!(parse(&duration.format_text()), Ok(duration));
        }
    }

    #[test]
    fn test_numeric() {
        let millis = TemporalOptions::new().with_write_durations_as_timestamps(true);
        assert_eq!(
            TimeDelta::from_number(Number::Integer(1_500), &millis),
            Ok(TimeDelta::milliseconds(1_500))
        );
        assert_eq!(
            TimeDelta::seconds(90).to_number(&millis),
            Some(Number::Integer(90_000))
        );
        assert_eq!(TimeDelta::seconds(90).to_number(&TemporalOptions::default()), None);
        assert!(matches!(
            TimeDelta::from_number(Number::Integer(i64::MAX), &millis.with_timestamp_unit(crate::TimestampUnit::Seconds)),
            Err(ParseError::OutOfRange(_))
        ));
    }
}
