use super::offset::{format_offset_date_time, instant_from_number, parse_offset_date_time, timestamp_number};
use super::TemporalCodec;
use crate::error::ParseError;
use crate::options::TemporalOptions;
use crate::token::Number;
use crate::value::{TemporalKind, TemporalValue};
use chrono::{DateTime, Utc};

impl TemporalCodec for DateTime<Utc> {
    const KIND: TemporalKind = TemporalKind::Instant;
    const NUMERIC: bool = true;

    fn parse_text(text: &str, _options: &TemporalOptions) -> Result<Self, ParseError> {
        parse_offset_date_time(text).map(|date_time| date_time.with_timezone(&Utc))
    }

    fn from_number(number: Number, options: &TemporalOptions) -> Result<Self, ParseError> {
        instant_from_number(number, options)
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
        TemporalValue::Instant(self)
    }

    fn from_value_ref(value: &TemporalValue) -> Option<&Self> {
        match value {
            TemporalValue::Instant(instant) => Some(instant),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimestampUnit;

    #[test]
    fn test_text_is_normalised_to_utc() {
        let options = TemporalOptions::default();
        let value = DateTime::<Utc>::parse_text("2000-01-01T01:00:00+01:00", &options).unwrap();
        assert_eq!(value.timestamp(), 946_684_800);
        assert_eq!(value.format_text(), "2000-01-01T00:00:00Z");
    }

    #[test]
    fn test_numeric_units() {
        let seconds = TemporalOptions::new().with_timestamp_unit(TimestampUnit::Seconds);
        let millis = TemporalOptions::default();
        let nanos = TemporalOptions::new().with_timestamp_unit(TimestampUnit::Nanoseconds);

        let a = DateTime::<Utc>::from_number(Number::Integer(946_684_800), &seconds).unwrap();
        let b = DateTime::<Utc>::from_number(Number::Integer(946_684_800_000), &millis).unwrap();
        let c = DateTime::<Utc>::from_number(Number::Integer(946_684_800_000_000_000), &nanos).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);

        let fractional = DateTime::<Utc>::from_number(Number::Float(946_684_800.5), &seconds).unwrap();
        assert_eq!(fractional.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_before_epoch() {
        let millis = TemporalOptions::default();
        let value = DateTime::<Utc>::from_number(Number::Integer(-1), &millis).unwrap();
        assert_eq!(value.format_text(), "1969-12-31T23:59:59.999Z");

        let writing = millis.with_write_dates_as_timestamps(true);
        assert_eq!(value.to_number(&writing), Some(Number::Integer(-1)));
    }

    #[test]
    fn test_out_of_range_number() {
        let seconds = TemporalOptions::new().with_timestamp_unit(TimestampUnit::Seconds);
        assert!(matches!(
            DateTime::<Utc>::from_number(Number::Integer(i64::MAX), &seconds),
            Err(ParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_nanosecond_overflow_falls_back_to_text() {
        let nanos = TemporalOptions::timestamps().with_timestamp_unit(TimestampUnit::Nanoseconds);
        let far = DateTime::<Utc>::parse_text("3000-01-01T00:00:00Z", &nanos).unwrap();
        assert_eq!(far.to_number(&nanos), None);
        assert_eq!(far.encode(&nanos), crate::Token::from("3000-01-01T00:00:00Z"));
    }

    #[test]
    fn test_unsigned_nanoseconds_are_exact() {
        let nanos = TemporalOptions::timestamps().with_timestamp_unit(TimestampUnit::Nanoseconds);
        let value = crate::from_str::<DateTime<Utc>>("9223372036854775809", &nanos)
            .unwrap()
            .unwrap();
        assert_eq!(value.timestamp(), 9_223_372_036);
        assert_eq!(value.timestamp_subsec_nanos(), 854_775_809);
        assert_eq!(
            value.to_number(&nanos),
            Some(Number::Unsigned(9_223_372_036_854_775_809))
        );
        assert_eq!(crate::to_string(&value, &nanos).unwrap(), "9223372036854775809");
    }

    #[test]
    fn test_far_years_round_trip_as_text() {
        let millis = TemporalOptions::default();
        let far = DateTime::<Utc>::from_number(Number::Integer(253_402_300_800_000), &millis).unwrap();
        assert_eq!(far.format_text(), "+10000-01-01T00:00:00Z");
        assert_eq!(DateTime::<Utc>::parse_text(&far.format_text(), &millis).unwrap(), far);

        let early = DateTime::<Utc>::parse_text("-0001-06-01T00:00:00Z", &millis).unwrap();
        assert_eq!(early.format_text(), "-0001-06-01T00:00:00Z");
        assert_eq!(DateTime::<Utc>::parse_text(&early.format_text(), &millis).unwrap(), early);
    }
}
