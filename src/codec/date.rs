use super::offset::parse_offset_date_time;
use super::TemporalCodec;
use crate::error::ParseError;
use crate::options::TemporalOptions;
use crate::patterns;
use crate::token::Number;
use crate::value::{TemporalKind, TemporalValue};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// `num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAY_FROM_CE: i64 = 719_163;

impl TemporalCodec for NaiveDate {
    const KIND: TemporalKind = TemporalKind::Date;
    const NUMERIC: bool = true;

    fn parse_text(text: &str, options: &TemporalOptions) -> Result<Self, ParseError> {
        if !options.lenient {
            return Ok(NaiveDate::parse_from_str(text, patterns::DATE)?);
        }
        let (date, rest) = NaiveDate::parse_and_remainder(text, patterns::DATE)?;
        let split = text.len() - rest.len();
        match rest.strip_prefix(['T', 't']) {
            None if rest.is_empty() => Ok(date),
            None => Err(ParseError::invalid(text, split)),
            Some(time) => parse_date_part(&format!("{}T{}", &text[..split], time)),
        }
    }

    fn from_number(number: Number, _options: &TemporalOptions) -> Result<Self, ParseError> {
        let epoch_day = number
            .as_i64()
            .ok_or_else(|| ParseError::out_of_range(number))?;
        epoch_day
            .checked_add(UNIX_EPOCH_DAY_FROM_CE)
            .and_then(|days| i32::try_from(days).ok())
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| ParseError::out_of_range(number))
    }

    fn format_text(&self) -> String {
        self.format(patterns::DATE).to_string()
    }

    fn to_number(&self, options: &TemporalOptions) -> Option<Number> {
        options.write_dates_as_timestamps.then(|| {
            Number::Integer(i64::from(self.num_days_from_ce()) - UNIX_EPOCH_DAY_FROM_CE)
        })
    }

    fn into_value(self) -> TemporalValue {
        TemporalValue::Date(self)
    }

    fn from_value_ref(value: &TemporalValue) -> Option<&Self> {
        match value {
            TemporalValue::Date(date) => Some(date),
            _ => None,
        }
    }
}

/// Keeps the date of a date-time text, with or without an offset.
fn parse_date_part(text: &str) -> Result<NaiveDate, ParseError> {
    match NaiveDateTime::parse_from_str(text, patterns::DATE_TIME) {
        Ok(date_time) => Ok(date_time.date()),
        Err(err) => parse_offset_date_time(text)
            .map(|date_time| date_time.date_naive())
            .map_err(|_| ParseError::from(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_canonical_text() {
        let options = TemporalOptions::default();
        let value = NaiveDate::parse_text("2000-01-01", &options).unwrap();
        assert_eq!(value.year(), 2000);
        assert_eq!(value.month(), Month::January.number_from_month());
        assert_eq!(value.day(), 1);
    }

    #[test]
    fn test_invalid_calendar_fields() {
        let options = TemporalOptions::default();
        for text in ["2000-13-01", "2001-02-29", "2000-00-10", "notalocaldate", ""] {
            assert!(
                matches!(NaiveDate::parse_text(text, &options), Err(ParseError::Chrono(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn test_date_time_text_needs_leniency() {
        let strict = TemporalOptions::default();
        assert!(NaiveDate::parse_text("2000-01-01T10:15:30", &strict).is_err());

        let lenient = TemporalOptions::new().with_lenient(true);
        assert_eq!(
            NaiveDate::parse_text("2000-01-01T10:15:30", &lenient),
            Ok(date(2000, 1, 1))
        );
        assert_eq!(
            NaiveDate::parse_text("2000-01-01T23:15:30Z", &lenient),
            Ok(date(2000, 1, 1))
        );
        assert_eq!(
            NaiveDate::parse_text("2000-01-01T00:30:00+02:00", &lenient),
            Ok(date(2000, 1, 1))
        );
        assert!(NaiveDate::parse_text("2000-01-01Tnoon", &lenient).is_err());
    }

    #[test]
    fn test_lenient_finds_the_separator_after_the_date() {
        let lenient = TemporalOptions::lenient();
        assert_eq!(
            NaiveDate::parse_text("2000-01-01t10:15:30", &lenient),
            Ok(date(2000, 1, 1))
        );
        assert_eq!(
            NaiveDate::parse_text("+10000-01-01T10:15:30", &lenient),
            Ok(date(10_000, 1, 1))
        );
        assert_eq!(
            NaiveDate::parse_text("-0001-06-01T00:00:00Z", &lenient),
            Ok(date(-1, 6, 1))
        );
        assert_eq!(NaiveDate::parse_text("+10000-01-01", &lenient), Ok(date(10_000, 1, 1)));
        assert!(matches!(
            NaiveDate::parse_text("2000-01-01 10:15:30", &lenient),
            Err(ParseError::Invalid { index: 10, .. })
        ));
    }

    #[test]
    fn test_epoch_days() {
        let options = TemporalOptions::default();
        assert_eq!(
            NaiveDate::from_number(Number::Integer(0), &options),
            Ok(date(1970, 1, 1))
        );
        assert_eq!(
            NaiveDate::from_number(Number::Integer(10_957), &options),
            Ok(date(2000, 1, 1))
        );
        assert_eq!(
            NaiveDate::from_number(Number::Integer(-1), &options),
            Ok(date(1969, 12, 31))
        );
        assert!(NaiveDate::from_number(Number::Float(1.5), &options).is_err());
        assert!(NaiveDate::from_number(Number::Integer(i64::MAX), &options).is_err());
    }

    #[test]
    fn test_format_and_number() {
        let value = date(2000, 1, 1);
        assert_eq!(value.format_text(), "2000-01-01");
        assert_eq!(value.to_number(&TemporalOptions::default()), None);
        assert_eq!(
            value.to_number(&TemporalOptions::timestamps()),
            Some(Number::Integer(10_957))
        );
    }
}
