//! Per-kind temporal codecs.
//!
//! A codec turns one scalar [`Token`] into one temporal value and back. Every
//! kind implements [`TemporalCodec`]; the array and null conventions shared by
//! all kinds live in [`dispatch`](crate::dispatch), not here.
//!
//! | kind | text | number |
//! |------|------|--------|
//! | `NaiveDate` | `2000-01-01` | days since 1970-01-01 |
//! | `NaiveTime` | `10:15:30.5` | - |
//! | `NaiveDateTime` | `2000-01-01T10:15:30` | - |
//! | `DateTime<FixedOffset>` | `2000-01-01T10:15:30+01:00` | epoch timestamp |
//! | `ZonedDateTime` | `2000-01-01T10:15:30+01:00[Europe/Paris]` | epoch timestamp |
//! | `DateTime<Utc>` | `2000-01-01T09:15:30Z` | epoch timestamp |
//! | `TimeDelta` | `PT1H30M` | length |
//! | `Period` | `P1Y2M3D` | - |
//!
//! Timestamps and lengths are counted in the configured
//! [`TimestampUnit`](crate::TimestampUnit).

mod date;
mod date_time;
mod duration;
mod instant;
mod offset;
mod period;
mod time;
mod zoned;

pub use period::Period;
pub use zoned::ZonedDateTime;

use crate::error::{Error, ParseError, Result};
use crate::options::{TemporalOptions, TimestampUnit};
use crate::token::{Number, Token};
use crate::value::{TemporalKind, TemporalValue};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Converts one temporal kind to and from scalar tokens.
///
/// Implementors supply the kind's grammar; [`decode`](TemporalCodec::decode)
/// and [`encode`](TemporalCodec::encode) are provided on top of it.
pub trait TemporalCodec: Sized + Send + Sync + 'static {
    const KIND: TemporalKind;

    /// Whether the kind has a numeric representation.
    const NUMERIC: bool = false;

    /// Parses the kind's canonical text.
    fn parse_text(text: &str, options: &TemporalOptions) -> std::result::Result<Self, ParseError>;

    /// Builds a value from a numeric token. Only called when [`NUMERIC`](TemporalCodec::NUMERIC) holds.
    fn from_number(
        number: Number,
        options: &TemporalOptions,
    ) -> std::result::Result<Self, ParseError> {
        let _ = (number, options);
        Err(ParseError::NoNumericForm)
    }

    /// Writes the kind's canonical text.
    fn format_text(&self) -> String;

    /// Returns the numeric form when it is enabled for writing and the value fits it.
    fn to_number(&self, options: &TemporalOptions) -> Option<Number> {
        let _ = options;
        None
    }

    fn into_value(self) -> TemporalValue;

    fn from_value_ref(value: &TemporalValue) -> Option<&Self>;

    /// Decodes one scalar token.
    ///
    /// Null decodes to `None`. Arrays, objects and booleans are rejected here;
    /// use [`dispatch::decode`](crate::dispatch::decode) for the array conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use serde_datetime::{token, ErrorKind, TemporalCodec, TemporalOptions};
    ///
    /// let options = TemporalOptions::default();
    /// let date = NaiveDate::decode(&token!("2000-01-01"), &options).unwrap();
    /// assert_eq!(date, NaiveDate::from_ymd_opt(2000, 1, 1));
    ///
    /// let err = NaiveDate::decode(&token!("2000-13-01"), &options).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::MalformedValue);
    /// ```
    fn decode(token: &Token, options: &TemporalOptions) -> Result<Option<Self>> {
        match token {
            Token::Null => Ok(None),
            Token::String(text) => {
                let text = if options.lenient {
                    text.trim()
                } else {
                    text.as_str()
                };
                Self::parse_text(text, options)
                    .map(Some)
                    .map_err(|source| Error::malformed(Self::KIND, token.to_string(), source))
            }
            Token::Number(number) if Self::NUMERIC => Self::from_number(*number, options)
                .map(Some)
                .map_err(|source| Error::malformed(Self::KIND, token.to_string(), source)),
            Token::Number(number) => Err(Error::unsupported_representation(Self::KIND, *number)),
            other => Err(Error::unexpected_shape(
                Self::KIND,
                other.shape(),
                "codecs only decode scalar tokens",
            )),
        }
    }

    /// Encodes the value as a string token, or a number token when the numeric form is active.
    fn encode(&self, options: &TemporalOptions) -> Token {
        match self.to_number(options) {
            Some(number) => Token::Number(number),
            None => Token::String(self.format_text()),
        }
    }
}

/// Reads a numeric token as a count of nanoseconds.
///
/// Integers count whole units. Floats carry a fraction of the unit, rounded to
/// the nearest nanosecond.
pub(crate) fn number_to_nanos(
    number: Number,
    unit: TimestampUnit,
) -> std::result::Result<i128, ParseError> {
    let per_unit = i128::from(unit.nanos_per_unit());
    match number {
        Number::Integer(n) => Ok(i128::from(n) * per_unit),
        Number::Unsigned(n) => Ok(i128::from(n) * per_unit),
        Number::Float(f) => {
            if !f.is_finite() {
                return Err(ParseError::NotFinite(f.to_string()));
            }
            let scaled = (f * per_unit as f64).round();
            // Well past any representable timestamp; keeps the cast exact.
            if scaled.abs() >= 1e30 {
                return Err(ParseError::out_of_range(f));
            }
            Ok(scaled as i128)
        }
    }
}

/// Splits a nanosecond count into whole seconds and a non-negative remainder.
pub(crate) fn split_nanos(total: i128) -> std::result::Result<(i64, u32), ParseError> {
    let secs = i64::try_from(total.div_euclid(NANOS_PER_SECOND))
        .map_err(|_| ParseError::out_of_range(total))?;
    let nanos = total.rem_euclid(NANOS_PER_SECOND) as u32;
    Ok((secs, nanos))
}

/// Counts whole units in a nanosecond count, rounding toward negative infinity.
/// Returns `None` when the count fits neither `i64` nor `u64`.
pub(crate) fn nanos_to_number(total: i128, unit: TimestampUnit) -> Option<Number> {
    let units = total.div_euclid(i128::from(unit.nanos_per_unit()));
    i64::try_from(units)
        .map(Number::Integer)
        .or_else(|_| u64::try_from(units).map(Number::Unsigned))
        .ok()
}

pub(crate) fn join_nanos(secs: i64, nanos: u32) -> i128 {
    i128::from(secs) * NANOS_PER_SECOND + i128::from(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_units() {
        assert_eq!(
            number_to_nanos(Number::Integer(2), TimestampUnit::Seconds),
            Ok(2_000_000_000)
        );
        assert_eq!(
            number_to_nanos(Number::Integer(-1500), TimestampUnit::Milliseconds),
            Ok(-1_500_000_000)
        );
        assert_eq!(
            number_to_nanos(Number::Integer(7), TimestampUnit::Nanoseconds),
            Ok(7)
        );
    }

    #[test]
    fn test_unsigned_units_are_exact() {
        assert_eq!(
            number_to_nanos(Number::Unsigned(9_223_372_036_854_775_809), TimestampUnit::Nanoseconds),
            Ok(9_223_372_036_854_775_809)
        );
        assert_eq!(
            number_to_nanos(Number::Unsigned(u64::MAX), TimestampUnit::Seconds),
            Ok(i128::from(u64::MAX) * 1_000_000_000)
        );
    }

    #[test]
    fn test_float_units() {
        assert_eq!(
            number_to_nanos(Number::Float(1.5), TimestampUnit::Seconds),
            Ok(1_500_000_000)
        );
        assert_eq!(
            number_to_nanos(Number::Float(0.1), TimestampUnit::Seconds),
            Ok(100_000_000)
        );
        assert_eq!(
            number_to_nanos(Number::Float(2.5), TimestampUnit::Milliseconds),
            Ok(2_500_000)
        );
        assert!(matches!(
            number_to_nanos(Number::Float(f64::NAN), TimestampUnit::Seconds),
            Err(ParseError::NotFinite(_))
        ));
        assert!(matches!(
            number_to_nanos(Number::Float(1e300), TimestampUnit::Seconds),
            Err(ParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_split_negative_nanos() {
        assert_eq!(split_nanos(-500_000_000), Ok((-1, 500_000_000)));
        assert_eq!(split_nanos(1_000_000_001), Ok((1, 1)));
        assert!(split_nanos(i128::MAX).is_err());
    }

    #[test]
    fn test_nanos_to_number_floors() {
        assert_eq!(
            nanos_to_number(-500_000_000, TimestampUnit::Seconds),
            Some(Number::Integer(-1))
        );
        assert_eq!(
            nanos_to_number(1_999_999_999, TimestampUnit::Milliseconds),
            Some(Number::Integer(1_999))
        );
        assert_eq!(
            nanos_to_number(i128::from(u64::MAX), TimestampUnit::Nanoseconds),
            Some(Number::Unsigned(u64::MAX))
        );
        assert_eq!(nanos_to_number(i128::MAX, TimestampUnit::Nanoseconds), None);
    }
}
