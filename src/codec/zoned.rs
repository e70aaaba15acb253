use super::offset::{
    adjust, format_offset_date_time, instant_from_number, parse_offset_date_time, timestamp_number,
};
use super::TemporalCodec;
use crate::error::ParseError;
use crate::options::TemporalOptions;
use crate::token::Number;
use crate::value::{TemporalKind, TemporalValue};
use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::str::FromStr;

/// A date-time with an offset and, optionally, the region it was observed in.
///
/// The offset is authoritative; the region id (`Europe/Paris`) is carried
/// through unchanged so it survives a round trip. Without a region the zone is
/// the offset itself.
///
/// # Examples
///
/// ```rust
/// use serde_datetime::ZonedDateTime;
///
/// let zoned: ZonedDateTime = "2000-01-01T10:15:30+01:00[Europe/Paris]".parse().unwrap();
/// assert_eq!(zoned.region(), Some("Europe/Paris"));
/// assert_eq!(zoned.date_time().timestamp(), 946_718_130);
/// assert_eq!(zoned.to_string(), "2000-01-01T10:15:30+01:00[Europe/Paris]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZonedDateTime {
    date_time: DateTime<FixedOffset>,
    region: Option<String>,
}

impl ZonedDateTime {
    /// Creates a zoned date-time in the named region.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::ZoneId`] if `region` is not a valid region id.
    pub fn new(date_time: DateTime<FixedOffset>, region: &str) -> Result<Self, ParseError> {
        validate_region(region)?;
        Ok(ZonedDateTime {
            date_time,
            region: Some(region.to_string()),
        })
    }

    /// Creates a zoned date-time whose zone is its offset.
    #[must_use]
    pub fn from_offset(date_time: DateTime<FixedOffset>) -> Self {
        ZonedDateTime {
            date_time,
            region: None,
        }
    }

    #[must_use]
    pub fn date_time(&self) -> &DateTime<FixedOffset> {
        &self.date_time
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Moves to another offset, keeping the instant. The region is dropped.
    #[must_use]
    pub fn with_offset_same_instant(&self, offset: FixedOffset) -> Self {
        ZonedDateTime::from_offset(self.date_time.with_timezone(&offset))
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_offset_date_time(&self.date_time))?;
        if let Some(region) = &self.region {
            write!(f, "[{}]", region)?;
        }
        Ok(())
    }
}

impl FromStr for ZonedDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(body) = s.strip_suffix(']') else {
            return parse_offset_date_time(s).map(ZonedDateTime::from_offset);
        };
        let open = body
            .rfind('[')
            .ok_or_else(|| ParseError::invalid(s, s.len() - 1))?;
        let date_time = parse_offset_date_time(&body[..open])?;
        ZonedDateTime::new(date_time, &body[open + 1..])
    }
}

/// Accepts ids shaped like `Region/City`, `Etc/GMT+1` or `UTC`.
fn validate_region(region: &str) -> Result<(), ParseError> {
    let mut chars = region.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-' | '+' | '.' | '~'))
        && !region.ends_with('/')
        && !region.contains("//");
    if valid {
        Ok(())
    } else {
        Err(ParseError::ZoneId(region.to_string()))
    }
}

impl TemporalCodec for ZonedDateTime {
    const KIND: TemporalKind = TemporalKind::ZonedDateTime;
    const NUMERIC: bool = true;

    fn parse_text(text: &str, options: &TemporalOptions) -> Result<Self, ParseError> {
        let zoned = text.parse::<ZonedDateTime>()?;
        if options.adjust_to_context_time_zone {
            Ok(ZonedDateTime::from_offset(adjust(zoned.date_time, options)))
        } else {
            Ok(zoned)
        }
    }

    fn from_number(number: Number, options: &TemporalOptions) -> Result<Self, ParseError> {
        let instant = instant_from_number(number, options)?;
        Ok(ZonedDateTime::from_offset(
            instant.with_timezone(&options.time_zone),
        ))
    }

    fn format_text(&self) -> String {
        self.to_string()
    }

    fn to_number(&self, options: &TemporalOptions) -> Option<Number> {
        if !options.write_dates_as_timestamps {
            return None;
        }
        timestamp_number(&self.date_time, options)
    }

    fn into_value(self) -> TemporalValue {
        TemporalValue::ZonedDateTime(self)
    }

    fn from_value_ref(value: &TemporalValue) -> Option<&Self> {
        match value {
            TemporalValue::ZonedDateTime(zoned) => Some(zoned),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region() {
        let options = TemporalOptions::default();
        let zoned =
            ZonedDateTime::parse_text("2000-01-01T10:15:30+01:00[Europe/Paris]", &options).unwrap();
        assert_eq!(zoned.region(), Some("Europe/Paris"));
        assert_eq!(zoned.date_time().offset().local_minus_utc(), 3600);
        assert_eq!(zoned.format_text(), "2000-01-01T10:15:30+01:00[Europe/Paris]");
    }

    #[test]
    fn test_parse_without_region() {
        let options = TemporalOptions::default();
        let zoned = ZonedDateTime::parse_text("2000-01-01T10:15:30Z", &options).unwrap();
        assert_eq!(zoned.region(), None);
        assert_eq!(zoned.format_text(), "2000-01-01T10:15:30Z");
    }

    #[test]
    fn test_invalid_region() {
        let options = TemporalOptions::default();
        for text in [
            "2000-01-01T10:15:30+01:00[]",
            "2000-01-01T10:15:30+01:00[9/Paris]",
            "2000-01-01T10:15:30+01:00[Europe/]",
            "2000-01-01T10:15:30+01:00[Europe Paris]",
        ] {
            assert!(
                matches!(ZonedDateTime::parse_text(text, &options), Err(ParseError::ZoneId(_))),
                "{text}"
            );
        }
        assert!(matches!(
            ZonedDateTime::parse_text("2000-01-01T10:15:30+01:00Europe/Paris]", &options),
            Err(ParseError::Invalid { .. })
        ));
    }

    #[test]
    fn test_adjust_drops_region() {
        let options = TemporalOptions::new().with_adjust_to_context_time_zone(true);
        let zoned =
            ZonedDateTime::parse_text("2000-01-01T10:15:30+01:00[Europe/Paris]", &options).unwrap();
        assert_eq!(zoned.region(), None);
        assert_eq!(zoned.format_text(), "2000-01-01T09:15:30Z");
    }

    #[test]
    fn test_far_years_with_region() {
        let options = TemporalOptions::default();
        for text in [
            "+10000-01-01T00:00:00Z[UTC]",
            "-0001-06-01T10:15:30+01:00[Europe/Paris]",
            "-0001-06-01T10:15:30-05:00",
        ] {
            let zoned = ZonedDateTime::parse_text(text, &options).unwrap();
            assert_eq!(zoned.format_text(), text);
        }
    }

    #[test]
    fn test_numeric() {
        let options = TemporalOptions::timestamps();
        let zoned = ZonedDateTime::from_number(Number::Integer(946_684_800_000), &options).unwrap();
        assert_eq!(zoned.format_text(), "2000-01-01T00:00:00Z");
        assert_eq!(zoned.to_number(&options), Some(Number::Integer(946_684_800_000)));
    }
}
