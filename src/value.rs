//! Temporal kinds and values.
//!
//! [`TemporalKind`] names each supported kind and carries its stable type
//! identifier, which is what the [`Registry`](crate::Registry) is keyed by.
//! [`TemporalValue`] holds one value of any kind, for callers that pick the
//! kind at runtime.
//!
//! | kind | Rust type | identifier |
//! |------|-----------|------------|
//! | date | [`chrono::NaiveDate`] | `date` |
//! | time | [`chrono::NaiveTime`] | `time` |
//! | date-time | [`chrono::NaiveDateTime`] | `date-time` |
//! | offset date-time | [`chrono::DateTime<FixedOffset>`] | `offset-date-time` |
//! | zoned date-time | [`ZonedDateTime`] | `zoned-date-time` |
//! | instant | [`chrono::DateTime<Utc>`] | `instant` |
//! | duration | [`chrono::TimeDelta`] | `duration` |
//! | period | [`Period`] | `period` |

use crate::codec::TemporalCodec;
use crate::{Period, ZonedDateTime};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use std::fmt;
use std::str::FromStr;

/// The supported temporal kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemporalKind {
    Date,
    Time,
    DateTime,
    OffsetDateTime,
    ZonedDateTime,
    Instant,
    Duration,
    Period,
}

impl TemporalKind {
    /// Every kind, in registration order.
    pub const ALL: [TemporalKind; 8] = [
        TemporalKind::Date,
        TemporalKind::Time,
        TemporalKind::DateTime,
        TemporalKind::OffsetDateTime,
        TemporalKind::ZonedDateTime,
        TemporalKind::Instant,
        TemporalKind::Duration,
        TemporalKind::Period,
    ];

    /// Returns the stable type identifier of this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datetime::TemporalKind;
    ///
    /// assert_eq!(TemporalKind::OffsetDateTime.id(), "offset-date-time");
    /// assert_eq!("offset-date-time".parse::<TemporalKind>(), Ok(TemporalKind::OffsetDateTime));
    /// ```
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            TemporalKind::Date => "date",
            TemporalKind::Time => "time",
            TemporalKind::DateTime => "date-time",
            TemporalKind::OffsetDateTime => "offset-date-time",
            TemporalKind::ZonedDateTime => "zoned-date-time",
            TemporalKind::Instant => "instant",
            TemporalKind::Duration => "duration",
            TemporalKind::Period => "period",
        }
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown type identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown temporal type identifier '{}'", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for TemporalKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemporalKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// One temporal value of any supported kind.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use serde_datetime::{TemporalKind, TemporalValue};
///
/// let value = TemporalValue::from(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
/// assert_eq!(value.kind(), TemporalKind::Date);
/// assert_eq!(value.to_string(), "2000-01-01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemporalValue {
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    OffsetDateTime(DateTime<FixedOffset>),
    ZonedDateTime(ZonedDateTime),
    Instant(DateTime<Utc>),
    Duration(TimeDelta),
    Period(Period),
}

impl TemporalValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> TemporalKind {
        match self {
            TemporalValue::Date(_) => TemporalKind::Date,
            TemporalValue::Time(_) => TemporalKind::Time,
            TemporalValue::DateTime(_) => TemporalKind::DateTime,
            TemporalValue::OffsetDateTime(_) => TemporalKind::OffsetDateTime,
            TemporalValue::ZonedDateTime(_) => TemporalKind::ZonedDateTime,
            TemporalValue::Instant(_) => TemporalKind::Instant,
            TemporalValue::Duration(_) => TemporalKind::Duration,
            TemporalValue::Period(_) => TemporalKind::Period,
        }
    }
}

/// Writes the canonical text of the value.
impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TemporalValue::Date(v) => v.format_text(),
            TemporalValue::Time(v) => v.format_text(),
            TemporalValue::DateTime(v) => v.format_text(),
            TemporalValue::OffsetDateTime(v) => v.format_text(),
            TemporalValue::ZonedDateTime(v) => v.format_text(),
            TemporalValue::Instant(v) => v.format_text(),
            TemporalValue::Duration(v) => v.format_text(),
            TemporalValue::Period(v) => v.format_text(),
        };
        f.write_str(&text)
    }
}

macro_rules! temporal_value_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TemporalValue {
                fn from(value: $ty) -> Self {
                    TemporalValue::$variant(value)
                }
            }
        )*
    };
}

temporal_value_from! {
    Date => NaiveDate,
    Time => NaiveTime,
    DateTime => NaiveDateTime,
    OffsetDateTime => DateTime<FixedOffset>,
    ZonedDateTime => ZonedDateTime,
    Instant => DateTime<Utc>,
    Duration => TimeDelta,
    Period => Period,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_parse_back() {
        for kind in TemporalKind::ALL {
            assert_eq!(kind.id().parse::<TemporalKind>(), Ok(kind));
        }
        assert!("LocalDate".parse::<TemporalKind>().is_err());
    }

    #[test]
    fn test_value_kinds() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(TemporalValue::from(date).kind(), TemporalKind::Date);
        assert_eq!(
            TemporalValue::from(TimeDelta::seconds(5)).kind(),
            TemporalKind::Duration
        );
        assert_eq!(
            TemporalValue::from(Period::new(1, 2, 3)).to_string(),
            "P1Y2M3D"
        );
    }
}
