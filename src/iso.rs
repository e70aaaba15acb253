//! `#[serde(with)]` helpers using default options.
//!
//! Fields annotated with `iso` are written as canonical text and read from
//! text (or a number, for numeric kinds). Arrays are rejected and `null` is an
//! error; use [`iso::option`](option) for nullable fields.
//!
//! ```rust
//! use chrono::{NaiveDate, TimeDelta};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Booking {
//!     #[serde(with = "serde_datetime::iso")]
//!     day: NaiveDate,
//!     #[serde(with = "serde_datetime::iso::option", default)]
//!     length: Option<TimeDelta>,
//! }
//!
//! let booking: Booking = serde_json::from_str(r#"{"day":"2000-01-01","length":"PT2H"}"#).unwrap();
//! assert_eq!(booking.length, Some(TimeDelta::hours(2)));
//! assert_eq!(
//!     serde_json::to_string(&booking).unwrap(),
//!     r#"{"day":"2000-01-01","length":"PT2H"}"#
//! );
//! ```

use crate::codec::TemporalCodec;
use crate::de::TemporalSeed;
use crate::options::TemporalOptions;
use serde::de::{self, DeserializeSeed, Deserializer};
use serde::{Serialize, Serializer};

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: TemporalCodec,
    S: Serializer,
{
    value.encode(&TemporalOptions::default()).serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: TemporalCodec,
    D: Deserializer<'de>,
{
    let options = TemporalOptions::default();
    TemporalSeed::<T>::new(&options)
        .deserialize(deserializer)?
        .ok_or_else(|| de::Error::custom(format!("{} cannot be null", T::KIND)))
}

/// Nullable variant: `None` is written as `null`, and `null` reads as `None`.
pub mod option {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: TemporalCodec,
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: TemporalCodec,
        D: Deserializer<'de>,
    {
        let options = TemporalOptions::default();
        TemporalSeed::<T>::new(&options).deserialize(deserializer)
    }
}
