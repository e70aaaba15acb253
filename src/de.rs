//! Temporal deserialization inside serde.
//!
//! [`TemporalSeed`] reads one value of any serde format into a [`Token`] and
//! decodes it with the dispatcher, so temporal fields can honour a
//! [`TemporalOptions`] snapshot from within a hand-written `Deserialize` impl.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serde::de::DeserializeSeed;
//! use serde_datetime::de::TemporalSeed;
//! use serde_datetime::TemporalOptions;
//!
//! let options = TemporalOptions::new().with_unwrap_single_value_arrays(true);
//! let mut json = serde_json::Deserializer::from_str("[\"2000-01-01\"]");
//! let date = TemporalSeed::<NaiveDate>::new(&options)
//!     .deserialize(&mut json)
//!     .unwrap();
//! assert_eq!(date, NaiveDate::from_ymd_opt(2000, 1, 1));
//! ```
//!
//! Errors surface as the format's own error type, carrying the message of
//! the underlying [`Error`](crate::Error).

use crate::codec::TemporalCodec;
use crate::dispatch;
use crate::options::TemporalOptions;
use crate::token::Token;
use serde::de::{self, DeserializeSeed, Deserializer};
use serde::Deserialize;
use std::marker::PhantomData;

/// Deserializes an optional `T` under a fixed option snapshot.
pub struct TemporalSeed<'a, T> {
    options: &'a TemporalOptions,
    marker: PhantomData<fn() -> T>,
}

impl<'a, T> TemporalSeed<'a, T> {
    #[must_use]
    pub fn new(options: &'a TemporalOptions) -> Self {
        TemporalSeed {
            options,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Clone for TemporalSeed<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for TemporalSeed<'a, T> {}

impl<'de, 'a, T: TemporalCodec> DeserializeSeed<'de> for TemporalSeed<'a, T> {
    type Value = Option<T>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = Token::deserialize(deserializer)?;
        dispatch::decode::<T>(&token, self.options).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn seed_from_json<T: TemporalCodec>(
        json: &str,
        options: &TemporalOptions,
    ) -> Result<Option<T>, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        TemporalSeed::<T>::new(options).deserialize(&mut deserializer)
    }

    #[test]
    fn test_seed_reads_scalars() {
        let options = TemporalOptions::default();
        let date: Option<NaiveDate> = seed_from_json("\"2000-01-01\"", &options).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2000, 1, 1));

        let none: Option<NaiveDate> = seed_from_json("null", &options).unwrap();
        assert_eq!(none, None);
    }

    #[test]
    fn test_seed_uses_options() {
        let strict = TemporalOptions::default();
        let err = seed_from_json::<TimeDelta>("[\"PT1S\"]", &strict).unwrap_err();
        assert!(err.to_string().contains("unwrapping single-value arrays is disabled"));

        let unwrapping = TemporalOptions::new().with_unwrap_single_value_arrays(true);
        let duration: Option<TimeDelta> = seed_from_json("[\"PT1S\"]", &unwrapping).unwrap();
        assert_eq!(duration, Some(TimeDelta::seconds(1)));
    }

    #[test]
    fn test_seed_reports_malformed_values() {
        let err = seed_from_json::<NaiveDate>("\"notalocaldate\"", &TemporalOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("notalocaldate"));
    }
}
