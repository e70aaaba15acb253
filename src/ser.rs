//! Temporal serialization inside serde.
//!
//! [`Encoded`] borrows a value and an option snapshot and serializes the
//! value's token, so any serde format can write temporal values under
//! non-default options:
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use serde_datetime::ser::Encoded;
//! use serde_datetime::{TemporalOptions, TimestampUnit};
//!
//! let instant = DateTime::<Utc>::from_timestamp(946_684_800, 0).unwrap();
//! let options = TemporalOptions::timestamps().with_timestamp_unit(TimestampUnit::Seconds);
//!
//! let json = serde_json::to_string(&Encoded::new(&instant, &options)).unwrap();
//! assert_eq!(json, "946684800");
//! ```

use crate::codec::TemporalCodec;
use crate::options::TemporalOptions;
use serde::{Serialize, Serializer};

/// Serializes `value` as its encoded token.
pub struct Encoded<'a, T> {
    value: &'a T,
    options: &'a TemporalOptions,
}

impl<'a, T: TemporalCodec> Encoded<'a, T> {
    #[must_use]
    pub fn new(value: &'a T, options: &'a TemporalOptions) -> Self {
        Encoded { value, options }
    }
}

impl<'a, T: TemporalCodec> Serialize for Encoded<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.encode(self.options).serialize(serializer)
    }
}
