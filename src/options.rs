//! Configuration options for temporal conversion.
//!
//! This module provides the option snapshot every codec call reads:
//!
//! - [`TemporalOptions`]: Main configuration struct
//! - [`TimestampUnit`]: Granularity of numeric timestamps and durations
//! - [`Feature`]: Named boolean switches, for hosts that configure by name
//!
//! A snapshot is built once per top-level operation and handed out as
//! `&TemporalOptions`, so no conversion can observe it changing halfway.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serde_datetime::{from_str, TemporalOptions};
//!
//! // Strict by default: arrays are rejected
//! let strict = TemporalOptions::new();
//! assert!(from_str::<NaiveDate>("[\"2000-01-01\"]", &strict).is_err());
//!
//! // Opt in to single-value array unwrapping
//! let options = TemporalOptions::new().with_unwrap_single_value_arrays(true);
//! let date = from_str::<NaiveDate>("[\"2000-01-01\"]", &options).unwrap();
//! assert_eq!(date, NaiveDate::from_ymd_opt(2000, 1, 1));
//! ```

use chrono::{FixedOffset, Offset, Utc};
use std::fmt;

/// Granularity of numeric timestamps and durations.
///
/// Integer tokens count whole units; floating tokens carry a fraction of the unit.
///
/// # Examples
///
/// ```rust
/// use serde_datetime::TimestampUnit;
///
/// assert_eq!(TimestampUnit::Seconds.nanos_per_unit(), 1_000_000_000);
/// assert_eq!(TimestampUnit::Milliseconds.nanos_per_unit(), 1_000_000);
/// assert_eq!(TimestampUnit::Nanoseconds.nanos_per_unit(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TimestampUnit {
    Seconds,
    #[default]
    Milliseconds,
    Nanoseconds,
}

impl TimestampUnit {
    /// Returns the number of nanoseconds in one unit.
    #[must_use]
    pub const fn nanos_per_unit(&self) -> i64 {
        match self {
            TimestampUnit::Seconds => 1_000_000_000,
            TimestampUnit::Milliseconds => 1_000_000,
            TimestampUnit::Nanoseconds => 1,
        }
    }

    /// Returns the number of units in one second.
    #[must_use]
    pub const fn units_per_second(&self) -> i64 {
        1_000_000_000 / self.nanos_per_unit()
    }
}

impl fmt::Display for TimestampUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampUnit::Seconds => f.write_str("seconds"),
            TimestampUnit::Milliseconds => f.write_str("milliseconds"),
            TimestampUnit::Nanoseconds => f.write_str("nanoseconds"),
        }
    }
}

/// Named boolean options of [`TemporalOptions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    UnwrapSingleValueArrays,
    AcceptEmptyArrayAsNull,
    WriteDatesAsTimestamps,
    WriteDurationsAsTimestamps,
    AdjustToContextTimeZone,
    Lenient,
}

/// Configuration options for temporal conversion.
///
/// The default is strict: arrays are rejected, values are written as text,
/// and offsets are kept as written.
///
/// # Examples
///
/// ```rust
/// use serde_datetime::{Feature, TemporalOptions, TimestampUnit};
///
/// let options = TemporalOptions::new()
///     .with_feature(Feature::UnwrapSingleValueArrays, true)
///     .with_feature(Feature::AcceptEmptyArrayAsNull, true)
///     .with_timestamp_unit(TimestampUnit::Seconds);
///
/// assert!(options.is_enabled(Feature::UnwrapSingleValueArrays));
/// assert!(!options.is_enabled(Feature::WriteDatesAsTimestamps));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemporalOptions {
    pub unwrap_single_value_arrays: bool,
    /// Only consulted while `unwrap_single_value_arrays` is on.
    pub accept_empty_array_as_null: bool,
    pub write_dates_as_timestamps: bool,
    pub write_durations_as_timestamps: bool,
    pub timestamp_unit: TimestampUnit,
    pub adjust_to_context_time_zone: bool,
    /// The context zone: numeric timestamps decode into it, adjustment converts to it.
    pub time_zone: FixedOffset,
    pub lenient: bool,
}

impl Default for TemporalOptions {
    fn default() -> Self {
        TemporalOptions {
            unwrap_single_value_arrays: false,
            accept_empty_array_as_null: false,
            write_dates_as_timestamps: false,
            write_durations_as_timestamps: false,
            timestamp_unit: TimestampUnit::default(),
            adjust_to_context_time_zone: false,
            time_zone: utc(),
            lenient: false,
        }
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

impl TemporalOptions {
    /// Creates default (strict) options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datetime::TemporalOptions;
    ///
    /// let options = TemporalOptions::new();
    /// assert!(!options.unwrap_single_value_arrays);
    /// assert!(!options.accept_empty_array_as_null);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that write every numeric-capable kind as a number.
    #[must_use]
    pub fn timestamps() -> Self {
        TemporalOptions {
            write_dates_as_timestamps: true,
            write_durations_as_timestamps: true,
            ..Default::default()
        }
    }

    /// Creates options that accept every array convention and loose text.
    #[must_use]
    pub fn lenient() -> Self {
        TemporalOptions {
            unwrap_single_value_arrays: true,
            accept_empty_array_as_null: true,
            lenient: true,
            ..Default::default()
        }
    }

    /// Sets a named boolean option.
    #[must_use]
    pub fn with_feature(mut self, feature: Feature, enabled: bool) -> Self {
        match feature {
            Feature::UnwrapSingleValueArrays => self.unwrap_single_value_arrays = enabled,
            Feature::AcceptEmptyArrayAsNull => self.accept_empty_array_as_null = enabled,
            Feature::WriteDatesAsTimestamps => self.write_dates_as_timestamps = enabled,
            Feature::WriteDurationsAsTimestamps => self.write_durations_as_timestamps = enabled,
            Feature::AdjustToContextTimeZone => self.adjust_to_context_time_zone = enabled,
            Feature::Lenient => self.lenient = enabled,
        }
        self
    }

    /// Reads a named boolean option.
    #[must_use]
    pub const fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::UnwrapSingleValueArrays => self.unwrap_single_value_arrays,
            Feature::AcceptEmptyArrayAsNull => self.accept_empty_array_as_null,
            Feature::WriteDatesAsTimestamps => self.write_dates_as_timestamps,
            Feature::WriteDurationsAsTimestamps => self.write_durations_as_timestamps,
            Feature::AdjustToContextTimeZone => self.adjust_to_context_time_zone,
            Feature::Lenient => self.lenient,
        }
    }

    /// Unwraps single-element arrays before decoding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datetime::TemporalOptions;
    ///
    /// let options = TemporalOptions::new().with_unwrap_single_value_arrays(true);
    /// assert!(options.unwrap_single_value_arrays);
    /// ```
    #[must_use]
    pub fn with_unwrap_single_value_arrays(mut self, enabled: bool) -> Self {
        self.unwrap_single_value_arrays = enabled;
        self
    }

    /// Decodes `[]` as null. Has no effect unless unwrapping is also enabled.
    #[must_use]
    pub fn with_accept_empty_array_as_null(mut self, enabled: bool) -> Self {
        self.accept_empty_array_as_null = enabled;
        self
    }

    /// Writes dates, date-times with offsets and instants as numbers.
    #[must_use]
    pub fn with_write_dates_as_timestamps(mut self, enabled: bool) -> Self {
        self.write_dates_as_timestamps = enabled;
        self
    }

    /// Writes durations as numbers.
    #[must_use]
    pub fn with_write_durations_as_timestamps(mut self, enabled: bool) -> Self {
        self.write_durations_as_timestamps = enabled;
        self
    }

    /// Sets the granularity of numeric timestamps and durations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datetime::{TemporalOptions, TimestampUnit};
    ///
    /// let options = TemporalOptions::new().with_timestamp_unit(TimestampUnit::Nanoseconds);
    /// assert_eq!(options.timestamp_unit, TimestampUnit::Nanoseconds);
    /// ```
    #[must_use]
    pub fn with_timestamp_unit(mut self, unit: TimestampUnit) -> Self {
        self.timestamp_unit = unit;
        self
    }

    /// Converts decoded offset and zoned date-times into the context zone.
    #[must_use]
    pub fn with_adjust_to_context_time_zone(mut self, enabled: bool) -> Self {
        self.adjust_to_context_time_zone = enabled;
        self
    }

    /// Sets the context zone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::FixedOffset;
    /// use serde_datetime::TemporalOptions;
    ///
    /// let paris = FixedOffset::east_opt(3600).unwrap();
    /// let options = TemporalOptions::new().with_time_zone(paris);
    /// assert_eq!(options.time_zone.local_minus_utc(), 3600);
    /// ```
    #[must_use]
    pub fn with_time_zone(mut self, time_zone: FixedOffset) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Trims input text and lets dates be read from date-time text.
    #[must_use]
    pub fn with_lenient(mut self, enabled: bool) -> Self {
        self.lenient = enabled;
        self
    }
}
