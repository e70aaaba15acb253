//! # serde_datetime
//!
//! Serde codecs for calendar and time values, with a strict and explicit policy
//! for how a temporal value may be shaped in the interchange format.
//!
//! ## What does it cover?
//!
//! Eight temporal kinds, each backed by a [`chrono`] type or a small type of
//! this crate:
//!
//! | kind | type | canonical text |
//! |------|------|----------------|
//! | date | [`chrono::NaiveDate`] | `2000-01-01` |
//! | time | [`chrono::NaiveTime`] | `10:15:30` |
//! | date-time | [`chrono::NaiveDateTime`] | `2000-01-01T10:15:30` |
//! | offset date-time | [`chrono::DateTime<FixedOffset>`](chrono::DateTime) | `2000-01-01T10:15:30+01:00` |
//! | zoned date-time | [`ZonedDateTime`] | `2000-01-01T10:15:30+01:00[Europe/Paris]` |
//! | instant | [`chrono::DateTime<Utc>`](chrono::DateTime) | `2000-01-01T09:15:30Z` |
//! | duration | [`chrono::TimeDelta`] | `PT8H6M12.345S` |
//! | period | [`Period`] | `P1Y2M3D` |
//!
//! ## Key Features
//!
//! - **Strict by default**: only scalars and `null` decode; arrays must be opted into
//! - **Single-value arrays**: `["2000-01-01"]` unwraps when
//!   [`TemporalOptions::with_unwrap_single_value_arrays`] is set
//! - **Empty arrays as null**: `[]` reads as `None` when both array options are set
//! - **Numeric forms**: epoch days, epoch timestamps and lengths in a configurable unit
//! - **Classified errors**: every failure carries an [`ErrorKind`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serde_datetime::{from_str, to_string, ErrorKind, TemporalOptions};
//!
//! let options = TemporalOptions::default();
//! let date = from_str::<NaiveDate>("\"2000-01-01\"", &options).unwrap();
//! assert_eq!(date, NaiveDate::from_ymd_opt(2000, 1, 1));
//!
//! let err = from_str::<NaiveDate>("\"notalocaldate\"", &options).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedValue);
//!
//! let json = to_string(&NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), &options).unwrap();
//! assert_eq!(json, "\"2000-01-01\"");
//! ```
//!
//! ### Array conventions
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serde_datetime::{from_str, TemporalOptions};
//!
//! let options = TemporalOptions::new()
//!     .with_unwrap_single_value_arrays(true)
//!     .with_accept_empty_array_as_null(true);
//!
//! assert_eq!(
//!     from_str::<NaiveDate>("[\"2000-01-01\"]", &options).unwrap(),
//!     NaiveDate::from_ymd_opt(2000, 1, 1)
//! );
//! assert_eq!(from_str::<NaiveDate>("[]", &options).unwrap(), None);
//! assert!(from_str::<NaiveDate>("[\"2000-01-01\",\"2000-01-02\"]", &options).is_err());
//! ```
//!
//! ### Fields of serde types
//!
//! Use [`iso`] with `#[serde(with)]` for default options, or
//! [`de::TemporalSeed`] and [`ser::Encoded`] to carry a custom snapshot.
//!
//! ### Choosing the kind at runtime
//!
//! [`Registry::builtin`] resolves codecs by type identifier (`"date"`,
//! `"offset-date-time"`, ...) and works with [`TemporalValue`].
//!
//! ## Logging
//!
//! The dispatcher and registry log through the [`log`] facade: `trace` when an
//! array is unwrapped, `debug` when a shape is rejected or a codec is
//! registered. No logger is installed by this crate.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Reading and writing each kind with default options
//! - **`custom_options.rs`** - Array conventions, numeric forms and leniency
//! - **`registry.rs`** - Looking codecs up by type identifier
//!
//! Run any example with: `cargo run --example <name>`

pub mod codec;
pub mod de;
pub mod dispatch;
pub mod error;
pub mod iso;
pub mod macros;
pub mod map;
pub mod options;
pub mod patterns;
pub mod registry;
pub mod ser;
pub mod token;
pub mod value;

pub use codec::{Period, TemporalCodec, ZonedDateTime};
pub use error::{Error, ErrorKind, ParseError, Result};
pub use map::TokenMap;
pub use options::{Feature, TemporalOptions, TimestampUnit};
pub use registry::{DynCodec, Registry, RegistryBuilder};
pub use token::{Number, Shape, Token};
pub use value::{TemporalKind, TemporalValue, UnknownKind};

use std::io;

/// Decodes one JSON value into an optional `T`.
///
/// `null`, and `[]` when both array options are set, decode to `None`.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveTime;
/// use serde_datetime::{from_str, TemporalOptions};
///
/// let time = from_str::<NaiveTime>("\"10:15\"", &TemporalOptions::default()).unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(10, 15, 0));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] if `s` is not JSON, and the dispatcher's errors
/// otherwise (see [`dispatch::decode`]).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T: TemporalCodec>(s: &str, options: &TemporalOptions) -> Result<Option<T>> {
    let token: Token = serde_json::from_str(s).map_err(Error::syntax)?;
    from_token(&token, options)
}

/// Decodes one JSON value from bytes into an optional `T`.
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the bytes are not JSON, and the dispatcher's
/// errors otherwise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T: TemporalCodec>(v: &[u8], options: &TemporalOptions) -> Result<Option<T>> {
    let token: Token = serde_json::from_slice(v).map_err(Error::syntax)?;
    from_token(&token, options)
}

/// Decodes one JSON value from an I/O stream into an optional `T`.
///
/// # Examples
///
/// ```rust
/// use chrono::TimeDelta;
/// use serde_datetime::{from_reader, TemporalOptions};
/// use std::io::Cursor;
///
/// let reader = Cursor::new(b"\"PT1M30S\"");
/// let duration = from_reader::<_, TimeDelta>(reader, &TemporalOptions::default()).unwrap();
/// assert_eq!(duration, Some(TimeDelta::seconds(90)));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, [`Error::Syntax`] if the input is
/// not JSON, and the dispatcher's errors otherwise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R, options: &TemporalOptions) -> Result<Option<T>>
where
    R: io::Read,
    T: TemporalCodec,
{
    let token: Token = serde_json::from_reader(reader).map_err(json_error)?;
    from_token(&token, options)
}

/// Decodes an already-read token into an optional `T`.
///
/// # Errors
///
/// See [`dispatch::decode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_token<T: TemporalCodec>(token: &Token, options: &TemporalOptions) -> Result<Option<T>> {
    dispatch::decode(token, options)
}

/// Encodes `value` as a token.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use serde_datetime::{to_token, Token, TemporalOptions};
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(to_token(&date, &TemporalOptions::default()), Token::from("2000-01-01"));
/// assert_eq!(to_token(&date, &TemporalOptions::timestamps()), Token::from(10_957i64));
/// ```
#[must_use]
pub fn to_token<T: TemporalCodec>(value: &T, options: &TemporalOptions) -> Token {
    value.encode(options)
}

/// Encodes `value` as JSON text.
///
/// # Errors
///
/// Returns an error if the token cannot be written as JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T: TemporalCodec>(value: &T, options: &TemporalOptions) -> Result<String> {
    serde_json::to_string(&to_token(value, options)).map_err(json_error)
}

/// Encodes `value` as JSON into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_datetime::{to_writer, Period, TemporalOptions};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Period::new(1, 2, 3), &TemporalOptions::default()).unwrap();
/// assert_eq!(buffer, b"\"P1Y2M3D\"");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T, options: &TemporalOptions) -> Result<()>
where
    W: io::Write,
    T: TemporalCodec,
{
    serde_json::to_writer(writer, &to_token(value, options)).map_err(json_error)
}

fn json_error(err: serde_json::Error) -> Error {
    if err.is_io() {
        Error::io(&err.to_string())
    } else {
        Error::syntax(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};
    use std::io::Cursor;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    }

    #[test]
    fn test_from_str_scalar_and_null() {
        let options = TemporalOptions::default();
        assert_eq!(from_str::<NaiveDate>("\"2000-01-01\"", &options).unwrap(), Some(date()));
        assert_eq!(from_str::<NaiveDate>("null", &options).unwrap(), None);
    }

    #[test]
    fn test_invalid_json_is_a_syntax_error() {
        let err = from_str::<NaiveDate>("\"2000-01-01", &TemporalOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_from_slice_and_reader() {
        let options = TemporalOptions::new().with_unwrap_single_value_arrays(true);
        assert_eq!(
            from_slice::<NaiveDate>(b"[\"2000-01-01\"]", &options).unwrap(),
            Some(date())
        );
        let reader = Cursor::new(b"[\"2000-01-01\"]".to_vec());
        assert_eq!(from_reader::<_, NaiveDate>(reader, &options).unwrap(), Some(date()));
    }

    #[test]
    fn test_to_string_round_trip() {
        let options = TemporalOptions::default();
        let offset = DateTime::<FixedOffset>::parse_from_rfc3339("2000-01-01T10:15:30+01:00").unwrap();
        let json = to_string(&offset, &options).unwrap();
        assert_eq!(json, "\"2000-01-01T10:15:30+01:00\"");
        assert_eq!(from_str::<DateTime<FixedOffset>>(&json, &options).unwrap(), Some(offset));
    }

    #[test]
    fn test_numeric_round_trip() {
        let options = TemporalOptions::timestamps();
        let instant = DateTime::<Utc>::from_timestamp(946_684_800, 250_000_000).unwrap();
        let json = to_string(&instant, &options).unwrap();
        assert_eq!(json, "946684800250");
        assert_eq!(from_str::<DateTime<Utc>>(&json, &options).unwrap(), Some(instant));

        let duration = TimeDelta::milliseconds(-1_500);
        let json = to_string(&duration, &options).unwrap();
        assert_eq!(json, "-1500");
        assert_eq!(from_str::<TimeDelta>(&json, &options).unwrap(), Some(duration));
    }

    #[test]
    fn test_to_writer() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &date(), &TemporalOptions::timestamps()).unwrap();
        assert_eq!(buffer, b"10957");
    }
}
