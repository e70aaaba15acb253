//! Error types for temporal serialization and deserialization.
//!
//! Every failure produced by this crate is classified by [`ErrorKind`]:
//!
//! - **Malformed values**: the token had an acceptable shape, but its content
//!   is not a valid temporal value (bad pattern, month 13, numeric overflow)
//! - **Unexpected shapes**: the token shape itself is not legal for the target
//!   kind under the active options (objects, booleans, arrays of the wrong arity,
//!   arrays while unwrapping is disabled)
//! - **Unsupported representations**: a number was given for a kind that has no
//!   numeric form
//!
//! The remaining variants belong to the interchange layer around the codecs:
//! unreadable JSON, I/O failures and serde's own `custom` messages.
//!
//! Failures are never recovered inside the crate. They propagate unchanged to
//! the caller, which decides how to present them.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serde_datetime::{from_str, ErrorKind, TemporalOptions};
//!
//! let options = TemporalOptions::default();
//! let err = from_str::<NaiveDate>("\"notalocaldate\"", &options).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedValue);
//!
//! let err = from_str::<NaiveDate>("[\"2000-01-01\"]", &options).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnexpectedShape);
//! ```

use crate::token::{Number, Shape};
use crate::value::TemporalKind;
use std::fmt;
use thiserror::Error;

/// Classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedValue,
    UnexpectedShape,
    UnsupportedRepresentation,
    Syntax,
    Io,
    KindMismatch,
    Custom,
}

/// Represents all possible errors that can occur while converting temporal values.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The token content could not be parsed into a valid temporal value.
    #[error("cannot deserialize {kind} from {input}: {source}")]
    MalformedValue {
        kind: TemporalKind,
        input: String,
        #[source]
        source: ParseError,
    },

    /// The token shape is not legal for the target kind.
    #[error("cannot deserialize {kind} from {found}: {reason}")]
    UnexpectedShape {
        kind: TemporalKind,
        found: Shape,
        reason: String,
    },

    /// A numeric token was given for a kind without a numeric representation.
    #[error("cannot deserialize {kind} from number {number}: {kind} has no numeric representation")]
    UnsupportedRepresentation { kind: TemporalKind, number: Number },

    /// The interchange text is not well-formed.
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A dynamic codec was handed a value of another kind.
    #[error("codec for {expected} cannot encode a {found} value")]
    KindMismatch {
        expected: TemporalKind,
        found: TemporalKind,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed-value error for `input` that failed to parse as `kind`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datetime::{Error, ErrorKind, ParseError, TemporalKind};
    ///
    /// let err = Error::malformed(TemporalKind::Date, "\"2000-13-01\"", ParseError::invalid("2000-13-01", 5));
    /// assert_eq!(err.kind(), ErrorKind::MalformedValue);
    /// ```
    pub fn malformed(kind: TemporalKind, input: impl Into<String>, source: ParseError) -> Self {
        Error::MalformedValue {
            kind,
            input: input.into(),
            source,
        }
    }

    /// Creates an unexpected-shape error.
    pub fn unexpected_shape(kind: TemporalKind, found: Shape, reason: &str) -> Self {
        Error::UnexpectedShape {
            kind,
            found,
            reason: reason.to_string(),
        }
    }

    /// Creates an unsupported-representation error for a numeric token.
    pub fn unsupported_representation(kind: TemporalKind, number: Number) -> Self {
        Error::UnsupportedRepresentation { kind, number }
    }

    /// Creates a syntax error for unreadable interchange text.
    pub fn syntax<T: fmt::Display>(msg: T) -> Self {
        Error::Syntax(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datetime::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedValue { .. } => ErrorKind::MalformedValue,
            Error::UnexpectedShape { .. } => ErrorKind::UnexpectedShape,
            Error::UnsupportedRepresentation { .. } => ErrorKind::UnsupportedRepresentation,
            Error::Syntax(_) => ErrorKind::Syntax,
            Error::Io(_) => ErrorKind::Io,
            Error::KindMismatch { .. } => ErrorKind::KindMismatch,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the temporal kind the failed conversion was targeting, if any.
    #[must_use]
    pub const fn temporal_kind(&self) -> Option<TemporalKind> {
        match self {
            Error::MalformedValue { kind, .. }
            | Error::UnexpectedShape { kind, .. }
            | Error::UnsupportedRepresentation { kind, .. } => Some(*kind),
            Error::KindMismatch { expected, .. } => Some(*expected),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

/// The underlying cause of a [`Error::MalformedValue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text did not match a chrono pattern, or named an impossible date or time.
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),

    /// The text did not match a designator grammar (durations, periods, zone suffixes).
    #[error("text '{text}' could not be parsed at index {index}")]
    Invalid { text: String, index: usize },

    /// The zone id in a zoned date-time is not a valid region id.
    #[error("invalid zone id '{0}'")]
    ZoneId(String),

    /// A numeric value does not fit the target kind's range.
    #[error("value {0} is out of range")]
    OutOfRange(String),

    /// A floating point value was NaN or infinite.
    #[error("value {0} is not a finite number")]
    NotFinite(String),

    /// The kind has no numeric form.
    #[error("no numeric representation")]
    NoNumericForm,
}

impl ParseError {
    /// Creates a grammar error pointing at byte `index` of `text`.
    pub fn invalid(text: &str, index: usize) -> Self {
        ParseError::Invalid {
            text: text.to_string(),
            index,
        }
    }

    pub(crate) fn out_of_range<T: fmt::Display>(value: T) -> Self {
        ParseError::OutOfRange(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
