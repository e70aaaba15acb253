//! Token-shape dispatch.
//!
//! Every kind shares the same conventions for null and arrays, so they are
//! decided here before a codec sees the token:
//!
//! | token | result |
//! |-------|--------|
//! | `null` | `None` |
//! | string | parsed by the codec |
//! | number | parsed by the codec if the kind is numeric, else rejected |
//! | `[]` | `None` if unwrapping and empty-as-null are both enabled, else rejected |
//! | `[x]` | `x`, dispatched again, if unwrapping is enabled, else rejected |
//! | `[x, y, ..]` | rejected |
//! | object, boolean | rejected |
//!
//! Nested single-element arrays unwrap one level at a time until a
//! non-array token or an array of another length is reached.

use crate::codec::TemporalCodec;
use crate::error::{Error, Result};
use crate::options::TemporalOptions;
use crate::token::Token;
use crate::value::TemporalKind;

/// Decodes a token of any shape into a value of kind `T`.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use serde_datetime::{dispatch, token, ErrorKind, TemporalOptions};
///
/// let strict = TemporalOptions::default();
/// let err = dispatch::decode::<NaiveDate>(&token!(["2000-01-01"]), &strict).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnexpectedShape);
///
/// let unwrapping = TemporalOptions::new().with_unwrap_single_value_arrays(true);
/// let date = dispatch::decode::<NaiveDate>(&token!(["2000-01-01"]), &unwrapping).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2000, 1, 1));
/// ```
///
/// # Errors
///
/// Returns [`Error::UnexpectedShape`] for shapes the options do not allow,
/// [`Error::UnsupportedRepresentation`] for a number given to a kind without
/// a numeric form, and [`Error::MalformedValue`] when the codec rejects the
/// scalar.
pub fn decode<T: TemporalCodec>(token: &Token, options: &TemporalOptions) -> Result<Option<T>> {
    match unwrap(token, T::KIND, T::NUMERIC, options)? {
        Some(scalar) => T::decode(scalar, options),
        None => Ok(None),
    }
}

/// Resolves `token` to the scalar the codec should see, or `None` for null.
fn unwrap<'t>(
    token: &'t Token,
    kind: TemporalKind,
    numeric: bool,
    options: &TemporalOptions,
) -> Result<Option<&'t Token>> {
    let mut current = token;
    loop {
        match current {
            Token::Null => return Ok(None),
            Token::String(_) => return Ok(Some(current)),
            Token::Number(_) if numeric => return Ok(Some(current)),
            Token::Number(number) => {
                log::debug!("rejecting number {number} for {kind}");
                return Err(Error::unsupported_representation(kind, *number));
            }
            Token::Array(items) => {
                if !options.unwrap_single_value_arrays {
                    return Err(reject(kind, current, "unwrapping single-value arrays is disabled"));
                }
                match items.as_slice() {
                    [] if options.accept_empty_array_as_null => {
                        log::trace!("reading empty array as null for {kind}");
                        return Ok(None);
                    }
                    [] => {
                        return Err(reject(kind, current, "empty arrays are not accepted as null"));
                    }
                    [inner] => {
                        log::trace!("unwrapping single-element array for {kind}");
                        current = inner;
                    }
                    _ => {
                        return Err(reject(kind, current, "only single-element arrays can be unwrapped"));
                    }
                }
            }
            Token::Bool(_) | Token::Object(_) => {
                return Err(reject(kind, current, "expected a string or a number"));
            }
        }
    }
}

fn reject(kind: TemporalKind, token: &Token, reason: &str) -> Error {
    let found = token.shape();
    log::debug!("rejecting {found} for {kind}: {reason}");
    Error::unexpected_shape(kind, found, reason)
}
