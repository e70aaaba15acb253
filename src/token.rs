//! Structured tokens of the interchange format.
//!
//! A [`Token`] is one complete value read from (or written to) the interchange
//! stream: a scalar, or an array/object together with everything inside it.
//! Codecs only ever see scalars; the dispatcher deals with the rest.
//!
//! ## Creating Tokens
//!
//! ```rust
//! use serde_datetime::{token, Token};
//!
//! let text = Token::from("2000-01-01");
//! let wrapped = token!(["2000-01-01"]);
//! assert_eq!(wrapped, Token::Array(vec![text]));
//! ```
//!
//! ## Reading Tokens from serde
//!
//! `Token` implements `Deserialize`, so any serde format can produce one:
//!
//! ```rust
//! use serde_datetime::{Number, Token};
//!
//! let token: Token = serde_json::from_str("[946684800000]").unwrap();
//! assert_eq!(token, Token::Array(vec![Token::Number(Number::Integer(946_684_800_000))]));
//! ```

use crate::TokenMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One value of the interchange format.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Token {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Token>),
    Object(TokenMap),
}

/// A numeric token: integer or floating point.
///
/// Integers above `i64::MAX` are kept exact as [`Number::Unsigned`].
///
/// # Examples
///
/// ```rust
/// use serde_datetime::Number;
///
/// assert_eq!(Number::Integer(42).as_f64(), 42.0);
/// assert_eq!(Number::Float(1.5).to_string(), "1.5");
/// assert!(Number::Float(f64::NAN).as_i64().is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::Unsigned(_))
    }

    /// Converts this number to an `i64` if it is integral and in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Unsigned(u) => i64::try_from(*u).ok(),
            Number::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Unsigned(u) => *u as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Number::Unsigned(value), Number::Integer)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// The shape of a token, as seen by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Null,
    Bool,
    Number,
    String,
    Array { len: usize },
    Object,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Null => f.write_str("null"),
            Shape::Bool => f.write_str("boolean"),
            Shape::Number => f.write_str("number"),
            Shape::String => f.write_str("string"),
            Shape::Array { len: 0 } => f.write_str("empty array"),
            Shape::Array { len: 1 } => f.write_str("single-element array"),
            Shape::Array { len } => write!(f, "array of {} elements", len),
            Shape::Object => f.write_str("object"),
        }
    }
}

impl Token {
    /// Returns the shape of this token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datetime::{token, Shape};
    ///
    /// assert_eq!(token!(null).shape(), Shape::Null);
    /// assert_eq!(token!([]).shape(), Shape::Array { len: 0 });
    /// assert_eq!(token!(["a", "b"]).shape(), Shape::Array { len: 2 });
    /// ```
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Token::Null => Shape::Null,
            Token::Bool(_) => Shape::Bool,
            Token::Number(_) => Shape::Number,
            Token::String(_) => Shape::String,
            Token::Array(items) => Shape::Array { len: items.len() },
            Token::Object(_) => Shape::Object,
        }
    }

    /// Returns `true` if the token is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Token::Null)
    }

    /// Returns `true` if the token is a string or a number.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Token::String(_) | Token::Number(_))
    }

    /// If the token is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the token is a number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the token is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Token>> {
        match self {
            Token::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

/// Renders the token as compact JSON, for error messages and logs.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Null => write!(f, "null"),
            Token::Bool(b) => write!(f, "{}", b),
            Token::Number(n) => write!(f, "{}", n),
            Token::String(s) => write_json_string(f, s),
            Token::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Token::Object(obj) => {
                write!(
                    f,
                    "{{{}}}",
                    obj.iter()
                        .map(|(k, v)| format!("{}:{}", json_string(k), v))
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
        }
    }
}

fn json_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str(&json_string(s))
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Token::Null => serializer.serialize_unit(),
            Token::Bool(b) => serializer.serialize_bool(*b),
            Token::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Token::Number(Number::Unsigned(u)) => serializer.serialize_u64(*u),
            Token::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Token::String(s) => serializer.serialize_str(s),
            Token::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Token::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TokenVisitor)
    }
}

pub(crate) struct TokenVisitor;

impl<'de> serde::de::Visitor<'de> for TokenVisitor {
    type Value = Token;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid interchange value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Token::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Token::Number(Number::Integer(value)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Token::Number(Number::from(value)))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Token::Number(Number::Float(value)))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Token::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(Token::String(value))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Token::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(Token::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(elem) = seq.next_element()? {
            vec.push(elem);
        }
        Ok(Token::Array(vec))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut values = TokenMap::new();
        while let Some((key, value)) = map.next_entry()? {
            values.insert(key, value);
        }
        Ok(Token::Object(values))
    }
}

impl From<bool> for Token {
    fn from(value: bool) -> Self {
        Token::Bool(value)
    }
}

impl From<i32> for Token {
    fn from(value: i32) -> Self {
        Token::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Token {
    fn from(value: i64) -> Self {
        Token::Number(Number::Integer(value))
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Token::Number(Number::Float(value))
    }
}

impl From<Number> for Token {
    fn from(value: Number) -> Self {
        Token::Number(value)
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token::String(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::String(value.to_string())
    }
}

impl From<Vec<Token>> for Token {
    fn from(value: Vec<Token>) -> Self {
        Token::Array(value)
    }
}

impl From<TokenMap> for Token {
    fn from(value: TokenMap) -> Self {
        Token::Object(value)
    }
}

impl<T: Into<Token>> From<Option<T>> for Token {
    fn from(value: Option<T>) -> Self {
        value.map_or(Token::Null, Into::into)
    }
}
