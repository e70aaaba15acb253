//! Ordered map type for object tokens.
//!
//! No temporal kind is object-shaped, so objects only ever reach a codec as
//! something to reject. They are still read in full and kept in insertion order
//! so that error messages and logs show the input as it was written.
//!
//! ## Examples
//!
//! ```rust
//! use serde_datetime::{Token, TokenMap};
//!
//! let mut map = TokenMap::new();
//! map.insert("year".to_string(), Token::from(2000i64));
//! map.insert("month".to_string(), Token::from(1i64));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(Token::Object(map).to_string(), r#"{"year":2000,"month":1}"#);
//! ```

use crate::Token;
use indexmap::IndexMap;

/// An ordered map of string keys to tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenMap(IndexMap<String, Token>);

impl TokenMap {
    /// Creates an empty `TokenMap`.
    #[must_use]
    pub fn new() -> Self {
        TokenMap(IndexMap::new())
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datetime::{Token, TokenMap};
    ///
    /// let mut map = TokenMap::new();
    /// assert!(map.insert("key".to_string(), Token::from(42i64)).is_none());
    /// assert!(map.insert("key".to_string(), Token::from(43i64)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Token) -> Option<Token> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Token> {
        self.0.get(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Token> {
        self.0.iter()
    }
}

impl IntoIterator for TokenMap {
    type Item = (String, Token);
    type IntoIter = indexmap::map::IntoIter<String, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Token)> for TokenMap {
    fn from_iter<T: IntoIterator<Item = (String, Token)>>(iter: T) -> Self {
        TokenMap(IndexMap::from_iter(iter))
    }
}
