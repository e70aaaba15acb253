//! Codec registration.
//!
//! A [`Registry`] is a named, immutable bundle of codecs that a host installs
//! to make temporal kinds available by type identifier. Lookups return
//! [`DynCodec`] trait objects, which decode to and encode from
//! [`TemporalValue`] so the caller can pick the kind at runtime.
//!
//! ```rust
//! use serde_datetime::{token, Registry, TemporalOptions, TemporalValue};
//!
//! let codec = Registry::builtin().codec_for("duration").unwrap();
//! let value = codec.decode(&token!("PT1H"), &TemporalOptions::default()).unwrap();
//! assert_eq!(value.map(|v| v.to_string()), Some("PT1H".to_string()));
//! ```

use crate::codec::TemporalCodec;
use crate::dispatch;
use crate::error::{Error, Result};
use crate::options::TemporalOptions;
use crate::token::Token;
use crate::value::{TemporalKind, TemporalValue};
use crate::{Period, ZonedDateTime};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use indexmap::IndexMap;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

/// A codec for one kind, usable without naming its Rust type.
pub trait DynCodec: Send + Sync {
    fn kind(&self) -> TemporalKind;

    /// Whether the kind has a numeric representation.
    fn is_numeric(&self) -> bool;

    /// Decodes a token of any shape, applying the array conventions.
    fn decode(&self, token: &Token, options: &TemporalOptions) -> Result<Option<TemporalValue>>;

    /// Encodes a value of this codec's kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if `value` is of another kind.
    fn encode(&self, value: &TemporalValue, options: &TemporalOptions) -> Result<Token>;
}

struct CodecFor<T>(PhantomData<fn() -> T>);

impl<T: TemporalCodec> DynCodec for CodecFor<T> {
    fn kind(&self) -> TemporalKind {
        T::KIND
    }

    fn is_numeric(&self) -> bool {
        T::NUMERIC
    }

    fn decode(&self, token: &Token, options: &TemporalOptions) -> Result<Option<TemporalValue>> {
        Ok(dispatch::decode::<T>(token, options)?.map(T::into_value))
    }

    fn encode(&self, value: &TemporalValue, options: &TemporalOptions) -> Result<Token> {
        T::from_value_ref(value)
            .map(|typed| typed.encode(options))
            .ok_or(Error::KindMismatch {
                expected: T::KIND,
                found: value.kind(),
            })
    }
}

/// A named bundle of codecs, keyed by kind.
pub struct Registry {
    name: String,
    codecs: IndexMap<TemporalKind, Box<dyn DynCodec>>,
    type_ids: HashMap<TypeId, TemporalKind>,
}

impl Registry {
    /// Starts an empty registry called `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            registry: Registry {
                name: name.into(),
                codecs: IndexMap::new(),
                type_ids: HashMap::new(),
            },
        }
    }

    /// The process-wide registry of every built-in codec.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Registry::builder("builtin")
                .register::<NaiveDate>()
                .register::<NaiveTime>()
                .register::<NaiveDateTime>()
                .register::<DateTime<FixedOffset>>()
                .register::<ZonedDateTime>()
                .register::<DateTime<Utc>>()
                .register::<TimeDelta>()
                .register::<Period>()
                .build()
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a codec by type identifier, such as `"date"` or `"offset-date-time"`.
    #[must_use]
    pub fn codec_for(&self, type_id: &str) -> Option<&dyn DynCodec> {
        let kind = type_id.parse::<TemporalKind>().ok()?;
        self.codec_for_kind(kind)
    }

    #[must_use]
    pub fn codec_for_kind(&self, kind: TemporalKind) -> Option<&dyn DynCodec> {
        self.codecs.get(&kind).map(|codec| codec.as_ref())
    }

    /// Looks up the codec registered for the Rust type `T`.
    #[must_use]
    pub fn codec_for_type<T: 'static>(&self) -> Option<&dyn DynCodec> {
        let kind = self.type_ids.get(&TypeId::of::<T>())?;
        self.codec_for_kind(*kind)
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = TemporalKind> + '_ {
        self.codecs.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("kinds", &self.codecs.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builds a [`Registry`].
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Adds the codec for `T`. A later codec for the same kind replaces the
    /// earlier one and keeps its position.
    #[must_use]
    pub fn register<T: TemporalCodec>(mut self) -> Self {
        log::debug!("registry {}: registering {} codec", self.registry.name, T::KIND);
        self.registry
            .codecs
            .insert(T::KIND, Box::new(CodecFor::<T>(PhantomData)));
        self.registry.type_ids.retain(|_, kind| *kind != T::KIND);
        self.registry.type_ids.insert(TypeId::of::<T>(), T::KIND);
        self
    }

    #[must_use]
    pub fn build(self) -> Registry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::token;

    #[test]
    fn test_builtin_has_every_kind() {
        let registry = Registry::builtin();
        assert_eq!(registry.name(), "builtin");
        assert_eq!(registry.kinds().collect::<Vec<_>>(), TemporalKind::ALL.to_vec());
        for kind in TemporalKind::ALL {
            let codec = registry.codec_for(kind.id()).unwrap();
            assert_eq!(codec.kind(), kind);
        }
        assert!(registry.codec_for("LocalDate").is_none());
    }

    #[test]
    fn test_lookup_by_type() {
        let registry = Registry::builtin();
        let codec = registry.codec_for_type::<DateTime<Utc>>().unwrap();
        assert_eq!(codec.kind(), TemporalKind::Instant);
        assert!(codec.is_numeric());
        assert!(registry.codec_for_type::<String>().is_none());
    }

    #[test]
    fn test_custom_bundle() {
        let registry = Registry::builder("dates")
            .register::<NaiveDate>()
            .register::<Period>()
            .build();
        assert_eq!(registry.len(), 2);
        assert!(registry.codec_for_kind(TemporalKind::Time).is_none());
        assert!(registry.codec_for("period").is_some());
    }

    #[test]
    fn test_decode_and_encode_values() {
        let options = TemporalOptions::new().with_unwrap_single_value_arrays(true);
        let codec = Registry::builtin().codec_for("date").unwrap();

        let value = codec.decode(&token!(["2000-01-01"]), &options).unwrap().unwrap();
        assert_eq!(value, TemporalValue::Date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()));
        assert_eq!(codec.encode(&value, &options).unwrap(), token!("2000-01-01"));
    }

    #[test]
    fn test_encode_kind_mismatch() {
        let codec = Registry::builtin().codec_for("time").unwrap();
        let value = TemporalValue::Period(Period::new(1, 0, 0));
        let err = codec.encode(&value, &TemporalOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KindMismatch);
        assert_eq!(err.temporal_kind(), Some(TemporalKind::Time));
    }
}
