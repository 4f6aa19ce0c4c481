//! Single-value string converters used by the persistence layer.
//!
//! A converter is picked by the declared type of the value being stored, so
//! new value types plug in by adding a converter rather than by extending a
//! central dispatcher.

use std::any::{Any, TypeId};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::QualifiedName;

const SEPARATOR: char = ':';

/// Converts values of one declared type to and from a single string token.
pub trait SingleValueConverter: Send + Sync {
    /// Returns `true` if values of `value_type` can be handled.
    fn can_convert(&self, value_type: TypeId) -> bool;

    /// Encodes `value`, or `None` if its type is not handled by this converter.
    fn encode_value(&self, value: &dyn Any) -> Option<String>;

    /// Decodes `raw` into a value of the handled type.
    fn decode_value(&self, raw: &str) -> Box<dyn Any + Send>;
}

/// Converter for [`QualifiedName`].
///
/// Encodes as `namespace:local_part`. The separator is always written, so a
/// name without a namespace becomes `:local_part`. Decoding splits at the
/// first `:`; a string without one is taken as a bare local part.
///
/// Namespaces are not escaped: a namespace that itself contains `:` does not
/// survive a round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifiedNameConverter;

impl QualifiedNameConverter {
    #[must_use]
    pub fn encode(name: &QualifiedName) -> String {
        format!("{}{SEPARATOR}{}", name.namespace(), name.local_part())
    }

    #[must_use]
    pub fn decode(raw: &str) -> QualifiedName {
        match raw.split_once(SEPARATOR) {
            Some((namespace, local_part)) => QualifiedName::new(namespace, local_part),
            None => QualifiedName::local(raw),
        }
    }
}

impl SingleValueConverter for QualifiedNameConverter {
    fn can_convert(&self, value_type: TypeId) -> bool {
        value_type == TypeId::of::<QualifiedName>()
    }

    fn encode_value(&self, value: &dyn Any) -> Option<String> {
        value.downcast_ref::<QualifiedName>().map(Self::encode)
    }

    fn decode_value(&self, raw: &str) -> Box<dyn Any + Send> {
        Box::new(Self::decode(raw))
    }
}

impl Serialize for QualifiedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&QualifiedNameConverter::encode(self))
    }
}

impl<'de> Deserialize<'de> for QualifiedName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(QualifiedNameConverter::decode(&raw))
    }
}
