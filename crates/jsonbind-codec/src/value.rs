//! The decoded value graph.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

/// One node of a decoded graph: a tree of records, scalars, enum variants,
/// timestamps, and lists rooted at one top-level record. Value-like and
/// immutable once constructed; no aliasing or back-references.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Null,
    Bool(bool),
    Float(f64),
    Str(String),
    /// Timestamps keep their wire offset; equality is instant-based, so a
    /// `Z` input and a `+00:00` re-encode compare equal.
    DateTime(DateTime<FixedOffset>),
    Enum(EnumValue),
    List(Vec<Decoded>),
    Record(RecordValue),
}

impl Decoded {
    /// Returns the "kind" string identifier for this value.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::DateTime(_) => "datetime",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Decoded]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }
}

/// A decoded enum variant: the schema it belongs to and its exact wire token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub schema: String,
    pub token: String,
}

impl EnumValue {
    pub fn new(schema: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            token: token.into(),
        }
    }
}

/// A decoded record instance: native-field map keyed by native identifier.
///
/// A field missing from the map is absent — distinct from a field explicitly
/// bound to [`Decoded::Null`], which round-trips as a literal `null` key.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    pub type_name: String,
    fields: BTreeMap<String, Decoded>,
}

impl RecordValue {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, native_name: &str) -> Option<&Decoded> {
        self.fields.get(native_name)
    }

    pub fn set(&mut self, native_name: impl Into<String>, value: Decoded) {
        self.fields.insert(native_name.into(), value);
    }

    /// Builder-style `set`, for assembling records in consumers and tests.
    pub fn with(mut self, native_name: impl Into<String>, value: Decoded) -> Self {
        self.set(native_name, value);
        self
    }

    pub fn is_absent(&self, native_name: &str) -> bool {
        !self.fields.contains_key(native_name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
