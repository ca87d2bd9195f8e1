use std::sync::Arc;

use crate::enums::EnumSchema;
use crate::record::RecordSchema;

/// Describes how one wire value maps to one decoded value.
#[derive(Debug, Clone)]
pub enum Codec {
    /// JSON string.
    Str,
    /// JSON number, widened to `f64`. Integers are accepted; booleans are
    /// rejected even where a host language would treat them as numbers.
    Float,
    /// JSON boolean.
    Bool,
    /// JSON `null`. Its own kind so optional fields can be expressed as a
    /// `[codec, null]` candidate list.
    Null,
    /// ISO-8601 timestamp carried as a JSON string.
    DateTime,
    /// Closed set of string tokens.
    Enum(Arc<EnumSchema>),
    /// Ordered sequence of elements, all decoded through one element codec.
    List(Box<Codec>),
    /// Nested record.
    Record(Arc<RecordSchema>),
    /// Ordered structural union of candidate codecs.
    Union(UnionSchema),
}

impl Codec {
    /// Returns the "kind" string identifier for this codec.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::DateTime => "datetime",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Record(_) => "record",
            Self::Union(_) => "union",
        }
    }
}

/// An ordered list of candidate codecs for a union-typed value.
///
/// Candidates are tried in declaration order and the first successful decode
/// wins. When a discriminator is declared, dispatch goes straight to the
/// selected candidate instead of trial.
#[derive(Debug, Clone)]
pub struct UnionSchema {
    pub candidates: Vec<Codec>,
    pub discriminator: Option<Discriminator>,
}

/// Selects a union candidate from a discriminant field on the wire object.
///
/// `key` names a wire key whose string value is matched against `arms`; a
/// matching arm yields the index of the candidate to decode with.
#[derive(Debug, Clone)]
pub struct Discriminator {
    pub key: String,
    pub arms: Vec<(String, usize)>,
}

impl Discriminator {
    pub fn new(key: impl Into<String>, arms: Vec<(String, usize)>) -> Self {
        Self {
            key: key.into(),
            arms,
        }
    }

    /// Returns the candidate index selected by `token`, if any arm matches.
    pub fn select(&self, token: &str) -> Option<usize> {
        self.arms
            .iter()
            .find(|(arm, _)| arm == token)
            .map(|(_, index)| *index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_kind_returns_correct_strings() {
        assert_eq!(Codec::Str.kind(), "str");
        assert_eq!(Codec::Float.kind(), "float");
        assert_eq!(Codec::Bool.kind(), "bool");
        assert_eq!(Codec::Null.kind(), "null");
        assert_eq!(Codec::DateTime.kind(), "datetime");
        assert_eq!(
            Codec::Enum(Arc::new(EnumSchema::new("E", &["A"]))).kind(),
            "enum"
        );
        assert_eq!(Codec::List(Box::new(Codec::Str)).kind(), "list");
        assert_eq!(
            Codec::Record(Arc::new(RecordSchema::new("R", vec![]))).kind(),
            "record"
        );
        assert_eq!(
            Codec::Union(UnionSchema {
                candidates: vec![Codec::Str, Codec::Null],
                discriminator: None,
            })
            .kind(),
            "union"
        );
    }

    #[test]
    fn discriminator_select_matches_arm() {
        let d = Discriminator::new(
            "entityType",
            vec![("DATASET".into(), 0), ("DASHBOARD".into(), 1)],
        );
        assert_eq!(d.select("DATASET"), Some(0));
        assert_eq!(d.select("DASHBOARD"), Some(1));
        assert_eq!(d.select("PERSON"), None);
    }

    #[test]
    fn discriminator_select_is_case_sensitive() {
        let d = Discriminator::new("kind", vec![("DATASET".into(), 0)]);
        assert_eq!(d.select("dataset"), None);
    }
}
