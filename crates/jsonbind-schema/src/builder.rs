//! SchemaBuilder — factory for constructing codec and schema values.

use std::sync::Arc;

use crate::codec::{Codec, Discriminator, UnionSchema};
use crate::enums::EnumSchema;
use crate::record::{FieldDescriptor, RecordSchema};

/// Factory for building schemas without spelling out the enum variants.
///
/// Catalogue definitions read as tables of builder calls, which keeps the
/// wire-key/native-name mapping data rather than code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaBuilder;

impl SchemaBuilder {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Leaf codecs

    pub fn str(&self) -> Codec {
        Codec::Str
    }

    pub fn float(&self) -> Codec {
        Codec::Float
    }

    pub fn bool(&self) -> Codec {
        Codec::Bool
    }

    pub fn null(&self) -> Codec {
        Codec::Null
    }

    pub fn datetime(&self) -> Codec {
        Codec::DateTime
    }

    // ------------------------------------------------------------------
    // Composite codecs

    pub fn enum_(&self, schema: &Arc<EnumSchema>) -> Codec {
        Codec::Enum(Arc::clone(schema))
    }

    pub fn list(&self, element: Codec) -> Codec {
        Codec::List(Box::new(element))
    }

    pub fn record(&self, schema: &Arc<RecordSchema>) -> Codec {
        Codec::Record(Arc::clone(schema))
    }

    /// Discriminant-free union: ordered structural trial.
    pub fn union(&self, candidates: Vec<Codec>) -> Codec {
        Codec::Union(UnionSchema {
            candidates,
            discriminator: None,
        })
    }

    /// Discriminated union: `key`'s string value on the wire object selects
    /// the candidate directly; arms are (token, candidate) pairs.
    pub fn tagged_union(&self, key: impl Into<String>, arms: Vec<(&str, Codec)>) -> Codec {
        let discriminator = Discriminator::new(
            key,
            arms.iter()
                .enumerate()
                .map(|(index, (token, _))| ((*token).to_string(), index))
                .collect(),
        );
        Codec::Union(UnionSchema {
            candidates: arms.into_iter().map(|(_, codec)| codec).collect(),
            discriminator: Some(discriminator),
        })
    }

    /// The `[codec, null]` candidate list of an optional field.
    pub fn optional(&self, codec: Codec) -> Vec<Codec> {
        vec![codec, Codec::Null]
    }

    // ------------------------------------------------------------------
    // Descriptors

    pub fn field(
        &self,
        wire_key: impl Into<String>,
        native_name: impl Into<String>,
        candidates: Vec<Codec>,
    ) -> FieldDescriptor {
        FieldDescriptor::new(wire_key, native_name, candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    #[test]
    fn leaf_builders_produce_expected_kinds() {
        assert_eq!(b().str().kind(), "str");
        assert_eq!(b().float().kind(), "float");
        assert_eq!(b().bool().kind(), "bool");
        assert_eq!(b().null().kind(), "null");
        assert_eq!(b().datetime().kind(), "datetime");
    }

    #[test]
    fn list_wraps_element_codec() {
        let c = b().list(b().str());
        match c {
            Codec::List(element) => assert_eq!(element.kind(), "str"),
            other => panic!("expected list, got {}", other.kind()),
        }
    }

    #[test]
    fn optional_appends_null_candidate() {
        let candidates = b().optional(b().datetime());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].kind(), "datetime");
        assert_eq!(candidates[1].kind(), "null");
    }

    #[test]
    fn union_has_no_discriminator() {
        match b().union(vec![b().str(), b().float()]) {
            Codec::Union(u) => {
                assert_eq!(u.candidates.len(), 2);
                assert!(u.discriminator.is_none());
            }
            other => panic!("expected union, got {}", other.kind()),
        }
    }

    #[test]
    fn tagged_union_builds_arms_in_order() {
        let schema = Arc::new(RecordSchema::new("R", vec![]));
        let c = b().tagged_union(
            "entityType",
            vec![("DATASET", b().record(&schema)), ("NONE", b().null())],
        );
        match c {
            Codec::Union(u) => {
                let d = u.discriminator.expect("discriminator");
                assert_eq!(d.key, "entityType");
                assert_eq!(d.select("DATASET"), Some(0));
                assert_eq!(d.select("NONE"), Some(1));
                assert_eq!(u.candidates.len(), 2);
            }
            other => panic!("expected union, got {}", other.kind()),
        }
    }

    #[test]
    fn field_builder_sets_names() {
        let f = b().field("valueType", "value_type", b().optional(b().str()));
        assert_eq!(f.wire_key, "valueType");
        assert_eq!(f.native_name, "value_type");
        assert!(!f.required);
        assert_eq!(f.candidates.len(), 2);
    }
}
