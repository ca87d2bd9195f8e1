//! jsonbind-codec — typed JSON codec runtime.
//!
//! A pure, synchronous, schema-driven transformation between wire-format
//! JSON (`serde_json::Value`) and a typed value graph ([`Decoded`]). Schemas
//! come from `jsonbind-schema` and are immutable configuration; every
//! decode/encode call works on its own input and output with no shared
//! mutable state, so independent calls may run concurrently without
//! synchronization.
//!
//! No depth limit is imposed: the schemas this engine is written for are
//! acyclic by construction, and depth-limiting untrusted input is the
//! caller's concern.

pub mod collection;
pub mod datetime;
pub mod enums;
pub mod error;
pub mod node;
pub mod scalar;
pub mod union;
pub mod value;

pub use error::{DecodeError, EncodeError};
pub use node::{decode_node, encode_node};
pub use value::{Decoded, EnumValue, RecordValue};

use jsonbind_schema::Codec;
use serde_json::Value;

use scalar::ScalarKind;

/// Decode one wire JSON value against a codec description.
pub fn decode_value(codec: &Codec, v: &Value) -> Result<Decoded, DecodeError> {
    match codec {
        Codec::Str => scalar::decode_scalar(ScalarKind::Str, v),
        Codec::Float => scalar::decode_scalar(ScalarKind::Float, v),
        Codec::Bool => scalar::decode_scalar(ScalarKind::Bool, v),
        Codec::Null => scalar::decode_scalar(ScalarKind::Null, v),
        Codec::DateTime => datetime::decode_datetime(v).map(Decoded::DateTime),
        Codec::Enum(schema) => enums::decode_enum(schema, v),
        Codec::List(element) => collection::decode_list(element, v),
        Codec::Record(schema) => node::decode_node(schema, v).map(Decoded::Record),
        Codec::Union(schema) => union::decode_union(schema, v),
    }
}

/// Encode one decoded value against a codec description.
pub fn encode_value(codec: &Codec, value: &Decoded) -> Result<Value, EncodeError> {
    match codec {
        Codec::Str => scalar::encode_scalar(ScalarKind::Str, value),
        Codec::Float => scalar::encode_scalar(ScalarKind::Float, value),
        Codec::Bool => scalar::encode_scalar(ScalarKind::Bool, value),
        Codec::Null => scalar::encode_scalar(ScalarKind::Null, value),
        Codec::DateTime => match value {
            Decoded::DateTime(dt) => Ok(datetime::encode_datetime(dt)),
            other => Err(EncodeError::SchemaMismatch {
                expected: "datetime".to_string(),
                found: other.kind(),
            }),
        },
        Codec::Enum(schema) => enums::encode_enum(schema, value),
        Codec::List(element) => collection::encode_list(element, value),
        Codec::Record(schema) => match value {
            Decoded::Record(record) => node::encode_node(schema, record),
            other => Err(EncodeError::SchemaMismatch {
                expected: format!("record {}", schema.name),
                found: other.kind(),
            }),
        },
        Codec::Union(schema) => union::encode_union(schema, value),
    }
}
