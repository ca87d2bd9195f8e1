//! Enum codec: wire tokens to and from closed variant sets.

use jsonbind_schema::EnumSchema;
use serde_json::Value;

use crate::error::{DecodeError, EncodeError};
use crate::scalar::json_kind;
use crate::value::{Decoded, EnumValue};

/// Decode a wire token against a closed enum schema.
///
/// Exact case-sensitive match. An unrecognized token is a hard failure; a
/// declared `UNKNOWN` token is matched only when it appears literally in the
/// input, never used as a default bucket.
pub fn decode_enum(schema: &EnumSchema, v: &Value) -> Result<Decoded, DecodeError> {
    let Value::String(token) = v else {
        return Err(DecodeError::TypeMismatch {
            expected: "enum token",
            found: json_kind(v),
        });
    };
    if schema.contains(token) {
        Ok(Decoded::Enum(EnumValue::new(&schema.name, token)))
    } else {
        Err(DecodeError::UnknownVariant {
            schema: schema.name.clone(),
            token: token.clone(),
        })
    }
}

/// Encode a decoded enum variant as its wire token.
pub fn encode_enum(schema: &EnumSchema, value: &Decoded) -> Result<Value, EncodeError> {
    let Decoded::Enum(variant) = value else {
        return Err(EncodeError::SchemaMismatch {
            expected: format!("enum {}", schema.name),
            found: value.kind(),
        });
    };
    if variant.schema != schema.name {
        return Err(EncodeError::SchemaMismatch {
            expected: format!("enum {}", schema.name),
            found: "enum",
        });
    }
    if !schema.contains(&variant.token) {
        return Err(EncodeError::UnknownVariant {
            schema: schema.name.clone(),
            token: variant.token.clone(),
        });
    }
    Ok(Value::String(variant.token.clone()))
}
