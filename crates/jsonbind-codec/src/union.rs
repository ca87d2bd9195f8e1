//! Union resolver: ordered structural trial with discriminated fast path.

use jsonbind_schema::{Codec, UnionSchema};
use serde_json::Value;

use crate::error::{DecodeError, EncodeError};
use crate::value::Decoded;

/// Try each candidate codec in declaration order; the first success wins.
///
/// A single-candidate list returns that candidate's error directly, so the
/// common `[datetime]`-style field reports the real failure instead of a
/// one-element union wrapper. For longer lists every candidate's typed error
/// is kept in [`DecodeError::NoCandidateMatched`].
pub fn decode_candidates(candidates: &[Codec], v: &Value) -> Result<Decoded, DecodeError> {
    if let [only] = candidates {
        return crate::decode_value(only, v);
    }
    let mut errors = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match crate::decode_value(candidate, v) {
            Ok(decoded) => return Ok(decoded),
            Err(e) => errors.push(e),
        }
    }
    Err(DecodeError::NoCandidateMatched { errors })
}

/// Decode a union-typed value.
///
/// A discriminator, when declared and matched, dispatches straight to the
/// selected candidate; that candidate's real error then surfaces instead of
/// being swallowed by trial. A missing or unmatched discriminant falls back
/// to ordered trial, which also serves discriminant-free unions.
pub fn decode_union(schema: &UnionSchema, v: &Value) -> Result<Decoded, DecodeError> {
    if let Some(discriminator) = &schema.discriminator {
        if let Some(index) = v
            .as_object()
            .and_then(|obj| obj.get(&discriminator.key))
            .and_then(Value::as_str)
            .and_then(|token| discriminator.select(token))
        {
            if let Some(candidate) = schema.candidates.get(index) {
                return crate::decode_value(candidate, v);
            }
        }
    }
    decode_candidates(&schema.candidates, v)
}

/// Encode through the first candidate that accepts the decoded value's shape.
pub fn encode_candidates(candidates: &[Codec], value: &Decoded) -> Result<Value, EncodeError> {
    let mut first_error = None;
    for candidate in candidates {
        match crate::encode_value(candidate, value) {
            Ok(encoded) => return Ok(encoded),
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }
    Err(first_error.unwrap_or(EncodeError::SchemaMismatch {
        expected: "union candidate".to_string(),
        found: value.kind(),
    }))
}

pub fn encode_union(schema: &UnionSchema, value: &Decoded) -> Result<Value, EncodeError> {
    encode_candidates(&schema.candidates, value)
}
