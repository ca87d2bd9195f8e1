//! Scalar codec: primitive JSON values to and from native scalars.

use serde_json::{Number, Value};

use crate::error::{DecodeError, EncodeError};
use crate::value::Decoded;

/// The primitive kinds the scalar codec understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Str,
    Float,
    Bool,
    Null,
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Float => "number",
            Self::Bool => "bool",
            Self::Null => "null",
        }
    }
}

/// Returns the runtime kind of a wire JSON value, for error reporting.
pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode a primitive JSON value as the expected scalar kind.
///
/// Float accepts integer JSON numbers and widens them to `f64`. Booleans are
/// never numbers here: `serde_json` keeps them as a separate variant, unlike
/// languages where `bool` is an `int` subtype.
pub fn decode_scalar(kind: ScalarKind, v: &Value) -> Result<Decoded, DecodeError> {
    match (kind, v) {
        (ScalarKind::Str, Value::String(s)) => Ok(Decoded::Str(s.clone())),
        (ScalarKind::Float, Value::Number(n)) => {
            n.as_f64().map(Decoded::Float).ok_or(DecodeError::TypeMismatch {
                expected: "number",
                found: "number",
            })
        }
        (ScalarKind::Bool, Value::Bool(b)) => Ok(Decoded::Bool(*b)),
        (ScalarKind::Null, Value::Null) => Ok(Decoded::Null),
        (kind, other) => Err(DecodeError::TypeMismatch {
            expected: kind.as_str(),
            found: json_kind(other),
        }),
    }
}

/// Encode a decoded scalar back to its wire form.
pub fn encode_scalar(kind: ScalarKind, value: &Decoded) -> Result<Value, EncodeError> {
    match (kind, value) {
        (ScalarKind::Str, Decoded::Str(s)) => Ok(Value::String(s.clone())),
        (ScalarKind::Float, Decoded::Float(f)) => Number::from_f64(*f)
            .map(Value::Number)
            .ok_or(EncodeError::SchemaMismatch {
                expected: "number".to_string(),
                found: "float",
            }),
        (ScalarKind::Bool, Decoded::Bool(b)) => Ok(Value::Bool(*b)),
        (ScalarKind::Null, Decoded::Null) => Ok(Value::Null),
        (kind, other) => Err(EncodeError::SchemaMismatch {
            expected: kind.as_str().to_string(),
            found: other.kind(),
        }),
    }
}
