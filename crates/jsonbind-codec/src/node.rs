//! Record (node) codec: JSON objects to and from typed record instances.

use jsonbind_schema::RecordSchema;
use serde_json::{Map, Value};

use crate::error::{DecodeError, EncodeError};
use crate::scalar::json_kind;
use crate::union;
use crate::value::RecordValue;

/// Decode a JSON object as a record instance.
///
/// Walks the schema's field descriptors in order: an absent wire key binds
/// nothing (the absent sentinel is simply a missing entry) unless the field
/// is required; a present key runs the descriptor's candidate list, nested
/// records recursing back through here.
pub fn decode_node(schema: &RecordSchema, v: &Value) -> Result<RecordValue, DecodeError> {
    let Value::Object(obj) = v else {
        return Err(DecodeError::TypeMismatch {
            expected: "object",
            found: json_kind(v),
        });
    };
    let mut record = RecordValue::new(&schema.name);
    for field in &schema.fields {
        match obj.get(&field.wire_key) {
            None => {
                if field.required {
                    return Err(DecodeError::MissingRequiredField(field.wire_key.clone()));
                }
            }
            Some(raw) => {
                let decoded = union::decode_candidates(&field.candidates, raw)?;
                record.set(&field.native_name, decoded);
            }
        }
    }
    Ok(record)
}

/// Encode a record instance back to a JSON object.
///
/// Keys are emitted in schema declaration order, which makes output
/// deterministic but not necessarily byte-identical to arbitrary input.
/// Absent fields are omitted entirely, never emitted as `null`; a field
/// explicitly bound to null re-emits its literal `null`.
pub fn encode_node(schema: &RecordSchema, record: &RecordValue) -> Result<Value, EncodeError> {
    let mut out = Map::new();
    for field in &schema.fields {
        let Some(value) = record.get(&field.native_name) else {
            continue;
        };
        let encoded = union::encode_candidates(&field.candidates, value)?;
        out.insert(field.wire_key.clone(), encoded);
    }
    Ok(Value::Object(out))
}
