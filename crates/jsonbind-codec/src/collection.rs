//! Collection codec: JSON arrays to and from ordered decoded sequences.

use jsonbind_schema::Codec;
use serde_json::Value;

use crate::error::{DecodeError, EncodeError};
use crate::scalar::json_kind;
use crate::value::Decoded;

/// Decode a JSON array by applying the element codec to each element in
/// order. The first element failure propagates; `[]` decodes to an empty
/// list, never to absent.
pub fn decode_list(element: &Codec, v: &Value) -> Result<Decoded, DecodeError> {
    let Value::Array(items) = v else {
        return Err(DecodeError::TypeMismatch {
            expected: "array",
            found: json_kind(v),
        });
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(crate::decode_value(element, item)?);
    }
    Ok(Decoded::List(out))
}

/// Encode a decoded list back to a JSON array, order preserved exactly.
pub fn encode_list(element: &Codec, value: &Decoded) -> Result<Value, EncodeError> {
    let Decoded::List(items) = value else {
        return Err(EncodeError::SchemaMismatch {
            expected: "list".to_string(),
            found: value.kind(),
        });
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(crate::encode_value(element, item)?);
    }
    Ok(Value::Array(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_preserves_order_and_length() {
        let d = decode_list(&Codec::Str, &json!(["c", "a", "b"])).expect("decode");
        let items = d.as_list().expect("list");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_str(), Some("c"));
        assert_eq!(items[1].as_str(), Some("a"));
        assert_eq!(items[2].as_str(), Some("b"));
    }

    #[test]
    fn decode_empty_array_is_empty_list_not_absent() {
        let d = decode_list(&Codec::Str, &json!([])).expect("decode");
        assert_eq!(d, Decoded::List(vec![]));
    }

    #[test]
    fn decode_non_array_fails() {
        assert_eq!(
            decode_list(&Codec::Str, &json!({"a": 1})),
            Err(DecodeError::TypeMismatch {
                expected: "array",
                found: "object",
            })
        );
    }

    #[test]
    fn decode_propagates_first_element_failure() {
        let err = decode_list(&Codec::Str, &json!(["ok", 2, 3])).expect_err("must fail");
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                expected: "string",
                found: "number",
            }
        );
    }

    #[test]
    fn encode_roundtrips_order() {
        let wire = json!([1, 3, 2]);
        let d = decode_list(&Codec::Float, &wire).expect("decode");
        let back = encode_list(&Codec::Float, &d).expect("encode");
        assert_eq!(back, json!([1.0, 3.0, 2.0]));
    }

    #[test]
    fn encode_non_list_fails() {
        assert!(matches!(
            encode_list(&Codec::Str, &Decoded::Str("x".into())),
            Err(EncodeError::SchemaMismatch { .. })
        ));
    }
}
