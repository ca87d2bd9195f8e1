use crate::codec::Codec;

/// Metadata describing one record field.
///
/// The wire key is the JSON object key (`"createdAt"`, or the underscore-
/// prefixed `"_createdAt"` used to avoid collision with a same-purpose
/// camelCase sibling); the native name is the in-memory field identifier
/// (`created_at`). Candidates are tried in declaration order during decode
/// and the first success wins.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub wire_key: String,
    pub native_name: String,
    pub required: bool,
    pub candidates: Vec<Codec>,
}

impl FieldDescriptor {
    pub fn new(
        wire_key: impl Into<String>,
        native_name: impl Into<String>,
        candidates: Vec<Codec>,
    ) -> Self {
        Self {
            wire_key: wire_key.into(),
            native_name: native_name.into(),
            required: false,
            candidates,
        }
    }

    /// Marks the field required: a wire object missing this key fails decode
    /// instead of binding the absent sentinel.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// An ordered field-descriptor table plus the record-type name.
///
/// Field order is the canonical emission order on encode, regardless of the
/// key order of the wire object that was decoded.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Looks up a descriptor by native field identifier.
    pub fn field(&self, native_name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.native_name == native_name)
    }

    /// Looks up a descriptor by wire key.
    pub fn wire_field(&self, wire_key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.wire_key == wire_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "AuditStamp",
            vec![
                FieldDescriptor::new("actor", "actor", vec![Codec::Str, Codec::Null]),
                FieldDescriptor::new("time", "time", vec![Codec::DateTime, Codec::Null]),
            ],
        )
    }

    #[test]
    fn field_lookup_by_native_name() {
        let s = schema();
        assert_eq!(s.field("time").map(|f| f.wire_key.as_str()), Some("time"));
        assert!(s.field("missing").is_none());
    }

    #[test]
    fn field_lookup_by_wire_key() {
        let s = RecordSchema::new(
            "Dataset",
            vec![
                FieldDescriptor::new("_createdAt", "created_at", vec![Codec::DateTime, Codec::Null]),
                FieldDescriptor::new(
                    "createdAt",
                    "dataset_created_at",
                    vec![Codec::DateTime, Codec::Null],
                ),
            ],
        );
        // Underscore-prefixed and camelCase siblings are independent fields.
        assert_eq!(
            s.wire_field("_createdAt").map(|f| f.native_name.as_str()),
            Some("created_at")
        );
        assert_eq!(
            s.wire_field("createdAt").map(|f| f.native_name.as_str()),
            Some("dataset_created_at")
        );
    }

    #[test]
    fn required_defaults_to_false() {
        let f = FieldDescriptor::new("id", "id", vec![Codec::Str]);
        assert!(!f.required);
        assert!(f.required().required);
    }
}
