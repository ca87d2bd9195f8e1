use std::sync::Arc;

use jsonbind_codec::{decode_node, decode_value, encode_node, DecodeError, Decoded};
use jsonbind_schema::{EnumSchema, RecordSchema, SchemaBuilder};
use serde_json::json;

fn b() -> SchemaBuilder {
    SchemaBuilder::new()
}

fn contact_value_type() -> Arc<EnumSchema> {
    Arc::new(EnumSchema::new(
        "ContactValueType",
        &["EMAIL", "PERSON", "SLACK", "UNKNOWN"],
    ))
}

fn designated_contact() -> Arc<RecordSchema> {
    Arc::new(RecordSchema::new(
        "DesignatedContact",
        vec![
            b().field("designation", "designation", b().optional(b().str())),
            b().field("value", "value", b().optional(b().str())),
            b().field("valueType", "value_type", b().optional(b().enum_(&contact_value_type()))),
        ],
    ))
}

#[test]
fn record_roundtrip_value_equality_matrix() {
    let schema = designated_contact();
    let cases = vec![
        json!({}),
        json!({"designation": "owner"}),
        json!({"designation": "owner", "value": "a@b.c", "valueType": "EMAIL"}),
        json!({"value": null}),
    ];
    for wire in cases {
        let record = decode_node(&schema, &wire).expect("decode");
        let emitted = encode_node(&schema, &record).expect("encode");
        assert_eq!(emitted, wire, "wire shape preserved for {wire}");
        let record2 = decode_node(&schema, &emitted).expect("decode emitted");
        assert_eq!(record2, record, "value equality for {wire}");
    }
}

#[test]
fn union_order_dependence_matrix() {
    // Ambiguous input: a record object also matches a looser record schema.
    let tight = Arc::new(RecordSchema::new(
        "Tight",
        vec![b().field("name", "name", vec![b().str()]).required()],
    ));
    let loose = Arc::new(RecordSchema::new(
        "Loose",
        vec![b().field("name", "name", b().optional(b().str()))],
    ));
    let wire = json!({"name": "x"});

    let tight_first = decode_value(&b().union(vec![b().record(&tight), b().record(&loose)]), &wire)
        .expect("decode");
    assert_eq!(
        tight_first.as_record().map(|r| r.type_name.as_str()),
        Some("Tight")
    );

    let loose_first = decode_value(&b().union(vec![b().record(&loose), b().record(&tight)]), &wire)
        .expect("decode");
    assert_eq!(
        loose_first.as_record().map(|r| r.type_name.as_str()),
        Some("Loose")
    );
}

#[test]
fn union_failure_reports_most_specific_error_matrix() {
    let candidates = b().optional(b().enum_(&contact_value_type()));
    let err = jsonbind_codec::union::decode_candidates(&candidates, &json!("EMAIIL"))
        .expect_err("must fail");
    // The shape-correct-but-invalid enum error outranks the null mismatch.
    assert_eq!(
        err.to_string(),
        "no union candidate matched: unknown ContactValueType variant `EMAIIL`"
    );
}

#[test]
fn list_of_records_preserves_order_matrix() {
    let schema = Arc::new(RecordSchema::new(
        "AssetContacts",
        vec![b().field(
            "contacts",
            "contacts",
            b().optional(b().list(b().record(&designated_contact()))),
        )],
    ));
    let wire = json!({"contacts": [
        {"designation": "third"},
        {"designation": "first"},
        {"designation": "second"}
    ]});
    let record = decode_node(&schema, &wire).expect("decode");
    let contacts = record.get("contacts").and_then(Decoded::as_list).expect("list");
    let order: Vec<&str> = contacts
        .iter()
        .filter_map(|c| c.as_record()?.get("designation")?.as_str())
        .collect();
    assert_eq!(order, ["third", "first", "second"]);
    assert_eq!(encode_node(&schema, &record).expect("encode"), wire);
}

#[test]
fn required_field_failure_escapes_uncaught_matrix() {
    let schema = Arc::new(RecordSchema::new(
        "Header",
        vec![b().field("appName", "app_name", vec![b().str()]).required()],
    ));
    assert_eq!(
        decode_node(&schema, &json!({})),
        Err(DecodeError::MissingRequiredField("appName".into()))
    );
}

#[test]
fn decode_is_all_or_nothing_matrix() {
    // One bad nested element fails the whole decode; no partial graph.
    let schema = Arc::new(RecordSchema::new(
        "AssetContacts",
        vec![
            b().field("id", "id", b().optional(b().str())),
            b().field(
                "contacts",
                "contacts",
                b().optional(b().list(b().record(&designated_contact()))),
            ),
        ],
    ));
    let wire = json!({
        "id": "ok",
        "contacts": [{"designation": "owner"}, {"valueType": "PHONE"}]
    });
    assert!(decode_node(&schema, &wire).is_err());
}
