//! jsonbind-event — metadata-change-event schemas and entry points.
//!
//! Builds a representative slice of the metadata-event catalogue with the
//! schema builder and exposes one decode/encode pair per root record type,
//! each delegating to the record codec. Schemas are constructed once and
//! shared read-only across calls.

pub mod catalog;

use std::sync::{Arc, OnceLock};

use jsonbind_codec::{decode_node, encode_node, DecodeError, EncodeError, RecordValue};
use jsonbind_schema::{RecordSchema, SchemaRegistry};
use serde_json::Value;

static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();
static EVENT_SCHEMA: OnceLock<Arc<RecordSchema>> = OnceLock::new();
static DATASET_SCHEMA: OnceLock<Arc<RecordSchema>> = OnceLock::new();

/// The shared catalogue registry.
pub fn registry() -> &'static SchemaRegistry {
    REGISTRY.get_or_init(catalog::build_registry)
}

fn event_schema() -> &'static Arc<RecordSchema> {
    EVENT_SCHEMA.get_or_init(catalog::metadata_change_event)
}

fn dataset_schema() -> &'static Arc<RecordSchema> {
    DATASET_SCHEMA.get_or_init(catalog::dataset)
}

/// Decode a wire metadata-change-event object into a record graph.
pub fn decode_metadata_change_event(json: &Value) -> Result<RecordValue, DecodeError> {
    decode_node(event_schema(), json)
}

/// Encode a metadata-change-event record graph back to wire JSON.
pub fn encode_metadata_change_event(event: &RecordValue) -> Result<Value, EncodeError> {
    encode_node(event_schema(), event)
}

/// Decode a wire dataset object into a record graph.
pub fn decode_dataset(json: &Value) -> Result<RecordValue, DecodeError> {
    decode_node(dataset_schema(), json)
}

/// Encode a dataset record graph back to wire JSON.
pub fn encode_dataset(dataset: &RecordValue) -> Result<Value, EncodeError> {
    encode_node(dataset_schema(), dataset)
}
