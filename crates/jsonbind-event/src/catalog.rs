//! The metadata-change-event schema catalogue (representative slice).
//!
//! Pure configuration: every record here is a table of field descriptors fed
//! to the codec engine. Wire keys are camelCase; an underscore-prefixed key
//! (`"_createdAt"`) coexists with its camelCase sibling (`"createdAt"`) as an
//! independent field bound to a distinct native name.

use std::sync::Arc;

use jsonbind_schema::{EnumSchema, RecordSchema, SchemaBuilder, SchemaRegistry};

pub const METADATA_CHANGE_EVENT: &str = "MetadataChangeEvent";
pub const DATASET: &str = "Dataset";
pub const EVENT_HEADER: &str = "EventHeader";

pub fn entity_type() -> Arc<EnumSchema> {
    Arc::new(EnumSchema::new(
        "EntityType",
        &[
            "DASHBOARD",
            "DATASET",
            "KNOWLEDGE_CARD",
            "METRIC",
            "NAMESPACE",
            "PERSON",
            "USER_DEFINED_RESOURCE",
            "VIRTUAL_VIEW",
        ],
    ))
}

pub fn data_platform() -> Arc<EnumSchema> {
    Arc::new(EnumSchema::new(
        "DataPlatform",
        &[
            "BIGQUERY",
            "DOCUMENTDB",
            "DYNAMODB",
            "ELASTICSEARCH",
            "EXTERNAL",
            "GLUE",
            "MSSQL",
            "MYSQL",
            "POSTGRESQL",
            "RDS",
            "REDIS",
            "REDSHIFT",
            "S3",
            "SNOWFLAKE",
            "SYNAPSE",
            "UNITY_CATALOG",
            "UNKNOWN",
        ],
    ))
}

pub fn contact_value_type() -> Arc<EnumSchema> {
    Arc::new(EnumSchema::new(
        "ContactValueType",
        &["EMAIL", "PERSON", "SLACK", "UNKNOWN"],
    ))
}

pub fn aspect_type() -> Arc<EnumSchema> {
    Arc::new(EnumSchema::new(
        "AspectType",
        &[
            "ASSET_CONTACTS",
            "ASSET_FOLLOWERS",
            "ASSET_GOVERNED_TAGS",
            "ASSET_LIKES",
            "CUSTOM_METADATA",
            "DASHBOARD_INFO",
            "DASHBOARD_UPSTREAM",
            "DATASET_DATA_QUALITY",
            "DATASET_DOCUMENTATION",
            "DATASET_INFO",
            "DATASET_QUERY_HISTORY",
            "DATASET_SCHEMA",
            "DATASET_STATISTICS",
            "DATASET_UPSTREAM",
            "DATASET_USAGE",
            "ENTITY_UPSTREAM",
            "SOURCE_INFO",
        ],
    ))
}

/// Creator/modifier attribution for an aspect instance.
pub fn audit_stamp() -> Arc<RecordSchema> {
    let b = SchemaBuilder::new();
    Arc::new(RecordSchema::new(
        "AuditStamp",
        vec![
            b.field("actor", "actor", b.optional(b.str())),
            b.field("time", "time", b.optional(b.datetime())),
        ],
    ))
}

pub fn designated_contact() -> Arc<RecordSchema> {
    let b = SchemaBuilder::new();
    Arc::new(RecordSchema::new(
        "DesignatedContact",
        vec![
            b.field("designation", "designation", b.optional(b.str())),
            b.field("value", "value", b.optional(b.str())),
            b.field("valueType", "value_type", b.optional(b.enum_(&contact_value_type()))),
        ],
    ))
}

pub fn asset_contacts() -> Arc<RecordSchema> {
    let b = SchemaBuilder::new();
    let stamp = audit_stamp();
    Arc::new(RecordSchema::new(
        "AssetContacts",
        vec![
            b.field("_createdAt", "created_at", b.optional(b.datetime())),
            b.field("aspectType", "aspect_type", b.optional(b.enum_(&aspect_type()))),
            b.field(
                "contacts",
                "contacts",
                b.optional(b.list(b.record(&designated_contact()))),
            ),
            b.field("created", "created", b.optional(b.record(&stamp))),
            b.field("createdAt", "asset_contacts_created_at", b.optional(b.datetime())),
            b.field("entityId", "entity_id", b.optional(b.str())),
            b.field("id", "id", b.optional(b.str())),
            b.field("lastModified", "last_modified", b.optional(b.record(&stamp))),
        ],
    ))
}

/// Logical identity of a dataset: how producers name an entity before any
/// entity id exists.
pub fn dataset_logical_id() -> Arc<RecordSchema> {
    let b = SchemaBuilder::new();
    Arc::new(RecordSchema::new(
        "DatasetLogicalID",
        vec![
            b.field("account", "account", b.optional(b.str())),
            b.field("name", "name", b.optional(b.str())),
            b.field("platform", "platform", b.optional(b.enum_(&data_platform()))),
        ],
    ))
}

pub fn event_header() -> Arc<RecordSchema> {
    let b = SchemaBuilder::new();
    Arc::new(RecordSchema::new(
        EVENT_HEADER,
        vec![
            b.field("appName", "app_name", b.optional(b.str())),
            b.field("server", "server", b.optional(b.str())),
            b.field("time", "time", b.optional(b.datetime())),
        ],
    ))
}

pub fn dataset() -> Arc<RecordSchema> {
    let b = SchemaBuilder::new();
    Arc::new(RecordSchema::new(
        DATASET,
        vec![
            b.field("_createdAt", "created_at", b.optional(b.datetime())),
            b.field("_versionedId", "versioned_id", b.optional(b.str())),
            b.field("assetContacts", "asset_contacts", b.optional(b.record(&asset_contacts()))),
            b.field("createdAt", "dataset_created_at", b.optional(b.datetime())),
            b.field("deletedAt", "deleted_at", b.optional(b.datetime())),
            b.field("displayName", "display_name", b.optional(b.str())),
            b.field("entityType", "entity_type", b.optional(b.enum_(&entity_type()))),
            b.field("id", "dataset_id", b.optional(b.str())),
            b.field("lastIngestedAt", "last_ingested_at", b.optional(b.datetime())),
            b.field("lastModifiedAt", "last_modified_at", b.optional(b.datetime())),
            b.field("logicalId", "logical_id", b.optional(b.record(&dataset_logical_id()))),
            b.field("versionedId", "dataset_versioned_id", b.optional(b.str())),
        ],
    ))
}

/// The event root: one optional entity payload per entity family plus the
/// transport header.
pub fn metadata_change_event() -> Arc<RecordSchema> {
    let b = SchemaBuilder::new();
    Arc::new(RecordSchema::new(
        METADATA_CHANGE_EVENT,
        vec![
            b.field("dataset", "dataset", b.optional(b.record(&dataset()))),
            b.field("eventHeader", "event_header", b.optional(b.record(&event_header()))),
        ],
    ))
}

/// Builds the full catalogue registry, one entry per named record type.
pub fn build_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry.add(audit_stamp());
    registry.add(designated_contact());
    registry.add(asset_contacts());
    registry.add(dataset_logical_id());
    registry.add(event_header());
    registry.add(dataset());
    registry.add(metadata_change_event());
    registry
}
