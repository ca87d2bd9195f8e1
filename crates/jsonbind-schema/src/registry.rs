use std::collections::HashMap;
use std::sync::Arc;

use crate::record::RecordSchema;

/// Named record schemas shared as read-only configuration.
///
/// The registry resolves root record types for the per-root entry points and
/// lets the whole catalogue be validated at load time. Decode never consults
/// it: nested records embed their schema directly.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    records: HashMap<String, Arc<RecordSchema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record schema under its own name, replacing any previous
    /// registration of the same name.
    pub fn add(&mut self, schema: Arc<RecordSchema>) {
        self.records.insert(schema.name.clone(), schema);
    }

    /// Resolves a record type by name.
    pub fn resolve(&self, name: &str) -> Result<Arc<RecordSchema>, String> {
        self.records
            .get(name)
            .cloned()
            .ok_or_else(|| format!("Record type not found: {name}"))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all registered schemas, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RecordSchema>> {
        self.records.values()
    }
}
