//! Schema integrity validator.
//!
//! Runs at schema-load time so mapping mistakes (duplicate wire keys, empty
//! enum sets, out-of-range discriminator arms) surface before any decode.

use std::collections::HashSet;

use crate::codec::{Codec, UnionSchema};
use crate::enums::EnumSchema;
use crate::record::RecordSchema;
use crate::registry::SchemaRegistry;

/// Validate every record schema registered in a catalogue.
pub fn validate_catalog(registry: &SchemaRegistry) -> Result<(), String> {
    for schema in registry.iter() {
        validate_record(schema)?;
    }
    Ok(())
}

/// Validate a single record schema for structural integrity.
///
/// Returns `Ok(())` if the schema is valid, or `Err(code)` with a short
/// description code.
pub fn validate_record(schema: &RecordSchema) -> Result<(), String> {
    if schema.name.is_empty() {
        return Err("NAME_EMPTY".into());
    }
    let mut wire_keys: HashSet<&str> = HashSet::new();
    let mut native_names: HashSet<&str> = HashSet::new();
    for field in &schema.fields {
        if field.wire_key.is_empty() {
            return Err("KEY_EMPTY".into());
        }
        if field.native_name.is_empty() {
            return Err("NAME_EMPTY".into());
        }
        if !wire_keys.insert(&field.wire_key) {
            return Err("DUP_KEY".into());
        }
        if !native_names.insert(&field.native_name) {
            return Err("DUP_NATIVE".into());
        }
        if field.candidates.is_empty() {
            return Err("EMPTY_CANDIDATES".into());
        }
        for candidate in &field.candidates {
            validate_codec(candidate)?;
        }
    }
    Ok(())
}

fn validate_codec(codec: &Codec) -> Result<(), String> {
    match codec {
        Codec::Str | Codec::Float | Codec::Bool | Codec::Null | Codec::DateTime => Ok(()),
        Codec::Enum(e) => validate_enum(e),
        Codec::List(element) => validate_codec(element),
        Codec::Record(schema) => validate_record(schema),
        Codec::Union(u) => validate_union(u),
    }
}

fn validate_enum(schema: &EnumSchema) -> Result<(), String> {
    if schema.name.is_empty() {
        return Err("NAME_EMPTY".into());
    }
    if schema.tokens.is_empty() {
        return Err("EMPTY_ENUM".into());
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for token in &schema.tokens {
        if !seen.insert(token) {
            return Err("DUP_TOKEN".into());
        }
    }
    Ok(())
}

fn validate_union(schema: &UnionSchema) -> Result<(), String> {
    if schema.candidates.is_empty() {
        return Err("EMPTY_UNION".into());
    }
    if let Some(d) = &schema.discriminator {
        if d.key.is_empty() {
            return Err("KEY_EMPTY".into());
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for (token, index) in &d.arms {
            if !seen.insert(token) {
                return Err("DUP_ARM".into());
            }
            if *index >= schema.candidates.len() {
                return Err("BAD_DISCRIMINATOR".into());
            }
        }
    }
    for candidate in &schema.candidates {
        validate_codec(candidate)?;
    }
    Ok(())
}
