//! Schema model for the jsonbind typed JSON codec.
//!
//! A schema describes the shape of one record type as data: an ordered table
//! of field descriptors, each mapping a wire key to a native field identifier
//! and an ordered list of candidate codecs. Schemas are immutable, read-only
//! configuration shared across codec calls; they never change at runtime.
//!
//! Record schemas are acyclic by construction — entities reference each other
//! by string id on the wire, never by embedding — so nested records embed
//! their schema directly and no reference resolution happens during decode.

pub mod builder;
pub mod codec;
pub mod enums;
pub mod record;
pub mod registry;
pub mod validate;

pub use builder::SchemaBuilder;
pub use codec::{Codec, Discriminator, UnionSchema};
pub use enums::EnumSchema;
pub use record::{FieldDescriptor, RecordSchema};
pub use registry::SchemaRegistry;
pub use validate::{validate_catalog, validate_record};
