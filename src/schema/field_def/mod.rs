//! Field and record definitions
//!
//! This module provides the static description of record types: field
//! descriptors, typed values and the record schema built from them.

pub mod field;
mod macros;
pub mod record_schema;
pub mod value;

pub use field::{FieldDescriptor, FieldType};
pub use record_schema::RecordSchema;
pub use value::{FieldCodec, FieldSlot, FieldValue};

// Re-export the macros to make them available to users of this module
pub use crate::{impl_field_slot, record_schema, token_enum};
