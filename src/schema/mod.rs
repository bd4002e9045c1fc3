//! Module for describing, normalizing and validating Synthea rows.

pub mod adapt;
pub mod field_def;
pub mod record;
pub mod row;

// Re-export the main schema types for easier access
pub use adapt::{DateFormatConfig, NormalizeRule};
pub use field_def::{FieldCodec, FieldDescriptor, FieldSlot, FieldType, FieldValue, RecordSchema};
pub use record::Record;
pub use row::{RawValue, Row};
