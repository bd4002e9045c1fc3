//! A Rust library for turning Synthea CSV rows into typed, validated records.
//!
//! Each table of a Synthea export has a record type with a static schema.
//! Rows are normalized (blank values, header aliases, cross-field rules),
//! coerced field by field and assembled all-or-nothing: a rejected row
//! reports every field that failed.

pub mod config;
pub mod error;
pub mod loader;
pub mod registry;
pub mod schema;

// Re-export the most common types for easier use
// Core types
pub use config::{KeyPolicy, ParseConfig};
pub use error::{FieldError, RecordError, Result};
pub use schema::{
    DateFormatConfig, FieldDescriptor, FieldType, FieldValue, RawValue, Record, RecordSchema, Row,
};

// Catalog
pub use registry::{AnyRecord, RecordKind, catalog, parse_any};

// Batch parsing
pub use loader::{BatchReport, parse_batch, parse_table};

// Used by `record_schema!` expansions in downstream crates
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;
