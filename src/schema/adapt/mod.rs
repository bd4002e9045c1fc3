//! Module for adapting raw input values to typed field values.

pub mod conversions;
pub mod date_utils;
pub mod normalize;
pub mod types;

// Re-export the main types and functions for easier access
pub use conversions::{coerce_field, coerce_text, coerce_value, parse_decimal};
pub use date_utils::{format_timestamp, parse_date_string, parse_timestamp_string};
pub use normalize::{NormalizeRule, NormalizedRow, blank_to_absent, normalize_row, resolve_key};
pub use types::DateFormatConfig;
