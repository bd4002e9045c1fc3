//! Configuration for record parsing.

use crate::schema::adapt::DateFormatConfig;

/// How a field supplied under both its canonical name and its alias is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// The source-file spelling wins (rows read from a CSV export)
    #[default]
    PreferAlias,
    /// The canonical lower-case spelling wins
    PreferCanonical,
    /// Differing values under both spellings are a field error
    RejectConflicts,
}

/// Configuration for turning rows into typed records
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Resolution of duplicate field spellings
    pub key_policy: KeyPolicy,
    /// Accepted date and timestamp layouts
    pub date_formats: DateFormatConfig,
    /// Log every rejected row at debug level
    pub log_rejections: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            key_policy: KeyPolicy::PreferAlias,
            date_formats: DateFormatConfig::default(),
            log_rejections: true,
        }
    }
}

impl ParseConfig {
    /// Configuration for rows read from a Synthea CSV export
    #[must_use]
    pub fn raw_file() -> Self {
        Self::default()
    }

    /// Configuration for records built in code or read back from interchange text
    #[must_use]
    pub fn programmatic() -> Self {
        Self {
            key_policy: KeyPolicy::RejectConflicts,
            ..Self::default()
        }
    }

    /// Replace the key policy
    #[must_use]
    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }
}
