//! Configuration types for value adaptation.

/// Configuration for date and timestamp handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatConfig {
    /// Format strings tried, in order, when parsing calendar dates
    pub date_formats: Vec<String>,
    /// Format strings tried, in order, for timestamps without an offset
    ///
    /// Values matched here are read as UTC.
    pub timestamp_formats: Vec<String>,
    /// Accept a bare date where a timestamp is expected, as midnight UTC
    pub date_as_midnight: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec!["%Y-%m-%d".to_string()],
            timestamp_formats: vec![
                "%Y-%m-%dT%H:%M:%S%.f".to_string(), // 2020-05-01T10:30:00.250
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S%.f".to_string(), // 2020-05-01 10:30:00
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M".to_string(),
            ],
            date_as_midnight: true,
        }
    }
}

impl DateFormatConfig {
    /// Add a date format, tried after the existing ones
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_formats.push(format.into());
        self
    }

    /// Add a timestamp format, tried after the existing ones
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_formats.push(format.into());
        self
    }
}
