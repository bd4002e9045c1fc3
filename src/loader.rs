//! Batch parsing of many rows

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::config::ParseConfig;
use crate::error::{RecordError, Result};
use crate::registry::{AnyRecord, RecordKind};
use crate::schema::{Record, Row};

/// Outcome of parsing a batch of rows
///
/// Rows are independent: one bad row never affects another. Accepted records
/// keep the order of their rows.
#[derive(Debug)]
pub struct BatchReport<T> {
    /// Parsed records, in input order
    pub records: Vec<T>,
    /// Index of each rejected row with the reason
    pub rejected: Vec<(usize, RecordError)>,
}

impl<T> BatchReport<T> {
    /// Number of rows in the batch
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len() + self.rejected.len()
    }

    /// Whether every row was accepted
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Number of rejections per field name
    #[must_use]
    pub fn rejections_by_field(&self) -> FxHashMap<&'static str, usize> {
        let mut counts = FxHashMap::default();
        for (_, error) in &self.rejected {
            for field_error in error.field_errors() {
                *counts.entry(field_error.field()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Fail with the first rejection, if any
    pub fn into_result(mut self) -> Result<Vec<T>> {
        if self.rejected.is_empty() {
            Ok(self.records)
        } else {
            Err(self.rejected.swap_remove(0).1)
        }
    }

    fn from_results(results: Vec<Result<T>>) -> Self {
        let mut records = Vec::with_capacity(results.len());
        let mut rejected = Vec::new();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(record) => records.push(record),
                Err(error) => rejected.push((index, error)),
            }
        }
        Self { records, rejected }
    }

    fn log_summary(&self, name: &str) {
        if self.rejected.is_empty() {
            log::info!("Parsed {} {name} rows", self.records.len());
        } else {
            log::warn!(
                "Parsed {} {name} rows, rejected {} of {}",
                self.records.len(),
                self.rejected.len(),
                self.total()
            );
        }
    }
}

/// Parse rows as one record type in parallel
pub fn parse_batch<R: Record>(rows: &[Row], config: &ParseConfig) -> BatchReport<R> {
    let results: Vec<Result<R>> = rows
        .par_iter()
        .map(|row| R::parse_row(row, config))
        .collect();

    let report = BatchReport::from_results(results);
    report.log_summary(R::schema().name);
    report
}

/// Parse rows of a table chosen at runtime
pub fn parse_table(kind: RecordKind, rows: &[Row], config: &ParseConfig) -> BatchReport<AnyRecord> {
    let results: Vec<Result<AnyRecord>> = rows
        .par_iter()
        .map(|row| kind.parse(row, config))
        .collect();

    let report = BatchReport::from_results(results);
    report.log_summary(kind.name());
    report
}
