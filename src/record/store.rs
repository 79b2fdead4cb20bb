//! Append-only URL record store.

use super::{MAX_URL_LENGTH, UrlRecord};
use crate::error::SitemapError;

/// Append-only, ordered sequence of [`UrlRecord`]s.
///
/// Insertion order is significant: it determines chunk membership and the
/// order of `<url>` elements in the output. The store owns per-record
/// validation; a record that makes it in is renderable.
///
/// Not safe for concurrent `add`/`build` calls on the same instance.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<UrlRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, validating its location first.
    ///
    /// Fails with [`SitemapError::Validation`] if the location is empty or
    /// longer than [`MAX_URL_LENGTH`] Unicode scalar values.
    pub fn add(&mut self, record: UrlRecord) -> Result<(), SitemapError> {
        validate_location(&record.location)?;
        self.records.push(record);
        Ok(())
    }

    /// Append records in order, failing fast on the first invalid one.
    ///
    /// The error names the zero-based position of the failing record; records
    /// before it have already been appended.
    pub fn add_many(
        &mut self,
        records: impl IntoIterator<Item = UrlRecord>,
    ) -> Result<(), SitemapError> {
        for (position, record) in records.into_iter().enumerate() {
            self.add(record)
                .map_err(|e| match e {
                    SitemapError::Validation { field, reason } => SitemapError::Validation {
                        field,
                        reason: format!("{reason} (record at position {position})"),
                    },
                    other => other,
                })?;
        }
        Ok(())
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of all records, in insertion order.
    pub fn records(&self) -> &[UrlRecord] {
        &self.records
    }
}

fn validate_location(location: &str) -> Result<(), SitemapError> {
    if location.is_empty() {
        return Err(SitemapError::Validation {
            field: "location",
            reason: "must not be empty".to_string(),
        });
    }
    let length = location.chars().count();
    if length > MAX_URL_LENGTH {
        return Err(SitemapError::Validation {
            field: "location",
            reason: format!("{length} characters exceeds the {MAX_URL_LENGTH} character limit"),
        });
    }
    Ok(())
}
