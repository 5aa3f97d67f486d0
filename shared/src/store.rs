//! In-memory store of verification records.
//!
//! The store is the single source of truth for the review queue.
//! Iteration order is insertion order; readers get slices or
//! references and never observe a record mid-update because every
//! write replaces one slot in a single assignment.

use std::collections::HashMap;

use crate::error::ReviewError;
use crate::record::VerificationRecord;

/// Owns every [`VerificationRecord`] of the current session.
///
/// There is no delete operation: approved and rejected records stay
/// queryable for history.
#[derive(Debug, Default, Clone)]
pub struct VerificationStore {
    records: Vec<VerificationRecord>,
    index: HashMap<String, usize>,
}

impl VerificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an initial record collection.
    ///
    /// Records are upserted in order, so a duplicated id keeps the
    /// last occurrence (at the first occurrence's queue position).
    pub fn from_records(records: impl IntoIterator<Item = VerificationRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.upsert(record);
        }
        store
    }

    /// All records in insertion order.
    pub fn get_all(&self) -> &[VerificationRecord] {
        &self.records
    }

    /// Look up one record by id.
    pub fn get_by_id(&self, id: &str) -> Result<&VerificationRecord, ReviewError> {
        self.index
            .get(id)
            .map(|&slot| &self.records[slot])
            .ok_or_else(|| ReviewError::NotFound(id.to_string()))
    }

    /// Insert a new record or replace the existing one with the same
    /// id, keeping its queue position.
    pub fn upsert(&mut self, record: VerificationRecord) {
        match self.index.get(&record.id) {
            Some(&slot) => {
                self.records[slot] = record;
            },
            None => {
                self.index.insert(record.id.clone(), self.records.len());
                self.records.push(record);
            },
        }
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
