//! In-memory record store
//!
//! The local stand-in for the remote record-storage service. Records live in
//! a vector behind a mutex; lookups are linear scans, which is fine at
//! gradebook scale.

use super::{Record, RecordStore, StoreError};
use std::sync::{Mutex, PoisonError};

/// In-memory adapter for one logical table
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryStore<T> {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Create a store seeded with existing records
    ///
    /// Records without an id (id 0) are assigned the next free one, in input
    /// order.
    #[must_use]
    pub fn with_records(records: Vec<T>) -> Self {
        let store = Self::new();
        {
            let mut guard = store.lock();
            for mut record in records {
                if record.id() == 0 {
                    record.set_id(next_id(&guard));
                }
                guard.push(record);
            }
        }
        store
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lock the record vector, recovering from poisoning
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Next id: one past the highest live id (ids start at 1)
fn next_id<T: Record>(records: &[T]) -> u32 {
    records.iter().map(Record::id).max().unwrap_or(0) + 1
}

impl<T: Record> RecordStore<T> for MemoryStore<T> {
    fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.lock().clone())
    }

    fn get(&self, id: u32) -> Result<T, StoreError> {
        self.lock()
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                table: T::table(),
                id,
            })
    }

    fn create(&self, mut record: T) -> Result<T, StoreError> {
        let mut records = self.lock();
        record.set_id(next_id(&records));
        records.push(record.clone());
        Ok(record)
    }

    fn update(&self, id: u32, mut record: T) -> Result<T, StoreError> {
        let mut records = self.lock();
        let index = records
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or(StoreError::NotFound {
                table: T::table(),
                id,
            })?;

        record.set_id(id);
        records[index] = record.clone();
        Ok(record)
    }

    fn delete(&self, id: u32) -> Result<(), StoreError> {
        let mut records = self.lock();
        let index = records
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or(StoreError::NotFound {
                table: T::table(),
                id,
            })?;

        records.remove(index);
        Ok(())
    }
}

impl<T: Record> From<Vec<T>> for MemoryStore<T> {
    fn from(records: Vec<T>) -> Self {
        Self::with_records(records)
    }
}
