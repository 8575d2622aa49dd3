//! Record storage abstraction
//!
//! The rest of the crate talks to storage through [`RecordStore`], never
//! through ambient state. [`MemoryStore`] is the bundled adapter; a remote
//! record-storage client would implement the same trait.

pub mod memory;

pub use memory::MemoryStore;

use std::error::Error;
use std::fmt;

/// Identity handling required of every stored record type
pub trait Record: Clone {
    /// The record's identifier (0 means "not yet stored")
    fn id(&self) -> u32;

    /// Assign the record's identifier
    fn set_id(&mut self, id: u32);

    /// Logical table name, used in error messages
    fn table() -> &'static str;
}

/// Errors reported by a record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id exists in the table
    NotFound {
        /// Logical table name
        table: &'static str,
        /// The id that was looked up
        id: u32,
    },
    /// The backing adapter failed (remote adapters only)
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { table, id } => write!(f, "{table} with id {id} not found"),
            Self::Backend(message) => write!(f, "storage backend error: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Generic CRUD interface over one logical table
pub trait RecordStore<T: Record> {
    /// All records in the table
    ///
    /// # Errors
    /// Returns an error if the backing adapter fails.
    fn list(&self) -> Result<Vec<T>, StoreError>;

    /// One record by id
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no record has `id`.
    fn get(&self, id: u32) -> Result<T, StoreError>;

    /// Insert a record, assigning it the next free id
    ///
    /// # Errors
    /// Returns an error if the backing adapter fails.
    fn create(&self, record: T) -> Result<T, StoreError>;

    /// Replace the record with `id`, keeping its identity
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no record has `id`.
    fn update(&self, id: u32, record: T) -> Result<T, StoreError>;

    /// Remove the record with `id`
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no record has `id`.
    fn delete(&self, id: u32) -> Result<(), StoreError>;
}

macro_rules! impl_record {
    ($model:ty, $table:literal) => {
        impl Record for $model {
            fn id(&self) -> u32 {
                self.id
            }

            fn set_id(&mut self, id: u32) {
                self.id = id;
            }

            fn table() -> &'static str {
                $table
            }
        }
    };
}

impl_record!(crate::core::models::Assignment, "assignment");
impl_record!(crate::core::models::Course, "course");
impl_record!(crate::core::models::GradeEntry, "grade entry");
impl_record!(crate::core::models::Student, "student");
