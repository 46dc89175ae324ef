//! Ordered, owning collection of form records.
//!
//! # Responsibility
//! - Provide index-based access and mutation over the record list.
//! - Keep sort and selection semantics in one place.
//!
//! # Invariants
//! - The store holds at least one record after construction.
//! - Index access is bounds-checked; out-of-range is a semantic error,
//!   never a clamp.
//! - Sorting is stable: records with equal display names keep their
//!   original relative order.

use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::form::{FormRecord, FormUpdate, FormValidationError};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for index and record mutation operations.
#[derive(Debug)]
pub enum StoreError {
    IndexOutOfRange { index: usize, len: usize },
    Validation(FormValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "record index {index} out of range for store of {len}")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IndexOutOfRange { .. } => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<FormValidationError> for StoreError {
    fn from(value: FormValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered record collection with exclusive ownership of its records.
///
/// Insertion order is the create order until an explicit sort. Records are
/// never removed individually; the whole collection is replaced on import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStore {
    forms: Vec<FormRecord>,
}

impl FormStore {
    /// Creates a store seeded with one placeholder record.
    pub fn new() -> Self {
        Self {
            forms: vec![FormRecord::placeholder()],
        }
    }

    /// Builds a store from already-validated records.
    ///
    /// Callers must pass at least one record; the codec enforces this
    /// before handing records over.
    pub(crate) fn from_records(forms: Vec<FormRecord>) -> Self {
        Self { forms }
    }

    /// Appends a record and returns its index.
    pub fn add(&mut self, record: FormRecord) -> usize {
        self.forms.push(record);
        let index = self.forms.len() - 1;
        debug!("event=store_add module=store status=ok index={index}");
        index
    }

    /// Replaces the record at `index` wholesale.
    pub fn replace_at(&mut self, index: usize, record: FormRecord) -> StoreResult<()> {
        let slot = self.slot_mut(index)?;
        *slot = record;
        Ok(())
    }

    /// Runs an atomic validated update against the record at `index`.
    pub fn update_at(&mut self, index: usize, update: &FormUpdate) -> StoreResult<()> {
        let record = self.slot_mut(index)?;
        record.try_update(update)?;
        Ok(())
    }

    /// Stable ascending sort by display name (lexicographic, by char code).
    ///
    /// Idempotent; ties keep their pre-sort relative order.
    pub fn sort_by_display_name(&mut self) {
        self.forms
            .sort_by(|a, b| a.display_name().cmp(b.display_name()));
        debug!(
            "event=store_sort module=store status=ok len={}",
            self.forms.len()
        );
    }

    /// Index of the first record with this display name in current order.
    pub fn index_of_display_name(&self, name: &str) -> Option<usize> {
        self.forms
            .iter()
            .position(|record| record.display_name() == name)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Always `false` for a constructed store; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Bounds-checked read access.
    pub fn get(&self, index: usize) -> StoreResult<&FormRecord> {
        self.forms
            .get(index)
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.forms.len(),
            })
    }

    /// Bounds-checked mutable access.
    pub fn get_mut(&mut self, index: usize) -> StoreResult<&mut FormRecord> {
        self.slot_mut(index)
    }

    /// Read-only view over all records in current order.
    pub fn records(&self) -> &[FormRecord] {
        &self.forms
    }

    fn slot_mut(&mut self, index: usize) -> StoreResult<&mut FormRecord> {
        let len = self.forms.len();
        self.forms
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
