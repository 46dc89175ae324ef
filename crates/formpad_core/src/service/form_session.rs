//! Multi-record editing session.
//!
//! # Responsibility
//! - Own the record store plus the currently selected index as explicit
//!   state; there is no hidden process-wide list.
//! - Orchestrate save, new-form, reset, import and export flows.
//!
//! # Invariants
//! - The selected index is always valid for the current store.
//! - A failed save or import leaves both the store and the selection in
//!   their last-known-good state.
//! - Saves re-sort the store and re-select by display name; with duplicate
//!   names the first match wins (documented limitation).

use log::{info, warn};
use std::io::{Read, Write};

use crate::codec::{export_store, import_store, CodecResult};
use crate::model::form::{FormRecord, FormUpdate};
use crate::store::{FormStore, StoreResult};

/// Editing session over an owned record store.
#[derive(Debug)]
pub struct FormSession {
    store: FormStore,
    selected: usize,
}

impl FormSession {
    /// Starts a session with one placeholder record selected.
    pub fn new() -> Self {
        Self {
            store: FormStore::new(),
            selected: 0,
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently selected record.
    pub fn selected(&self) -> &FormRecord {
        // Selection validity is a session invariant; every mutation path
        // re-establishes it.
        &self.store.records()[self.selected]
    }

    /// Moves selection to `index`.
    pub fn select(&mut self, index: usize) -> StoreResult<()> {
        self.store.get(index)?;
        self.selected = index;
        Ok(())
    }

    /// Appends a fresh placeholder record and selects it.
    pub fn new_form(&mut self) -> usize {
        let index = self.store.add(FormRecord::placeholder());
        self.selected = index;
        info!("event=new_form module=session status=ok index={index}");
        index
    }

    /// Resets the selected record to the placeholder state.
    pub fn reset_selected(&mut self) -> StoreResult<()> {
        self.store
            .replace_at(self.selected, FormRecord::placeholder())
    }

    /// Validated save of the selected record.
    ///
    /// On success the store is re-sorted by display name and the selection
    /// follows the saved record (first match by its display name); the new
    /// selected index is returned. On failure nothing changes.
    pub fn save_selected(&mut self, update: &FormUpdate) -> StoreResult<usize> {
        if let Err(err) = self.store.update_at(self.selected, update) {
            warn!(
                "event=save module=session status=rejected index={} reason={err}",
                self.selected
            );
            return Err(err);
        }

        let saved_name = self.selected().display_name().to_string();
        self.store.sort_by_display_name();
        // The saved record is still present, so a first match always
        // exists; duplicates resolve to the earliest in sorted order.
        self.selected = self.store.index_of_display_name(&saved_name).unwrap_or(0);

        info!(
            "event=save module=session status=ok index={} records={}",
            self.selected,
            self.store.len()
        );
        Ok(self.selected)
    }

    /// Display names of all records in current order, for selector UIs.
    pub fn display_names(&self) -> Vec<String> {
        self.store
            .records()
            .iter()
            .map(|record| record.display_name().to_string())
            .collect()
    }

    /// Exports the whole store to `writer`.
    pub fn export<W: Write>(&self, writer: W) -> CodecResult<()> {
        export_store(&self.store, writer)
    }

    /// Imports a store from `reader`, replacing the current one.
    ///
    /// Only a fully successful import replaces the store; the first record
    /// is selected afterwards and its index (0) is returned. On any codec
    /// failure the current store and selection are untouched.
    pub fn import<R: Read>(&mut self, reader: R) -> CodecResult<usize> {
        let imported = import_store(reader)?;
        self.store = imported;
        self.selected = 0;
        info!(
            "event=import module=session status=ok records={}",
            self.store.len()
        );
        Ok(self.selected)
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
