//! Entry Store
//!
//! Owns the authoritative list of entries and the current selection.
//! The selection is kept as an id and resolved on lookup, so deleting an
//! entry can never leave a dangling reference behind.

use serde::Serialize;

use crate::domain::{DomainError, DomainResult, Entry, EntryId, Quantity};

/// Authoritative entry list plus the entry under edit
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    /// Entry under edit, if any
    current: Option<EntryId>,
    /// Next id to hand out while the list is non-empty
    next_id: EntryId,
}

/// Serializable copy of the store state, used for debug dumps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSnapshot {
    pub entries: Vec<Entry>,
    pub current: Option<Entry>,
    pub total: i64,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(name, quantity)` pairs, assigning ids in order
    pub fn seeded<I, N, Q>(seed: I) -> Self
    where
        I: IntoIterator<Item = (N, Q)>,
        N: Into<String>,
        Q: AsRef<str>,
    {
        let mut store = Self::new();
        for (name, quantity) in seed {
            store.add(name, quantity.as_ref());
        }
        store
    }

    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry. An empty list restarts ids at 0.
    pub fn add(&mut self, name: impl Into<String>, quantity: &str) -> Entry {
        let id = if self.entries.is_empty() { 0 } else { self.next_id };
        self.next_id = id.saturating_add(1);

        let entry = Entry {
            id,
            name: name.into(),
            quantity: Quantity::parse(quantity),
        };
        self.entries.push(entry.clone());
        entry
    }

    pub fn get_by_id(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Overwrite the selected entry's fields. `None` when nothing is selected.
    pub fn update(&mut self, name: impl Into<String>, quantity: &str) -> Option<Entry> {
        let current = self.current?;
        let entry = self.entries.iter_mut().find(|entry| entry.id == current)?;
        entry.name = name.into();
        entry.quantity = Quantity::parse(quantity);
        Some(entry.clone())
    }

    /// Remove an entry by id, returning it
    pub fn delete(&mut self, id: EntryId) -> DomainResult<Entry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("entry {}", id)))?;

        if self.current == Some(id) {
            self.current = None;
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current = None;
    }

    /// Mark an entry as under edit. Returns false, leaving the selection
    /// unchanged, if the id is not in the list.
    pub fn set_selection(&mut self, id: EntryId) -> bool {
        if self.get_by_id(id).is_none() {
            return false;
        }
        self.current = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.current = None;
    }

    pub fn selected_id(&self) -> Option<EntryId> {
        self.current
    }

    pub fn selection(&self) -> Option<&Entry> {
        self.current.and_then(|id| self.get_by_id(id))
    }

    /// Sum of all quantities, recomputed on every call
    pub fn total(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |sum, entry| sum.saturating_add(entry.quantity.as_total()))
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            entries: self.entries.clone(),
            current: self.selection().cloned(),
            total: self.total(),
        }
    }
}
