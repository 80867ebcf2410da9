//! Event Coordinator
//!
//! Turns user actions into store mutations and view refreshes, and owns the
//! Normal/Editing transitions. Bad or missing input is dropped silently:
//! a handler that cannot act leaves both store and view untouched.

use log::{debug, warn};

use crate::domain::{Entry, EntryId};
use crate::store::EntryStore;
use crate::view::{Mode, View};

pub struct Coordinator<V: View> {
    store: EntryStore,
    view: V,
    mode: Mode,
    initialized: bool,
}

impl<V: View> Coordinator<V> {
    pub fn new(store: EntryStore, view: V) -> Self {
        Self {
            store,
            view,
            mode: Mode::Normal,
            initialized: false,
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Startup sequence. Only the first call has any effect.
    pub fn init(&mut self) {
        if self.initialized {
            debug!("[TALLY] init called twice, ignoring");
            return;
        }
        self.initialized = true;

        self.end_edit();
        let entries = self.store.list();
        self.view.set_list_visible(!entries.is_empty());
        self.view.render(entries);
        self.refresh_total();
        debug!("[TALLY] Initialized with {} entries", self.store.len());
    }

    /// Add button
    pub fn on_add(&mut self) -> Option<Entry> {
        if self.mode.is_editing() {
            debug!("[TALLY] Add ignored while editing");
            return None;
        }
        let input = self.view.read_input();
        if !input.is_complete() {
            return None;
        }

        let entry = self.store.add(input.name, &input.quantity);
        self.view.set_list_visible(true);
        self.view.append_row(&entry);
        self.refresh_total();
        self.view.reset_input();
        debug!("[TALLY] Added entry {}", entry.id);
        Some(entry)
    }

    /// Edit icon on a row
    pub fn on_edit(&mut self, id: EntryId) -> bool {
        if !self.store.set_selection(id) {
            warn!("[TALLY] Edit requested for unknown entry {}", id);
            return false;
        }
        if let Some(entry) = self.store.selection() {
            self.view.populate_input(entry);
        }
        self.mode = Mode::Editing;
        self.view.set_mode(Mode::Editing);
        true
    }

    /// Update button
    pub fn on_update(&mut self) -> Option<Entry> {
        let input = self.view.read_input();
        if !input.is_complete() {
            return None;
        }

        let Some(entry) = self.store.update(input.name, &input.quantity) else {
            debug!("[TALLY] Update with no selection");
            return None;
        };
        self.view.update_row(&entry);
        self.refresh_total();
        self.end_edit();
        debug!("[TALLY] Updated entry {}", entry.id);
        Some(entry)
    }

    /// Delete button
    pub fn on_delete(&mut self) -> Option<Entry> {
        let Some(id) = self.store.selected_id() else {
            debug!("[TALLY] Delete with no selection");
            return None;
        };

        let removed = match self.store.delete(id) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("[TALLY] Delete failed: {}", e);
                return None;
            }
        };
        self.view.remove_row(removed.id);
        self.refresh_total();
        self.end_edit();
        if self.store.is_empty() {
            self.view.set_list_visible(false);
        }
        debug!("[TALLY] Deleted entry {}", removed.id);
        Some(removed)
    }

    /// Back button
    pub fn on_cancel(&mut self) {
        self.end_edit();
    }

    /// Clear-all button
    pub fn on_clear(&mut self) {
        self.store.clear();
        self.refresh_total();
        self.view.render(&[]);
        self.view.set_list_visible(false);
        self.end_edit();
        debug!("[TALLY] Cleared all entries");
    }

    fn refresh_total(&mut self) {
        let total = self.store.total();
        self.view.show_total(total);
    }

    /// Drop the selection, reset the form and return to Normal
    fn end_edit(&mut self) {
        self.store.clear_selection();
        self.view.reset_input();
        self.mode = Mode::Normal;
        self.view.set_mode(Mode::Normal);
    }
}
