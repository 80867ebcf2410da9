//! Headless Surface
//!
//! In-memory implementation of [`View`] holding the named display regions.
//! Used where no browser is present.

use crate::domain::{Entry, EntryId, EntryInput};
use crate::view::{Controls, Mode, View};

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub rows: Vec<Entry>,
    pub name_field: String,
    pub quantity_field: String,
    pub total: i64,
    pub controls: Controls,
    pub list_visible: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            name_field: String::new(),
            quantity_field: String::new(),
            total: 0,
            controls: Controls::default(),
            list_visible: true,
        }
    }
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing into the form
    pub fn type_input(&mut self, name: &str, quantity: &str) {
        self.name_field = name.to_string();
        self.quantity_field = quantity.to_string();
    }

    pub fn row(&self, id: EntryId) -> Option<&Entry> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Mode implied by which control set is visible
    pub fn mode(&self) -> Mode {
        if self.controls.add {
            Mode::Normal
        } else {
            Mode::Editing
        }
    }
}

impl View for Surface {
    fn render(&mut self, entries: &[Entry]) {
        self.rows = entries.to_vec();
    }

    fn append_row(&mut self, entry: &Entry) {
        self.rows.push(entry.clone());
    }

    fn update_row(&mut self, entry: &Entry) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == entry.id) {
            *row = entry.clone();
        }
    }

    fn remove_row(&mut self, id: EntryId) {
        self.rows.retain(|row| row.id != id);
    }

    fn read_input(&self) -> EntryInput {
        EntryInput::trimmed(&self.name_field, &self.quantity_field)
    }

    fn populate_input(&mut self, entry: &Entry) {
        self.name_field = entry.name.clone();
        self.quantity_field = entry.quantity.to_string();
    }

    fn reset_input(&mut self) {
        self.name_field.clear();
        self.quantity_field.clear();
    }

    fn show_total(&mut self, total: i64) {
        self.total = total;
    }

    fn set_mode(&mut self, mode: Mode) {
        self.controls = Controls::for_mode(mode);
    }

    fn set_list_visible(&mut self, visible: bool) {
        self.list_visible = visible;
    }
}
