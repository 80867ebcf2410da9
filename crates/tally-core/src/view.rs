//! View Contract
//!
//! What the coordinator may ask of a display surface. A view never touches
//! the store; it only projects what it is handed.

use serde::{Deserialize, Serialize};

use crate::domain::{Entry, EntryId, EntryInput};

/// Display mode of the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Adding new entries
    #[default]
    Normal,
    /// Updating or deleting the selected entry
    Editing,
}

impl Mode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing)
    }
}

/// Visibility of the form controls.
///
/// Either the add control alone is shown, or the update/delete/back trio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub add: bool,
    pub update: bool,
    pub delete: bool,
    pub back: bool,
}

impl Controls {
    pub fn for_mode(mode: Mode) -> Self {
        let editing = mode.is_editing();
        Self {
            add: !editing,
            update: editing,
            delete: editing,
            back: editing,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::for_mode(Mode::Normal)
    }
}

/// Display surface driven by the coordinator
pub trait View {
    /// Replace every row with one per entry, in order
    fn render(&mut self, entries: &[Entry]);

    fn append_row(&mut self, entry: &Entry);

    fn update_row(&mut self, entry: &Entry);

    fn remove_row(&mut self, id: EntryId);

    /// Current field values, trimmed
    fn read_input(&self) -> EntryInput;

    /// Copy an entry into the editable fields
    fn populate_input(&mut self, entry: &Entry);

    fn reset_input(&mut self);

    fn show_total(&mut self, total: i64);

    fn set_mode(&mut self, mode: Mode);

    fn set_list_visible(&mut self, visible: bool);
}
