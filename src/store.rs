//! Display State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The coordinator
//! writes into it through [`SignalView`]; components only read from it,
//! apart from the two input fields which follow the user's typing.

use leptos::prelude::*;
use reactive_stores::Store;
use tally_core::{Controls, Entry, EntryId, EntryInput, Mode, View};

/// Everything the page shows, field by field
#[derive(Clone, Debug, Store)]
pub struct DisplayState {
    /// One row per entry, in display order
    pub rows: Vec<Entry>,
    /// Name input text
    pub name_field: String,
    /// Quantity input text
    pub quantity_field: String,
    /// Aggregate shown under the form
    pub total: i64,
    /// Which form buttons are shown
    pub controls: Controls,
    /// Whether the list container is shown at all
    pub list_visible: bool,
}

impl Default for DisplayState {
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

/// Type alias for the store
pub type DisplayStore = Store<DisplayState>;

/// [`View`] backed by the display store
#[derive(Clone, Copy)]
pub struct SignalView {
    state: DisplayStore,
}

impl SignalView {
    pub fn new(state: DisplayStore) -> Self {
        Self { state }
    }
}

impl View for SignalView {
    fn render(&mut self, entries: &[Entry]) {
        *self.state.rows().write() = entries.to_vec();
    }

    fn append_row(&mut self, entry: &Entry) {
        self.state.rows().write().push(entry.clone());
    }

    fn update_row(&mut self, entry: &Entry) {
        self.state.rows().write().iter_mut()
            .find(|row| row.id == entry.id)
            .map(|row| *row = entry.clone());
    }

    fn remove_row(&mut self, id: EntryId) {
        self.state.rows().write().retain(|row| row.id != id);
    }

    fn read_input(&self) -> EntryInput {
        EntryInput::trimmed(
            &self.state.name_field().get_untracked(),
            &self.state.quantity_field().get_untracked(),
        )
    }

    fn populate_input(&mut self, entry: &Entry) {
        *self.state.name_field().write() = entry.name.clone();
        *self.state.quantity_field().write() = entry.quantity.to_string();
    }

    fn reset_input(&mut self) {
        self.state.name_field().write().clear();
        self.state.quantity_field().write().clear();
    }

    fn show_total(&mut self, total: i64) {
        *self.state.total().write() = total;
    }

    fn set_mode(&mut self, mode: Mode) {
        *self.state.controls().write() = Controls::for_mode(mode);
    }

    fn set_list_visible(&mut self, visible: bool) {
        *self.state.list_visible().write() = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Owner, DisplayStore, SignalView) {
        let owner = Owner::new();
        owner.set();
        let state = Store::new(DisplayState::default());
        (owner, state, SignalView::new(state))
    }

    fn row_names(state: DisplayStore) -> Vec<String> {
        state.rows().get_untracked().into_iter().map(|row| row.name).collect()
    }

    #[test]
    fn test_row_updates() {
        let (_owner, state, mut view) = setup();
        view.render(&[Entry::new(0, "Eggs", 300), Entry::new(1, "Cookie", 400)]);
        assert_eq!(row_names(state), vec!["Eggs", "Cookie"]);

        view.append_row(&Entry::new(2, "Toast", 90));
        view.update_row(&Entry::new(1, "Brownie", 450));
        view.remove_row(0);

        assert_eq!(
            state.rows().get_untracked(),
            vec![Entry::new(1, "Brownie", 450), Entry::new(2, "Toast", 90)]
        );
    }

    #[test]
    fn test_update_row_ignores_unknown_id() {
        let (_owner, state, mut view) = setup();
        view.render(&[Entry::new(0, "Eggs", 300)]);
        view.update_row(&Entry::new(9, "Ghost", 1));
        assert_eq!(state.rows().get_untracked(), vec![Entry::new(0, "Eggs", 300)]);
    }

    #[test]
    fn test_read_input_trims_fields() {
        let (_owner, state, view) = setup();
        *state.name_field().write() = "  Steak Dinner ".to_string();
        *state.quantity_field().write() = " 1200\n".to_string();
        assert_eq!(view.read_input(), EntryInput::trimmed("Steak Dinner", "1200"));
    }

    #[test]
    fn test_populate_and_reset_input() {
        let (_owner, state, mut view) = setup();
        view.populate_input(&Entry::new(1, "Cookie", 400));
        assert_eq!(state.name_field().get_untracked(), "Cookie");
        assert_eq!(state.quantity_field().get_untracked(), "400");

        view.reset_input();
        assert!(state.name_field().get_untracked().is_empty());
        assert!(state.quantity_field().get_untracked().is_empty());
    }

    #[test]
    fn test_mode_total_and_list_visibility() {
        let (_owner, state, mut view) = setup();
        view.set_mode(Mode::Editing);
        let controls = state.controls().get_untracked();
        assert!(!controls.add);
        assert!(controls.update && controls.delete && controls.back);

        view.set_mode(Mode::Normal);
        assert_eq!(state.controls().get_untracked(), Controls::for_mode(Mode::Normal));

        view.show_total(700);
        view.set_list_visible(false);
        assert_eq!(state.total().get_untracked(), 700);
        assert!(!state.list_visible().get_untracked());
    }
}
