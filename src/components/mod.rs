//! UI Components
//!
//! Leptos components rendering the display store.

mod title_bar;
mod entry_form;
mod entry_list;
mod entry_row;
mod total_display;
mod log_panel;

pub use title_bar::TitleBar;
pub use entry_form::EntryForm;
pub use entry_list::EntryList;
pub use entry_row::EntryRow;
pub use total_display::TotalDisplay;
pub use log_panel::LogPanel;
