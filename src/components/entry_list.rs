//! Entry List Component
//!
//! Renders the rows from the display store; hidden while the list is empty.

use leptos::prelude::*;

use crate::components::EntryRow;
use crate::context::use_tally;
use crate::store::DisplayStateStoreFields;

/// The `#item-list` container
#[component]
pub fn EntryList() -> impl IntoView {
    let display = use_tally().display;

    view! {
        <ul
            id="item-list"
            class="collection"
            style:display=move || if display.list_visible().get() { "block" } else { "none" }
        >
            <For
                each=move || display.rows().get()
                // Name and quantity in the key so an updated row re-renders
                key=|entry| (entry.id, entry.name.clone(), entry.quantity)
                children=move |entry| {
                    view! {
                        <EntryRow entry=entry />
                    }
                }
            />
        </ul>
    }
}
