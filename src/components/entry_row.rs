//! Entry Row Component
//!
//! A single list row tagged with its entry id, with an edit icon.

use leptos::prelude::*;
use tally_core::{Entry, EntryId, Quantity};

use crate::context::use_tally;

/// DOM id of the row for an entry
pub fn row_dom_id(id: EntryId) -> String {
    format!("item-{}", id)
}

/// "400 Calories", "NaN Calories"
pub fn quantity_label(quantity: Quantity, unit: &str) -> String {
    format!("{} {}", quantity, unit)
}

/// List row; clicking the pencil enters edit mode for this entry
#[component]
pub fn EntryRow(entry: Entry) -> impl IntoView {
    let ctx = use_tally();
    let unit = ctx.unit.get_value();
    let id = entry.id;

    let edit = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.dispatch(move |coordinator| coordinator.on_edit(id));
    };

    view! {
        <li class="collection-item" id=row_dom_id(id)>
            <strong>{format!("{}: ", entry.name)}</strong>
            <em>{quantity_label(entry.quantity, &unit)}</em>
            <a href="#" class="secondary-content" on:click=edit>
                <i class="edit-item fa fa-pencil"></i>
            </a>
        </li>
    }
}
