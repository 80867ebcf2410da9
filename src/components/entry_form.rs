//! Entry Form Component
//!
//! Name and quantity inputs with the add / update / delete / back buttons.
//! Exactly one button group is visible, driven by the display controls.

use leptos::prelude::*;
use tally_core::Coordinator;
use wasm_bindgen::JsCast;

use crate::context::use_tally;
use crate::store::DisplayStateStoreFields;

/// Text of the input element that fired `ev`
fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()?
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}

fn display_if(visible: bool) -> &'static str {
    if visible { "inline-block" } else { "none" }
}

/// Form for adding a new entry or editing the selected one
#[component]
pub fn EntryForm() -> impl IntoView {
    let ctx = use_tally();
    let display = ctx.display;
    let unit = ctx.unit.get_value();
    let controls = move || display.controls().get();

    let add_entry = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.dispatch(Coordinator::on_add);
    };
    let update_entry = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.dispatch(Coordinator::on_update);
    };
    let delete_entry = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.dispatch(Coordinator::on_delete);
    };
    let go_back = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.dispatch(Coordinator::on_cancel);
    };

    // Enter never submits
    let block_enter = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
        }
    };

    view! {
        <div class="card">
            <div class="card-content">
                <span class="card-title">"Add Meal / Food Item"</span>
                <form
                    class="form"
                    on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()
                    on:keypress=block_enter
                >
                    <div class="row">
                        <div class="input-field col s6">
                            <input
                                type="text"
                                id="item-name"
                                name="name"
                                placeholder="Add Item"
                                prop:value=move || display.name_field().get()
                                on:input=move |ev| {
                                    if let Some(value) = input_value(&ev) {
                                        *display.name_field().write() = value;
                                    }
                                }
                            />
                            <label for="item-name">"Meal"</label>
                        </div>
                        <div class="input-field col s6">
                            <input
                                type="text"
                                id="item-calories"
                                name="calories"
                                placeholder=format!("Add {}", unit)
                                prop:value=move || display.quantity_field().get()
                                on:input=move |ev| {
                                    if let Some(value) = input_value(&ev) {
                                        *display.quantity_field().write() = value;
                                    }
                                }
                            />
                            <label for="item-calories">{unit.clone()}</label>
                        </div>
                        <button
                            type="button"
                            class="add-btn btn blue darken-3"
                            style:display=move || display_if(controls().add)
                            on:click=add_entry
                        >
                            "Add Meal"
                        </button>
                        <button
                            type="button"
                            class="update-btn btn orange"
                            style:display=move || display_if(controls().update)
                            on:click=update_entry
                        >
                            "Update Meal"
                        </button>
                        <button
                            type="button"
                            class="delete-btn btn red"
                            style:display=move || display_if(controls().delete)
                            on:click=delete_entry
                        >
                            "Delete Meal"
                        </button>
                        <button
                            type="button"
                            class="back-btn btn grey pull-right"
                            style:display=move || display_if(controls().back)
                            on:click=go_back
                        >
                            "Back"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
