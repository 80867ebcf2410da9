//! Total Display Component

use leptos::prelude::*;

use crate::context::use_tally;
use crate::store::DisplayStateStoreFields;

/// Running total of every entry's quantity
#[component]
pub fn TotalDisplay() -> impl IntoView {
    let ctx = use_tally();
    let display = ctx.display;
    let unit = ctx.unit.get_value();

    view! {
        <h3 class="center-align">
            {format!("Total {}: ", unit)}
            <span class="total-calories">{move || display.total().get()}</span>
        </h3>
    }
}
