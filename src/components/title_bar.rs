//! Title Bar Component
//!
//! Brand heading plus the clear-all action.

use leptos::prelude::*;
use tally_core::Coordinator;

use crate::context::use_tally;

/// Navigation bar with the app title and "Clear All"
#[component]
pub fn TitleBar(#[prop(into)] title: String) -> impl IntoView {
    let ctx = use_tally();

    let clear_all = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.dispatch(Coordinator::on_clear);
    };

    view! {
        <nav>
            <div class="nav-wrapper blue">
                <div class="container">
                    <a href="#" class="brand-logo center">{title}</a>
                    <ul class="right">
                        <li>
                            <a href="#" class="clear-btn btn blue lighten-3" on:click=clear_all>
                                "Clear All"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </nav>
    }
}
