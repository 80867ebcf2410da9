//! Calorie Tally App
//!
//! Builds the store, view and coordinator, runs the startup sequence once
//! and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use tally_core::{Coordinator, TallyConfig};

use crate::components::{EntryForm, EntryList, LogPanel, TitleBar, TotalDisplay};
use crate::context::TallyContext;
use crate::store::{DisplayState, SignalView};

#[component]
pub fn App(config: TallyConfig) -> impl IntoView {
    let display = Store::new(DisplayState::default());

    let mut coordinator = Coordinator::new(config.initial_store(), SignalView::new(display));
    coordinator.init();

    match serde_json::to_string(&coordinator.store().snapshot()) {
        Ok(dump) => log::debug!("[APP] Initial state {}", dump),
        Err(e) => log::warn!("[APP] Could not serialize initial state: {}", e),
    }

    // Handlers attach as the components below mount
    provide_context(TallyContext::new(coordinator, display, config.unit.clone()));

    view! {
        <TitleBar title=config.title.clone() />
        <div class="container">
            <EntryForm />
            <TotalDisplay />
            <EntryList />
        </div>
        <LogPanel />
    }
}
