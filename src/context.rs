//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use tally_core::Coordinator;

use crate::store::{DisplayStore, SignalView};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TallyContext {
    /// Event coordinator; every user action goes through it
    coordinator: StoredValue<Coordinator<SignalView>>,
    /// What the page renders
    pub display: DisplayStore,
    /// Unit label, e.g. "Calories"
    pub unit: StoredValue<String>,
}

impl TallyContext {
    pub fn new(coordinator: Coordinator<SignalView>, display: DisplayStore, unit: String) -> Self {
        Self {
            coordinator: StoredValue::new(coordinator),
            display,
            unit: StoredValue::new(unit),
        }
    }

    /// Run one handler to completion against the coordinator
    pub fn dispatch<R>(&self, action: impl FnOnce(&mut Coordinator<SignalView>) -> R) -> Option<R> {
        self.coordinator.try_update_value(action)
    }
}

/// Get the tally context
pub fn use_tally() -> TallyContext {
    expect_context::<TallyContext>()
}
