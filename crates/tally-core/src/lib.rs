//! Calorie Tally Core
//!
//! Layered the same way as the widget runs:
//! - domain: entry entity, quantity coercion, errors
//! - store: authoritative entry list and selection
//! - view: display contract plus a headless surface
//! - coordinator: event handlers tying store and view together

pub mod config;
pub mod coordinator;
pub mod domain;
pub mod store;
pub mod surface;
pub mod view;

mod tests;

pub use config::{SeedEntry, TallyConfig};
pub use coordinator::Coordinator;
pub use domain::{DomainError, DomainResult, Entry, EntryId, EntryInput, Quantity};
pub use store::{EntryStore, StoreSnapshot};
pub use surface::Surface;
pub use view::{Controls, Mode, View};
