//! Domain Layer
//!
//! Contains the entry entity, its quantity value and domain errors.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod entry;
mod quantity;

pub use error::{DomainError, DomainResult};
pub use entry::{Entry, EntryId, EntryInput};
pub use quantity::Quantity;
