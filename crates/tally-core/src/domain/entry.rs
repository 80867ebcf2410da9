//! Entry Entity
//!
//! A single named record with a quantity, e.g. a meal and its calories.

use serde::{Deserialize, Serialize};
use super::quantity::Quantity;

/// Identifier assigned by the store on creation
pub type EntryId = u32;

/// A named, quantified record in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,
    /// Display name
    pub name: String,
    /// Coerced amount
    pub quantity: Quantity,
}

impl Entry {
    pub fn new(id: EntryId, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity: Quantity::new(quantity),
        }
    }
}

/// Raw text read from the editable fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryInput {
    pub name: String,
    pub quantity: String,
}

impl EntryInput {
    /// Build from field text, trimming surrounding whitespace
    pub fn trimmed(name: &str, quantity: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            quantity: quantity.trim().to_string(),
        }
    }

    /// Both required fields carry text
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.quantity.is_empty()
    }
}
