//! Widget Configuration
//!
//! Loaded from JSON; every field falls back to a default.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use crate::store::EntryStore;

/// Initial entry shown on first load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    /// Raw quantity text, coerced like user input
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Heading above the form
    pub title: String,
    /// Unit label shown after each quantity and the total
    pub unit: String,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Number of log records kept in memory
    pub log_capacity: usize,
    pub seed: Vec<SeedEntry>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            title: "Tracalorie".to_string(),
            unit: "Calories".to_string(),
            log_level: "info".to_string(),
            log_capacity: 200,
            seed: Vec::new(),
        }
    }
}

impl TallyConfig {
    pub fn from_json(text: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| DomainError::InvalidInput(format!("config: {}", e)))?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> DomainResult<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| DomainError::InvalidInput(format!("unknown log level '{}'", self.log_level)))
    }

    /// Store holding the configured seed entries
    pub fn initial_store(&self) -> EntryStore {
        EntryStore::seeded(self.seed.iter().map(|s| (s.name.clone(), s.quantity.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Quantity;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = TallyConfig::from_json("{}").unwrap();
        assert_eq!(config, TallyConfig::default());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = TallyConfig::from_json(r#"{ "unit": "kcal", "log_level": "debug" }"#).unwrap();
        assert_eq!(config.unit, "kcal");
        assert_eq!(config.title, "Tracalorie");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let err = TallyConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(TallyConfig::from_json("{ unit: ").is_err());
    }

    #[test]
    fn test_seed_builds_store() {
        let config = TallyConfig::from_json(
            r#"{ "seed": [
                { "name": "Steak Dinner", "quantity": "1200" },
                { "name": "Cookie", "quantity": "400" },
                { "name": "Eggs", "quantity": "300" }
            ] }"#,
        )
        .unwrap();

        let store = config.initial_store();
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[2].id, 2);
        assert_eq!(store.list()[0].quantity, Quantity::new(1200));
        assert_eq!(store.total(), 1900);
    }
}
