//! Simulation configuration, loaded from JSON.

use std::path::Path;

use bazaar_types::{BazaarError, Result, constants};
use serde::{Deserialize, Serialize};

/// A house to place at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseConfig {
    pub capacity: u32,
    #[serde(default)]
    pub occupants: u32,
}

/// A homeless household already walking around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    pub household: u32,
}

/// A map-edge spawner that creates households on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnerConfig {
    pub household: u32,
}

/// Full simulation setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of ticks to run.
    pub rounds: u32,
    /// Ticks between a walker's match and its arrival.
    pub travel_ticks: u32,
    /// Smallest household a house will accept.
    pub min_household: u32,
    pub houses: Vec<HouseConfig>,
    pub walkers: Vec<WalkerConfig>,
    pub spawners: Vec<SpawnerConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 12,
            travel_ticks: constants::DEFAULT_TRAVEL_TICKS,
            min_household: 1,
            houses: vec![
                HouseConfig {
                    capacity: 4,
                    occupants: 0,
                },
                HouseConfig {
                    capacity: 4,
                    occupants: 1,
                },
                HouseConfig {
                    capacity: 2,
                    occupants: 0,
                },
            ],
            walkers: vec![WalkerConfig { household: 2 }, WalkerConfig { household: 3 }],
            spawners: vec![SpawnerConfig { household: 1 }],
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject setups the world cannot represent.
    pub fn validate(&self) -> Result<()> {
        if self.min_household == 0 {
            return Err(BazaarError::Configuration(
                "min_household must be positive".to_string(),
            ));
        }
        for (i, house) in self.houses.iter().enumerate() {
            if house.capacity == 0 {
                return Err(BazaarError::Configuration(format!(
                    "house {i} has zero capacity"
                )));
            }
            if house.occupants > house.capacity {
                return Err(BazaarError::Configuration(format!(
                    "house {i} holds {} occupants but has capacity {}",
                    house.occupants, house.capacity
                )));
            }
        }
        let households = self
            .walkers
            .iter()
            .map(|w| w.household)
            .chain(self.spawners.iter().map(|s| s.household));
        for household in households {
            if household == 0 {
                return Err(BazaarError::Configuration(
                    "household size must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = SimulationConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.travel_ticks, 3);
        assert_eq!(cfg.houses.len(), 3);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg = SimulationConfig::from_json(r#"{"rounds": 3, "houses": [{"capacity": 2}]}"#)
            .unwrap();
        assert_eq!(cfg.rounds, 3);
        assert_eq!(cfg.houses, vec![HouseConfig {
            capacity: 2,
            occupants: 0
        }]);
        assert_eq!(cfg.min_household, 1);
    }

    #[test]
    fn overfull_house_rejected() {
        let err = SimulationConfig::from_json(r#"{"houses": [{"capacity": 2, "occupants": 3}]}"#)
            .unwrap_err();
        assert!(matches!(err, BazaarError::Configuration(_)));
    }

    #[test]
    fn empty_household_rejected() {
        let err = SimulationConfig::from_json(r#"{"walkers": [{"household": 0}]}"#).unwrap_err();
        assert!(matches!(err, BazaarError::Configuration(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = SimulationConfig::from_json("{ rounds: ").unwrap_err();
        assert!(matches!(err, BazaarError::Serialization(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SimulationConfig::from_path(Path::new("/nonexistent/bazaar.json")).unwrap_err();
        assert!(matches!(err, BazaarError::Io(_)));
    }
}
