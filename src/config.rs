//! Topology configuration.
//!
//! Defaults match the planning layer's modelling units (millimetres):
//! dots closer than `1e-4` are the same node, and connection sections
//! differing by no more than `5e-4` count as equal.

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

pub const DEFAULT_COINCIDENCE_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_PROPERTY_TOLERANCE: f64 = 5e-4;

/// Where a ring without any hub starts and which way it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Start at the lowest dot identifier and head to its lower-id
    /// neighbor. Stable under input reordering.
    #[default]
    LowestId,
    /// Start at the first uncovered connection, walking it A to B.
    EnumerationOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    /// Max Euclidean distance at which two dots resolve to one node.
    pub coincidence_tolerance: f64,
    /// Absolute tolerance for thickness/width comparisons.
    pub property_tolerance: f64,
    pub tie_break: TieBreak,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            coincidence_tolerance: DEFAULT_COINCIDENCE_TOLERANCE,
            property_tolerance: DEFAULT_PROPERTY_TOLERANCE,
            tie_break: TieBreak::default(),
        }
    }
}

impl TopologyConfig {
    /// Decode from JSON; missing keys fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TopologyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_tolerance("coincidence_tolerance", self.coincidence_tolerance)?;
        check_tolerance("property_tolerance", self.property_tolerance)
    }
}

fn check_tolerance(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must be finite and positive, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TopologyConfig::default();
        assert_eq!(config.coincidence_tolerance, 1e-4);
        assert_eq!(config.property_tolerance, 5e-4);
        assert_eq!(config.tie_break, TieBreak::LowestId);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TopologyConfig::from_json(r#"{"tie_break": "EnumerationOrder"}"#).unwrap();
        assert_eq!(config.tie_break, TieBreak::EnumerationOrder);
        assert_eq!(config.coincidence_tolerance, DEFAULT_COINCIDENCE_TOLERANCE);
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        let err = TopologyConfig::from_json(r#"{"coincidence_tolerance": 0.0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = TopologyConfig::from_json(r#"{"property_tolerance": -1.0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = TopologyConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
