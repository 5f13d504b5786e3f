//! Strategy lookup by name.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

use super::strategies::{ImportanceFirst, QuickWins, Smart, UrgencyFirst};
use super::ScoringStrategy;
use crate::config::SmartWeights;

/// The named built-in strategies.
///
/// Parsing is lenient: any unrecognized name resolves to [`StrategyName::Smart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyName {
    #[default]
    Smart,
    Urgency,
    Effort,
    Importance,
}

impl StrategyName {
    /// Resolves a caller-supplied name; unknown names fall back to `Smart`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "urgency" => Self::Urgency,
            "effort" => Self::Effort,
            "importance" => Self::Importance,
            _ => Self::Smart,
        }
    }

    /// Canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smart => "smart",
            Self::Urgency => "urgency",
            Self::Effort => "effort",
            Self::Importance => "importance",
        }
    }

    /// Instantiates the strategy. `weights` only affects `Smart`.
    pub fn build(self, weights: SmartWeights) -> Arc<dyn ScoringStrategy> {
        match self {
            Self::Smart => Arc::new(Smart::with_weights(weights)),
            Self::Urgency => Arc::new(UrgencyFirst),
            Self::Effort => Arc::new(QuickWins),
            Self::Importance => Arc::new(ImportanceFirst),
        }
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StrategyName {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl Serialize for StrategyName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StrategyName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
