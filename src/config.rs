//! Scoring configuration.
//!
//! [`ScoringConfig`] holds the tunable constants of the pipeline. The
//! defaults reproduce the stock behavior exactly; callers that never touch
//! the config get the documented weights and thresholds.
//!
//! # Defaults
//!
//! ```
//! use task_triage::config::ScoringConfig;
//!
//! let config = ScoringConfig::default();
//! assert_eq!(config.weights.urgency, 0.4);
//! assert_eq!(config.suggestion_limit, 3);
//! ```
//!
//! # Builder Pattern
//!
//! ```
//! use task_triage::config::{ScoringConfig, SmartWeights};
//! use task_triage::scoring::StrategyName;
//!
//! let config = ScoringConfig::default()
//!     .with_weights(SmartWeights::new(0.5, 0.3, 0.2))
//!     .with_default_strategy(StrategyName::Urgency)
//!     .with_suggestion_limit(5);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scoring::StrategyName;

/// Component weights of the `smart` strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmartWeights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
}

impl SmartWeights {
    /// Creates a weight set.
    pub fn new(urgency: f64, importance: f64, effort: f64) -> Self {
        Self {
            urgency,
            importance,
            effort,
        }
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.urgency + self.importance + self.effort
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("urgency", self.urgency),
            ("importance", self.importance),
            ("effort", self.effort),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        if self.total() <= 0.0 {
            return Err(ConfigError::ZeroWeights);
        }
        Ok(())
    }
}

impl Default for SmartWeights {
    fn default() -> Self {
        Self::new(0.4, 0.4, 0.2)
    }
}

/// Component thresholds that produce a suggestion reason.
///
/// Each comparison is inclusive (`value >= threshold`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonThresholds {
    /// Urgency at or above this reads "Urgent".
    pub urgent: f64,
    /// Importance at or above this reads "High importance".
    pub high_importance: f64,
    /// Effort-ease at or above this reads "Quick win".
    pub quick_win: f64,
    /// Raw score at or above this reads "High combined score".
    pub high_combined: f64,
}

impl Default for ReasonThresholds {
    fn default() -> Self {
        Self {
            urgent: 0.7,
            high_importance: 0.7,
            quick_win: 0.5,
            high_combined: 0.9,
        }
    }
}

impl ReasonThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("urgent", self.urgent),
            ("high_importance", self.high_importance),
            ("quick_win", self.quick_win),
            ("high_combined", self.high_combined),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}

/// Configuration for scoring and suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weights of the `smart` strategy.
    pub weights: SmartWeights,

    /// Strategy used when the caller names none.
    pub default_strategy: StrategyName,

    /// Number of tasks returned by `suggest`.
    pub suggestion_limit: usize,

    /// Reason thresholds for suggestion explanations.
    pub reasons: ReasonThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: SmartWeights::default(),
            default_strategy: StrategyName::Smart,
            suggestion_limit: 3,
            reasons: ReasonThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Sets the `smart` strategy weights.
    pub fn with_weights(mut self, weights: SmartWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the fallback strategy.
    pub fn with_default_strategy(mut self, strategy: StrategyName) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Sets the number of suggestions.
    pub fn with_suggestion_limit(mut self, n: usize) -> Self {
        self.suggestion_limit = n;
        self
    }

    /// Sets the reason thresholds.
    pub fn with_reasons(mut self, reasons: ReasonThresholds) -> Self {
        self.reasons = reasons;
        self
    }

    /// Checks weights and thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.reasons.validate()
    }
}
