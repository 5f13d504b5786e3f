//! Built-in scoring strategies.
//!
//! # Strategies
//!
//! | Name | Composite |
//! |------|-----------|
//! | `urgency` | urgency |
//! | `effort` | effort-ease |
//! | `importance` | importance |
//! | `smart` | 0.4·urgency + 0.4·importance + 0.2·effort-ease |
//!
//! # Score Convention
//! All strategies return higher scores for tasks that should be done first.

use super::ScoringStrategy;
use crate::config::SmartWeights;
use crate::models::ScoreComponents;

// ======================== Single-factor strategies ========================

/// Deadline proximity only.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrgencyFirst;

impl ScoringStrategy for UrgencyFirst {
    fn name(&self) -> &'static str {
        "urgency"
    }

    fn combine(&self, components: &ScoreComponents) -> f64 {
        components.urgency
    }

    fn description(&self) -> &'static str {
        "Closest deadline first"
    }
}

/// Effort-ease only: cheapest tasks first.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickWins;

impl ScoringStrategy for QuickWins {
    fn name(&self) -> &'static str {
        "effort"
    }

    fn combine(&self, components: &ScoreComponents) -> f64 {
        components.effort_ease
    }

    fn description(&self) -> &'static str {
        "Lowest effort first"
    }
}

/// Normalized priority only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportanceFirst;

impl ScoringStrategy for ImportanceFirst {
    fn name(&self) -> &'static str {
        "importance"
    }

    fn combine(&self, components: &ScoreComponents) -> f64 {
        components.importance_norm
    }

    fn description(&self) -> &'static str {
        "Highest priority first"
    }
}

// ======================== Blended strategy ========================

/// Weighted blend of all three components.
///
/// With the default weights (summing to 1.0) the composite is a convex
/// combination and stays within [0, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct Smart {
    pub weights: SmartWeights,
}

impl Smart {
    /// Creates a blend with custom weights.
    pub fn with_weights(weights: SmartWeights) -> Self {
        Self { weights }
    }
}

impl ScoringStrategy for Smart {
    fn name(&self) -> &'static str {
        "smart"
    }

    fn combine(&self, components: &ScoreComponents) -> f64 {
        components.urgency * self.weights.urgency
            + components.importance_norm * self.weights.importance
            + components.effort_ease * self.weights.effort
    }

    fn description(&self) -> &'static str {
        "Balanced urgency, importance and effort"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components() -> ScoreComponents {
        ScoreComponents::new(0.8, 0.5, 0.25)
    }

    #[test]
    fn test_single_factor() {
        let c = components();
        assert_eq!(UrgencyFirst.combine(&c), 0.8);
        assert_eq!(QuickWins.combine(&c), 0.25);
        assert_eq!(ImportanceFirst.combine(&c), 0.5);
    }

    #[test]
    fn test_smart_default_weights() {
        // 0.4*0.8 + 0.4*0.5 + 0.2*0.25 = 0.32 + 0.2 + 0.05
        let score = Smart::default().combine(&components());
        assert!((score - 0.57).abs() < 1e-12);
    }

    #[test]
    fn test_smart_custom_weights() {
        let smart = Smart::with_weights(SmartWeights::new(1.0, 0.0, 0.0));
        assert!((smart.combine(&components()) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_smart_bounded_for_extremes() {
        let smart = Smart::default();
        let top = ScoreComponents::new(1.0, 1.0, 1.0);
        let bottom = ScoreComponents::new(0.0, 0.0, 0.0);
        assert!(smart.combine(&top) <= 1.0 + 1e-12);
        assert_eq!(smart.combine(&bottom), 0.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(UrgencyFirst.name(), "urgency");
        assert_eq!(QuickWins.name(), "effort");
        assert_eq!(ImportanceFirst.name(), "importance");
        assert_eq!(Smart::default().name(), "smart");
        assert_eq!(Smart::default().description(), "Balanced urgency, importance and effort");
    }
}
