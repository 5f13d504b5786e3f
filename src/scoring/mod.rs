//! Scoring strategies and the scoring engine.
//!
//! Provides the per-task score components (urgency, importance,
//! effort-ease), pluggable strategies that fold them into one composite,
//! and a [`Scorer`] that ranks a batch by that composite.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use task_triage::models::TaskInput;
//! use task_triage::scoring::{Scorer, ScoringContext, strategies};
//!
//! let scorer = Scorer::new(strategies::UrgencyFirst);
//! let ctx = ScoringContext::on(NaiveDate::from_ymd_opt(2025, 11, 26).unwrap());
//!
//! let ranked = scorer
//!     .score(
//!         vec![
//!             TaskInput::new().with_id("later").with_due_date("2026-03-01"),
//!             TaskInput::new().with_id("today").with_due_date("2025-11-26"),
//!         ],
//!         &ctx,
//!     )
//!     .unwrap();
//! assert_eq!(ranked[0].id().as_str(), "today");
//! ```

mod context;
mod engine;
mod name;
pub mod strategies;

pub use context::ScoringContext;
pub use engine::{BatchBounds, Scorer};
pub use name::StrategyName;

use crate::models::ScoreComponents;
use std::fmt::Debug;

/// A weighting scheme that folds score components into one composite.
///
/// # Score Convention
/// **Higher score = do first.** Built-in strategies return values in
/// [0, 1] when the components are in [0, 1].
pub trait ScoringStrategy: Send + Sync + Debug {
    /// Strategy name (e.g., "smart", "urgency").
    fn name(&self) -> &'static str;

    /// Computes the composite score from a task's components.
    fn combine(&self, components: &ScoreComponents) -> f64;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
