//! Scoring context.

use chrono::{Local, NaiveDate};

/// Reference state passed to the scorer.
///
/// Urgency is measured against `today`. Fixing it makes scoring a pure
/// function of its inputs; [`ScoringContext::local_today`] reads the
/// process's local calendar date instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringContext {
    /// Reference date for deadline proximity.
    pub today: NaiveDate,
}

impl ScoringContext {
    /// Creates a context anchored at the given date.
    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Creates a context anchored at the current local date.
    pub fn local_today() -> Self {
        Self::on(Local::now().date_naive())
    }
}
