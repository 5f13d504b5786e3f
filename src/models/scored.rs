//! Scoring output models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Task, TaskId};

/// Per-task score components, each within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    /// Deadline proximity.
    pub urgency: f64,
    /// Priority normalized against the batch maximum.
    pub importance_norm: f64,
    /// Inverse-normalized effort (low effort = high ease).
    #[serde(rename = "effort")]
    pub effort_ease: f64,
}

impl ScoreComponents {
    /// Creates a component set, clamping each value into [0, 1].
    pub fn new(urgency: f64, importance_norm: f64, effort_ease: f64) -> Self {
        Self {
            urgency: urgency.clamp(0.0, 1.0),
            importance_norm: importance_norm.clamp(0.0, 1.0),
            effort_ease: effort_ease.clamp(0.0, 1.0),
        }
    }
}

/// A normalized task enriched with its score.
///
/// Serializes flat: the task fields followed by `components`,
/// `raw_score` and `score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    /// The normalized record.
    #[serde(flatten)]
    pub task: Task,
    /// Score breakdown.
    pub components: ScoreComponents,
    /// Unrounded composite; the sort key.
    pub raw_score: f64,
    /// `raw_score` rounded to two decimals.
    pub score: f64,
}

impl ScoredTask {
    /// Attaches a composite score to a task.
    pub fn new(task: Task, components: ScoreComponents, raw_score: f64) -> Self {
        Self {
            task,
            components,
            raw_score,
            score: round2(raw_score),
        }
    }

    /// Task identifier.
    pub fn id(&self) -> &TaskId {
        &self.task.id
    }
}

/// A recommended task with a short explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: TaskId,
    /// Title as supplied; `null` when absent.
    pub title: Option<Value>,
    pub score: f64,
    /// Reasons joined with `"; "`.
    pub why: String,
    pub due_date: Option<Value>,
}

/// Rounds to two decimal places, ties to even (0.125 → 0.12).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
