//! Scoring engine.
//!
//! # Algorithm
//!
//! 1. Normalize records (ids, defaults).
//! 2. Find the batch maxima of `priority` and `effort` (10 for an empty
//!    batch); divisors are `max(maximum, 1)`.
//! 3. Per task: `importance = min(priority / divisor, 1)`,
//!    `effort_ease = 1 - min(effort / divisor, 1)`, `urgency` from the
//!    due date. Components are clamped to [0, 1].
//! 4. Fold the components with the strategy, attach `raw_score` and the
//!    two-decimal `score`.
//! 5. Stable sort, descending by `raw_score`.
//!
//! # Complexity
//! O(n log n) for n tasks.

use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::{ScoringContext, ScoringStrategy, StrategyName};
use crate::config::SmartWeights;
use crate::error::ScoreError;
use crate::models::{ScoreComponents, ScoredTask, Task, TaskInput};
use crate::normalize::normalize;
use crate::urgency::urgency_of_value;

/// Maximum assumed when a batch has no tasks.
const EMPTY_BATCH_MAXIMUM: f64 = 10.0;

/// Batch-wide normalization bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchBounds {
    /// Largest priority in the batch.
    pub max_priority: f64,
    /// Largest effort in the batch.
    pub max_effort: f64,
}

impl BatchBounds {
    /// Computes the maxima of a normalized batch.
    ///
    /// Fails on the first task (in input order) whose priority or effort
    /// is not a number.
    pub fn of(tasks: &[Task]) -> Result<Self, ScoreError> {
        if tasks.is_empty() {
            return Ok(Self {
                max_priority: EMPTY_BATCH_MAXIMUM,
                max_effort: EMPTY_BATCH_MAXIMUM,
            });
        }

        let mut max_priority = f64::NEG_INFINITY;
        let mut max_effort = f64::NEG_INFINITY;
        for task in tasks {
            max_priority = max_priority.max(numeric(task, "priority", &task.priority)?);
            max_effort = max_effort.max(numeric(task, "effort", &task.effort)?);
        }

        Ok(Self {
            max_priority,
            max_effort,
        })
    }

    fn priority_divisor(&self) -> f64 {
        self.max_priority.max(1.0)
    }

    fn effort_divisor(&self) -> f64 {
        self.max_effort.max(1.0)
    }
}

fn numeric(task: &Task, field: &'static str, value: &Value) -> Result<f64, ScoreError> {
    value.as_f64().ok_or_else(|| ScoreError::NonNumeric {
        task_id: task.id.clone(),
        field,
        value: value.clone(),
    })
}

/// Ranks task batches under one strategy.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use task_triage::models::TaskInput;
/// use task_triage::scoring::{Scorer, ScoringContext, StrategyName};
/// use task_triage::config::SmartWeights;
///
/// let scorer = Scorer::named(StrategyName::Importance, SmartWeights::default());
/// let ctx = ScoringContext::on(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
/// let ranked = scorer
///     .score(
///         vec![
///             TaskInput::new().with_id("low").with_priority(1),
///             TaskInput::new().with_id("high").with_priority(10),
///         ],
///         &ctx,
///     )
///     .unwrap();
/// assert_eq!(ranked[0].id().as_str(), "high");
/// assert_eq!(ranked[0].score, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Scorer {
    strategy: Arc<dyn ScoringStrategy>,
}

impl Scorer {
    /// Creates a scorer with the given strategy.
    pub fn new<S: ScoringStrategy + 'static>(strategy: S) -> Self {
        Self {
            strategy: Arc::new(strategy),
        }
    }

    /// Creates a scorer for a named built-in strategy.
    pub fn named(name: StrategyName, weights: SmartWeights) -> Self {
        Self {
            strategy: name.build(weights),
        }
    }

    /// The active strategy.
    pub fn strategy(&self) -> &dyn ScoringStrategy {
        self.strategy.as_ref()
    }

    /// Normalizes and ranks a batch of caller records.
    pub fn score(
        &self,
        inputs: Vec<TaskInput>,
        context: &ScoringContext,
    ) -> Result<Vec<ScoredTask>, ScoreError> {
        self.score_normalized(normalize(inputs), context)
    }

    /// Ranks an already-normalized batch (highest score first).
    ///
    /// Ties keep their input order.
    pub fn score_normalized(
        &self,
        tasks: Vec<Task>,
        context: &ScoringContext,
    ) -> Result<Vec<ScoredTask>, ScoreError> {
        let bounds = BatchBounds::of(&tasks)?;

        let mut scored = tasks
            .into_iter()
            .map(|task| {
                let components = self.components(&task, &bounds, context)?;
                let raw_score = self.strategy.combine(&components);
                Ok(ScoredTask::new(task, components, raw_score))
            })
            .collect::<Result<Vec<_>, ScoreError>>()?;

        // `sort_by` is stable: equal raw scores keep input order.
        scored.sort_by(|a, b| b.raw_score.total_cmp(&a.raw_score));

        debug!(
            strategy = self.strategy.name(),
            tasks = scored.len(),
            max_priority = bounds.max_priority,
            max_effort = bounds.max_effort,
            "scored batch"
        );

        Ok(scored)
    }

    /// Computes the score components of one task against batch bounds.
    pub fn components(
        &self,
        task: &Task,
        bounds: &BatchBounds,
        context: &ScoringContext,
    ) -> Result<ScoreComponents, ScoreError> {
        let priority = numeric(task, "priority", &task.priority)?;
        let effort = numeric(task, "effort", &task.effort)?;

        let importance_norm = (priority / bounds.priority_divisor()).min(1.0);
        let effort_ease = 1.0 - (effort / bounds.effort_divisor()).min(1.0);
        let urgency = urgency_of_value(task.due_date.as_ref(), context.today);

        Ok(ScoreComponents::new(urgency, importance_norm, effort_ease))
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::named(StrategyName::Smart, SmartWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::strategies;
    use chrono::{Duration, NaiveDate};
    use serde_json::json;

    fn ctx() -> ScoringContext {
        ScoringContext::on(NaiveDate::from_ymd_opt(2025, 11, 26).unwrap())
    }

    fn days_from_today(days: i64) -> String {
        (ctx().today + Duration::days(days))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn task(id: &str, priority: i64, effort: i64) -> TaskInput {
        TaskInput::new()
            .with_id(id)
            .with_priority(priority)
            .with_effort(effort)
    }

    #[test]
    fn test_smart_basic_ordering() {
        let tasks = vec![
            task("1", 8, 4).with_due_date(days_from_today(4)),
            task("2", 5, 2).with_due_date(days_from_today(19)),
        ];

        let scored = Scorer::default().score(tasks, &ctx()).unwrap();
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].id().as_str(), "1");
        assert!(scored[0].score > scored[1].score);
    }

    #[test]
    fn test_smart_formula() {
        let tasks = vec![
            task("A", 8, 4).with_due_date(days_from_today(2)),
            task("B", 10, 8),
        ];
        let scored = Scorer::default().score(tasks, &ctx()).unwrap();
        let a = scored.iter().find(|t| t.id().as_str() == "A").unwrap();

        assert_eq!(a.components.urgency, 0.8);
        assert!((a.components.importance_norm - 0.8).abs() < 1e-12);
        assert!((a.components.effort_ease - 0.5).abs() < 1e-12);
        // 0.4*0.8 + 0.4*0.8 + 0.2*0.5 = 0.74
        assert!((a.raw_score - 0.74).abs() < 1e-12);
        assert_eq!(a.score, 0.74);
    }

    #[test]
    fn test_score_rounds_ties_to_even() {
        let tasks = vec![task("low", 1, 5), task("mid", 5, 5), task("max", 8, 5)];
        let scored = Scorer::new(strategies::ImportanceFirst)
            .score(tasks, &ctx())
            .unwrap();

        let low = scored.iter().find(|t| t.id().as_str() == "low").unwrap();
        let mid = scored.iter().find(|t| t.id().as_str() == "mid").unwrap();
        assert_eq!(low.raw_score, 0.125);
        assert_eq!(low.score, 0.12);
        assert_eq!(mid.raw_score, 0.625);
        assert_eq!(mid.score, 0.62);
    }

    #[test]
    fn test_urgency_strategy() {
        let tasks = vec![
            task("2", 10, 1).with_due_date(days_from_today(7)),
            task("1", 1, 10).with_due_date(days_from_today(1)),
        ];
        let scored = Scorer::new(strategies::UrgencyFirst).score(tasks, &ctx()).unwrap();
        assert_eq!(scored[0].id().as_str(), "1");
        assert_eq!(scored[0].score, 0.8);
        assert_eq!(scored[1].score, 0.6);
    }

    #[test]
    fn test_effort_strategy() {
        let tasks = vec![task("hard", 10, 10), task("quick", 1, 1)];
        let scored = Scorer::new(strategies::QuickWins).score(tasks, &ctx()).unwrap();
        assert_eq!(scored[0].id().as_str(), "quick");
        assert!((scored[0].raw_score - 0.9).abs() < 1e-12);
        assert_eq!(scored[1].raw_score, 0.0);
    }

    #[test]
    fn test_importance_strategy() {
        let tasks = vec![task("low", 1, 1), task("high", 10, 10)];
        let scored = Scorer::new(strategies::ImportanceFirst)
            .score(tasks, &ctx())
            .unwrap();
        assert_eq!(scored[0].id().as_str(), "high");
        assert_eq!(scored[0].score, 1.0);
        assert_eq!(scored[0].raw_score, scored[0].components.importance_norm);
    }

    #[test]
    fn test_assigns_ids_before_sorting() {
        let tasks = vec![
            TaskInput::new().with_title("A").with_priority(1),
            TaskInput::new().with_title("B").with_priority(9),
        ];
        let scored = Scorer::default().score(tasks, &ctx()).unwrap();

        assert_eq!(scored[0].task.title_str(), Some("B"));
        assert_eq!(scored[0].id().as_str(), "task_1");
        assert_eq!(scored[1].id().as_str(), "task_0");
    }

    #[test]
    fn test_defaults_applied() {
        let scored = Scorer::default()
            .score(vec![TaskInput::new().with_id("1").with_title("A")], &ctx())
            .unwrap();

        assert_eq!(scored[0].task.priority, json!(5));
        assert_eq!(scored[0].task.effort, json!(5));
        assert!(scored[0].task.dependencies.is_empty());
        assert_eq!(scored[0].task.due_date, None);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let tasks = (0..5).map(|i| task(&format!("t{i}"), 5, 5)).collect();
        let scored = Scorer::default().score(tasks, &ctx()).unwrap();
        let ids: Vec<_> = scored.iter().map(|t| t.id().as_str().to_string()).collect();
        assert_eq!(ids, vec!["t0", "t1", "t2", "t3", "t4"]);
    }

    #[test]
    fn test_sorted_descending() {
        let tasks = (0..5).map(|i| task(&i.to_string(), 10 - i, i)).collect();
        let scored = Scorer::default().score(tasks, &ctx()).unwrap();
        assert!(scored.windows(2).all(|w| w[0].raw_score >= w[1].raw_score));
    }

    #[test]
    fn test_empty_batch() {
        assert!(Scorer::default().score(Vec::new(), &ctx()).unwrap().is_empty());
        assert_eq!(
            BatchBounds::of(&[]).unwrap(),
            BatchBounds {
                max_priority: 10.0,
                max_effort: 10.0
            }
        );
    }

    #[test]
    fn test_zero_maximum_guarded() {
        let tasks = vec![task("a", 0, 0), task("b", 0, 0)];
        let scored = Scorer::default().score(tasks, &ctx()).unwrap();
        for t in &scored {
            assert_eq!(t.components.importance_norm, 0.0);
            assert_eq!(t.components.effort_ease, 1.0);
            assert!(t.raw_score.is_finite());
        }
    }

    #[test]
    fn test_negative_values_stay_in_range() {
        let tasks = vec![task("neg", -5, -3), task("pos", 4, 6)];
        let scored = Scorer::default().score(tasks, &ctx()).unwrap();
        for t in &scored {
            let c = t.components;
            for v in [c.urgency, c.importance_norm, c.effort_ease] {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_fractional_maximum_uses_unit_divisor() {
        let tasks = vec![TaskInput::new().with_id("a").with_priority(0.5).with_effort(0.5)];
        let scored = Scorer::default().score(tasks, &ctx()).unwrap();
        assert_eq!(scored[0].components.importance_norm, 0.5);
        assert_eq!(scored[0].components.effort_ease, 0.5);
    }

    #[test]
    fn test_non_numeric_priority_fails() {
        let tasks = vec![task("ok", 5, 5), TaskInput::new().with_id("bad").with_priority("high")];
        let err = Scorer::default().score(tasks, &ctx()).unwrap_err();
        assert_eq!(
            err,
            ScoreError::NonNumeric {
                task_id: "bad".into(),
                field: "priority",
                value: json!("high"),
            }
        );
    }

    #[test]
    fn test_null_effort_fails() {
        let input: TaskInput = serde_json::from_value(json!({"id": "x", "effort": null})).unwrap();
        let err = Scorer::default().score(vec![input], &ctx()).unwrap_err();
        assert!(matches!(err, ScoreError::NonNumeric { field: "effort", .. }));
        assert!(err.to_string().contains("effort must be a number"));
    }

    #[test]
    fn test_non_list_dependencies_tolerated() {
        let tasks = vec![TaskInput::new()
            .with_id("1")
            .with_raw_dependencies(json!("task2"))];
        let scored = Scorer::default().score(tasks, &ctx()).unwrap();
        assert_eq!(scored.len(), 1);
        assert!(scored[0].task.dependencies.is_empty());
    }

    #[test]
    fn test_scoring_is_repeatable() {
        let tasks = vec![
            task("1", 7, 4).with_due_date(days_from_today(5)),
            task("2", 3, 8).with_due_date(days_from_today(19)),
        ];
        let first = Scorer::default().score(tasks.clone(), &ctx()).unwrap();
        let second = Scorer::default().score(tasks, &ctx()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_strategies_disagree() {
        let tasks = vec![
            task("1", 8, 3).with_due_date(days_from_today(1)),
            task("2", 5, 7).with_due_date(days_from_today(14)),
            task("3", 2, 1).with_due_date(days_from_today(29)),
        ];
        let order = |name: StrategyName| -> Vec<String> {
            Scorer::named(name, SmartWeights::default())
                .score(tasks.clone(), &ctx())
                .unwrap()
                .iter()
                .map(|t| t.id().to_string())
                .collect()
        };
        assert_eq!(order(StrategyName::Smart), vec!["1", "3", "2"]);
        assert_eq!(order(StrategyName::Effort), vec!["3", "1", "2"]);
    }
}
