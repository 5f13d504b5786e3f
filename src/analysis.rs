//! Batch analysis: ranking, cycle report and suggestions.
//!
//! [`Analyzer`] ties the pipeline together:
//!
//! 1. Normalize the batch once (generated ids are shared by both analyses).
//! 2. Detect dependency cycles on the normalized records.
//! 3. Score and rank under the requested strategy.
//!
//! `suggest` additionally keeps the top few ranked tasks and explains each
//! pick in a short "why" string.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ScoringConfig;
use crate::cycles::detect_cycles;
use crate::error::ScoreError;
use crate::models::{ScoredTask, Suggestion, Task, TaskId, TaskInput};
use crate::normalize::normalize;
use crate::scoring::{Scorer, ScoringContext, StrategyName};

/// Explanation used when no specific reason applies.
pub const FALLBACK_REASON: &str = "Top priority by selected strategy";

/// Result of [`Analyzer::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Scored tasks, highest score first.
    pub tasks: Vec<ScoredTask>,
    /// Whether any dependency cycle exists.
    pub cycle_detected: bool,
    /// Closed cycle paths.
    pub cycles: Vec<Vec<TaskId>>,
}

/// Runs analyses under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: ScoringConfig,
}

impl Analyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn scorer(&self, strategy: Option<StrategyName>) -> Scorer {
        let name = strategy.unwrap_or(self.config.default_strategy);
        Scorer::named(name, self.config.weights)
    }

    fn rank(
        &self,
        tasks: Vec<Task>,
        strategy: Option<StrategyName>,
        context: &ScoringContext,
    ) -> Result<Vec<ScoredTask>, ScoreError> {
        let scorer = self.scorer(strategy);
        scorer.score_normalized(tasks, context).inspect_err(|e| {
            warn!(error = %e, strategy = scorer.strategy().name(), "scoring failed");
        })
    }

    /// Ranks a batch and reports its dependency cycles.
    ///
    /// `strategy = None` uses the configured default; so does `suggest`.
    pub fn analyze(
        &self,
        inputs: Vec<TaskInput>,
        strategy: Option<StrategyName>,
        context: &ScoringContext,
    ) -> Result<AnalysisReport, ScoreError> {
        let tasks = normalize(inputs);
        let cycles = detect_cycles(&tasks);
        if cycles.has_cycle {
            debug!(count = cycles.cycles.len(), "dependency cycles detected");
        }

        let ranked = self.rank(tasks, strategy, context)?;

        Ok(AnalysisReport {
            tasks: ranked,
            cycle_detected: cycles.has_cycle,
            cycles: cycles.cycles,
        })
    }

    /// Returns the top-ranked tasks with an explanation for each.
    ///
    /// The number of suggestions is `config.suggestion_limit`.
    pub fn suggest(
        &self,
        inputs: Vec<TaskInput>,
        strategy: Option<StrategyName>,
        context: &ScoringContext,
    ) -> Result<Vec<Suggestion>, ScoreError> {
        let ranked = self.rank(normalize(inputs), strategy, context)?;

        Ok(ranked
            .into_iter()
            .take(self.config.suggestion_limit)
            .map(|t| self.to_suggestion(t))
            .collect())
    }

    /// Explains why a scored task ranks high.
    ///
    /// Reasons, in order: "Urgent", "High importance", "Quick win",
    /// "High combined score"; joined with `"; "`.
    pub fn explain(&self, task: &ScoredTask) -> String {
        let thresholds = &self.config.reasons;
        let c = &task.components;

        let reasons: Vec<&str> = [
            (c.urgency >= thresholds.urgent, "Urgent"),
            (c.importance_norm >= thresholds.high_importance, "High importance"),
            (c.effort_ease >= thresholds.quick_win, "Quick win"),
            (task.raw_score >= thresholds.high_combined, "High combined score"),
        ]
        .into_iter()
        .filter_map(|(hit, reason)| hit.then_some(reason))
        .collect();

        if reasons.is_empty() {
            FALLBACK_REASON.to_string()
        } else {
            reasons.join("; ")
        }
    }

    fn to_suggestion(&self, task: ScoredTask) -> Suggestion {
        let why = self.explain(&task);
        Suggestion {
            id: task.task.id,
            title: task.task.title,
            score: task.score,
            why,
            due_date: task.task.due_date,
        }
    }
}

/// Analyzes a batch with the default configuration.
///
/// `strategy` is resolved leniently; unknown names mean `smart`.
pub fn analyze(
    tasks: Vec<TaskInput>,
    strategy: &str,
    context: &ScoringContext,
) -> Result<AnalysisReport, ScoreError> {
    Analyzer::default().analyze(tasks, Some(StrategyName::from_name(strategy)), context)
}

/// Top suggestions with the default configuration.
pub fn suggest(
    tasks: Vec<TaskInput>,
    strategy: &str,
    context: &ScoringContext,
) -> Result<Vec<Suggestion>, ScoreError> {
    Analyzer::default().suggest(tasks, Some(StrategyName::from_name(strategy)), context)
}
