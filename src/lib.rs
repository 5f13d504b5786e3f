//! Task prioritization core.
//!
//! Ranks a batch of task records by a weighted composite of deadline
//! urgency, importance and effort, and reports circular dependencies.
//! Pure and synchronous: no I/O, no state kept between calls. The
//! reference date for urgency is injected through
//! [`scoring::ScoringContext`].
//!
//! # Modules
//!
//! - **`models`**: Record types: `TaskInput`, `Task`, `ScoredTask`,
//!   `ScoreComponents`, `Suggestion`
//! - **`normalize`**: Id assignment and field defaults
//! - **`urgency`**: Due date → urgency bands
//! - **`scoring`**: Strategies and the ranking engine
//! - **`cycles`**: Dependency cycle detection (iterative DFS)
//! - **`analysis`**: `analyze` / `suggest` entry points
//! - **`payload`**: Request body decoding
//! - **`config`**: Weights, thresholds, suggestion limit
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use task_triage::analysis::Analyzer;
//! use task_triage::payload::load_tasks;
//! use task_triage::scoring::ScoringContext;
//!
//! let batch = load_tasks(br#"{
//!     "tasks": [
//!         {"id": "a", "priority": 8, "effort": 2, "due_date": "2025-11-27", "dependencies": ["b"]},
//!         {"id": "b", "priority": 3, "effort": 6, "dependencies": ["a"]}
//!     ],
//!     "strategy": "smart"
//! }"#).unwrap();
//!
//! let ctx = ScoringContext::on(NaiveDate::from_ymd_opt(2025, 11, 26).unwrap());
//! let report = Analyzer::default()
//!     .analyze(batch.tasks, batch.strategy, &ctx)
//!     .unwrap();
//!
//! assert_eq!(report.tasks[0].id().as_str(), "a");
//! assert!(report.cycle_detected);
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.3 (DFS)
//! - Eisenhower matrix: urgency × importance prioritization

pub mod analysis;
pub mod config;
pub mod cycles;
pub mod error;
pub mod models;
pub mod normalize;
pub mod payload;
pub mod scoring;
pub mod urgency;

pub use analysis::{analyze, suggest, AnalysisReport, Analyzer};
pub use cycles::{detect_cycles, CycleReport};
pub use error::{ConfigError, PayloadError, ScoreError};
pub use scoring::{Scorer, ScoringContext, StrategyName};
