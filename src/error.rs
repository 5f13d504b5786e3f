//! Error types.
//!
//! Normalization and urgency estimation never fail. The only hard failure
//! inside the core is a non-numeric `priority`/`effort` reaching the
//! scorer; request decoding and configuration have their own errors.

use serde_json::Value;
use thiserror::Error;

use crate::models::TaskId;

/// Scoring failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// A field used in arithmetic holds something other than a number.
    #[error("task '{task_id}': {field} must be a number, got {value}")]
    NonNumeric {
        task_id: TaskId,
        field: &'static str,
        value: Value,
    },
}

/// Request body could not be turned into a task batch.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Invalid JSON payload")]
    InvalidJson(#[source] serde_json::Error),
    #[error("JSON must be a list or an object with 'tasks'")]
    UnexpectedShape,
    #[error("'tasks' must be a list")]
    TasksNotList,
    #[error("task at index {index} is not a valid task object: {source}")]
    InvalidTask {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Invalid scoring configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("weight '{name}' must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("strategy weights must not all be zero")]
    ZeroWeights,
    #[error("threshold '{name}' must lie within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}
