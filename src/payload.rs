//! Request body decoding.
//!
//! Turns a raw JSON body into a task batch plus a strategy name. Three
//! shapes are accepted:
//!
//! | Body | Tasks | Strategy |
//! |------|-------|----------|
//! | `[ {...}, ... ]` | the array | none |
//! | `{"tasks": [...], "strategy": "..."}` | `tasks` | `strategy` |
//! | `{...}` (no `tasks` key) | the object, wrapped | its `strategy` |
//!
//! A non-string `strategy` counts as absent. An absent strategy leaves the
//! choice to the caller's configuration (`smart` by default).

use serde_json::{Map, Value};

use crate::error::PayloadError;
use crate::models::TaskInput;
use crate::scoring::StrategyName;

/// A decoded request: tasks plus the strategy the body asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBatch {
    pub tasks: Vec<TaskInput>,
    /// `None` when the body names no strategy.
    pub strategy: Option<StrategyName>,
}

/// Decodes a request body.
///
/// # Errors
/// - [`PayloadError::InvalidJson`]: not UTF-8 JSON.
/// - [`PayloadError::UnexpectedShape`]: neither an array nor an object.
/// - [`PayloadError::TasksNotList`]: `tasks` present but not an array.
/// - [`PayloadError::InvalidTask`]: an element is not a task object.
pub fn load_tasks(body: &[u8]) -> Result<TaskBatch, PayloadError> {
    let payload: Value = serde_json::from_slice(body).map_err(PayloadError::InvalidJson)?;

    match payload {
        Value::Object(mut obj) if obj.contains_key("tasks") => {
            let strategy = strategy_of(&obj);
            match obj.remove("tasks") {
                Some(Value::Array(items)) => Ok(TaskBatch {
                    tasks: decode_items(items)?,
                    strategy,
                }),
                _ => Err(PayloadError::TasksNotList),
            }
        }
        Value::Array(items) => Ok(TaskBatch {
            tasks: decode_items(items)?,
            strategy: None,
        }),
        Value::Object(obj) => {
            let strategy = strategy_of(&obj);
            Ok(TaskBatch {
                tasks: decode_items(vec![Value::Object(obj)])?,
                strategy,
            })
        }
        _ => Err(PayloadError::UnexpectedShape),
    }
}

/// Decodes a JSON-encoded task list (e.g. a query parameter).
///
/// Only a bare array is accepted here.
pub fn parse_task_list(encoded: &str) -> Result<Vec<TaskInput>, PayloadError> {
    match serde_json::from_str::<Value>(encoded).map_err(PayloadError::InvalidJson)? {
        Value::Array(items) => decode_items(items),
        _ => Err(PayloadError::TasksNotList),
    }
}

fn strategy_of(obj: &Map<String, Value>) -> Option<StrategyName> {
    obj.get("strategy")
        .and_then(Value::as_str)
        .map(StrategyName::from_name)
}

fn decode_items(items: Vec<Value>) -> Result<Vec<TaskInput>, PayloadError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| PayloadError::InvalidTask { index, source })
        })
        .collect()
}
