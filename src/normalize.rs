//! Record normalization.
//!
//! Fills in missing identifiers and default field values so the scorer
//! and the cycle detector see a uniform record shape.
//!
//! # Rules
//!
//! | Field | Absent | Explicit `null` |
//! |-------|--------|-----------------|
//! | `id` | `task_<index>` | `task_<index>` |
//! | `priority` | 5 | kept (`null`) |
//! | `effort` | 5 | kept (`null`) |
//! | `due_date` | `null` | `null` |
//! | `dependencies` | `[]` | `[]` |
//!
//! `dependencies` is coerced: an array of strings/numbers becomes a list
//! of ids, any other shape becomes an empty list. Normalization never fails.

use serde_json::Value;

use crate::models::{Task, TaskId, TaskInput};

/// Priority assigned when the field is absent.
pub const DEFAULT_PRIORITY: i64 = 5;

/// Effort assigned when the field is absent.
pub const DEFAULT_EFFORT: i64 = 5;

/// Normalizes a batch of records.
///
/// Missing ids are derived from each record's position in `inputs`,
/// before any reordering happens downstream.
pub fn normalize(inputs: Vec<TaskInput>) -> Vec<Task> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| normalize_one(index, input))
        .collect()
}

/// Normalizes a single record found at `index` in its batch.
pub fn normalize_one(index: usize, input: TaskInput) -> Task {
    Task {
        id: input.id.unwrap_or_else(|| TaskId::positional(index)),
        title: input.title,
        priority: input
            .priority
            .unwrap_or_else(|| Value::from(DEFAULT_PRIORITY)),
        effort: input.effort.unwrap_or_else(|| Value::from(DEFAULT_EFFORT)),
        due_date: input.due_date.filter(|v| !v.is_null()),
        dependencies: coerce_dependencies(input.dependencies.as_ref()),
        extra: input.extra,
    }
}

/// Interprets a raw `dependencies` value.
///
/// Only an array whose every element is a valid id yields ids.
pub fn coerce_dependencies(raw: Option<&Value>) -> Vec<TaskId> {
    match raw {
        Some(Value::Array(items)) => items
            .iter()
            .map(TaskId::from_value)
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}
