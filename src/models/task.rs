//! Task record models.
//!
//! Two shapes of the same record exist:
//!
//! - [`TaskInput`]: the record as supplied by a caller. Every field may be
//!   absent, and an explicit JSON `null` is kept distinct from absence.
//! - [`Task`]: the record after normalization. Identifier and defaults
//!   are filled in, dependencies are coerced to a list of ids.
//!
//! Fields the model does not know about are carried through untouched
//! in `extra` and echoed back when the record is serialized.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a task within one batch.
///
/// Deserializes from a JSON string or a JSON number; numbers are kept in
/// their decimal rendering so `1` and `"1"` name the same task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier assigned to a record that arrived without one.
    ///
    /// `index` is the zero-based position in the input batch.
    pub fn positional(index: usize) -> Self {
        Self(format!("task_{index}"))
    }

    /// Interprets a JSON value as an identifier.
    ///
    /// Returns `None` for anything other than a string or a number.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "task id must be a string or a number, got {value}"
            ))
        })
    }
}

/// A task record as supplied by the caller.
///
/// `title`, `priority`, `effort`, `due_date` and `dependencies` are raw JSON values:
/// `None` means the field was absent, `Some(Value::Null)` means it was
/// explicitly `null`. The normalizer treats the two differently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    /// Identifier; generated from the input position when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Opaque display title, any JSON value.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Value>,
    /// Priority (higher = more important).
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Value>,
    /// Estimated effort (higher = more work).
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub effort: Option<Value>,
    /// Due date, expected as `YYYY-MM-DD`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Value>,
    /// Ids of the tasks this one depends on.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub dependencies: Option<Value>,
    /// Caller fields the model does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Maps a present field (including `null`) to `Some`; absent fields fall
/// back to `None` through `#[serde(default)]`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl TaskInput {
    /// Creates an empty record (every field absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier.
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<Value>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: impl Into<Value>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the effort.
    pub fn with_effort(mut self, effort: impl Into<Value>) -> Self {
        self.effort = Some(effort.into());
        self
    }

    /// Sets the due date string.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(Value::String(due_date.into()));
        self
    }

    /// Sets the dependency list.
    pub fn with_dependencies<I, T>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        let deps = deps
            .into_iter()
            .map(|d| Value::String(d.into().0))
            .collect();
        self.dependencies = Some(Value::Array(deps));
        self
    }

    /// Sets a raw `dependencies` value (any JSON shape).
    pub fn with_raw_dependencies(mut self, deps: Value) -> Self {
        self.dependencies = Some(deps);
        self
    }

    /// Adds a pass-through field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A normalized task record.
///
/// `priority` and `effort` stay raw JSON values: an explicit `null` or a
/// string survives normalization and is rejected later by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the batch.
    pub id: TaskId,
    /// Opaque display title; an explicit `null` is kept.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Value>,
    /// Priority value.
    pub priority: Value,
    /// Effort value.
    pub effort: Value,
    /// Due date; `None` serializes as `null`.
    #[serde(default)]
    pub due_date: Option<Value>,
    /// Ordered dependency ids.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
    /// Caller fields the model does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Creates a task with default priority and effort and no due date.
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            priority: Value::from(crate::normalize::DEFAULT_PRIORITY),
            effort: Value::from(crate::normalize::DEFAULT_EFFORT),
            due_date: None,
            dependencies: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Adds a dependency.
    pub fn with_dependency(mut self, id: impl Into<TaskId>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    /// Sets the due date string.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(Value::String(due_date.into()));
        self
    }

    /// Title as a string slice, if it is a string at all.
    pub fn title_str(&self) -> Option<&str> {
        self.title.as_ref().and_then(Value::as_str)
    }

    /// Due date as a string slice, if it is a string at all.
    pub fn due_date_str(&self) -> Option<&str> {
        self.due_date.as_ref().and_then(Value::as_str)
    }

    /// Whether this task lists any dependencies.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
