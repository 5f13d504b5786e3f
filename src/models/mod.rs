//! Task prioritization domain models.
//!
//! Provides the record types that flow through the pipeline:
//! caller input, normalized task, scored task and suggestion.
//!
//! # Pipeline
//!
//! | Stage | Type |
//! |-------|------|
//! | Caller input | [`TaskInput`] |
//! | Normalized | [`Task`] |
//! | Scored | [`ScoredTask`] (with [`ScoreComponents`]) |
//! | Recommended | [`Suggestion`] |

mod scored;
mod task;

pub(crate) use scored::round2;
pub use scored::{ScoreComponents, ScoredTask, Suggestion};
pub use task::{Task, TaskId, TaskInput};
