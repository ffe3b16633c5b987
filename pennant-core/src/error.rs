//! Rollout configuration errors.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Misconfigurations surfaced by [`Rollout::validate`](crate::Rollout::validate).
///
/// The resolution engine never corrects or rejects these at evaluation time;
/// they are meant to be flagged when the configuration is loaded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RolloutError {
    /// The experimentation window ends before it starts and can never be active.
    #[error("experimentation window starts at {start} but ends at {end}")]
    InvertedWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A scheduled step has no activation date and can never be selected.
    #[error("scheduled step {index} has no activation date")]
    UndatedStep { index: usize },

    /// Two scheduled steps share an activation date. Last-wins ordering still
    /// resolves it deterministically, but the authoring is ambiguous.
    #[error("multiple scheduled steps share the activation date {date}")]
    AmbiguousSchedule { date: DateTime<Utc> },
}
