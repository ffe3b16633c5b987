//! Experimentation window resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time range during which a flag's rollout applies.
///
/// Outside the window the flag serves its statically configured default
/// value. Either bound may be absent, leaving the window open-ended on that
/// side; a window with neither bound set never restricts anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experimentation {
    /// Start of the window, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    /// End of the window, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl Experimentation {
    /// Whether `now` falls inside the window, boundary-inclusive at both ends.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        let started = self.start.map_or(true, |start| now >= start);
        let not_over = self.end.map_or(true, |end| now <= end);
        started && not_over
    }
}

/// Whether the experimentation window is currently active.
///
/// An absent policy reports inactive but imposes no restriction; the
/// coordinator only suppresses rollout computation when a window is
/// configured and `now` falls outside it.
pub fn is_active(experimentation: Option<&Experimentation>, now: DateTime<Utc>) -> bool {
    experimentation.is_some_and(|e| e.is_active(now))
}
