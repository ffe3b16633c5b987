//! Scheduled rollout step selection.

use crate::flag::FlagData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered log of dated flag-definition overrides.
///
/// Each step activates at its date and stays in force until a later step
/// takes over. The caller does not have to keep the list sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduledRollout {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<ScheduledStep>,
}

/// A dated override of flag definition fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduledStep {
    /// Override payload applied once the step activates.
    #[serde(flatten)]
    pub data: FlagData,

    /// Activation instant. A step without a date can never be selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl ScheduledRollout {
    /// The override currently in force, see [`select_step`].
    pub fn select_step(&self, now: DateTime<Utc>) -> Option<&FlagData> {
        select_step(&self.steps, now)
    }
}

/// Select the override in force at `now`: the step with the latest activation
/// date not after `now`.
///
/// Steps sharing that date are resolved last-wins in input order, treating
/// the list as an override log where later entries supersede earlier ones.
/// Returns `None` when every step is undated or still in the future.
pub fn select_step(steps: &[ScheduledStep], now: DateTime<Utc>) -> Option<&FlagData> {
    let mut selected: Option<(DateTime<Utc>, &FlagData)> = None;
    for step in steps {
        let Some(date) = step.date else { continue };
        if date > now {
            continue;
        }
        match selected {
            Some((best, _)) if date < best => {}
            _ => selected = Some((date, &step.data)),
        }
    }
    selected.map(|(_, data)| data)
}
