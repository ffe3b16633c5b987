//! Rollout configuration and the resolution coordinator.

use crate::error::RolloutError;
use crate::experimentation::Experimentation;
use crate::flag::FlagData;
use crate::progressive::Progressive;
use crate::scheduled::ScheduledRollout;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a flag's serving behavior changes over time.
///
/// Any combination of the three policies may be present. They are resolved
/// independently: the experimentation window gates whether any rollout
/// applies at all, the most recent eligible scheduled step overrides the
/// flag definition, and the progressive ramp supplies the serving
/// percentage. Immutable after load; safe to share across concurrent
/// evaluations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rollout {
    /// Restricts the rollout to a time window; outside it the flag serves
    /// its static default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimentation: Option<Experimentation>,

    /// Ramps the serving percentage between two instants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressive: Option<Progressive>,

    /// Dated flag-definition overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<ScheduledRollout>,
}

/// The resolved serving decision for one evaluation at one instant.
///
/// Recomputed per evaluation, never persisted. Consumers apply
/// `override_data` to the flag definition first, then serve it with
/// `effective_percentage`; a `None` in either slot means "keep the flag's
/// base behavior", never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveRollout {
    /// Flag-definition override from the most recent eligible scheduled step.
    pub override_data: Option<FlagData>,

    /// Percentage from the progressive ramp; `None` means use the flag's
    /// base percentage.
    pub effective_percentage: Option<f64>,

    /// An experimentation window is configured and `now` falls outside it:
    /// serve the statically configured default value and ignore the other
    /// policies.
    pub serve_default: bool,
}

impl EffectiveRollout {
    /// True when the decision changes nothing about how the flag is served.
    pub fn is_noop(&self) -> bool {
        !self.serve_default && self.override_data.is_none() && self.effective_percentage.is_none()
    }
}

impl Rollout {
    /// Resolve the rollout behavior in effect at `now`.
    ///
    /// An inactive experimentation window short-circuits everything else:
    /// the flag serves its static default. Otherwise the scheduled override
    /// and the progressive percentage are resolved independently and both
    /// reported; the scheduled override is meant to be applied to the flag
    /// definition before the percentage is.
    pub fn resolve(&self, now: DateTime<Utc>) -> EffectiveRollout {
        if let Some(experimentation) = &self.experimentation
            && !experimentation.is_active(now)
        {
            return EffectiveRollout {
                serve_default: true,
                ..Default::default()
            };
        }

        EffectiveRollout {
            override_data: self
                .scheduled
                .as_ref()
                .and_then(|s| s.select_step(now))
                .cloned(),
            effective_percentage: self
                .progressive
                .as_ref()
                .and_then(|p| p.effective_percentage(now)),
            serve_default: false,
        }
    }

    /// Check the configuration for mistakes the engine will not correct at
    /// evaluation time. Intended for config-load tooling.
    pub fn validate(&self) -> Result<(), RolloutError> {
        if let Some(experimentation) = &self.experimentation
            && let (Some(start), Some(end)) = (experimentation.start, experimentation.end)
            && start > end
        {
            return Err(RolloutError::InvertedWindow { start, end });
        }

        if let Some(scheduled) = &self.scheduled {
            let mut seen: Vec<DateTime<Utc>> = Vec::with_capacity(scheduled.steps.len());
            for (index, step) in scheduled.steps.iter().enumerate() {
                match step.date {
                    None => return Err(RolloutError::UndatedStep { index }),
                    Some(date) => {
                        if seen.contains(&date) {
                            return Err(RolloutError::AmbiguousSchedule { date });
                        }
                        seen.push(date);
                    }
                }
            }
        }

        Ok(())
    }
}

/// Coordinator entry point for callers holding an optional configuration.
/// An absent rollout resolves to a no-op decision.
pub fn resolve(rollout: Option<&Rollout>, now: DateTime<Utc>) -> EffectiveRollout {
    rollout.map_or_else(EffectiveRollout::default, |r| r.resolve(now))
}
