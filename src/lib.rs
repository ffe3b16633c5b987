// Pennant - time-based feature flag rollout for Rust
//
// Resolves which rollout behavior applies to a flag at an instant:
// experimentation windows, progressive percentage ramps, and scheduled
// flag-definition overrides, plus export of evaluation events.

// Re-export the rollout resolution engine
pub use pennant_core::*;

// Re-export the event-export collaborator
#[cfg(feature = "export")]
pub use pennant_export as export;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Clock, EffectiveRollout, Experimentation, FlagData, Progressive, ProgressivePercentage,
        ReleaseRamp, Rollout, RolloutError, ScheduledRollout, ScheduledStep, SystemClock,
        Variation, resolve,
    };

    #[cfg(feature = "export")]
    pub use crate::export::{ExportError, Exporter, FeatureEvent};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_reexports_resolve() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(resolve(None, now).is_noop());
        assert!(Rollout::default().resolve(now).is_noop());
    }
}
