//! Time-based Rollout Resolution for Feature Flags
//!
//! Resolves, for a flag and an instant, which rollout behavior applies: an
//! experimentation window, a progressive percentage ramp, an ordered log of
//! scheduled flag-definition overrides, or none of them.
//!
//! # Features
//!
//! - 🧪 **Experimentation** - Time-box a rollout; serve the default outside it
//! - 📈 **Progressive Ramp** - Linear percentage interpolation between two instants
//! - 📅 **Scheduled Steps** - Dated flag-definition overrides, latest eligible wins
//! - 🎲 **Bucketing** - Deterministic percentage assignment per flag and user
//!
//! Every resolver is a pure function of the configuration and a caller-supplied
//! `now`: no sampling, no locking, no I/O. The same inputs always produce the
//! same decision, which makes past serving decisions replayable.
//!
//! # Quick Start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pennant_core::{Progressive, ProgressivePercentage, ReleaseRamp, Rollout};
//!
//! // Ramp from 0% to 100% over ten days.
//! let rollout = Rollout {
//!     progressive: Some(Progressive {
//!         percentage: ProgressivePercentage {
//!             initial: Some(0.0),
//!             end: Some(100.0),
//!         },
//!         release_ramp: ReleaseRamp {
//!             start: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
//!             end: Some(Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap()),
//!         },
//!     }),
//!     ..Default::default()
//! };
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 6, 0, 0, 0).unwrap();
//! let effective = rollout.resolve(now);
//! assert_eq!(effective.effective_percentage, Some(50.0));
//! ```
//!
//! # Scheduled Overrides
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pennant_core::{FlagData, Rollout, ScheduledRollout, ScheduledStep};
//!
//! let rollout = Rollout {
//!     scheduled: Some(ScheduledRollout {
//!         steps: vec![ScheduledStep {
//!             data: FlagData {
//!                 rule: Some("beta eq true".to_string()),
//!                 percentage: Some(100.0),
//!                 ..Default::default()
//!             },
//!             date: Some(Utc.with_ymd_and_hms(2024, 4, 10, 0, 0, 0).unwrap()),
//!         }],
//!     }),
//!     ..Default::default()
//! };
//!
//! let now = Utc.with_ymd_and_hms(2024, 4, 12, 0, 0, 0).unwrap();
//! let effective = rollout.resolve(now);
//! assert!(effective.override_data.is_some());
//! ```

pub mod bucketing;
pub mod clock;
pub mod error;
pub mod experimentation;
pub mod flag;
pub mod progressive;
pub mod rollout;
pub mod scheduled;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::RolloutError;
pub use experimentation::Experimentation;
pub use flag::{FlagData, Variation};
pub use progressive::{Progressive, ProgressivePercentage, ReleaseRamp};
pub use rollout::{resolve, EffectiveRollout, Rollout};
pub use scheduled::{ScheduledRollout, ScheduledStep};
