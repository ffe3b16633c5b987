//! Progressive percentage ramp resolution.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Percentage served before the default ramp starts.
pub const DEFAULT_INITIAL_PERCENTAGE: f64 = 0.0;

/// Percentage served after the default ramp ends.
pub const DEFAULT_END_PERCENTAGE: f64 = 100.0;

/// A linear percentage interpolation between two instants.
///
/// Before the ramp starts the initial percentage is served, after it ends the
/// end percentage. The ramp only applies when both [`ReleaseRamp`] bounds are
/// set; otherwise the whole policy is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progressive {
    /// Start and target percentages of the ramp.
    #[serde(default)]
    pub percentage: ProgressivePercentage,

    /// When the ramp starts and ends. Mandatory for the policy to apply.
    #[serde(default)]
    pub release_ramp: ReleaseRamp,
}

/// Start and target percentages of a progressive ramp.
///
/// No ordering is enforced between the two: a descending ramp
/// (`initial > end`) interpolates downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressivePercentage {
    /// Percentage before the ramp start. Default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<f64>,

    /// Percentage to reach at the ramp end. Default 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
}

/// Time bounds of a progressive ramp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRamp {
    /// Start of the ramp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    /// End of the ramp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl Progressive {
    /// The percentage in effect at `now`, or `None` when the ramp does not
    /// apply (either release-ramp bound missing) and the caller must fall
    /// back to the flag's base percentage.
    ///
    /// The result is not clamped to [0, 100]: percentages configured outside
    /// that range pass through, clamping is the consumer's call.
    pub fn effective_percentage(&self, now: DateTime<Utc>) -> Option<f64> {
        let start = self.release_ramp.start?;
        let end = self.release_ramp.end?;
        let initial = self.percentage.initial.unwrap_or(DEFAULT_INITIAL_PERCENTAGE);
        let target = self.percentage.end.unwrap_or(DEFAULT_END_PERCENTAGE);

        if start == end {
            // Zero-length ramp acts as a step function at the boundary.
            return Some(if now < start { initial } else { target });
        }
        if now <= start {
            return Some(initial);
        }
        if now >= end {
            return Some(target);
        }

        let ratio = duration_ratio(now - start, end - start);
        Some(initial + (target - initial) * ratio)
    }
}

/// The percentage in effect at `now`, or `None` when the policy is absent or
/// its ramp incomplete.
pub fn effective_percentage(progressive: Option<&Progressive>, now: DateTime<Utc>) -> Option<f64> {
    progressive.and_then(|p| p.effective_percentage(now))
}

/// Elapsed-over-span ratio at nanosecond precision, so the interpolated
/// percentage moves smoothly instead of jumping at coarse time boundaries.
fn duration_ratio(elapsed: Duration, span: Duration) -> f64 {
    match (elapsed.num_nanoseconds(), span.num_nanoseconds()) {
        (Some(e), Some(s)) if s != 0 => e as f64 / s as f64,
        // Spans beyond ~292 years overflow the nanosecond count; millisecond
        // precision is more than enough at that scale.
        _ => elapsed.num_milliseconds() as f64 / span.num_milliseconds() as f64,
    }
}
