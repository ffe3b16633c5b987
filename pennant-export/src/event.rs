//! Evaluation events handed to exporters.

use chrono::{DateTime, Utc};
use pennant_core::Variation;
use serde::{Deserialize, Serialize};

/// One flag evaluation, as recorded for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureEvent {
    /// Event kind, always `"feature"` for evaluation events.
    pub kind: String,

    /// Kind of context evaluated, `"user"` or `"anonymousUser"`.
    pub context_kind: String,

    /// Key of the evaluated context.
    pub user_key: String,

    /// Unix timestamp (seconds) of the evaluation.
    pub creation_date: i64,

    /// Flag key.
    pub key: String,

    /// Name of the variation that was served.
    pub variation: String,

    /// Value that was served.
    pub value: serde_json::Value,

    /// Whether the flag's static default was served (rollout inactive or
    /// evaluation failed).
    pub default: bool,
}

impl FeatureEvent {
    /// A `"feature"` event for one evaluation, timestamped now.
    ///
    /// # Examples
    ///
    /// ```
    /// use pennant_export::FeatureEvent;
    ///
    /// let event = FeatureEvent::new("new-ui", "user-123", true)
    ///     .variation("enabled");
    /// assert_eq!(event.kind, "feature");
    /// ```
    pub fn new(
        flag_key: impl Into<String>,
        user_key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            kind: "feature".to_string(),
            context_kind: "user".to_string(),
            user_key: user_key.into(),
            creation_date: Utc::now().timestamp(),
            key: flag_key.into(),
            variation: "default".to_string(),
            value: value.into(),
            default: false,
        }
    }

    /// Same, taking the served value as a flag [`Variation`].
    pub fn from_variation(
        flag_key: impl Into<String>,
        user_key: impl Into<String>,
        variation: Variation,
    ) -> Self {
        Self::new(flag_key, user_key, serde_json::Value::from(variation))
    }

    /// Mark the context as anonymous.
    pub fn anonymous(mut self) -> Self {
        self.context_kind = "anonymousUser".to_string();
        self
    }

    /// Name the served variation.
    pub fn variation(mut self, name: impl Into<String>) -> Self {
        self.variation = name.into();
        self
    }

    /// Mark that the static default was served.
    pub fn served_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Pin the evaluation time instead of sampling the clock.
    pub fn at(mut self, when: DateTime<Utc>) -> Self {
        self.creation_date = when.timestamp();
        self
    }

    /// Serialize to a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Render as a semicolon-separated CSV row, columns in declaration order.
    pub fn csv_line(&self) -> String {
        format!(
            "{};{};{};{};{};{};{};{}",
            self.kind,
            self.context_kind,
            self.user_key,
            self.creation_date,
            self.key,
            self.variation,
            self.value,
            self.default,
        )
    }
}
