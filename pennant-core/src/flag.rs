//! Flag definition payloads and variation values.

use serde::{Deserialize, Serialize};

/// A flag variation value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variation {
    Boolean(bool),
    String(String),
    Number(f64),
    Json(serde_json::Value),
}

impl Variation {
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<Variation> for serde_json::Value {
    fn from(variation: Variation) -> Self {
        match variation {
            Variation::Boolean(b) => serde_json::Value::Bool(b),
            Variation::String(s) => serde_json::Value::String(s),
            Variation::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Variation::Json(v) => v,
        }
    }
}

/// Flag definition fields a scheduled step can override.
///
/// The rollout engine treats this payload as opaque: it selects and hands the
/// whole struct through without looking at any field. Only [`FlagData::overlay`],
/// called by the flag-evaluation layer, knows the individual fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagData {
    /// Targeting rule expression restricting who the flag applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,

    /// Percentage of matching contexts that get the `true` variation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,

    /// Variation served inside the percentage.
    #[serde(rename = "true", default, skip_serializing_if = "Option::is_none")]
    pub true_variation: Option<Variation>,

    /// Variation served outside the percentage.
    #[serde(rename = "false", default, skip_serializing_if = "Option::is_none")]
    pub false_variation: Option<Variation>,

    /// Variation served when the rule does not match.
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_variation: Option<Variation>,

    /// Whether evaluations of this flag are recorded as feature events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_events: Option<bool>,

    /// Kill switch: a disabled flag always serves its default variation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable: Option<bool>,
}

impl FlagData {
    /// Overlay this payload onto `base`.
    ///
    /// Fields set here win; fields left unset keep the base value. Used by
    /// the flag-evaluation layer to apply a scheduled override to the flag's
    /// static definition before evaluating it.
    pub fn overlay(&self, base: &FlagData) -> FlagData {
        FlagData {
            rule: self.rule.clone().or_else(|| base.rule.clone()),
            percentage: self.percentage.or(base.percentage),
            true_variation: self
                .true_variation
                .clone()
                .or_else(|| base.true_variation.clone()),
            false_variation: self
                .false_variation
                .clone()
                .or_else(|| base.false_variation.clone()),
            default_variation: self
                .default_variation
                .clone()
                .or_else(|| base.default_variation.clone()),
            track_events: self.track_events.or(base.track_events),
            disable: self.disable.or(base.disable),
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == FlagData::default()
    }
}
