use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The derived part of a scored scale, stored next to the raw inputs.
///
/// Which fields are populated depends on the scale: Norton and NEWS fill
/// `total` and `interpretation`, Glasgow only `total`, pain only
/// `interpretation`, BMI `value` and `interpretation`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleOutcome {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub total: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub interpretation: Option<String>,
}

impl ScaleOutcome {
    pub fn total(total: u32) -> Self {
        Self {
            total: Some(total),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_interpretation(mut self, interpretation: impl Into<String>) -> Self {
        self.interpretation = Some(interpretation.into());
        self
    }
}
