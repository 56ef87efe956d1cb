use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::ScaleError;

/// Defines the valid range for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    /// Whole-number range, both ends inclusive.
    pub fn whole(min: i32, max: i32) -> Self {
        Self {
            min: f64::from(min),
            max: f64::from(max),
            step: Some(1.0),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// One selectable answer of a categorical item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub code: String,
    pub label: String,
    pub points: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ItemKind {
    /// Closed list of coded answers.
    Choice { options: Vec<ChoiceOption> },
    /// Measured value with a declared range.
    Numeric { range: ScoreRange, unit: String },
    /// Yes/no answer.
    Flag,
}

/// An input field of a scale, as a form would render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleItem {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
}

impl ScaleItem {
    pub fn choice(id: &str, name: &str, options: Vec<ChoiceOption>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: ItemKind::Choice { options },
        }
    }

    pub fn numeric(id: &str, name: &str, range: ScoreRange, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: ItemKind::Numeric {
                range,
                unit: unit.to_string(),
            },
        }
    }

    pub fn flag(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: ItemKind::Flag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: serde_json::Value,
    pub expected_range: Option<ScoreRange>,
    pub message: String,
}

/// Reject `value` unless it lies inside `range`.
pub fn check_range(field: &str, value: f64, range: ScoreRange) -> Result<(), ValidationError> {
    if range.contains(value) {
        return Ok(());
    }
    Err(ValidationError {
        field: field.to_string(),
        value: serde_json::Number::from_f64(value)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        expected_range: Some(range),
        message: format!(
            "{field} {value} is outside range [{}, {}]",
            range.min, range.max
        ),
    })
}

/// Decode a raw input record into a scale's typed input.
pub(crate) fn decode<T: DeserializeOwned>(
    scale: &str,
    inputs: &serde_json::Value,
) -> Result<T, ScaleError> {
    serde_json::from_value(inputs.clone()).map_err(|e| ScaleError::InvalidInput {
        scale: scale.to_string(),
        message: e.to_string(),
    })
}

/// Declares a closed set of coded answers, each worth a fixed number of
/// points. Codes are what the ward forms submit and what gets stored.
macro_rules! scale_choice {
    (
        $(#[$meta:meta])*
        $name:ident ($scale:literal, $field:literal) {
            $( $variant:ident = $points:literal, $code:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, ts_rs::TS,
        )]
        #[ts(export)]
        pub enum $name {
            $( #[serde(rename = $code)] $variant, )+
        }

        impl $name {
            pub const ALL: &[Self] = &[$(Self::$variant),+];

            pub fn points(self) -> u8 {
                match self {
                    $( Self::$variant => $points, )+
                }
            }

            pub fn code(self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            pub fn options() -> Vec<$crate::scoring::ChoiceOption> {
                Self::ALL
                    .iter()
                    .map(|c| $crate::scoring::ChoiceOption {
                        code: c.code().to_string(),
                        label: c.label().to_string(),
                        points: c.points(),
                    })
                    .collect()
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ScaleError;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code {
                    $( $code => Ok(Self::$variant), )+
                    other => Err($crate::error::ScaleError::InvalidInput {
                        scale: $scale.to_string(),
                        message: format!("unknown {} code '{}'", $field, other),
                    }),
                }
            }
        }
    };
}

pub(crate) use scale_choice;
