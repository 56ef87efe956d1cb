use serde::{Deserialize, Serialize};
use ts_rs::TS;
use ward_core::models::outcome::ScaleOutcome;

use crate::Scale;
use crate::error::ScaleError;
use crate::scoring::{ScaleItem, ScoreRange, check_range, decode};

fn pain_level_range() -> ScoreRange {
    ScoreRange::whole(0, 10)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PainInput {
    /// Numeric rating 0–10.
    pub pain_level: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pain_comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainSeverity {
    NoPain,
    Mild,
    Moderate,
    Severe,
}

impl PainSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoPain => "No Pain",
            Self::Mild => "Mild Pain",
            Self::Moderate => "Moderate Pain",
            Self::Severe => "Severe Pain",
        }
    }
}

impl std::fmt::Display for PainSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn interpret(level: i32) -> Result<PainSeverity, ScaleError> {
    check_range("pain_level", f64::from(level), pain_level_range())?;
    Ok(match level {
        0 => PainSeverity::NoPain,
        1..=3 => PainSeverity::Mild,
        4..=6 => PainSeverity::Moderate,
        _ => PainSeverity::Severe,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PainResult {
    pub pain_level: i32,
    pub severity: PainSeverity,
}

pub fn calculate(input: &PainInput) -> Result<PainResult, ScaleError> {
    Ok(PainResult {
        pain_level: input.pain_level,
        severity: interpret(input.pain_level)?,
    })
}

impl From<PainResult> for ScaleOutcome {
    fn from(result: PainResult) -> Self {
        ScaleOutcome::default().with_interpretation(result.severity.as_str())
    }
}

/// Numeric pain rating scale, 0–10.
pub struct Pain;

impl Scale for Pain {
    fn id(&self) -> &str {
        "pain"
    }

    fn name(&self) -> &str {
        "Pain Scale"
    }

    fn items(&self) -> &[ScaleItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScaleItem>> = std::sync::LazyLock::new(|| {
            vec![ScaleItem::numeric(
                "pain_level",
                "Pain level",
                pain_level_range(),
                "",
            )]
        });
        &ITEMS
    }

    fn score(&self, inputs: &serde_json::Value) -> Result<ScaleOutcome, ScaleError> {
        let input: PainInput = decode(self.id(), inputs)?;
        Ok(calculate(&input)?.into())
    }
}
