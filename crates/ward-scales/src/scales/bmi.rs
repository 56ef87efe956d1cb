use serde::{Deserialize, Serialize};
use ts_rs::TS;
use ward_core::models::outcome::ScaleOutcome;

use crate::Scale;
use crate::error::ScaleError;
use crate::scoring::{ScaleItem, ScoreRange, check_range, decode};

/// Where "Obesity class III" ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClassIiiBound {
    /// Class III is exactly 40.0; anything higher is unclassified.
    #[default]
    CappedAtForty,
    /// Class III is 40.0 and above.
    OpenEnded,
}

fn body_height_range() -> ScoreRange {
    // Zero height has no BMI.
    ScoreRange::whole(1, 300)
}

fn body_weight_range() -> ScoreRange {
    ScoreRange::whole(0, 400)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BmiInput {
    /// Centimetres.
    pub body_height: i32,
    /// Kilograms.
    pub body_weight: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    ObesityClassI,
    ObesityClassII,
    ObesityClassIii,
}

impl BmiCategory {
    /// Classify a BMI given in tenths (24.2 is `242`).
    pub fn from_tenths(tenths: u32, bound: ClassIiiBound) -> Option<Self> {
        match tenths {
            0..=184 => Some(Self::Underweight),
            185..=249 => Some(Self::NormalWeight),
            250..=299 => Some(Self::Overweight),
            300..=349 => Some(Self::ObesityClassI),
            350..=399 => Some(Self::ObesityClassII),
            400 => Some(Self::ObesityClassIii),
            _ => match bound {
                ClassIiiBound::OpenEnded => Some(Self::ObesityClassIii),
                ClassIiiBound::CappedAtForty => None,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObesityClassI => "Obesity class I",
            Self::ObesityClassII => "Obesity class II",
            Self::ObesityClassIii => "Obesity class III",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BmiResult {
    /// kg/m², one decimal place.
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn interpretation(&self) -> &'static str {
        self.category.as_str()
    }
}

/// BMI in tenths, rounded half away from zero.
///
/// Works on integers: `weight / (height / 100)²` in tenths is
/// `weight * 100_000 / height²`.
fn bmi_tenths(height_cm: u32, weight_kg: u32) -> u32 {
    let numerator = u64::from(weight_kg) * 100_000;
    let denominator = u64::from(height_cm) * u64::from(height_cm);
    ((2 * numerator + denominator) / (2 * denominator)) as u32
}

pub fn calculate(height_cm: i32, weight_kg: i32) -> Result<BmiResult, ScaleError> {
    calculate_with(height_cm, weight_kg, ClassIiiBound::default())
}

pub fn calculate_with(
    height_cm: i32,
    weight_kg: i32,
    bound: ClassIiiBound,
) -> Result<BmiResult, ScaleError> {
    check_range("body_height", f64::from(height_cm), body_height_range())?;
    check_range("body_weight", f64::from(weight_kg), body_weight_range())?;

    // Both are positive after the range checks.
    let tenths = bmi_tenths(height_cm.unsigned_abs(), weight_kg.unsigned_abs());
    let bmi = f64::from(tenths) / 10.0;
    let category =
        BmiCategory::from_tenths(tenths, bound).ok_or_else(|| ScaleError::Unclassified {
            scale: "bmi".to_string(),
            value: bmi,
        })?;

    Ok(BmiResult { bmi, category })
}

impl From<BmiResult> for ScaleOutcome {
    fn from(result: BmiResult) -> Self {
        ScaleOutcome::default()
            .with_value(result.bmi)
            .with_interpretation(result.category.as_str())
    }
}

/// Body Mass Index from height and weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bmi {
    pub class_iii_bound: ClassIiiBound,
}

impl Bmi {
    pub fn new(class_iii_bound: ClassIiiBound) -> Self {
        Self { class_iii_bound }
    }
}

impl Scale for Bmi {
    fn id(&self) -> &str {
        "bmi"
    }

    fn name(&self) -> &str {
        "Body Mass Index"
    }

    fn items(&self) -> &[ScaleItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScaleItem>> = std::sync::LazyLock::new(|| {
            vec![
                ScaleItem::numeric("body_height", "Body height", body_height_range(), "cm"),
                ScaleItem::numeric("body_weight", "Body weight", body_weight_range(), "kg"),
            ]
        });
        &ITEMS
    }

    fn score(&self, inputs: &serde_json::Value) -> Result<ScaleOutcome, ScaleError> {
        let input: BmiInput = decode(self.id(), inputs)?;
        Ok(calculate_with(input.body_height, input.body_weight, self.class_iii_bound)?.into())
    }
}
