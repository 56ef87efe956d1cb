use serde::{Deserialize, Serialize};
use ts_rs::TS;
use ward_core::models::outcome::ScaleOutcome;

use crate::Scale;
use crate::error::ScaleError;
use crate::scoring::{ScaleItem, decode, scale_choice};

scale_choice! {
    PhysicalCondition ("norton", "physical condition") {
        Good = 4, "4", "Good";
        Fair = 3, "3", "Fair";
        Poor = 2, "2", "Poor";
        VeryBad = 1, "1", "Very Bad";
    }
}

scale_choice! {
    MentalCondition ("norton", "mental condition") {
        Alert = 4, "4", "Alert";
        Apathetic = 3, "3", "Apathetic";
        Confused = 2, "2", "Confused";
        Stuporous = 1, "1", "Stuporous";
    }
}

scale_choice! {
    Activity ("norton", "activity") {
        Ambulant = 4, "4", "Ambulant";
        WalksWithHelp = 3, "3", "Walks with help";
        Chairbound = 2, "2", "Chairbound";
        Bedridden = 1, "1", "Bedridden";
    }
}

scale_choice! {
    Mobility ("norton", "mobility") {
        Full = 4, "4", "Full";
        SlightlyImpaired = 3, "3", "Slightly impaired";
        VeryLimited = 2, "2", "Very limited";
        Immobile = 1, "1", "Immobile";
    }
}

scale_choice! {
    Incontinence ("norton", "incontinence") {
        Continent = 4, "4", "None";
        Occasional = 3, "3", "Occasional";
        UsuallyUrinary = 2, "2", "Usually urinary";
        UrinaryAndFecal = 1, "1", "Urinary and fecal";
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NortonInput {
    pub physical_condition: PhysicalCondition,
    pub mental_condition: MentalCondition,
    pub activity: Activity,
    pub mobility: Mobility,
    pub incontinence: Incontinence,
}

/// Pressure-ulcer risk band derived from the Norton total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NortonRisk {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl NortonRisk {
    /// Band a total. `None` for totals five 1–4 items cannot produce
    /// above 20, which the ward records show as "Error".
    pub fn from_total(total: u8) -> Option<Self> {
        match total {
            19..=20 => Some(Self::Low),
            14..=18 => Some(Self::Medium),
            10..=13 => Some(Self::High),
            0..=9 => Some(Self::VeryHigh),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
        }
    }
}

impl std::fmt::Display for NortonRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NortonResult {
    pub total_points: u8,
    pub pressure_risk: NortonRisk,
}

pub fn calculate(input: &NortonInput) -> NortonResult {
    let total_points = input.physical_condition.points()
        + input.mental_condition.points()
        + input.activity.points()
        + input.mobility.points()
        + input.incontinence.points();

    // Five items of 1–4 points keep the total within 5–20, so `from_total`
    // always yields a band here.
    let pressure_risk = NortonRisk::from_total(total_points).unwrap_or(NortonRisk::Low);

    NortonResult {
        total_points,
        pressure_risk,
    }
}

impl From<NortonResult> for ScaleOutcome {
    fn from(result: NortonResult) -> Self {
        ScaleOutcome::total(u32::from(result.total_points))
            .with_interpretation(result.pressure_risk.as_str())
    }
}

/// Norton Pressure Ulcer Risk Scale.
/// Five items rated 1–4. Total 5–20; lower totals mean higher risk.
pub struct Norton;

impl Scale for Norton {
    fn id(&self) -> &str {
        "norton"
    }

    fn name(&self) -> &str {
        "Norton Scale"
    }

    fn items(&self) -> &[ScaleItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScaleItem>> = std::sync::LazyLock::new(|| {
            vec![
                ScaleItem::choice(
                    "physical_condition",
                    "Physical condition",
                    PhysicalCondition::options(),
                ),
                ScaleItem::choice(
                    "mental_condition",
                    "Mental condition",
                    MentalCondition::options(),
                ),
                ScaleItem::choice("activity", "Activity", Activity::options()),
                ScaleItem::choice("mobility", "Mobility", Mobility::options()),
                ScaleItem::choice("incontinence", "Incontinence", Incontinence::options()),
            ]
        });
        &ITEMS
    }

    fn score(&self, inputs: &serde_json::Value) -> Result<ScaleOutcome, ScaleError> {
        let input: NortonInput = decode(self.id(), inputs)?;
        Ok(calculate(&input).into())
    }
}
