use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use ward_core::models::outcome::ScaleOutcome;

use crate::Scale;
use crate::error::ScaleError;
use crate::scoring::{ScaleItem, ScoreRange, check_range, decode, scale_choice};

scale_choice! {
    /// AVPU level of consciousness.
    Consciousness ("news", "level of consciousness") {
        Awake = 0, "awake", "Awake";
        Verbal = 3, "verbal", "Patient responds to a verbal stimulus";
        Pain = 3, "pain", "Patient responds to a pain stimulus";
        Unresponsive = 3, "unresponsive", "Patient is unresponsive to stimulus";
    }
}

impl Default for Consciousness {
    fn default() -> Self {
        Self::Awake
    }
}

/// Vital signs for one NEWS observation.
///
/// `systolic_blood_pressure >= diastolic_blood_pressure` is the caller's
/// responsibility; diastolic pressure is range-checked but not scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewsInput {
    pub respiratory_rate: i32,
    pub oxygen_saturation: i32,
    #[serde(default)]
    pub is_on_oxygen: bool,
    /// Acute exacerbation of COPD; selects the alternate saturation table.
    #[serde(default)]
    pub aecopd_state: bool,
    /// Degrees Celsius, one decimal place.
    pub temperature: f64,
    pub systolic_blood_pressure: i32,
    pub diastolic_blood_pressure: i32,
    pub heart_rate: i32,
    #[serde(default)]
    pub level_of_consciousness: Consciousness,
}

fn respiratory_rate_range() -> ScoreRange {
    ScoreRange::whole(0, 100)
}

fn oxygen_saturation_range() -> ScoreRange {
    ScoreRange::whole(0, 100)
}

fn temperature_range() -> ScoreRange {
    ScoreRange {
        min: 0.0,
        max: 50.0,
        step: None,
    }
}

fn systolic_range() -> ScoreRange {
    ScoreRange::whole(0, 300)
}

fn diastolic_range() -> ScoreRange {
    ScoreRange::whole(0, 200)
}

fn heart_rate_range() -> ScoreRange {
    ScoreRange::whole(0, 300)
}

impl NewsInput {
    fn check_ranges(&self) -> Result<(), ScaleError> {
        check_range(
            "respiratory_rate",
            f64::from(self.respiratory_rate),
            respiratory_rate_range(),
        )?;
        check_range(
            "oxygen_saturation",
            f64::from(self.oxygen_saturation),
            oxygen_saturation_range(),
        )?;
        check_range("temperature", self.temperature, temperature_range())?;
        check_range(
            "systolic_blood_pressure",
            f64::from(self.systolic_blood_pressure),
            systolic_range(),
        )?;
        check_range(
            "diastolic_blood_pressure",
            f64::from(self.diastolic_blood_pressure),
            diastolic_range(),
        )?;
        check_range("heart_rate", f64::from(self.heart_rate), heart_rate_range())?;
        Ok(())
    }
}

/// The seven NEWS parameters, each scored 0–3 (supplemental oxygen 0 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewsSubScores {
    pub respiratory_rate: u8,
    pub oxygen_saturation: u8,
    pub supplemental_oxygen: u8,
    pub temperature: u8,
    pub systolic_blood_pressure: u8,
    pub heart_rate: u8,
    pub level_of_consciousness: u8,
}

impl NewsSubScores {
    pub fn total(&self) -> u8 {
        self.respiratory_rate
            + self.oxygen_saturation
            + self.supplemental_oxygen
            + self.temperature
            + self.systolic_blood_pressure
            + self.heart_rate
            + self.level_of_consciousness
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NewsRisk {
    Low,
    Medium,
    High,
}

const DISCLAIMER: &str = "Note: This tool should NOT be considered as a substitute for any \
professional medical service, NOR as a substitute for clinical judgement.";

impl NewsRisk {
    /// Band a total: 0–4 low, 5–6 medium, 7–20 high.
    pub fn from_total(total: u8) -> Option<Self> {
        match total {
            0..=4 => Some(Self::Low),
            5..=6 => Some(Self::Medium),
            7..=20 => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// The interpretation text stored with a NEWS observation.
    pub fn narrative(self, total: u8) -> String {
        let guidance = match self {
            Self::Low => {
                "This is a low score that suggests clinical monitoring should be continued \
                 and the medical professional, usually a registered nurse will decide further \
                 if clinical care needs to be updated."
            }
            Self::Medium => {
                "This is a medium score that suggests the patient should be reviewed by a \
                 medical specialist with competencies in acute illness, even with the \
                 possibility of referring the patient to the critical care unit at the end of \
                 the assessment."
            }
            Self::High => {
                "This is a high score (red score) that is indicative of urgent critical care \
                 need and the patient should be transferred to the appropriate specialized \
                 department for further care."
            }
        };
        format!("National Early Warning Score (NEWS) = {total}. Interpretation: {guidance} {DISCLAIMER}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewsResult {
    pub sub_scores: NewsSubScores,
    pub total_score: u8,
    pub risk: NewsRisk,
    pub score_interpretation: String,
}

pub fn respiratory_rate_score(rate: i32) -> u8 {
    match rate {
        ..=8 => 3,
        9..=11 => 1,
        12..=20 => 0,
        21..=24 => 2,
        _ => 3,
    }
}

/// Saturation score. In AECOPD the target band is 88–92%; above it only
/// patients on supplemental oxygen are penalised, saturation 93% and up on
/// room air scores 0.
pub fn oxygen_saturation_score(saturation: i32, is_on_oxygen: bool, aecopd_state: bool) -> u8 {
    if aecopd_state {
        match saturation {
            ..=83 => 3,
            84..=85 => 2,
            86..=87 => 1,
            88..=92 => 0,
            _ if !is_on_oxygen => 0,
            93..=94 => 1,
            95..=96 => 2,
            _ => 3,
        }
    } else {
        match saturation {
            ..=91 => 3,
            92..=93 => 2,
            94..=95 => 1,
            _ => 0,
        }
    }
}

pub fn supplemental_oxygen_score(is_on_oxygen: bool) -> u8 {
    if is_on_oxygen { 2 } else { 0 }
}

/// Temperature score on tenths of a degree, so 36.0 and 36.1 never share
/// a band.
pub fn temperature_score(tenths_celsius: i32) -> u8 {
    match tenths_celsius {
        ..=350 => 3,
        351..=360 => 1,
        361..=380 => 0,
        381..=390 => 1,
        _ => 2,
    }
}

pub fn systolic_blood_pressure_score(systolic: i32) -> u8 {
    match systolic {
        ..=90 => 3,
        91..=100 => 2,
        101..=110 => 1,
        111..=219 => 0,
        _ => 3,
    }
}

/// Heart rate score. 40 belongs to the 3-point band; anything above 130
/// scores 3.
pub fn heart_rate_score(rate: i32) -> u8 {
    match rate {
        ..=40 => 3,
        41..=50 => 1,
        51..=90 => 0,
        91..=110 => 1,
        111..=130 => 2,
        _ => 3,
    }
}

fn tenths(celsius: f64) -> i32 {
    // Range-checked to 0–50 before this runs.
    (celsius * 10.0).round() as i32
}

pub fn sub_scores(input: &NewsInput) -> NewsSubScores {
    NewsSubScores {
        respiratory_rate: respiratory_rate_score(input.respiratory_rate),
        oxygen_saturation: oxygen_saturation_score(
            input.oxygen_saturation,
            input.is_on_oxygen,
            input.aecopd_state,
        ),
        supplemental_oxygen: supplemental_oxygen_score(input.is_on_oxygen),
        temperature: temperature_score(tenths(input.temperature)),
        systolic_blood_pressure: systolic_blood_pressure_score(input.systolic_blood_pressure),
        heart_rate: heart_rate_score(input.heart_rate),
        level_of_consciousness: input.level_of_consciousness.points(),
    }
}

pub fn calculate(input: &NewsInput) -> Result<NewsResult, ScaleError> {
    input.check_ranges()?;

    let sub_scores = sub_scores(input);
    let total_score = sub_scores.total();
    debug!(
        rr = sub_scores.respiratory_rate,
        spo2 = sub_scores.oxygen_saturation,
        oxygen = sub_scores.supplemental_oxygen,
        temp = sub_scores.temperature,
        sbp = sub_scores.systolic_blood_pressure,
        hr = sub_scores.heart_rate,
        loc = sub_scores.level_of_consciousness,
        total = total_score,
        "news sub-scores"
    );

    // Seven sub-scores of at most 3 add up to 20 at most, so `from_total`
    // always yields a band here.
    let risk = NewsRisk::from_total(total_score).unwrap_or(NewsRisk::High);

    Ok(NewsResult {
        sub_scores,
        total_score,
        risk,
        score_interpretation: risk.narrative(total_score),
    })
}

impl From<NewsResult> for ScaleOutcome {
    fn from(result: NewsResult) -> Self {
        ScaleOutcome::total(u32::from(result.total_score))
            .with_interpretation(result.score_interpretation)
    }
}

/// National Early Warning Score. Seven vital-sign parameters, total 0–20.
pub struct News;

impl Scale for News {
    fn id(&self) -> &str {
        "news"
    }

    fn name(&self) -> &str {
        "National Early Warning Score (NEWS)"
    }

    fn items(&self) -> &[ScaleItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScaleItem>> = std::sync::LazyLock::new(|| {
            vec![
                ScaleItem::numeric(
                    "respiratory_rate",
                    "Respiratory rate",
                    respiratory_rate_range(),
                    "breaths/min",
                ),
                ScaleItem::numeric(
                    "oxygen_saturation",
                    "Oxygen saturation",
                    oxygen_saturation_range(),
                    "%",
                ),
                ScaleItem::flag("is_on_oxygen", "Supplemental oxygen"),
                ScaleItem::flag("aecopd_state", "AECOPD state"),
                ScaleItem::numeric("temperature", "Temperature", temperature_range(), "°C"),
                ScaleItem::numeric(
                    "systolic_blood_pressure",
                    "Systolic blood pressure",
                    systolic_range(),
                    "mmHg",
                ),
                ScaleItem::numeric(
                    "diastolic_blood_pressure",
                    "Diastolic blood pressure",
                    diastolic_range(),
                    "mmHg",
                ),
                ScaleItem::numeric("heart_rate", "Heart rate", heart_rate_range(), "bpm"),
                ScaleItem::choice(
                    "level_of_consciousness",
                    "Level of consciousness",
                    Consciousness::options(),
                ),
            ]
        });
        &ITEMS
    }

    fn score(&self, inputs: &serde_json::Value) -> Result<ScaleOutcome, ScaleError> {
        let input: NewsInput = decode(self.id(), inputs)?;
        Ok(calculate(&input)?.into())
    }
}
