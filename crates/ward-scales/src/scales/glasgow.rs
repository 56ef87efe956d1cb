use serde::{Deserialize, Serialize};
use ts_rs::TS;
use ward_core::models::outcome::ScaleOutcome;

use crate::Scale;
use crate::error::ScaleError;
use crate::scoring::{ScaleItem, decode, scale_choice};

scale_choice! {
    /// Best eye response.
    EyeResponse ("glasgow", "eye response") {
        Spontaneous = 4, "4", "Eyes open spontaneously";
        ToSound = 3, "3", "Eye opening to sound";
        ToPain = 2, "2", "Eye opening to pain";
        NoOpening = 1, "1", "No eye opening";
    }
}

scale_choice! {
    /// Best verbal response.
    VerbalResponse ("glasgow", "verbal response") {
        Oriented = 5, "5", "Orientated";
        Confused = 4, "4", "Confused";
        InappropriateWords = 3, "3", "Inappropriate words";
        IncomprehensibleSounds = 2, "2", "Incomprehensible sounds";
        NoResponse = 1, "1", "No verbal response";
    }
}

scale_choice! {
    /// Best motor response.
    MotorResponse ("glasgow", "motor response") {
        ObeysCommands = 6, "6", "Obeys commands";
        LocalizesPain = 5, "5", "Localizing pain";
        WithdrawsFromPain = 4, "4", "Withdrawal from pain";
        AbnormalFlexion = 3, "3", "Abnormal flexion to pain";
        AbnormalExtension = 2, "2", "Abnormal extension to pain";
        NoResponse = 1, "1", "No motor response";
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlasgowInput {
    pub eye_response: EyeResponse,
    pub verbal_response: VerbalResponse,
    pub motor_response: MotorResponse,
}

/// Only the raw total is produced; severity wording is left to the ward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlasgowResult {
    pub total_points: u8,
}

pub fn calculate(input: &GlasgowInput) -> GlasgowResult {
    GlasgowResult {
        total_points: input.eye_response.points()
            + input.verbal_response.points()
            + input.motor_response.points(),
    }
}

impl From<GlasgowResult> for ScaleOutcome {
    fn from(result: GlasgowResult) -> Self {
        ScaleOutcome::total(u32::from(result.total_points))
    }
}

/// Glasgow Coma Scale. Eye 1–4, verbal 1–5, motor 1–6. Total 3–15.
pub struct Glasgow;

impl Scale for Glasgow {
    fn id(&self) -> &str {
        "glasgow"
    }

    fn name(&self) -> &str {
        "Glasgow Coma Scale"
    }

    fn items(&self) -> &[ScaleItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScaleItem>> = std::sync::LazyLock::new(|| {
            vec![
                ScaleItem::choice("eye_response", "Best eye response", EyeResponse::options()),
                ScaleItem::choice(
                    "verbal_response",
                    "Best verbal response",
                    VerbalResponse::options(),
                ),
                ScaleItem::choice(
                    "motor_response",
                    "Best motor response",
                    MotorResponse::options(),
                ),
            ]
        });
        &ITEMS
    }

    fn score(&self, inputs: &serde_json::Value) -> Result<ScaleOutcome, ScaleError> {
        let input: GlasgowInput = decode(self.id(), inputs)?;
        Ok(calculate(&input).into())
    }
}
