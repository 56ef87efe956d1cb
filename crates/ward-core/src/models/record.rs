use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::outcome::ScaleOutcome;
use crate::error::CoreError;

/// Who recorded a scale and for which hospital stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordContext {
    pub hospitalization_id: Uuid,
    pub created_by: Uuid,
}

impl RecordContext {
    /// Build a context from the string ids the ward application passes around.
    pub fn parse(hospitalization_id: &str, created_by: &str) -> Result<Self, CoreError> {
        Ok(Self {
            hospitalization_id: Uuid::parse_str(hospitalization_id)?,
            created_by: Uuid::parse_str(created_by)?,
        })
    }
}

/// A scored clinical scale as the ward application persists it.
///
/// `inputs` holds the raw record exactly as it was scored; `outcome` is
/// computed by the engine and attached by the caller before the write.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleRecord {
    pub id: Uuid,
    pub hospitalization_id: Uuid,
    pub created_by: Uuid,
    pub scale_id: String,
    pub inputs: serde_json::Value,
    pub outcome: ScaleOutcome,
    pub created_at: jiff::Timestamp,
    pub modified_at: jiff::Timestamp,
}

impl ScaleRecord {
    pub fn new(
        context: RecordContext,
        scale_id: impl Into<String>,
        inputs: serde_json::Value,
        outcome: ScaleOutcome,
    ) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            hospitalization_id: context.hospitalization_id,
            created_by: context.created_by,
            scale_id: scale_id.into(),
            inputs,
            outcome,
            created_at: now,
            modified_at: now,
        }
    }

    /// Replace inputs and outcome after an edit. Identity, author and
    /// creation time are kept.
    pub fn amend(&mut self, inputs: serde_json::Value, outcome: ScaleOutcome) {
        self.inputs = inputs;
        self.outcome = outcome;
        self.modified_at = jiff::Timestamp::now();
    }

    pub fn context(&self) -> RecordContext {
        RecordContext {
            hospitalization_id: self.hospitalization_id,
            created_by: self.created_by,
        }
    }

    /// Decode the stored inputs into a typed input record.
    pub fn inputs_as<T: DeserializeOwned>(&self) -> Result<T, CoreError> {
        Ok(serde_json::from_value(self.inputs.clone())?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        for field in ["id", "scale_id", "inputs", "outcome"] {
            if value.get(field).is_none() {
                return Err(CoreError::MissingField(field.to_string()));
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}
