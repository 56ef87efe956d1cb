use tracing::info;
use ward_core::models::record::{RecordContext, ScaleRecord};

use crate::Scale;
use crate::error::ScaleError;

/// Score `inputs` and build the record the ward application persists.
pub fn record_assessment(
    scale: &dyn Scale,
    context: RecordContext,
    inputs: serde_json::Value,
) -> Result<ScaleRecord, ScaleError> {
    let outcome = scale.score(&inputs)?;
    let record = ScaleRecord::new(context, scale.id(), inputs, outcome);
    info!(
        record_id = %record.id,
        scale = scale.id(),
        hospitalization_id = %record.hospitalization_id,
        "scale recorded"
    );
    Ok(record)
}

/// Re-score an edited record in place. On error the record is untouched.
pub fn rescore(
    record: &mut ScaleRecord,
    scale: &dyn Scale,
    inputs: serde_json::Value,
) -> Result<(), ScaleError> {
    if record.scale_id != scale.id() {
        return Err(ScaleError::ScaleMismatch {
            recorded: record.scale_id.clone(),
            requested: scale.id().to_string(),
        });
    }
    let outcome = scale.score(&inputs)?;
    record.amend(inputs, outcome);
    info!(record_id = %record.id, scale = scale.id(), "scale re-scored");
    Ok(())
}
