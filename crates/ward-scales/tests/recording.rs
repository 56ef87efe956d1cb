use serde_json::json;
use uuid::Uuid;
use ward_core::models::record::RecordContext;
use ward_scales::config::ScoringConfig;
use ward_scales::error::ScaleError;
use ward_scales::get_scale;
use ward_scales::recording::{record_assessment, rescore};
use ward_scales::scales::pain::PainInput;

fn context() -> RecordContext {
    RecordContext {
        hospitalization_id: Uuid::new_v4(),
        created_by: Uuid::new_v4(),
    }
}

#[test]
fn record_carries_inputs_and_outcome() {
    let news = get_scale("news", &ScoringConfig::default()).unwrap();
    let inputs = json!({
        "respiratory_rate": 20,
        "oxygen_saturation": 99,
        "is_on_oxygen": false,
        "aecopd_state": false,
        "temperature": 36.6,
        "systolic_blood_pressure": 120,
        "diastolic_blood_pressure": 80,
        "heart_rate": 66,
        "level_of_consciousness": "awake",
    });
    let ctx = context();

    let record = record_assessment(news.as_ref(), ctx, inputs.clone()).unwrap();
    assert_eq!(record.scale_id, "news");
    assert_eq!(record.inputs, inputs);
    assert_eq!(record.outcome.total, Some(0));
    assert_eq!(record.context(), ctx);
    assert_eq!(record.created_at, record.modified_at);
}

#[test]
fn failed_scoring_builds_no_record() {
    let pain = get_scale("pain", &ScoringConfig::default()).unwrap();
    let err = record_assessment(pain.as_ref(), context(), json!({ "pain_level": 12 })).unwrap_err();
    assert!(matches!(err, ScaleError::OutOfRange(_)));
}

#[test]
fn rescore_updates_outcome_and_keeps_identity() {
    let pain = get_scale("pain", &ScoringConfig::default()).unwrap();
    let mut record = record_assessment(pain.as_ref(), context(), json!({ "pain_level": 2 })).unwrap();
    let id = record.id;
    let created_at = record.created_at;

    rescore(&mut record, pain.as_ref(), json!({ "pain_level": 8 })).unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.created_at, created_at);
    assert!(record.modified_at >= created_at);
    assert_eq!(record.outcome.interpretation.as_deref(), Some("Severe Pain"));
    assert_eq!(record.inputs_as::<PainInput>().unwrap().pain_level, 8);
}

#[test]
fn rescore_leaves_record_alone_on_error() {
    let pain = get_scale("pain", &ScoringConfig::default()).unwrap();
    let mut record = record_assessment(pain.as_ref(), context(), json!({ "pain_level": 2 })).unwrap();
    let before = record.clone();

    assert!(rescore(&mut record, pain.as_ref(), json!({ "pain_level": -3 })).is_err());
    assert_eq!(record.inputs, before.inputs);
    assert_eq!(record.outcome, before.outcome);
    assert_eq!(record.modified_at, before.modified_at);
}

#[test]
fn rescore_refuses_other_scale() {
    let config = ScoringConfig::default();
    let pain = get_scale("pain", &config).unwrap();
    let bmi = get_scale("bmi", &config).unwrap();
    let mut record = record_assessment(pain.as_ref(), context(), json!({ "pain_level": 2 })).unwrap();

    let err = rescore(
        &mut record,
        bmi.as_ref(),
        json!({ "body_height": 170, "body_weight": 70 }),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ScaleError::ScaleMismatch { ref recorded, ref requested }
            if recorded == "pain" && requested == "bmi"
    ));
}
