use serde_json::json;
use ward_scales::config::{BmiConfig, ScoringConfig};
use ward_scales::error::ScaleError;
use ward_scales::scales::bmi::ClassIiiBound;
use ward_scales::scoring::ItemKind;
use ward_scales::{all_scales, get_scale, score};

#[test]
fn registers_five_scales_in_order() {
    let ids: Vec<String> = all_scales(&ScoringConfig::default())
        .iter()
        .map(|s| s.id().to_string())
        .collect();
    assert_eq!(ids, ["norton", "glasgow", "news", "pain", "bmi"]);
}

#[test]
fn unknown_scale() {
    let config = ScoringConfig::default();
    assert!(get_scale("braden", &config).is_none());
    assert!(matches!(
        score("braden", &config, &json!({})),
        Err(ScaleError::UnknownScale(id)) if id == "braden"
    ));
}

#[test]
fn scores_norton_from_form_codes() {
    let outcome = score(
        "norton",
        &ScoringConfig::default(),
        &json!({
            "physical_condition": "4",
            "mental_condition": "4",
            "activity": "4",
            "mobility": "4",
            "incontinence": "4",
        }),
    )
    .unwrap();
    assert_eq!(outcome.total, Some(20));
    assert_eq!(outcome.interpretation.as_deref(), Some("Low Risk"));
}

#[test]
fn glasgow_outcome_has_no_interpretation() {
    let outcome = score(
        "glasgow",
        &ScoringConfig::default(),
        &json!({ "eye_response": "4", "verbal_response": "3", "motor_response": "5" }),
    )
    .unwrap();
    assert_eq!(outcome.total, Some(12));
    assert_eq!(outcome.interpretation, None);
}

#[test]
fn pain_and_bmi_outcomes() {
    let config = ScoringConfig::default();
    let pain = score("pain", &config, &json!({ "pain_level": 7 })).unwrap();
    assert_eq!(pain.interpretation.as_deref(), Some("Severe Pain"));
    assert_eq!(pain.total, None);

    let bmi = score("bmi", &config, &json!({ "body_height": 170, "body_weight": 70 })).unwrap();
    assert_eq!(bmi.value, Some(24.2));
    assert_eq!(bmi.interpretation.as_deref(), Some("Normal weight"));
}

#[test]
fn bmi_policy_comes_from_config() {
    let inputs = json!({ "body_height": 150, "body_weight": 100 });
    assert!(matches!(
        score("bmi", &ScoringConfig::default(), &inputs),
        Err(ScaleError::Unclassified { .. })
    ));

    let open = ScoringConfig {
        bmi: BmiConfig {
            class_iii_bound: ClassIiiBound::OpenEnded,
        },
        ..ScoringConfig::default()
    };
    let outcome = score("bmi", &open, &inputs).unwrap();
    assert_eq!(outcome.interpretation.as_deref(), Some("Obesity class III"));
}

#[test]
fn malformed_inputs_are_invalid_input() {
    let err = score(
        "glasgow",
        &ScoringConfig::default(),
        &json!({ "eye_response": "9", "verbal_response": "3", "motor_response": "5" }),
    )
    .unwrap_err();
    assert!(matches!(err, ScaleError::InvalidInput { ref scale, .. } if scale == "glasgow"));

    let err = score("news", &ScoringConfig::default(), &json!({ "heart_rate": 70 })).unwrap_err();
    assert!(matches!(err, ScaleError::InvalidInput { .. }));
}

#[test]
fn validate_inputs_reports_every_bad_field() {
    let news = get_scale("news", &ScoringConfig::default()).unwrap();
    let errors = news.validate_inputs(&json!({
        "respiratory_rate": 120,
        "oxygen_saturation": "high",
        "is_on_oxygen": "yes",
        "heart_rate": 70,
        "level_of_consciousness": "asleep",
    }));
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        ["respiratory_rate", "oxygen_saturation", "is_on_oxygen", "level_of_consciousness"]
    );
    assert!(errors[0].message.contains("Respiratory rate 120 is outside range [0, 100]"));
}

#[test]
fn validate_inputs_accepts_clean_record() {
    let norton = get_scale("norton", &ScoringConfig::default()).unwrap();
    let errors = norton.validate_inputs(&json!({
        "physical_condition": "3",
        "mental_condition": "2",
    }));
    assert!(errors.is_empty());
}

#[test]
fn validate_inputs_rejects_non_object() {
    let pain = get_scale("pain", &ScoringConfig::default()).unwrap();
    assert_eq!(pain.validate_inputs(&json!([1, 2])).len(), 1);
}

#[test]
fn items_describe_choices_with_labels() {
    let glasgow = get_scale("glasgow", &ScoringConfig::default()).unwrap();
    let motor = glasgow
        .items()
        .iter()
        .find(|i| i.id == "motor_response")
        .unwrap();
    match &motor.kind {
        ItemKind::Choice { options } => {
            assert_eq!(options.len(), 6);
            assert_eq!(options[0].code, "6");
            assert_eq!(options[0].label, "Obeys commands");
            assert_eq!(options[0].points, 6);
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}
