use std::str::FromStr;

use ward_scales::error::ScaleError;
use ward_scales::scales::norton::{
    Activity, Incontinence, MentalCondition, Mobility, NortonInput, NortonRisk, PhysicalCondition,
    calculate,
};

fn input(points: [&str; 5]) -> NortonInput {
    serde_json::from_value(serde_json::json!({
        "physical_condition": points[0],
        "mental_condition": points[1],
        "activity": points[2],
        "mobility": points[3],
        "incontinence": points[4],
    }))
    .unwrap()
}

#[test]
fn best_condition_scores_twenty_low_risk() {
    let result = calculate(&input(["4", "4", "4", "4", "4"]));
    assert_eq!(result.total_points, 20);
    assert_eq!(result.pressure_risk, NortonRisk::Low);
    assert_eq!(result.pressure_risk.as_str(), "Low Risk");
}

#[test]
fn worst_condition_scores_five_very_high_risk() {
    let result = calculate(&NortonInput {
        physical_condition: PhysicalCondition::VeryBad,
        mental_condition: MentalCondition::Stuporous,
        activity: Activity::Bedridden,
        mobility: Mobility::Immobile,
        incontinence: Incontinence::UrinaryAndFecal,
    });
    assert_eq!(result.total_points, 5);
    assert_eq!(result.pressure_risk.to_string(), "Very High Risk");
}

#[test]
fn band_edges() {
    assert_eq!(calculate(&input(["4", "4", "4", "4", "3"])).pressure_risk, NortonRisk::Low);
    assert_eq!(calculate(&input(["4", "4", "4", "3", "3"])).pressure_risk, NortonRisk::Medium);
    assert_eq!(calculate(&input(["3", "3", "3", "3", "2"])).pressure_risk, NortonRisk::Medium);
    assert_eq!(calculate(&input(["3", "3", "3", "2", "2"])).pressure_risk, NortonRisk::High);
    assert_eq!(calculate(&input(["2", "2", "2", "2", "2"])).pressure_risk, NortonRisk::High);
    assert_eq!(calculate(&input(["2", "2", "2", "2", "1"])).pressure_risk, NortonRisk::VeryHigh);
}

#[test]
fn from_total_rejects_impossible_totals() {
    assert_eq!(NortonRisk::from_total(19), Some(NortonRisk::Low));
    assert_eq!(NortonRisk::from_total(18), Some(NortonRisk::Medium));
    assert_eq!(NortonRisk::from_total(13), Some(NortonRisk::High));
    assert_eq!(NortonRisk::from_total(9), Some(NortonRisk::VeryHigh));
    assert_eq!(NortonRisk::from_total(21), None);
}

// Legacy records silently counted an unknown code as 0 points; codes are
// now rejected before scoring.
#[test]
fn unknown_code_is_rejected() {
    let err = PhysicalCondition::from_str("5").unwrap_err();
    assert!(matches!(err, ScaleError::InvalidInput { ref scale, .. } if scale == "norton"));

    let decoded: Result<NortonInput, _> = serde_json::from_value(serde_json::json!({
        "physical_condition": "4",
        "mental_condition": "0",
        "activity": "4",
        "mobility": "4",
        "incontinence": "4",
    }));
    assert!(decoded.is_err());
}

#[test]
fn codes_round_trip_through_from_str() {
    for option in Mobility::ALL {
        assert_eq!(Mobility::from_str(option.code()).unwrap(), *option);
    }
    assert_eq!(Mobility::SlightlyImpaired.label(), "Slightly impaired");
    assert_eq!(Incontinence::Continent.label(), "None");
}

#[test]
fn every_combination_is_banded_by_its_total() {
    for &physical_condition in PhysicalCondition::ALL {
        for &mental_condition in MentalCondition::ALL {
            for &activity in Activity::ALL {
                for &mobility in Mobility::ALL {
                    for &incontinence in Incontinence::ALL {
                        let result = calculate(&NortonInput {
                            physical_condition,
                            mental_condition,
                            activity,
                            mobility,
                            incontinence,
                        });
                        assert_eq!(
                            Some(result.pressure_risk),
                            NortonRisk::from_total(result.total_points)
                        );
                    }
                }
            }
        }
    }
}
