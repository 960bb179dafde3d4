//! End-to-end tests against the shipped model artifact
//!
//! - validate -> derive -> predict on reference profiles
//! - startup failures for missing and corrupt artifacts

use std::io::Write;

use premium_common::{
    AgeGroup, CityTier, LifestyleRisk, PremiumError, RawUserInput, StartupError, MODEL_VERSION,
};
use premium_engine::{derive, validate, PredictionService};

const MODEL_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../model/model.json");

fn service() -> PredictionService {
    PredictionService::from_artifact(MODEL_PATH).expect("shipped model should load")
}

fn raw(age: i64, weight: f64, height: f64, income_lpa: f64, smoker: bool, city: &str, occupation: &str) -> RawUserInput {
    RawUserInput {
        age,
        weight,
        height,
        income_lpa,
        smoker,
        city: city.to_string(),
        occupation: occupation.to_string(),
    }
}

#[test]
fn test_shipped_model_labels() {
    let service = service();
    assert_eq!(service.classes(), ["High", "Low", "Medium"]);
    assert_eq!(service.model_version(), MODEL_VERSION);
    assert!(service.is_loaded());
}

#[test]
fn test_reference_profile() {
    let service = service();
    let input = raw(30, 70.0, 5.6, 10.0, false, "Mumbai", "private_job");

    let features = derive(&validate(&input).unwrap());
    assert_eq!(features.bmi, 2.23);
    assert_eq!(features.age_group, AgeGroup::Adult);
    assert_eq!(features.life_style_risk, LifestyleRisk::Low);
    assert_eq!(features.city_tier, CityTier::Tier1);

    let assessment = service.assess(&input).unwrap();
    let prediction = assessment.prediction;

    assert!(service.classes().contains(&prediction.predicted_category));
    assert_eq!(prediction.predicted_category, "Low");
    assert!((0.0..=1.0).contains(&prediction.confidence));
    assert!((prediction.probability_sum() - 1.0).abs() < 1e-3);

    let keys: Vec<&str> = prediction.class_prob.keys().map(String::as_str).collect();
    assert_eq!(keys, ["High", "Low", "Medium"]);
}

#[test]
fn test_profiles_span_all_classes() {
    let service = service();

    let senior_smoker = raw(65, 87.5, 5.0, 60.0, true, "mumbai", "business_owner");
    let middle_aged = raw(50, 65.0, 5.0, 25.0, true, "Indore", "government_job");
    let student = raw(20, 50.0, 5.0, 2.0, false, "Ooty", "student");

    let label = |input: &RawUserInput| service.assess(input).unwrap().prediction.predicted_category;
    assert_eq!(label(&senior_smoker), "High");
    assert_eq!(label(&middle_aged), "Medium");
    assert_eq!(label(&student), "Low");
}

#[test]
fn test_confidence_is_max_probability() {
    let service = service();
    let prediction = service
        .assess(&raw(50, 65.0, 5.0, 25.0, true, "Indore", "government_job"))
        .unwrap()
        .prediction;

    let max = prediction
        .class_prob
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    assert!((prediction.confidence - max).abs() < 1e-9);
    assert_eq!(
        prediction.class_prob[&prediction.predicted_category],
        prediction.confidence
    );
}

#[test]
fn test_extreme_weight_still_predicts() {
    let service = service();
    let assessment = service
        .assess(&raw(30, 1e307, 1.0, 10.0, false, "Mumbai", "private_job"))
        .unwrap();

    assert_eq!(assessment.features.bmi, 1e307);
    assert!(assessment.prediction.confidence.is_finite());
    assert_eq!(assessment.prediction.predicted_category, "High");
    assert!((assessment.prediction.probability_sum() - 1.0).abs() < 1e-3);
}

#[test]
fn test_invalid_input_never_reaches_model() {
    let service = service();
    let err = service
        .assess(&raw(18, 10.0, 0.0, 0.0, false, "Pune", "manager"))
        .unwrap_err();

    match err {
        PremiumError::Validation(e) => {
            for field in ["age", "weight", "height", "income_lpa", "occupation"] {
                assert!(e.has_field(field), "missing violation for {field}");
            }
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_missing_artifact_fails_startup() {
    let err = PredictionService::from_artifact("no/such/model.json").unwrap_err();
    assert!(matches!(err, StartupError::ArtifactMissing(_)));
}

#[test]
fn test_corrupt_artifact_fails_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"\x80\x04\x95 not json").unwrap();

    let err = PredictionService::from_artifact(file.path()).unwrap_err();
    assert!(matches!(err, StartupError::Io { .. } | StartupError::Parse(_)));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"classes": ["High"], "columns": [], "coefficients": [[]], "intercepts": [0.0]}"#)
        .unwrap();

    let err = PredictionService::from_artifact(file.path()).unwrap_err();
    assert!(matches!(err, StartupError::Inconsistent(_)));
}
