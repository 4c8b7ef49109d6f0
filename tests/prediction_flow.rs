//! End-to-end flow: form record through the preprocessor artifact, then a
//! stub classifier outcome through decode and rendering.

use food_order_predictor::artifacts::label_encoder::LabelEncoder;
use food_order_predictor::artifacts::loader::{
    Artifacts, CLASSIFIER_FILE, LABEL_ENCODER_FILE, PREPROCESSOR_FILE,
};
use food_order_predictor::artifacts::preprocessor::Preprocessor;
use food_order_predictor::types::customer::{
    CustomerRecord, Education, Feedback, Gender, MaritalStatus, MonthlyIncome, Occupation,
};
use food_order_predictor::types::prediction::{DisplayStyle, PredictionResult};
use std::fs;

/// Preprocessor schema covering all eleven record columns, as the training
/// pipeline exports it.
const SCHEMA: &str = r#"{
    "columns": [
        {"kind": "passthrough", "column": "Age"},
        {"kind": "one_hot", "column": "Gender",
         "categories": ["Female", "Male", "Prefer not to say"]},
        {"kind": "one_hot", "column": "Marital Status",
         "categories": ["Married", "Prefer not to say", "Single"]},
        {"kind": "one_hot", "column": "Occupation",
         "categories": ["Employee", "House wife", "Self Employeed", "Student"]},
        {"kind": "passthrough", "column": "Monthly Income"},
        {"kind": "passthrough", "column": "Educational Qualifications"},
        {"kind": "passthrough", "column": "Family size"},
        {"kind": "passthrough", "column": "latitude"},
        {"kind": "passthrough", "column": "longitude"},
        {"kind": "one_hot", "column": "Pin code",
         "categories": ["560001", "560002"]},
        {"kind": "one_hot", "column": "Feedback",
         "categories": ["Negative ", "Positive"]}
    ]
}"#;

const CLASSES: &str = r#"{"classes": ["No", "Yes"]}"#;

fn reference_customer() -> CustomerRecord {
    CustomerRecord {
        age: 25,
        gender: Gender::Male,
        marital_status: MaritalStatus::Single,
        occupation: Occupation::Student,
        monthly_income: MonthlyIncome::NoIncome,
        education: Education::Graduate,
        family_size: 3,
        latitude: 12.97,
        longitude: 77.59,
        pin_code: "560001".to_string(),
        feedback: Feedback::Positive,
    }
}

#[test]
fn test_reference_customer_flows_to_positive_verdict() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(PREPROCESSOR_FILE), SCHEMA).unwrap();
    fs::write(dir.path().join(LABEL_ENCODER_FILE), CLASSES).unwrap();

    let preprocessor = Preprocessor::from_path(dir.path().join(PREPROCESSOR_FILE)).unwrap();
    let encoder = LabelEncoder::from_path(dir.path().join(LABEL_ENCODER_FILE)).unwrap();

    let record = reference_customer();
    assert_eq!(record.columns().len(), 11);

    let features = preprocessor.transform(&record).unwrap();
    assert_eq!(features.len(), preprocessor.feature_count());
    assert_eq!(features.len(), 20);

    // Age, one-hot gender/marital/occupation, the two ordinals, family size
    assert_eq!(features[0], 25.0);
    assert_eq!(&features[1..4], &[0.0, 1.0, 0.0]);
    assert_eq!(&features[4..7], &[0.0, 0.0, 1.0]);
    assert_eq!(&features[7..11], &[0.0, 0.0, 0.0, 1.0]);
    assert_eq!(features[11], 0.0);
    assert_eq!(features[12], 1.0);
    assert_eq!(features[13], 3.0);
    assert!((f64::from(features[14]) - 12.97).abs() < 1e-5);
    assert!((f64::from(features[15]) - 77.59).abs() < 1e-5);
    assert_eq!(&features[16..18], &[1.0, 0.0]);
    assert_eq!(&features[18..20], &[0.0, 1.0]);

    // Stub classifier outcome: class 1 with probabilities [0.2, 0.8]
    let label = encoder.inverse_transform(1).unwrap().to_string();
    let prediction = PredictionResult::new(1, label, vec![0.2, 0.8]);

    assert_eq!(prediction.display_style(), DisplayStyle::Positive);
    assert_eq!(prediction.display_probability().unwrap(), 0.8);
    assert_eq!(
        prediction.probability_line().unwrap(),
        "Probability of ordering: 80.00%"
    );
}

#[test]
fn test_stub_negative_verdict_surfaces_class_zero_probability() {
    let encoder: LabelEncoder = serde_json::from_str(CLASSES).unwrap();

    let label = encoder.inverse_transform(0).unwrap().to_string();
    let prediction = PredictionResult::new(0, label, vec![0.2, 0.8]);

    assert_eq!(prediction.display_style(), DisplayStyle::Negative);
    assert_eq!(prediction.display_probability().unwrap(), 0.2);
    assert_eq!(
        prediction.probability_line().unwrap(),
        "Probability of not ordering: 20.00%"
    );
}

#[test]
fn test_missing_artifact_blocks_startup() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(PREPROCESSOR_FILE), SCHEMA).unwrap();
    fs::write(dir.path().join(LABEL_ENCODER_FILE), CLASSES).unwrap();
    // no classifier file

    let err = Artifacts::load_from_dir(dir.path()).unwrap_err();
    let message = err.to_string();

    assert!(message.contains(CLASSIFIER_FILE));
    assert!(message.contains("not found"));
}
