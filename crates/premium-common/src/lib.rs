//! # Premium Common
//!
//! Shared types, errors, and constants for the insurance premium predictor.
//!
//! ## Core Types
//!
//! - [`RawUserInput`]: user attributes exactly as submitted by a caller
//! - [`DerivedFeatures`]: the feature record the classifier consumes
//! - [`PredictionResult`]: predicted category, confidence, class probabilities
//! - [`Assessment`]: derived features paired with their prediction
//!
//! ## Errors
//!
//! - [`ValidationError`]: field-level rejection of raw input
//! - [`ServiceError`]: failure during feature assembly or inference
//! - [`StartupError`]: model artifact missing or inconsistent at load time

pub mod error;
pub mod rounding;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{
    ClassifierError, FieldViolation, PremiumError, Result, ServiceError, StartupError,
    ValidationError,
};
pub use rounding::round_half_up;
pub use types::{
    features::{AgeGroup, CityTier, DerivedFeatures, LifestyleRisk},
    prediction::{Assessment, PredictionResult},
    user_input::{Occupation, ParseOccupationError, RawUserInput},
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the shipped model artifact.
///
/// Bumped by hand whenever `model/model.json` is replaced.
pub const MODEL_VERSION: &str = "1.0.0.2";

/// Column names in the order the classifier was trained with.
///
/// Case-sensitive: the BMI column is spelled `Bmi`.
pub const FEATURE_COLUMNS: [&str; 6] = [
    "Bmi",
    "age_group",
    "life_style_risk",
    "city_tier",
    "income_lpa",
    "occupation",
];

/// Age must be strictly greater than this
pub const MIN_AGE_EXCLUSIVE: i64 = 18;

/// Weight (kg) must be strictly greater than this
pub const MIN_WEIGHT_KG_EXCLUSIVE: f64 = 10.0;

/// Decimal places kept on BMI
pub const BMI_DECIMALS: i32 = 2;

/// Decimal places kept on confidence and class probabilities
pub const PROBABILITY_DECIMALS: i32 = 4;
