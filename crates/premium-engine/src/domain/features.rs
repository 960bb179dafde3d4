//! Derived-Feature Calculator
//!
//! Pure functions from validated input to the classifier's feature record.
//! This module is the only place the derivation rules live; the JSON
//! endpoint and the HTML form both go through [`derive`].

use premium_common::{
    round_half_up, AgeGroup, CityTier, DerivedFeatures, LifestyleRisk, BMI_DECIMALS,
};

use super::city_tier;
use super::normalize::normalize_city;
use super::validation::ValidatedInput;

/// BMI above this (with smoking) is high risk
pub const HIGH_RISK_BMI: f64 = 30.0;

/// BMI above this alone is medium risk
pub const MEDIUM_RISK_BMI: f64 = 27.0;

/// Derive the feature record for a validated input
pub fn derive(input: &ValidatedInput) -> DerivedFeatures {
    let bmi = bmi(input.weight(), input.height());

    DerivedFeatures {
        bmi,
        age_group: age_group(input.age()),
        life_style_risk: life_style_risk(input.smoker(), bmi),
        city_tier: city_tier(input.city()),
        income_lpa: input.income_lpa(),
        occupation: input.occupation(),
    }
}

/// Weight over height squared, rounded half-up to 2 decimals.
///
/// Height is taken in feet, unconverted. The classifier was trained on
/// this quantity, so converting to metres here would shift every input
/// out of the training distribution. Caller guarantees `height_ft > 0`.
pub fn bmi(weight_kg: f64, height_ft: f64) -> f64 {
    round_half_up(weight_kg / (height_ft * height_ft), BMI_DECIMALS)
}

/// Age bucket; each boundary belongs to the older group
pub fn age_group(age: u32) -> AgeGroup {
    match age {
        0..=24 => AgeGroup::Young,
        25..=44 => AgeGroup::Adult,
        45..=59 => AgeGroup::MiddleAged,
        _ => AgeGroup::Senior,
    }
}

/// Risk bucket. The high check must run before the medium one: a smoker
/// with BMI 31 satisfies both.
pub fn life_style_risk(smoker: bool, bmi: f64) -> LifestyleRisk {
    if smoker && bmi > HIGH_RISK_BMI {
        LifestyleRisk::High
    } else if smoker || bmi > MEDIUM_RISK_BMI {
        LifestyleRisk::Medium
    } else {
        LifestyleRisk::Low
    }
}

/// Normalize `city` and look up its tier
pub fn city_tier(city: &str) -> CityTier {
    city_tier::tier(&normalize_city(city))
}
