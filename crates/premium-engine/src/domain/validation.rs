//! Input Validator
//!
//! Turns a [`RawUserInput`] into a [`ValidatedInput`], or rejects it with
//! every field violation found.

use premium_common::{
    Occupation, RawUserInput, ValidationError, MIN_AGE_EXCLUSIVE, MIN_WEIGHT_KG_EXCLUSIVE,
};

use super::normalize::normalize_city;

/// User input that passed validation.
///
/// Only [`validate`] constructs one, so holding a `ValidatedInput` means the
/// numeric bounds hold and the city is in normalized form.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    age: u32,
    weight: f64,
    height: f64,
    income_lpa: f64,
    smoker: bool,
    city: String,
    occupation: Occupation,
}

impl ValidatedInput {
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Weight in kilograms
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Height in feet
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn income_lpa(&self) -> f64 {
        self.income_lpa
    }

    pub fn smoker(&self) -> bool {
        self.smoker
    }

    /// Normalized city name
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn occupation(&self) -> Occupation {
        self.occupation
    }
}

/// Validate raw input, collecting every violation.
pub fn validate(raw: &RawUserInput) -> Result<ValidatedInput, ValidationError> {
    let mut errors = ValidationError::default();

    let age = if raw.age <= MIN_AGE_EXCLUSIVE {
        errors.push("age", format!("must be greater than {MIN_AGE_EXCLUSIVE}"));
        None
    } else {
        match u32::try_from(raw.age) {
            Ok(age) => Some(age),
            Err(_) => {
                errors.push("age", "is out of range");
                None
            }
        }
    };

    check_lower_bound(&mut errors, "weight", raw.weight, MIN_WEIGHT_KG_EXCLUSIVE);
    check_lower_bound(&mut errors, "height", raw.height, 0.0);
    check_lower_bound(&mut errors, "income_lpa", raw.income_lpa, 0.0);

    let occupation = match raw.occupation.parse::<Occupation>() {
        Ok(occupation) => Some(occupation),
        Err(_) => {
            let allowed: Vec<&str> = Occupation::ALL.iter().map(|o| o.as_str()).collect();
            errors.push(
                "occupation",
                format!("must be one of {}", allowed.join(", ")),
            );
            None
        }
    };

    match (age, occupation) {
        (Some(age), Some(occupation)) if errors.is_empty() => Ok(ValidatedInput {
            age,
            weight: raw.weight,
            height: raw.height,
            income_lpa: raw.income_lpa,
            smoker: raw.smoker,
            city: normalize_city(&raw.city),
            occupation,
        }),
        _ => Err(errors),
    }
}

fn check_lower_bound(errors: &mut ValidationError, field: &'static str, value: f64, bound: f64) {
    if !value.is_finite() {
        errors.push(field, "must be a finite number");
    } else if value <= bound {
        errors.push(field, format!("must be greater than {bound}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RawUserInput {
        RawUserInput {
            age: 30,
            weight: 70.0,
            height: 5.6,
            income_lpa: 10.0,
            smoker: false,
            city: "Mumbai".to_string(),
            occupation: "private_job".to_string(),
        }
    }

    #[test]
    fn test_accepts_valid_input() {
        let input = validate(&valid_input()).unwrap();
        assert_eq!(input.age(), 30);
        assert_eq!(input.city(), "Mumbai");
        assert_eq!(input.occupation(), Occupation::PrivateJob);
    }

    #[test]
    fn test_normalizes_city() {
        let raw = RawUserInput {
            city: "  new delhi ".to_string(),
            ..valid_input()
        };
        assert_eq!(validate(&raw).unwrap().city(), "New Delhi");
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        let cases = [
            ("age", RawUserInput { age: 18, ..valid_input() }),
            ("weight", RawUserInput { weight: 10.0, ..valid_input() }),
            ("height", RawUserInput { height: 0.0, ..valid_input() }),
            ("income_lpa", RawUserInput { income_lpa: 0.0, ..valid_input() }),
        ];

        for (field, raw) in cases {
            let err = validate(&raw).unwrap_err();
            assert_eq!(err.violations().len(), 1, "{field}");
            assert!(err.has_field(field), "{field} should be rejected");
        }

        assert!(validate(&RawUserInput { age: 19, ..valid_input() }).is_ok());
        assert!(validate(&RawUserInput { weight: 10.01, ..valid_input() }).is_ok());
    }

    #[test]
    fn test_rejects_unknown_occupation() {
        let raw = RawUserInput {
            occupation: "manager".to_string(),
            ..valid_input()
        };
        let err = validate(&raw).unwrap_err();
        assert!(err.has_field("occupation"));
        assert!(err.to_string().contains("private_job"));
    }

    #[test]
    fn test_rejects_non_finite_numbers() {
        let raw = RawUserInput {
            weight: f64::INFINITY,
            height: f64::NAN,
            ..valid_input()
        };
        let err = validate(&raw).unwrap_err();
        assert!(err.has_field("weight"));
        assert!(err.has_field("height"));
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_collects_all_violations() {
        let raw = RawUserInput {
            age: 5,
            weight: -1.0,
            height: 0.0,
            income_lpa: -3.0,
            smoker: true,
            city: String::new(),
            occupation: "astronaut".to_string(),
        };
        let err = validate(&raw).unwrap_err();
        assert_eq!(err.violations().len(), 5);
    }

    #[test]
    fn test_rejects_age_beyond_u32() {
        let raw = RawUserInput {
            age: i64::MAX,
            ..valid_input()
        };
        assert!(validate(&raw).unwrap_err().has_field("age"));
    }

    #[test]
    fn test_city_is_not_bounds_checked() {
        let raw = RawUserInput {
            city: "   ".to_string(),
            ..valid_input()
        };
        assert_eq!(validate(&raw).unwrap().city(), "");
    }
}
