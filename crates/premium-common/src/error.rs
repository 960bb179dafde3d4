//! Error types for the premium predictor
//!
//! Provides a unified error type and the three failure stages of a request:
//! validation, inference, and model startup.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Result type alias using PremiumError
pub type Result<T> = std::result::Result<T, PremiumError>;

/// Unified error type for predictor operations
#[derive(Debug, Error)]
pub enum PremiumError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Startup error: {0}")]
    Startup(#[from] StartupError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// A single rejected field and the constraint it broke
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub constraint: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// Raw input rejected before derivation.
///
/// Carries every violation found, not only the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Record a violation for `field`
    pub fn push(&mut self, field: &'static str, constraint: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            constraint: constraint.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether any violation names `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Errors raised by a classifier implementation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("Feature record has {actual} columns, expected {expected}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("Column order mismatch at position {position}: expected '{expected}', got '{actual}'")]
    ColumnOrder {
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("Column '{column}' expects a {expected} value")]
    ColumnType {
        column: String,
        expected: &'static str,
    },

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Failure during feature assembly or model inference
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Classifier returned no prediction for the record")]
    EmptyPrediction,

    #[error("Probability vector has {actual} entries but the model has {expected} classes")]
    ProbabilityShape { expected: usize, actual: usize },

    #[error("Predicted label '{0}' is not one of the model classes")]
    UnknownLabel(String),

    #[error("Probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

/// Model artifact could not be loaded
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Model artifact not found at {}", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("Failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model artifact is not valid JSON: {0}")]
    Parse(String),

    #[error("Model artifact is inconsistent: {0}")]
    Inconsistent(String),

    #[error("Model exposes no class labels")]
    NoClasses,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_field() {
        let mut err = ValidationError::default();
        err.push("age", "must be greater than 18");
        err.push("height", "must be greater than 0");

        let text = err.to_string();
        assert!(text.contains("age: must be greater than 18"));
        assert!(text.contains("height: must be greater than 0"));
        assert!(err.has_field("height"));
        assert!(!err.has_field("weight"));
    }

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::ProbabilityShape {
            expected: 3,
            actual: 2,
        };
        assert!(err.to_string().contains("2 entries"));

        let err: PremiumError = ServiceError::UnknownLabel("Extreme".to_string()).into();
        assert!(err.to_string().contains("Extreme"));
    }

    #[test]
    fn test_startup_error_display() {
        let err = StartupError::ArtifactMissing(PathBuf::from("model/missing.json"));
        assert!(err.to_string().contains("model/missing.json"));
    }

    #[test]
    fn test_violation_serializes_field_and_constraint() {
        let violation = FieldViolation {
            field: "occupation",
            constraint: "must be one of retired".to_string(),
        };
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["field"], "occupation");
        assert_eq!(json["constraint"], "must be one of retired");
    }
}
