//! Prediction response types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::features::DerivedFeatures;

/// Classifier output for a single feature record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// One of the model's class labels
    pub predicted_category: String,
    /// Highest class probability, rounded to 4 decimals
    pub confidence: f64,
    /// Probability per class label, rounded to 4 decimals
    pub class_prob: BTreeMap<String, f64>,
}

impl PredictionResult {
    /// Sum of the reported class probabilities (~1.0 up to rounding)
    pub fn probability_sum(&self) -> f64 {
        self.class_prob.values().sum()
    }

    /// Probability reported for `label`
    pub fn probability_of(&self, label: &str) -> Option<f64> {
        self.class_prob.get(label).copied()
    }
}

/// Derived features together with the prediction made from them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub features: DerivedFeatures,
    pub prediction: PredictionResult,
}
