//! Classifier seam
//!
//! Feature records in the classifier's column layout, and the trait every
//! model backend implements.

use premium_common::{ClassifierError, DerivedFeatures, FEATURE_COLUMNS};

/// A single cell of a feature record
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Category(String),
}

impl FeatureValue {
    /// Textual form used to match categorical encodings.
    ///
    /// Integral numbers print without a fractional part (`1.0` -> `"1"`).
    pub fn category_key(&self) -> String {
        match self {
            FeatureValue::Number(n) => n.to_string(),
            FeatureValue::Category(s) => s.clone(),
        }
    }
}

/// One row of classifier input: named columns in a fixed order
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    columns: Vec<(String, FeatureValue)>,
}

impl FeatureRecord {
    /// Assemble the record from derived features in [`FEATURE_COLUMNS`] order
    pub fn from_features(features: &DerivedFeatures) -> Self {
        let values = [
            FeatureValue::Number(features.bmi),
            FeatureValue::Category(features.age_group.as_str().to_string()),
            FeatureValue::Category(features.life_style_risk.as_str().to_string()),
            FeatureValue::Number(f64::from(features.city_tier.as_u8())),
            FeatureValue::Number(features.income_lpa),
            FeatureValue::Category(features.occupation.as_str().to_string()),
        ];

        Self {
            columns: FEATURE_COLUMNS
                .iter()
                .map(|name| name.to_string())
                .zip(values)
                .collect(),
        }
    }

    /// Build a record with an arbitrary layout
    pub fn from_columns(columns: Vec<(String, FeatureValue)>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[(String, FeatureValue)] {
        &self.columns
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A trained classifier.
///
/// Implementations are read-only after construction and shared across
/// requests.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    /// Class labels, in the order `predict_proba` reports them
    fn classes(&self) -> Vec<String>;

    /// Predicted label for each record
    fn predict(&self, batch: &[FeatureRecord]) -> Result<Vec<String>, ClassifierError>;

    /// Probability per class for each record, ordered like [`Classifier::classes`]
    fn predict_proba(&self, batch: &[FeatureRecord]) -> Result<Vec<Vec<f64>>, ClassifierError>;
}
