//! Logistic-regression model artifact
//!
//! The shipped model is a multinomial logistic regression over a column
//! encoding stage, serialized as JSON:
//!
//! ```json
//! {
//!   "classes": ["High", "Low", "Medium"],
//!   "columns": [
//!     { "kind": "numeric", "name": "Bmi", "mean": 2.6, "scale": 0.7 },
//!     { "kind": "categorical", "name": "age_group", "categories": ["adult", "young"] }
//!   ],
//!   "coefficients": [[...], [...], [...]],
//!   "intercepts": [0.0, 0.0, 0.0]
//! }
//! ```
//!
//! Numeric columns are standardized as `(x - mean) / scale`. Categorical
//! columns are one-hot encoded in category order; a value outside the list
//! encodes as all zeros.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use premium_common::{ClassifierError, StartupError, FEATURE_COLUMNS};

use super::classifier::{Classifier, FeatureRecord, FeatureValue};

fn default_scale() -> f64 {
    1.0
}

/// Encoding stage for one input column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnEncoder {
    Numeric {
        name: String,
        #[serde(default)]
        mean: f64,
        #[serde(default = "default_scale")]
        scale: f64,
    },
    Categorical {
        name: String,
        categories: Vec<String>,
    },
}

impl ColumnEncoder {
    pub fn name(&self) -> &str {
        match self {
            ColumnEncoder::Numeric { name, .. } => name,
            ColumnEncoder::Categorical { name, .. } => name,
        }
    }

    /// Number of encoded features this column produces
    pub fn width(&self) -> usize {
        match self {
            ColumnEncoder::Numeric { .. } => 1,
            ColumnEncoder::Categorical { categories, .. } => categories.len(),
        }
    }

    fn encode_into(&self, value: &FeatureValue, out: &mut Vec<f64>) -> Result<(), ClassifierError> {
        match self {
            ColumnEncoder::Numeric { name, mean, scale } => match value {
                FeatureValue::Number(x) => {
                    out.push((x - mean) / scale);
                    Ok(())
                }
                FeatureValue::Category(_) => Err(ClassifierError::ColumnType {
                    column: name.clone(),
                    expected: "numeric",
                }),
            },
            ColumnEncoder::Categorical { categories, .. } => {
                let key = value.category_key();
                out.extend(
                    categories
                        .iter()
                        .map(|c| if *c == key { 1.0 } else { 0.0 }),
                );
                Ok(())
            }
        }
    }
}

/// Serialized form of the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub classes: Vec<String>,
    pub columns: Vec<ColumnEncoder>,
    /// One row per class, one entry per encoded feature
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

/// Multinomial logistic-regression classifier loaded from a [`ModelArtifact`]
#[derive(Debug, Clone)]
pub struct LogisticModel {
    artifact: ModelArtifact,
    width: usize,
}

impl LogisticModel {
    /// Load and check the artifact at `path`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StartupError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StartupError::ArtifactMissing(path.to_path_buf()),
            _ => StartupError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let model = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            classes = ?model.artifact.classes,
            encoded_width = model.width,
            "Loaded model artifact"
        );
        Ok(model)
    }

    /// Parse and check an artifact from JSON text
    pub fn from_json(text: &str) -> Result<Self, StartupError> {
        let artifact: ModelArtifact =
            serde_json::from_str(text).map_err(|e| StartupError::Parse(e.to_string()))?;
        Self::from_artifact(artifact)
    }

    /// Check an artifact's internal consistency
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, StartupError> {
        if artifact.classes.is_empty() {
            return Err(StartupError::NoClasses);
        }

        let mut seen = HashSet::new();
        for class in &artifact.classes {
            if !seen.insert(class.as_str()) {
                return Err(StartupError::Inconsistent(format!(
                    "duplicate class label '{class}'"
                )));
            }
        }

        let names: Vec<&str> = artifact.columns.iter().map(|c| c.name()).collect();
        if names != FEATURE_COLUMNS {
            return Err(StartupError::Inconsistent(format!(
                "columns {names:?} do not match expected {FEATURE_COLUMNS:?}"
            )));
        }

        for column in &artifact.columns {
            match column {
                ColumnEncoder::Numeric { name, mean, scale } => {
                    if !mean.is_finite() || !scale.is_finite() || *scale == 0.0 {
                        return Err(StartupError::Inconsistent(format!(
                            "column '{name}' needs a finite mean and a finite non-zero scale"
                        )));
                    }
                }
                ColumnEncoder::Categorical { name, categories } => {
                    if categories.is_empty() {
                        return Err(StartupError::Inconsistent(format!(
                            "column '{name}' has no categories"
                        )));
                    }
                }
            }
        }

        let width: usize = artifact.columns.iter().map(ColumnEncoder::width).sum();
        let n_classes = artifact.classes.len();

        if artifact.coefficients.len() != n_classes {
            return Err(StartupError::Inconsistent(format!(
                "{} coefficient rows for {n_classes} classes",
                artifact.coefficients.len()
            )));
        }
        if artifact.intercepts.len() != n_classes {
            return Err(StartupError::Inconsistent(format!(
                "{} intercepts for {n_classes} classes",
                artifact.intercepts.len()
            )));
        }
        if let Some((row, coef)) = artifact
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, coef)| coef.len() != width)
        {
            return Err(StartupError::Inconsistent(format!(
                "coefficient row {row} has {} entries, encoded width is {width}",
                coef.len()
            )));
        }

        let all_finite = artifact
            .coefficients
            .iter()
            .flatten()
            .chain(artifact.intercepts.iter())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(StartupError::Inconsistent(
                "coefficients and intercepts must be finite".to_string(),
            ));
        }

        Ok(Self { artifact, width })
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Total number of encoded features
    pub fn encoded_width(&self) -> usize {
        self.width
    }

    /// Encode a record into the model's feature space
    pub fn encode(&self, record: &FeatureRecord) -> Result<Vec<f64>, ClassifierError> {
        if record.len() != self.artifact.columns.len() {
            return Err(ClassifierError::ColumnCount {
                expected: self.artifact.columns.len(),
                actual: record.len(),
            });
        }

        let mut encoded = Vec::with_capacity(self.width);
        for (position, (encoder, (name, value))) in self
            .artifact
            .columns
            .iter()
            .zip(record.columns())
            .enumerate()
        {
            if encoder.name() != name {
                return Err(ClassifierError::ColumnOrder {
                    position,
                    expected: encoder.name().to_string(),
                    actual: name.clone(),
                });
            }
            encoder.encode_into(value, &mut encoded)?;
        }

        Ok(encoded)
    }

    fn probabilities(&self, record: &FeatureRecord) -> Result<Vec<f64>, ClassifierError> {
        let x = self.encode(record)?;
        if x.iter().any(|v| !v.is_finite()) {
            return Err(ClassifierError::Inference(
                "encoded features contain a non-finite value".to_string(),
            ));
        }

        let scores: Vec<f64> = self
            .artifact
            .coefficients
            .iter()
            .zip(&self.artifact.intercepts)
            .map(|(coef, intercept)| {
                intercept + coef.iter().zip(&x).map(|(w, v)| w * v).sum::<f64>()
            })
            .collect();

        Ok(softmax(&scores))
    }
}

/// Numerically stable softmax
fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

/// Index of the largest value; the first index wins ties
fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

impl Classifier for LogisticModel {
    fn classes(&self) -> Vec<String> {
        self.artifact.classes.clone()
    }

    fn predict(&self, batch: &[FeatureRecord]) -> Result<Vec<String>, ClassifierError> {
        batch
            .iter()
            .map(|record| {
                let probs = self.probabilities(record)?;
                let best = argmax(&probs).ok_or_else(|| {
                    ClassifierError::Inference("model produced no scores".to_string())
                })?;
                Ok(self.artifact.classes[best].clone())
            })
            .collect()
    }

    fn predict_proba(&self, batch: &[FeatureRecord]) -> Result<Vec<Vec<f64>>, ClassifierError> {
        let rows = batch
            .iter()
            .map(|record| self.probabilities(record))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(records = rows.len(), "Computed class probabilities");
        Ok(rows)
    }
}
