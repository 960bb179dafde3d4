//! Prediction Service
//!
//! Owns the loaded classifier and shapes its output into a
//! [`PredictionResult`]. [`PredictionService::assess`] runs the full
//! validate -> derive -> predict pipeline shared by every adapter.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::slice;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use premium_common::{
    round_half_up, Assessment, DerivedFeatures, PredictionResult, PremiumError, RawUserInput,
    ServiceError, StartupError, MODEL_VERSION, PROBABILITY_DECIMALS,
};

use crate::domain::{features, validation};
use crate::infra::classifier::{Classifier, FeatureRecord};
use crate::infra::logistic::LogisticModel;

/// Prediction service handle
///
/// Immutable after construction; share it behind an `Arc`.
pub struct PredictionService {
    classifier: Arc<dyn Classifier>,
    /// Label order captured once at load time
    classes: Vec<String>,
    model_version: &'static str,
}

impl PredictionService {
    /// Wrap an already-constructed classifier
    pub fn new(classifier: Arc<dyn Classifier>) -> Result<Self, StartupError> {
        let classes = classifier.classes();
        if classes.is_empty() {
            return Err(StartupError::NoClasses);
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = classes.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(StartupError::Inconsistent(format!(
                "duplicate class label '{duplicate}'"
            )));
        }

        info!(classes = ?classes, model_version = MODEL_VERSION, "Prediction service ready");

        Ok(Self {
            classifier,
            classes,
            model_version: MODEL_VERSION,
        })
    }

    /// Load the JSON model artifact at `path`
    pub fn from_artifact(path: impl AsRef<Path>) -> Result<Self, StartupError> {
        let model = LogisticModel::from_path(path)?;
        Self::new(Arc::new(model))
    }

    /// Class labels, in the order probabilities are paired with them
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn model_version(&self) -> &'static str {
        self.model_version
    }

    /// Whether a classifier is available to serve predictions
    pub fn is_loaded(&self) -> bool {
        !self.classes.is_empty()
    }

    /// Classify a derived feature record
    #[instrument(skip(self, features), fields(bmi = features.bmi))]
    pub fn predict(&self, features: &DerivedFeatures) -> Result<PredictionResult, ServiceError> {
        let record = FeatureRecord::from_features(features);
        let batch = slice::from_ref(&record);

        let label = self
            .classifier
            .predict(batch)?
            .into_iter()
            .next()
            .ok_or(ServiceError::EmptyPrediction)?;
        let probabilities = self
            .classifier
            .predict_proba(batch)?
            .into_iter()
            .next()
            .ok_or(ServiceError::EmptyPrediction)?;

        if probabilities.len() != self.classes.len() {
            return Err(ServiceError::ProbabilityShape {
                expected: self.classes.len(),
                actual: probabilities.len(),
            });
        }
        if let Some(&p) = probabilities
            .iter()
            .find(|p| !(0.0..=1.0).contains(*p))
        {
            return Err(ServiceError::InvalidProbability(p));
        }
        if !self.classes.contains(&label) {
            return Err(ServiceError::UnknownLabel(label));
        }

        let confidence = probabilities
            .iter()
            .copied()
            .fold(0.0, f64::max);

        let class_prob: BTreeMap<String, f64> = self
            .classes
            .iter()
            .cloned()
            .zip(
                probabilities
                    .iter()
                    .map(|p| round_half_up(*p, PROBABILITY_DECIMALS)),
            )
            .collect();

        debug!(predicted_category = %label, confidence, "Prediction complete");

        Ok(PredictionResult {
            predicted_category: label,
            confidence: round_half_up(confidence, PROBABILITY_DECIMALS),
            class_prob,
        })
    }

    /// Validate, derive, and classify raw input
    pub fn assess(&self, raw: &RawUserInput) -> Result<Assessment, PremiumError> {
        let input = validation::validate(raw)?;
        let features = features::derive(&input);
        let prediction = self.predict(&features)?;
        Ok(Assessment {
            features,
            prediction,
        })
    }
}

impl std::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("classes", &self.classes)
            .field("model_version", &self.model_version)
            .finish_non_exhaustive()
    }
}
