//! Classifier infrastructure
//!
//! The [`classifier::Classifier`] seam and the artifact-backed model behind it.

pub mod classifier;
pub mod logistic;
