//! # Premium Engine
//!
//! Feature derivation, input validation, and classifier inference for
//! insurance premium prediction.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │ RawUserInput │──▶│   validate   │──▶│    derive    │──▶│ PredictionService │
//! │ (JSON / form)│   │ (all fields) │   │ (pure, total)│   │  (shared model)   │
//! └──────────────┘   └──────┬───────┘   └──────────────┘   └────────┬─────────┘
//!                           │                                       │
//!                    ValidationError                     PredictionResult / ServiceError
//! ```
//!
//! The classifier is loaded once at startup behind the [`Classifier`] trait
//! and never mutated, so a single [`PredictionService`] is shared by all
//! requests without locking.

pub mod domain;
pub mod infra;
pub mod service;

// Re-export pipeline stages
pub use domain::city_tier::{known_cities, tier};
pub use domain::features::derive;
pub use domain::normalize::{humanize, normalize_city};
pub use domain::validation::{validate, ValidatedInput};

// Re-export classifier infrastructure
pub use infra::classifier::{Classifier, FeatureRecord, FeatureValue};
pub use infra::logistic::{ColumnEncoder, LogisticModel, ModelArtifact};

pub use service::PredictionService;

/// Default location of the model artifact, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "model/model.json";
