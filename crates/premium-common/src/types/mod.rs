//! Core types for the premium predictor

pub mod features;
pub mod prediction;
pub mod user_input;
