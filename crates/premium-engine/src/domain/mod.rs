//! Premium domain logic
//!
//! Pure stages of the request pipeline: input validation, city
//! normalization and tier lookup, and feature derivation.

pub mod city_tier;
pub mod features;
pub mod normalize;
pub mod validation;
