//! Premium Gateway
//!
//! HTTP adapters over the premium prediction pipeline:
//! - `/predict` JSON endpoint plus `/` and `/health`
//! - `/form` server-rendered interactive form
//!
//! Both adapters call [`premium_engine::PredictionService::assess`].

pub mod config;
pub mod error;
pub mod form;
pub mod routes;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use routes::{router, AppState, HealthResponse};
