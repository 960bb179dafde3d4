//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use premium_common::{PremiumError, ServiceError, ValidationError};

/// Errors surfaced by the JSON endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<PremiumError> for ApiError {
    fn from(err: PremiumError) -> Self {
        match err {
            PremiumError::Validation(e) => ApiError::Validation(e),
            PremiumError::Service(e) => ApiError::Service(e),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Service(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(e) => {
                warn!(violations = %e, "Rejected input");
                json!({ "detail": e.violations() })
            }
            ApiError::BadRequest(msg) => {
                warn!(%msg, "Malformed request body");
                json!({ "detail": msg })
            }
            ApiError::Service(e) => {
                error!(error = %e, "Prediction failed");
                json!({ "detail": e.to_string() })
            }
            ApiError::Internal(msg) => {
                error!(%msg, "Internal error");
                json!({ "detail": msg })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use premium_common::ClassifierError;

    #[test]
    fn test_status_mapping() {
        let mut violations = ValidationError::default();
        violations.push("age", "must be greater than 18");

        assert_eq!(
            ApiError::from(PremiumError::Validation(violations)).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(PremiumError::Service(ServiceError::Classifier(
                ClassifierError::Inference("boom".to_string())
            )))
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(PremiumError::Config("bad".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
