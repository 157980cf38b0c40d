use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;
use crate::models::ErrorResponse;
use crate::services::SupabaseError;

const STORE_FAILURE_MESSAGE: &str = "An unexpected error occurred";

/// Errors surfaced by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: SupabaseError,
    },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// Wrap a datastore failure with the endpoint's failure message
    pub fn store(context: &'static str) -> impl FnOnce(SupabaseError) -> ApiError {
        move |source| {
            tracing::error!("{}: {}", context, source);
            ApiError::Store { context, source }
        }
    }

    fn error_label(&self) -> String {
        match self {
            ApiError::Validation(_) => "Validation failed".to_string(),
            ApiError::NotFound(message) => message.clone(),
            ApiError::Store { context, .. } => context.to_string(),
            ApiError::InvalidJson(_) => "invalid_json".to_string(),
            ApiError::InvalidQuery(_) => "invalid_query".to_string(),
        }
    }

    fn detail(&self) -> String {
        match self {
            // Upstream detail stays in the log
            ApiError::Store { .. } => STORE_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.error_label(),
            message: self.detail(),
            status_code: self.status_code().as_u16(),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidJson(_) | ApiError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_response_body())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::InvalidQuery(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_body() {
        let err = ApiError::store("Failed to match donations")(SupabaseError::ApiError {
            status: 503,
            body: "unavailable".to_string(),
        });

        let body = err.to_response_body();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to match donations");
        assert_eq!(body.message, "An unexpected error occurred");
        assert!(!body.message.contains("unavailable"));
        assert!(err.to_string().contains("unavailable"));
        assert_eq!(body.status_code, 500);
    }

    #[test]
    fn test_not_found_body() {
        let err = ApiError::NotFound("Partner not found".to_string());
        let body = err.to_response_body();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Partner not found");
        assert_eq!(body.status_code, 404);
    }

    #[test]
    fn test_validation_status() {
        let err = ApiError::Validation("email: invalid".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_response_body().error, "Validation failed");
    }
}
