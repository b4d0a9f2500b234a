use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

use crate::domain::order::{FieldError, SubmissionError};

// ============================================================================
// HTTP Error Mapping
// ============================================================================
//
// 400 → {message, errors: [{field, reason}]}
// 404 → {message: "Order not found"}
// 500 → {message: "Internal server error"}, details stay in the logs
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Invalid request body")]
    MalformedBody(String),

    #[error("Order not found")]
    NotFound,

    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Invalid(errors) => ApiError::Validation(errors.field_errors()),
            SubmissionError::NotFound(_) => ApiError::NotFound,
            SubmissionError::Internal(e) => {
                tracing::error!(error = %e, "Request failed with internal error");
                ApiError::Internal
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let errors = match self {
            ApiError::Validation(errors) => Some(errors.clone()),
            ApiError::MalformedBody(reason) => Some(vec![FieldError {
                field: "body".to_string(),
                reason: reason.clone(),
            }]),
            ApiError::NotFound | ApiError::Internal => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use actix_web::body::to_bytes;

    async fn body_json(err: ApiError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let err = ApiError::from(SubmissionError::Internal(StoreError::Unavailable(
            "lock poisoned at 0xdeadbeef".to_string(),
        )));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(err).await;
        assert_eq!(body, serde_json::json!({"message": "Internal server error"}));
    }

    #[actix_web::test]
    async fn test_not_found_body() {
        let body = body_json(ApiError::NotFound).await;
        assert_eq!(body, serde_json::json!({"message": "Order not found"}));
    }

    #[actix_web::test]
    async fn test_malformed_body_reports_body_field() {
        let err = ApiError::MalformedBody("expected value at line 1 column 1".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = body_json(err).await;
        assert_eq!(body["errors"][0]["field"], "body");
    }
}
