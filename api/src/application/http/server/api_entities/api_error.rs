use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pawplan_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body shared by every non-2xx response.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    #[schema(example = "error")]
    pub status: String,
    #[schema(example = 400)]
    pub code: u16,
    #[schema(example = "Invalid breed 'Goldfish' for Fish")]
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiErrorResponse {
            status: "error".to_string(),
            code: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidPetData(e) => ApiError::BadRequest(e.to_string()),
            CoreError::ServiceUnavailable(message) => ApiError::InternalServerError(message),
            e @ CoreError::MalformedModelOutput { .. } => {
                ApiError::InternalServerError(e.to_string())
            }
            CoreError::ExternalServiceError(cause) => {
                ApiError::InternalServerError(format!("Error generating meal plan: {}", cause))
            }
        }
    }
}

/// JSON body extractor that also runs `validator` checks.
///
/// Both decode failures and failed checks are rejected as [`ApiError::BadRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use pawplan_core::domain::pet::entities::PetValidationError;

    use super::*;

    async fn body_of(error: ApiError) -> (StatusCode, ApiErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_pet_data_is_bad_request() {
        let error = ApiError::from(CoreError::from(PetValidationError::new(vec![
            "Invalid breed 'Goldfish' for Fish".to_string(),
            "Age must be a number".to_string(),
        ])));

        let (status, body) = body_of(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            ApiErrorResponse {
                status: "error".to_string(),
                code: 400,
                message: "Invalid breed 'Goldfish' for Fish\nAge must be a number".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_service_unavailable_keeps_its_message() {
        let error = ApiError::from(CoreError::ServiceUnavailable(
            "Lost connection to Ollama service.".to_string(),
        ));

        let (status, body) = body_of(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, 500);
        assert_eq!(body.message, "Lost connection to Ollama service.");
    }

    #[test]
    fn test_malformed_output_carries_raw_text() {
        let error = ApiError::from(CoreError::MalformedModelOutput {
            raw: "Sure thing!".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        });

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.to_string(),
            "Invalid JSON response from model: Sure thing!\nError: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_other_failures_are_wrapped() {
        let error = ApiError::from(CoreError::ExternalServiceError(
            "LLM request timed out".to_string(),
        ));

        assert_eq!(
            error.to_string(),
            "Error generating meal plan: LLM request timed out"
        );
    }
}
