use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog::payloads::{RelayResponse, VerifyResponse};
use thiserror::Error;

use crate::validation::FieldError;

#[derive(Error, Debug)]
pub enum RecaptchaError {
    #[error("No reCAPTCHA token provided")]
    MissingToken,

    #[error("Invalid reCAPTCHA")]
    Rejected,

    #[error("Server configuration error")]
    Configuration,

    #[error("Server error")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for RecaptchaError {
    fn into_response(self) -> Response {
        let status = match self {
            RecaptchaError::MissingToken | RecaptchaError::Rejected => StatusCode::BAD_REQUEST,
            RecaptchaError::Configuration | RecaptchaError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = VerifyResponse {
            ok: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid JSON body")]
    MalformedPayload,

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error(transparent)]
    Invalid(#[from] FieldError),

    #[error("Server configuration error")]
    Configuration,

    #[error("Failed to submit form")]
    Upstream(StatusCode),

    #[error("Server error")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, upstream) = match self {
            RelayError::MalformedPayload | RelayError::PayloadTooLarge | RelayError::Invalid(_) => {
                (StatusCode::BAD_REQUEST, None)
            }
            RelayError::Upstream(upstream) => (StatusCode::BAD_REQUEST, Some(upstream.as_u16())),
            RelayError::Configuration | RelayError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let body = RelayResponse {
            success: false,
            message: self.to_string(),
            status: upstream,
        };

        (status, Json(body)).into_response()
    }
}
