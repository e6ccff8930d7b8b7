use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
};
use catalog::payloads::{RelayResponse, VerifyResponse};
use serde_json::Value;
use tracing::info;

use crate::{
    error::{RecaptchaError, RelayError},
    forms::{FormTarget, build_payload, fetch_fbzx, submit},
    recaptcha::verify_token,
    state::AppState,
    validation::validate,
};

pub async fn recaptcha_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<VerifyResponse>, RecaptchaError> {
    let body = body.map_err(|e| {
        state.report("Unreadable reCAPTCHA request", &e);
        RecaptchaError::Internal(e.into())
    })?;

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        state.report("Unreadable reCAPTCHA request", &e);
        RecaptchaError::Internal(e.into())
    })?;

    let token = payload
        .get("token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .ok_or(RecaptchaError::MissingToken)?;

    let secret = state
        .config
        .recaptcha_secret
        .as_deref()
        .ok_or(RecaptchaError::Configuration)?;

    let answer = verify_token(&state.http, &state.config.recaptcha_verify_url, secret, token)
        .await
        .map_err(|e| {
            state.report("reCAPTCHA verification failed", &e);
            RecaptchaError::Internal(e.into())
        })?;

    if !answer.success {
        state.report(
            "reCAPTCHA rejected",
            &format_args!("error codes {:?}", answer.error_codes),
        );
        return Err(RecaptchaError::Rejected);
    }

    info!(score = ?answer.score, action = ?answer.action, "reCAPTCHA verified");

    Ok(Json(VerifyResponse {
        ok: true,
        message: "Recaptcha verified!".to_string(),
    }))
}

pub async fn submit_form_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RelayResponse>, RelayError> {
    let body = body.map_err(|e| {
        state.report("Unreadable relay request", &e);
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RelayError::PayloadTooLarge
        } else {
            RelayError::MalformedPayload
        }
    })?;

    let payload: Value =
        serde_json::from_slice(&body).map_err(|_| RelayError::MalformedPayload)?;

    let submission = validate(&payload)?;

    let form_id = state
        .config
        .form_id
        .as_deref()
        .ok_or(RelayError::Configuration)?;

    let target = FormTarget::new(&state.config.forms_base_url, form_id);

    let fbzx = match &target.view_url {
        Some(view_url) => fetch_fbzx(&state.http, view_url)
            .await
            .map_err(|e| state.report("fbzx scrape skipped", &e))
            .ok(),
        None => None,
    };

    let form = build_payload(&submission, fbzx.as_deref());

    let status = submit(&state.http, &target.submit_url, &form)
        .await
        .map_err(|e| {
            state.report("Form relay failed", &e);
            RelayError::Internal(e.into())
        })?;

    if !status.is_success() {
        state.report("Forms backend refused submission", &status);
        return Err(RelayError::Upstream(status));
    }

    info!(app = submission.app(), "Contact form relayed");

    Ok(Json(RelayResponse {
        success: true,
        message: "Form submitted successfully".to_string(),
        status: None,
    }))
}
